use std::env;

use super::ClientConfig;
use super::env::*;
use super::utils::{parse_env, parse_env_bool};
use super::yaml::YamlConfig;
use crate::core::tts::parasail::{
    DEFAULT_MODEL, DEFAULT_REQUEST_TIMEOUT, DEFAULT_VALIDATION_TIMEOUT, DEFAULT_VOICE,
};
use crate::core::tts::request::{DEFAULT_CFG_WEIGHT, DEFAULT_EXAGGERATION, DEFAULT_TEMPERATURE};

/// Provider used when neither YAML nor the environment names one
pub const DEFAULT_PROVIDER: &str = "parasail";

/// Merge YAML configuration with environment variables
///
/// Priority order (highest to lowest):
/// 1. YAML configuration values
/// 2. Environment variables
/// 3. Default values
///
/// # Arguments
/// * `yaml_config` - Optional YAML configuration to use as overrides
///
/// # Returns
/// * `Result<ClientConfig, Box<dyn std::error::Error>>` - The merged configuration or an error
pub fn merge_config(
    yaml_config: Option<YamlConfig>,
) -> Result<ClientConfig, Box<dyn std::error::Error>> {
    let yaml = yaml_config.unwrap_or_default();

    // Helper macro to get value with priority: YAML > ENV > Default
    macro_rules! get_value {
        ($env_var:expr, $yaml_value:expr, $default:expr) => {
            $yaml_value
                .or_else(|| env::var($env_var).ok())
                .unwrap_or_else(|| $default.to_string())
        };
    }

    // Helper macro for optional values: YAML > ENV
    macro_rules! get_optional {
        ($env_var:expr, $yaml_value:expr) => {
            $yaml_value.or_else(|| env::var($env_var).ok())
        };
    }

    // Helper macro for parsed values: YAML > parsed ENV > Default
    macro_rules! get_parsed {
        ($env_var:expr, $yaml_value:expr, $default:expr) => {
            match $yaml_value {
                Some(value) => value,
                None => parse_env($env_var)?.unwrap_or($default),
            }
        };
    }

    let provider = yaml.provider.unwrap_or_default();
    let credentials = yaml.credentials.unwrap_or_default();
    let voice = yaml.voice.unwrap_or_default();
    let timeouts = yaml.timeouts.unwrap_or_default();

    let auth_header = match provider.auth_header {
        Some(value) => Some(value),
        None => parse_env_bool(ENV_AUTH_HEADER)?,
    };

    Ok(ClientConfig {
        provider: get_value!(ENV_PROVIDER, provider.name, DEFAULT_PROVIDER),
        api_key: get_optional!(ENV_API_KEY, credentials.api_key).filter(|k| !k.is_empty()),
        api_url: get_optional!(ENV_API_URL, provider.api_url),
        auth_header,
        model: get_value!(ENV_MODEL, voice.model, DEFAULT_MODEL),
        voice: get_value!(ENV_VOICE, voice.voice, DEFAULT_VOICE),
        temperature: get_parsed!(ENV_TEMPERATURE, voice.temperature, DEFAULT_TEMPERATURE),
        exaggeration: get_parsed!(ENV_EXAGGERATION, voice.exaggeration, DEFAULT_EXAGGERATION),
        cfg_weight: get_parsed!(ENV_CFG_WEIGHT, voice.cfg_weight, DEFAULT_CFG_WEIGHT),
        response_format: get_optional!(ENV_RESPONSE_FORMAT, voice.response_format),
        fallback_format: get_optional!(ENV_FALLBACK_FORMAT, voice.fallback_format),
        request_timeout_seconds: get_parsed!(
            ENV_REQUEST_TIMEOUT,
            timeouts.request_seconds,
            DEFAULT_REQUEST_TIMEOUT.as_secs()
        ),
        validation_timeout_seconds: get_parsed!(
            ENV_VALIDATION_TIMEOUT,
            timeouts.validation_seconds,
            DEFAULT_VALIDATION_TIMEOUT.as_secs()
        ),
    })
}
