use std::ops::RangeInclusive;

use tracing::warn;

use super::ClientConfig;
use crate::core::tts::format::FallbackFormat;
use crate::core::tts::parasail::{PARASAIL_TTS_MODELS, is_known_model};
use crate::core::tts::request::{CFG_WEIGHT_RANGE, EXAGGERATION_RANGE, TEMPERATURE_RANGE};
use crate::core::tts::speech::SpeechResponseFormat;
use crate::utils::url_validation::validate_api_url;

/// Provider names accepted in configuration
pub const KNOWN_PROVIDERS: &[&str] = &[
    "parasail",
    "parasail-stream",
    "parasail_stream",
    "parasail-speech",
    "parasail_speech",
    "openai-compatible",
];

/// Run every check on a merged configuration
pub fn validate_config(config: &ClientConfig) -> Result<(), Box<dyn std::error::Error>> {
    validate_provider(&config.provider)?;
    validate_tuning("temperature", config.temperature, &TEMPERATURE_RANGE)?;
    validate_tuning("exaggeration", config.exaggeration, &EXAGGERATION_RANGE)?;
    validate_tuning("cfg_weight", config.cfg_weight, &CFG_WEIGHT_RANGE)?;
    validate_timeout("request timeout", config.request_timeout_seconds)?;
    validate_timeout("validation timeout", config.validation_timeout_seconds)?;
    validate_endpoint(&config.api_url)?;
    validate_formats(&config.response_format, &config.fallback_format)?;
    warn_unknown_model(&config.model);
    Ok(())
}

/// Provider name must be one the factory can build
pub fn validate_provider(provider: &str) -> Result<(), Box<dyn std::error::Error>> {
    if KNOWN_PROVIDERS.contains(&provider.to_lowercase().as_str()) {
        Ok(())
    } else {
        Err(format!(
            "Unsupported provider '{provider}'. Supported providers: parasail, parasail-speech"
        )
        .into())
    }
}

/// Tuning values must be finite and inside their documented range
pub fn validate_tuning(
    name: &str,
    value: f64,
    range: &RangeInclusive<f64>,
) -> Result<(), Box<dyn std::error::Error>> {
    if !value.is_finite() || !range.contains(&value) {
        return Err(format!(
            "Invalid {name} {value}: must be between {} and {}",
            range.start(),
            range.end()
        )
        .into());
    }
    Ok(())
}

pub fn validate_timeout(name: &str, seconds: u64) -> Result<(), Box<dyn std::error::Error>> {
    if seconds == 0 {
        return Err(format!("Invalid {name}: must be greater than 0 seconds").into());
    }
    Ok(())
}

/// An endpoint override must parse and use HTTPS (plain HTTP only on loopback)
pub fn validate_endpoint(api_url: &Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(url) = api_url {
        validate_api_url(url).map_err(|e| format!("Invalid API URL '{url}': {e}"))?;
    }
    Ok(())
}

pub fn validate_formats(
    response_format: &Option<String>,
    fallback_format: &Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(format) = response_format
        && SpeechResponseFormat::parse(format).is_none()
    {
        return Err(format!("Invalid response format '{format}': expected mp3 or wav").into());
    }
    if let Some(format) = fallback_format
        && FallbackFormat::parse(format).is_none()
    {
        return Err(format!("Invalid fallback format '{format}': expected wav or mp3").into());
    }
    Ok(())
}

/// Unknown models are passed through; the remote service decides
pub fn warn_unknown_model(model: &str) {
    if !is_known_model(model) {
        warn!(
            "Configured model '{}' is not a known Parasail TTS model (known: {:?})",
            model, PARASAIL_TTS_MODELS
        );
    }
}
