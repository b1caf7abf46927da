//! Configuration module for the Parasail TTS client
//!
//! This module handles client configuration from various sources: .env files, YAML files,
//! and environment variables. Priority: YAML > ENV vars > .env values > defaults.
//!
//! # Modules
//! - `yaml`: YAML configuration file loading
//! - `env`: Environment variable loading
//! - `merge`: Merging YAML and environment configurations
//! - `validation`: Configuration validation logic
//! - `utils`: Utility functions for configuration parsing
//!
//! # Example
//! ```rust,no_run
//! use parasail_tts::config::ClientConfig;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Load from environment variables only
//! let config = ClientConfig::from_env()?;
//!
//! // Load from YAML file with environment variable fallbacks
//! let config_path = PathBuf::from("parasail.yaml");
//! let config = ClientConfig::from_file(&config_path)?;
//!
//! println!("Using voice {}", config.voice);
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

use crate::core::tts::TTSConfig;

mod env;
mod merge;
mod utils;
mod validation;
mod yaml;

pub use env::ENV_VARS;
pub use merge::DEFAULT_PROVIDER;
pub use utils::parse_bool;

/// Client configuration
///
/// Everything a host needs to build a provider:
/// - Provider selection and endpoint
/// - Credentials
/// - Voice, model and tuning parameters
/// - Timeouts
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// `parasail` (streaming) or `parasail-speech` (buffered)
    pub provider: String,
    pub api_key: Option<String>,
    /// Endpoint override; `None` uses the provider's public URL
    pub api_url: Option<String>,
    /// Send the bearer header on synthesis calls.
    /// `None` means "whenever an API key is configured".
    pub auth_header: Option<bool>,

    pub model: String,
    pub voice: String,
    pub temperature: f64,
    pub exaggeration: f64,
    pub cfg_weight: f64,
    /// Requested container (buffered provider only)
    pub response_format: Option<String>,
    /// Tag assumed for unrecognized audio; provider default when unset
    pub fallback_format: Option<String>,

    pub request_timeout_seconds: u64,
    pub validation_timeout_seconds: u64,
}

/// Zeroize the API key when the configuration is dropped.
impl Drop for ClientConfig {
    fn drop(&mut self) {
        use zeroize::Zeroize;

        if let Some(ref mut key) = self.api_key {
            key.zeroize();
        }
    }
}

impl ClientConfig {
    /// Load configuration from a YAML file with environment variable base
    ///
    /// Priority order (highest to lowest):
    /// 1. YAML file values
    /// 2. Environment variables (actual ENV vars override .env values)
    /// 3. .env file values
    /// 4. Default values
    ///
    /// After loading and merging, performs validation on the final configuration.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The YAML file cannot be read or is malformed
    /// - Environment variables have invalid formats
    /// - Configuration validation fails
    pub fn from_file(path: &PathBuf) -> Result<Self, Box<dyn std::error::Error>> {
        // Note: .env file is loaded in main.rs at application startup
        let yaml_config = yaml::YamlConfig::from_file(path)?;

        let config = merge::merge_config(Some(yaml_config))?;
        validation::validate_config(&config)?;

        Ok(config)
    }

    /// Whether the buffered speech endpoint is selected
    pub fn is_buffered(&self) -> bool {
        matches!(
            self.provider.to_lowercase().as_str(),
            "parasail-speech" | "parasail_speech" | "openai-compatible"
        )
    }

    /// Build the options store handed to a provider
    pub fn tts_config(&self) -> TTSConfig {
        TTSConfig {
            provider: self.provider.clone(),
            api_key: self.api_key.clone().unwrap_or_default(),
            api_url: self.api_url.clone(),
            voice_id: Some(self.voice.clone()),
            model: self.model.clone(),
            temperature: Some(self.temperature),
            exaggeration: Some(self.exaggeration),
            cfg_weight: Some(self.cfg_weight),
            audio_format: self.response_format.clone(),
            fallback_format: self.fallback_format.clone(),
            auth_header: self.auth_header,
            request_timeout: Some(self.request_timeout_seconds),
            validation_timeout: Some(self.validation_timeout_seconds),
        }
    }

    /// Build the options store with a different voice
    pub fn tts_config_with_voice(&self, voice: &str) -> TTSConfig {
        TTSConfig {
            voice_id: Some(voice.to_string()),
            ..self.tts_config()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::fs;
    use tempfile::TempDir;

    fn clear_env() {
        for name in ENV_VARS {
            unsafe {
                std::env::remove_var(name);
            }
        }
    }

    fn write_config(dir: &TempDir, contents: &str) -> PathBuf {
        let path = dir.path().join("parasail.yaml");
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    #[serial]
    fn test_from_file_full() {
        clear_env();
        let temp_dir = TempDir::new().unwrap();
        let path = write_config(
            &temp_dir,
            r#"
provider:
  name: "parasail-speech"
  api_url: "https://api.parasail.io/v1/audio/speech"
credentials:
  api_key: "psk-file"
voice:
  voice: "oai_alloy"
  response_format: "wav"
timeouts:
  request_seconds: 20
"#,
        );

        let config = ClientConfig::from_file(&path).unwrap();
        assert!(config.is_buffered());
        assert_eq!(config.api_key.as_deref(), Some("psk-file"));
        assert_eq!(config.voice, "oai_alloy");
        assert_eq!(config.request_timeout_seconds, 20);
        assert_eq!(config.validation_timeout_seconds, 10);
    }

    #[test]
    #[serial]
    fn test_from_file_env_fills_gaps() {
        clear_env();
        unsafe {
            std::env::set_var("PARASAIL_API_KEY", "psk-env");
            std::env::set_var("PARASAIL_VOICE", "oai_echo");
        }
        let temp_dir = TempDir::new().unwrap();
        let path = write_config(&temp_dir, "voice:\n  voice: \"oai_shimmer\"\n");

        let config = ClientConfig::from_file(&path).unwrap();
        assert_eq!(config.api_key.as_deref(), Some("psk-env"));
        assert_eq!(config.voice, "oai_shimmer");
        assert!(!config.is_buffered());

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_file_rejects_plain_http() {
        clear_env();
        let temp_dir = TempDir::new().unwrap();
        let path = write_config(
            &temp_dir,
            "provider:\n  api_url: \"http://voice-demo.parasail.io/api/tts-stream\"\n",
        );

        let err = ClientConfig::from_file(&path).unwrap_err();
        assert!(err.to_string().contains("Invalid API URL"));
    }

    #[test]
    #[serial]
    fn test_from_file_rejects_zero_timeout() {
        clear_env();
        let temp_dir = TempDir::new().unwrap();
        let path = write_config(&temp_dir, "timeouts:\n  validation_seconds: 0\n");

        let err = ClientConfig::from_file(&path).unwrap_err();
        assert!(err.to_string().contains("validation timeout"));
    }

    #[test]
    #[serial]
    fn test_from_file_rejects_unknown_provider() {
        clear_env();
        let temp_dir = TempDir::new().unwrap();
        let path = write_config(&temp_dir, "provider:\n  name: \"elevenlabs\"\n");

        assert!(ClientConfig::from_file(&path).is_err());
    }

    #[test]
    #[serial]
    fn test_tts_config_mapping() {
        clear_env();
        let temp_dir = TempDir::new().unwrap();
        let path = write_config(
            &temp_dir,
            r#"
provider:
  auth_header: true
credentials:
  api_key: "psk-map"
voice:
  temperature: 0.5
  fallback_format: "mp3"
"#,
        );

        let config = ClientConfig::from_file(&path).unwrap();
        let tts = config.tts_config();
        assert_eq!(tts.provider, "parasail");
        assert_eq!(tts.api_key, "psk-map");
        assert_eq!(tts.voice_id.as_deref(), Some("oai_nova"));
        assert_eq!(tts.temperature, Some(0.5));
        assert_eq!(tts.fallback_format.as_deref(), Some("mp3"));
        assert_eq!(tts.auth_header, Some(true));
        assert_eq!(tts.request_timeout, Some(30));

        let tts = config.tts_config_with_voice("oai_onyx");
        assert_eq!(tts.voice_id.as_deref(), Some("oai_onyx"));
        assert_eq!(tts.api_key, "psk-map");
    }
}
