//! Configuration types for the Parasail streaming TTS endpoint.

use std::time::Duration;

use tracing::warn;

use crate::core::tts::base::{TTSConfig, TTSError, TTSResult};
use crate::core::tts::format::FallbackFormat;
use crate::core::tts::request::Tuning;
use crate::utils::url_validation::validate_api_url;

/// Parasail streaming TTS endpoint (SSE response)
pub const PARASAIL_TTS_STREAM_URL: &str = "https://voice-demo.parasail.io/api/tts-stream";

pub const DEFAULT_MODEL: &str = "parasail-resemble-tts-en";
pub const DEFAULT_VOICE: &str = "oai_nova";

/// Available TTS models on Parasail
pub const PARASAIL_TTS_MODELS: &[&str] = &["parasail-resemble-tts-en"];

/// Text synthesized when checking a credential
pub const VALIDATION_TEXT: &str = "Test";

pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_VALIDATION_TIMEOUT: Duration = Duration::from_secs(10);

/// Whether `model` is one Parasail documents for TTS
pub fn is_known_model(model: &str) -> bool {
    PARASAIL_TTS_MODELS.contains(&model)
}

/// Resolved settings for the streaming provider.
///
/// Built once from the generic [`TTSConfig`]; every default is applied here so
/// the request path never looks at optional fields.
#[derive(Debug, Clone, PartialEq)]
pub struct ParasailTTSConfig {
    pub api_url: String,
    pub voice: String,
    pub model: String,
    pub tuning: Tuning,
    /// Send `Authorization: Bearer` on synthesis calls
    pub auth_header: bool,
    pub fallback_format: FallbackFormat,
    pub request_timeout: Duration,
    pub validation_timeout: Duration,
}

impl Default for ParasailTTSConfig {
    fn default() -> Self {
        Self {
            api_url: PARASAIL_TTS_STREAM_URL.to_string(),
            voice: DEFAULT_VOICE.to_string(),
            model: DEFAULT_MODEL.to_string(),
            tuning: Tuning::default(),
            auth_header: false,
            fallback_format: FallbackFormat::Wav,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            validation_timeout: DEFAULT_VALIDATION_TIMEOUT,
        }
    }
}

impl ParasailTTSConfig {
    pub fn from_tts_config(config: &TTSConfig) -> TTSResult<Self> {
        let model = if config.model.is_empty() {
            DEFAULT_MODEL.to_string()
        } else {
            config.model.clone()
        };
        if !is_known_model(&model) {
            warn!(
                "Model '{}' is not a known Parasail TTS model (known: {:?})",
                model, PARASAIL_TTS_MODELS
            );
        }

        let voice = config
            .voice_id
            .as_deref()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(DEFAULT_VOICE)
            .to_string();

        let fallback_format = match config.fallback_format.as_deref() {
            None => FallbackFormat::Wav,
            Some(s) => FallbackFormat::parse(s).ok_or_else(|| {
                TTSError::InvalidConfiguration(format!(
                    "Unsupported fallback format: {s}. Expected wav or mp3"
                ))
            })?,
        };

        Ok(Self {
            api_url: endpoint_or(config.api_url.as_deref(), PARASAIL_TTS_STREAM_URL)?,
            voice,
            model,
            tuning: Tuning::from_config(config),
            auth_header: config
                .auth_header
                .unwrap_or_else(|| !config.api_key.is_empty()),
            fallback_format,
            request_timeout: timeout_or(config.request_timeout, DEFAULT_REQUEST_TIMEOUT),
            validation_timeout: timeout_or(config.validation_timeout, DEFAULT_VALIDATION_TIMEOUT),
        })
    }
}

/// Configured endpoint after the URL policy check, or `default`
pub(crate) fn endpoint_or(api_url: Option<&str>, default: &str) -> TTSResult<String> {
    match api_url {
        None => Ok(default.to_string()),
        Some(url) => validate_api_url(url)
            .map(|_| url.to_string())
            .map_err(|e| TTSError::InvalidConfiguration(format!("Invalid API URL {url}: {e}"))),
    }
}

fn timeout_or(seconds: Option<u64>, default: Duration) -> Duration {
    seconds
        .filter(|s| *s > 0)
        .map(Duration::from_secs)
        .unwrap_or(default)
}
