//! Configuration types for the buffered Parasail speech endpoint.
//!
//! This module contains configuration types for the OpenAI-compatible
//! `/audio/speech` route:
//! - Response format selection
//! - Resolved provider settings

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::tts::base::{TTSConfig, TTSError, TTSResult};
use crate::core::tts::format::FallbackFormat;
use crate::core::tts::parasail::{
    DEFAULT_MODEL, DEFAULT_REQUEST_TIMEOUT, DEFAULT_VOICE, endpoint_or,
};
use crate::core::tts::request::Tuning;

/// Parasail OpenAI-compatible speech endpoint (raw audio response)
pub const PARASAIL_SPEECH_URL: &str = "https://api.parasail.io/v1/audio/speech";

// =============================================================================
// Response Format
// =============================================================================

/// Container requested through `response_format`.
///
/// Only containers the format classifier recognizes are accepted, so the
/// returned tag always describes the bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpeechResponseFormat {
    /// MP3 format (server default)
    #[default]
    Mp3,
    /// WAV format
    Wav,
}

impl SpeechResponseFormat {
    /// Convert to the API parameter value.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mp3 => "mp3",
            Self::Wav => "wav",
        }
    }

    /// Parse from string; `None` for anything unsupported.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "mp3" | "mpeg" => Some(Self::Mp3),
            "wav" | "wave" => Some(Self::Wav),
            _ => None,
        }
    }

    /// Fallback tag matching this container
    pub fn as_fallback(&self) -> FallbackFormat {
        match self {
            Self::Mp3 => FallbackFormat::Mp3,
            Self::Wav => FallbackFormat::Wav,
        }
    }
}

impl std::fmt::Display for SpeechResponseFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// =============================================================================
// Provider Settings
// =============================================================================

/// Resolved settings for the buffered provider
#[derive(Debug, Clone, PartialEq)]
pub struct SpeechTTSConfig {
    pub api_url: String,
    pub model: String,
    pub voice: String,
    /// Omitted from the request when unset; the server then answers with MP3
    pub response_format: Option<SpeechResponseFormat>,
    pub temperature: f64,
    pub fallback_format: FallbackFormat,
    pub request_timeout: Duration,
}

impl Default for SpeechTTSConfig {
    fn default() -> Self {
        Self {
            api_url: PARASAIL_SPEECH_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            voice: DEFAULT_VOICE.to_string(),
            response_format: None,
            temperature: Tuning::default().temperature,
            fallback_format: FallbackFormat::Mp3,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl SpeechTTSConfig {
    pub fn from_tts_config(config: &TTSConfig) -> TTSResult<Self> {
        let defaults = Self::default();

        let response_format = match config.audio_format.as_deref() {
            None => None,
            Some(s) if s.trim().is_empty() => None,
            Some(s) => Some(SpeechResponseFormat::parse(s).ok_or_else(|| {
                TTSError::InvalidConfiguration(format!(
                    "Unsupported response format: {s}. Expected mp3 or wav"
                ))
            })?),
        };

        // An explicit fallback wins; otherwise assume whatever was requested
        let fallback_format = match config.fallback_format.as_deref() {
            Some(s) => FallbackFormat::parse(s).ok_or_else(|| {
                TTSError::InvalidConfiguration(format!(
                    "Unsupported fallback format: {s}. Expected wav or mp3"
                ))
            })?,
            None => response_format
                .map(|f| f.as_fallback())
                .unwrap_or(defaults.fallback_format),
        };

        Ok(Self {
            api_url: endpoint_or(config.api_url.as_deref(), PARASAIL_SPEECH_URL)?,
            model: if config.model.is_empty() {
                defaults.model
            } else {
                config.model.clone()
            },
            voice: config
                .voice_id
                .clone()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.voice),
            response_format,
            temperature: Tuning::from_config(config).temperature,
            fallback_format,
            request_timeout: config
                .request_timeout
                .filter(|s| *s > 0)
                .map(Duration::from_secs)
                .unwrap_or(defaults.request_timeout),
        })
    }
}
