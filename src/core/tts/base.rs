//! # TTS Base Trait Implementation
//!
//! This module provides the base trait abstraction for the Parasail text-to-speech
//! providers. Both protocol variants (the SSE streaming endpoint and the buffered
//! OpenAI-compatible speech endpoint) implement [`BaseTTS`], so a host can hold a
//! `Box<dyn BaseTTS>` without caring which wire protocol is in use.
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use parasail_tts::core::tts::{create_tts_provider, TTSConfig};
//!
//! async fn example_usage() -> Option<(String, Vec<u8>)> {
//!     let config = TTSConfig {
//!         api_key: "your-api-key".to_string(),
//!         voice_id: Some("oai_nova".to_string()),
//!         ..Default::default()
//!     };
//!
//!     let tts = create_tts_provider("parasail", config).ok()?;
//!
//!     // Returns ("wav", bytes) on success, None (with a logged error) on failure
//!     tts.get_tts_audio("Hello, world!", "en").await
//! }
//! ```

use async_trait::async_trait;
use tracing::{debug, error};

use super::format::AudioFormat;

/// Languages every Parasail voice currently speaks
pub const SUPPORTED_LANGUAGES: &[&str] = &["en"];

/// Default language reported to the host
pub const DEFAULT_LANGUAGE: &str = "en";

/// Configuration for TTS providers
///
/// This is the read-only options store handed to a provider at construction.
/// Every field except `provider` and `api_key` is optional; providers fill in
/// their own defaults for anything left unset.
#[derive(Debug, Clone, Default)]
pub struct TTSConfig {
    /// Provider name (`parasail` or `parasail-speech`)
    pub provider: String,
    /// API key for the remote service
    pub api_key: String,
    /// Endpoint override (defaults to the provider's public URL)
    pub api_url: Option<String>,
    /// Voice identifier passed through to the API
    pub voice_id: Option<String>,
    /// Model identifier (e.g. `parasail-resemble-tts-en`)
    pub model: String,
    /// Sampling temperature
    pub temperature: Option<f64>,
    /// Emotion exaggeration
    pub exaggeration: Option<f64>,
    /// Classifier-free guidance weight
    pub cfg_weight: Option<f64>,
    /// Requested container format (buffered variant only)
    pub audio_format: Option<String>,
    /// Tag assumed when the returned bytes match no known magic number (`wav` or `mp3`)
    pub fallback_format: Option<String>,
    /// Whether synthesis requests carry `Authorization: Bearer <api_key>`.
    /// When unset, the header is sent whenever an API key is configured.
    pub auth_header: Option<bool>,
    /// Timeout in seconds for synthesis calls (default 30)
    pub request_timeout: Option<u64>,
    /// Timeout in seconds for credential validation calls (default 10)
    pub validation_timeout: Option<u64>,
}

/// Synthesized audio returned to the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesizedAudio {
    /// Container format detected from the leading bytes
    pub format: AudioFormat,
    /// Complete audio payload
    pub data: Vec<u8>,
}

impl SynthesizedAudio {
    pub fn new(format: AudioFormat, data: Vec<u8>) -> Self {
        Self { format, data }
    }

    /// Convert into the `(format, bytes)` pair hosts expect
    pub fn into_parts(self) -> (String, Vec<u8>) {
        (self.format.as_str().to_string(), self.data)
    }
}

/// TTS-specific error types
#[derive(Debug, Clone, thiserror::Error)]
pub enum TTSError {
    /// Transport-level failure: connection refused, DNS, timeout, broken body stream
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// The API answered with a non-200 status
    #[error("API request failed with status {status}: {body}")]
    RemoteRejected { status: u16, body: String },

    /// The stream carried an error-typed event
    #[error("API returned error event: {0}")]
    RemoteError(serde_json::Value),

    /// The stream ended without a single audio fragment
    #[error("No audio chunks received from API")]
    NoAudioReceived,

    /// A line failed to decode while validating strictly
    #[error("Malformed stream fragment: {0}")]
    MalformedFragment(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// Result type for TTS operations
pub type TTSResult<T> = Result<T, TTSError>;

/// Returned by credential validation for every terminal failure.
///
/// The display text is deliberately generic so a host can show it to a user
/// as-is; the underlying failure is available through `source()`.
#[derive(Debug, Clone, thiserror::Error)]
#[error("invalid credential")]
pub struct InvalidAuth {
    #[source]
    pub reason: TTSError,
}

impl InvalidAuth {
    pub fn new(reason: TTSError) -> Self {
        Self { reason }
    }
}

impl From<TTSError> for InvalidAuth {
    fn from(reason: TTSError) -> Self {
        Self::new(reason)
    }
}

/// Successful credential validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationInfo {
    /// Display title for the accepted credential, e.g. `Parasail TTS (oai_nova)`
    pub title: String,
}

/// Base trait for Parasail TTS providers
#[async_trait]
pub trait BaseTTS: Send + Sync {
    /// Perform one synthesis call end-to-end
    async fn synthesize(&self, text: &str) -> TTSResult<SynthesizedAudio>;

    /// Host-facing entry point.
    ///
    /// Never surfaces an error: every terminal failure is logged with full
    /// detail and reported as `None`.
    async fn get_tts_audio(&self, message: &str, language: &str) -> Option<(String, Vec<u8>)> {
        debug!(
            "Generating TTS audio for message: {} (language: {})",
            message, language
        );

        match self.synthesize(message).await {
            Ok(audio) => Some(audio.into_parts()),
            Err(e) => {
                error!(
                    "Error during TTS generation: {} (voice={}, message_length={})",
                    e,
                    self.voice(),
                    message.len()
                );
                None
            }
        }
    }

    /// Voice identifier used for synthesis
    fn voice(&self) -> &str;

    /// Model identifier used for synthesis
    fn model(&self) -> &str;

    /// Display name for the host entity
    fn name(&self) -> String {
        format!("Parasail TTS {}", self.model())
    }

    fn supported_languages(&self) -> &'static [&'static str] {
        SUPPORTED_LANGUAGES
    }

    fn default_language(&self) -> &'static str {
        DEFAULT_LANGUAGE
    }

    /// Get provider-specific information
    fn get_provider_info(&self) -> serde_json::Value;
}

/// Boxed TTS provider
pub type BoxedTTS = Box<dyn BaseTTS>;
