mod base;
pub mod format;
pub mod parasail;
pub mod request;
pub mod speech;
pub mod transport;

pub use base::{
    BaseTTS, BoxedTTS, DEFAULT_LANGUAGE, InvalidAuth, SUPPORTED_LANGUAGES, SynthesizedAudio,
    TTSConfig, TTSError, TTSResult, ValidationInfo,
};
pub use format::{AudioFormat, FallbackFormat, classify};
pub use parasail::{PARASAIL_TTS_MODELS, PARASAIL_TTS_STREAM_URL, ParasailTTS};
pub use request::{SynthesisRequest, Tuning};
pub use speech::{PARASAIL_SPEECH_URL, SpeechResponseFormat, SpeechTTS};
pub use transport::{HttpTransport, ReqwestTransport, TransportRequest, TransportResponse};
use std::collections::HashMap;

/// Factory function to create a TTS provider.
///
/// # Supported Providers
///
/// - `"parasail"` or `"parasail-stream"` - Parasail SSE streaming endpoint
/// - `"parasail-speech"` or `"openai-compatible"` - Parasail buffered
///   `/v1/audio/speech` endpoint
///
/// # Example
///
/// ```rust,ignore
/// use parasail_tts::core::tts::{create_tts_provider, TTSConfig};
///
/// let config = TTSConfig {
///     api_key: "your-api-key".to_string(),
///     voice_id: Some("oai_nova".to_string()),
///     ..Default::default()
/// };
///
/// let provider = create_tts_provider("parasail", config)?;
/// ```
pub fn create_tts_provider(provider_type: &str, config: TTSConfig) -> TTSResult<Box<dyn BaseTTS>> {
    match provider_type.to_lowercase().as_str() {
        "parasail" | "parasail-stream" | "parasail_stream" => {
            Ok(Box::new(ParasailTTS::new(config)?))
        }
        "parasail-speech" | "parasail_speech" | "openai-compatible" => {
            Ok(Box::new(SpeechTTS::new(config)?))
        }
        _ => Err(TTSError::InvalidConfiguration(format!(
            "Unsupported TTS provider: {provider_type}. Supported providers: parasail, parasail-speech"
        ))),
    }
}

/// Returns a map of provider names to their default API endpoint URLs.
pub fn get_tts_provider_urls() -> HashMap<String, String> {
    let mut urls = HashMap::new();
    urls.insert("parasail".to_string(), PARASAIL_TTS_STREAM_URL.to_string());
    urls.insert("parasail-speech".to_string(), PARASAIL_SPEECH_URL.to_string());
    urls
}
