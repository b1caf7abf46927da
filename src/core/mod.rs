pub mod tts;

// Re-export commonly used types for convenience
pub use tts::{
    AudioFormat, BaseTTS, BoxedTTS, FallbackFormat, InvalidAuth, ParasailTTS, SUPPORTED_LANGUAGES,
    SpeechTTS, SynthesizedAudio, TTSConfig, TTSError, TTSResult, ValidationInfo,
    create_tts_provider, get_tts_provider_urls,
};
