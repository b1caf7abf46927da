//! Buffered Parasail TTS provider module.
//!
//! Uses Parasail's OpenAI-compatible Audio Speech API: one JSON POST, the whole
//! audio file in the response body. No fragments, no event stream.
//!
//! # Audio Formats
//!
//! mp3 (default), wav

mod config;
mod messages;
mod provider;

pub use config::{PARASAIL_SPEECH_URL, SpeechResponseFormat, SpeechTTSConfig};
pub use messages::SpeechRequest;
pub use provider::SpeechTTS;
