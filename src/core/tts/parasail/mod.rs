//! Parasail streaming TTS provider module.
//!
//! This module talks to Parasail's `tts-stream` endpoint, which answers a
//! single POST with a server-sent event stream of base64 audio fragments.
//!
//! # Pipeline
//!
//! - [`decoder`] turns one `data: <json>` line into a [`StreamEvent`]
//! - [`reassembler`] concatenates audio fragments in arrival order
//! - [`ParasailTTS`] issues the request, drives the two above, and tags the
//!   result with [`classify`](crate::core::tts::format::classify)
//!
//! # Supported Models
//!
//! - `parasail-resemble-tts-en`
//!
//! # Example
//!
//! ```rust,ignore
//! use parasail_tts::core::tts::{BaseTTS, ParasailTTS, TTSConfig};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = TTSConfig {
//!         api_key: "psk-...".to_string(),
//!         voice_id: Some("oai_nova".to_string()),
//!         ..Default::default()
//!     };
//!
//!     let tts = ParasailTTS::new(config).unwrap();
//!     let audio = tts.synthesize("Hello, world!").await.unwrap();
//!     println!("{} bytes of {}", audio.data.len(), audio.format);
//! }
//! ```

mod config;
pub mod decoder;
mod messages;
mod provider;
pub mod reassembler;

pub use config::{
    DEFAULT_MODEL, DEFAULT_REQUEST_TIMEOUT, DEFAULT_VALIDATION_TIMEOUT, DEFAULT_VOICE,
    PARASAIL_TTS_MODELS, PARASAIL_TTS_STREAM_URL, ParasailTTSConfig,
    VALIDATION_TEXT, is_known_model,
};
pub(crate) use config::endpoint_or;
pub use decoder::{FragmentError, decode_audio_content, decode_event, decode_line};
pub use messages::{AudioFragment, ParasailStreamRequest, StreamEvent};
pub use provider::ParasailTTS;
pub use reassembler::{DecodePolicy, Progress, Reassembler, reassemble};
