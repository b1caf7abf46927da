//! Wire message types for the Parasail streaming TTS API.
//!
//! # Request
//!
//! ```json
//! {
//!   "temperature": 0.1,
//!   "text": "Hello world",
//!   "voice": "oai_nova",
//!   "exaggeration": 0.0,
//!   "cfg_weight": 3.0
//! }
//! ```
//!
//! # Response
//!
//! A `text/event-stream` body. Each meaningful line is `data: <json>`:
//!
//! ```text
//! data: {"type":"start","priority":"normal"}
//!
//! data: {"type":"audio","chunk":1,"audio_content":"UklGRiQAAAA="}
//!
//! data: {"type":"done"}
//! ```

use serde::Serialize;

use crate::core::tts::request::SynthesisRequest;

/// JSON body for `POST /api/tts-stream`
#[derive(Debug, Clone, Serialize)]
pub struct ParasailStreamRequest<'a> {
    pub temperature: f64,
    pub text: &'a str,
    pub voice: &'a str,
    pub exaggeration: f64,
    pub cfg_weight: f64,
}

impl<'a> From<&'a SynthesisRequest> for ParasailStreamRequest<'a> {
    fn from(request: &'a SynthesisRequest) -> Self {
        let tuning = request.tuning();
        Self {
            temperature: tuning.temperature,
            text: request.text(),
            voice: request.voice(),
            exaggeration: tuning.exaggeration,
            cfg_weight: tuning.cfg_weight,
        }
    }
}

/// One decoded audio slice
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioFragment {
    /// Sequence number from the wire; diagnostics only, never used for ordering
    pub chunk: Option<u64>,
    /// Raw decoded bytes
    pub data: Vec<u8>,
}

/// One event from the response stream
#[derive(Debug, Clone, PartialEq)]
pub enum StreamEvent {
    /// `{"type":"start"}`
    Start { priority: Option<String> },
    /// `{"type":"audio","audio_content":...}`
    Audio(AudioFragment),
    /// `{"type":"error"}`, carrying the whole event object
    Error { payload: serde_json::Value },
    /// `{"type":"done"}`
    Done,
    /// Any other event shape
    Unrecognized { payload: serde_json::Value },
}

impl StreamEvent {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Start { .. } => "start",
            Self::Audio(_) => "audio",
            Self::Error { .. } => "error",
            Self::Done => "done",
            Self::Unrecognized { .. } => "unrecognized",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tts::request::Tuning;

    #[test]
    fn test_request_serialization() {
        let request = SynthesisRequest::new("Hi there", "oai_nova", "parasail-resemble-tts-en")
            .unwrap()
            .with_tuning(Tuning {
                temperature: 0.5,
                exaggeration: 0.25,
                cfg_weight: 3.0,
            });

        let json = serde_json::to_value(ParasailStreamRequest::from(&request)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "temperature": 0.5,
                "text": "Hi there",
                "voice": "oai_nova",
                "exaggeration": 0.25,
                "cfg_weight": 3.0,
            })
        );
        // The streaming endpoint takes no model field
        assert!(json.get("model").is_none());
    }

    #[test]
    fn test_default_tuning_encodes_exact_decimals() {
        let request =
            SynthesisRequest::new("Hello", "oai_nova", "parasail-resemble-tts-en").unwrap();
        let encoded = serde_json::to_string(&ParasailStreamRequest::from(&request)).unwrap();
        assert_eq!(
            encoded,
            r#"{"temperature":0.1,"text":"Hello","voice":"oai_nova","exaggeration":0.0,"cfg_weight":3.0}"#
        );
    }

    #[test]
    fn test_event_kind() {
        assert_eq!(StreamEvent::Done.kind(), "done");
        assert_eq!(StreamEvent::Start { priority: None }.kind(), "start");
        let audio = StreamEvent::Audio(AudioFragment {
            chunk: Some(1),
            data: vec![],
        });
        assert_eq!(audio.kind(), "audio");
    }
}
