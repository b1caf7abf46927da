//! Wire message types for the buffered speech endpoint.
//!
//! ```json
//! {
//!   "model": "parasail-resemble-tts-en",
//!   "voice": "oai_nova",
//!   "input": "Hello world",
//!   "response_format": "mp3",
//!   "temperature": 0.1
//! }
//! ```
//!
//! The response body is the raw audio container.

use serde::Serialize;

use super::config::SpeechResponseFormat;

/// JSON body for `POST /v1/audio/speech`
#[derive(Debug, Clone, Serialize)]
pub struct SpeechRequest<'a> {
    pub model: &'a str,
    pub voice: &'a str,
    pub input: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_format: Option<SpeechResponseFormat>,
    pub temperature: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serialization() {
        let request = SpeechRequest {
            model: "parasail-resemble-tts-en",
            voice: "oai_nova",
            input: "Hello",
            response_format: Some(SpeechResponseFormat::Wav),
            temperature: 0.5,
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({
                "model": "parasail-resemble-tts-en",
                "voice": "oai_nova",
                "input": "Hello",
                "response_format": "wav",
                "temperature": 0.5,
            })
        );
    }

    #[test]
    fn test_response_format_omitted_when_unset() {
        let request = SpeechRequest {
            model: "m",
            voice: "v",
            input: "i",
            response_format: None,
            temperature: 0.1,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("response_format").is_none());
    }
}
