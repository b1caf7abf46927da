//! Fragment decoder: one SSE line in, one [`StreamEvent`] out.
//!
//! Decoding faults are returned as [`FragmentError`]. They describe a single bad
//! line; whether that line aborts the stream is the reassembler's decision.

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use serde_json::Value;

use super::messages::{AudioFragment, StreamEvent};

/// Prefix marking an SSE data line
pub const DATA_PREFIX: &str = "data: ";

/// Per-line decoding failure
#[derive(Debug, thiserror::Error)]
pub enum FragmentError {
    #[error("Failed to parse SSE event JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to decode base64 audio content: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("audio_content is not a string")]
    AudioContentNotString,
}

/// Decode one line of the response body.
///
/// Returns `Ok(None)` for anything that is not a `data: ` line (blank
/// separators, comments, `event:` fields).
pub fn decode_line(line: &str) -> Result<Option<StreamEvent>, FragmentError> {
    match line.trim().strip_prefix(DATA_PREFIX) {
        Some(json) => decode_event(json).map(Some),
        None => Ok(None),
    }
}

/// Decode the JSON payload of a data line
pub fn decode_event(json: &str) -> Result<StreamEvent, FragmentError> {
    let payload: Value = serde_json::from_str(json)?;

    let event = match payload.get("type").and_then(Value::as_str) {
        Some("audio") => match payload.get("audio_content") {
            Some(content) => {
                let encoded = content
                    .as_str()
                    .ok_or(FragmentError::AudioContentNotString)?;
                StreamEvent::Audio(AudioFragment {
                    chunk: payload.get("chunk").and_then(Value::as_u64),
                    data: decode_audio_content(encoded)?,
                })
            }
            None => StreamEvent::Unrecognized { payload },
        },
        Some("error") => StreamEvent::Error { payload },
        Some("start") => StreamEvent::Start {
            priority: payload
                .get("priority")
                .and_then(Value::as_str)
                .map(str::to_string),
        },
        Some("done") => StreamEvent::Done,
        _ => StreamEvent::Unrecognized { payload },
    };

    Ok(event)
}

/// Standard base64 decode of an `audio_content` value
#[inline]
pub fn decode_audio_content(encoded: &str) -> Result<Vec<u8>, base64::DecodeError> {
    BASE64.decode(encoded)
}
