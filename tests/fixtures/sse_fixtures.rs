//! Event-stream fixtures for the Parasail streaming endpoint
//!
//! Builders return single `data: ` lines; [`sse_body`] joins them with the
//! blank-line separators the service sends.

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};

pub fn start_event() -> String {
    r#"data: {"type":"start","priority":"normal"}"#.to_string()
}

pub fn audio_event(chunk: u64, bytes: &[u8]) -> String {
    format!(
        r#"data: {{"type":"audio","chunk":{},"audio_content":"{}"}}"#,
        chunk,
        BASE64.encode(bytes)
    )
}

pub fn error_event(message: &str) -> String {
    format!(
        r#"data: {{"type":"error","message":{}}}"#,
        serde_json::Value::String(message.to_string())
    )
}

pub fn done_event() -> String {
    r#"data: {"type":"done"}"#.to_string()
}

/// Split `audio` into `chunk_size` pieces, one audio event each, numbered from 1
pub fn audio_events(audio: &[u8], chunk_size: usize) -> Vec<String> {
    audio
        .chunks(chunk_size)
        .enumerate()
        .map(|(i, chunk)| audio_event(i as u64 + 1, chunk))
        .collect()
}

/// Join event lines into a response body
pub fn sse_body(lines: &[String]) -> String {
    let mut body = String::new();
    for line in lines {
        body.push_str(line);
        body.push_str("\n\n");
    }
    body
}

/// A complete successful stream: start, audio in chunks, done
pub fn full_stream(audio: &[u8], chunk_size: usize) -> String {
    let mut lines = vec![start_event()];
    lines.extend(audio_events(audio, chunk_size));
    lines.push(done_event());
    sse_body(&lines)
}
