//! HTTP transport seam used by the providers.
//!
//! Providers only depend on [`HttpTransport`]: POST a JSON body with headers and
//! a timeout, get back a status code and a body that can be consumed either as
//! a stream of lines (SSE) or collected whole (buffered audio).
//! [`ReqwestTransport`] is the production implementation.

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use futures::stream::{self, BoxStream};
use futures::{StreamExt, TryStreamExt};
use tokio_util::codec::{FramedRead, LinesCodec, LinesCodecError};
use tokio_util::io::StreamReader;
use tracing::debug;

use super::base::{TTSError, TTSResult};

/// Longest single line accepted from an event stream (16 MiB)
pub const MAX_LINE_BYTES: usize = 16 * 1024 * 1024;

/// Response body as a stream of byte chunks
pub type ByteStream = BoxStream<'static, TTSResult<Bytes>>;

/// Response body as a stream of text lines
pub type LineStream = BoxStream<'static, TTSResult<String>>;

/// Outbound JSON POST
#[derive(Debug, Clone)]
pub struct TransportRequest {
    pub url: String,
    pub body: serde_json::Value,
    pub headers: Vec<(String, String)>,
    pub timeout: Duration,
}

impl TransportRequest {
    pub fn new(url: impl Into<String>, body: serde_json::Value, timeout: Duration) -> Self {
        Self {
            url: url.into(),
            body,
            headers: vec![("Content-Type".to_string(), "application/json".to_string())],
            timeout,
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn with_bearer(self, api_key: &str) -> Self {
        self.with_header("Authorization", format!("Bearer {api_key}"))
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Inbound response: status plus an unread body
pub struct TransportResponse {
    status: u16,
    body: ByteStream,
}

impl std::fmt::Debug for TransportResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransportResponse")
            .field("status", &self.status)
            .finish_non_exhaustive()
    }
}

impl TransportResponse {
    pub fn new(status: u16, body: ByteStream) -> Self {
        Self { status, body }
    }

    /// Response whose body is already in memory
    pub fn from_bytes(status: u16, body: impl Into<Bytes>) -> Self {
        let body: Bytes = body.into();
        Self::new(status, stream::once(async move { Ok::<_, TTSError>(body) }).boxed())
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    /// Only 200 counts as success for synthesis calls
    pub fn is_success(&self) -> bool {
        self.status == 200
    }

    /// Collect the whole body
    pub async fn bytes(self) -> TTSResult<Vec<u8>> {
        let mut body = self.body;
        let mut data = Vec::new();
        while let Some(chunk) = body.next().await {
            data.extend_from_slice(&chunk?);
        }
        Ok(data)
    }

    /// Collect the body as text for error reporting. Never fails.
    pub async fn text(self) -> String {
        match self.bytes().await {
            Ok(data) => String::from_utf8_lossy(&data).into_owned(),
            Err(e) => format!("<failed to read response body: {e}>"),
        }
    }

    /// Split the body into lines as bytes arrive.
    ///
    /// Line terminators (`\n` or `\r\n`) are stripped. A final line without a
    /// terminator is still yielded at end of stream.
    pub fn lines(self) -> LineStream {
        let reader = StreamReader::new(self.body.map_err(std::io::Error::other));
        FramedRead::new(reader, LinesCodec::new_with_max_length(MAX_LINE_BYTES))
            .map_err(|e| match e {
                LinesCodecError::MaxLineLengthExceeded => TTSError::ConnectionFailed(format!(
                    "Event stream line exceeded {MAX_LINE_BYTES} bytes"
                )),
                LinesCodecError::Io(e) => {
                    TTSError::ConnectionFailed(format!("Failed to read response stream: {e}"))
                }
            })
            .boxed()
    }
}

/// Minimal HTTP contract the providers depend on
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Send one JSON POST and return once status and headers are available
    async fn post_json(&self, request: TransportRequest) -> TTSResult<TransportResponse>;
}

/// `reqwest`-backed transport with a shared connection pool
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> TTSResult<Self> {
        let client = reqwest::Client::builder()
            .pool_idle_timeout(Duration::from_secs(90))
            .build()
            .map_err(|e| {
                TTSError::InvalidConfiguration(format!("Failed to build HTTP client: {e}"))
            })?;
        Ok(Self { client })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn post_json(&self, request: TransportRequest) -> TTSResult<TransportResponse> {
        debug!("POST {} (timeout {:?})", request.url, request.timeout);

        let mut builder = self.client.post(&request.url).timeout(request.timeout);
        // Headers go first so `.json()` does not add a second Content-Type
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        let builder = builder.json(&request.body);

        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                TTSError::ConnectionFailed(format!("Request timed out: {e}"))
            } else {
                TTSError::ConnectionFailed(format!("Request failed: {e}"))
            }
        })?;

        let status = response.status().as_u16();
        let body = response
            .bytes_stream()
            .map_err(|e| TTSError::ConnectionFailed(format!("Failed to read response body: {e}")))
            .boxed();

        Ok(TransportResponse::new(status, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chunked(parts: &[&'static str]) -> TransportResponse {
        let chunks: Vec<TTSResult<Bytes>> = parts
            .iter()
            .map(|p| Ok(Bytes::from_static(p.as_bytes())))
            .collect();
        TransportResponse::new(200, stream::iter(chunks).boxed())
    }

    #[tokio::test]
    async fn test_lines_across_chunk_boundaries() {
        let response = chunked(&["data: {\"ty", "pe\":\"start\"}\r\n", "\nda", "ta: x"]);
        let lines: Vec<String> = response.lines().try_collect().await.unwrap();
        assert_eq!(lines, vec!["data: {\"type\":\"start\"}", "", "data: x"]);
    }

    #[tokio::test]
    async fn test_bytes_and_text() {
        let response = TransportResponse::from_bytes(401, "Unauthorized");
        assert_eq!(response.status(), 401);
        assert!(!response.is_success());
        assert_eq!(response.text().await, "Unauthorized");

        let response = chunked(&["ab", "cd"]);
        assert_eq!(response.bytes().await.unwrap(), b"abcd".to_vec());
    }

    #[tokio::test]
    async fn test_body_error_surfaces_as_connection_failed() {
        let chunks: Vec<TTSResult<Bytes>> = vec![
            Ok(Bytes::from_static(b"data: a\n")),
            Err(TTSError::ConnectionFailed("reset".to_string())),
        ];
        let response = TransportResponse::new(200, stream::iter(chunks).boxed());
        let mut lines = response.lines();
        assert_eq!(lines.next().await.unwrap().unwrap(), "data: a");
        assert!(matches!(
            lines.next().await.unwrap(),
            Err(TTSError::ConnectionFailed(_))
        ));
    }

    #[test]
    fn test_request_headers() {
        let request = TransportRequest::new(
            "https://example.com",
            serde_json::json!({}),
            Duration::from_secs(10),
        )
        .with_bearer("key");
        assert_eq!(request.header("content-type"), Some("application/json"));
        assert_eq!(request.header("Authorization"), Some("Bearer key"));
        assert_eq!(request.header("X-Missing"), None);
    }
}
