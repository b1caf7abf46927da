//! URL validation for configured API endpoints
//!
//! Endpoint overrides come from YAML or the environment and end up carrying a
//! bearer token. A valid endpoint:
//! - parses as an absolute URL with a host
//! - uses HTTPS, except for loopback hosts where plain HTTP is allowed for
//!   local mocks and proxies

use thiserror::Error;
use tracing::warn;
use url::{Host, Url};

/// Errors that can occur during URL validation
#[derive(Debug, Error)]
pub enum UrlValidationError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(#[from] url::ParseError),

    #[error("URL scheme must be HTTPS, got: {0}")]
    HttpsRequired(String),

    #[error("URL must have a host")]
    MissingHost,
}

/// Whether the URL points at this machine
pub fn is_loopback_host(url: &Url) -> bool {
    match url.host() {
        Some(Host::Domain(domain)) => domain.eq_ignore_ascii_case("localhost"),
        Some(Host::Ipv4(ip)) => ip.is_loopback(),
        Some(Host::Ipv6(ip)) => ip.is_loopback(),
        None => false,
    }
}

/// Validates an API endpoint URL
///
/// # Example
/// ```rust,ignore
/// use parasail_tts::utils::url_validation::validate_api_url;
///
/// assert!(validate_api_url("https://api.parasail.io/v1/audio/speech").is_ok());
/// assert!(validate_api_url("http://127.0.0.1:8080/tts").is_ok());
/// assert!(validate_api_url("http://api.parasail.io/v1").is_err());
/// ```
pub fn validate_api_url(url: &str) -> Result<Url, UrlValidationError> {
    let parsed = Url::parse(url)?;

    if parsed.host().is_none() {
        return Err(UrlValidationError::MissingHost);
    }

    match parsed.scheme() {
        "https" => Ok(parsed),
        "http" if is_loopback_host(&parsed) => Ok(parsed),
        scheme => {
            warn!(url = %url, "API URL rejected: credentials would be sent without TLS");
            Err(UrlValidationError::HttpsRequired(scheme.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_api_url_https() {
        let url = validate_api_url("https://voice-demo.parasail.io/api/tts-stream").unwrap();
        assert_eq!(url.host_str(), Some("voice-demo.parasail.io"));
    }

    #[test]
    fn test_validate_api_url_invalid_format() {
        assert!(matches!(
            validate_api_url("not-a-url"),
            Err(UrlValidationError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_validate_api_url_http_not_allowed() {
        assert!(matches!(
            validate_api_url("http://api.parasail.io/v1/audio/speech"),
            Err(UrlValidationError::HttpsRequired(_))
        ));
        assert!(matches!(
            validate_api_url("ftp://api.parasail.io/"),
            Err(UrlValidationError::HttpsRequired(_))
        ));
    }

    #[test]
    fn test_validate_api_url_loopback_http_allowed() {
        assert!(validate_api_url("http://localhost:8080/tts").is_ok());
        assert!(validate_api_url("http://127.0.0.1:9000/api/tts-stream").is_ok());
        assert!(validate_api_url("http://[::1]:9000/").is_ok());
        assert!(validate_api_url("http://192.168.1.10/").is_err());
    }

    #[test]
    fn test_validate_api_url_missing_host() {
        assert!(matches!(
            validate_api_url("unix:/var/run/tts.sock"),
            Err(UrlValidationError::MissingHost)
        ));
    }
}
