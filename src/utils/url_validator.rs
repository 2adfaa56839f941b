//! Target URL validation.
//!
//! Target URLs are stored exactly as submitted; this module only decides
//! whether a submission is acceptable.

use url::Url;

/// Errors that can occur during target URL validation.
#[derive(Debug, thiserror::Error)]
pub enum UrlValidationError {
    #[error("URL must not be empty")]
    Empty,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL must contain a host")]
    MissingHost,
}

/// Checks that `input` is an absolute HTTP(S) URL with a host.
///
/// Rejects potentially dangerous protocols like `javascript:`, `data:`, `file:`, etc.
///
/// # Errors
///
/// Returns [`UrlValidationError::InvalidFormat`] for malformed URLs.
/// Returns [`UrlValidationError::UnsupportedProtocol`] for non-HTTP(S) schemes.
///
/// # Examples
///
/// ```ignore
/// assert!(validate_target_url("https://example.com/a/b").is_ok());
/// assert!(validate_target_url("javascript:alert(1)").is_err());
/// ```
pub fn validate_target_url(input: &str) -> Result<(), UrlValidationError> {
    if input.trim().is_empty() {
        return Err(UrlValidationError::Empty);
    }

    let url = Url::parse(input).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlValidationError::UnsupportedProtocol),
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(UrlValidationError::MissingHost);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_simple_https() {
        assert!(validate_target_url("https://example.com").is_ok());
    }

    #[test]
    fn test_validate_with_path_query_and_port() {
        assert!(validate_target_url("http://example.com:8080/a/b?x=1&y=2#frag").is_ok());
    }

    #[test]
    fn test_validate_ip_address() {
        assert!(validate_target_url("http://192.168.1.1/path").is_ok());
    }

    #[test]
    fn test_validate_empty_string() {
        assert!(matches!(
            validate_target_url(""),
            Err(UrlValidationError::Empty)
        ));
        assert!(matches!(
            validate_target_url("   "),
            Err(UrlValidationError::Empty)
        ));
    }

    #[test]
    fn test_validate_no_protocol() {
        assert!(matches!(
            validate_target_url("example.com/path"),
            Err(UrlValidationError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_validate_javascript_protocol() {
        assert!(matches!(
            validate_target_url("javascript:alert(1)"),
            Err(UrlValidationError::UnsupportedProtocol)
        ));
    }

    #[test]
    fn test_validate_ftp_protocol() {
        assert!(matches!(
            validate_target_url("ftp://example.com/file"),
            Err(UrlValidationError::UnsupportedProtocol)
        ));
    }
}
