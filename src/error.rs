//! Error types for the ScholarLink UI
//!
//! One taxonomy covers the single real integration point (the greeting
//! endpoint) plus deferred capabilities and a generic fallback kind.
//! Recovery policy everywhere: show a localized substitute and log the
//! cause to the console, never crash the page.

use thiserror::Error;

/// Errors surfaced by API calls and data providers
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never reached the backend
    #[error("network unreachable: {0}")]
    NetworkUnreachable(String),
    /// The backend answered with something that could not be decoded
    #[error("malformed response: {0}")]
    MalformedResponse(String),
    /// The backend answered with a non-success status code
    #[error("server returned status {0}")]
    Status(u16),
    /// The request exceeded the transport deadline
    #[error("request timed out after {0} ms")]
    Timeout(u32),
    /// The capability exists in the contract but has no implementation yet
    #[error("not implemented: {0}")]
    NotImplemented(&'static str),
    /// Anything that does not fit the kinds above
    #[error("unexpected error: {0}")]
    Unexpected(String),
}

/// Result type alias for API operations
pub type ApiResult<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = ApiError::NetworkUnreachable("connection refused".to_string());
        assert_eq!(error.to_string(), "network unreachable: connection refused");

        let error = ApiError::MalformedResponse("missing field `message`".to_string());
        assert_eq!(
            error.to_string(),
            "malformed response: missing field `message`"
        );

        let error = ApiError::Status(502);
        assert_eq!(error.to_string(), "server returned status 502");

        let error = ApiError::Timeout(30_000);
        assert_eq!(error.to_string(), "request timed out after 30000 ms");

        let error = ApiError::NotImplemented("feed pagination");
        assert_eq!(error.to_string(), "not implemented: feed pagination");

        let error = ApiError::Unexpected("boom".to_string());
        assert_eq!(error.to_string(), "unexpected error: boom");
    }

    #[test]
    fn test_error_clone_and_eq() {
        let error = ApiError::Status(404);
        let cloned = error.clone();
        assert_eq!(error, cloned);
    }

    #[test]
    fn test_result_type() {
        let success: ApiResult<i32> = Ok(42);
        assert!(success.is_ok());

        let failure: ApiResult<i32> = Err(ApiError::Unexpected("failed".to_string()));
        assert!(failure.is_err());
    }
}
