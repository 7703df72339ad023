//! Error types for deps.dev API operations.

use thiserror::Error;

/// Errors that can occur during deps.dev API operations.
#[derive(Debug, Error)]
pub enum DepsDevError {
    /// Environment configuration could not be used.
    #[error("deps.dev configuration invalid: {0}")]
    ConfigInvalid(String),

    /// The server answered with a non-200 status.
    ///
    /// The API returns plain-text error bodies, so `message` is the raw body.
    #[error("deps.dev API error ({status_code}): {message}")]
    ApiError { message: String, status_code: u16 },

    /// HTTP transport error (DNS, connection, timeout).
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// The request was cancelled before a response arrived.
    #[error("request cancelled")]
    Cancelled,

    /// JSON parsing error.
    #[error("Failed to parse response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    /// A path handed to the query builder is not a valid URL.
    #[error("Invalid path '{path}': {source}")]
    InvalidPath {
        path: String,
        #[source]
        source: url::ParseError,
    },
}

impl DepsDevError {
    /// HTTP status code of an API error.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::ApiError { status_code, .. } => Some(*status_code),
            Self::HttpError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Whether the server reported that the entity does not exist.
    pub fn is_not_found(&self) -> bool {
        self.status_code() == Some(404)
    }

    /// Whether the transport gave up waiting for the server.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::HttpError(e) if e.is_timeout())
    }
}

/// Result type alias for deps.dev operations.
pub type Result<T> = core::result::Result<T, DepsDevError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display_includes_status_and_body() {
        let err = DepsDevError::ApiError {
            message: "package not found".to_string(),
            status_code: 404,
        };
        assert_eq!(err.to_string(), "deps.dev API error (404): package not found");
        assert!(err.is_not_found());
        assert!(!err.is_timeout());
    }

    #[test]
    fn test_status_code_absent_for_local_errors() {
        assert_eq!(DepsDevError::Cancelled.status_code(), None);
        let err = DepsDevError::ConfigInvalid("bad".to_string());
        assert!(!err.is_not_found());
    }
}
