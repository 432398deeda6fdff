//! Unified error type shared by the client, service, and REST layers.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use thiserror::Error;

/// Unified error type for Member Searcher.
#[derive(Error, Debug)]
pub enum SearcherError {
    // ============ Upstream Errors ============
    /// A request to the membership backend failed (transport, status, or decoding).
    #[error("{0}")]
    ClientRequest(String),

    /// A request to the membership backend timed out.
    #[error("Operation timed out: {0}")]
    Timeout(String),

    // ============ Infrastructure Errors ============
    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    // ============ Internal Errors ============
    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Generic error wrapper
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SearcherError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::ClientRequest(_) => 502,
            Self::Timeout(_) => 504,
            Self::Configuration(_) | Self::Internal(_) | Self::Other(_) => 500,
        }
    }

    /// Returns a machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::ClientRequest(_) => "CLIENT_REQUEST_ERROR",
            Self::Timeout(_) => "TIMEOUT",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Internal(_) | Self::Other(_) => "INTERNAL_ERROR",
        }
    }

    /// Creates a client request error.
    #[must_use]
    pub fn client_request<T: Into<String>>(message: T) -> Self {
        Self::ClientRequest(message.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal<T: Into<String>>(message: T) -> Self {
        Self::Internal(message.into())
    }

    /// Checks if this error came from talking to the backend.
    #[must_use]
    pub const fn is_upstream(&self) -> bool {
        matches!(self, Self::ClientRequest(_) | Self::Timeout(_))
    }
}

impl From<serde_json::Error> for SearcherError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(format!("JSON serialization error: {}", err))
    }
}

/// Serializable error response for API responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ErrorResponse {
    /// Machine-readable error code
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl ErrorResponse {
    /// Creates a new error response from a `SearcherError`.
    #[must_use]
    pub fn from_error(error: &SearcherError) -> Self {
        Self {
            code: error.error_code().to_string(),
            message: error.to_string(),
        }
    }
}

impl From<&SearcherError> for ErrorResponse {
    fn from(error: &SearcherError) -> Self {
        Self::from_error(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(SearcherError::client_request("boom").status_code(), 502);
        assert_eq!(SearcherError::Timeout("slow".to_string()).status_code(), 504);
        assert_eq!(SearcherError::Configuration("bad".to_string()).status_code(), 500);
        assert_eq!(SearcherError::internal("oops").status_code(), 500);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(SearcherError::client_request("x").error_code(), "CLIENT_REQUEST_ERROR");
        assert_eq!(SearcherError::Timeout("x".to_string()).error_code(), "TIMEOUT");
        assert_eq!(SearcherError::Configuration("x".to_string()).error_code(), "CONFIGURATION_ERROR");
        assert_eq!(SearcherError::internal("x").error_code(), "INTERNAL_ERROR");
        assert_eq!(SearcherError::Other(anyhow::anyhow!("x")).error_code(), "INTERNAL_ERROR");
    }

    #[test]
    fn test_client_request_message_is_verbatim() {
        let err = SearcherError::client_request("Error creating User Cache: connection refused");
        assert_eq!(err.to_string(), "Error creating User Cache: connection refused");
    }

    #[test]
    fn test_upstream_errors() {
        assert!(SearcherError::client_request("x").is_upstream());
        assert!(SearcherError::Timeout("x".to_string()).is_upstream());
        assert!(!SearcherError::internal("x").is_upstream());
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err = SearcherError::from(json_err);
        assert!(matches!(err, SearcherError::Internal(_)));
    }

    #[test]
    fn test_error_response_from_error() {
        let err = SearcherError::client_request("backend down");
        let response = ErrorResponse::from(&err);
        assert_eq!(response.code, "CLIENT_REQUEST_ERROR");
        assert_eq!(response.message, "backend down");
    }
}
