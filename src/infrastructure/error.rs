//! # Infrastructure Errors
//!
//! Error types for the external collaborators the core talks to: the
//! orderbook API and the analytics query engine.
//!
//! # Examples
//!
//! ```
//! use settlement_accounting::infrastructure::error::ApiError;
//!
//! let error = ApiError::timeout("request exceeded 5000ms");
//! assert!(error.is_retryable());
//!
//! let error = ApiError::decode("unexpected response shape");
//! assert!(!error.is_retryable());
//! ```

use thiserror::Error;

/// Error type for external API operations.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// Request timed out.
    #[error("api timeout: {0}")]
    Timeout(String),

    /// Network or connection error.
    #[error("api connection error: {0}")]
    Connection(String),

    /// Authentication or authorization failure.
    #[error("api authentication error: {0}")]
    Authentication(String),

    /// The service rejected the request as malformed.
    #[error("api invalid request: {0}")]
    InvalidRequest(String),

    /// Unexpected HTTP status from the service.
    #[error("api status {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, possibly truncated.
        body: String,
    },

    /// Response or result row could not be decoded.
    #[error("api decode error: {0}")]
    Decode(String),

    /// Client-side failure outside the request path.
    #[error("api internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Creates a timeout error.
    #[must_use]
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::Timeout(message.into())
    }

    /// Creates a connection error.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection(message.into())
    }

    /// Creates an authentication error.
    #[must_use]
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::Authentication(message.into())
    }

    /// Creates an invalid-request error.
    #[must_use]
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest(message.into())
    }

    /// Creates a decode error.
    #[must_use]
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode(message.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Returns true if retrying the same request could succeed.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Timeout(_) | Self::Connection(_) | Self::Status { status: 500..=599, .. }
        )
    }
}

/// Result alias for external API operations.
pub type ApiResult<T> = Result<T, ApiError>;
