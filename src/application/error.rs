//! # Application Errors
//!
//! Failures surfaced by the accounting services, wrapping the domain and
//! infrastructure taxonomies.

use crate::domain::errors::{ParseError, ValidationError};
use crate::infrastructure::analytics::queries::QueryError;
use crate::infrastructure::error::ApiError;
use thiserror::Error;

/// Error type for accounting service operations.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain invariant violation.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Wire response decode failure.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// External API failure.
    #[error("api error: {0}")]
    Api(#[from] ApiError),

    /// Query assembly failure.
    #[error("query error: {0}")]
    Query(#[from] QueryError),

    /// A result row did not match the expected shape.
    #[error("malformed result row: {0}")]
    Row(String),
}

impl ApplicationError {
    /// Returns true if retrying the operation could succeed.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Api(e) => e.is_retryable(),
            _ => false,
        }
    }
}

/// Result alias for accounting service operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_transient_api_errors_are_retryable() {
        let err: ApplicationError = ApiError::timeout("t").into();
        assert!(err.is_retryable());

        let err: ApplicationError = ValidationError::Erc20TokenAddress.into();
        assert!(!err.is_retryable());

        let err: ApplicationError = QueryError::EmptyTokenList.into();
        assert!(!err.is_retryable());
    }

    #[test]
    fn wrapped_messages_are_preserved() {
        let err: ApplicationError = ValidationError::InvalidAddress("0x12".to_string()).into();
        assert!(err.to_string().contains("Invalid Ethereum Address 0x12"));
    }
}
