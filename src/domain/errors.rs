//! # Domain Errors
//!
//! Typed error definitions for the accounting domain.
//!
//! Two families exist:
//!
//! - [`ValidationError`] — malformed or semantically inconsistent input to a
//!   constructor, or an invariant violation while mutating a balance. Raised
//!   synchronously at the point of violation, never coerced.
//! - [`ParseError`] — malformed or incomplete orderbook wire response.
//!
//! Several messages are matched literally by downstream tooling; do not
//! reword them without updating the consumers.

use crate::domain::value_objects::enums::OrderKind;
use thiserror::Error;

/// Validation failure in a domain constructor or balance mutation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Account identifier is not `0x` + 40 hex digits.
    #[error("Invalid Ethereum Address {0}")]
    InvalidAddress(String),

    /// Content hash is not `0x` + 64 hex digits.
    #[error("Invalid App Data {0}")]
    InvalidAppData(String),

    /// Accounting period start does not match the fixed date format.
    #[error("time data '{0}' does not match format '%Y-%m-%d'")]
    InvalidDate(String),

    /// Accounting period length must be at least one day.
    #[error("accounting period length must be positive, got {0}")]
    InvalidPeriodLength(u32),

    /// ERC20 transfer constructed without a token address.
    #[error("ERC20 transfers must have valid token_address")]
    Erc20TokenAddress,

    /// Native transfer constructed with a token address.
    #[error("Native transfers must have null token_address")]
    NativeTokenAddress,

    /// Slippage adjustment would take a transfer balance below zero.
    #[error("Invalid adjustment {transfer} by {adjustment_tokens}")]
    InvalidAdjustment {
        /// Display form of the transfer being adjusted.
        transfer: String,
        /// The rejected adjustment, in whole tokens.
        adjustment_tokens: f64,
    },

    /// Quote amount variant inconsistent with the order kind.
    #[error("{field} cannot be quoted for a {kind} order")]
    AmountKindMismatch {
        /// The order kind on the request.
        kind: OrderKind,
        /// Wire name of the offending amount field.
        field: &'static str,
    },

    /// Transfer amount string did not parse as a decimal number.
    #[error("invalid transfer amount '{0}'")]
    InvalidTransferAmount(String),

    /// Unknown internal transfer classification.
    #[error("No TransferType {0}!")]
    UnknownTransferType(String),

    /// Unknown wire string for a closed enumeration.
    #[error("invalid {kind} value: '{value}'")]
    UnknownWireValue {
        /// Name of the enumeration.
        kind: &'static str,
        /// The rejected wire string.
        value: String,
    },

    /// Network name outside the supported set.
    #[error("unsupported network {0}")]
    UnsupportedNetwork(String),

    /// Indexing a record set by a key that is not unique.
    #[error("Attempting to index by non-unique entry \"{0}\"")]
    NonUniqueIndexEntry(String),
}

/// Result alias for validating constructors.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Failure while decoding an orderbook wire response.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Response body is not JSON, or a modeled field is missing or mistyped.
    #[error("malformed quote response: {0}")]
    Json(#[from] serde_json::Error),

    /// Expiration timestamp does not match the upstream shape
    /// (fractional seconds with exactly three surplus digits before `Z`).
    #[error("cannot parse expiration timestamp '{0}'")]
    Timestamp(String),
}
