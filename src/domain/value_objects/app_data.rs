//! # App Data Value Object
//!
//! A validated 32-byte content hash attached to quote requests, rendered as
//! `0x` + 64 lowercase hex digits.

use crate::domain::errors::{ValidationError, ValidationResult};
use ethers::types::H256;
use ethers::utils::hex;
use rand::RngExt;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A 32-byte content-hash identifier.
///
/// The zero value is the default for requests carrying no app data. The
/// [`AppData::random`] constructor exists for test fixtures only and is never
/// used to authorize a real trade.
///
/// # Examples
///
/// ```
/// use settlement_accounting::domain::value_objects::AppData;
///
/// let zero = AppData::zero();
/// assert_eq!(
///     zero.to_string(),
///     "0x0000000000000000000000000000000000000000000000000000000000000000",
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AppData(H256);

impl AppData {
    /// Validates a `0x`-prefixed 64-hex-digit content hash.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidAppData`] for any other shape.
    pub fn new(raw: &str) -> ValidationResult<Self> {
        let digits = raw
            .strip_prefix("0x")
            .filter(|d| d.len() == 64 && d.bytes().all(|b| b.is_ascii_hexdigit()))
            .ok_or_else(|| ValidationError::InvalidAppData(raw.to_string()))?;

        let bytes =
            hex::decode(digits).map_err(|_| ValidationError::InvalidAppData(raw.to_string()))?;
        Ok(Self(H256::from_slice(&bytes)))
    }

    /// Returns the deterministic all-zero value.
    #[must_use]
    pub fn zero() -> Self {
        Self(H256::zero())
    }

    /// Returns pseudo-random app data for fixtures.
    #[must_use]
    pub fn random() -> Self {
        let mut bytes = [0u8; 32];
        rand::rng().fill(&mut bytes);
        Self(H256(bytes))
    }

    /// Returns the raw 32 bytes.
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl fmt::Display for AppData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0.as_bytes()))
    }
}

impl Serialize for AppData {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for AppData {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::new(&raw).map_err(D::Error::custom)
    }
}
