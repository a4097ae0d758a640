//! # Address Value Object
//!
//! A validated 20-byte EVM account identifier.
//!
//! Input must be a `0x`-prefixed string of exactly 40 hex digits, in either
//! case. The canonical display form is the EIP-55 mixed-case checksum
//! encoding; equality and hashing operate on the underlying bytes, so two
//! addresses differing only in input casing compare equal.
//!
//! # Examples
//!
//! ```
//! use settlement_accounting::domain::value_objects::Address;
//!
//! let addr = Address::new("0xde1c59bc25d806ad9ddcbe246c4b5e5505645718").unwrap();
//! assert_eq!(addr.to_string(), "0xdE1c59Bc25D806aD9DdCbe246c4B5e5505645718");
//! ```

use crate::domain::errors::{ValidationError, ValidationResult};
use ethers::types::H160;
use ethers::utils::{hex, to_checksum};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated EVM account address.
///
/// # Invariants
///
/// - Constructed only from `0x` + 40 hex digits
/// - Display form is the EIP-55 checksum encoding
/// - Immutable after construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address(H160);

impl Address {
    /// Validates and canonicalizes a hex account identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidAddress`] when the input is not a
    /// `0x`-prefixed 40-hex-digit string.
    ///
    /// # Examples
    ///
    /// ```
    /// use settlement_accounting::domain::value_objects::Address;
    ///
    /// assert!(Address::new("0x1111111111111111111111111111111111111111").is_ok());
    /// assert!(Address::new("0x12").is_err());
    /// assert!(Address::new("de1c59bc25d806ad9ddcbe246c4b5e5505645718").is_err());
    /// ```
    pub fn new(raw: &str) -> ValidationResult<Self> {
        let digits = raw
            .strip_prefix("0x")
            .filter(|d| d.len() == 40 && d.bytes().all(|b| b.is_ascii_hexdigit()))
            .ok_or_else(|| ValidationError::InvalidAddress(raw.to_string()))?;

        let bytes =
            hex::decode(digits).map_err(|_| ValidationError::InvalidAddress(raw.to_string()))?;
        Ok(Self(H160::from_slice(&bytes)))
    }

    /// Returns the null address, used as a sentinel for "unset".
    #[must_use]
    pub fn zero() -> Self {
        Self(H160::zero())
    }

    /// Returns the raw 20 bytes.
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Returns the EIP-55 checksummed display string.
    #[must_use]
    pub fn checksum(&self) -> String {
        to_checksum(&self.0, None)
    }

    /// Returns true if this is the all-zero sentinel.
    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.checksum())
    }
}

impl From<H160> for Address {
    fn from(inner: H160) -> Self {
        Self(inner)
    }
}

impl std::str::FromStr for Address {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.checksum())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::new(&raw).map_err(D::Error::custom)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const LOWER: &str = "0xde1c59bc25d806ad9ddcbe246c4b5e5505645718";
    const CHECKSUMMED: &str = "0xDEf1CA1fb7FBcDC777520aa7f396b4E015F497aB";

    mod construction {
        use super::*;

        #[test]
        fn lower_case_input_checksums() {
            let addr = Address::new(LOWER).unwrap();
            assert_eq!(addr.to_string(), "0xdE1c59Bc25D806aD9DdCbe246c4B5e5505645718");
        }

        #[test]
        fn checksummed_input_is_preserved() {
            let addr = Address::new(CHECKSUMMED).unwrap();
            assert_eq!(addr.to_string(), CHECKSUMMED);
        }

        #[test]
        fn too_short_fails_with_literal_message() {
            let err = Address::new("0x12").unwrap_err();
            assert_eq!(err.to_string(), "Invalid Ethereum Address 0x12");
        }

        #[test]
        fn missing_prefix_fails() {
            assert!(Address::new("de1c59bc25d806ad9ddcbe246c4b5e5505645718").is_err());
        }

        #[test]
        fn non_hex_digits_fail() {
            assert!(Address::new("0xzz1c59bc25d806ad9ddcbe246c4b5e5505645718").is_err());
        }

        #[test]
        fn zero_is_all_zero_bytes() {
            let zero = Address::zero();
            assert!(zero.is_zero());
            assert_eq!(
                zero.to_string(),
                "0x0000000000000000000000000000000000000000"
            );
        }
    }

    mod equality {
        use super::*;

        #[test]
        fn casing_is_irrelevant() {
            let lower = Address::new(LOWER).unwrap();
            let upper = Address::new(&format!(
                "0x{}",
                LOWER.strip_prefix("0x").unwrap().to_uppercase()
            ))
            .unwrap();
            assert_eq!(lower, upper);
            assert_eq!(lower.as_bytes(), upper.as_bytes());
        }

        #[test]
        fn distinct_bytes_are_unequal() {
            let one = Address::new("0x1111111111111111111111111111111111111111").unwrap();
            let two = Address::new("0x2222222222222222222222222222222222222222").unwrap();
            assert_ne!(one, two);
        }
    }

    mod serde_impls {
        use super::*;

        #[test]
        fn serializes_as_checksum_string() {
            let addr = Address::new(LOWER).unwrap();
            let json = serde_json::to_string(&addr).unwrap();
            assert_eq!(json, "\"0xdE1c59Bc25D806aD9DdCbe246c4B5e5505645718\"");
        }

        #[test]
        fn deserialization_validates() {
            let ok: Result<Address, _> = serde_json::from_str(&format!("\"{LOWER}\""));
            assert!(ok.is_ok());
            let bad: Result<Address, _> = serde_json::from_str("\"0x12\"");
            assert!(bad.is_err());
        }
    }

    proptest! {
        #[test]
        fn casing_never_changes_identity(digits in "[0-9a-f]{40}") {
            let lower = Address::new(&format!("0x{digits}")).unwrap();
            let upper = Address::new(&format!("0x{}", digits.to_uppercase())).unwrap();
            prop_assert_eq!(lower.as_bytes(), upper.as_bytes());
            prop_assert_eq!(lower.to_string(), upper.to_string());
        }
    }
}
