//! # Domain Enums
//!
//! Closed enumerations with explicit bidirectional wire-string mappings.
//!
//! Every enum here maps 1:1 to the strings used by the orderbook wire
//! protocol or the analytics fetch layer. Unknown wire values are rejected
//! explicitly, never defaulted.

use crate::domain::errors::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// EVM network an accounting run operates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    /// Ethereum mainnet.
    Mainnet,
    /// Gnosis chain.
    Gchain,
}

impl Network {
    /// Returns the path segment the orderbook API uses for this network.
    ///
    /// Gnosis chain is exposed under its legacy `xdai` name.
    #[must_use]
    pub const fn orderbook_slug(self) -> &'static str {
        match self {
            Self::Mainnet => "mainnet",
            Self::Gchain => "xdai",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mainnet => write!(f, "mainnet"),
            Self::Gchain => write!(f, "gchain"),
        }
    }
}

impl FromStr for Network {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mainnet" => Ok(Self::Mainnet),
            "gchain" => Ok(Self::Gchain),
            _ => Err(ValidationError::UnsupportedNetwork(s.to_string())),
        }
    }
}

/// The kind of order being quoted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderKind {
    /// Sell a fixed amount of the sell token.
    Sell,
    /// Buy a fixed amount of the buy token.
    Buy,
}

impl OrderKind {
    /// Returns true for sell orders.
    #[inline]
    #[must_use]
    pub const fn is_sell(self) -> bool {
        matches!(self, Self::Sell)
    }
}

impl fmt::Display for OrderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sell => write!(f, "sell"),
            Self::Buy => write!(f, "buy"),
        }
    }
}

impl FromStr for OrderKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sell" => Ok(Self::Sell),
            "buy" => Ok(Self::Buy),
            _ => Err(ValidationError::UnknownWireValue {
                kind: "OrderKind",
                value: s.to_string(),
            }),
        }
    }
}

/// The kind of token balance an order trades against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenBalance {
    /// Plain ERC20 balance.
    #[default]
    Erc20,
    /// Balance held by an external contract.
    External,
    /// Balance internal to the settlement contract.
    Internal,
}

impl fmt::Display for TokenBalance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Erc20 => write!(f, "erc20"),
            Self::External => write!(f, "external"),
            Self::Internal => write!(f, "internal"),
        }
    }
}

impl FromStr for TokenBalance {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "erc20" => Ok(Self::Erc20),
            "external" => Ok(Self::External),
            "internal" => Ok(Self::Internal),
            _ => Err(ValidationError::UnknownWireValue {
                kind: "TokenBalance",
                value: s.to_string(),
            }),
        }
    }
}

/// Quote pricing hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceQuality {
    /// Return quickly with a possibly worse price.
    Fast,
    /// Take longer for the best available price.
    Optimal,
}

impl fmt::Display for PriceQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fast => write!(f, "fast"),
            Self::Optimal => write!(f, "optimal"),
        }
    }
}

impl FromStr for PriceQuality {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fast" => Ok(Self::Fast),
            "optimal" => Ok(Self::Optimal),
            _ => Err(ValidationError::UnknownWireValue {
                kind: "PriceQuality",
                value: s.to_string(),
            }),
        }
    }
}

/// Asset class of a settlement transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    /// The chain's native asset.
    Native,
    /// An ERC20 token, identified by its contract address.
    Erc20,
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Native => write!(f, "native"),
            Self::Erc20 => write!(f, "erc20"),
        }
    }
}

impl FromStr for TokenType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "native" => Ok(Self::Native),
            "erc20" => Ok(Self::Erc20),
            _ => Err(ValidationError::UnknownWireValue {
                kind: "TokenType",
                value: s.to_string(),
            }),
        }
    }
}

/// Classification of an internal token transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransferType {
    /// Inbound transfer from an AMM.
    InAmm,
    /// Outbound transfer to an AMM.
    OutAmm,
    /// Inbound transfer from a user.
    InUser,
    /// Outbound transfer to a user.
    OutUser,
    /// Trade settled against internal buffers.
    InternalTrade,
}

impl TransferType {
    /// Constructs a variant from a wire string, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnknownTransferType`] for any string
    /// outside the closed set.
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        match s.to_uppercase().as_str() {
            "IN_AMM" => Ok(Self::InAmm),
            "OUT_AMM" => Ok(Self::OutAmm),
            "IN_USER" => Ok(Self::InUser),
            "OUT_USER" => Ok(Self::OutUser),
            "INTERNAL_TRADE" => Ok(Self::InternalTrade),
            _ => Err(ValidationError::UnknownTransferType(s.to_string())),
        }
    }
}

impl fmt::Display for TransferType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InAmm => write!(f, "IN_AMM"),
            Self::OutAmm => write!(f, "OUT_AMM"),
            Self::InUser => write!(f, "IN_USER"),
            Self::OutUser => write!(f, "OUT_USER"),
            Self::InternalTrade => write!(f, "INTERNAL_TRADE"),
        }
    }
}

impl FromStr for TransferType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    mod network {
        use super::*;

        #[test]
        fn orderbook_slug_maps_gchain_to_xdai() {
            assert_eq!(Network::Mainnet.orderbook_slug(), "mainnet");
            assert_eq!(Network::Gchain.orderbook_slug(), "xdai");
        }

        #[test]
        fn from_str_rejects_unknown() {
            assert_eq!("mainnet".parse::<Network>().unwrap(), Network::Mainnet);
            let err = "sepolia".parse::<Network>().unwrap_err();
            assert_eq!(err.to_string(), "unsupported network sepolia");
        }
    }

    mod wire_strings {
        use super::*;

        #[test]
        fn order_kind_round_trip() {
            assert_eq!(serde_json::to_string(&OrderKind::Sell).unwrap(), "\"sell\"");
            assert_eq!(
                serde_json::from_str::<OrderKind>("\"buy\"").unwrap(),
                OrderKind::Buy
            );
        }

        #[test]
        fn order_kind_rejects_unknown() {
            assert!(serde_json::from_str::<OrderKind>("\"hold\"").is_err());
            assert!("hold".parse::<OrderKind>().is_err());
        }

        #[test]
        fn token_balance_default_is_erc20() {
            assert_eq!(TokenBalance::default(), TokenBalance::Erc20);
        }

        #[test]
        fn token_balance_round_trip() {
            for (variant, wire) in [
                (TokenBalance::Erc20, "\"erc20\""),
                (TokenBalance::External, "\"external\""),
                (TokenBalance::Internal, "\"internal\""),
            ] {
                assert_eq!(serde_json::to_string(&variant).unwrap(), wire);
                assert_eq!(serde_json::from_str::<TokenBalance>(wire).unwrap(), variant);
            }
        }

        #[test]
        fn price_quality_round_trip() {
            assert_eq!(
                serde_json::to_string(&PriceQuality::Optimal).unwrap(),
                "\"optimal\""
            );
            assert_eq!(
                serde_json::from_str::<PriceQuality>("\"fast\"").unwrap(),
                PriceQuality::Fast
            );
        }

        #[test]
        fn token_type_round_trip() {
            assert_eq!("native".parse::<TokenType>().unwrap(), TokenType::Native);
            assert_eq!("erc20".parse::<TokenType>().unwrap(), TokenType::Erc20);
            assert!("erc721".parse::<TokenType>().is_err());
        }
    }

    mod transfer_type {
        use super::*;

        #[test]
        fn parse_is_case_insensitive() {
            assert_eq!(TransferType::parse("IN_USER").unwrap(), TransferType::InUser);
            assert_eq!(TransferType::parse("in_amm").unwrap(), TransferType::InAmm);
            assert_eq!(
                TransferType::parse("Out_User").unwrap(),
                TransferType::OutUser
            );
        }

        #[test]
        fn parse_rejects_unknown_with_literal_message() {
            let err = TransferType::parse("invalid").unwrap_err();
            assert_eq!(err.to_string(), "No TransferType invalid!");
        }

        #[test]
        fn display_matches_wire_form() {
            assert_eq!(TransferType::InternalTrade.to_string(), "INTERNAL_TRADE");
            assert_eq!(
                serde_json::to_string(&TransferType::InternalTrade).unwrap(),
                "\"INTERNAL_TRADE\""
            );
        }
    }
}
