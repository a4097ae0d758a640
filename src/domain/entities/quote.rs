//! # Quote Protocol Model
//!
//! Request and response types for the orderbook quote endpoint.
//!
//! The request side enforces the most safety-critical invariant in the
//! model: exactly one amount field, consistent with the order kind, reaches
//! the wire. The amount selection is a tagged union chosen at construction,
//! so "zero or multiple amounts" is unrepresentable; the kind-consistency
//! rule remains a runtime check applied at serialization time.
//!
//! The response side decodes permissively: unknown fields are ignored, all
//! modeled fields must be present and well-typed.
//!
//! # Examples
//!
//! ```
//! use settlement_accounting::domain::entities::quote::{QuoteAmount, QuoteRequest};
//! use settlement_accounting::domain::value_objects::{Address, OrderKind};
//! use ethers::types::U256;
//!
//! let request = QuoteRequest::new(
//!     Address::new("0x4444444444444444444444444444444444444444").unwrap(),
//!     Address::new("0x1111111111111111111111111111111111111111").unwrap(),
//!     Address::new("0x2222222222222222222222222222222222222222").unwrap(),
//!     42,
//!     OrderKind::Sell,
//!     QuoteAmount::SellBeforeFee(U256::exp10(18)),
//! );
//!
//! let body = request.to_wire_representation().unwrap();
//! assert_eq!(body["sellAmountBeforeFee"], "1000000000000000000");
//! ```

use crate::domain::errors::{ParseError, ValidationError, ValidationResult};
use crate::domain::value_objects::{Address, AppData, OrderKind, PriceQuality, TokenBalance};
use chrono::NaiveDateTime;
use ethers::types::U256;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

/// The single amount a quote is requested for.
///
/// Sell orders quote either side of the fee; buy orders only quote the
/// bought amount after fees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteAmount {
    /// Sell amount before the fee is deducted.
    SellBeforeFee(U256),
    /// Sell amount after the fee is deducted.
    SellAfterFee(U256),
    /// Buy amount after fees.
    BuyAfterFee(U256),
}

impl QuoteAmount {
    /// Returns the wire field name this variant serializes under.
    #[must_use]
    pub const fn wire_field(&self) -> &'static str {
        match self {
            Self::SellBeforeFee(_) => "sellAmountBeforeFee",
            Self::SellAfterFee(_) => "sellAmountAfterFee",
            Self::BuyAfterFee(_) => "buyAmountAfterFee",
        }
    }

    /// Returns the wrapped amount in atoms.
    #[must_use]
    pub const fn value(&self) -> U256 {
        match self {
            Self::SellBeforeFee(v) | Self::SellAfterFee(v) | Self::BuyAfterFee(v) => *v,
        }
    }

    /// Returns true if this variant is valid for the given order kind.
    #[must_use]
    pub const fn matches_kind(&self, kind: OrderKind) -> bool {
        match self {
            Self::SellBeforeFee(_) | Self::SellAfterFee(_) => kind.is_sell(),
            Self::BuyAfterFee(_) => !kind.is_sell(),
        }
    }
}

/// An orderbook quote request.
///
/// Optional fields are omitted from the wire body when absent, never sent
/// as null. Amounts serialize as decimal strings to avoid precision loss on
/// transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteRequest {
    /// Account the quote is requested for.
    pub from_address: Address,
    /// Token being sold.
    pub sell_token: Address,
    /// Token being bought.
    pub buy_token: Address,
    /// Order expiry as a unix timestamp.
    pub valid_to: u64,
    /// Sell or buy order.
    pub kind: OrderKind,
    /// The single amount being quoted.
    pub amount: QuoteAmount,
    /// Optional receiver of the bought tokens.
    pub receiver: Option<Address>,
    /// Content hash attached to the order.
    pub app_data: AppData,
    /// Whether the order may fill partially.
    pub partially_fillable: bool,
    /// Balance kind of the sell token.
    pub sell_token_balance: TokenBalance,
    /// Balance kind of the buy token.
    pub buy_token_balance: TokenBalance,
    /// Optional pricing hint.
    pub price_quality: Option<PriceQuality>,
}

impl QuoteRequest {
    /// Creates a request with default optional fields.
    #[must_use]
    pub fn new(
        from_address: Address,
        sell_token: Address,
        buy_token: Address,
        valid_to: u64,
        kind: OrderKind,
        amount: QuoteAmount,
    ) -> Self {
        Self {
            from_address,
            sell_token,
            buy_token,
            valid_to,
            kind,
            amount,
            receiver: None,
            app_data: AppData::zero(),
            partially_fillable: false,
            sell_token_balance: TokenBalance::default(),
            buy_token_balance: TokenBalance::default(),
            price_quality: None,
        }
    }

    /// Sets the receiver.
    #[must_use]
    pub fn with_receiver(mut self, receiver: Address) -> Self {
        self.receiver = Some(receiver);
        self
    }

    /// Sets the pricing hint.
    #[must_use]
    pub fn with_price_quality(mut self, quality: PriceQuality) -> Self {
        self.price_quality = Some(quality);
        self
    }

    /// Serializes the request into its wire field mapping.
    ///
    /// The amount variant must be consistent with [`Self::kind`]: sell
    /// orders carry a sell-amount field, buy orders carry
    /// `buyAmountAfterFee`. An inconsistent request would place an
    /// ambiguous trade order, so it is rejected here rather than coerced.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::AmountKindMismatch`] when the amount
    /// variant does not match the order kind.
    pub fn to_wire_representation(&self) -> ValidationResult<Map<String, Value>> {
        if !self.amount.matches_kind(self.kind) {
            return Err(ValidationError::AmountKindMismatch {
                kind: self.kind,
                field: self.amount.wire_field(),
            });
        }

        let mut body = Map::new();
        body.insert("sellToken".to_string(), json!(self.sell_token));
        body.insert("buyToken".to_string(), json!(self.buy_token));
        body.insert("validTo".to_string(), json!(self.valid_to));
        body.insert("appData".to_string(), json!(self.app_data));
        body.insert("kind".to_string(), json!(self.kind));
        body.insert(
            "partiallyFillable".to_string(),
            json!(self.partially_fillable),
        );
        body.insert(
            "sellTokenBalance".to_string(),
            json!(self.sell_token_balance),
        );
        body.insert("buyTokenBalance".to_string(), json!(self.buy_token_balance));
        body.insert("from".to_string(), json!(self.from_address));
        if let Some(receiver) = &self.receiver {
            body.insert("receiver".to_string(), json!(receiver));
        }
        if let Some(quality) = &self.price_quality {
            body.insert("priceQuality".to_string(), json!(quality));
        }
        body.insert(
            self.amount.wire_field().to_string(),
            Value::String(self.amount.value().to_string()),
        );

        Ok(body)
    }
}

/// A quoted order, as returned inside a [`QuoteResponse`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    /// Token being sold.
    pub sell_token: Address,
    /// Token being bought.
    pub buy_token: Address,
    /// Receiver of the bought tokens. Wire-null means no receiver, not the
    /// zero address. The field itself must be present.
    #[serde(deserialize_with = "nullable_address")]
    pub receiver: Option<Address>,
    /// Quoted sell amount in atoms.
    #[serde(with = "amount_string")]
    pub sell_amount: U256,
    /// Quoted buy amount in atoms.
    #[serde(with = "amount_string")]
    pub buy_amount: U256,
    /// Order expiry as a unix timestamp.
    pub valid_to: u64,
    /// Content hash attached to the order.
    pub app_data: AppData,
    /// Quoted fee in atoms of the sell token.
    #[serde(with = "amount_string")]
    pub fee_amount: U256,
    /// Sell or buy order.
    pub kind: OrderKind,
    /// Whether the order may fill partially.
    pub partially_fillable: bool,
    /// Balance kind of the sell token.
    pub sell_token_balance: TokenBalance,
    /// Balance kind of the buy token.
    pub buy_token_balance: TokenBalance,
}

/// An orderbook quote response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteResponse {
    /// The quoted order.
    pub quote: Quote,
    /// The account the quote was issued for.
    #[serde(rename = "from")]
    pub from_address: Address,
    /// When the quote offer expires, as a naive UTC instant.
    #[serde(with = "expiration")]
    pub expiration: NaiveDateTime,
}

impl QuoteResponse {
    /// Decodes a response from raw JSON text.
    ///
    /// Unknown fields at any level are ignored; every modeled field must be
    /// present and well-typed.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] when the body is not JSON or a modeled field
    /// is missing or malformed.
    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Decodes a response from an already-parsed JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] when a modeled field is missing or malformed.
    pub fn from_value(value: Value) -> Result<Self, ParseError> {
        Ok(serde_json::from_value(value)?)
    }
}

/// Parses the upstream expiration timestamp.
///
/// The orderbook emits near-ISO-8601 instants with a fractional part three
/// digits longer than microseconds, terminated by `Z`, e.g.
/// `2022-03-27T16:29:48.650107010Z`. Exactly the last three digits before
/// the `Z` are stripped and the remainder parsed as a naive UTC instant.
/// Any other shape fails; the surplus-digit format is matched as-is rather
/// than generalized, since the upstream contract is not documented.
///
/// # Errors
///
/// Returns [`ParseError::Timestamp`] naming the rejected input.
pub fn parse_expiration(raw: &str) -> Result<NaiveDateTime, ParseError> {
    let stripped = raw
        .strip_suffix('Z')
        .filter(|s| s.len() >= 3 && s.bytes().rev().take(3).all(|b| b.is_ascii_digit()))
        .and_then(|s| s.get(..s.len() - 3))
        .ok_or_else(|| ParseError::Timestamp(raw.to_string()))?;

    NaiveDateTime::parse_from_str(stripped, "%Y-%m-%dT%H:%M:%S%.f")
        .map_err(|_| ParseError::Timestamp(raw.to_string()))
}

fn nullable_address<'de, D>(deserializer: D) -> Result<Option<Address>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Option::<Address>::deserialize(deserializer)
}

mod amount_string {
    //! Amounts cross the wire as decimal strings; some producers send plain
    //! integers instead, so both shapes decode.

    use ethers::types::U256;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};
    use serde_json::Value;

    pub fn serialize<S: Serializer>(value: &U256, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<U256, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::String(s) => U256::from_dec_str(&s)
                .map_err(|_| D::Error::custom(format!("invalid amount string '{s}'"))),
            Value::Number(n) => n
                .as_u64()
                .map(U256::from)
                .ok_or_else(|| D::Error::custom(format!("invalid amount number {n}"))),
            other => Err(D::Error::custom(format!(
                "expected amount string or integer, got {other}"
            ))),
        }
    }
}

mod expiration {
    use chrono::NaiveDateTime;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        value: &NaiveDateTime,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        // Re-emit the upstream shape: nine fractional digits plus Z.
        serializer.serialize_str(&format!("{}Z", value.format("%Y-%m-%dT%H:%M:%S%.9f")))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_expiration(&raw).map_err(D::Error::custom)
    }
}
