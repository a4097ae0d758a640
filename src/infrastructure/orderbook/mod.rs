//! # Orderbook API Client
//!
//! Thin client for the externally-owned orderbook quote endpoint.
//!
//! The wire contract is owned by the domain model: the request body is
//! [`QuoteRequest::to_wire_representation`] and the response is decoded by
//! [`QuoteResponse::parse`]. This module only moves bytes.
//!
//! # Examples
//!
//! ```no_run
//! use settlement_accounting::domain::value_objects::Network;
//! use settlement_accounting::infrastructure::orderbook::OrderbookApi;
//!
//! let api = OrderbookApi::for_network(Network::Mainnet, 5000).unwrap();
//! assert_eq!(api.base_url(), "https://api.cow.fi/mainnet");
//! ```

use crate::domain::entities::quote::{QuoteRequest, QuoteResponse};
use crate::domain::errors::{ParseError, ValidationError};
use crate::domain::value_objects::Network;
use crate::infrastructure::error::{ApiError, ApiResult};
use crate::infrastructure::http::HttpClient;
use thiserror::Error;
use tracing::debug;

/// Default base URL of the hosted orderbook service.
pub const DEFAULT_BASE_URL: &str = "https://api.cow.fi";

/// Failure while requesting a quote.
#[derive(Debug, Error)]
pub enum OrderbookError {
    /// The request violated the amount-field invariant before it was sent.
    #[error("quote request validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// Transport-level failure.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The response body did not decode as a quote.
    #[error("quote response decode failed: {0}")]
    Parse(#[from] ParseError),
}

/// Orderbook API client.
#[derive(Debug, Clone)]
pub struct OrderbookApi {
    http: HttpClient,
    base_url: String,
}

impl OrderbookApi {
    /// Creates a client against an explicit base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Internal`] if the HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>, timeout_ms: u64) -> ApiResult<Self> {
        Ok(Self {
            http: HttpClient::new(timeout_ms)?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Creates a client with the default base URL for a network.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Internal`] if the HTTP client cannot be built.
    pub fn for_network(network: Network, timeout_ms: u64) -> ApiResult<Self> {
        Self::new(
            format!("{DEFAULT_BASE_URL}/{}", network.orderbook_slug()),
            timeout_ms,
        )
    }

    /// Creates a client from application configuration.
    ///
    /// An explicit `base_url` override wins over the network default.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Internal`] if the HTTP client cannot be built.
    pub fn from_config(config: &crate::config::OrderbookConfig) -> ApiResult<Self> {
        match &config.base_url {
            Some(url) => Self::new(url.clone(), config.timeout_ms),
            None => Self::for_network(config.network, config.timeout_ms),
        }
    }

    /// Returns the configured base URL.
    #[inline]
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url)
    }

    /// Requests a quote for an order.
    ///
    /// Validates and serializes the request, POSTs it to `api/v1/quote`,
    /// and decodes the response permissively.
    ///
    /// # Errors
    ///
    /// Returns [`OrderbookError::Validation`] before any network traffic
    /// when the request is inconsistent, [`OrderbookError::Api`] on
    /// transport failure, and [`OrderbookError::Parse`] when the response
    /// body is malformed.
    pub async fn quote(&self, request: &QuoteRequest) -> Result<QuoteResponse, OrderbookError> {
        let body = request.to_wire_representation()?;
        let url = self.url("api/v1/quote");
        debug!(%url, kind = %request.kind, "requesting quote");

        let raw: serde_json::Value = self.http.post(&url, &body).await?;
        Ok(QuoteResponse::from_value(raw)?)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::entities::quote::QuoteAmount;
    use crate::domain::value_objects::{Address, OrderKind};
    use ethers::types::U256;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const RESPONSE_FIXTURE: &str = r#"{
        "quote": {
            "sellToken": "0x1111111111111111111111111111111111111111",
            "buyToken": "0x2222222222222222222222222222222222222222",
            "receiver": null,
            "sellAmount": "1000000000000000000",
            "buyAmount": "456",
            "validTo": 42,
            "appData": "0x0000000000000000000000000000000000000000000000000000000000000000",
            "feeAmount": "789",
            "kind": "sell",
            "partiallyFillable": false,
            "sellTokenBalance": "erc20",
            "buyTokenBalance": "erc20"
        },
        "from": "0x4444444444444444444444444444444444444444",
        "expiration": "2022-03-27T16:29:48.650107010Z"
    }"#;

    fn request() -> QuoteRequest {
        QuoteRequest::new(
            Address::new("0x4444444444444444444444444444444444444444").unwrap(),
            Address::new("0x1111111111111111111111111111111111111111").unwrap(),
            Address::new("0x2222222222222222222222222222222222222222").unwrap(),
            42,
            OrderKind::Sell,
            QuoteAmount::SellBeforeFee(U256::exp10(18)),
        )
    }

    #[test]
    fn network_base_urls() {
        let mainnet = OrderbookApi::for_network(Network::Mainnet, 5000).unwrap();
        assert_eq!(mainnet.base_url(), "https://api.cow.fi/mainnet");

        let gchain = OrderbookApi::for_network(Network::Gchain, 5000).unwrap();
        assert_eq!(gchain.base_url(), "https://api.cow.fi/xdai");
    }

    #[tokio::test]
    async fn quote_posts_wire_body_and_decodes_response() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/quote"))
            .and(body_partial_json(serde_json::json!({
                "sellAmountBeforeFee": "1000000000000000000",
                "kind": "sell",
            })))
            .respond_with(
                ResponseTemplate::new(200).set_body_raw(RESPONSE_FIXTURE, "application/json"),
            )
            .mount(&server)
            .await;

        let api = OrderbookApi::new(server.uri(), 5000).unwrap();
        let response = api.quote(&request()).await.unwrap();
        assert_eq!(response.quote.sell_amount, U256::exp10(18));
        assert_eq!(response.quote.receiver, None);
    }

    #[tokio::test]
    async fn invalid_request_never_hits_the_network() {
        let mut bad = request();
        bad.kind = OrderKind::Buy;

        // Deliberately unroutable base URL; validation must fail first.
        let api = OrderbookApi::new("http://127.0.0.1:1", 100).unwrap();
        let err = api.quote(&bad).await.unwrap_err();
        assert!(matches!(err, OrderbookError::Validation(_)));
    }

    #[tokio::test]
    async fn malformed_response_is_a_parse_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/quote"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_raw(r#"{"quote": {}, "from": "nope"}"#, "application/json"),
            )
            .mount(&server)
            .await;

        let api = OrderbookApi::new(server.uri(), 5000).unwrap();
        let err = api.quote(&request()).await.unwrap_err();
        assert!(matches!(err, OrderbookError::Parse(_)));
    }
}
