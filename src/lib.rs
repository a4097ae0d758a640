//! # Settlement Accounting
//!
//! Off-chain accounting for a decentralized exchange settlement protocol.
//!
//! The crate covers two independent flows sharing the same validated value
//! objects:
//!
//! - **Quoting**: build an orderbook quote request, validate and serialize
//!   it under the exactly-one-amount-field invariant, and decode the quote
//!   response permissively ([`domain::entities::quote`],
//!   [`infrastructure::orderbook`]).
//! - **Reconciliation**: fetch a fixed accounting period's settlement
//!   transfers and solver slippage records, and fold the signed
//!   adjustments into per-receiver balances under an overdraft-prevention
//!   invariant ([`domain::entities::transfer`],
//!   [`application::services::reconciliation`]).
//!
//! # Layers
//!
//! - [`domain`]: pure, synchronous financial model; all invariant
//!   enforcement lives here
//! - [`application`]: the accounting run's use cases
//! - [`infrastructure`]: orderbook HTTP client, analytics query seam,
//!   trusted token list
//! - [`config`] / [`logging`]: ambient service wiring
//!
//! # Example
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
//!     1_700_000_000,
//!     OrderKind::Sell,
//!     QuoteAmount::SellBeforeFee(U256::exp10(18)),
//! );
//! let body = request.to_wire_representation().unwrap();
//! assert_eq!(body["sellAmountBeforeFee"], "1000000000000000000");
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod logging;

pub use application::error::{ApplicationError, ApplicationResult};
pub use domain::entities::{
    Quote, QuoteAmount, QuoteRequest, QuoteResponse, SolverSlippage, SplitSlippages, Transfer,
};
pub use domain::errors::{ParseError, ValidationError};
pub use domain::value_objects::{
    AccountingPeriod, Address, AppData, Network, OrderKind, PriceQuality, TokenBalance, TokenType,
};
pub use infrastructure::orderbook::OrderbookApi;
