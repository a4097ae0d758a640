//! # Value Objects
//!
//! Immutable types with validation and domain semantics.
//!
//! - [`Address`]: validated 20-byte account identifier with EIP-55 display
//! - [`AppData`]: validated 32-byte content hash
//! - [`AccountingPeriod`]: half-open date range for one accounting run
//! - Closed wire enums: [`Network`], [`OrderKind`], [`TokenBalance`],
//!   [`PriceQuality`], [`TokenType`], [`TransferType`]

pub mod accounting_period;
pub mod address;
pub mod app_data;
pub mod enums;

pub use accounting_period::AccountingPeriod;
pub use address::Address;
pub use app_data::AppData;
pub use enums::{Network, OrderKind, PriceQuality, TokenBalance, TokenType, TransferType};
