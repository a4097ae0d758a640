//! # Domain Entities
//!
//! The financial records the accounting run operates on.
//!
//! - [`quote`]: orderbook quote request/response protocol model
//! - [`transfer`]: per-receiver settlement transfers with in-place
//!   slippage accumulation
//! - [`slippage`]: solver-reported signed adjustments
//! - [`internal_transfer`]: classified internal token movements

pub mod internal_transfer;
pub mod quote;
pub mod slippage;
pub mod transfer;

pub use internal_transfer::{InternalTokenTransfer, InternalTransferRow};
pub use quote::{Quote, QuoteAmount, QuoteRequest, QuoteResponse};
pub use slippage::{SlippageRow, SolverSlippage, SplitSlippages, WEI_PER_TOKEN};
pub use transfer::{Transfer, TransferRow};
