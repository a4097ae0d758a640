//! # Accounting Services
//!
//! The use cases of an accounting run: fetch a period's records through
//! the analytics seam and fold slippage into settlement transfers.

pub mod period_slippage;
pub mod reconciliation;

pub use period_slippage::{get_period_slippage, get_period_transfers};
pub use reconciliation::{apply_period_slippage, index_by_receiver};
