//! # Domain Layer
//!
//! Pure, synchronous accounting logic: validated value objects, the quote
//! protocol model, and the transfer-slippage reconciliation records. No
//! component here performs I/O; transports live in `infrastructure`.

pub mod entities;
pub mod errors;
pub mod value_objects;
