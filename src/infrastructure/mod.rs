//! # Infrastructure Layer
//!
//! Clients and seams for the external collaborators: the orderbook API,
//! the analytics query engine, and the hosted trusted-token list. All
//! blocking I/O of the crate lives behind this layer.

pub mod analytics;
pub mod error;
pub mod http;
pub mod orderbook;
pub mod token_list;
