//! Shared types and serde helpers for the Bitstamp API.

pub mod common;
pub mod serde_helpers;

pub use common::{OrderSide, SortDirection, TimeScope, UserTransactionType};
