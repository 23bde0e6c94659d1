//! Types for public REST API endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::TimeScope;
use crate::types::serde_helpers::u64_from_string;

/// Market ticker snapshot.
#[derive(Debug, Clone, Deserialize)]
pub struct Ticker {
    /// Last traded price.
    pub last: Decimal,
    /// Highest price in the window.
    pub high: Decimal,
    /// Lowest price in the window.
    pub low: Decimal,
    /// Volume weighted average price over the window.
    pub vwap: Decimal,
    /// Traded volume over the window.
    pub volume: Decimal,
    /// Highest buy order.
    pub bid: Decimal,
    /// Lowest sell order.
    pub ask: Decimal,
    /// Unix timestamp of the snapshot.
    #[serde(deserialize_with = "u64_from_string")]
    pub timestamp: u64,
}

/// One price level of the order book: `[price, amount]` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PriceLevel(pub Decimal, pub Decimal);

impl PriceLevel {
    /// The price of this level.
    pub fn price(&self) -> Decimal {
        self.0
    }

    /// The amount available at this level.
    pub fn amount(&self) -> Decimal {
        self.1
    }
}

/// Full order book snapshot.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderBook {
    /// Unix timestamp of the snapshot.
    #[serde(deserialize_with = "u64_from_string")]
    pub timestamp: u64,
    /// Buy side, best bid first.
    pub bids: Vec<PriceLevel>,
    /// Sell side, best ask first.
    pub asks: Vec<PriceLevel>,
}

/// A single public market transaction.
#[derive(Debug, Clone, Deserialize)]
pub struct Transaction {
    /// Unix timestamp of the trade.
    #[serde(deserialize_with = "u64_from_string")]
    pub date: u64,
    /// Transaction ID.
    pub tid: u64,
    /// Trade price.
    pub price: Decimal,
    /// Traded amount.
    pub amount: Decimal,
}

/// Request parameters for the public transactions endpoint.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TransactionsRequest {
    /// Aggregation window (minute, hour or day).
    pub time: TimeScope,
}

impl TransactionsRequest {
    /// Request transactions over the given window.
    pub fn new(time: TimeScope) -> Self {
        Self { time }
    }
}
