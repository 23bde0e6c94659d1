//! Common domain types for the Bitstamp API.

use serde::{Deserialize, Serialize};

/// Buy or sell side of an order.
///
/// The legacy API encodes the side as an integer: `0` = buy, `1` = sell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum OrderSide {
    /// Buy order (wire value 0)
    Buy,
    /// Sell order (wire value 1)
    Sell,
}

impl From<OrderSide> for u8 {
    fn from(side: OrderSide) -> Self {
        match side {
            OrderSide::Buy => 0,
            OrderSide::Sell => 1,
        }
    }
}

impl TryFrom<u8> for OrderSide {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(OrderSide::Buy),
            1 => Ok(OrderSide::Sell),
            other => Err(format!("Unknown order side code: {other}")),
        }
    }
}

impl std::fmt::Display for OrderSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderSide::Buy => write!(f, "buy"),
            OrderSide::Sell => write!(f, "sell"),
        }
    }
}

/// Kind of a user transaction.
///
/// Integer-coded on the wire: `0` = deposit, `1` = withdrawal, `2` = trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum UserTransactionType {
    /// Funds deposited into the account (wire value 0)
    Deposit,
    /// Funds withdrawn from the account (wire value 1)
    Withdrawal,
    /// A market trade (wire value 2)
    Trade,
}

impl From<UserTransactionType> for u8 {
    fn from(kind: UserTransactionType) -> Self {
        match kind {
            UserTransactionType::Deposit => 0,
            UserTransactionType::Withdrawal => 1,
            UserTransactionType::Trade => 2,
        }
    }
}

impl TryFrom<u8> for UserTransactionType {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(UserTransactionType::Deposit),
            1 => Ok(UserTransactionType::Withdrawal),
            2 => Ok(UserTransactionType::Trade),
            other => Err(format!("Unknown user transaction type code: {other}")),
        }
    }
}

/// Aggregation window for the public transactions endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeScope {
    /// Transactions from the last minute (the API default)
    #[default]
    Minute,
    /// Transactions from the last hour
    Hour,
    /// Transactions from the last day
    Day,
}

impl std::fmt::Display for TimeScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimeScope::Minute => write!(f, "minute"),
            TimeScope::Hour => write!(f, "hour"),
            TimeScope::Day => write!(f, "day"),
        }
    }
}

/// Sort order for paginated history endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Newest first (the API default)
    #[default]
    Desc,
    /// Oldest first
    Asc,
}

impl std::fmt::Display for SortDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortDirection::Desc => write!(f, "desc"),
            SortDirection::Asc => write!(f, "asc"),
        }
    }
}
