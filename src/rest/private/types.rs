//! Types for private REST API endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize, Serializer};

use crate::types::serde_helpers::maybe_u64_from_string;
use crate::types::{OrderSide, SortDirection, UserTransactionType};

/// Account balance across both currencies of the trading pair.
#[derive(Debug, Clone, Deserialize)]
pub struct AccountBalance {
    /// Total USD balance.
    pub usd_balance: Decimal,
    /// Total BTC balance.
    pub btc_balance: Decimal,
    /// USD reserved in open orders.
    pub usd_reserved: Decimal,
    /// BTC reserved in open orders.
    pub btc_reserved: Decimal,
    /// USD available for trading.
    pub usd_available: Decimal,
    /// BTC available for trading.
    pub btc_available: Decimal,
    /// Customer trading fee, in percent.
    pub fee: Decimal,
}

/// Request parameters for the user transactions endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct UserTransactionsRequest {
    /// Number of transactions to skip.
    pub offset: u64,
    /// Maximum number of transactions to return (API maximum 1000).
    pub limit: u64,
    /// Sort order by date and time.
    pub sort: SortDirection,
}

impl Default for UserTransactionsRequest {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: 200,
            sort: SortDirection::Desc,
        }
    }
}

/// One entry of the account's transaction history.
#[derive(Debug, Clone, Deserialize)]
pub struct UserTransaction {
    /// Date and time of the transaction.
    pub datetime: String,
    /// Transaction ID.
    pub id: u64,
    /// Kind of transaction (deposit, withdrawal or trade).
    #[serde(rename = "type")]
    pub kind: UserTransactionType,
    /// USD amount (negative for outflows).
    pub usd: Decimal,
    /// BTC amount (negative for outflows).
    pub btc: Decimal,
    /// Fee charged for the transaction.
    pub fee: Decimal,
    /// ID of the order this trade executed against, if any.
    #[serde(default, deserialize_with = "maybe_u64_from_string")]
    pub order_id: Option<u64>,
}

/// An order as reported by the exchange.
///
/// Returned both from the open orders listing and as the acknowledgement of
/// a newly placed buy or sell order.
#[derive(Debug, Clone, Deserialize)]
pub struct Order {
    /// Order ID.
    pub id: u64,
    /// Date and time the order was placed.
    pub datetime: String,
    /// Buy or sell.
    #[serde(rename = "type")]
    pub side: OrderSide,
    /// Limit price.
    pub price: Decimal,
    /// Remaining amount.
    pub amount: Decimal,
}

/// Lifecycle status of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum OrderLifecycleStatus {
    /// Accepted but not yet on the book.
    #[serde(rename = "In Queue")]
    InQueue,
    /// On the book, unfilled or partially filled.
    Open,
    /// Fully filled or cancelled.
    Finished,
}

/// A fill belonging to an order status report.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderFill {
    /// Transaction ID of the fill.
    pub tid: u64,
    /// USD value of the fill.
    pub usd: Decimal,
    /// BTC amount of the fill.
    pub btc: Decimal,
    /// Execution price.
    pub price: Decimal,
    /// Fee charged for the fill.
    pub fee: Decimal,
    /// Date and time of the fill.
    pub datetime: String,
}

/// Status report for a single order.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderStatusInfo {
    /// Current lifecycle status.
    pub status: OrderLifecycleStatus,
    /// Fills executed so far.
    #[serde(default)]
    pub transactions: Vec<OrderFill>,
}

/// Request carrying a single order ID.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct OrderIdRequest {
    /// The order ID.
    pub id: u64,
}

impl OrderIdRequest {
    /// Reference an order by ID.
    pub fn new(id: u64) -> Self {
        Self { id }
    }
}

/// Serialize an amount with exactly eight fractional digits, as the legacy
/// API expects for BTC quantities.
fn eight_places<S>(amount: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format!("{amount:.8}"))
}

/// Request parameters for placing a buy or sell limit order.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct LimitOrderRequest {
    /// Amount of BTC to trade, serialized with eight fractional digits.
    #[serde(serialize_with = "eight_places")]
    pub amount: Decimal,
    /// Limit price in USD.
    pub price: Decimal,
}

impl LimitOrderRequest {
    /// Trade `amount` BTC at limit `price`.
    pub fn new(amount: Decimal, price: Decimal) -> Self {
        Self { amount, price }
    }
}
