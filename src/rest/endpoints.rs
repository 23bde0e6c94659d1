//! Bitstamp REST API endpoint constants.

/// Base URL for the legacy Bitstamp REST API.
pub const BITSTAMP_BASE_URL: &str = "https://www.bitstamp.net/api";

/// Public endpoints (no authentication required).
pub mod public {
    /// Get ticker information.
    pub const TICKER: &str = "/ticker";
    /// Get hourly ticker information.
    pub const TICKER_HOUR: &str = "/ticker_hour";
    /// Get the order book.
    pub const ORDER_BOOK: &str = "/order_book";
    /// Get recent transactions.
    pub const TRANSACTIONS: &str = "/transactions";
}

/// Private endpoints (authentication required).
pub mod private {
    /// Get account balance.
    pub const BALANCE: &str = "/balance";
    /// Get user transaction history.
    pub const USER_TRANSACTIONS: &str = "/user_transactions";
    /// Get open orders.
    pub const OPEN_ORDERS: &str = "/open_orders";
    /// Get the status of an order.
    pub const ORDER_STATUS: &str = "/order_status";
    /// Cancel an order.
    pub const CANCEL_ORDER: &str = "/cancel_order";
    /// Cancel all open orders.
    pub const CANCEL_ALL_ORDERS: &str = "/cancel_all_orders";
    /// Place a buy limit order.
    pub const BUY: &str = "/buy";
    /// Place a sell limit order.
    pub const SELL: &str = "/sell";
}
