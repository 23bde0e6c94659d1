//! Public REST API endpoints (no authentication required).

mod types;

pub use types::*;

use crate::error::BitstampError;
use crate::rest::BitstampRestClient;
use crate::rest::endpoints::public;

impl BitstampRestClient {
    /// Get the market ticker.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use bitstamp_api_client::rest::BitstampRestClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = BitstampRestClient::new();
    ///     let ticker = client.ticker().await?;
    ///     println!("last price: {}", ticker.last);
    ///     Ok(())
    /// }
    /// ```
    pub async fn ticker(&self) -> Result<Ticker, BitstampError> {
        self.public_get(public::TICKER).await
    }

    /// Get the hourly ticker (values computed over the last hour).
    pub async fn ticker_hour(&self) -> Result<Ticker, BitstampError> {
        self.public_get(public::TICKER_HOUR).await
    }

    /// Get the full order book.
    pub async fn order_book(&self) -> Result<OrderBook, BitstampError> {
        self.public_get(public::ORDER_BOOK).await
    }

    /// Get recent market transactions.
    ///
    /// # Arguments
    ///
    /// * `request` - Optional aggregation window; defaults to the last minute.
    pub async fn transactions(
        &self,
        request: Option<&TransactionsRequest>,
    ) -> Result<Vec<Transaction>, BitstampError> {
        match request {
            Some(req) => self.public_get_with_params(public::TRANSACTIONS, req).await,
            None => self.public_get(public::TRANSACTIONS).await,
        }
    }
}
