//! Private REST API endpoints (authentication required).
//!
//! These endpoints require API credentials to be configured on the client.
//! Every call obtains the next session nonce, signs the request and posts
//! the signed parameters in the form body.

mod types;

pub use types::*;

use rust_decimal::Decimal;

use crate::error::BitstampError;
use crate::rest::BitstampRestClient;
use crate::rest::endpoints::private;

#[derive(serde::Serialize)]
struct Empty {}

impl BitstampRestClient {
    /// Get the account balance.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use bitstamp_api_client::rest::BitstampRestClient;
    /// use bitstamp_api_client::auth::StaticCredentials;
    /// use std::sync::Arc;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let credentials = Arc::new(StaticCredentials::new("key", "secret", "id"));
    ///     let client = BitstampRestClient::builder().credentials(credentials).build();
    ///
    ///     let balance = client.balance().await?;
    ///     println!("fee: {}%", balance.fee);
    ///     Ok(())
    /// }
    /// ```
    pub async fn balance(&self) -> Result<AccountBalance, BitstampError> {
        self.private_post(private::BALANCE, &Empty {}).await
    }

    /// Get the account's transaction history.
    pub async fn user_transactions(
        &self,
        request: Option<&UserTransactionsRequest>,
    ) -> Result<Vec<UserTransaction>, BitstampError> {
        match request {
            Some(req) => self.private_post(private::USER_TRANSACTIONS, req).await,
            None => {
                self.private_post(private::USER_TRANSACTIONS, &UserTransactionsRequest::default())
                    .await
            }
        }
    }

    /// Get all open orders.
    pub async fn open_orders(&self) -> Result<Vec<Order>, BitstampError> {
        self.private_post(private::OPEN_ORDERS, &Empty {}).await
    }

    /// Get the status of a single order.
    pub async fn order_status(&self, order_id: u64) -> Result<OrderStatusInfo, BitstampError> {
        self.private_post(private::ORDER_STATUS, &OrderIdRequest::new(order_id))
            .await
    }

    /// Cancel an open order. Returns `true` if the order was cancelled.
    pub async fn cancel_order(&self, order_id: u64) -> Result<bool, BitstampError> {
        self.private_post(private::CANCEL_ORDER, &OrderIdRequest::new(order_id))
            .await
    }

    /// Cancel all open orders. Returns `true` if every order was cancelled.
    pub async fn cancel_all_orders(&self) -> Result<bool, BitstampError> {
        self.private_post(private::CANCEL_ALL_ORDERS, &Empty {}).await
    }

    /// Place a buy limit order for `amount` BTC at `price` USD/BTC.
    pub async fn buy(&self, amount: Decimal, price: Decimal) -> Result<Order, BitstampError> {
        self.private_post(private::BUY, &LimitOrderRequest::new(amount, price))
            .await
    }

    /// Place a sell limit order for `amount` BTC at `price` USD/BTC.
    pub async fn sell(&self, amount: Decimal, price: Decimal) -> Result<Order, BitstampError> {
        self.private_post(private::SELL, &LimitOrderRequest::new(amount, price))
            .await
    }
}
