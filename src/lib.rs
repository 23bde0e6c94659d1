//! # Bitstamp Client
//!
//! An async Rust client for the legacy Bitstamp HTTP API with encrypted
//! local credential storage.
//!
//! ## Features
//!
//! - Public and private REST endpoints of the legacy Bitstamp API
//! - HMAC-SHA256 request signing with strictly increasing session nonces
//! - Password-based AES-256-CFB encryption of credentials at rest
//! - Financial precision with `rust_decimal`
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use bitstamp_api_client::rest::BitstampRestClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = BitstampRestClient::new();
//!     let ticker = client.ticker().await?;
//!     println!("bid {} | last {} | ask {}", ticker.bid, ticker.last, ticker.ask);
//!     Ok(())
//! }
//! ```
//!
//! ## Credential storage
//!
//! ```rust,no_run
//! use bitstamp_api_client::auth::Credentials;
//! use bitstamp_api_client::store::{CredentialStore, LoadOutcome};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let store = CredentialStore::new();
//! let credentials = Credentials::new("k".repeat(32), "s".repeat(32), "123456");
//! store.save(&credentials, "correct horse battery staple")?;
//!
//! match store.load("correct horse battery staple")? {
//!     LoadOutcome::Loaded(credentials) => println!("client ID: {}", credentials.client_id),
//!     LoadOutcome::Absent => println!("no saved credentials"),
//!     LoadOutcome::Corrupted => println!("wrong password or damaged file"),
//! }
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod error;
pub mod rest;
pub mod store;
pub mod types;

// Re-export commonly used types at crate root
pub use error::BitstampError;
pub use types::common::{OrderSide, SortDirection, TimeScope};

/// Result type alias using BitstampError
pub type Result<T> = std::result::Result<T, BitstampError>;
