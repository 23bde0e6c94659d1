//! Authentication module for the Bitstamp API.
//!
//! This module provides:
//! - Credential management with secure secret storage
//! - Nonce generation for replay attack prevention
//! - HMAC-SHA256 signature generation for authenticated requests

mod credentials;
mod nonce;
mod signature;

pub use credentials::{
    API_KEY_LEN, API_SECRET_LEN, CLIENT_ID_LEN, Credentials, CredentialsProvider, ENCODED_LEN,
    EnvCredentials, StaticCredentials,
};
pub use nonce::{NonceProvider, SessionNonce, advance};
pub use signature::{AuthParams, sign_request};
