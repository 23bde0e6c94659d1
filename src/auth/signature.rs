//! HMAC-SHA256 signature generation for Bitstamp API authentication.
//!
//! Bitstamp private endpoints require a signature computed as:
//! ```text
//! HMAC-SHA256(nonce + client_id + api_key, api_secret)
//! ```
//!
//! The message is the plain byte concatenation of the three fields with no
//! separators, and the digest is rendered as uppercase hexadecimal. The
//! resulting parameters are posted in the request body as
//! `key=<api_key>&signature=<digest>&nonce=<nonce>`.

use hmac::{Hmac, Mac};
use serde::Serialize;
use sha2::Sha256;

use crate::auth::Credentials;
use crate::error::BitstampError;

type HmacSha256 = Hmac<Sha256>;

/// The signed parameter set attached to every private API call.
///
/// Ephemeral and recomputed per request; serialized to the wire format only
/// at the transport boundary. Field order matters: the exchange expects
/// `key`, then `signature`, then `nonce`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthParams {
    /// The API key identifying the account.
    pub key: String,
    /// Uppercase hex HMAC-SHA256 digest.
    pub signature: String,
    /// The nonce used to compute the signature.
    pub nonce: u64,
}

impl AuthParams {
    /// Render the parameters as a URL-encoded query string,
    /// e.g. `key=abc&signature=0F..&nonce=1000`.
    pub fn to_query_string(&self) -> Result<String, BitstampError> {
        serde_urlencoded::to_string(self)
            .map_err(|e| BitstampError::Auth(format!("Failed to encode auth parameters: {e}")))
    }
}

/// Sign a request for Bitstamp's private API.
///
/// Computes the HMAC-SHA256 of `nonce ‖ client_id ‖ api_key` keyed with the
/// UTF-8 bytes of the API secret. Deterministic: identical inputs always
/// produce an identical signature.
///
/// # Example
///
/// ```rust
/// use bitstamp_api_client::auth::{Credentials, sign_request};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let credentials = Credentials::new("key1", "secret1", "client1");
/// let params = sign_request(&credentials, 1000)?;
/// assert_eq!(params.key, "key1");
/// assert_eq!(params.nonce, 1000);
/// # Ok(())
/// # }
/// ```
pub fn sign_request(credentials: &Credentials, nonce: u64) -> Result<AuthParams, BitstampError> {
    let mut hmac = HmacSha256::new_from_slice(credentials.expose_secret().as_bytes())
        .map_err(|e| BitstampError::Auth(format!("Invalid HMAC key: {e}")))?;

    // Message layout is nonce ‖ client_id ‖ api_key with no separators.
    hmac.update(nonce.to_string().as_bytes());
    hmac.update(credentials.client_id.as_bytes());
    hmac.update(credentials.api_key.as_bytes());
    let digest = hmac.finalize().into_bytes();

    Ok(AuthParams {
        key: credentials.api_key.clone(),
        signature: hex::encode_upper(digest),
        nonce,
    })
}
