//! Credential management for Bitstamp API authentication.

use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};

use crate::error::BitstampError;

/// Fixed width of the API key in the on-disk encoding.
pub const API_KEY_LEN: usize = 32;
/// Fixed width of the API secret in the on-disk encoding.
pub const API_SECRET_LEN: usize = 32;
/// Fixed width of the client ID in the on-disk encoding.
pub const CLIENT_ID_LEN: usize = 6;
/// Total decoded length of an encoded credential triple.
pub const ENCODED_LEN: usize = API_KEY_LEN + API_SECRET_LEN + CLIENT_ID_LEN;

/// Placeholder value marking a field as not yet authenticated.
const PLACEHOLDER: &str = "X";

/// API credentials containing the key, secret and client ID.
#[derive(Clone)]
pub struct Credentials {
    /// The API key (public identifier)
    pub api_key: String,
    /// The API secret (private, used for signing)
    api_secret: SecretString,
    /// The numeric client ID assigned by the exchange
    pub client_id: String,
}

impl Credentials {
    /// Create new credentials from an API key, secret and client ID.
    pub fn new(
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
        client_id: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: SecretString::from(api_secret.into()),
            client_id: client_id.into(),
        }
    }

    /// Create the uninitialized sentinel value.
    ///
    /// A session starts with placeholder credentials so callers can detect
    /// that no authentication data has been entered or loaded yet.
    pub fn placeholder() -> Self {
        Self::new(PLACEHOLDER, PLACEHOLDER, PLACEHOLDER)
    }

    /// Check whether any field still holds the uninitialized placeholder.
    pub fn is_placeholder(&self) -> bool {
        self.api_key == PLACEHOLDER
            || self.api_secret.expose_secret() == PLACEHOLDER
            || self.client_id == PLACEHOLDER
    }

    /// Overwrite all fields with the placeholder.
    ///
    /// Best-effort hygiene for session teardown; the runtime may retain
    /// copies of the previous values elsewhere.
    pub fn scrub(&mut self) {
        self.api_key = PLACEHOLDER.to_string();
        self.api_secret = SecretString::from(PLACEHOLDER);
        self.client_id = PLACEHOLDER.to_string();
    }

    /// Get the API secret for signing.
    ///
    /// This method exposes the secret - use carefully.
    pub fn expose_secret(&self) -> &str {
        self.api_secret.expose_secret()
    }

    /// Encode the triple into the fixed-width 70-byte form `key ‖ secret ‖ id`.
    ///
    /// Fails with [`BitstampError::Corruption`] if any field does not match
    /// its legacy width (32 + 32 + 6 bytes).
    pub fn to_fixed_bytes(&self) -> Result<Vec<u8>, BitstampError> {
        let key = self.api_key.as_bytes();
        let secret = self.api_secret.expose_secret().as_bytes();
        let id = self.client_id.as_bytes();

        if key.len() != API_KEY_LEN || secret.len() != API_SECRET_LEN || id.len() != CLIENT_ID_LEN {
            return Err(BitstampError::Corruption {
                expected: ENCODED_LEN,
                actual: key.len() + secret.len() + id.len(),
            });
        }

        let mut data = Vec::with_capacity(ENCODED_LEN);
        data.extend_from_slice(key);
        data.extend_from_slice(secret);
        data.extend_from_slice(id);
        Ok(data)
    }

    /// Decode a fixed-width 70-byte payload into a credential triple.
    ///
    /// The field order is API key, then API secret, then client ID. Any
    /// other total length is a corruption signal.
    pub fn from_fixed_bytes(data: &[u8]) -> Result<Self, BitstampError> {
        if data.len() != ENCODED_LEN {
            return Err(BitstampError::Corruption {
                expected: ENCODED_LEN,
                actual: data.len(),
            });
        }

        let api_key = String::from_utf8(data[..API_KEY_LEN].to_vec())
            .map_err(|_| BitstampError::Decryption("API key is not valid UTF-8".to_string()))?;
        let api_secret = String::from_utf8(data[API_KEY_LEN..API_KEY_LEN + API_SECRET_LEN].to_vec())
            .map_err(|_| BitstampError::Decryption("API secret is not valid UTF-8".to_string()))?;
        let client_id = String::from_utf8(data[API_KEY_LEN + API_SECRET_LEN..].to_vec())
            .map_err(|_| BitstampError::Decryption("client ID is not valid UTF-8".to_string()))?;

        Ok(Self::new(api_key, api_secret, client_id))
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("api_secret", &"[REDACTED]")
            .field("client_id", &self.client_id)
            .finish()
    }
}

/// Trait for providing API credentials.
///
/// Implement this trait to customize how credentials are retrieved,
/// for example from a secrets manager or environment variables.
pub trait CredentialsProvider: Send + Sync {
    /// Get the credentials.
    fn get_credentials(&self) -> &Credentials;
}

/// Static credentials provider that holds credentials directly.
#[derive(Clone)]
pub struct StaticCredentials {
    credentials: Credentials,
}

impl StaticCredentials {
    /// Create a new static credentials provider.
    pub fn new(
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
        client_id: impl Into<String>,
    ) -> Self {
        Self {
            credentials: Credentials::new(api_key, api_secret, client_id),
        }
    }

    /// Wrap an already-built credential triple, e.g. one loaded from the
    /// credential store.
    pub fn from_credentials(credentials: Credentials) -> Self {
        Self { credentials }
    }
}

impl CredentialsProvider for StaticCredentials {
    fn get_credentials(&self) -> &Credentials {
        &self.credentials
    }
}

impl CredentialsProvider for Arc<StaticCredentials> {
    fn get_credentials(&self) -> &Credentials {
        &self.credentials
    }
}

/// Credentials provider that reads from environment variables.
///
/// By default, reads from `BITSTAMP_API_KEY`, `BITSTAMP_API_SECRET` and
/// `BITSTAMP_CLIENT_ID`.
pub struct EnvCredentials {
    credentials: Credentials,
}

impl EnvCredentials {
    /// Create credentials from default environment variables.
    ///
    /// # Panics
    ///
    /// Panics if the environment variables are not set.
    pub fn from_env() -> Self {
        Self::from_env_vars("BITSTAMP_API_KEY", "BITSTAMP_API_SECRET", "BITSTAMP_CLIENT_ID")
    }

    /// Create credentials from custom environment variable names.
    ///
    /// # Panics
    ///
    /// Panics if the environment variables are not set.
    pub fn from_env_vars(key_var: &str, secret_var: &str, client_id_var: &str) -> Self {
        let api_key = std::env::var(key_var)
            .unwrap_or_else(|_| panic!("Environment variable {key_var} not set"));
        let api_secret = std::env::var(secret_var)
            .unwrap_or_else(|_| panic!("Environment variable {secret_var} not set"));
        let client_id = std::env::var(client_id_var)
            .unwrap_or_else(|_| panic!("Environment variable {client_id_var} not set"));

        Self {
            credentials: Credentials::new(api_key, api_secret, client_id),
        }
    }

    /// Try to create credentials from default environment variables.
    ///
    /// Returns `None` if any of the environment variables are not set.
    pub fn try_from_env() -> Option<Self> {
        let api_key = std::env::var("BITSTAMP_API_KEY").ok()?;
        let api_secret = std::env::var("BITSTAMP_API_SECRET").ok()?;
        let client_id = std::env::var("BITSTAMP_CLIENT_ID").ok()?;

        Some(Self {
            credentials: Credentials::new(api_key, api_secret, client_id),
        })
    }
}

impl CredentialsProvider for EnvCredentials {
    fn get_credentials(&self) -> &Credentials {
        &self.credentials
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_debug_redacted() {
        let creds = Credentials::new("my_key", "super_secret", "123456");
        let debug_str = format!("{:?}", creds);
        assert!(debug_str.contains("my_key"));
        assert!(debug_str.contains("123456"));
        assert!(!debug_str.contains("super_secret"));
        assert!(debug_str.contains("[REDACTED]"));
    }

    #[test]
    fn test_static_credentials() {
        let provider = StaticCredentials::new("key", "secret", "id");
        let creds = provider.get_credentials();
        assert_eq!(creds.api_key, "key");
        assert_eq!(creds.expose_secret(), "secret");
        assert_eq!(creds.client_id, "id");
    }

    #[test]
    fn test_placeholder_detection() {
        let mut creds = Credentials::placeholder();
        assert!(creds.is_placeholder());

        creds = Credentials::new("key", "secret", "id");
        assert!(!creds.is_placeholder());

        creds.scrub();
        assert!(creds.is_placeholder());
        assert_eq!(creds.api_key, "X");
        assert_eq!(creds.expose_secret(), "X");
    }

    #[test]
    fn test_fixed_width_round_trip() {
        let creds = Credentials::new("k".repeat(32), "s".repeat(32), "123456");
        let bytes = creds.to_fixed_bytes().unwrap();
        assert_eq!(bytes.len(), ENCODED_LEN);

        let decoded = Credentials::from_fixed_bytes(&bytes).unwrap();
        assert_eq!(decoded.api_key, creds.api_key);
        assert_eq!(decoded.expose_secret(), creds.expose_secret());
        assert_eq!(decoded.client_id, creds.client_id);
    }

    #[test]
    fn test_fixed_width_rejects_wrong_field_widths() {
        let creds = Credentials::new("short", "s".repeat(32), "123456");
        assert!(matches!(
            creds.to_fixed_bytes(),
            Err(BitstampError::Corruption { expected: 70, .. })
        ));
    }

    #[test]
    fn test_fixed_width_rejects_wrong_total_length() {
        let err = Credentials::from_fixed_bytes(&[0u8; 69]).unwrap_err();
        assert!(matches!(
            err,
            BitstampError::Corruption {
                expected: 70,
                actual: 69
            }
        ));
    }
}
