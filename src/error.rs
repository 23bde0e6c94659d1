//! Error types for the Bitstamp client library.

use thiserror::Error;

/// The main error type for all Bitstamp client operations.
#[derive(Error, Debug)]
pub enum BitstampError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// HTTP request with middleware failed
    #[error("HTTP request failed: {0}")]
    HttpMiddleware(#[from] reqwest_middleware::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing error
    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),

    /// Filesystem error while reading or writing the credential file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Bitstamp API returned an error
    #[error("Bitstamp API error: {0}")]
    Api(ApiError),

    /// Authentication error
    #[error("Authentication error: {0}")]
    Auth(String),

    /// Invalid response from the API
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Missing required credentials
    #[error("Missing credentials: API key, secret and client ID required for private endpoints")]
    MissingCredentials,

    /// Ciphertext envelope could not be decoded or split
    #[error("Decryption failed: {0}")]
    Decryption(String),

    /// Cipher setup or entropy failure while encrypting
    #[error("Cryptography error: {0}")]
    Crypto(String),

    /// Decrypted or loaded credential data has an unexpected length
    #[error("Credential data corrupted: expected {expected} bytes, got {actual}")]
    Corruption {
        /// Expected decoded length in bytes
        expected: usize,
        /// Actual decoded length in bytes
        actual: usize,
    },
}

/// An error returned by the Bitstamp API in a response body.
///
/// The legacy API reports failures as a JSON object with an `error` member,
/// e.g. `{"error": "Invalid signature"}` or
/// `{"error": {"__all__": ["Not enough balance."]}}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// Human-readable error message
    pub message: String,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl ApiError {
    /// Create a new API error from a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Parse an API error from the `error` member of a response body.
    ///
    /// The member is either a plain string or an object mapping field names
    /// to lists of messages; both are flattened into one message.
    pub fn from_error_value(error: &serde_json::Value) -> Self {
        match error {
            serde_json::Value::String(s) => Self::new(s.clone()),
            serde_json::Value::Object(map) => {
                let mut parts = Vec::new();
                for (field, messages) in map {
                    match messages {
                        serde_json::Value::Array(list) => {
                            for m in list {
                                if let serde_json::Value::String(s) = m {
                                    parts.push(format!("{field}: {s}"));
                                }
                            }
                        }
                        serde_json::Value::String(s) => parts.push(format!("{field}: {s}")),
                        other => parts.push(format!("{field}: {other}")),
                    }
                }
                Self::new(parts.join("; "))
            }
            other => Self::new(other.to_string()),
        }
    }

    /// Check if this is an invalid nonce error.
    pub fn is_invalid_nonce(&self) -> bool {
        self.message.contains("Invalid nonce")
    }

    /// Check if this is an invalid signature error.
    pub fn is_invalid_signature(&self) -> bool {
        self.message.contains("Invalid signature")
    }

    /// Check if this is an invalid API key error.
    pub fn is_invalid_key(&self) -> bool {
        self.message.contains("API key not found")
    }
}
