//! Encrypted persistence for the credential triple.
//!
//! Credentials are stored in one file at a fixed per-user path as
//! `base64(iv ‖ ciphertext)` where the decrypted payload is the 70-byte
//! fixed-width encoding `api_key ‖ api_secret ‖ client_id` (32 + 32 + 6).
//!
//! Decryption and parsing failures are recovered here: they degrade to an
//! "absent credentials" outcome plus a diagnostic, never a crash and never a
//! partial triple.

pub mod crypto;

use std::path::{Path, PathBuf};

use crate::auth::{Credentials, ENCODED_LEN};
use crate::error::BitstampError;

/// File name of the credential file inside the config directory.
const CREDENTIALS_FILE: &str = "credentials";

/// Directory under the user config dir holding the credential file.
const CONFIG_DIR: &str = "bitstamp-api-client";

/// How credentials are written to disk.
///
/// `Plaintext` exists for environments without a usable entropy source; it
/// is an explicit degraded mode and every save and load under it logs a
/// warning. It is never selected silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageMode {
    /// Password-based AES-256-CFB encryption (the default).
    #[default]
    Encrypted,
    /// Store the raw fixed-width bytes without encryption, with a loud
    /// warning on every operation.
    PlaintextWithWarning,
}

/// Outcome of loading the credential file.
#[derive(Debug)]
pub enum LoadOutcome {
    /// The file existed and decrypted to a valid triple.
    Loaded(Credentials),
    /// No credential file exists (or it could not be opened). This is the
    /// normal first-run outcome, not an error.
    Absent,
    /// The file existed but its contents did not decode to a valid triple,
    /// usually a wrong password or a damaged file. The caller should treat
    /// credentials as absent and re-prompt.
    Corrupted,
}

impl LoadOutcome {
    /// Convert into an optional triple, collapsing `Corrupted` into `None`.
    pub fn into_credentials(self) -> Option<Credentials> {
        match self {
            LoadOutcome::Loaded(credentials) => Some(credentials),
            LoadOutcome::Absent | LoadOutcome::Corrupted => None,
        }
    }
}

/// Persists and retrieves the credential triple at a fixed path.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    path: PathBuf,
    mode: StorageMode,
}

impl CredentialStore {
    /// Create a store at the default per-user path
    /// (`<config dir>/bitstamp-api-client/credentials`).
    pub fn new() -> Self {
        Self::at_path(Self::default_path())
    }

    /// Create a store at an explicit path (useful for tests).
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            mode: StorageMode::Encrypted,
        }
    }

    /// Select the storage mode. `PlaintextWithWarning` disables encryption
    /// and must only be used where no entropy source is available.
    pub fn with_mode(mut self, mode: StorageMode) -> Self {
        if mode == StorageMode::PlaintextWithWarning {
            tracing::warn!("credential store configured for PLAINTEXT storage; credentials will not be encrypted");
        }
        self.mode = mode;
        self
    }

    /// The path this store reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(CONFIG_DIR)
            .join(CREDENTIALS_FILE)
    }

    /// Encrypt and write the credential triple, creating parent directories
    /// as needed. Overwrites any existing file at the path.
    ///
    /// Fails if a field does not match its legacy fixed width, if the
    /// entropy source is unavailable, or on filesystem errors.
    pub fn save(&self, credentials: &Credentials, password: &str) -> Result<(), BitstampError> {
        let data = credentials.to_fixed_bytes()?;

        let contents = match self.mode {
            StorageMode::Encrypted => crypto::encrypt(password, &data)?,
            StorageMode::PlaintextWithWarning => {
                tracing::warn!(path = %self.path.display(), "saving credentials in PLAINTEXT");
                String::from_utf8(data).map_err(|_| {
                    BitstampError::Crypto("credential fields are not valid UTF-8".to_string())
                })?
            }
        };

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, contents)?;

        tracing::debug!(path = %self.path.display(), "credentials saved");
        Ok(())
    }

    /// Read and decrypt the credential file.
    ///
    /// A missing or unopenable file yields [`LoadOutcome::Absent`]. A file
    /// whose contents cannot be decoded, or whose decrypted payload is not
    /// exactly 70 bytes (the usual symptom of a wrong password), yields
    /// [`LoadOutcome::Corrupted`] with a warning; a partial triple is never
    /// returned. Only unexpected environment failures surface as `Err`.
    pub fn load(&self, password: &str) -> Result<LoadOutcome, BitstampError> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) => {
                tracing::debug!(path = %self.path.display(), error = %e, "no credential file");
                return Ok(LoadOutcome::Absent);
            }
        };

        let data = match self.mode {
            StorageMode::Encrypted => match crypto::decrypt(password, &contents) {
                Ok(data) => data,
                Err(e) => {
                    tracing::warn!(path = %self.path.display(), error = %e, "credential file is corrupted");
                    return Ok(LoadOutcome::Corrupted);
                }
            },
            StorageMode::PlaintextWithWarning => {
                tracing::warn!(path = %self.path.display(), "loading credentials from PLAINTEXT storage");
                contents.into_bytes()
            }
        };

        if data.len() != ENCODED_LEN {
            tracing::warn!(
                path = %self.path.display(),
                expected = ENCODED_LEN,
                actual = data.len(),
                "credential file decrypted to an unexpected length (wrong password or damaged file)"
            );
            return Ok(LoadOutcome::Corrupted);
        }

        match Credentials::from_fixed_bytes(&data) {
            Ok(credentials) => Ok(LoadOutcome::Loaded(credentials)),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "credential file is corrupted");
                Ok(LoadOutcome::Corrupted)
            }
        }
    }
}

impl Default for CredentialStore {
    fn default() -> Self {
        Self::new()
    }
}
