//! Password-based encryption for the credential file.
//!
//! The on-disk format is `base64(iv ‖ ciphertext)` where the ciphertext is
//! produced by AES-256-CFB under a key derived from the user's password with
//! a single SHA-256 pass. The format is inherited and kept byte-compatible;
//! two known weaknesses come with it:
//!
//! - the key derivation uses no salt and no iteration count, and
//! - the cipher mode carries no authentication tag, so a wrong password
//!   yields garbage plaintext instead of an error.
//!
//! Callers detect the wrong-password case through the fixed-length check on
//! the decrypted payload (see [`crate::store::CredentialStore`]).

use aes::Aes256;
use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use cfb_mode::cipher::{AsyncStreamCipher, KeyIvInit};
use rand::RngCore;
use rand::rngs::OsRng;
use sha2::{Digest, Sha256};

use crate::error::BitstampError;

type Aes256CfbEnc = cfb_mode::Encryptor<Aes256>;
type Aes256CfbDec = cfb_mode::Decryptor<Aes256>;

/// IV length in bytes, fixed by the AES block size.
pub const IV_LEN: usize = 16;

/// Symmetric key length in bytes (AES-256).
pub const KEY_LEN: usize = 32;

/// Derive the symmetric key from a password.
///
/// A single SHA-256 pass over the UTF-8 password bytes. Deterministic: the
/// same password always yields the same key.
pub fn derive_key(password: &str) -> [u8; KEY_LEN] {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    hasher.finalize().into()
}

/// Encrypt a plaintext under a password.
///
/// Generates a fresh random IV from the operating system's entropy source on
/// every call and returns `base64(iv ‖ ciphertext)`. Fails if the entropy
/// source is unavailable.
pub fn encrypt(password: &str, plaintext: &[u8]) -> Result<String, BitstampError> {
    let key = derive_key(password);

    let mut iv = [0u8; IV_LEN];
    OsRng
        .try_fill_bytes(&mut iv)
        .map_err(|e| BitstampError::Crypto(format!("Entropy source unavailable: {e}")))?;

    let mut buf = plaintext.to_vec();
    let cipher = Aes256CfbEnc::new_from_slices(&key, &iv)
        .map_err(|e| BitstampError::Crypto(format!("Invalid cipher parameters: {e}")))?;
    cipher.encrypt(&mut buf);

    let mut blob = Vec::with_capacity(IV_LEN + buf.len());
    blob.extend_from_slice(&iv);
    blob.extend_from_slice(&buf);
    Ok(BASE64.encode(blob))
}

/// Decrypt a `base64(iv ‖ ciphertext)` blob under a password.
///
/// Fails with [`BitstampError::Decryption`] when the base64 envelope is
/// malformed or the decoded blob is shorter than one IV. A wrong password is
/// not detected here; it yields garbage plaintext that the caller must
/// validate by length.
pub fn decrypt(password: &str, blob: &str) -> Result<Vec<u8>, BitstampError> {
    let data = BASE64
        .decode(blob.trim())
        .map_err(|e| BitstampError::Decryption(format!("Malformed base64 envelope: {e}")))?;

    if data.len() < IV_LEN {
        return Err(BitstampError::Decryption(format!(
            "Blob too short to contain an IV: {} bytes",
            data.len()
        )));
    }

    let (iv, ciphertext) = data.split_at(IV_LEN);
    let key = derive_key(password);

    let mut buf = ciphertext.to_vec();
    let cipher = Aes256CfbDec::new_from_slices(&key, iv)
        .map_err(|e| BitstampError::Crypto(format!("Invalid cipher parameters: {e}")))?;
    cipher.decrypt(&mut buf);

    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_key_deterministic() {
        assert_eq!(derive_key("hunter2"), derive_key("hunter2"));
        assert_ne!(derive_key("hunter2"), derive_key("hunter3"));
    }

    #[test]
    fn test_derive_key_known_value() {
        // SHA-256("hunter2")
        assert_eq!(
            hex::encode(derive_key("hunter2")),
            "f52fbd32b2b3b86ff88ef6c490628285f482af15ddcb29541f94bcf526a3f6c7"
        );
    }

    #[test]
    fn test_encrypt_decrypt_round_trip() {
        let plaintext = b"foobar";
        let blob = encrypt("pass", plaintext).unwrap();
        let decrypted = decrypt("pass", &blob).unwrap();
        assert_eq!(decrypted, plaintext);
    }

    #[test]
    fn test_iv_freshness() {
        let plaintext = b"same plaintext every time";
        let blob1 = encrypt("pass", plaintext).unwrap();
        let blob2 = encrypt("pass", plaintext).unwrap();

        // Fresh IV per call means distinct ciphertexts...
        assert_ne!(blob1, blob2);

        // ...that both decrypt to the original plaintext.
        assert_eq!(decrypt("pass", &blob1).unwrap(), plaintext);
        assert_eq!(decrypt("pass", &blob2).unwrap(), plaintext);
    }

    #[test]
    fn test_wrong_password_yields_garbage_not_error() {
        let plaintext = b"seventy bytes of credential data would go here";
        let blob = encrypt("right", plaintext).unwrap();

        let garbage = decrypt("wrong", &blob).unwrap();
        assert_eq!(garbage.len(), plaintext.len());
        assert_ne!(garbage, plaintext);
    }

    #[test]
    fn test_decrypt_rejects_malformed_base64() {
        let err = decrypt("pass", "not*valid*base64!").unwrap_err();
        assert!(matches!(err, BitstampError::Decryption(_)));
    }

    #[test]
    fn test_decrypt_rejects_blob_shorter_than_iv() {
        let short = BASE64.encode([0u8; IV_LEN - 1]);
        let err = decrypt("pass", &short).unwrap_err();
        assert!(matches!(err, BitstampError::Decryption(_)));
    }

    #[test]
    fn test_empty_ciphertext_is_valid() {
        // An IV with no payload decrypts to an empty plaintext.
        let blob = encrypt("pass", b"").unwrap();
        assert_eq!(decrypt("pass", &blob).unwrap(), b"");
    }
}
