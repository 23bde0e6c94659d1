use base64::{Engine as _, engine::general_purpose::STANDARD};
use tempfile::TempDir;

use bitstamp_api_client::auth::Credentials;
use bitstamp_api_client::store::{CredentialStore, LoadOutcome, StorageMode};

fn sample_credentials() -> Credentials {
    Credentials::new(
        "AKEYAKEYAKEYAKEYAKEYAKEYAKEYAKEY",
        "ASECRETASECRETASECRETASECRETASEC",
        "CID001",
    )
}

#[test]
fn test_save_then_load_round_trip() {
    let dir = TempDir::new().unwrap();
    let store = CredentialStore::at_path(dir.path().join("cred"));

    let credentials = sample_credentials();
    store.save(&credentials, "hunter2").unwrap();

    match store.load("hunter2").unwrap() {
        LoadOutcome::Loaded(loaded) => {
            assert_eq!(loaded.api_key, credentials.api_key);
            assert_eq!(loaded.expose_secret(), credentials.expose_secret());
            assert_eq!(loaded.client_id, credentials.client_id);
        }
        other => panic!("expected Loaded, got {other:?}"),
    }
}

#[test]
fn test_load_missing_file_is_absent() {
    let dir = TempDir::new().unwrap();
    let store = CredentialStore::at_path(dir.path().join("does-not-exist"));

    assert!(matches!(
        store.load("hunter2").unwrap(),
        LoadOutcome::Absent
    ));
}

#[test]
fn test_wrong_password_reports_corruption() {
    let dir = TempDir::new().unwrap();
    let store = CredentialStore::at_path(dir.path().join("cred"));

    store.save(&sample_credentials(), "hunter2").unwrap();

    // A wrong password decrypts to garbage of a mismatched length; the store
    // must report corruption, never a partial triple.
    assert!(matches!(
        store.load("wrong-password").unwrap(),
        LoadOutcome::Corrupted
    ));
}

#[test]
fn test_truncated_file_reports_corruption() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("cred");
    let store = CredentialStore::at_path(&path);

    store.save(&sample_credentials(), "hunter2").unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    std::fs::write(&path, &contents[..contents.len() / 2]).unwrap();

    assert!(matches!(
        store.load("hunter2").unwrap(),
        LoadOutcome::Corrupted
    ));
}

#[test]
fn test_garbage_file_reports_corruption() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("cred");
    std::fs::write(&path, "definitely not base64!!!").unwrap();

    let store = CredentialStore::at_path(&path);
    assert!(matches!(
        store.load("hunter2").unwrap(),
        LoadOutcome::Corrupted
    ));
}

#[test]
fn test_file_is_encrypted_on_disk() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("cred");
    let store = CredentialStore::at_path(&path);

    let credentials = sample_credentials();
    store.save(&credentials, "hunter2").unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(!contents.contains(credentials.expose_secret()));

    // The envelope decodes as base64 and carries the 16-byte IV plus the
    // 70-byte payload.
    let decoded = STANDARD.decode(contents.trim()).unwrap();
    assert_eq!(decoded.len(), 16 + 70);
}

#[test]
fn test_save_creates_parent_directories() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("deeper").join("cred");
    let store = CredentialStore::at_path(&path);

    store.save(&sample_credentials(), "hunter2").unwrap();
    assert!(path.exists());
}

#[test]
fn test_save_overwrites_existing_file() {
    let dir = TempDir::new().unwrap();
    let store = CredentialStore::at_path(dir.path().join("cred"));

    store.save(&sample_credentials(), "first-password").unwrap();

    let replacement = Credentials::new("B".repeat(32), "C".repeat(32), "CID002");
    store.save(&replacement, "second-password").unwrap();

    match store.load("second-password").unwrap() {
        LoadOutcome::Loaded(loaded) => assert_eq!(loaded.client_id, "CID002"),
        other => panic!("expected Loaded, got {other:?}"),
    }
}

#[test]
fn test_plaintext_mode_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("cred");
    let store =
        CredentialStore::at_path(&path).with_mode(StorageMode::PlaintextWithWarning);

    let credentials = sample_credentials();
    store.save(&credentials, "ignored").unwrap();

    // Degraded mode stores the raw fixed-width bytes.
    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.starts_with(&credentials.api_key));
    assert_eq!(contents.len(), 70);

    match store.load("ignored").unwrap() {
        LoadOutcome::Loaded(loaded) => assert_eq!(loaded.client_id, credentials.client_id),
        other => panic!("expected Loaded, got {other:?}"),
    }
}

#[test]
fn test_wrong_width_credentials_rejected_on_save() {
    let dir = TempDir::new().unwrap();
    let store = CredentialStore::at_path(dir.path().join("cred"));

    let short = Credentials::new("too-short", "also-too-short", "CID001");
    assert!(store.save(&short, "hunter2").is_err());
    assert!(!dir.path().join("cred").exists());
}
