//! Integration tests for the redb-backed storage.

use tenura_core::storage::Storage;
use tenura_store::DiskStorage;

#[test]
fn set_get_remove_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let storage = DiskStorage::open(dir.path().join("tenura.redb")).unwrap();

    assert_eq!(storage.get("session").unwrap(), None);

    storage.set("session", "{\"id\":\"1\"}").unwrap();
    assert_eq!(
        storage.get("session").unwrap(),
        Some("{\"id\":\"1\"}".to_string())
    );

    storage.remove("session").unwrap();
    assert_eq!(storage.get("session").unwrap(), None);
}

#[test]
fn values_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tenura.redb");

    {
        let storage = DiskStorage::open(&path).unwrap();
        storage.set("pwa-install-dismissed", "true").unwrap();
    }

    let storage = DiskStorage::open(&path).unwrap();
    assert_eq!(
        storage.get("pwa-install-dismissed").unwrap(),
        Some("true".to_string())
    );
}

#[test]
fn overwrite_keeps_latest_value() {
    let dir = tempfile::tempdir().unwrap();
    let storage = DiskStorage::open(dir.path().join("tenura.redb")).unwrap();

    storage.set("k", "first").unwrap();
    storage.set("k", "second").unwrap();
    assert_eq!(storage.get("k").unwrap(), Some("second".to_string()));
}

#[test]
fn remove_missing_key_is_ok() {
    let dir = tempfile::tempdir().unwrap();
    let storage = DiskStorage::open(dir.path().join("tenura.redb")).unwrap();
    assert!(storage.remove("absent").is_ok());
}
