//! Integration tests for `JsonFileSettingsStore`.

use std::fs;

use rooms_core::error::DomainError;
use rooms_core::settings::SettingsStore;
use rooms_settings_store::json_settings_store::JsonFileSettingsStore;

// --- open ---

#[test]
fn test_open_missing_file_yields_empty_store() {
    let dir = tempfile::tempdir().unwrap();

    let path = dir.path().join("settings.json");

    let store = JsonFileSettingsStore::open(&path).unwrap();

    assert_eq!(store.path(), path);
    assert!(!path.exists());
    assert_eq!(store.get("RoomOffset").unwrap(), None);
    assert_eq!(store.get_or("RoomOffset", 0).unwrap(), 0);
}

#[test]
fn test_open_empty_file_yields_empty_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, "  \n").unwrap();

    let store = JsonFileSettingsStore::open(&path).unwrap();

    assert_eq!(store.get("RoomOffset").unwrap(), None);
}

#[test]
fn test_open_malformed_file_returns_infrastructure_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, r#"{"RoomOffset": "four"}"#).unwrap();

    let result = JsonFileSettingsStore::open(&path);

    match result.unwrap_err() {
        DomainError::Infrastructure(msg) => assert!(msg.contains("malformed"), "{msg}"),
        other => panic!("expected Infrastructure, got {other:?}"),
    }
}

// --- set + flush ---

#[test]
fn test_flushed_value_is_visible_to_a_new_instance() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    let mut store = JsonFileSettingsStore::open(&path).unwrap();

    // Act
    store.set("RoomOffset", 4).unwrap();
    store.flush().unwrap();

    // Assert
    let reopened = JsonFileSettingsStore::open(&path).unwrap();
    assert_eq!(reopened.get("RoomOffset").unwrap(), Some(4));
    let on_disk: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(on_disk, serde_json::json!({ "RoomOffset": 4 }));
    assert!(!dir.path().join("settings.json.tmp").exists());
}

#[test]
fn test_unflushed_value_is_not_persisted() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    let mut store = JsonFileSettingsStore::open(&path).unwrap();

    store.set("RoomOffset", 5).unwrap();

    assert_eq!(store.get("RoomOffset").unwrap(), Some(5));
    assert!(!path.exists());
}

#[test]
fn test_flush_preserves_unrelated_keys_and_creates_parent_directories() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("profiles").join("default").join("settings.json");
    let mut first = JsonFileSettingsStore::open(&path).unwrap();
    first.set("Volume", 80).unwrap();
    first.flush().unwrap();

    // Act
    let mut second = JsonFileSettingsStore::open(&path).unwrap();
    second.set("RoomOffset", 2).unwrap();
    second.flush().unwrap();

    // Assert
    let reopened = JsonFileSettingsStore::open(&path).unwrap();
    assert_eq!(reopened.get("Volume").unwrap(), Some(80));
    assert_eq!(reopened.get("RoomOffset").unwrap(), Some(2));
}
