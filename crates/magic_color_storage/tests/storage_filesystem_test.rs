//! Tests for the filesystem key-value store.

use magic_color_error::MagicColorErrorKind;
use magic_color_storage::{FileSystemStore, KeyValueStore, StorageErrorKind};
use tempfile::TempDir;

#[test]
fn test_set_and_get() {
    let temp_dir = TempDir::new().unwrap();
    let store = FileSystemStore::new(temp_dir.path()).unwrap();

    store.set("magic-coloring-pages", r#"[{"id":"1"}]"#).unwrap();

    let value = store.get("magic-coloring-pages").unwrap();
    assert_eq!(value.as_deref(), Some(r#"[{"id":"1"}]"#));
    assert!(temp_dir.path().join("magic-coloring-pages.json").exists());
}

#[test]
fn test_missing_key_returns_none() {
    let temp_dir = TempDir::new().unwrap();
    let store = FileSystemStore::new(temp_dir.path()).unwrap();

    assert!(store.get("never-written").unwrap().is_none());
}

#[test]
fn test_last_write_wins() {
    let temp_dir = TempDir::new().unwrap();
    let store = FileSystemStore::new(temp_dir.path()).unwrap();

    store.set("gallery", "first").unwrap();
    store.set("gallery", "second").unwrap();

    assert_eq!(store.get("gallery").unwrap().as_deref(), Some("second"));
    // No temp file left behind
    assert!(!temp_dir.path().join("gallery.json.tmp").exists());
}

#[test]
fn test_creates_nested_base_directory() {
    let temp_dir = TempDir::new().unwrap();
    let nested = temp_dir.path().join("a").join("b");
    let store = FileSystemStore::new(&nested).unwrap();

    store.set("k", "v").unwrap();
    assert!(nested.join("k.json").exists());
    assert_eq!(store.base_path(), nested.as_path());
}

#[test]
fn test_rejects_path_traversal_keys() {
    let temp_dir = TempDir::new().unwrap();
    let store = FileSystemStore::new(temp_dir.path()).unwrap();

    for key in ["../escape", "a/b", "", ".hidden"] {
        let err = store.set(key, "v").unwrap_err();
        match err.kind() {
            MagicColorErrorKind::Storage(e) => {
                assert!(matches!(e.kind, StorageErrorKind::InvalidKey(_)))
            }
            other => panic!("unexpected error: {}", other),
        }
    }
}

#[test]
fn test_values_survive_reopen() {
    let temp_dir = TempDir::new().unwrap();
    {
        let store = FileSystemStore::new(temp_dir.path()).unwrap();
        store.set("gallery", "persisted").unwrap();
    }

    let reopened = FileSystemStore::new(temp_dir.path()).unwrap();
    assert_eq!(reopened.get("gallery").unwrap().as_deref(), Some("persisted"));
}
