//! In-memory key-value store.

use crate::KeyValueStore;
use magic_color_error::{MagicColorResult, StorageError, StorageErrorKind};
use std::collections::HashMap;
use std::sync::Mutex;

/// Key-value store backed by a `HashMap`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with one entry.
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let store = Self::new();
        if let Ok(mut entries) = store.entries.lock() {
            entries.insert(key.into(), value.into());
        }
        store
    }

    fn lock(&self) -> MagicColorResult<std::sync::MutexGuard<'_, HashMap<String, String>>> {
        self.entries.lock().map_err(|e| {
            StorageError::new(StorageErrorKind::Unavailable(format!(
                "memory store poisoned: {}",
                e
            )))
            .into()
        })
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> MagicColorResult<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> MagicColorResult<()> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
