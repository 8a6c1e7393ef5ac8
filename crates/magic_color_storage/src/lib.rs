//! Durable key-value storage for Magic Color.
//!
//! The gallery is persisted as one serialized blob under a single key. This
//! crate provides the [`KeyValueStore`] seam and two backends:
//!
//! - [`FileSystemStore`]: one file per key, written atomically
//! - [`MemoryStore`]: process-local map, for tests and dry runs
//!
//! # Example
//!
//! ```rust
//! use magic_color_storage::{KeyValueStore, MemoryStore};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let store = MemoryStore::new();
//! store.set("magic-coloring-pages", "[]")?;
//! assert_eq!(store.get("magic-coloring-pages")?.as_deref(), Some("[]"));
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod filesystem;
mod memory;

pub use filesystem::FileSystemStore;
pub use magic_color_error::{StorageError, StorageErrorKind};
pub use memory::MemoryStore;

use magic_color_error::MagicColorResult;

/// Synchronous string key-value storage.
///
/// Writes replace the whole value; the last write wins.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> MagicColorResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> MagicColorResult<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for std::sync::Arc<T> {
    fn get(&self, key: &str) -> MagicColorResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> MagicColorResult<()> {
        (**self).set(key, value)
    }
}
