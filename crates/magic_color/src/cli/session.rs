//! Opening the persisted gallery.

use magic_color::{FileSystemStore, GalleryStore, MagicColorConfig, MagicColorResult, Studio};
use tracing::debug;

/// The gallery opened from the configured data directory.
pub struct Session {
    gallery: GalleryStore<FileSystemStore>,
}

impl Session {
    /// Open (or seed) the gallery described by `config`.
    pub fn open(config: &MagicColorConfig) -> MagicColorResult<Self> {
        let data_dir = config.storage.resolve_data_dir()?;
        debug!(data_dir = %data_dir.display(), "Opening gallery");

        let store = FileSystemStore::new(&data_dir)?;
        let gallery = GalleryStore::load(store, config.storage.gallery_key.clone());
        Ok(Self { gallery })
    }

    /// The loaded gallery.
    pub fn gallery(&self) -> &GalleryStore<FileSystemStore> {
        &self.gallery
    }

    /// Start a workflow session over the gallery.
    pub fn into_studio(self) -> Studio<FileSystemStore> {
        Studio::new(self.gallery)
    }
}
