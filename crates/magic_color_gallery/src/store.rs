//! The in-memory gallery and its persistence.

use crate::{codec, seed};
use magic_color_core::{ColoringPage, PageId};
use magic_color_error::{GalleryError, GalleryErrorKind, MagicColorResult};
use magic_color_storage::KeyValueStore;
use std::collections::{HashSet, VecDeque};
use tracing::{debug, info, instrument, warn};

/// Storage key the gallery is persisted under by default.
pub const DEFAULT_GALLERY_KEY: &str = "magic-coloring-pages";

/// Ordered collection of coloring pages, newest first.
///
/// Order reflects insertion, not `created_at`. Lookup by id is a linear
/// scan; galleries are expected to hold tens to low hundreds of pages.
///
/// # Example
///
/// ```rust
/// use magic_color_core::{ColoringPage, ImageRef};
/// use magic_color_gallery::GalleryStore;
/// use magic_color_storage::MemoryStore;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut gallery = GalleryStore::new(MemoryStore::new(), "pages");
/// let page = ColoringPage::new("A castle in the clouds", ImageRef::inline("image/png", "AAAA"));
/// let id = page.id().clone();
///
/// gallery.insert(page)?;
/// gallery.save()?;
///
/// let reloaded = GalleryStore::load(gallery.into_store(), "pages");
/// assert_eq!(reloaded.first().map(|p| p.id()), Some(&id));
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct GalleryStore<S> {
    store: S,
    key: String,
    pages: VecDeque<ColoringPage>,
}

impl<S: KeyValueStore> GalleryStore<S> {
    /// Create an empty gallery that persists into `store` under `key`.
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
            pages: VecDeque::new(),
        }
    }

    /// Load the gallery persisted under `key`.
    ///
    /// - Nothing stored: seeds the example pages and persists them.
    /// - Unreadable or malformed data: logs a warning and starts empty.
    ///
    /// Never fails; the gallery is always usable afterwards.
    #[instrument(skip_all)]
    pub fn load(store: S, key: impl Into<String>) -> Self {
        let mut gallery = Self::new(store, key);

        let raw = match gallery.store.get(&gallery.key) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(key = %gallery.key, error = %e, "Failed to read persisted gallery, starting empty");
                return gallery;
            }
        };

        match raw {
            None => {
                let seeds = seed::seed_pages(chrono::Utc::now().timestamp_millis());
                info!(count = seeds.len(), "No saved gallery, seeding example pages");
                gallery.pages = seeds.into();
                if let Err(e) = gallery.save() {
                    warn!(error = %e, "Failed to persist seeded gallery");
                }
            }
            Some(raw) => match codec::decode(&raw) {
                Ok(pages) => {
                    gallery.pages = dedupe(pages);
                    debug!(key = %gallery.key, count = gallery.pages.len(), "Loaded gallery");
                }
                Err(e) => {
                    warn!(key = %gallery.key, error = %e, "Discarding malformed gallery data");
                }
            },
        }

        gallery
    }

    /// Persist the full collection.
    ///
    /// An empty collection is never written, so a transient empty state
    /// cannot clobber a non-empty saved gallery. Returns whether a write
    /// happened.
    #[instrument(skip(self), fields(key = %self.key, count = self.pages.len()))]
    pub fn save(&self) -> MagicColorResult<bool> {
        if self.pages.is_empty() {
            debug!("Gallery empty, skipping save");
            return Ok(false);
        }

        let raw = codec::encode(&self.pages)?;
        self.store.set(&self.key, &raw)?;
        debug!(bytes = raw.len(), "Saved gallery");
        Ok(true)
    }

    /// Prepend a page.
    ///
    /// # Errors
    ///
    /// Returns [`GalleryErrorKind::DuplicateId`] if a page with the same id
    /// is already present.
    pub fn insert(&mut self, page: ColoringPage) -> MagicColorResult<()> {
        if self.get(page.id()).is_some() {
            return Err(GalleryError::new(GalleryErrorKind::DuplicateId(page.id().to_string())).into());
        }
        self.pages.push_front(page);
        Ok(())
    }

    /// Replace the page matching `id` with a mutated copy.
    ///
    /// Returns `false` (and does nothing) when no page has that id.
    pub fn update<F>(&mut self, id: &PageId, mutator: F) -> bool
    where
        F: FnOnce(&mut ColoringPage),
    {
        let Some(slot) = self.pages.iter_mut().find(|p| p.id() == id) else {
            return false;
        };

        let mut updated = slot.clone();
        mutator(&mut updated);
        *slot = updated;
        true
    }

    /// Look up a page by id.
    pub fn get(&self, id: &PageId) -> Option<&ColoringPage> {
        self.pages.iter().find(|p| p.id() == id)
    }

    /// The newest page.
    pub fn first(&self) -> Option<&ColoringPage> {
        self.pages.front()
    }

    /// Pages in gallery order, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &ColoringPage> {
        self.pages.iter()
    }

    /// Number of pages.
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Whether the gallery holds no pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Storage key the gallery persists under.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Give back the underlying store.
    pub fn into_store(self) -> S {
        self.store
    }
}

// Keeps the first occurrence of each id.
fn dedupe(pages: Vec<ColoringPage>) -> VecDeque<ColoringPage> {
    let mut seen = HashSet::new();
    let total = pages.len();
    let unique: VecDeque<ColoringPage> = pages
        .into_iter()
        .filter(|p| seen.insert(p.id().clone()))
        .collect();

    if unique.len() != total {
        warn!(dropped = total - unique.len(), "Dropped pages with duplicate ids");
    }
    unique
}
