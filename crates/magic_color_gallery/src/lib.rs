//! Persisted gallery of coloring pages.
//!
//! [`GalleryStore`] keeps the ordered, newest-first list of
//! [`ColoringPage`](magic_color_core::ColoringPage) records in memory and
//! mirrors it into a [`KeyValueStore`](magic_color_storage::KeyValueStore)
//! under a single key.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod codec;
mod seed;
mod store;

pub use codec::{decode, encode};
pub use seed::seed_pages;
pub use store::{DEFAULT_GALLERY_KEY, GalleryStore};
