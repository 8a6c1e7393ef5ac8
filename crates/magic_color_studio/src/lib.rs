//! Workflows of the Magic Color app.
//!
//! [`Studio`] is the whole application state: the gallery, the prompt being
//! typed, which page is open, and which external calls are in flight. Every
//! user action is a synchronous state transition; an external call is a
//! request value handed out by a `begin_*` method and fed back, with its
//! result, into the matching `complete_*` method. The async
//! [`Studio::generate`] and [`Studio::color_selected`] drivers do both halves
//! against any [`ImageGenerator`](magic_color_models::ImageGenerator).
//!
//! # Example
//!
//! ```no_run
//! use magic_color_gallery::{GalleryStore, DEFAULT_GALLERY_KEY};
//! use magic_color_models::{GeminiImageClient, GeminiSettings};
//! use magic_color_storage::MemoryStore;
//! use magic_color_studio::Studio;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GeminiImageClient::new(GeminiSettings::default())?;
//! let mut studio = Studio::new(GalleryStore::load(MemoryStore::new(), DEFAULT_GALLERY_KEY));
//!
//! studio.set_prompt("A cute dinosaur");
//! if let Some(id) = studio.generate(&client).await {
//!     println!("created {}", id);
//!     studio.color_selected(&client).await;
//! }
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod export;
mod request;
mod studio;

pub use export::{Exporter, MAX_FRAGMENT_BYTES, file_name, sanitize_prompt};
pub use request::{ColorRequest, ColorStep, ColoringReport, LineArtRequest, Notice, Outcome, Phase, Ticket};
pub use studio::{COLORING_NOTICE, GENERATION_NOTICE, Studio};
