//! Magic Color: describe a creature, get a printable coloring page, then
//! color it in.
//!
//! # Architecture
//!
//! - `magic_color_core` - `ColoringPage`, `ImageRef`, view and export modes
//! - `magic_color_error` - Error types
//! - `magic_color_storage` - Key-value backends (filesystem, memory)
//! - `magic_color_gallery` - The persisted, newest-first gallery
//! - `magic_color_models` - `ImageGenerator` and the Gemini client
//! - `magic_color_studio` - Generation and coloring workflows, export
//!
//! This crate re-exports everything and adds layered configuration.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;

pub use config::{MagicColorConfig, StorageSettings};

pub use magic_color_core::*;
pub use magic_color_error::*;
pub use magic_color_gallery::*;
pub use magic_color_models::*;
pub use magic_color_storage::*;
pub use magic_color_studio::*;
