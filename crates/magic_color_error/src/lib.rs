//! Error types for Magic Color.
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - Constructors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use magic_color_error::{MagicColorResult, GeminiError, GeminiErrorKind};
//!
//! fn generate() -> MagicColorResult<String> {
//!     Err(GeminiError::new(GeminiErrorKind::NoImage("empty candidates".into())))?
//! }
//!
//! match generate() {
//!     Ok(url) => println!("Got: {}", url),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod export;
mod gallery;
mod gemini;
mod http;
mod json;
mod storage;

pub use config::ConfigError;
pub use error::{MagicColorError, MagicColorErrorKind, MagicColorResult};
pub use export::{ExportError, ExportErrorKind};
pub use gallery::{GalleryError, GalleryErrorKind};
pub use gemini::{GeminiError, GeminiErrorKind};
pub use http::HttpError;
pub use json::JsonError;
pub use storage::{StorageError, StorageErrorKind};
