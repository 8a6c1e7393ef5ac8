//! Core data types for Magic Color.
//!
//! This crate provides the data model shared by every other Magic Color crate:
//! the persisted [`ColoringPage`] record and the small value types around it.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod image;
mod mode;
mod page;

pub use image::ImageRef;
pub use mode::{ExportKind, ViewMode};
pub use page::{ColoringPage, PageId};
