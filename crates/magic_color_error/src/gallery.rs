//! Gallery and image-reference error types.

/// Kinds of gallery errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum GalleryErrorKind {
    /// A record with this id is already in the gallery
    #[display("Duplicate page id: {}", _0)]
    DuplicateId(String),
    /// No record with this id exists
    #[display("Page not found: {}", _0)]
    PageNotFound(String),
    /// An image reference is neither a data URI nor a URL
    #[display("Invalid image reference: {}", _0)]
    InvalidImageRef(String),
}

/// Gallery error with location tracking.
///
/// # Examples
///
/// ```
/// use magic_color_error::{GalleryError, GalleryErrorKind};
///
/// let err = GalleryError::new(GalleryErrorKind::PageNotFound("abc".to_string()));
/// assert!(format!("{}", err).contains("Page not found: abc"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Gallery Error: {} at line {} in {}", kind, line, file)]
pub struct GalleryError {
    /// The kind of error that occurred
    pub kind: GalleryErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl GalleryError {
    /// Create a new gallery error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GalleryErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
