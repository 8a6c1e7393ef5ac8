//! Top-level error wrapper types.

use crate::{ConfigError, ExportError, GalleryError, GeminiError, HttpError, JsonError, StorageError};

/// Every error condition a Magic Color crate can surface.
///
/// # Examples
///
/// ```
/// use magic_color_error::{MagicColorError, HttpError};
///
/// let http_err = HttpError::new("Connection failed");
/// let err: MagicColorError = http_err.into();
/// assert!(format!("{}", err).contains("HTTP Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum MagicColorErrorKind {
    /// HTTP error
    #[from(HttpError)]
    Http(HttpError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Key-value storage error
    #[from(StorageError)]
    Storage(StorageError),
    /// Gallery error
    #[from(GalleryError)]
    Gallery(GalleryError),
    /// Gemini error
    #[from(GeminiError)]
    Gemini(GeminiError),
    /// Export error
    #[from(ExportError)]
    Export(ExportError),
}

/// Magic Color error with kind discrimination.
///
/// # Examples
///
/// ```
/// use magic_color_error::{MagicColorResult, ConfigError};
///
/// fn might_fail() -> MagicColorResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// assert!(might_fail().is_err());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Magic Color Error: {}", _0)]
pub struct MagicColorError(Box<MagicColorErrorKind>);

impl MagicColorError {
    /// Create a new error from a kind.
    pub fn new(kind: MagicColorErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &MagicColorErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to MagicColorErrorKind
impl<T> From<T> for MagicColorError
where
    T: Into<MagicColorErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Magic Color operations.
pub type MagicColorResult<T> = std::result::Result<T, MagicColorError>;
