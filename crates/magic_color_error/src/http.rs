//! HTTP error types.

use std::fmt::Display;

/// Failure of an HTTP client outside the Gemini API itself, such as the
/// client that downloads images for export.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("HTTP Error: {} at line {} in {}", message, line, file)]
pub struct HttpError {
    /// What went wrong
    pub message: String,
    /// Line number where the error was raised
    pub line: u32,
    /// File where the error was raised
    pub file: &'static str,
}

impl HttpError {
    /// Create an error at the caller's location.
    ///
    /// ```
    /// use magic_color_error::HttpError;
    ///
    /// let err = HttpError::new("picsum.photos did not answer");
    /// assert!(format!("{}", err).starts_with("HTTP Error: picsum.photos"));
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }

    /// The HTTP client could not be constructed.
    #[track_caller]
    pub fn client_build(cause: impl Display) -> Self {
        Self::new(format!("Failed to create HTTP client: {}", cause))
    }
}
