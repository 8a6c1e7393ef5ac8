//! JSON error types.

/// The persisted gallery or a listing could not be encoded or decoded.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("JSON Error: {} at line {} in {}", message, line, file)]
pub struct JsonError {
    /// Serializer message
    pub message: String,
    /// Line number where the error was raised
    pub line: u32,
    /// File where the error was raised
    pub file: &'static str,
}

impl JsonError {
    /// Create an error at the caller's location.
    ///
    /// ```
    /// use magic_color_error::JsonError;
    ///
    /// let err = JsonError::new("missing field `lineArtUrl` at line 1 column 42");
    /// assert!(err.message.contains("lineArtUrl"));
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
}
