//! Export error types.

/// Kinds of export errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ExportErrorKind {
    /// The page has not been colored yet
    #[display("Page {} has no colored version", _0)]
    NotColored(String),
    /// Inline image data is not valid base64
    #[display("Base64 decode error: {}", _0)]
    Base64Decode(String),
    /// Downloading a remote image failed
    #[display("Failed to download image: {}", _0)]
    Download(String),
    /// Writing the output file failed
    #[display("Failed to write export: {}", _0)]
    FileWrite(String),
}

/// Export error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Export Error: {} at line {} in {}", kind, line, file)]
pub struct ExportError {
    /// The kind of error that occurred
    pub kind: ExportErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ExportError {
    /// Create a new export error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ExportErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
