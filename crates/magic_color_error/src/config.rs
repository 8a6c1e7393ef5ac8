//! Configuration error types.

/// `magic_color.toml` or its overrides could not be loaded.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at line {} in {}", message, line, file)]
pub struct ConfigError {
    /// What is wrong with the configuration
    pub message: String,
    /// Line number where the error was raised
    pub line: u32,
    /// File where the error was raised
    pub file: &'static str,
}

impl ConfigError {
    /// Create an error at the caller's location.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }

    /// A setting has no value and no usable default.
    ///
    /// ```
    /// use magic_color_error::ConfigError;
    ///
    /// let err = ConfigError::missing_setting("storage.data_dir");
    /// assert_eq!(err.message, "No value for storage.data_dir and no platform default");
    /// ```
    #[track_caller]
    pub fn missing_setting(key: &str) -> Self {
        Self::new(format!("No value for {} and no platform default", key))
    }
}
