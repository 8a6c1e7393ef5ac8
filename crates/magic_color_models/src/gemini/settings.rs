//! Gemini client settings.

use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Default image-capable model.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-image";

/// Default REST API base URL.
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Settings for [`GeminiImageClient`](super::GeminiImageClient).
///
/// Loaded from the `[gemini]` section of `magic_color.toml`, or built in code:
///
/// ```
/// use magic_color_models::GeminiSettingsBuilder;
///
/// let settings = GeminiSettingsBuilder::default()
///     .requests_per_minute(Some(10u32))
///     .build()
///     .unwrap();
/// assert_eq!(settings.model(), "gemini-2.5-flash-image");
/// assert_eq!(*settings.requests_per_minute(), Some(10));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder, Getters)]
#[builder(default, setter(into))]
#[serde(default)]
pub struct GeminiSettings {
    /// Model used for both line art and coloring
    model: String,
    /// REST API base URL
    api_base: String,
    /// Aspect ratio requested for generated images
    aspect_ratio: String,
    /// Optional client-side request quota
    requests_per_minute: Option<u32>,
    /// Per-request timeout in seconds
    timeout_secs: u64,
}

impl Default for GeminiSettings {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            aspect_ratio: "1:1".to_string(),
            requests_per_minute: None,
            timeout_secs: 120,
        }
    }
}
