//! The image generation seam.

use async_trait::async_trait;
use magic_color_core::ImageRef;
use magic_color_error::MagicColorResult;

/// A service that draws coloring pages.
///
/// Both calls are fallible; callers treat any error as "no image".
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    /// Draw black-and-white line art of `prompt`.
    async fn generate_line_art(&self, prompt: &str) -> MagicColorResult<ImageRef>;

    /// Color `line_art`, using `prompt` to keep the subject recognisable.
    async fn colorize(&self, line_art: &ImageRef, prompt: &str) -> MagicColorResult<ImageRef>;

    /// Provider name (e.g., "gemini").
    fn provider_name(&self) -> &'static str;

    /// Model identifier.
    fn model_name(&self) -> &str;
}
