//! Google Gemini image generation.
//!
//! [`GeminiImageClient`] talks to the REST `generateContent` endpoint of an
//! image-capable model (`gemini-2.5-flash-image` by default) and turns the
//! first inline image of the response into an [`ImageRef`](magic_color_core::ImageRef).

mod client;
mod dto;
mod settings;

pub use client::GeminiImageClient;
pub use dto::{
    Candidate, Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
    ImageConfig, InlineData, Part,
};
pub use settings::{GeminiSettings, GeminiSettingsBuilder};

/// Result type for Gemini operations.
pub(crate) type GeminiResult<T> = Result<T, magic_color_error::GeminiError>;
