//! Image generation providers for Magic Color.
//!
//! The workflows only see the [`ImageGenerator`] trait. [`GeminiImageClient`]
//! implements it on top of the Gemini `generateContent` REST endpoint.
//!
//! # Example
//!
//! ```no_run
//! use magic_color_models::{GeminiImageClient, GeminiSettings, ImageGenerator};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GeminiImageClient::new(GeminiSettings::default())?;
//! let line_art = client.generate_line_art("A cute dinosaur").await?;
//! let colored = client.colorize(&line_art, "A cute dinosaur").await?;
//! println!("{}", colored.mime().unwrap_or("unknown"));
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod gemini;
mod generator;
mod prompts;

pub use gemini::{GeminiImageClient, GeminiSettings, GeminiSettingsBuilder};
pub use gemini::{
    Candidate, Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
    ImageConfig, InlineData, Part,
};
pub use generator::ImageGenerator;
pub use prompts::{color_prompt, line_art_prompt};
