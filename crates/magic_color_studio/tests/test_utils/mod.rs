//! Shared fixtures for studio tests.

#![allow(dead_code)]

use async_trait::async_trait;
use magic_color_core::ImageRef;
use magic_color_error::{GeminiError, GeminiErrorKind, MagicColorResult};
use magic_color_models::ImageGenerator;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Line art the fake hands out.
pub fn line_art_x() -> ImageRef {
    ImageRef::inline("image/png", "WA==")
}

/// Colored variant the fake hands out.
pub fn colored_y() -> ImageRef {
    ImageRef::inline("image/png", "WQ==")
}

/// Image generator that answers from canned results and counts calls.
pub struct FakeGenerator {
    line_art: Option<ImageRef>,
    colored: Option<ImageRef>,
    line_art_calls: AtomicUsize,
    color_calls: AtomicUsize,
    prompts: Mutex<Vec<String>>,
}

impl FakeGenerator {
    /// Succeeds with X for line art and Y for coloring.
    pub fn succeeding() -> Self {
        Self::with(Some(line_art_x()), Some(colored_y()))
    }

    /// Fails every call.
    pub fn failing() -> Self {
        Self::with(None, None)
    }

    pub fn with(line_art: Option<ImageRef>, colored: Option<ImageRef>) -> Self {
        Self {
            line_art,
            colored,
            line_art_calls: AtomicUsize::new(0),
            color_calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn line_art_calls(&self) -> usize {
        self.line_art_calls.load(Ordering::SeqCst)
    }

    pub fn color_calls(&self) -> usize {
        self.color_calls.load(Ordering::SeqCst)
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

fn unavailable() -> GeminiError {
    GeminiError::new(GeminiErrorKind::HttpError {
        status_code: 503,
        message: "model overloaded".to_string(),
    })
}

#[async_trait]
impl ImageGenerator for FakeGenerator {
    async fn generate_line_art(&self, prompt: &str) -> MagicColorResult<ImageRef> {
        self.line_art_calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.line_art.clone().ok_or_else(|| unavailable().into())
    }

    async fn colorize(&self, _line_art: &ImageRef, prompt: &str) -> MagicColorResult<ImageRef> {
        self.color_calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.colored.clone().ok_or_else(|| unavailable().into())
    }

    fn provider_name(&self) -> &'static str {
        "fake"
    }

    fn model_name(&self) -> &str {
        "fake-model"
    }
}
