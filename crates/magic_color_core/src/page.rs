//! The persisted coloring-page record.

use crate::ImageRef;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Opaque, stable identifier of a coloring page.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[serde(transparent)]
pub struct PageId(String);

impl PageId {
    /// Generate a fresh random id.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().simple().to_string())
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PageId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// A generated coloring page.
///
/// The prompt, line art, and creation time are fixed at construction. The
/// colored variant can be attached once and is never cleared afterwards.
///
/// # Examples
///
/// ```
/// use magic_color_core::{ColoringPage, ImageRef};
///
/// let mut page = ColoringPage::new(
///     "A cute dinosaur",
///     ImageRef::inline("image/png", "AAAA"),
/// );
/// assert!(!page.is_colored());
///
/// assert!(page.attach_colored(ImageRef::inline("image/png", "BBBB")));
/// assert!(!page.attach_colored(ImageRef::inline("image/png", "CCCC")));
/// assert_eq!(page.colored_url().as_ref().unwrap().to_uri(), "data:image/png;base64,BBBB");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct ColoringPage {
    /// Unique id
    id: PageId,
    /// User prompt the page was generated from
    prompt: String,
    /// Black-and-white line art
    line_art_url: ImageRef,
    /// Colorized variant, once produced
    #[serde(default, skip_serializing_if = "Option::is_none")]
    colored_url: Option<ImageRef>,
    /// Creation time in epoch milliseconds
    #[getter(skip)]
    created_at: i64,
}

impl ColoringPage {
    /// Create a new page with a fresh id, stamped with the current time.
    pub fn new(prompt: impl Into<String>, line_art_url: ImageRef) -> Self {
        Self::from_parts(
            PageId::generate(),
            prompt,
            line_art_url,
            chrono::Utc::now().timestamp_millis(),
        )
    }

    /// Assemble a page from known parts.
    pub fn from_parts(
        id: impl Into<PageId>,
        prompt: impl Into<String>,
        line_art_url: ImageRef,
        created_at: i64,
    ) -> Self {
        Self {
            id: id.into(),
            prompt: prompt.into(),
            line_art_url,
            colored_url: None,
            created_at,
        }
    }

    /// Creation time in epoch milliseconds.
    pub fn created_at(&self) -> i64 {
        self.created_at
    }

    /// Whether a colored variant has been attached.
    pub fn is_colored(&self) -> bool {
        self.colored_url.is_some()
    }

    /// Attach the colored variant.
    ///
    /// Returns `false` and leaves the page untouched if one is already present.
    pub fn attach_colored(&mut self, colored: ImageRef) -> bool {
        if self.colored_url.is_some() {
            return false;
        }
        self.colored_url = Some(colored);
        true
    }
}
