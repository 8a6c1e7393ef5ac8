//! Image references.

use magic_color_error::{GalleryError, GalleryErrorKind};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Where an image lives.
///
/// Serialized as its URI string, so persisted records keep plain
/// `lineArtUrl` / `coloredUrl` strings.
///
/// # Examples
///
/// ```
/// use magic_color_core::ImageRef;
///
/// let inline: ImageRef = "data:image/png;base64,iVBORw0KGgo=".parse().unwrap();
/// assert_eq!(inline.mime(), Some("image/png"));
///
/// let remote: ImageRef = "https://picsum.photos/seed/cat/800/800".parse().unwrap();
/// assert!(matches!(remote, ImageRef::Remote(_)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ImageRef {
    /// Base64 payload carried in a `data:` URI
    Inline {
        /// MIME type, e.g. "image/png"
        mime: String,
        /// Base64-encoded bytes
        data: String,
    },
    /// Remote URL to fetch the image from
    Remote(String),
}

impl ImageRef {
    /// Wrap base64 data returned by the image API.
    pub fn inline(mime: impl Into<String>, data: impl Into<String>) -> Self {
        ImageRef::Inline {
            mime: mime.into(),
            data: data.into(),
        }
    }

    /// MIME type, known only for inline images.
    pub fn mime(&self) -> Option<&str> {
        match self {
            ImageRef::Inline { mime, .. } => Some(mime),
            ImageRef::Remote(_) => None,
        }
    }

    /// The reference as a URI string.
    pub fn to_uri(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageRef::Inline { mime, data } => write!(f, "data:{};base64,{}", mime, data),
            ImageRef::Remote(url) => write!(f, "{}", url),
        }
    }
}

impl FromStr for ImageRef {
    type Err = GalleryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || GalleryError::new(GalleryErrorKind::InvalidImageRef(truncate(s)));

        if let Some(rest) = s.strip_prefix("data:") {
            let (header, data) = rest.split_once(',').ok_or_else(invalid)?;
            let mime = header.strip_suffix(";base64").ok_or_else(invalid)?;
            if mime.is_empty() {
                return Err(invalid());
            }
            return Ok(ImageRef::inline(mime, data));
        }

        if s.starts_with("https://") || s.starts_with("http://") {
            return Ok(ImageRef::Remote(s.to_string()));
        }

        Err(invalid())
    }
}

impl TryFrom<String> for ImageRef {
    type Error = GalleryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ImageRef> for String {
    fn from(value: ImageRef) -> Self {
        value.to_string()
    }
}

// Data URIs can be megabytes long; keep error messages readable.
fn truncate(s: &str) -> String {
    const MAX: usize = 48;
    match s.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &s[..idx]),
        None => s.to_string(),
    }
}
