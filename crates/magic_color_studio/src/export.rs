//! Writing page images to disk.

use std::path::{Path, PathBuf};
use std::time::Duration;

use base64::Engine as _;
use magic_color_core::{ColoringPage, ExportKind, ImageRef};
use magic_color_error::{ExportError, ExportErrorKind, HttpError, MagicColorResult};
use reqwest::Client;
use tracing::{debug, info, instrument};

/// Characters that are not valid in file names on common filesystems.
const FORBIDDEN: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Longest prompt fragment, in bytes, kept in a file name.
///
/// Leaves room for the prefix and suffix under the common 255-byte limit.
pub const MAX_FRAGMENT_BYTES: usize = 200;

/// Stem used when nothing of the prompt survives sanitizing.
const FALLBACK_STEM: &str = "page";

/// Turn a prompt into a file-name fragment.
///
/// Each whitespace run becomes a single `-`; path separators, reserved
/// characters and control characters are dropped.
///
/// ```
/// use magic_color_studio::sanitize_prompt;
///
/// assert_eq!(sanitize_prompt("A cute  dinosaur"), "A-cute-dinosaur");
/// assert_eq!(sanitize_prompt("cats/dogs?"), "catsdogs");
/// ```
pub fn sanitize_prompt(prompt: &str) -> String {
    let mut out = String::with_capacity(prompt.len());
    let mut in_whitespace = false;

    for c in prompt.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                out.push('-');
            }
            in_whitespace = true;
            continue;
        }
        in_whitespace = false;
        if c.is_control() || FORBIDDEN.contains(&c) {
            continue;
        }
        out.push(c);
    }
    out
}

/// Name of the exported file for a prompt.
///
/// The prompt fragment is cut to [`MAX_FRAGMENT_BYTES`] on a character
/// boundary; an empty fragment becomes `page`.
///
/// ```
/// use magic_color_core::ExportKind;
/// use magic_color_studio::file_name;
///
/// assert_eq!(
///     file_name("A cute dinosaur", ExportKind::Print),
///     "coloring-A-cute-dinosaur-print.png"
/// );
/// ```
pub fn file_name(prompt: &str, kind: ExportKind) -> String {
    let sanitized = sanitize_prompt(prompt);
    let fragment = match truncate_on_char_boundary(&sanitized, MAX_FRAGMENT_BYTES) {
        "" => FALLBACK_STEM,
        fragment => fragment,
    };
    format!("coloring-{}-{}.png", fragment, kind.suffix())
}

fn truncate_on_char_boundary(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }
    let mut end = max_bytes;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

/// Resolves page images to bytes and writes them out.
#[derive(Debug, Clone)]
pub struct Exporter {
    http: Client,
}

impl Exporter {
    /// Create an exporter whose downloads give up after `timeout`.
    pub fn new(timeout: Duration) -> MagicColorResult<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(HttpError::client_build)?;
        Ok(Self { http })
    }

    /// Bytes of an image reference.
    ///
    /// Inline data is base64-decoded; remote URLs are downloaded.
    pub async fn resolve(&self, image: &ImageRef) -> MagicColorResult<Vec<u8>> {
        match image {
            ImageRef::Inline { data, .. } => base64::engine::general_purpose::STANDARD
                .decode(data)
                .map_err(|e| ExportError::new(ExportErrorKind::Base64Decode(e.to_string())).into()),
            ImageRef::Remote(url) => {
                debug!(url = %url, "Downloading image for export");
                let download_err = |e: reqwest::Error| {
                    ExportError::new(ExportErrorKind::Download(format!("{}: {}", url, e)))
                };
                let response = self
                    .http
                    .get(url)
                    .send()
                    .await
                    .and_then(|r| r.error_for_status())
                    .map_err(download_err)?;
                let bytes = response.bytes().await.map_err(download_err)?;
                Ok(bytes.to_vec())
            }
        }
    }

    /// Write one image of `page` into `dir`, returning the written path.
    ///
    /// # Errors
    ///
    /// Exporting [`ExportKind::Colored`] for a page without a colored variant
    /// fails with [`ExportErrorKind::NotColored`].
    #[instrument(skip(self, page, dir), fields(id = %page.id()))]
    pub async fn export(
        &self,
        page: &ColoringPage,
        kind: ExportKind,
        dir: &Path,
    ) -> MagicColorResult<PathBuf> {
        let image = match kind {
            ExportKind::Print => page.line_art_url(),
            ExportKind::Colored => page.colored_url().as_ref().ok_or_else(|| {
                ExportError::new(ExportErrorKind::NotColored(page.id().to_string()))
            })?,
        };

        let bytes = self.resolve(image).await?;

        let write_err = |e: std::io::Error| {
            ExportError::new(ExportErrorKind::FileWrite(format!("{}: {}", dir.display(), e)))
        };
        tokio::fs::create_dir_all(dir).await.map_err(write_err)?;
        let path = dir.join(file_name(page.prompt(), kind));
        tokio::fs::write(&path, &bytes).await.map_err(write_err)?;

        info!(path = %path.display(), bytes = bytes.len(), "Exported page");
        Ok(path)
    }
}
