//! Gemini `generateContent` client for image output.
//!
//! # Architecture
//!
//! - **One HTTP client**: a shared `reqwest::Client` with the configured timeout
//! - **Optional quota**: a governor GCRA limiter gates every call when
//!   `requests_per_minute` is set
//! - **No retries**: a failed call is reported once; the user resubmits

use std::env;
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use base64::Engine as _;
use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};
use reqwest::Client;
use tracing::{debug, info, instrument, warn};

use magic_color_core::ImageRef;
use magic_color_error::{GeminiError, GeminiErrorKind, MagicColorResult};

use super::dto::{GenerateContentRequest, GenerateContentResponse, Part};
use super::settings::GeminiSettings;
use super::GeminiResult;
use crate::ImageGenerator;
use crate::prompts::{color_prompt, line_art_prompt};

type DirectRateLimiter = RateLimiter<NotKeyed, InMemoryState, DefaultClock>;

/// MIME type assumed for remote images served without a usable content type.
const FALLBACK_MIME: &str = "image/png";

/// Client for Gemini image generation.
#[derive(Clone)]
pub struct GeminiImageClient {
    http: Client,
    api_key: String,
    settings: GeminiSettings,
    limiter: Option<Arc<DirectRateLimiter>>,
}

impl std::fmt::Debug for GeminiImageClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiImageClient")
            .field("model", self.settings.model())
            .field("api_base", self.settings.api_base())
            .field("rate_limited", &self.limiter.is_some())
            .finish_non_exhaustive()
    }
}

impl GeminiImageClient {
    /// Create a client, reading the API key from `GEMINI_API_KEY`.
    ///
    /// # Errors
    ///
    /// Returns [`GeminiErrorKind::MissingApiKey`] when the variable is unset,
    /// or [`GeminiErrorKind::ClientCreation`] if the HTTP client cannot be built.
    #[instrument(name = "gemini_image_client_new", skip_all)]
    pub fn new(settings: GeminiSettings) -> MagicColorResult<Self> {
        let api_key = env::var("GEMINI_API_KEY")
            .map_err(|_| GeminiError::new(GeminiErrorKind::MissingApiKey))?;

        Self::with_api_key(api_key, settings)
    }

    /// Create a client with an explicit API key.
    #[instrument(name = "gemini_image_client_with_api_key", skip_all, fields(model = %settings.model()))]
    pub fn with_api_key(
        api_key: impl Into<String>,
        settings: GeminiSettings,
    ) -> MagicColorResult<Self> {
        Self::new_internal(api_key.into(), settings).map_err(Into::into)
    }

    fn new_internal(api_key: String, settings: GeminiSettings) -> GeminiResult<Self> {
        if api_key.trim().is_empty() {
            return Err(GeminiError::new(GeminiErrorKind::MissingApiKey));
        }

        let http = Client::builder()
            .timeout(Duration::from_secs(*settings.timeout_secs()))
            .build()
            .map_err(|e| GeminiError::new(GeminiErrorKind::ClientCreation(e.to_string())))?;

        let limiter = (*settings.requests_per_minute())
            .and_then(NonZeroU32::new)
            .map(|rpm| Arc::new(RateLimiter::direct(Quota::per_minute(rpm))));

        debug!(rate_limited = limiter.is_some(), "Created Gemini image client");

        Ok(Self {
            http,
            api_key,
            settings,
            limiter,
        })
    }

    /// Settings the client was created with.
    pub fn settings(&self) -> &GeminiSettings {
        &self.settings
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.settings.api_base().trim_end_matches('/'),
            self.settings.model()
        )
    }

    /// Send one request and return the first inline image of the reply.
    async fn generate_image(&self, parts: Vec<Part>) -> GeminiResult<ImageRef> {
        if let Some(limiter) = &self.limiter {
            limiter.until_ready().await;
        }

        let request = GenerateContentRequest::image(parts, self.settings.aspect_ratio().clone());
        let url = self.endpoint();
        debug!(url = %url, "Sending Gemini generateContent request");

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| GeminiError::new(GeminiErrorKind::ApiRequest(e.to_string())))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "Gemini request rejected");
            return Err(GeminiError::new(GeminiErrorKind::HttpError {
                status_code: status.as_u16(),
                message,
            }));
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GeminiError::new(GeminiErrorKind::InvalidResponse(e.to_string())))?;

        let inline = body.first_inline_data().ok_or_else(|| {
            GeminiError::new(GeminiErrorKind::NoImage(body.describe_missing_image()))
        })?;

        Ok(ImageRef::inline(inline.mime_type.clone(), inline.data.clone()))
    }

    /// Resolve an image reference to `(mime, base64)` for an inline part.
    ///
    /// Remote images are downloaded and encoded.
    async fn inline_payload(&self, image: &ImageRef) -> GeminiResult<(String, String)> {
        match image {
            ImageRef::Inline { mime, data } => Ok((mime.clone(), data.clone())),
            ImageRef::Remote(url) => {
                debug!(url = %url, "Downloading remote line art");
                let fetch_err = |e: reqwest::Error| {
                    GeminiError::new(GeminiErrorKind::ImageFetch(format!("{}: {}", url, e)))
                };

                let response = self
                    .http
                    .get(url)
                    .send()
                    .await
                    .and_then(|r| r.error_for_status())
                    .map_err(fetch_err)?;

                let mime = response
                    .headers()
                    .get(reqwest::header::CONTENT_TYPE)
                    .and_then(|v| v.to_str().ok())
                    .map(|v| v.split(';').next().unwrap_or(v).trim().to_string())
                    .filter(|v| v.starts_with("image/"))
                    .unwrap_or_else(|| FALLBACK_MIME.to_string());

                let bytes = response.bytes().await.map_err(fetch_err)?;
                let data = base64::engine::general_purpose::STANDARD.encode(&bytes);
                Ok((mime, data))
            }
        }
    }
}

#[async_trait]
impl ImageGenerator for GeminiImageClient {
    #[instrument(skip(self), fields(model = %self.settings.model()))]
    async fn generate_line_art(&self, prompt: &str) -> MagicColorResult<ImageRef> {
        let image = self
            .generate_image(vec![Part::text(line_art_prompt(prompt))])
            .await?;
        info!("Generated line art");
        Ok(image)
    }

    #[instrument(skip(self, line_art), fields(model = %self.settings.model()))]
    async fn colorize(&self, line_art: &ImageRef, prompt: &str) -> MagicColorResult<ImageRef> {
        let (mime, data) = self.inline_payload(line_art).await?;
        let image = self
            .generate_image(vec![Part::inline(mime, data), Part::text(color_prompt(prompt))])
            .await?;
        info!("Colored line art");
        Ok(image)
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    fn model_name(&self) -> &str {
        self.settings.model()
    }
}
