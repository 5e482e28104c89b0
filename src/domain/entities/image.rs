//! Domain types for image requests and loaded images.

use std::sync::Arc;

use image::DynamicImage;
use reqwest::Url;

use crate::domain::errors::FetchError;

/// A request to load the image behind a URL.
///
/// The URL string doubles as the cache key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageRequest {
    url: String,
}

impl ImageRequest {
    /// Creates a new request from any string-like input.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// Returns the URL exactly as it was given.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns the cache key for this request.
    #[must_use]
    pub fn cache_key(&self) -> &str {
        &self.url
    }

    /// Parses the URL, accepting only `http` and `https`.
    ///
    /// # Errors
    /// Returns [`FetchError::InvalidUrl`] if the URL is blank, malformed or
    /// uses another scheme.
    pub fn parse(&self) -> Result<Url, FetchError> {
        let trimmed = self.url.trim();
        if trimmed.is_empty() {
            return Err(FetchError::invalid_url(&self.url));
        }

        let url = Url::parse(trimmed).map_err(|_| FetchError::invalid_url(&self.url))?;

        let web_scheme = matches!(url.scheme(), "http" | "https");
        if web_scheme && url.has_host() {
            Ok(url)
        } else {
            Err(FetchError::invalid_url(&self.url))
        }
    }
}

impl std::fmt::Display for ImageRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.url)
    }
}

impl From<&str> for ImageRequest {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ImageRequest {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

/// Where an image was loaded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSource {
    /// Served from the in-memory cache.
    MemoryCache,
    /// Downloaded and decoded.
    Network,
}

impl std::fmt::Display for ImageSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MemoryCache => write!(f, "memory"),
            Self::Network => write!(f, "network"),
        }
    }
}

/// A decoded image ready for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedImage {
    /// URL the image was requested with.
    pub url: String,
    /// The decoded image, shared with the cache.
    pub image: Arc<DynamicImage>,
    /// Where this copy came from.
    pub source: ImageSource,
}

impl LoadedImage {
    /// Creates a new loaded image.
    #[must_use]
    pub fn new(url: impl Into<String>, image: Arc<DynamicImage>, source: ImageSource) -> Self {
        Self {
            url: url.into(),
            image,
            source,
        }
    }

    /// Returns `(width, height)` in pixels.
    #[must_use]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.image.width(), self.image.height())
    }

    /// Returns true if both values point at the same decoded image.
    #[must_use]
    pub fn same_image(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.image, &other.image)
    }
}
