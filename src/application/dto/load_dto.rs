//! Load result DTOs.

use crate::domain::entities::{DeliveryMode, ImageSource};
use crate::domain::errors::FetchResult;

/// Result of one load, tagged with the delivery shape it went through.
#[derive(Debug, Clone)]
pub struct LoadOutcome {
    /// Requested URL.
    pub url: String,
    /// Delivery shape used.
    pub mode: DeliveryMode,
    /// Terminal result.
    pub result: FetchResult,
}

impl LoadOutcome {
    /// Creates new outcome.
    #[must_use]
    pub fn new(url: impl Into<String>, mode: DeliveryMode, result: FetchResult) -> Self {
        Self {
            url: url.into(),
            mode,
            result,
        }
    }

    /// Returns whether the load succeeded.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.result.is_ok()
    }

    /// Returns the image source on success.
    #[must_use]
    pub fn source(&self) -> Option<ImageSource> {
        self.result.as_ref().ok().map(|image| image.source)
    }
}

/// Outcomes of a gallery load, in request order.
#[derive(Debug, Clone, Default)]
pub struct GalleryReport {
    /// Per-URL outcomes.
    pub outcomes: Vec<LoadOutcome>,
}

impl GalleryReport {
    /// Creates report from outcomes.
    #[must_use]
    pub const fn new(outcomes: Vec<LoadOutcome>) -> Self {
        Self { outcomes }
    }

    /// Number of successful loads.
    #[must_use]
    pub fn loaded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    /// Number of failed loads.
    #[must_use]
    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.loaded()
    }

    /// Number of loads answered from the cache.
    #[must_use]
    pub fn cache_hits(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| o.source() == Some(ImageSource::MemoryCache))
            .count()
    }

    /// Returns whether every load succeeded.
    #[must_use]
    pub fn all_succeeded(&self) -> bool {
        self.failed() == 0
    }
}

impl std::fmt::Display for GalleryReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} loaded ({} from cache), {} failed",
            self.loaded(),
            self.cache_hits(),
            self.failed()
        )
    }
}
