//! Cache-then-fetch image service with three delivery shapes.

use std::sync::Arc;

use futures_util::StreamExt;
use futures_util::stream::{self, BoxStream};
use tokio::task::JoinHandle;
use tracing::{debug, trace};

use super::ImageFetcher;
use crate::domain::entities::{ImageRequest, ImageSource, LoadedImage};
use crate::domain::errors::FetchResult;
use crate::domain::ports::ImageCachePort;

/// Loads images through a shared cache, falling back to the fetcher on a miss.
///
/// The cache is injected, so every service built over the same
/// `Arc<dyn ImageCachePort>` sees the same entries. Concurrent misses for one
/// URL are not coalesced: each fetches and the last write wins.
#[derive(Clone)]
pub struct ImageService {
    cache: Arc<dyn ImageCachePort>,
    fetcher: ImageFetcher,
}

impl std::fmt::Debug for ImageService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageService")
            .field("cached", &self.cache.len())
            .finish_non_exhaustive()
    }
}

impl ImageService {
    /// Creates new service over a shared cache.
    #[must_use]
    pub fn new(cache: Arc<dyn ImageCachePort>, fetcher: ImageFetcher) -> Self {
        Self { cache, fetcher }
    }

    /// Loads `url`, awaiting the result directly.
    ///
    /// # Errors
    /// Returns the fetch failure unchanged; failures are never cached.
    pub async fn request(&self, url: &str) -> FetchResult {
        let request = ImageRequest::new(url);

        if let Some(image) = self.cache.get(request.cache_key()).await {
            trace!(url = %request, "Cache hit");
            return Ok(LoadedImage::new(url, image, ImageSource::MemoryCache));
        }

        trace!(url = %request, "Cache miss");

        let image = self.fetcher.fetch(&request).await?;

        self.cache
            .put(request.cache_key().to_string(), image.clone())
            .await;

        debug!(url = %request, "Image loaded and cached");

        Ok(LoadedImage::new(url, image, ImageSource::Network))
    }

    /// Loads `url` on a background task and invokes `on_result` exactly once
    /// from that task. Callers marshal back to their own context if needed.
    pub fn request_with_callback<F>(&self, url: impl Into<String>, on_result: F) -> JoinHandle<()>
    where
        F: FnOnce(FetchResult) + Send + 'static,
    {
        let service = self.clone();
        let url = url.into();

        tokio::spawn(async move {
            let result = service.request(&url).await;
            on_result(result);
        })
    }

    /// Loads `url` as a stream that yields exactly one item, the success
    /// value or the failure, and then ends. Nothing happens until polled.
    #[must_use]
    pub fn request_stream(&self, url: impl Into<String>) -> BoxStream<'static, FetchResult> {
        let service = self.clone();
        let url = url.into();

        stream::once(async move { service.request(&url).await }).boxed()
    }
}
