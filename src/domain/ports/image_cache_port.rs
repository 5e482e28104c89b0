//! Port definition for image caching.

use std::sync::Arc;

use async_trait::async_trait;
use image::DynamicImage;

/// Port for the shared URL-keyed image cache.
/// Implementations must be thread-safe; each call is atomic on its own.
#[async_trait]
pub trait ImageCachePort: Send + Sync {
    /// Returns the cached image for `key`, if any.
    async fn get(&self, key: &str) -> Option<Arc<DynamicImage>>;

    /// Inserts or overwrites the image stored under `key`.
    async fn put(&self, key: String, image: Arc<DynamicImage>);

    /// Returns the current number of cached images.
    fn len(&self) -> usize;

    /// Returns true if the cache is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
