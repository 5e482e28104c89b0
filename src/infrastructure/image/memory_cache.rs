//! In-memory image cache implementation.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

use image::DynamicImage;
use tokio::sync::RwLock;
use tracing::{debug, trace};

use crate::domain::ports::ImageCachePort;

/// Unbounded URL-keyed cache for decoded images.
/// Entries live until the cache is dropped; a re-insert overwrites silently.
pub struct MemoryImageCache {
    cache: RwLock<HashMap<String, Arc<DynamicImage>>>,
    size: AtomicUsize,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl MemoryImageCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cache: RwLock::new(HashMap::new()),
            size: AtomicUsize::new(0),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Returns cache statistics.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn stats(&self) -> CacheStats {
        let hits = self.hits.load(Ordering::Relaxed);
        let misses = self.misses.load(Ordering::Relaxed);
        let total = hits + misses;
        let hit_rate = if total > 0 {
            (hits as f64 / total as f64) * 100.0
        } else {
            0.0
        };
        CacheStats {
            hits,
            misses,
            hit_rate,
            size: self.len(),
        }
    }

    /// Returns true if `key` is cached, without touching statistics.
    pub async fn contains(&self, key: &str) -> bool {
        self.cache.read().await.contains_key(key)
    }
}

impl Default for MemoryImageCache {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MemoryImageCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryImageCache")
            .field("stats", &self.stats())
            .finish_non_exhaustive()
    }
}

/// Statistics about cache performance.
#[derive(Debug, Clone)]
pub struct CacheStats {
    /// Number of cache hits.
    pub hits: u64,
    /// Number of cache misses.
    pub misses: u64,
    /// Hit rate as a percentage.
    pub hit_rate: f64,
    /// Current number of cached images.
    pub size: usize,
}

impl std::fmt::Display for CacheStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Cache: {} images, {:.1}% hit rate ({} hits, {} misses)",
            self.size, self.hit_rate, self.hits, self.misses
        )
    }
}

#[async_trait::async_trait]
impl ImageCachePort for MemoryImageCache {
    async fn get(&self, key: &str) -> Option<Arc<DynamicImage>> {
        let cache = self.cache.read().await;
        if let Some(img) = cache.get(key) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            trace!(key, "Memory cache hit");
            Some(img.clone())
        } else {
            self.misses.fetch_add(1, Ordering::Relaxed);
            trace!(key, "Memory cache miss");
            None
        }
    }

    async fn put(&self, key: String, image: Arc<DynamicImage>) {
        let mut cache = self.cache.write().await;
        debug!(key = %key, "Storing image in memory cache");
        if cache.insert(key, image).is_none() {
            self.size.fetch_add(1, Ordering::Release);
        }
    }

    // Counted on insert; never waits on the lock.
    fn len(&self) -> usize {
        self.size.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_cache_put_and_get() {
        let cache = MemoryImageCache::new();
        let img = Arc::new(DynamicImage::new_rgb8(100, 100));

        cache.put("https://example.test/a.png".into(), img.clone()).await;
        let retrieved = cache.get("https://example.test/a.png").await;

        assert!(retrieved.is_some());
        assert!(Arc::ptr_eq(&retrieved.unwrap(), &img));
    }

    #[tokio::test]
    async fn test_cache_miss() {
        let cache = MemoryImageCache::new();

        assert!(cache.get("nonexistent").await.is_none());
        assert!(cache.is_empty());
    }

    #[tokio::test]
    async fn test_put_overwrites_same_key() {
        let cache = MemoryImageCache::new();
        let first = Arc::new(DynamicImage::new_rgb8(1, 1));
        let second = Arc::new(DynamicImage::new_rgb8(2, 2));

        cache.put("k".into(), first).await;
        cache.put("k".into(), second.clone()).await;

        assert_eq!(cache.len(), 1);
        assert!(Arc::ptr_eq(&cache.get("k").await.unwrap(), &second));
    }

    #[tokio::test]
    async fn test_len_while_writer_holds_lock() {
        let cache = MemoryImageCache::new();
        cache
            .put("https://example.test/a.png".into(), Arc::new(DynamicImage::new_rgb8(1, 1)))
            .await;

        let guard = cache.cache.write().await;
        assert_eq!(cache.len(), 1);
        assert!(!cache.is_empty());
        assert_eq!(cache.stats().size, 1);
        drop(guard);

        assert_eq!(cache.len(), 1);
    }

    #[tokio::test]
    async fn test_no_eviction() {
        let cache = MemoryImageCache::new();
        let img = Arc::new(DynamicImage::new_rgb8(1, 1));

        for i in 0..500 {
            cache.put(format!("https://example.test/{i}.png"), img.clone()).await;
        }

        assert_eq!(cache.len(), 500);
        assert!(cache.contains("https://example.test/0.png").await);
    }

    #[tokio::test]
    async fn test_cache_stats() {
        let cache = MemoryImageCache::new();
        let img = Arc::new(DynamicImage::new_rgb8(10, 10));

        cache.put("test1".into(), img).await;

        // Hit
        let _ = cache.get("test1").await;
        // Miss
        let _ = cache.get("missing").await;

        let stats = cache.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.size, 1);
        assert_eq!(
            stats.to_string(),
            "Cache: 1 images, 50.0% hit rate (1 hits, 1 misses)"
        );
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_access() {
        let cache = Arc::new(MemoryImageCache::new());
        let img = Arc::new(DynamicImage::new_rgb8(1, 1));

        let tasks: Vec<_> = (0..32)
            .map(|i| {
                let cache = cache.clone();
                let img = img.clone();
                tokio::spawn(async move {
                    let key = format!("k{}", i % 8);
                    cache.put(key.clone(), img).await;
                    cache.get(&key).await.is_some()
                })
            })
            .collect();

        for task in tasks {
            assert!(task.await.unwrap());
        }
        assert_eq!(cache.len(), 8);
    }
}
