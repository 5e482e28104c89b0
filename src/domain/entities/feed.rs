//! Growing list of image URLs backing a gallery.

/// Default host for generated image URLs.
pub const DEFAULT_FEED_BASE: &str = "https://picsum.photos";

/// Default edge length requested from the host.
pub const DEFAULT_FEED_SIZE: u32 = 1000;

/// A list of image URLs that starts from a few copies of the same
/// random-image URL and grows with indexed URLs on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFeed {
    base_url: String,
    size: u32,
    urls: Vec<String>,
}

impl ImageFeed {
    /// Creates an empty feed.
    #[must_use]
    pub fn new(base_url: impl Into<String>, size: u32) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            size,
            urls: Vec::new(),
        }
    }

    /// Appends `count` copies of the unindexed URL.
    #[must_use]
    pub fn seeded(mut self, count: usize) -> Self {
        let seed = format!("{}/{}", self.base_url, self.size);
        self.urls.extend(std::iter::repeat_n(seed, count));
        self
    }

    /// Appends `count` indexed URLs, numbering from the current length.
    pub fn extend_by(&mut self, count: usize) {
        for _ in 0..count {
            let next = self.urls.len();
            self.urls
                .push(format!("{}/id/{}/{}", self.base_url, next, self.size));
        }
    }

    /// Returns the URLs in display order.
    #[must_use]
    pub fn urls(&self) -> &[String] {
        &self.urls
    }

    /// Returns the number of URLs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.urls.len()
    }

    /// Returns true if the feed has no URLs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    /// Consumes the feed, returning its URLs.
    #[must_use]
    pub fn into_urls(self) -> Vec<String> {
        self.urls
    }
}

impl Default for ImageFeed {
    fn default() -> Self {
        Self::new(DEFAULT_FEED_BASE, DEFAULT_FEED_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_feed_repeats_base_url() {
        let feed = ImageFeed::default().seeded(3);
        assert_eq!(feed.len(), 3);
        assert!(feed.urls().iter().all(|u| u == "https://picsum.photos/1000"));
    }

    #[test]
    fn test_extend_numbers_from_length() {
        let mut feed = ImageFeed::new("https://img.test/", 200).seeded(2);
        feed.extend_by(2);

        assert_eq!(
            feed.into_urls(),
            vec![
                "https://img.test/200",
                "https://img.test/200",
                "https://img.test/id/2/200",
                "https://img.test/id/3/200",
            ]
        );
    }

    #[test]
    fn test_empty_feed() {
        let feed = ImageFeed::default();
        assert!(feed.is_empty());
    }
}
