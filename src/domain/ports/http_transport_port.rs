//! Port definition for the single HTTP GET behind every fetch.

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Url;

use crate::domain::errors::FetchError;

/// Raw response as seen by the fetcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body.
    pub body: Bytes,
}

impl HttpResponse {
    /// Creates new response.
    #[must_use]
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Returns whether the status lies in `[200, 300)`.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Port for issuing one HTTP GET.
///
/// Implementations report connection-level failures as
/// [`FetchError::Transport`] and return every received response as-is,
/// whatever its status.
#[async_trait]
pub trait HttpTransportPort: Send + Sync {
    /// Sends a GET request to `url`.
    async fn get(&self, url: &Url) -> Result<HttpResponse, FetchError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::io::Cursor;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Encodes a solid `width` x `height` PNG.
    pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let mut buf = Vec::new();
        image::DynamicImage::new_rgb8(width, height)
            .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
            .expect("encoding an in-memory PNG");
        buf
    }

    /// Deterministic transport returning canned responses per URL.
    /// Unknown URLs answer with a transport error.
    pub struct StubTransport {
        routes: HashMap<String, Result<HttpResponse, FetchError>>,
        calls: AtomicUsize,
        seen: Mutex<Vec<String>>,
    }

    impl StubTransport {
        /// Creates a stub with no routes.
        pub fn new() -> Self {
            Self {
                routes: HashMap::new(),
                calls: AtomicUsize::new(0),
                seen: Mutex::new(Vec::new()),
            }
        }

        /// Routes `url` to a response.
        pub fn with_response(mut self, url: &str, status: u16, body: impl Into<Bytes>) -> Self {
            self.routes
                .insert(url.to_string(), Ok(HttpResponse::new(status, body)));
            self
        }

        /// Routes `url` to a valid PNG with status 200.
        pub fn with_png(self, url: &str, width: u32, height: u32) -> Self {
            self.with_response(url, 200, png_bytes(width, height))
        }

        /// Routes `url` to a transport failure.
        pub fn with_failure(mut self, url: &str, message: &str) -> Self {
            self.routes
                .insert(url.to_string(), Err(FetchError::transport(message)));
            self
        }

        /// Returns how many GETs were issued.
        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        /// Returns how many GETs were issued for `url`.
        pub fn calls_for(&self, url: &str) -> usize {
            self.seen
                .lock()
                .unwrap()
                .iter()
                .filter(|u| u.as_str() == url)
                .count()
        }
    }

    impl Default for StubTransport {
        fn default() -> Self {
            Self::new()
        }
    }

    #[async_trait]
    impl HttpTransportPort for StubTransport {
        async fn get(&self, url: &Url) -> Result<HttpResponse, FetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.seen.lock().unwrap().push(url.to_string());

            self.routes
                .get(url.as_str())
                .cloned()
                .unwrap_or_else(|| Err(FetchError::transport("no route")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(199, false ; "below_range")]
    #[test_case(200, true ; "ok")]
    #[test_case(204, true ; "no_content")]
    #[test_case(299, true ; "upper_edge")]
    #[test_case(300, false ; "redirect")]
    #[test_case(404, false ; "not_found")]
    fn test_is_success(status: u16, expected: bool) {
        assert_eq!(HttpResponse::new(status, Bytes::new()).is_success(), expected);
    }
}
