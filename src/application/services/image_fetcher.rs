//! Single-attempt fetch and decode of one image.

use std::sync::Arc;

use bytes::Bytes;
use image::DynamicImage;
use tracing::{debug, trace};

use crate::domain::entities::ImageRequest;
use crate::domain::errors::FetchError;
use crate::domain::ports::HttpTransportPort;

/// Turns a URL into a decoded image: validate, GET, gate on status, decode.
///
/// There are no retries and no cache here; see
/// [`ImageService`](super::ImageService) for the cached entry points.
#[derive(Clone)]
pub struct ImageFetcher {
    transport: Arc<dyn HttpTransportPort>,
}

impl std::fmt::Debug for ImageFetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageFetcher").finish_non_exhaustive()
    }
}

impl ImageFetcher {
    /// Creates new fetcher over a transport.
    #[must_use]
    pub fn new(transport: Arc<dyn HttpTransportPort>) -> Self {
        Self { transport }
    }

    /// Fetches and decodes the image behind `request`.
    ///
    /// # Errors
    /// - [`FetchError::InvalidUrl`] before any network activity.
    /// - [`FetchError::Transport`] if the GET itself failed.
    /// - [`FetchError::Http`] for any status outside `[200, 300)`, whatever the body.
    /// - [`FetchError::Decode`] if the body is not a supported image.
    pub async fn fetch(&self, request: &ImageRequest) -> Result<Arc<DynamicImage>, FetchError> {
        let url = request.parse()?;

        debug!(url = %url, "Downloading image");

        let response = self.transport.get(&url).await?;

        if !response.is_success() {
            return Err(FetchError::http(response.status));
        }

        trace!(url = %url, bytes = response.body.len(), "Decoding image");

        let image = decode(response.body).await?;

        Ok(Arc::new(image))
    }
}

async fn decode(body: Bytes) -> Result<DynamicImage, FetchError> {
    tokio::task::spawn_blocking(move || image::load_from_memory(&body))
        .await
        .map_err(|e| FetchError::decode(format!("decode task panicked: {e}")))?
        .map_err(|e| FetchError::decode(e.to_string()))
}
