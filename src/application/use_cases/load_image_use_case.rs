//! Load image use case implementation.

use std::sync::Arc;

use futures_util::StreamExt;
use tokio::sync::oneshot;
use tracing::{debug, warn};

use crate::application::services::ImageService;
use crate::domain::entities::DeliveryMode;
use crate::domain::errors::{FetchError, FetchResult};
use crate::domain::ports::ImageRenderPort;

/// Loads one image through a configured delivery shape and hands the
/// result to the renderer.
#[derive(Clone)]
pub struct LoadImageUseCase {
    service: ImageService,
    renderer: Arc<dyn ImageRenderPort>,
    mode: DeliveryMode,
}

impl LoadImageUseCase {
    /// Creates new load use case.
    #[must_use]
    pub fn new(
        service: ImageService,
        renderer: Arc<dyn ImageRenderPort>,
        mode: DeliveryMode,
    ) -> Self {
        Self {
            service,
            renderer,
            mode,
        }
    }

    /// Returns the configured delivery shape.
    #[must_use]
    pub const fn mode(&self) -> DeliveryMode {
        self.mode
    }

    /// Returns a copy of this use case bound to another delivery shape.
    #[must_use]
    pub fn with_mode(&self, mode: DeliveryMode) -> Self {
        Self {
            mode,
            ..self.clone()
        }
    }

    /// Loads `url` and renders the outcome exactly once.
    ///
    /// # Errors
    /// Returns the fetch failure after it has been rendered.
    pub async fn execute(&self, url: &str) -> FetchResult {
        debug!(url, mode = %self.mode, "Loading image");

        let result = self.deliver(url).await;

        match &result {
            Ok(image) => self.renderer.render(image),
            Err(e) => {
                warn!(url, mode = %self.mode, error = %e, "Image load failed");
                self.renderer.render_failure(url, e);
            }
        }

        result
    }

    async fn deliver(&self, url: &str) -> FetchResult {
        match self.mode {
            DeliveryMode::Direct => self.service.request(url).await,
            DeliveryMode::Stream => self
                .service
                .request_stream(url)
                .next()
                .await
                .unwrap_or_else(|| Err(FetchError::transport("stream ended without a result"))),
            DeliveryMode::Callback => {
                let (tx, rx) = oneshot::channel();
                self.service.request_with_callback(url, move |result| {
                    let _ = tx.send(result);
                });
                rx.await.unwrap_or_else(|_| {
                    Err(FetchError::transport("load task ended without a result"))
                })
            }
        }
    }
}
