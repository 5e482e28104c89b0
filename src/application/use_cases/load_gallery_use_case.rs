//! Batch load of a gallery of images.

use futures_util::future::join_all;
use tracing::info;

use super::LoadImageUseCase;
use crate::application::dto::{GalleryReport, LoadOutcome};
use crate::domain::entities::DeliveryPlan;

/// Loads many URLs at once, one delivery shape per URL.
///
/// All loads start together with no queueing or concurrency limit.
/// Repeated URLs that miss together are each fetched.
#[derive(Clone)]
pub struct LoadGalleryUseCase {
    loader: LoadImageUseCase,
    plan: DeliveryPlan,
}

impl LoadGalleryUseCase {
    /// Creates new gallery use case.
    #[must_use]
    pub const fn new(loader: LoadImageUseCase, plan: DeliveryPlan) -> Self {
        Self { loader, plan }
    }

    /// Loads every URL and reports outcomes in input order.
    pub async fn execute(&self, urls: &[String]) -> GalleryReport {
        info!(count = urls.len(), plan = ?self.plan, "Loading gallery");

        let loads = urls.iter().enumerate().map(|(index, url)| {
            let loader = self.loader.with_mode(self.plan.mode_for(index));
            async move {
                let result = loader.execute(url).await;
                LoadOutcome::new(url.clone(), loader.mode(), result)
            }
        });

        let report = GalleryReport::new(join_all(loads).await);

        info!(
            loaded = report.loaded(),
            failed = report.failed(),
            "Gallery finished"
        );

        report
    }
}
