//! Port for the presentation layer that displays load results.

use crate::domain::entities::LoadedImage;
use crate::domain::errors::FetchError;

/// Receives the terminal result of each load.
#[cfg_attr(test, mockall::automock)]
pub trait ImageRenderPort: Send + Sync {
    /// Displays a loaded image.
    fn render(&self, image: &LoadedImage);

    /// Displays a failed load.
    fn render_failure(&self, url: &str, error: &FetchError);
}
