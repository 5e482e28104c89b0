//! Plain-text rendering of load results.

use crate::application::dto::GalleryReport;
use crate::domain::entities::LoadedImage;
use crate::domain::errors::FetchError;
use crate::domain::ports::ImageRenderPort;

/// Prints one line per load result to stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleRenderer;

impl ConsoleRenderer {
    /// Creates new renderer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Prints the closing line of a gallery run.
    pub fn summary(&self, report: &GalleryReport) {
        println!("{report}");
    }
}

impl ImageRenderPort for ConsoleRenderer {
    fn render(&self, image: &LoadedImage) {
        println!("{}", format_success(image));
    }

    fn render_failure(&self, url: &str, error: &FetchError) {
        println!("{}", format_failure(url, error));
    }
}

fn format_success(image: &LoadedImage) -> String {
    let (width, height) = image.dimensions();
    format!("ok    {} {width}x{height} ({})", image.url, image.source)
}

fn format_failure(url: &str, error: &FetchError) -> String {
    let shown = if url.is_empty() { "<empty>" } else { url };
    format!("error {shown} {error}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::ImageSource;
    use std::sync::Arc;

    #[test]
    fn test_format_success() {
        let image = LoadedImage::new(
            "https://example.test/ok.png",
            Arc::new(image::DynamicImage::new_rgb8(8, 6)),
            ImageSource::MemoryCache,
        );

        assert_eq!(
            format_success(&image),
            "ok    https://example.test/ok.png 8x6 (memory)"
        );
    }

    #[test]
    fn test_format_failure() {
        assert_eq!(
            format_failure("https://example.test/404.png", &FetchError::http(404)),
            "error https://example.test/404.png server responded with HTTP 404"
        );
        assert!(format_failure("", &FetchError::invalid_url("")).starts_with("error <empty>"));
    }
}
