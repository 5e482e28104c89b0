//! Application layer with services, use cases and DTOs.

/// Data transfer objects.
pub mod dto;
/// Image services.
pub mod services;
/// Use case implementations.
pub mod use_cases;

pub use dto::{GalleryReport, LoadOutcome};
pub use services::{ImageFetcher, ImageService};
pub use use_cases::{LoadGalleryUseCase, LoadImageUseCase};
