//! Application services.

mod image_fetcher;
mod image_service;

pub use image_fetcher::ImageFetcher;
pub use image_service::ImageService;
