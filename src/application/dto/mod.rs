//! Data transfer objects.

mod load_dto;

pub use load_dto::{GalleryReport, LoadOutcome};
