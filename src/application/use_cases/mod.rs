//! Use case implementations.

mod load_gallery_use_case;
mod load_image_use_case;

pub use load_gallery_use_case::LoadGalleryUseCase;
pub use load_image_use_case::LoadImageUseCase;
