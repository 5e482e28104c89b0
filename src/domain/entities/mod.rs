//! Domain entity definitions.

mod delivery;
mod feed;
mod image;

pub use delivery::{DeliveryMode, DeliveryPlan};
pub use feed::{DEFAULT_FEED_BASE, DEFAULT_FEED_SIZE, ImageFeed};
pub use self::image::{ImageRequest, ImageSource, LoadedImage};
