mod http_transport_port;
mod image_cache_port;
mod image_render_port;

pub use http_transport_port::{HttpResponse, HttpTransportPort};
pub use image_cache_port::ImageCachePort;
pub use image_render_port::ImageRenderPort;
