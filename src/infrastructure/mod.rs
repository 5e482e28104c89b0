//! Infrastructure layer with external service adapters.

/// Application configuration.
pub mod config;
/// HTTP transport adapters.
pub mod http;
/// Image caching.
pub mod image;

pub use config::{AppConfig, CliArgs, Command, ConfigError, LogLevel, StorageManager};
pub use http::ReqwestTransport;
pub use self::image::{CacheStats, MemoryImageCache};
