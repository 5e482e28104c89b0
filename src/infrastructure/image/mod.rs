//! Image caching infrastructure.

pub mod memory_cache;

pub use memory_cache::{CacheStats, MemoryImageCache};
