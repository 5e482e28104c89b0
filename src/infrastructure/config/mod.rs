//! Application configuration.

pub mod app_config;
/// Command-line arguments.
pub mod args;
pub mod storage;

pub use app_config::{AppConfig, FeedConfig, HttpConfig, LogLevel};
pub use args::{CliArgs, Command};
pub use storage::{ConfigError, LoadedConfig, StorageManager};
