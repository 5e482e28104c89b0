//! Application configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::domain::entities::{DEFAULT_FEED_BASE, DEFAULT_FEED_SIZE, DeliveryMode, ImageFeed};

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    Info,
    /// Warning level.
    #[default]
    Warn,
    /// Error level.
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Application configuration, read from `config.toml` and overridden by CLI flags.
#[derive(Debug, Serialize, Deserialize)]
pub struct AppConfig {
    /// Log file path. Logs go to stderr when unset.
    #[serde(default)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Delivery shape used for every load.
    #[serde(default)]
    pub delivery: DeliveryMode,

    /// HTTP configuration.
    #[serde(default)]
    pub http: HttpConfig,

    /// Gallery feed configuration.
    #[serde(default)]
    pub feed: FeedConfig,
}

/// HTTP configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// User agent sent with each request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds. Unset keeps the transport default.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            timeout_secs: None,
        }
    }
}

/// Gallery feed configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedConfig {
    /// Image host base URL.
    #[serde(default = "default_feed_base")]
    pub base_url: String,

    /// Requested image edge length in pixels.
    #[serde(default = "default_feed_size")]
    pub size: u32,

    /// Copies of the unindexed URL at the start of the feed.
    #[serde(default = "default_seed_count")]
    pub seed_count: usize,

    /// Indexed URLs appended after the seed.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

impl FeedConfig {
    /// Builds a feed with the seed plus `pages` indexed URLs.
    #[must_use]
    pub fn build(&self, pages: usize) -> ImageFeed {
        let mut feed = ImageFeed::new(&self.base_url, self.size).seeded(self.seed_count);
        feed.extend_by(pages);
        feed
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            base_url: default_feed_base(),
            size: default_feed_size(),
            seed_count: default_seed_count(),
            page_size: default_page_size(),
        }
    }
}

fn default_user_agent() -> String {
    format!("{}/{}", crate::NAME, crate::VERSION)
}

fn default_feed_base() -> String {
    DEFAULT_FEED_BASE.to_string()
}

const fn default_feed_size() -> u32 {
    DEFAULT_FEED_SIZE
}

const fn default_seed_count() -> usize {
    3
}

const fn default_page_size() -> usize {
    3
}

use super::args::CliArgs;

impl AppConfig {
    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: &CliArgs) {
        if let Some(log_path) = &args.log_path {
            self.log_path = Some(log_path.clone());
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(delivery) = args.delivery {
            self.delivery = delivery;
        }
        if let Some(timeout_secs) = args.timeout_secs {
            self.http.timeout_secs = Some(timeout_secs);
        }
        if let Some(user_agent) = &args.user_agent {
            self.http.user_agent = user_agent.clone();
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_path: None,
            log_level: LogLevel::default(),
            delivery: DeliveryMode::default(),
            http: HttpConfig::default(),
            feed: FeedConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_parse_partial_config() {
        let toml_content = r#"
            delivery = "callback"
            log_level = "debug"

            [http]
            timeout_secs = 10

            [feed]
            size = 500
        "#;

        let config: AppConfig = toml::from_str(toml_content).expect("Failed to parse config");

        assert_eq!(config.delivery, DeliveryMode::Callback);
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.http.timeout_secs, Some(10));
        assert_eq!(config.http.user_agent, default_user_agent());
        assert_eq!(config.feed.size, 500);
        assert_eq!(config.feed.base_url, DEFAULT_FEED_BASE);
        assert_eq!(config.feed.seed_count, 3);
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.delivery, DeliveryMode::Direct);
        assert_eq!(config.http.timeout_secs, None);
        assert!(config.log_path.is_none());
    }

    #[test]
    fn test_cli_overrides_file_values() {
        let mut config: AppConfig = toml::from_str(
            r#"
            delivery = "stream"
            [http]
            user_agent = "from-file"
        "#,
        )
        .unwrap();

        let args = CliArgs::parse_from([
            "picfetch",
            "--delivery",
            "callback",
            "--timeout-secs",
            "3",
            "fetch",
            "https://example.test/ok.png",
        ]);
        config.merge_with_args(&args);

        assert_eq!(config.delivery, DeliveryMode::Callback);
        assert_eq!(config.http.timeout_secs, Some(3));
        assert_eq!(config.http.user_agent, "from-file");
    }

    #[test]
    fn test_feed_config_builds_seed_and_pages() {
        let feed = FeedConfig::default().build(2);

        assert_eq!(feed.len(), 5);
        assert_eq!(feed.urls()[0], "https://picsum.photos/1000");
        assert_eq!(feed.urls()[4], "https://picsum.photos/id/4/1000");
    }
}
