use super::app_config::LogLevel;
use crate::domain::entities::DeliveryMode;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(
    name = "picfetch",
    version,
    about = "Fetch and cache images with callback, stream or direct delivery",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH", global = true)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum, global = true)]
    pub log_level: Option<LogLevel>,

    /// Delivery shape for each load.
    #[arg(short, long, value_enum, global = true)]
    pub delivery: Option<DeliveryMode>,

    /// Request timeout in seconds.
    #[arg(long, value_name = "SECS", global = true)]
    pub timeout_secs: Option<u64>,

    /// User agent sent with each request.
    #[arg(long, global = true)]
    pub user_agent: Option<String>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Load images one after another; repeated URLs come from the cache.
    Fetch {
        /// Image URLs.
        #[arg(required = true, value_name = "URL")]
        urls: Vec<String>,
    },
    /// Load a gallery concurrently.
    Gallery {
        /// Image URLs. Defaults to the configured feed.
        #[arg(value_name = "URL")]
        urls: Vec<String>,

        /// Indexed feed URLs to append after the seed.
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Rotate through callback, stream and direct delivery.
        #[arg(long)]
        cycle: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_requires_url() {
        assert!(CliArgs::try_parse_from(["picfetch", "fetch"]).is_err());
    }

    #[test]
    fn test_gallery_flags() {
        let args = CliArgs::try_parse_from([
            "picfetch", "gallery", "-n", "5", "--cycle", "-d", "stream",
        ])
        .unwrap();

        assert_eq!(args.delivery, Some(DeliveryMode::Stream));
        match args.command {
            Command::Gallery { urls, count, cycle } => {
                assert!(urls.is_empty());
                assert_eq!(count, Some(5));
                assert!(cycle);
            }
            Command::Fetch { .. } => panic!("expected gallery"),
        }
    }
}
