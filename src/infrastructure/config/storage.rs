//! Config file discovery, loading and atomic writes.

use super::app_config::AppConfig;
use directories::ProjectDirs;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

const APP_QUALIFIER: &str = "com";
const APP_ORGANIZATION: &str = "linuxmobile";
const APP_NAME: &str = "picfetch";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Configuration storage errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No platform config directory could be resolved.
    #[error("failed to determine config directory")]
    ConfigDirNotFound,
    /// Filesystem failure.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// Config could not be serialized.
    #[error("toml serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),
    /// Config file is not valid TOML for [`AppConfig`].
    #[error("toml deserialization error: {0}")]
    TomlDe(#[from] toml::de::Error),
}

/// Outcome of [`StorageManager::load_config`].
#[derive(Debug)]
pub struct LoadedConfig {
    /// Effective configuration.
    pub config: AppConfig,
    /// Parse error that forced a fallback to defaults.
    ///
    /// Loading runs before the subscriber is installed, so the caller logs it.
    pub fallback: Option<ConfigError>,
}

/// Locates, reads and writes the configuration file.
#[derive(Debug)]
pub struct StorageManager {
    config_dir: PathBuf,
}

impl StorageManager {
    /// Create a new `StorageManager` rooted at the platform config directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the configuration directory cannot be determined.
    pub fn new() -> Result<Self, ConfigError> {
        let config_dir = ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.config_dir().to_path_buf())
            .ok_or(ConfigError::ConfigDirNotFound)?;

        Ok(Self { config_dir })
    }

    /// Creates a new `StorageManager` with a specific directory (useful for testing).
    #[must_use]
    pub fn with_dir(path: PathBuf) -> Self {
        Self { config_dir: path }
    }

    /// Returns the default configuration file path.
    #[must_use]
    pub fn config_path(&self) -> PathBuf {
        self.config_dir.join(CONFIG_FILE_NAME)
    }

    /// Loads the application configuration, writing a default file if none exists.
    /// A malformed file is left untouched; defaults are used and the parse
    /// error is reported in [`LoadedConfig::fallback`].
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or the default cannot be written.
    pub fn load_config(&self, path_override: Option<&Path>) -> Result<LoadedConfig, ConfigError> {
        let config_path = path_override.map_or_else(|| self.config_path(), Path::to_path_buf);

        if !config_path.exists() {
            info!(
                "Config file not found at {:?}, creating default.",
                config_path
            );
            let default_config = AppConfig::default();
            if let Some(parent) = config_path.parent() {
                fs::create_dir_all(parent)?;
            }
            Self::save_to_file(&config_path, &default_config)?;
            return Ok(LoadedConfig {
                config: default_config,
                fallback: None,
            });
        }

        let content = fs::read_to_string(&config_path)?;
        let loaded = match toml::from_str::<AppConfig>(&content) {
            Ok(config) => LoadedConfig {
                config,
                fallback: None,
            },
            Err(e) => LoadedConfig {
                config: AppConfig::default(),
                fallback: Some(e.into()),
            },
        };
        Ok(loaded)
    }

    fn save_to_file<T: serde::Serialize>(path: &Path, data: &T) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(data)?;

        let parent = path
            .parent()
            .ok_or_else(|| std::io::Error::other("Invalid path"))?;
        let mut temp_file = tempfile::NamedTempFile::new_in(parent)?;
        temp_file.write_all(content.as_bytes())?;
        temp_file.persist(path).map_err(|e| e.error)?;

        Ok(())
    }
}
