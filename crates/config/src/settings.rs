use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const APP_DIR: &str = "rawcull";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not find config directory")]
    NoConfigDir,
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid settings in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// User settings, read from `<config dir>/rawcull/config.toml`.
///
/// The file is only ever read; nothing here writes it back.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    #[serde(default)]
    pub start_folder: Option<PathBuf>,
    #[serde(default = "default_confirm_deletions")]
    pub confirm_deletions: bool,
    #[serde(default = "default_show_preview_metadata")]
    pub show_preview_metadata: bool,
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
    #[serde(default)]
    pub log_dir: Option<PathBuf>,
}

// Default value functions for serde
fn default_confirm_deletions() -> bool {
    true
}
fn default_show_preview_metadata() -> bool {
    true
}
fn default_log_filter() -> String {
    "rawcull=debug,info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            start_folder: None,
            confirm_deletions: default_confirm_deletions(),
            show_preview_metadata: default_show_preview_metadata(),
            log_filter: default_log_filter(),
            log_dir: None,
        }
    }
}

impl Settings {
    /// Loads settings from the platform config directory, falling back to
    /// defaults when no file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the config directory cannot be determined or the
    /// file exists but cannot be read or parsed.
    pub async fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path()?;
        Self::load_from(&path).await
    }

    /// Loads settings from an explicit file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or is not valid
    /// TOML for these settings.
    pub async fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!("No settings file at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        let settings: Settings = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        info!("Settings loaded from {:?}", path);
        Ok(settings)
    }

    /// Location of the settings file.
    ///
    /// # Errors
    ///
    /// Returns an error if the platform has no config directory.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join(APP_DIR).join(CONFIG_FILE))
    }

    /// Log directory, defaulting to `<data dir>/rawcull/logs`.
    #[must_use]
    pub fn resolved_log_dir(&self) -> Option<PathBuf> {
        self.log_dir
            .clone()
            .or_else(|| dirs::data_local_dir().map(|dir| dir.join(APP_DIR).join("logs")))
    }
}
