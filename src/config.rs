use crate::domain::Grouping;
use crate::ticker::DEFAULT_TICK_MS;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors while reading the config file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Dashboard settings. Every field has a default so a partial file is fine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Grouping shown on startup
    pub grouping: Grouping,
    /// Use emoji glyphs (falls back to ASCII when false)
    pub use_emoji: bool,
    /// Event loop poll interval
    pub tick_ms: u64,
    /// How long a toast stays on screen
    pub toast_ms: u64,
    /// Seed the store with sample tasks
    pub demo: bool,
    /// Print a markdown summary to stdout after leaving the dashboard
    pub summary_on_exit: bool,
    /// Mirror toasts as desktop notifications (macOS only)
    pub desktop_notifications: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            grouping: Grouping::Week,
            use_emoji: true,
            tick_ms: DEFAULT_TICK_MS,
            toast_ms: 3000,
            demo: false,
            summary_on_exit: false,
            desktop_notifications: false,
        }
    }
}

impl Config {
    /// Load config from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let config = serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Load from an explicit path, or the default location when there is one
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path.map(Path::to_path_buf).or_else(default_config_path) {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }
}

/// `<config_dir>/taskboard/config.json`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("taskboard").join("config.json"))
}

/// `<data_dir>/taskboard/taskboard.log`
pub fn default_log_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("taskboard").join("taskboard.log"))
}
