//! Configuration system for markring.
//!
//! This module provides the configuration structure for markring with sensible
//! defaults and support for serialization/deserialization via serde.
//! Configuration is loaded from a TOML file and can be overridden from the
//! command line.
//!
//! # Example
//!
//! ```
//! use markring::config::Config;
//!
//! // Use default configuration
//! let config = Config::default();
//! assert_eq!(config.capacity, 65);
//!
//! // Create custom configuration
//! let custom = Config {
//!     capacity: 10,
//!     case_insensitive: true,
//!     ..Config::default()
//! };
//! assert_eq!(custom.save_every, 1);
//! ```

use crate::history::ring::DEFAULT_CAPACITY;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration for the markring application.
///
/// # Fields
///
/// * `capacity` - Maximum number of bookmark files remembered (default: 65)
/// * `history_file` - Where the history is persisted (default: data dir)
/// * `save_every` - Save after this many jumps (default: 1)
/// * `save_interval_secs` - Save when this much time passed since the last save (default: 30)
/// * `case_insensitive` - Compare paths ignoring case (default: false)
/// * `resolve_symlinks` - Resolve symlinks when comparing paths (default: true)
/// * `abbreviate_home` - Store keys with `~` for the home directory (default: true)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Maximum number of bookmark files remembered
    #[serde(default = "default_capacity")]
    pub capacity: usize,

    /// History file location
    #[serde(default = "default_history_file")]
    pub history_file: PathBuf,

    /// Number of jumps after which the history is saved
    #[serde(default = "default_save_every")]
    pub save_every: usize,

    /// Seconds after which pending jumps are saved regardless of count
    #[serde(default = "default_save_interval_secs")]
    pub save_interval_secs: u64,

    /// Compare paths ignoring case
    #[serde(default)]
    pub case_insensitive: bool,

    /// Resolve symlinks when comparing paths
    #[serde(default = "default_true")]
    pub resolve_symlinks: bool,

    /// Store keys under the home directory as `~/...`
    #[serde(default = "default_true")]
    pub abbreviate_home: bool,
}

fn default_capacity() -> usize {
    DEFAULT_CAPACITY
}

/// Returns `<data dir>/markring/history.toml`, or a relative path if the
/// platform has no data directory.
fn default_history_file() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_default();
    path.push("markring");
    path.push("history.toml");
    path
}

fn default_save_every() -> usize {
    1
}

fn default_save_interval_secs() -> u64 {
    30
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
            history_file: default_history_file(),
            save_every: default_save_every(),
            save_interval_secs: default_save_interval_secs(),
            case_insensitive: false,
            resolve_symlinks: true,
            abbreviate_home: true,
        }
    }
}

impl Config {
    /// Returns the path to the config file.
    ///
    /// Uses `~/.config/markring/config.toml` on all platforms.
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|mut path| {
            path.push(".config");
            path.push("markring");
            path.push("config.toml");
            path
        })
    }

    /// Loads configuration from the default config file.
    ///
    /// Returns the default configuration if the file doesn't exist or can't be read.
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Loads configuration from `path`, falling back to defaults.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents).unwrap_or_else(|e| {
                log::warn!("ignoring invalid config {}: {}", path.display(), e);
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Saves configuration to the default config file.
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        self.save_to(&config_path)
    }

    /// Saves configuration to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let toml_string = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_string)?;

        Ok(())
    }
}
