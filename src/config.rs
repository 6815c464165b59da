//! Configuration loading and management
//!
//! Handles parsing of optional `devlist.toml` files. Every field has a
//! default; a missing file means a default configuration, and a broken one
//! falls back to defaults rather than blocking startup.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Environment variable pointing at an explicit config file
pub const CONFIG_ENV: &str = "DEVLIST_CONFIG";

const CONFIG_FILE: &str = "devlist.toml";

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Storage configuration
    #[serde(default)]
    pub storage: StorageConfig,

    /// UI configuration
    #[serde(default)]
    pub ui: UiConfig,
}

/// Storage-related configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Override for the data directory holding the persisted slots
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

/// UI-related configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// chrono format string for dates shown on cards
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Board header title
    #[serde(default = "default_title")]
    pub title: String,
}

fn default_date_format() -> String {
    "%d/%m/%Y".to_string()
}

fn default_title() -> String {
    "<DevList>".to_string()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            date_format: default_date_format(),
            title: default_title(),
        }
    }
}

impl Config {
    /// Load configuration from a specific file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from the usual locations, or return defaults.
    ///
    /// Resolution order: `DEVLIST_CONFIG`, `./devlist.toml`, then the
    /// platform config directory.
    pub fn load_default() -> Self {
        for path in Self::candidate_paths() {
            if path.exists() {
                return Self::load(&path).unwrap_or_default();
            }
        }
        Self::default()
    }

    fn candidate_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();
        if let Some(explicit) = std::env::var_os(CONFIG_ENV) {
            paths.push(PathBuf::from(explicit));
        }
        paths.push(PathBuf::from(CONFIG_FILE));
        if let Some(dirs) = ProjectDirs::from("", "", "devlist") {
            paths.push(dirs.config_dir().join(CONFIG_FILE));
        }
        paths
    }
}
