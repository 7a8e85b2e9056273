//! Configuration management
//!
//! Loads JSON configuration with defaults for every section, so an
//! absent file or empty object is a valid configuration. The journal
//! location can also be overridden through the environment.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub journal: JournalConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

/// Journal storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalConfig {
    pub data_file: String,
}

impl Default for JournalConfig {
    fn default() -> Self {
        JournalConfig {
            data_file: "journal.csv".to_string(),
        }
    }
}

/// Report rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    pub colored: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig { colored: true }
    }
}

impl Config {
    /// Load configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref()).context("Failed to read config file")?;
        let mut config: Config =
            serde_json::from_str(&contents).context("Failed to parse config JSON")?;
        config.apply_env();
        Ok(config)
    }

    /// Load from file when it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if path.exists() {
            match Self::from_file(path) {
                Ok(config) => return config,
                Err(e) => {
                    tracing::warn!("Ignoring config {}: {}", path.display(), e);
                }
            }
        } else {
            debug!("Config file {} not found, using defaults", path.display());
        }

        let mut config = Config::default();
        config.apply_env();
        config
    }

    /// Override file-based settings from the environment.
    fn apply_env(&mut self) {
        if let Ok(data_file) = std::env::var("JOURNAL_DATA_FILE") {
            self.journal.data_file = data_file;
        }
    }
}
