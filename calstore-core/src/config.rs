//! Global calstore configuration.

use std::path::{Path, PathBuf};

use config::{Config, File};
use serde::Deserialize;

use crate::error::{CalStoreError, CalStoreResult};

static DEFAULT_DATA_DIR: &str = "~/.calstore";
static DEFAULT_STORAGE_KEY: &str = "events";

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

/// Configuration at ~/.config/calstore/config.toml
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CalStoreConfig {
    /// Where event snapshots are stored
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Storage key holding the event snapshot
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
}

impl Default for CalStoreConfig {
    fn default() -> Self {
        CalStoreConfig {
            data_dir: default_data_dir(),
            storage_key: default_storage_key(),
        }
    }
}

impl CalStoreConfig {
    pub fn config_path() -> CalStoreResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| CalStoreError::Config("Could not determine config directory".into()))?
            .join("calstore");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the global config, writing a commented default file on first run.
    pub fn load() -> CalStoreResult<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> CalStoreResult<Self> {
        if !path.exists() {
            Self::create_default_config(path)?;
        }

        Config::builder()
            .add_source(File::from(path).required(false))
            .build()
            .map_err(|e| CalStoreError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| CalStoreError::Config(e.to_string()))
    }

    /// The data directory with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.data_dir.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> CalStoreResult<()> {
        let contents = format!(
            "\
# calstore configuration

# Where your events are stored:
# data_dir = \"{}\"

# Storage key (file name without .json) holding the events:
# storage_key = \"{}\"
",
            DEFAULT_DATA_DIR, DEFAULT_STORAGE_KEY
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                CalStoreError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| CalStoreError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
