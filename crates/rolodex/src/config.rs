//! Configuration management for rolodex.
//!
//! A rolodex directory (`.rolodex/`) holds a YAML config file and the JSONL
//! snapshot of the network.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Default network name if none specified
pub const DEFAULT_NETWORK_NAME: &str = "network";

/// Name of the rolodex directory
pub const ROLODEX_DIR_NAME: &str = ".rolodex";

/// Name of the configuration file
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Name of the profiles data file
pub const PROFILES_FILE_NAME: &str = "profiles.jsonl";

/// Maximum directory depth to traverse when searching for the rolodex root
pub const MAX_TRAVERSAL_DEPTH: usize = 256;

/// Configuration file structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RolodexConfig {
    /// Display name of the network
    #[serde(rename = "network-name")]
    pub network_name: String,

    /// Storage configuration
    pub storage: StorageConfig,
}

/// Storage configuration section
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StorageConfig {
    /// Path to the JSONL data file, relative to the rolodex root
    #[serde(rename = "data-file")]
    pub data_file: String,
}

impl RolodexConfig {
    /// Create a new configuration with the given network name
    pub fn new(network_name: &str) -> Self {
        Self {
            network_name: network_name.to_string(),
            storage: StorageConfig {
                data_file: format!("{ROLODEX_DIR_NAME}/{PROFILES_FILE_NAME}"),
            },
        }
    }

    /// Load configuration from a file
    pub async fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).await?;
        serde_yaml::from_str(&content).map_err(|e| Error::Config(e.to_string()))
    }

    /// Save configuration to a file
    pub async fn save(&self, path: &Path) -> Result<()> {
        let content =
            serde_yaml::to_string(self).map_err(|e| Error::Config(format!("YAML error: {e}")))?;
        fs::write(path, content).await?;
        Ok(())
    }

    /// Absolute path of the data file for a rolodex rooted at `root_dir`.
    pub fn data_path(&self, root_dir: &Path) -> Result<PathBuf> {
        let data_file = Path::new(&self.storage.data_file);
        if data_file.is_absolute() {
            return Err(Error::Config(format!(
                "data-file must be relative to the rolodex root, got '{}'",
                self.storage.data_file
            )));
        }
        Ok(root_dir.join(data_file))
    }
}

impl Default for RolodexConfig {
    fn default() -> Self {
        Self::new(DEFAULT_NETWORK_NAME)
    }
}

/// Find the rolodex root directory by searching up the directory tree.
///
/// Returns the directory containing `.rolodex/`, or `None` if none is found
/// within [`MAX_TRAVERSAL_DEPTH`] levels.
pub fn find_rolodex_root(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();
    let mut depth = 0;

    loop {
        if current.join(ROLODEX_DIR_NAME).exists() {
            return Some(current);
        }

        depth += 1;
        if depth > MAX_TRAVERSAL_DEPTH || !current.pop() {
            return None;
        }
    }
}
