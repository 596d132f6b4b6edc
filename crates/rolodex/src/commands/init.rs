//! Implementation of the `init` command.
//!
//! Creates the `.rolodex/` directory with a configuration file and an empty
//! profile snapshot.

use crate::config::{
    CONFIG_FILE_NAME, DEFAULT_NETWORK_NAME, PROFILES_FILE_NAME, ROLODEX_DIR_NAME, RolodexConfig,
};
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Maximum network name length
pub const MAX_NETWORK_NAME_LENGTH: usize = 64;

/// Result of the init command
#[derive(Debug)]
pub struct InitResult {
    /// Path to the created rolodex directory
    pub rolodex_dir: PathBuf,
    /// Path to the created config file
    pub config_file: PathBuf,
    /// Path to the created profiles file
    pub profiles_file: PathBuf,
    /// The network name written to the config
    pub network_name: String,
}

/// Validate a network name.
///
/// Expects pre-trimmed input.
pub fn validate_network_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::Config("Network name cannot be empty".to_string()));
    }

    if name.chars().count() > MAX_NETWORK_NAME_LENGTH {
        return Err(Error::Config(format!(
            "Network name cannot exceed {MAX_NETWORK_NAME_LENGTH} characters"
        )));
    }

    Ok(())
}

/// Initialize a new rolodex in the given directory.
///
/// # Errors
///
/// Returns an error if:
/// - The `.rolodex/` directory already exists
/// - The network name is invalid
/// - File system operations fail
pub async fn init(base_dir: &Path, network_name: Option<&str>) -> Result<InitResult> {
    let network_name = network_name.unwrap_or(DEFAULT_NETWORK_NAME).trim();
    validate_network_name(network_name)?;

    if is_initialized(base_dir) {
        return Err(Error::Config(format!(
            "Rolodex is already initialized in this directory. Found existing '{ROLODEX_DIR_NAME}'"
        )));
    }

    let rolodex_dir = base_dir.join(ROLODEX_DIR_NAME);
    fs::create_dir_all(&rolodex_dir).await?;

    let config_file = rolodex_dir.join(CONFIG_FILE_NAME);
    RolodexConfig::new(network_name).save(&config_file).await?;

    let profiles_file = rolodex_dir.join(PROFILES_FILE_NAME);
    fs::write(&profiles_file, "").await?;

    tracing::debug!(dir = %rolodex_dir.display(), "Initialized rolodex");

    Ok(InitResult {
        rolodex_dir,
        config_file,
        profiles_file,
        network_name: network_name.to_string(),
    })
}

/// Check if a directory has been initialized with rolodex.
pub fn is_initialized(base_dir: &Path) -> bool {
    base_dir.join(ROLODEX_DIR_NAME).exists()
}
