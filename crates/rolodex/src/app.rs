//! Application context for CLI command execution.
//!
//! The `App` struct finds the rolodex directory, loads the configuration and
//! the network snapshot, and saves the snapshot back after mutations.
//!
//! # Example
//!
//! ```no_run
//! use rolodex::app::App;
//! use std::path::Path;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> anyhow::Result<()> {
//!     let app = App::from_directory(Path::new(".")).await?;
//!     println!("{} profiles", app.network().len());
//!     Ok(())
//! }
//! ```

use crate::config::{CONFIG_FILE_NAME, ROLODEX_DIR_NAME, RolodexConfig, find_rolodex_root};
use crate::domain::ProfileId;
use crate::error::{Error, Result};
use crate::network::{Network, load_from_jsonl, save_to_jsonl};
use std::path::{Path, PathBuf};

/// Application context for CLI operations.
#[derive(Debug)]
pub struct App {
    /// The loaded network
    network: Network,

    /// Path to the JSONL snapshot
    data_path: PathBuf,

    /// Network name from configuration
    network_name: String,
}

impl App {
    /// Create an App instance from the given working directory.
    ///
    /// Searches up the directory tree to find a `.rolodex/` directory,
    /// loads configuration, and loads the network snapshot. Load warnings
    /// are logged.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No rolodex directory is found in the directory tree
    /// - Configuration cannot be loaded
    /// - The snapshot cannot be read
    pub async fn from_directory(working_dir: &Path) -> Result<Self> {
        let root_dir = find_rolodex_root(working_dir).ok_or(Error::NotInitialized)?;

        let rolodex_dir = root_dir.join(ROLODEX_DIR_NAME);
        let config = RolodexConfig::load(&rolodex_dir.join(CONFIG_FILE_NAME)).await?;
        let data_path = config.data_path(&root_dir)?;

        let (network, load_warnings) = load_from_jsonl(&data_path).await?;
        for warning in &load_warnings {
            tracing::warn!(warning = ?warning, "JSONL load warning");
        }

        Ok(Self {
            network,
            data_path,
            network_name: config.network_name,
        })
    }

    /// Get an immutable reference to the network.
    pub fn network(&self) -> &Network {
        &self.network
    }

    /// Get a mutable reference to the network.
    pub fn network_mut(&mut self) -> &mut Network {
        &mut self.network
    }

    /// Get the network name.
    pub fn network_name(&self) -> &str {
        &self.network_name
    }

    /// Resolve a profile reference given on the command line.
    ///
    /// `#<n>` selects by id; anything else must be the exact name of
    /// exactly one profile. A `#` followed by anything other than a `u32`,
    /// such as `#x`, is looked up as a name.
    pub fn resolve(&self, reference: &str) -> Result<ProfileId> {
        if let Some(raw) = reference.strip_prefix('#') {
            if let Ok(n) = raw.parse::<u32>() {
                let id = ProfileId::new(n);
                return self
                    .network
                    .profile(id)
                    .map(|p| p.id)
                    .ok_or(Error::ProfileNotFound(id));
            }
        }

        match self.network.find_by_name(reference).as_slice() {
            [] => Err(Error::NameNotFound(reference.to_string())),
            [profile] => Ok(profile.id),
            matches => Err(Error::AmbiguousName {
                name: reference.to_string(),
                count: matches.len(),
            }),
        }
    }

    /// Save the network snapshot.
    ///
    /// This should be called after any mutating operations.
    pub async fn save(&self) -> Result<()> {
        save_to_jsonl(&self.network, &self.data_path).await
    }
}
