//! Error types for rolodex operations.

use crate::domain::ProfileId;
use std::io;
use thiserror::Error;

/// The error type for rolodex operations.
///
/// Query misses are not errors: overlap and path searches return `None`,
/// and a repeated connection reports
/// [`ConnectionStatus::AlreadyConnected`](crate::domain::ConnectionStatus).
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// No rolodex directory was found.
    #[error("Not a rolodex directory (or any of the parent directories). Run 'rolodex init' first")]
    NotInitialized,

    /// Profile id is not part of the network.
    #[error("Profile not found: {0}")]
    ProfileNotFound(ProfileId),

    /// A profile cannot be connected to itself.
    #[error("Profile {0} cannot be connected to itself")]
    SelfConnection(ProfileId),

    /// A profile with this id is already registered.
    #[error("Duplicate profile id: {0}")]
    DuplicateProfile(ProfileId),

    /// Every profile id has been handed out.
    #[error("No profile ids left: id {} is already taken", u32::MAX)]
    IdsExhausted,

    /// No profile carries the given name.
    #[error("No profile named '{0}'")]
    NameNotFound(String),

    /// Several profiles carry the given name.
    #[error("Name '{name}' is shared by {count} profiles, use '#<id>' instead")]
    AmbiguousName {
        /// The name that was looked up
        name: String,
        /// How many profiles carry it
        count: usize,
    },
}

/// A specialized Result type for rolodex operations.
pub type Result<T> = std::result::Result<T, Error>;
