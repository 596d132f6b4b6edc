//! JSONL persistence for the profile network.
//!
//! Each line of a snapshot is one [`ProfileRecord`]: the profile's own
//! fields plus its connection list in insertion order.

use super::Network;
use crate::domain::{Profile, ProfileId};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, BufWriter};

/// One line of a JSONL snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileRecord {
    /// The profile itself
    #[serde(flatten)]
    pub profile: Profile,

    /// Ids in this profile's connection list, in insertion order
    #[serde(default)]
    pub connections: Vec<ProfileId>,
}

/// Warnings that can occur during JSONL file loading.
///
/// These are non-fatal: the load continues and the offending data is
/// skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadWarning {
    /// Line that couldn't be parsed as a profile record
    ///
    /// **Effect**: Line is skipped entirely.
    MalformedJson {
        /// 1-based line number in the file
        line_number: usize,
        /// Parser message
        error: String,
    },

    /// A second record reused an id already seen
    ///
    /// **Effect**: The later record is skipped, including its connections.
    DuplicateProfile {
        /// The reused id
        id: ProfileId,
        /// 1-based line number of the skipped record
        line_number: usize,
    },

    /// Connection references a profile that doesn't exist in the file
    ///
    /// **Effect**: The connection entry is skipped; both sides stay loaded.
    OrphanedConnection {
        /// Profile owning the connection list
        from: ProfileId,
        /// Missing profile
        to: ProfileId,
    },

    /// A profile lists itself as a connection
    ///
    /// **Effect**: The entry is skipped.
    SelfConnection {
        /// The offending profile
        id: ProfileId,
    },
}

/// Load a network from a JSONL file.
///
/// # Error Handling
///
/// - **Malformed JSON**: Skips the line and adds a warning
/// - **Duplicate ids**: Keeps the first record and adds a warning
/// - **Orphaned or self connections**: Skips the entry and adds a warning
///
/// Blank lines are ignored. Only IO failures are returned as errors.
///
/// # Returns
///
/// Returns a tuple of `(network, warnings)`.
pub async fn load_from_jsonl(path: &Path) -> Result<(Network, Vec<LoadWarning>)> {
    let file = File::open(path).await?;
    let mut lines = BufReader::new(file).lines();

    let mut warnings = Vec::new();
    let mut records = Vec::new();
    let mut line_number = 0;

    // First pass: parse records
    while let Some(line) = lines.next_line().await? {
        line_number += 1;
        if line.trim().is_empty() {
            continue;
        }

        match serde_json::from_str::<ProfileRecord>(&line) {
            Ok(record) => records.push((line_number, record)),
            Err(e) => warnings.push(LoadWarning::MalformedJson {
                line_number,
                error: e.to_string(),
            }),
        }
    }

    // Second pass: register profiles
    let mut network = Network::new();
    let mut accepted = Vec::with_capacity(records.len());
    let mut seen = HashSet::new();
    for (line_number, record) in records {
        let id = record.profile.id;
        if !seen.insert(id) {
            warnings.push(LoadWarning::DuplicateProfile { id, line_number });
            continue;
        }
        network.insert_profile(record.profile)?;
        accepted.push((id, record.connections));
    }

    // Third pass: rebuild connection lists in file order
    for (from, connections) in accepted {
        for to in connections {
            if from == to {
                warnings.push(LoadWarning::SelfConnection { id: from });
                continue;
            }
            if network.profile(to).is_none() {
                warnings.push(LoadWarning::OrphanedConnection { from, to });
                continue;
            }
            // A repeated entry in the same list is folded silently
            network.add_connection(from, to)?;
        }
    }

    tracing::debug!(
        path = %path.display(),
        profiles = network.len(),
        warnings = warnings.len(),
        "Loaded network"
    );

    Ok((network, warnings))
}

/// Save a network to a JSONL file with atomic writes.
///
/// Profiles are written in id order, one per line. The write goes to a
/// temporary file first, which is then renamed over `path`.
pub async fn save_to_jsonl(network: &Network, path: &Path) -> Result<()> {
    let temp_path = path.with_extension("tmp");

    let file = File::create(&temp_path).await.map_err(Error::Io)?;
    let mut writer = BufWriter::new(file);

    for profile in network.profiles() {
        let record = ProfileRecord {
            profile: profile.clone(),
            connections: network.connections(profile.id)?,
        };
        let json = serde_json::to_string(&record)?;

        writer.write_all(json.as_bytes()).await?;
        writer.write_all(b"\n").await?;
    }

    writer.flush().await?;

    tokio::fs::rename(&temp_path, path).await?;

    tracing::debug!(path = %path.display(), profiles = network.len(), "Saved network");
    Ok(())
}
