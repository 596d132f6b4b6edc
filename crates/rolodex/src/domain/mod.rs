//! Domain types for the professional network.
//!
//! This module contains the core domain types: profiles, their employment
//! and education history, and the results returned by graph queries.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier for a profile within a network.
///
/// Ids are assigned sequentially by the network and never reused, since
/// profiles cannot be removed. Once `u32::MAX` is taken the network refuses
/// to create further profiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileId(pub u32);

impl ProfileId {
    /// Create a new profile ID
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// The raw numeric value
    pub fn as_u32(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u32> for ProfileId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// A "LinkedIn-like" professional profile.
///
/// Connections are not stored here; they live in the
/// [`Network`](crate::network::Network) graph so that the profile never owns
/// references to its peers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Identifier assigned by the network
    pub id: ProfileId,

    /// Full name (may be empty)
    #[serde(default)]
    pub name: String,

    /// Current title (may be empty)
    #[serde(default)]
    pub title: String,

    /// Current company (may be empty)
    #[serde(default)]
    pub company: String,

    /// Jobs in the order they were added
    #[serde(default)]
    pub employment_history: Vec<Employment>,

    /// Education in the order it was added
    #[serde(default)]
    pub education: Vec<Education>,
}

impl Profile {
    /// Create a standalone profile with empty history.
    pub fn new(
        id: ProfileId,
        name: impl Into<String>,
        title: impl Into<String>,
        company: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            title: title.into(),
            company: company.into(),
            employment_history: Vec::new(),
            education: Vec::new(),
        }
    }
}

/// One job in a profile's employment history.
///
/// Year ranges are inclusive and are not validated: `start_year` may come
/// after `end_year`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employment {
    /// Role held at the company
    pub role: String,

    /// Company name, compared exactly
    pub company: String,

    /// First year in the role
    pub start_year: i32,

    /// Last year in the role
    pub end_year: i32,
}

impl Employment {
    /// Create a new employment entry
    pub fn new(
        role: impl Into<String>,
        company: impl Into<String>,
        start_year: i32,
        end_year: i32,
    ) -> Self {
        Self {
            role: role.into(),
            company: company.into(),
            start_year,
            end_year,
        }
    }

    /// Whether both jobs were at the same company during at least one
    /// common year. Sharing a boundary year counts.
    pub fn overlaps(&self, other: &Employment) -> bool {
        self.company == other.company
            && self.start_year <= other.end_year
            && other.start_year <= self.end_year
    }
}

/// One entry in a profile's education.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    /// Degree earned or pursued
    pub degree: String,

    /// School name
    pub school: String,

    /// First year of study
    pub start_year: i32,

    /// Last year of study
    pub end_year: i32,
}

impl Education {
    /// Create a new education entry
    pub fn new(
        degree: impl Into<String>,
        school: impl Into<String>,
        start_year: i32,
        end_year: i32,
    ) -> Self {
        Self {
            degree: degree.into(),
            school: school.into(),
            start_year,
            end_year,
        }
    }
}

/// Outcome of adding a connection.
///
/// A repeated connection is reported, not treated as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionStatus {
    /// The connection was added
    Connected,

    /// The connection already existed; nothing changed
    AlreadyConnected,
}

impl ConnectionStatus {
    /// Whether the call changed the graph
    pub fn is_new(self) -> bool {
        self == ConnectionStatus::Connected
    }
}

impl fmt::Display for ConnectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConnectionStatus::Connected => write!(f, "connected"),
            ConnectionStatus::AlreadyConnected => write!(f, "already connected"),
        }
    }
}

/// A shortest path found by breadth-first search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfilePath {
    /// Number of connections crossed
    pub distance: usize,

    /// Profiles along the path, both endpoints included
    pub profiles: Vec<ProfileId>,

    /// Names of the profiles along the path, parallel to `profiles`
    pub names: Vec<String>,
}
