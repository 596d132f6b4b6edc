//! In-memory profile network using HashMap and petgraph.
//!
//! All data is held in RAM. A network can be loaded from and saved to a
//! JSONL snapshot via [`load_from_jsonl`] and [`save_to_jsonl`].
//!
//! # Architecture
//!
//! - `HashMap<ProfileId, Profile>` for O(1) profile lookups
//! - `petgraph::DiGraph` for the connection graph
//! - `HashMap<ProfileId, NodeIndex>` for mapping profiles to graph nodes
//!
//! ## Edge Direction Convention
//!
//! An edge `A -> B` means "B is in A's connection list". The low-level
//! [`Network::add_connection`] inserts a single edge; [`Network::connect`]
//! inserts both directions, which is how the relation stays symmetric.
//!
//! Connection lists are ordered by insertion. petgraph hands out increasing
//! `EdgeIndex` values and the network never removes edges, so sorting a
//! node's outgoing edges by index recovers that order.
//!
//! # Thread Safety
//!
//! `Network` is a plain single-threaded structure. Sharing it between threads
//! would need one lock held across both `connect` and any traversal, since
//! the search reads connection lists that `connect` mutates.

mod describe;
mod jsonl;
mod overlap;
mod path;

use crate::domain::{ConnectionStatus, Education, Employment, Profile, ProfileId};
use crate::error::{Error, Result};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use std::collections::HashMap;

// Re-export public API
pub use describe::ProfileSummary;
pub use jsonl::{LoadWarning, ProfileRecord, load_from_jsonl, save_to_jsonl};
pub use path::{IncludingStart, ProfilePredicate};

/// A graph of professional profiles.
///
/// # Example
///
/// ```
/// use rolodex::network::Network;
///
/// let mut network = Network::new();
/// let sara = network.create_profile("Sara Sood", "Professor", "Northwestern").unwrap();
/// let peter = network.create_profile("Peter Zhong", "Intern", "Teladoc Health").unwrap();
/// network.connect(sara, peter).unwrap();
///
/// let path = network.shortest_path(sara, peter).unwrap().unwrap();
/// assert_eq!(path.distance, 1);
/// assert_eq!(path.names, ["Sara Sood", "Peter Zhong"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Network {
    /// Profiles indexed by ID for O(1) lookups
    profiles: HashMap<ProfileId, Profile>,

    /// Connection graph.
    ///
    /// Nodes contain `ProfileId` values. Edge direction: owner -> connection.
    graph: DiGraph<ProfileId, ()>,

    /// Mapping from ProfileId to graph NodeIndex.
    ///
    /// Every profile in `self.profiles` has an entry here.
    node_map: HashMap<ProfileId, NodeIndex>,

    /// Next id handed out by `create_profile`.
    ///
    /// Wider than `ProfileId` so that a profile at `u32::MAX` leaves it past
    /// the last valid id instead of wrapping back onto it.
    next_id: u64,
}

impl Network {
    /// Create an empty network
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a standalone profile and return its id.
    ///
    /// Any of the fields may be empty.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IdsExhausted`] once an id of `u32::MAX` has been
    /// registered, since every later id would collide.
    pub fn create_profile(
        &mut self,
        name: impl Into<String>,
        title: impl Into<String>,
        company: impl Into<String>,
    ) -> Result<ProfileId> {
        let raw = u32::try_from(self.next_id).map_err(|_| Error::IdsExhausted)?;
        let id = ProfileId::new(raw);
        self.register(Profile::new(id, name, title, company));
        tracing::debug!(profile = %id, "Created profile");
        Ok(id)
    }

    /// Register a fully built profile under its own id.
    ///
    /// Used when restoring a snapshot. Later calls to
    /// [`create_profile`](Self::create_profile) continue after the highest
    /// id seen.
    pub fn insert_profile(&mut self, profile: Profile) -> Result<()> {
        if self.profiles.contains_key(&profile.id) {
            return Err(Error::DuplicateProfile(profile.id));
        }
        self.register(profile);
        Ok(())
    }

    fn register(&mut self, profile: Profile) {
        let id = profile.id;
        let node = self.graph.add_node(id);
        self.node_map.insert(id, node);
        self.profiles.insert(id, profile);
        self.next_id = self.next_id.max(u64::from(id.as_u32()) + 1);
    }

    /// Get a profile by id
    pub fn profile(&self, id: ProfileId) -> Option<&Profile> {
        self.profiles.get(&id)
    }

    fn get(&self, id: ProfileId) -> Result<&Profile> {
        self.profiles.get(&id).ok_or(Error::ProfileNotFound(id))
    }

    fn get_mut(&mut self, id: ProfileId) -> Result<&mut Profile> {
        self.profiles.get_mut(&id).ok_or(Error::ProfileNotFound(id))
    }

    fn node(&self, id: ProfileId) -> Result<NodeIndex> {
        self.node_map
            .get(&id)
            .copied()
            .ok_or(Error::ProfileNotFound(id))
    }

    /// All profiles, ordered by id
    pub fn profiles(&self) -> Vec<&Profile> {
        let mut profiles: Vec<&Profile> = self.profiles.values().collect();
        profiles.sort_by_key(|p| p.id);
        profiles
    }

    /// All profiles with exactly this name, ordered by id.
    pub fn find_by_name(&self, name: &str) -> Vec<&Profile> {
        let mut matches: Vec<&Profile> =
            self.profiles.values().filter(|p| p.name == name).collect();
        matches.sort_by_key(|p| p.id);
        matches
    }

    /// Number of profiles
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Whether the network has no profiles
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Total number of one-directional connection entries.
    ///
    /// A symmetric connection made with [`connect`](Self::connect) counts twice.
    pub fn connection_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Append a job to a profile's employment history
    pub fn add_employment(&mut self, id: ProfileId, job: Employment) -> Result<()> {
        self.get_mut(id)?.employment_history.push(job);
        Ok(())
    }

    /// Append an entry to a profile's education
    pub fn add_education(&mut self, id: ProfileId, entry: Education) -> Result<()> {
        self.get_mut(id)?.education.push(entry);
        Ok(())
    }

    /// Outgoing neighbors of a node in insertion order.
    ///
    /// Collects and sorts the node's edges on every call, O(d log d).
    fn ordered_neighbors(&self, node: NodeIndex) -> Vec<NodeIndex> {
        let mut edges: Vec<_> = self.graph.edges(node).collect();
        edges.sort_by_key(|edge| edge.id());
        edges.into_iter().map(|edge| edge.target()).collect()
    }

    /// The connection list of a profile, in the order connections were added.
    pub fn connections(&self, id: ProfileId) -> Result<Vec<ProfileId>> {
        let node = self.node(id)?;
        Ok(self
            .ordered_neighbors(node)
            .into_iter()
            .map(|n| self.graph[n])
            .collect())
    }

    /// Whether `to` appears in `from`'s connection list.
    ///
    /// This is directional; after [`connect`](Self::connect) it holds both ways.
    pub fn is_connected(&self, from: ProfileId, to: ProfileId) -> bool {
        match (self.node_map.get(&from), self.node_map.get(&to)) {
            (Some(&a), Some(&b)) => self.graph.contains_edge(a, b),
            _ => false,
        }
    }

    /// Add `to` to `from`'s connection list, unless it is already there.
    ///
    /// Only one direction is written. Use [`connect`](Self::connect) for a
    /// symmetric connection.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ProfileNotFound`] for an unknown id and
    /// [`Error::SelfConnection`] when `from == to`.
    pub fn add_connection(&mut self, from: ProfileId, to: ProfileId) -> Result<ConnectionStatus> {
        let from_node = self.node(from)?;
        let to_node = self.node(to)?;
        if from == to {
            return Err(Error::SelfConnection(from));
        }

        if self.graph.contains_edge(from_node, to_node) {
            return Ok(ConnectionStatus::AlreadyConnected);
        }

        self.graph.add_edge(from_node, to_node, ());
        Ok(ConnectionStatus::Connected)
    }

    /// Connect two profiles in both directions.
    ///
    /// The check happens once, up front: if either direction already exists
    /// nothing is written and `AlreadyConnected` is returned. A one-sided
    /// connection left by [`add_connection`](Self::add_connection) is not
    /// completed.
    pub fn connect(&mut self, a: ProfileId, b: ProfileId) -> Result<ConnectionStatus> {
        let a_node = self.node(a)?;
        let b_node = self.node(b)?;
        if a == b {
            return Err(Error::SelfConnection(a));
        }

        if self.graph.contains_edge(a_node, b_node) || self.graph.contains_edge(b_node, a_node) {
            tracing::debug!(from = %a, to = %b, "Profiles already connected");
            return Ok(ConnectionStatus::AlreadyConnected);
        }

        self.graph.add_edge(a_node, b_node, ());
        self.graph.add_edge(b_node, a_node, ());
        tracing::debug!(from = %a, to = %b, "Connected profiles");
        Ok(ConnectionStatus::Connected)
    }

    /// Render the human-readable summary of a profile.
    ///
    /// See [`ProfileSummary`] for the exact layout.
    pub fn describe(&self, id: ProfileId) -> Result<String> {
        Ok(self.summary(id)?.to_string())
    }

    /// A displayable summary of a profile and its connections.
    pub fn summary(&self, id: ProfileId) -> Result<ProfileSummary<'_>> {
        let profile = self.get(id)?;
        let connections = self
            .ordered_neighbors(self.node(id)?)
            .into_iter()
            .map(|n| &self.profiles[&self.graph[n]])
            .collect();
        Ok(ProfileSummary::new(profile, connections))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_profiles() -> (Network, ProfileId, ProfileId) {
        let mut network = Network::new();
        let a = network.create_profile("Ada", "Engineer", "Acme").unwrap();
        let b = network.create_profile("Brook", "Designer", "Initech").unwrap();
        (network, a, b)
    }

    #[test]
    fn test_create_profile_assigns_sequential_ids() {
        let mut network = Network::new();
        let first = network.create_profile("", "", "").unwrap();
        let second = network.create_profile("Bob", "Northwestern", "").unwrap();

        assert_eq!(first, ProfileId::new(0));
        assert_eq!(second, ProfileId::new(1));
        assert_eq!(network.len(), 2);
        assert!(network.connections(first).unwrap().is_empty());
        assert_eq!(network.profile(second).unwrap().title, "Northwestern");
    }

    #[test]
    fn test_add_connection_is_one_directional() {
        let (mut network, a, b) = two_profiles();

        let status = network.add_connection(a, b).unwrap();
        assert_eq!(status, ConnectionStatus::Connected);
        assert!(network.is_connected(a, b));
        assert!(!network.is_connected(b, a));
    }

    #[test]
    fn test_add_connection_reports_duplicate() {
        let (mut network, a, b) = two_profiles();

        assert!(network.add_connection(a, b).unwrap().is_new());
        let again = network.add_connection(a, b).unwrap();
        assert_eq!(again, ConnectionStatus::AlreadyConnected);
        assert_eq!(again.to_string(), "already connected");
        assert_eq!(network.connections(a).unwrap(), vec![b]);
    }

    #[test]
    fn test_self_connection_rejected() {
        let (mut network, a, _) = two_profiles();

        assert!(matches!(
            network.add_connection(a, a),
            Err(Error::SelfConnection(id)) if id == a
        ));
        assert!(matches!(network.connect(a, a), Err(Error::SelfConnection(_))));
        assert!(network.connections(a).unwrap().is_empty());
    }

    #[test]
    fn test_unknown_profile_rejected() {
        let (mut network, a, _) = two_profiles();
        let ghost = ProfileId::new(99);

        assert!(matches!(
            network.connect(a, ghost),
            Err(Error::ProfileNotFound(id)) if id == ghost
        ));
        assert!(matches!(
            network.add_employment(ghost, Employment::new("r", "c", 1, 2)),
            Err(Error::ProfileNotFound(_))
        ));
        assert!(network.connections(ghost).is_err());
        assert!(!network.is_connected(a, ghost));
    }

    #[test]
    fn test_connect_does_not_complete_one_sided_connection() {
        let (mut network, a, b) = two_profiles();
        network.add_connection(b, a).unwrap();

        let status = network.connect(a, b).unwrap();
        assert_eq!(status, ConnectionStatus::AlreadyConnected);
        assert!(!network.is_connected(a, b));
        assert!(network.is_connected(b, a));
    }

    #[test]
    fn test_connections_keep_insertion_order() {
        let mut network = Network::new();
        let hub = network.create_profile("Hub", "", "").unwrap();
        let spokes: Vec<ProfileId> = (0..5)
            .map(|i| network.create_profile(format!("Spoke {i}"), "", "").unwrap())
            .collect();

        // Connect in a shuffled order, some from the spoke side
        for &i in &[3, 0, 4, 1, 2] {
            if i % 2 == 0 {
                network.connect(hub, spokes[i]).unwrap();
            } else {
                network.connect(spokes[i], hub).unwrap();
            }
        }

        let expected: Vec<ProfileId> = [3, 0, 4, 1, 2].iter().map(|&i| spokes[i]).collect();
        assert_eq!(network.connections(hub).unwrap(), expected);
    }

    #[test]
    fn test_insert_profile_moves_next_id_forward() {
        let mut network = Network::new();
        network
            .insert_profile(Profile::new(ProfileId::new(10), "Ten", "", ""))
            .unwrap();

        let next = network.create_profile("Eleven", "", "").unwrap();
        assert_eq!(next, ProfileId::new(11));

        let duplicate = network.insert_profile(Profile::new(ProfileId::new(10), "Again", "", ""));
        assert!(matches!(duplicate, Err(Error::DuplicateProfile(_))));
        assert_eq!(network.profile(ProfileId::new(10)).unwrap().name, "Ten");
    }

    #[test]
    fn test_create_profile_after_max_id_is_exhausted() {
        let mut network = Network::new();
        let max = ProfileId::new(u32::MAX);
        network
            .insert_profile(Profile::new(max, "Max", "", ""))
            .unwrap();

        let result = network.create_profile("Other", "", "");
        assert!(matches!(result, Err(Error::IdsExhausted)));
        assert_eq!(network.len(), 1);
        assert_eq!(network.profile(max).unwrap().name, "Max");
        assert!(network.find_by_name("Other").is_empty());
    }

    #[test]
    fn test_lower_ids_can_still_be_inserted_after_max() {
        let mut network = Network::new();
        network
            .insert_profile(Profile::new(ProfileId::new(u32::MAX), "Max", "", ""))
            .unwrap();
        network
            .insert_profile(Profile::new(ProfileId::new(3), "Three", "", ""))
            .unwrap();

        assert_eq!(network.len(), 2);
        assert!(matches!(
            network.create_profile("Other", "", ""),
            Err(Error::IdsExhausted)
        ));
    }

    #[test]
    fn test_find_by_name_returns_all_matches_in_id_order() {
        let mut network = Network::new();
        let first = network.create_profile("Sam", "A", "").unwrap();
        network.create_profile("Alex", "", "").unwrap();
        let second = network.create_profile("Sam", "B", "").unwrap();

        let found: Vec<ProfileId> = network.find_by_name("Sam").iter().map(|p| p.id).collect();
        assert_eq!(found, vec![first, second]);
        assert!(network.find_by_name("sam").is_empty());
    }

    #[test]
    fn test_connection_count_counts_both_directions() {
        let (mut network, a, b) = two_profiles();
        network.connect(a, b).unwrap();
        assert_eq!(network.connection_count(), 2);
    }
}
