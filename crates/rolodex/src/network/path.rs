//! Shortest-path search over the connection graph.
//!
//! Both searches are breadth-first over an unweighted graph. Neighbors are
//! expanded in connection-list order, so among equally short paths the one
//! discovered first wins. Each profile is enqueued at most once, at its
//! minimum distance. Parent pointers are kept instead of a path per queue
//! entry; the reconstructed path is the same one.
//!
//! Expanding a profile sorts its outgoing edges to recover connection order,
//! so a search costs O(V + E log d) for maximum connection count `d` rather
//! than O(V + E).

use super::Network;
use crate::domain::{Profile, ProfileId, ProfilePath};
use crate::error::Result;
use petgraph::graph::NodeIndex;
use std::collections::hash_map::Entry;
use std::collections::{HashMap, VecDeque};

/// Success condition for [`Network::shortest_path_to_someone_who`].
///
/// Implemented for every `Fn(&Profile) -> bool` closure. The starting
/// profile is skipped unless [`includes_start`](Self::includes_start)
/// returns `true`.
pub trait ProfilePredicate {
    /// Whether `profile` ends the search.
    fn matches(&self, profile: &Profile) -> bool;

    /// Whether the starting profile itself may match.
    fn includes_start(&self) -> bool {
        false
    }
}

impl<F> ProfilePredicate for F
where
    F: Fn(&Profile) -> bool,
{
    fn matches(&self, profile: &Profile) -> bool {
        self(profile)
    }
}

/// Wraps a predicate so that the starting profile can also match.
///
/// ```
/// use rolodex::network::{IncludingStart, Network};
///
/// let mut network = Network::new();
/// let sara = network.create_profile("Sara Sood", "Professor", "Northwestern").unwrap();
///
/// let at_northwestern = |p: &rolodex::domain::Profile| p.company == "Northwestern";
/// assert!(network.shortest_path_to_someone_who(sara, at_northwestern).unwrap().is_none());
///
/// let path = network
///     .shortest_path_to_someone_who(sara, IncludingStart(at_northwestern))
///     .unwrap()
///     .unwrap();
/// assert_eq!(path.distance, 0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct IncludingStart<P>(pub P);

impl<P: ProfilePredicate> ProfilePredicate for IncludingStart<P> {
    fn matches(&self, profile: &Profile) -> bool {
        self.0.matches(profile)
    }

    fn includes_start(&self) -> bool {
        true
    }
}

impl Network {
    /// Shortest path from `from` to `to`, counted in connections.
    ///
    /// The target is matched by id, so two profiles sharing a name are
    /// never confused. `shortest_path(a, a)` is a zero-length path.
    ///
    /// Returns `Ok(None)` when `to` is unreachable.
    pub fn shortest_path(&self, from: ProfileId, to: ProfileId) -> Result<Option<ProfilePath>> {
        self.node(to)?;
        self.breadth_first(from, &IncludingStart(|p: &Profile| p.id == to))
    }

    /// Shortest path from `from` to the nearest profile matching `predicate`.
    ///
    /// Ties at the same distance go to the profile discovered first. The
    /// starting profile never matches unless the predicate opts in, see
    /// [`IncludingStart`].
    ///
    /// Returns `Ok(None)` when no reachable profile matches.
    pub fn shortest_path_to_someone_who<P>(
        &self,
        from: ProfileId,
        predicate: P,
    ) -> Result<Option<ProfilePath>>
    where
        P: ProfilePredicate,
    {
        self.breadth_first(from, &predicate)
    }

    fn breadth_first<P>(&self, from: ProfileId, predicate: &P) -> Result<Option<ProfilePath>>
    where
        P: ProfilePredicate + ?Sized,
    {
        let start = self.node(from)?;

        // node -> parent; the start node is its own parent
        let mut parents: HashMap<NodeIndex, NodeIndex> = HashMap::new();
        let mut queue: VecDeque<(NodeIndex, usize)> = VecDeque::new();

        parents.insert(start, start);
        queue.push_back((start, 0));

        while let Some((current, distance)) = queue.pop_front() {
            let profile = &self.profiles[&self.graph[current]];
            if (distance > 0 || predicate.includes_start()) && predicate.matches(profile) {
                tracing::debug!(
                    from = %from,
                    to = %profile.id,
                    distance,
                    visited = parents.len(),
                    "Path found"
                );
                return Ok(Some(self.reconstruct_path(&parents, start, current, distance)));
            }

            for next in self.ordered_neighbors(current) {
                if let Entry::Vacant(entry) = parents.entry(next) {
                    entry.insert(current);
                    queue.push_back((next, distance + 1));
                }
            }
        }

        tracing::debug!(from = %from, visited = parents.len(), "No path found");
        Ok(None)
    }

    /// Walk parent pointers from `node` back to `start`.
    fn reconstruct_path(
        &self,
        parents: &HashMap<NodeIndex, NodeIndex>,
        start: NodeIndex,
        node: NodeIndex,
        distance: usize,
    ) -> ProfilePath {
        let mut nodes = Vec::with_capacity(distance + 1);
        let mut current = node;
        nodes.push(current);
        while current != start {
            current = parents[&current];
            nodes.push(current);
        }
        nodes.reverse();

        let profiles: Vec<ProfileId> = nodes.iter().map(|&n| self.graph[n]).collect();
        let names = profiles
            .iter()
            .map(|id| self.profiles[id].name.clone())
            .collect();

        ProfilePath {
            distance,
            profiles,
            names,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    /// a - b - d and a - c - d: two shortest routes to d.
    fn diamond() -> (Network, [ProfileId; 4]) {
        let mut network = Network::new();
        let a = network.create_profile("a", "", "").unwrap();
        let b = network.create_profile("b", "", "").unwrap();
        let c = network.create_profile("c", "", "Target Co").unwrap();
        let d = network.create_profile("d", "", "Target Co").unwrap();
        network.connect(a, b).unwrap();
        network.connect(a, c).unwrap();
        network.connect(b, d).unwrap();
        network.connect(c, d).unwrap();
        (network, [a, b, c, d])
    }

    #[test]
    fn test_path_to_self_is_zero_length() {
        let (network, [a, ..]) = diamond();

        let path = network.shortest_path(a, a).unwrap().unwrap();
        assert_eq!(path.distance, 0);
        assert_eq!(path.names, vec!["a"]);
        assert_eq!(path.profiles, vec![a]);
    }

    #[test]
    fn test_tie_broken_by_connection_order() {
        let (network, [a, b, _, d]) = diamond();

        let path = network.shortest_path(a, d).unwrap().unwrap();
        assert_eq!(path.distance, 2);
        assert_eq!(path.profiles, vec![a, b, d]);
        assert_eq!(path.profiles.last(), Some(&d));
    }

    #[test]
    fn test_predicate_skips_start_by_default() {
        let (network, [_, _, c, d]) = diamond();

        let path = network
            .shortest_path_to_someone_who(d, |p: &Profile| p.company == "Target Co")
            .unwrap()
            .unwrap();
        // d matches too, but the start is excluded; c is one hop away
        assert_eq!(path.profiles, vec![d, c]);
    }

    #[test]
    fn test_including_start_matches_immediately() {
        let (network, [_, _, _, d]) = diamond();

        let path = network
            .shortest_path_to_someone_who(d, IncludingStart(|p: &Profile| p.company == "Target Co"))
            .unwrap()
            .unwrap();
        assert_eq!(path.distance, 0);
        assert_eq!(path.profiles, vec![d]);
    }

    #[test]
    fn test_always_false_predicate_finds_nothing() {
        let (network, [a, ..]) = diamond();

        let result = network
            .shortest_path_to_someone_who(a, |_: &Profile| false)
            .unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_duplicate_names_are_not_confused() {
        let mut network = Network::new();
        let start = network.create_profile("Start", "", "").unwrap();
        let near_twin = network.create_profile("Twin", "", "").unwrap();
        let far_twin = network.create_profile("Twin", "", "").unwrap();
        let middle = network.create_profile("Middle", "", "").unwrap();
        network.connect(start, near_twin).unwrap();
        network.connect(start, middle).unwrap();
        network.connect(middle, far_twin).unwrap();

        let path = network.shortest_path(start, far_twin).unwrap().unwrap();
        assert_eq!(path.distance, 2);
        assert_eq!(path.profiles, vec![start, middle, far_twin]);
    }

    #[test]
    fn test_one_sided_connection_is_followed_only_forward() {
        let mut network = Network::new();
        let a = network.create_profile("a", "", "").unwrap();
        let b = network.create_profile("b", "", "").unwrap();
        network.add_connection(a, b).unwrap();

        assert_eq!(network.shortest_path(a, b).unwrap().unwrap().distance, 1);
        assert!(network.shortest_path(b, a).unwrap().is_none());
    }

    #[test]
    fn test_unknown_endpoints_are_errors() {
        let (network, [a, ..]) = diamond();
        let ghost = ProfileId::new(100);

        assert!(matches!(network.shortest_path(a, ghost), Err(Error::ProfileNotFound(_))));
        assert!(matches!(network.shortest_path(ghost, a), Err(Error::ProfileNotFound(_))));
        assert!(matches!(
            network.shortest_path_to_someone_who(ghost, |_: &Profile| true),
            Err(Error::ProfileNotFound(_))
        ));
    }
}
