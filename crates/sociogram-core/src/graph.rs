use crate::{Actor, ActorId};
use petgraph::graph::{NodeIndex, UnGraph};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// An undirected social graph of actors and ties.
///
/// Uses petgraph's undirected graph internally for efficient traversal.
/// Maintains an index for O(1) actor lookup. The graph is simple: duplicate
/// ties collapse into one and self-ties are ignored.
///
/// # Example
///
/// ```rust
/// use sociogram_core::SocialGraph;
///
/// let mut graph = SocialGraph::new();
/// graph.add_tie(0, 1);
/// graph.add_tie(1, 2);
///
/// assert_eq!(graph.actor_count(), 3);
/// assert_eq!(graph.tie_count(), 2);
/// assert_eq!(graph.degree(1), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SocialGraph {
    /// The underlying undirected graph.
    graph: UnGraph<Actor, ()>,

    /// Map from actor ID to node index.
    actor_index: HashMap<ActorId, NodeIndex>,
}

impl SocialGraph {
    /// Create an empty social graph.
    pub fn new() -> Self {
        Self {
            graph: UnGraph::default(),
            actor_index: HashMap::new(),
        }
    }

    /// Create a social graph with estimated capacity.
    pub fn with_capacity(actors: usize, ties: usize) -> Self {
        Self {
            graph: UnGraph::with_capacity(actors, ties),
            actor_index: HashMap::with_capacity(actors),
        }
    }

    /// Insert an actor, replacing the payload if the ID is already present.
    pub fn upsert_actor(&mut self, actor: Actor) -> NodeIndex {
        if let Some(&idx) = self.actor_index.get(&actor.id) {
            self.graph[idx] = actor;
            idx
        } else {
            let id = actor.id;
            let idx = self.graph.add_node(actor);
            self.actor_index.insert(id, idx);
            idx
        }
    }

    /// Add an undirected tie between two actors, creating them if needed.
    ///
    /// Self-ties are ignored, and adding an existing tie is a no-op, so the
    /// graph stays simple.
    pub fn add_tie(&mut self, a: impl Into<ActorId>, b: impl Into<ActorId>) {
        let a = a.into();
        let b = b.into();
        if a == b {
            return;
        }

        let a_idx = self.get_or_create_actor(a);
        let b_idx = self.get_or_create_actor(b);
        self.graph.update_edge(a_idx, b_idx, ());
    }

    /// Get or create an actor node.
    fn get_or_create_actor(&mut self, id: ActorId) -> NodeIndex {
        if let Some(&idx) = self.actor_index.get(&id) {
            return idx;
        }

        let idx = self.graph.add_node(Actor::new(id));
        self.actor_index.insert(id, idx);
        idx
    }

    /// Get an actor by ID.
    pub fn get_actor(&self, id: impl Into<ActorId>) -> Option<&Actor> {
        let id = id.into();
        self.actor_index.get(&id).map(|&idx| &self.graph[idx])
    }

    /// Get node index for an actor.
    pub fn get_node_index(&self, id: impl Into<ActorId>) -> Option<NodeIndex> {
        self.actor_index.get(&id.into()).copied()
    }

    /// Check whether a tie exists between two actors. O(d).
    pub fn has_tie(&self, a: impl Into<ActorId>, b: impl Into<ActorId>) -> bool {
        let Some(a_idx) = self.get_node_index(a) else {
            return false;
        };
        let Some(b_idx) = self.get_node_index(b) else {
            return false;
        };

        self.graph.find_edge(a_idx, b_idx).is_some()
    }

    /// Number of ties incident to an actor. O(d).
    pub fn degree(&self, id: impl Into<ActorId>) -> usize {
        match self.get_node_index(id) {
            Some(idx) => self.graph.neighbors(idx).count(),
            None => 0,
        }
    }

    /// Get neighbor IDs of an actor. O(d).
    pub fn neighbor_ids(&self, id: impl Into<ActorId>) -> Vec<ActorId> {
        match self.get_node_index(id) {
            Some(idx) => self.graph.neighbors(idx).map(|n| self.graph[n].id).collect(),
            None => vec![],
        }
    }

    /// Number of actors.
    pub fn actor_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of ties.
    pub fn tie_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Iterate over all actors in insertion order.
    pub fn actors(&self) -> impl Iterator<Item = &Actor> {
        self.graph.node_weights()
    }

    /// Iterate over all ties as (source, target) ID pairs, in insertion order.
    pub fn ties(&self) -> impl Iterator<Item = (ActorId, ActorId)> + '_ {
        self.graph.edge_indices().filter_map(|e| {
            self.graph
                .edge_endpoints(e)
                .map(|(a, b)| (self.graph[a].id, self.graph[b].id))
        })
    }

    /// Get the underlying petgraph for advanced operations.
    pub fn as_petgraph(&self) -> &UnGraph<Actor, ()> {
        &self.graph
    }
}

/// Statistics about a social graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialGraphStats {
    /// Number of actors.
    pub actor_count: usize,
    /// Number of ties.
    pub tie_count: usize,
    /// Average degree (ties per actor, each tie counted at both ends).
    pub avg_degree: f64,
}

impl SocialGraph {
    /// Compute statistics about the graph.
    pub fn stats(&self) -> SocialGraphStats {
        let actor_count = self.actor_count();
        let tie_count = self.tie_count();

        let avg_degree = if actor_count > 0 {
            2.0 * tie_count as f64 / actor_count as f64
        } else {
            0.0
        };

        SocialGraphStats {
            actor_count,
            tie_count,
            avg_degree,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_ties() {
        let mut graph = SocialGraph::new();

        graph.add_tie(0, 1);
        graph.add_tie(0, 2);
        graph.add_tie(1, 2);

        assert_eq!(graph.actor_count(), 3);
        assert_eq!(graph.tie_count(), 3);
    }

    #[test]
    fn test_ties_are_undirected() {
        let mut graph = SocialGraph::new();
        graph.add_tie(0, 1);

        assert!(graph.has_tie(0, 1));
        assert!(graph.has_tie(1, 0));
        assert_eq!(graph.degree(0), 1);
        assert_eq!(graph.degree(1), 1);
    }

    #[test]
    fn test_duplicate_ties_collapse() {
        let mut graph = SocialGraph::new();
        graph.add_tie(0, 1);
        graph.add_tie(0, 1);
        graph.add_tie(1, 0);

        assert_eq!(graph.tie_count(), 1);
        assert_eq!(graph.degree(0), 1);
    }

    #[test]
    fn test_self_ties_ignored() {
        let mut graph = SocialGraph::new();
        graph.add_tie(0, 0);

        assert_eq!(graph.actor_count(), 0);
        assert_eq!(graph.tie_count(), 0);
    }

    #[test]
    fn test_upsert_actor_keeps_ties() {
        let mut graph = SocialGraph::new();
        graph.add_tie(0, 1);
        graph.upsert_actor(Actor::new(0).with_label("Andre"));

        assert_eq!(graph.actor_count(), 2);
        assert_eq!(graph.get_actor(0).unwrap().label.as_deref(), Some("Andre"));
        assert!(graph.has_tie(0, 1));
    }

    #[test]
    fn test_neighbors() {
        let mut graph = SocialGraph::new();
        graph.add_tie(0, 1);
        graph.add_tie(0, 2);
        graph.add_tie(1, 3);

        let mut neighbors = graph.neighbor_ids(0);
        neighbors.sort();
        assert_eq!(neighbors, vec![ActorId(1), ActorId(2)]);
        assert_eq!(graph.neighbor_ids(9), vec![]);
    }

    #[test]
    fn test_ties_iteration_order() {
        let mut graph = SocialGraph::new();
        graph.add_tie(0, 1);
        graph.add_tie(1, 2);
        graph.add_tie(2, 0);

        let ties: Vec<_> = graph.ties().collect();
        assert_eq!(
            ties,
            vec![
                (ActorId(0), ActorId(1)),
                (ActorId(1), ActorId(2)),
                (ActorId(2), ActorId(0)),
            ]
        );
    }

    #[test]
    fn test_stats() {
        let mut graph = SocialGraph::new();
        graph.add_tie(0, 1);
        graph.add_tie(1, 2);

        let stats = graph.stats();
        assert_eq!(stats.actor_count, 3);
        assert_eq!(stats.tie_count, 2);
        assert!((stats.avg_degree - 4.0 / 3.0).abs() < 1e-9);
    }
}
