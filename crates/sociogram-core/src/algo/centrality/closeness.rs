//! Closeness centrality: measuring proximity to all other actors.
//!
//! # Intuition
//!
//! Closeness measures how quickly information can spread from an actor.
//! High closeness = short average distance to everyone else. In a social
//! network: someone who can reach anyone in a few hops.
//!
//! # Definition
//!
//! Classic closeness (Bavelas 1950):
//!
//! ```text
//! C_C(v) = (n - 1) / Σ_{u≠v} d(v, u)
//! ```
//!
//! Where d(v, u) is the shortest path distance from v to u. The score is
//! the normalized inverse of the mean distance: 1.0 means directly tied to
//! every other actor.
//!
//! # Handling Disconnected Graphs
//!
//! If some actors are unreachable, the classic formula breaks (infinite
//! distance). The Wasserman-Faust variant sums only over the r actors
//! reachable from v and scales by the reachable fraction:
//!
//! ```text
//! C_WF(v) = (r - 1)/(n - 1) × (r - 1) / Σ d(v, u)
//! ```
//!
//! On a connected graph the two formulas agree exactly; on a disconnected
//! one the scaling keeps scores comparable across components and in [0, 1].
//!
//! # References
//!
//! - Bavelas (1950). "Communication patterns in task-oriented groups"
//! - Wasserman & Faust (1994). "Social Network Analysis", ch. 5

use crate::{ActorId, SocialGraph};
use petgraph::graph::NodeIndex;
use std::collections::{HashMap, VecDeque};

/// Configuration for closeness centrality.
#[derive(Debug, Clone, Copy)]
pub struct ClosenessConfig {
    /// Scale by the reachable fraction (Wasserman-Faust). Keeps scores in
    /// [0, 1] on disconnected graphs; no effect on connected ones.
    pub wf_scaled: bool,
}

impl Default for ClosenessConfig {
    fn default() -> Self {
        Self { wf_scaled: true }
    }
}

/// Compute closeness centrality for all actors.
///
/// # Complexity
///
/// - Time: O(VE) (BFS from each actor)
/// - Space: O(V)
///
/// # Example
///
/// ```
/// use sociogram_core::{ActorId, SocialGraph};
/// use sociogram_core::algo::centrality::{closeness_centrality, ClosenessConfig};
///
/// // Path: 0 -- 1 -- 2
/// let mut graph = SocialGraph::new();
/// graph.add_tie(0, 1);
/// graph.add_tie(1, 2);
///
/// let scores = closeness_centrality(&graph, ClosenessConfig::default());
/// assert_eq!(scores[&ActorId(1)], 1.0);       // distance 1 to both
/// assert_eq!(scores[&ActorId(0)], 2.0 / 3.0); // distances 1 and 2
/// ```
pub fn closeness_centrality(graph: &SocialGraph, config: ClosenessConfig) -> HashMap<ActorId, f64> {
    let g = graph.as_petgraph();
    let n = g.node_count();
    if n < 2 {
        return g.node_indices().map(|idx| (g[idx].id, 0.0)).collect();
    }

    let mut result = HashMap::with_capacity(n);

    for source in g.node_indices() {
        let distances = bfs_distances(g, source);

        let reachable: Vec<i64> = distances.iter().copied().filter(|&d| d > 0).collect();

        let closeness = if reachable.is_empty() {
            0.0
        } else {
            let total_dist: i64 = reachable.iter().sum();
            let mut c = reachable.len() as f64 / total_dist as f64;
            if config.wf_scaled {
                c *= reachable.len() as f64 / (n - 1) as f64;
            }
            c
        };

        result.insert(g[source].id, closeness);
    }

    result
}

/// BFS distances from source. -1 means unreachable, 0 means self.
fn bfs_distances(g: &petgraph::graph::UnGraph<crate::Actor, ()>, source: NodeIndex) -> Vec<i64> {
    let n = g.node_count();
    let mut dist = vec![-1_i64; n];
    dist[source.index()] = 0;

    let mut queue = VecDeque::new();
    queue.push_back(source);

    while let Some(v) = queue.pop_front() {
        let v_dist = dist[v.index()];

        for w in g.neighbors(v) {
            if dist[w.index()] < 0 {
                dist[w.index()] = v_dist + 1;
                queue.push_back(w);
            }
        }
    }

    dist
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::krackhardt_kite;

    #[test]
    fn test_closeness_star() {
        let mut graph = SocialGraph::new();
        for leaf in 1..=4 {
            graph.add_tie(0, leaf);
        }

        let scores = closeness_centrality(&graph, ClosenessConfig::default());

        // Hub reaches everyone in 1 hop; leaves need 2 hops to each other
        assert!((scores[&ActorId(0)] - 1.0).abs() < 1e-9);
        let leaf = scores[&ActorId(1)];
        assert!((leaf - 4.0 / 7.0).abs() < 1e-9, "leaf: {leaf}");
    }

    #[test]
    fn test_closeness_kite_known_values() {
        let graph = krackhardt_kite();
        let scores = closeness_centrality(&graph, ClosenessConfig::default());

        // Fernando (5) and Garth (6) are closest to everyone, the classic
        // kite result. Denominators are total BFS distance from each actor.
        let expected = [
            (0, 9.0 / 17.0),
            (1, 9.0 / 17.0),
            (2, 9.0 / 18.0),
            (3, 9.0 / 15.0),
            (4, 9.0 / 18.0),
            (5, 9.0 / 14.0),
            (6, 9.0 / 14.0),
            (7, 9.0 / 15.0),
            (8, 9.0 / 21.0),
            (9, 9.0 / 29.0),
        ];
        for (id, want) in expected {
            let got = scores[&ActorId(id)];
            assert!(
                (got - want).abs() < 1e-9,
                "actor {id}: got {got}, want {want}"
            );
        }
    }

    #[test]
    fn test_closeness_disconnected() {
        // Two components: 0 -- 1 and 2 -- 3 -- 4
        let mut graph = SocialGraph::new();
        graph.add_tie(0, 1);
        graph.add_tie(2, 3);
        graph.add_tie(3, 4);

        let scores = closeness_centrality(&graph, ClosenessConfig::default());

        // WF scaling: 0 reaches one actor at distance 1 out of n-1 = 4
        assert!((scores[&ActorId(0)] - 0.25).abs() < 1e-9);
        // 3 reaches two actors, both at distance 1
        assert!((scores[&ActorId(3)] - 0.5).abs() < 1e-9);

        for score in scores.values() {
            assert!((0.0..=1.0).contains(score));
        }
    }

    #[test]
    fn test_closeness_unscaled_matches_on_connected() {
        let graph = krackhardt_kite();
        let scaled = closeness_centrality(&graph, ClosenessConfig { wf_scaled: true });
        let unscaled = closeness_centrality(&graph, ClosenessConfig { wf_scaled: false });

        for (id, score) in &scaled {
            assert!((score - unscaled[id]).abs() < 1e-12);
        }
    }

    #[test]
    fn test_single_actor() {
        let mut graph = SocialGraph::new();
        graph.upsert_actor(crate::Actor::new(0));
        let scores = closeness_centrality(&graph, ClosenessConfig::default());
        assert_eq!(scores[&ActorId(0)], 0.0);
    }
}
