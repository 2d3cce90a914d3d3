//! Betweenness centrality: measuring brokerage and bridging.
//!
//! # Intuition
//!
//! Betweenness measures how often an actor lies on shortest paths between
//! other actors. High betweenness = broker, bridge, gatekeeper: the person
//! who connects otherwise-separate parts of the network.
//!
//! # Definition
//!
//! ```text
//! C_B(v) = Σ_{s≠v≠t} σ_st(v) / σ_st
//! ```
//!
//! Where:
//! - σ_st = number of shortest paths from s to t
//! - σ_st(v) = number of those paths passing through v
//!
//! # Brandes' Algorithm (2001)
//!
//! Naive computation is O(V³). Brandes showed O(VE) is possible:
//!
//! 1. Run BFS from each source s
//! 2. Track σ_sv (shortest path counts) during the forward pass
//! 3. Accumulate dependencies δ_s(v) during the backward pass:
//!
//! ```text
//! δ_s(v) = Σ_{w: v∈P_s(w)} (σ_sv/σ_sw) × (1 + δ_s(w))
//! ```
//!
//! Where P_s(w) is the set of predecessors of w on shortest paths from s.
//!
//! # Normalization
//!
//! Accumulating over every source visits each unordered pair twice, so raw
//! totals are halved. The normalized score divides by the number of pairs
//! excluding v:
//!
//! ```text
//! C_B_norm(v) = C_B(v) / [(n-1)(n-2)/2]
//! ```
//!
//! # References
//!
//! - Brandes (2001). "A faster algorithm for betweenness centrality"
//! - Freeman (1977). "A set of measures of centrality based on betweenness"

use crate::{ActorId, SocialGraph};
use petgraph::graph::NodeIndex;
use std::collections::{HashMap, VecDeque};

/// Configuration for betweenness centrality.
#[derive(Debug, Clone, Copy)]
pub struct BetweennessConfig {
    /// Normalize scores to [0, 1] range.
    pub normalized: bool,
}

impl Default for BetweennessConfig {
    fn default() -> Self {
        Self { normalized: true }
    }
}

/// Compute betweenness centrality using Brandes' algorithm.
///
/// # Complexity
///
/// - Time: O(VE)
/// - Space: O(V + E)
///
/// # Example
///
/// ```
/// use sociogram_core::{ActorId, SocialGraph};
/// use sociogram_core::algo::centrality::{betweenness_centrality, BetweennessConfig};
///
/// // Path: 0 -- 1 -- 2
/// let mut graph = SocialGraph::new();
/// graph.add_tie(0, 1);
/// graph.add_tie(1, 2);
///
/// let scores = betweenness_centrality(&graph, BetweennessConfig::default());
/// // Actor 1 is on the only path between 0 and 2
/// assert_eq!(scores[&ActorId(1)], 1.0);
/// assert_eq!(scores[&ActorId(0)], 0.0);
/// ```
pub fn betweenness_centrality(
    graph: &SocialGraph,
    config: BetweennessConfig,
) -> HashMap<ActorId, f64> {
    let g = graph.as_petgraph();
    let n = g.node_count();
    if n < 2 {
        return g.node_indices().map(|idx| (g[idx].id, 0.0)).collect();
    }

    let mut betweenness = vec![0.0_f64; n];

    // Run BFS from each source
    for s in g.node_indices() {
        let (sigma, predecessors, order) = bfs_shortest_paths(g, s);

        // Backward pass: accumulate dependencies
        let mut delta = vec![0.0_f64; n];

        // Process nodes in reverse BFS order (farthest first)
        for &w in order.iter().rev() {
            let w_idx = w.index();
            for &v in &predecessors[w_idx] {
                let v_idx = v.index();
                // δ_s(v) += (σ_sv / σ_sw) × (1 + δ_s(w))
                let coeff = sigma[v_idx] / sigma[w_idx];
                delta[v_idx] += coeff * (1.0 + delta[w_idx]);
            }
            if w != s {
                betweenness[w_idx] += delta[w_idx];
            }
        }
    }

    // Each unordered pair was counted from both endpoints
    for b in &mut betweenness {
        *b /= 2.0;
    }

    if config.normalized && n > 2 {
        let norm = ((n - 1) * (n - 2)) as f64 / 2.0;
        for b in &mut betweenness {
            *b /= norm;
        }
    }

    g.node_indices()
        .map(|idx| (g[idx].id, betweenness[idx.index()]))
        .collect()
}

/// BFS to find shortest paths from source.
///
/// Returns:
/// - sigma: σ_sv = number of shortest paths from s to v
/// - predecessors: P_s(v) = predecessors on shortest paths
/// - order: nodes in BFS order (for backward pass)
fn bfs_shortest_paths(
    g: &petgraph::graph::UnGraph<crate::Actor, ()>,
    source: NodeIndex,
) -> (Vec<f64>, Vec<Vec<NodeIndex>>, Vec<NodeIndex>) {
    let n = g.node_count();
    let mut sigma = vec![0.0_f64; n]; // number of shortest paths
    let mut dist = vec![-1_i64; n]; // distance from source (-1 = unvisited)
    let mut predecessors: Vec<Vec<NodeIndex>> = vec![Vec::new(); n];
    let mut order = Vec::with_capacity(n);

    sigma[source.index()] = 1.0;
    dist[source.index()] = 0;

    let mut queue = VecDeque::new();
    queue.push_back(source);

    while let Some(v) = queue.pop_front() {
        order.push(v);
        let v_dist = dist[v.index()];

        for w in g.neighbors(v) {
            let w_idx = w.index();

            // First time seeing w?
            if dist[w_idx] < 0 {
                dist[w_idx] = v_dist + 1;
                queue.push_back(w);
            }

            // Is this a shortest path to w?
            if dist[w_idx] == v_dist + 1 {
                sigma[w_idx] += sigma[v.index()];
                predecessors[w_idx].push(v);
            }
        }
    }

    (sigma, predecessors, order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::krackhardt_kite;

    fn unnormalized() -> BetweennessConfig {
        BetweennessConfig { normalized: false }
    }

    #[test]
    fn test_betweenness_path() {
        // Path: 0 -- 1 -- 2 -- 3
        let mut graph = SocialGraph::new();
        graph.add_tie(0, 1);
        graph.add_tie(1, 2);
        graph.add_tie(2, 3);

        let scores = betweenness_centrality(&graph, unnormalized());

        // Endpoints broker nothing
        assert_eq!(scores[&ActorId(0)], 0.0);
        assert_eq!(scores[&ActorId(3)], 0.0);
        // 1 is on paths (0,2), (0,3); 2 is on (0,3), (1,3)
        assert_eq!(scores[&ActorId(1)], 2.0);
        assert_eq!(scores[&ActorId(2)], 2.0);
    }

    #[test]
    fn test_betweenness_star() {
        // Star: every pair of leaves routes through the hub
        let mut graph = SocialGraph::new();
        for leaf in 1..=4 {
            graph.add_tie(0, leaf);
        }

        let scores = betweenness_centrality(&graph, BetweennessConfig::default());

        // Hub is on all C(4,2) = 6 of the 6 pairs excluding it
        assert!((scores[&ActorId(0)] - 1.0).abs() < 1e-9);
        for leaf in 1..=4 {
            assert_eq!(scores[&ActorId(leaf)], 0.0);
        }
    }

    #[test]
    fn test_betweenness_split_paths() {
        // Diamond: 0 -- {1, 2} -- 3. Both middle actors carry half of (0,3).
        let mut graph = SocialGraph::new();
        graph.add_tie(0, 1);
        graph.add_tie(0, 2);
        graph.add_tie(1, 3);
        graph.add_tie(2, 3);

        let scores = betweenness_centrality(&graph, unnormalized());
        assert!((scores[&ActorId(1)] - 0.5).abs() < 1e-9);
        assert!((scores[&ActorId(2)] - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_betweenness_kite_known_values() {
        let graph = krackhardt_kite();
        let scores = betweenness_centrality(&graph, BetweennessConfig::default());

        // Heather (7) is the kite's gatekeeper: every path to the tail
        // crosses her. 14 of the 36 pairs excluding her.
        let expected = [
            (0, 5.0 / 216.0),
            (1, 5.0 / 216.0),
            (2, 0.0),
            (3, 11.0 / 108.0),
            (4, 0.0),
            (5, 25.0 / 108.0),
            (6, 25.0 / 108.0),
            (7, 14.0 / 36.0),
            (8, 8.0 / 36.0),
            (9, 0.0),
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
    fn test_betweenness_in_unit_range() {
        let graph = krackhardt_kite();
        let scores = betweenness_centrality(&graph, BetweennessConfig::default());
        for (id, score) in &scores {
            assert!(
                (0.0..=1.0).contains(score),
                "actor {id} out of range: {score}"
            );
        }
    }

    #[test]
    fn test_empty_graph() {
        let graph = SocialGraph::new();
        assert!(betweenness_centrality(&graph, BetweennessConfig::default()).is_empty());
    }
}
