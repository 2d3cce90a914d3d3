//! Degree centrality: the simplest centrality measure.
//!
//! Counts direct ties. In a social network it measures "popularity" - how
//! many contacts an actor has - while ignoring everything beyond the
//! immediate neighborhood.
//!
//! # Normalization
//!
//! Raw degree depends on graph size. Normalized degree:
//!
//! ```text
//! C_D(v) = deg(v) / (n - 1)
//! ```
//!
//! Where n is the number of actors. This gives values in [0, 1], with 1
//! meaning "tied to everyone".

use crate::{ActorId, SocialGraph};
use std::collections::HashMap;

/// Compute normalized degree centrality for all actors.
///
/// # Example
///
/// ```
/// use sociogram_core::SocialGraph;
/// use sociogram_core::algo::centrality::degree_centrality;
/// use sociogram_core::ActorId;
///
/// let mut graph = SocialGraph::new();
/// graph.add_tie(0, 1);
/// graph.add_tie(0, 2);
///
/// let scores = degree_centrality(&graph);
/// assert_eq!(scores[&ActorId(0)], 1.0); // tied to both others
/// assert_eq!(scores[&ActorId(1)], 0.5);
/// ```
pub fn degree_centrality(graph: &SocialGraph) -> HashMap<ActorId, f64> {
    let g = graph.as_petgraph();
    let n = g.node_count();
    if n == 0 {
        return HashMap::new();
    }

    let norm_factor = if n > 1 { (n - 1) as f64 } else { 1.0 };
    let mut result = HashMap::with_capacity(n);

    for idx in g.node_indices() {
        let deg = g.neighbors(idx).count();
        result.insert(g[idx].id, deg as f64 / norm_factor);
    }

    result
}
