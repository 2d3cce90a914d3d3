//! Fixed social-network generators.
//!
//! Small benchmark graphs from the social-network-analysis literature,
//! constructed with fixed topology rather than parametrically.

use crate::{Actor, SocialGraph};

/// The 18 ties of the Krackhardt kite, using actor IDs 0-9.
const KRACKHARDT_KITE_TIES: [(u32, u32); 18] = [
    (0, 1),
    (0, 2),
    (0, 3),
    (0, 5),
    (1, 3),
    (1, 4),
    (1, 6),
    (2, 3),
    (2, 5),
    (3, 4),
    (3, 5),
    (3, 6),
    (4, 6),
    (5, 6),
    (5, 7),
    (6, 7),
    (7, 8),
    (8, 9),
];

/// Actor labels from Krackhardt's original study, indexed by ID.
const KRACKHARDT_KITE_LABELS: [&str; 10] = [
    "Andre",
    "Beverley",
    "Carol",
    "Diane",
    "Ed",
    "Fernando",
    "Garth",
    "Heather",
    "Ike",
    "Jane",
];

/// Build the canonical Krackhardt kite graph: 10 actors, 18 ties.
///
/// A standard benchmark from social network analysis (Krackhardt 1990),
/// shaped so that the three classic centrality notions disagree: Diane (3)
/// has the most ties, Fernando (5) and Garth (6) are closest to everyone,
/// and Heather (7) sits on every path to the tail of the kite.
///
/// # Example
///
/// ```rust
/// use sociogram_core::generators::krackhardt_kite;
///
/// let graph = krackhardt_kite();
/// assert_eq!(graph.actor_count(), 10);
/// assert_eq!(graph.tie_count(), 18);
/// assert_eq!(graph.degree(3), 6);
/// ```
pub fn krackhardt_kite() -> SocialGraph {
    let mut graph = SocialGraph::with_capacity(10, 18);

    for (id, label) in KRACKHARDT_KITE_LABELS.iter().enumerate() {
        graph.upsert_actor(Actor::new(id as u32).with_label(*label));
    }
    for (a, b) in KRACKHARDT_KITE_TIES {
        graph.add_tie(a, b);
    }

    graph
}
