//! Eigenvector centrality: importance via important neighbors.
//!
//! # Intuition
//!
//! An actor is important if their contacts are important. This recursive
//! definition is resolved by the dominant eigenvector of the adjacency
//! matrix: popular people tied to popular people.
//!
//! # Definition
//!
//! ```text
//! x_v = (1/λ) × Σ_{u~v} x_u
//! ```
//!
//! Equivalently: Ax = λx, where A is the adjacency matrix and λ is the
//! largest eigenvalue (Perron-Frobenius).
//!
//! # Algorithm: Power Iteration
//!
//! 1. Initialize x uniformly
//! 2. Repeat: x' = A × x, then normalize x' = x' / ||x'||
//! 3. Stop when ||x' - x|| < tolerance
//!
//! Convergence is not guaranteed: on bipartite graphs the two extreme
//! eigenvalues have equal magnitude and the iterates can oscillate forever.
//! Exhausting the iteration limit is therefore a hard error
//! ([`Error::ConvergenceFailure`]), never a silently returned
//! approximation.
//!
//! # References
//!
//! - Bonacich (1987). "Power and centrality: A family of measures"

use crate::{ActorId, Error, Result, SocialGraph};
use std::collections::HashMap;

/// Configuration for eigenvector centrality.
#[derive(Debug, Clone, Copy)]
pub struct EigenvectorConfig {
    /// Maximum iterations before giving up.
    pub max_iterations: usize,
    /// Convergence tolerance (L2 norm of change).
    pub tolerance: f64,
}

impl Default for EigenvectorConfig {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            tolerance: 1e-6,
        }
    }
}

/// Compute eigenvector centrality via power iteration.
///
/// The returned vector has unit L2 norm and non-negative components.
///
/// # Errors
///
/// Returns [`Error::ConvergenceFailure`] if the iteration limit is
/// exhausted before the change between rounds drops under the tolerance.
///
/// # Complexity
///
/// - Time: O(E × iterations)
/// - Space: O(V)
///
/// # Example
///
/// ```
/// use sociogram_core::{ActorId, SocialGraph};
/// use sociogram_core::algo::centrality::{eigenvector_centrality, EigenvectorConfig};
///
/// // Triangle with a pendant: 3 hangs off 2
/// let mut graph = SocialGraph::new();
/// graph.add_tie(0, 1);
/// graph.add_tie(1, 2);
/// graph.add_tie(2, 0);
/// graph.add_tie(2, 3);
///
/// let scores = eigenvector_centrality(&graph, EigenvectorConfig::default())?;
/// assert!(scores[&ActorId(2)] > scores[&ActorId(0)]);
/// assert!(scores[&ActorId(0)] > scores[&ActorId(3)]);
/// # Ok::<(), sociogram_core::Error>(())
/// ```
pub fn eigenvector_centrality(
    graph: &SocialGraph,
    config: EigenvectorConfig,
) -> Result<HashMap<ActorId, f64>> {
    let g = graph.as_petgraph();
    let n = g.node_count();
    if n == 0 {
        return Ok(HashMap::new());
    }

    // Initialize uniformly
    let init_val = 1.0 / (n as f64).sqrt();
    let mut scores = vec![init_val; n];
    let mut new_scores = vec![0.0; n];

    for _iter in 0..config.max_iterations {
        // Compute A × x
        new_scores.fill(0.0);

        for idx in g.node_indices() {
            for neighbor in g.neighbors(idx) {
                new_scores[idx.index()] += scores[neighbor.index()];
            }
        }

        // Normalize (L2 norm)
        let norm: f64 = new_scores.iter().map(|x| x * x).sum::<f64>().sqrt();
        if norm > 0.0 {
            for s in &mut new_scores {
                *s /= norm;
            }
        } else {
            // No ties at all: the uniform vector is already the answer
            new_scores.fill(init_val);
        }

        // Check convergence
        let diff: f64 = scores
            .iter()
            .zip(new_scores.iter())
            .map(|(old, new)| (old - new).powi(2))
            .sum::<f64>()
            .sqrt();

        std::mem::swap(&mut scores, &mut new_scores);

        if diff < config.tolerance {
            return Ok(g
                .node_indices()
                .map(|idx| (g[idx].id, scores[idx.index()]))
                .collect());
        }
    }

    Err(Error::ConvergenceFailure {
        iterations: config.max_iterations,
    })
}
