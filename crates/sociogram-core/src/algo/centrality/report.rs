//! One computation pass over every measure in the catalog.

use super::{
    betweenness_centrality, closeness_centrality, degree_centrality, eigenvector_centrality,
    BetweennessConfig, ClosenessConfig, EigenvectorConfig, Measure,
};
use crate::{ActorId, Result, SocialGraph};
use std::collections::HashMap;

/// Per-actor scores for all four centrality measures.
///
/// # Example
///
/// ```
/// use sociogram_core::generators::krackhardt_kite;
/// use sociogram_core::algo::centrality::{CentralityReport, Measure};
///
/// let graph = krackhardt_kite();
/// let report = CentralityReport::compute(&graph)?;
///
/// // Diane holds the most ties in the kite
/// let (top, _) = report.most_central(Measure::Degree).unwrap();
/// assert_eq!(top.0, 3);
/// # Ok::<(), sociogram_core::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct CentralityReport {
    degree: HashMap<ActorId, f64>,
    betweenness: HashMap<ActorId, f64>,
    closeness: HashMap<ActorId, f64>,
    eigenvector: HashMap<ActorId, f64>,
}

impl CentralityReport {
    /// Run all four measures over the graph with default settings.
    ///
    /// # Errors
    ///
    /// Propagates [`crate::Error::ConvergenceFailure`] from eigenvector
    /// centrality.
    pub fn compute(graph: &SocialGraph) -> Result<Self> {
        Ok(Self {
            degree: degree_centrality(graph),
            betweenness: betweenness_centrality(graph, BetweennessConfig::default()),
            closeness: closeness_centrality(graph, ClosenessConfig::default()),
            eigenvector: eigenvector_centrality(graph, EigenvectorConfig::default())?,
        })
    }

    /// Scores for one measure.
    pub fn get(&self, measure: Measure) -> &HashMap<ActorId, f64> {
        match measure {
            Measure::Degree => &self.degree,
            Measure::Betweenness => &self.betweenness,
            Measure::Closeness => &self.closeness,
            Measure::Eigenvector => &self.eigenvector,
        }
    }

    /// One actor's score for one measure; 0.0 for actors the report has
    /// never seen.
    pub fn score(&self, measure: Measure, id: ActorId) -> f64 {
        self.get(measure).get(&id).copied().unwrap_or(0.0)
    }

    /// The highest-scoring actor for a measure, if the report is non-empty.
    pub fn most_central(&self, measure: Measure) -> Option<(ActorId, f64)> {
        self.get(measure)
            .iter()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(&id, &score)| (id, score))
    }
}
