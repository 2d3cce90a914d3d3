//! The catalog of centrality measures.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A centrality measure computed by the pipeline.
///
/// The catalog order is fixed: downstream documents key scores by measure
/// name, and [`Measure::ALL`] is the single source of that ordering rather
/// than any map's iteration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Measure {
    /// Normalized count of direct ties.
    Degree,
    /// Fraction of shortest paths passing through an actor.
    Betweenness,
    /// Normalized inverse of mean shortest-path distance.
    Closeness,
    /// Principal eigenvector component of the adjacency matrix.
    Eigenvector,
}

impl Measure {
    /// All measures, in catalog order.
    pub const ALL: [Measure; 4] = [
        Measure::Degree,
        Measure::Betweenness,
        Measure::Closeness,
        Measure::Eigenvector,
    ];

    /// The measure's name as used for JSON keys.
    pub fn name(self) -> &'static str {
        match self {
            Measure::Degree => "degree",
            Measure::Betweenness => "betweenness",
            Measure::Closeness => "closeness",
            Measure::Eigenvector => "eigenvector",
        }
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_order() {
        let names: Vec<_> = Measure::ALL.iter().map(|m| m.name()).collect();
        assert_eq!(
            names,
            vec!["degree", "betweenness", "closeness", "eigenvector"]
        );
    }

    #[test]
    fn test_serde_names_match_display() {
        for measure in Measure::ALL {
            let json = serde_json::to_string(&measure).unwrap();
            assert_eq!(json, format!("\"{measure}\""));
        }
    }
}
