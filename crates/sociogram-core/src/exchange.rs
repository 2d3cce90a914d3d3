//! Graph interchange / export types.
//!
//! A **serde-friendly** graph representation shaped for force-directed
//! visualizations (D3's node/link convention):
//!
//! - nodes have a string `id` and a `centrality` object with one entry per
//!   measure, in catalog order
//! - links have string `source` and `target` referencing node ids
//!
//! Algorithmic code should use [`SocialGraph`]; this module is the last
//! stage of the pipeline, turning a graph plus its [`CentralityReport`]
//! into the two JSON documents downstream tooling reads.

use serde::{Deserialize, Serialize};

use crate::algo::centrality::{CentralityReport, Measure};
use crate::{ActorId, Result, SocialGraph};

/// File name for the measure-name catalog document.
pub const MEASURES_FILE: &str = "centrality-measures.json";

/// File name for the annotated node/link graph document.
pub const GRAPH_FILE: &str = "kkg.json";

/// The measure-name catalog as pretty-printed JSON.
///
/// Always exactly the four names of [`Measure::ALL`], in catalog order,
/// regardless of graph content.
pub fn catalog_json() -> Result<String> {
    Ok(serde_json::to_string_pretty(&Measure::ALL)?)
}

/// Per-node centrality values, one field per measure.
///
/// A struct rather than a map so the serialized key order is always the
/// catalog order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CentralityScores {
    /// Normalized degree centrality.
    pub degree: f64,
    /// Normalized betweenness centrality.
    pub betweenness: f64,
    /// Normalized closeness centrality.
    pub closeness: f64,
    /// Eigenvector centrality component.
    pub eigenvector: f64,
}

impl CentralityScores {
    fn from_report(report: &CentralityReport, id: ActorId) -> Self {
        Self {
            degree: report.score(Measure::Degree, id),
            betweenness: report.score(Measure::Betweenness, id),
            closeness: report.score(Measure::Closeness, id),
            eigenvector: report.score(Measure::Eigenvector, id),
        }
    }
}

/// A node in the interchange graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphNode {
    /// Stringified actor ID.
    pub id: String,
    /// Centrality values keyed by measure name.
    pub centrality: CentralityScores,
}

/// A link in the interchange graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphLink {
    /// Source node ID.
    pub source: String,
    /// Target node ID.
    pub target: String,
}

/// A complete node/link document ready for export.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphDocument {
    /// Nodes (actors), annotated with centrality values.
    pub nodes: Vec<GraphNode>,
    /// Links (ties).
    pub links: Vec<GraphLink>,
}

impl GraphDocument {
    /// Build the document from a graph and its centrality report.
    ///
    /// Nodes and links follow the graph's insertion order.
    pub fn from_graph(graph: &SocialGraph, report: &CentralityReport) -> Self {
        let nodes = graph
            .actors()
            .map(|actor| GraphNode {
                id: actor.id.to_string(),
                centrality: CentralityScores::from_report(report, actor.id),
            })
            .collect();

        let links = graph
            .ties()
            .map(|(source, target)| GraphLink {
                source: source.to_string(),
                target: target.to_string(),
            })
            .collect();

        Self { nodes, links }
    }

    /// Get node count.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get link count.
    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    /// Serialize to pretty-printed JSON (2-space indentation).
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the pretty-printed JSON document to a file, overwriting it.
    pub fn to_json_file(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}
