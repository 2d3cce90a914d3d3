// Allow minor clippy style warnings at crate level.
// These are style preferences, not bugs.
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::uninlined_format_args)]

//! Core types for social network analysis.
//!
//! This crate provides the pieces of a small centrality pipeline:
//!
//! - [`SocialGraph`] - An undirected, unweighted graph of actors and ties
//! - [`generators::krackhardt_kite`] - The canonical 10-actor kite network
//! - [`algo::centrality`] - Degree, betweenness, closeness, eigenvector
//! - [`GraphDocument`] - A node/link interchange document for
//!   force-directed visualizations
//!
//! # Example
//!
//! ```rust
//! use sociogram_core::generators::krackhardt_kite;
//! use sociogram_core::algo::centrality::CentralityReport;
//! use sociogram_core::GraphDocument;
//!
//! let graph = krackhardt_kite();
//! assert_eq!(graph.actor_count(), 10);
//!
//! let report = CentralityReport::compute(&graph)?;
//! let doc = GraphDocument::from_graph(&graph, &report);
//! assert_eq!(doc.node_count(), 10);
//! assert_eq!(doc.link_count(), 18);
//! # Ok::<(), sociogram_core::Error>(())
//! ```

mod actor;
pub mod algo;
mod error;
mod exchange;
pub mod generators;
mod graph;

pub use actor::{Actor, ActorId};
pub use error::{Error, Result};
pub use exchange::{
    catalog_json, CentralityScores, GraphDocument, GraphLink, GraphNode, GRAPH_FILE, MEASURES_FILE,
};
pub use graph::{SocialGraph, SocialGraphStats};

// Re-export petgraph for advanced graph operations
pub use petgraph;
