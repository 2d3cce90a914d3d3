//! Error types for sociogram-core.

use thiserror::Error;

/// Error type for pipeline operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Eigenvector power iteration exhausted its limit without converging.
    #[error("eigenvector centrality failed to converge within {iterations} iterations")]
    ConvergenceFailure {
        /// The iteration limit that was exhausted.
        iterations: usize,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for pipeline operations.
pub type Result<T> = std::result::Result<T, Error>;
