//! Error types for frontier-tables.

use thiserror::Error;

/// Result type for frontier-tables operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while emitting consumer tables.
#[derive(Debug, Error)]
pub enum Error {
    /// The topology itself failed to build.
    #[error("topology build failed: {0}")]
    Topology(#[from] frontier_topology::Error),

    /// Writing an output file failed. Regeneration is idempotent, so
    /// rerunning after fixing the environment is the recovery path.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failed.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}
