//! Error types for frontier-topology.
//!
//! Every failure here is a configuration-time defect (a broken offset table
//! or traversal), never a runtime condition: the build aborts rather than
//! emit partially-correct tables.

use thiserror::Error;

use crate::board::HexId;

/// Result type for frontier-topology operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building the board topology.
#[derive(Debug, Error)]
pub enum Error {
    /// Two geometrically coincident corners resolved to different keys.
    #[error(
        "corner {corner_a} of hex {} and corner {corner_b} of hex {} do not share a key",
        .hex_a.value(), .hex_b.value()
    )]
    CornerMismatch {
        hex_a: HexId,
        corner_a: u8,
        hex_b: HexId,
        corner_b: u8,
    },

    /// Two adjacent hexes share a number of corners other than two.
    #[error(
        "adjacent hexes {} and {} share {found} corners, expected 2",
        .hex_a.value(), .hex_b.value()
    )]
    SharedCornerCount {
        hex_a: HexId,
        hex_b: HexId,
        found: usize,
    },

    /// A vertex ended up with a degree outside {2, 3}.
    #[error("vertex {vertex} has degree {degree}, expected 2 or 3")]
    VertexDegree { vertex: u8, degree: usize },

    /// An edge ended up with an endpoint count other than 2.
    #[error("edge {edge} has {count} endpoints, expected 2")]
    EdgeEndpoints { edge: u8, count: usize },

    /// A neighbor relation is not symmetric.
    #[error("{kind} adjacency is asymmetric between {a} and {b}")]
    AsymmetricNeighbors {
        /// "vertex" or "edge"
        kind: &'static str,
        a: u8,
        b: u8,
    },

    /// The board produced an unexpected number of vertices.
    #[error("board produced {found} vertices, expected {expected}")]
    VertexCount { found: usize, expected: usize },

    /// The board produced an unexpected number of edges.
    #[error("board produced {found} edges, expected {expected}")]
    EdgeCount { found: usize, expected: usize },
}
