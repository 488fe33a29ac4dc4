//! Frontier Board Topology
//!
//! Canonical vertex/edge numbering and adjacency tables for the fixed
//! 19-hex, radius-2 game board.
//!
//! # The Problem
//!
//! Two independent consumers (an on-chain rules engine and a client-side
//! rendering/validation layer) must agree bit-for-bit on how the board's
//! 54 vertices and 72 edges are numbered, without ever talking to each
//! other. Both therefore consume tables generated by one deterministic
//! computation: every corner and edge is resolved to an exact integer
//! canonical key, keys are deduplicated in a fixed traversal order, and
//! every adjacency relation is derived from the resulting numbering.
//!
//! # Structure
//!
//! - [`HexCoord`]: axial hex coordinates, the board's geometric substrate
//! - [`Board`]: the fixed 19-coordinate layout, hexes numbered row-major
//! - [`VertexKey`] / [`EdgeKey`]: exact canonical identities on the corner
//!   lattice; coincident corners compare equal, no floats involved
//! - [`BoardTopology`]: the six derived tables, checked against the board
//!   invariants before they are handed to any emitter

mod board;
mod corner;
mod error;
mod hex;
mod topology;

pub use board::{Board, HexId, BOARD_COORDS};
pub use corner::{corner_key, edge_key, EdgeKey, VertexKey, CORNER_OFFSETS, EDGE_DIRECTIONS};
pub use error::{Error, Result};
pub use hex::HexCoord;
pub use topology::{BoardTopology, EdgeId, IdAllocator, VertexId};

/// Radius of the board hexagon.
pub const BOARD_RADIUS: usize = 2;

/// Number of hexes on the board (1 + 3r(r+1)).
pub const HEX_COUNT: usize = 1 + 3 * BOARD_RADIUS * (BOARD_RADIUS + 1);

/// Corners (and edges) per hex.
pub const CORNERS_PER_HEX: usize = 6;

/// Distinct vertices after canonicalization (6(r+1)²).
pub const VERTEX_COUNT: usize = 6 * (BOARD_RADIUS + 1) * (BOARD_RADIUS + 1);

/// Distinct edges after canonicalization.
pub const EDGE_COUNT: usize = VERTEX_COUNT + HEX_COUNT - 1;

// Compile-time check: Euler's formula for the planar board graph
// (V - E + F = 2, with the 19 hex faces plus the outer face)
const _: () = assert!(VERTEX_COUNT + (HEX_COUNT + 1) - EDGE_COUNT == 2);
