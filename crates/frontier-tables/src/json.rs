//! JSON emission for the client-side consumer.
//!
//! The client renders and validates moves against the same numbering the
//! chain uses, so it consumes the compiler's tables verbatim: plain
//! integer arrays, no recomputation on its side.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use frontier_topology::{Board, BoardTopology, EdgeId, VertexId, VertexKey};

use crate::error::Result;

/// The derived tables as plain integers, in emission order.
///
/// Row i of each table belongs to id i; set-valued rows are sorted
/// ascending, exactly as the topology stores them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopologyTables {
    /// HexId → its 6 vertices in corner order
    pub hex_vertices: Vec<[u8; 6]>,
    /// HexId → its 6 edges; edge i connects corners i and (i + 1) % 6
    pub hex_edges: Vec<[u8; 6]>,
    /// VertexId → incident edges (2 or 3)
    pub vertex_edges: Vec<Vec<u8>>,
    /// EdgeId → its 2 endpoint vertices
    pub edge_vertices: Vec<[u8; 2]>,
    /// VertexId → vertices one edge away (2 or 3)
    pub vertex_neighbors: Vec<Vec<u8>>,
    /// EdgeId → edges sharing an endpoint
    pub edge_neighbors: Vec<Vec<u8>>,
    /// VertexId → canonical corner-lattice coordinates (q, r, s)
    pub vertex_keys: Vec<VertexKey>,
}

impl TopologyTables {
    /// Flatten a built topology into plain integer tables.
    pub fn from_topology(topology: &BoardTopology) -> Self {
        let hex_vertices = Board::hexes()
            .map(|h| topology.hex_vertices(h).map(|v| v.value()))
            .collect();
        let hex_edges = Board::hexes()
            .map(|h| topology.hex_edges(h).map(|e| e.value()))
            .collect();
        let vertex_edges = (0..topology.vertex_count() as u8)
            .map(|v| {
                topology
                    .vertex_edges(VertexId(v))
                    .iter()
                    .map(|e| e.value())
                    .collect()
            })
            .collect();
        let edge_vertices = (0..topology.edge_count() as u8)
            .map(|e| topology.edge_vertices(EdgeId(e)).map(|v| v.value()))
            .collect();
        let vertex_neighbors = (0..topology.vertex_count() as u8)
            .map(|v| {
                topology
                    .vertex_neighbors(VertexId(v))
                    .iter()
                    .map(|n| n.value())
                    .collect()
            })
            .collect();
        let edge_neighbors = (0..topology.edge_count() as u8)
            .map(|e| {
                topology
                    .edge_neighbors(EdgeId(e))
                    .iter()
                    .map(|n| n.value())
                    .collect()
            })
            .collect();
        let vertex_keys = topology.vertex_keys().to_vec();

        Self {
            hex_vertices,
            hex_edges,
            vertex_edges,
            edge_vertices,
            vertex_neighbors,
            edge_neighbors,
            vertex_keys,
        }
    }

    /// Pretty-printed JSON for the client's source tree.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Write the topology tables as JSON to `path`.
pub fn write_json(topology: &BoardTopology, path: &Path) -> Result<()> {
    let tables = TopologyTables::from_topology(topology);
    fs::write(path, tables.to_json_string()?)?;
    info!(path = %path.display(), "wrote JSON board tables");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tables() -> TopologyTables {
        let topology = BoardTopology::build(&Board::standard()).expect("standard board must build");
        TopologyTables::from_topology(&topology)
    }

    #[test]
    fn table_dimensions_match_the_board() {
        let tables = tables();
        assert_eq!(tables.hex_vertices.len(), 19);
        assert_eq!(tables.hex_edges.len(), 19);
        assert_eq!(tables.vertex_edges.len(), 54);
        assert_eq!(tables.vertex_neighbors.len(), 54);
        assert_eq!(tables.vertex_keys.len(), 54);
        assert_eq!(tables.edge_vertices.len(), 72);
        assert_eq!(tables.edge_neighbors.len(), 72);
    }

    #[test]
    fn first_hex_rows_use_the_first_ids() {
        let tables = tables();
        assert_eq!(tables.hex_vertices[0], [0, 1, 2, 3, 4, 5]);
        assert_eq!(tables.hex_edges[0], [0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn vertex_keys_stay_on_the_zero_plane() {
        for key in tables().vertex_keys {
            assert_eq!(key.q + key.r + key.s, 0);
        }
    }

    #[test]
    fn json_round_trips() {
        let tables = tables();
        let json = tables.to_json_string().expect("serialization should succeed");
        let back: TopologyTables = serde_json::from_str(&json).expect("deserialization should succeed");
        assert_eq!(tables, back);
    }

    #[test]
    fn emission_is_deterministic() {
        let a = tables().to_json_string().expect("serialization should succeed");
        let b = tables().to_json_string().expect("serialization should succeed");
        assert_eq!(a, b);
    }
}
