//! Solidity emission for the on-chain consumer.
//!
//! Renders the `BoardUtils` library of `internal pure` lookup functions
//! that the rules contracts link against. The ids in the emitted source
//! are exactly the compiler's; the chain never re-derives topology.

use std::fs;
use std::path::Path;

use tracing::info;

use frontier_topology::{Board, BoardTopology, EdgeId, VertexId};

use crate::error::Result;

/// Render the `BoardUtils` library source.
pub fn board_utils_source(topology: &BoardTopology) -> String {
    let mut out = String::new();
    out.push_str("// SPDX-License-Identifier: MIT\n");
    out.push_str("pragma solidity ^0.8.20;\n\n");
    out.push_str("import \"./IBoard.sol\";\n\n");
    out.push_str("library BoardUtils {\n");
    out.push_str("    // Auto-generated topology\n\n");

    out.push_str(
        "    function getHexagonVertices(uint8 hexId) internal pure returns (uint8[6] memory) {\n",
    );
    for hex in Board::hexes() {
        let row: Vec<u8> = topology.hex_vertices(hex).iter().map(|v| v.value()).collect();
        out.push_str(&format!(
            "        if (hexId == {}) return {:?};\n",
            hex.value(),
            row
        ));
    }
    out.push_str("        return [0, 0, 0, 0, 0, 0];\n");
    out.push_str("    }\n\n");

    out.push_str(
        "    function getHexagonEdges(uint8 hexId) internal pure returns (uint8[6] memory) {\n",
    );
    for hex in Board::hexes() {
        let row: Vec<u8> = topology.hex_edges(hex).iter().map(|e| e.value()).collect();
        out.push_str(&format!(
            "        if (hexId == {}) return {:?};\n",
            hex.value(),
            row
        ));
    }
    out.push_str("        return [0, 0, 0, 0, 0, 0];\n");
    out.push_str("    }\n\n");

    out.push_str(
        "    function getAdjacentVertices(uint8 vertexId) internal pure returns (uint8[] memory) {\n",
    );
    out.push_str("        uint8[] memory neighbors;\n");
    for v in 0..topology.vertex_count() as u8 {
        let ids: Vec<u8> = topology
            .vertex_neighbors(VertexId(v))
            .iter()
            .map(|n| n.value())
            .collect();
        out.push_str(&format!(
            "        if (vertexId == {}) {{ {} }}\n",
            v,
            dynamic_row("neighbors", &ids)
        ));
    }
    out.push_str("        return neighbors;\n");
    out.push_str("    }\n\n");

    out.push_str(
        "    function getAdjacentEdges(uint8 edgeId) internal pure returns (uint8[] memory) {\n",
    );
    out.push_str("        uint8[] memory neighbors;\n");
    for e in 0..topology.edge_count() as u8 {
        let ids: Vec<u8> = topology
            .edge_neighbors(EdgeId(e))
            .iter()
            .map(|n| n.value())
            .collect();
        out.push_str(&format!(
            "        if (edgeId == {}) {{ {} }}\n",
            e,
            dynamic_row("neighbors", &ids)
        ));
    }
    out.push_str("        return neighbors;\n");
    out.push_str("    }\n\n");

    out.push_str(
        "    function getVertexEdges(uint8 vertexId) internal pure returns (uint8[] memory) {\n",
    );
    out.push_str("        uint8[] memory edges;\n");
    for v in 0..topology.vertex_count() as u8 {
        let ids: Vec<u8> = topology
            .vertex_edges(VertexId(v))
            .iter()
            .map(|e| e.value())
            .collect();
        out.push_str(&format!(
            "        if (vertexId == {}) {{ {} }}\n",
            v,
            dynamic_row("edges", &ids)
        ));
    }
    out.push_str("        return edges;\n");
    out.push_str("    }\n\n");

    out.push_str(
        "    function getEdgeVertices(uint8 edgeId) internal pure returns (uint8[2] memory) {\n",
    );
    for e in 0..topology.edge_count() as u8 {
        let row: Vec<u8> = topology.edge_vertices(EdgeId(e)).iter().map(|v| v.value()).collect();
        out.push_str(&format!("        if (edgeId == {}) return {:?};\n", e, row));
    }
    out.push_str("        return [0, 0];\n");
    out.push_str("    }\n");
    out.push_str("}\n");

    out
}

/// One dispatch arm of a dynamic-array lookup: allocate, fill, return.
fn dynamic_row(var: &str, ids: &[u8]) -> String {
    let mut row = format!("{} = new uint8[]({});", var, ids.len());
    for (i, id) in ids.iter().enumerate() {
        row.push_str(&format!(" {}[{}] = {};", var, i, id));
    }
    row.push_str(&format!(" return {};", var));
    row
}

/// Write the `BoardUtils` library to `path`.
pub fn write_solidity(topology: &BoardTopology, path: &Path) -> Result<()> {
    fs::write(path, board_utils_source(topology))?;
    info!(path = %path.display(), "wrote Solidity board tables");
    Ok(())
}
