//! Board table generator.
//!
//! Builds the board topology once and writes the consumer tables:
//! `board.json` for the client and `BoardUtils.sol` for the chain.
//! Regeneration is idempotent, so it can be rerun freely.

use std::env;
use std::path::PathBuf;

use frontier_tables::{write_json, write_solidity};
use frontier_topology::{Board, BoardTopology, HEX_COUNT};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Parse command line args
    let args: Vec<String> = env::args().collect();

    let out_dir = args
        .get(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("out"));

    println!("Frontier Board Tables");
    println!("=====================");
    println!();

    let board = Board::standard();
    let topology = BoardTopology::build(&board)?;

    println!("Topology built:");
    println!("  Hexes:    {}", HEX_COUNT);
    println!("  Vertices: {}", topology.vertex_count());
    println!("  Edges:    {}", topology.edge_count());
    println!();

    std::fs::create_dir_all(&out_dir)?;

    let json_path = out_dir.join("board.json");
    write_json(&topology, &json_path)?;
    println!("Wrote {}", json_path.display());

    let solidity_path = out_dir.join("BoardUtils.sol");
    write_solidity(&topology, &solidity_path)?;
    println!("Wrote {}", solidity_path.display());

    Ok(())
}
