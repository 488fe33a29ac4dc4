//! Frontier Board Tables
//!
//! Emission layer for the board topology: takes the tables built by
//! `frontier-topology` and writes them into each consumer's static-lookup
//! idiom, JSON for the client and a Solidity library for the chain.
//!
//! The compiler's output is ground truth. Nothing here recomputes
//! topology; both emitters serialize exactly the ids they are handed, so
//! the two consumers agree bit-for-bit by construction.

mod error;
mod json;
mod solidity;

pub use error::{Error, Result};
pub use json::{write_json, TopologyTables};
pub use solidity::{board_utils_source, write_solidity};
