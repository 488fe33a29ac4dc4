//! Board topology: canonical numbering and adjacency tables.
//!
//! A single deterministic traversal (hexes 0..18, corners 0..5) resolves
//! every corner and edge to its canonical key, hands the key to an
//! insertion-ordered allocator, and fills the per-hex tables. The adjacency
//! tables are then derived purely from those, and the whole structure is
//! checked against the board invariants before it is returned.
//!
//! Determinism is the contract: two runs, or two independent
//! implementations traversing in the same order, assign identical ids,
//! which is what lets the on-chain and client consumers agree on numbering
//! without ever communicating.

use std::collections::hash_map::Entry;
use std::collections::{BTreeSet, HashMap};
use std::hash::Hash;

use crate::board::{Board, HexId};
use crate::corner::{corner_key, edge_key, VertexKey, EDGE_DIRECTIONS};
use crate::error::{Error, Result};
use crate::{CORNERS_PER_HEX, EDGE_COUNT, HEX_COUNT, VERTEX_COUNT};

/// Identifier of a canonical board vertex: 0..=53 in first-discovery order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VertexId(pub u8);

impl VertexId {
    /// Create from a raw id.
    #[inline]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw id value.
    #[inline]
    pub const fn value(&self) -> u8 {
        self.0
    }

    /// The id as a table index.
    #[inline]
    pub const fn index(&self) -> usize {
        self.0 as usize
    }
}

impl From<u8> for VertexId {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl From<VertexId> for u8 {
    fn from(value: VertexId) -> Self {
        value.0
    }
}

/// Identifier of a canonical board edge: 0..=71 in first-discovery order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeId(pub u8);

impl EdgeId {
    /// Create from a raw id.
    #[inline]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw id value.
    #[inline]
    pub const fn value(&self) -> u8 {
        self.0
    }

    /// The id as a table index.
    #[inline]
    pub const fn index(&self) -> usize {
        self.0 as usize
    }
}

impl From<u8> for EdgeId {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl From<EdgeId> for u8 {
    fn from(value: EdgeId) -> Self {
        value.0
    }
}

/// Insertion-ordered id assignment for canonical keys.
///
/// The first occurrence of a key gets the next unused id, starting at 0;
/// repeats return the recorded id. Because the builder always traverses in
/// the same fixed order, the assignment is fully reproducible.
#[derive(Debug, Default)]
pub struct IdAllocator<K> {
    ids: HashMap<K, u8>,
    keys: Vec<K>,
}

impl<K: Copy + Eq + Hash> IdAllocator<K> {
    /// Create an empty allocator.
    pub fn new() -> Self {
        Self {
            ids: HashMap::new(),
            keys: Vec::new(),
        }
    }

    /// Id for a key, assigning the next free id on first sight.
    pub fn allocate(&mut self, key: K) -> u8 {
        match self.ids.entry(key) {
            Entry::Occupied(entry) => *entry.get(),
            Entry::Vacant(entry) => {
                let id = self.keys.len() as u8;
                self.keys.push(key);
                *entry.insert(id)
            }
        }
    }

    /// Number of distinct keys seen so far.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether no key has been seen yet.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// The keys in id order.
    pub fn into_keys(self) -> Vec<K> {
        self.keys
    }
}

/// The complete derived topology of the board.
///
/// Produced once by [`BoardTopology::build`] and immutable afterwards.
/// Set-valued entries are sorted ascending so regeneration is
/// byte-identical.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardTopology {
    hex_vertices: [[VertexId; CORNERS_PER_HEX]; HEX_COUNT],
    hex_edges: [[EdgeId; CORNERS_PER_HEX]; HEX_COUNT],
    vertex_edges: Vec<Vec<EdgeId>>,
    edge_vertices: Vec<[VertexId; 2]>,
    vertex_neighbors: Vec<Vec<VertexId>>,
    edge_neighbors: Vec<Vec<EdgeId>>,
    vertex_keys: Vec<VertexKey>,
}

impl BoardTopology {
    /// Build the full topology of a board.
    ///
    /// Fails if the corner geometry is inconsistent or any derived table
    /// violates a board invariant; nothing partial is ever returned.
    pub fn build(board: &Board) -> Result<Self> {
        verify_shared_corners(board)?;

        let mut vertex_alloc = IdAllocator::new();
        let mut edge_alloc = IdAllocator::new();
        let mut hex_vertices = [[VertexId(0); CORNERS_PER_HEX]; HEX_COUNT];
        let mut hex_edges = [[EdgeId(0); CORNERS_PER_HEX]; HEX_COUNT];

        for hex in Board::hexes() {
            let coord = board.coord(hex);
            for c in 0..CORNERS_PER_HEX as u8 {
                let id = vertex_alloc.allocate(corner_key(coord, c));
                hex_vertices[hex.index()][c as usize] = VertexId(id);
            }
            for e in 0..CORNERS_PER_HEX as u8 {
                let id = edge_alloc.allocate(edge_key(coord, e));
                hex_edges[hex.index()][e as usize] = EdgeId(id);
            }
        }

        if vertex_alloc.len() != VERTEX_COUNT {
            return Err(Error::VertexCount {
                found: vertex_alloc.len(),
                expected: VERTEX_COUNT,
            });
        }
        if edge_alloc.len() != EDGE_COUNT {
            return Err(Error::EdgeCount {
                found: edge_alloc.len(),
                expected: EDGE_COUNT,
            });
        }

        // Derive incidence sets from the per-hex tables. At corner j the
        // vertex meets edge j (toward corner j+1) and edge j-1 (from
        // corner j-1), and neighbors the vertices at corners j-1 and j+1.
        let mut vertex_edges = vec![BTreeSet::new(); VERTEX_COUNT];
        let mut edge_endpoint_sets = vec![BTreeSet::new(); EDGE_COUNT];
        let mut vertex_neighbors = vec![BTreeSet::new(); VERTEX_COUNT];

        for hex in Board::hexes() {
            let verts = &hex_vertices[hex.index()];
            let edges = &hex_edges[hex.index()];
            for j in 0..CORNERS_PER_HEX {
                let v = verts[j];
                let next = verts[(j + 1) % CORNERS_PER_HEX];
                let prev = verts[(j + CORNERS_PER_HEX - 1) % CORNERS_PER_HEX];
                let e = edges[j];
                let e_prev = edges[(j + CORNERS_PER_HEX - 1) % CORNERS_PER_HEX];

                vertex_edges[v.index()].insert(e);
                vertex_edges[v.index()].insert(e_prev);
                edge_endpoint_sets[e.index()].insert(v);
                edge_endpoint_sets[e.index()].insert(next);
                vertex_neighbors[v.index()].insert(next);
                vertex_neighbors[v.index()].insert(prev);
            }
        }

        // Every edge must settle to exactly two distinct endpoints
        let mut edge_vertices = Vec::with_capacity(EDGE_COUNT);
        for (i, endpoints) in edge_endpoint_sets.iter().enumerate() {
            if endpoints.len() != 2 {
                return Err(Error::EdgeEndpoints {
                    edge: i as u8,
                    count: endpoints.len(),
                });
            }
            let pair: Vec<VertexId> = endpoints.iter().copied().collect();
            edge_vertices.push([pair[0], pair[1]]);
        }

        // Edges neighbor every other edge incident to either endpoint
        let mut edge_neighbors = vec![BTreeSet::new(); EDGE_COUNT];
        for (i, endpoints) in edge_vertices.iter().enumerate() {
            for v in endpoints {
                for &other in &vertex_edges[v.index()] {
                    if other.index() != i {
                        edge_neighbors[i].insert(other);
                    }
                }
            }
        }

        for (i, incident) in vertex_edges.iter().enumerate() {
            if incident.len() != 2 && incident.len() != 3 {
                return Err(Error::VertexDegree {
                    vertex: i as u8,
                    degree: incident.len(),
                });
            }
        }

        let topology = Self {
            hex_vertices,
            hex_edges,
            vertex_edges: vertex_edges
                .into_iter()
                .map(|set| set.into_iter().collect())
                .collect(),
            edge_vertices,
            vertex_neighbors: vertex_neighbors
                .into_iter()
                .map(|set| set.into_iter().collect())
                .collect(),
            edge_neighbors: edge_neighbors
                .into_iter()
                .map(|set| set.into_iter().collect())
                .collect(),
            vertex_keys: vertex_alloc.into_keys(),
        };
        topology.verify_symmetry()?;
        Ok(topology)
    }

    /// Both neighbor relations must be undirected.
    fn verify_symmetry(&self) -> Result<()> {
        for (v, neighbors) in self.vertex_neighbors.iter().enumerate() {
            for n in neighbors {
                if !self.vertex_neighbors[n.index()].contains(&VertexId(v as u8)) {
                    return Err(Error::AsymmetricNeighbors {
                        kind: "vertex",
                        a: v as u8,
                        b: n.value(),
                    });
                }
            }
        }
        for (e, neighbors) in self.edge_neighbors.iter().enumerate() {
            for n in neighbors {
                if !self.edge_neighbors[n.index()].contains(&EdgeId(e as u8)) {
                    return Err(Error::AsymmetricNeighbors {
                        kind: "edge",
                        a: e as u8,
                        b: n.value(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Number of distinct vertices (54 on the standard board).
    pub fn vertex_count(&self) -> usize {
        self.vertex_keys.len()
    }

    /// Number of distinct edges (72 on the standard board).
    pub fn edge_count(&self) -> usize {
        self.edge_vertices.len()
    }

    /// The six vertices of a hex, in corner order.
    pub fn hex_vertices(&self, hex: HexId) -> &[VertexId; CORNERS_PER_HEX] {
        &self.hex_vertices[hex.index()]
    }

    /// The six edges of a hex; edge i connects corners i and (i + 1) % 6.
    pub fn hex_edges(&self, hex: HexId) -> &[EdgeId; CORNERS_PER_HEX] {
        &self.hex_edges[hex.index()]
    }

    /// Edges incident to a vertex (2 or 3), ascending.
    pub fn vertex_edges(&self, vertex: VertexId) -> &[EdgeId] {
        &self.vertex_edges[vertex.index()]
    }

    /// The two endpoint vertices of an edge, ascending.
    pub fn edge_vertices(&self, edge: EdgeId) -> [VertexId; 2] {
        self.edge_vertices[edge.index()]
    }

    /// Vertices one edge away from a vertex (2 or 3), ascending.
    pub fn vertex_neighbors(&self, vertex: VertexId) -> &[VertexId] {
        &self.vertex_neighbors[vertex.index()]
    }

    /// Edges sharing an endpoint with an edge, ascending.
    pub fn edge_neighbors(&self, edge: EdgeId) -> &[EdgeId] {
        &self.edge_neighbors[edge.index()]
    }

    /// Canonical key of a vertex.
    pub fn vertex_key(&self, vertex: VertexId) -> VertexKey {
        self.vertex_keys[vertex.index()]
    }

    /// The full VertexId → key listing, in id order.
    pub fn vertex_keys(&self) -> &[VertexKey] {
        &self.vertex_keys
    }
}

/// Check that corner geometry is consistent across every adjacent hex pair:
/// the two corners bounding their shared edge resolve to equal keys from
/// both sides, and the pair shares exactly two corners in total.
fn verify_shared_corners(board: &Board) -> Result<()> {
    for hex in Board::hexes() {
        let coord = board.coord(hex);
        for (e, dir) in EDGE_DIRECTIONS.iter().enumerate() {
            let Some(neighbor) = board.hex_id(coord + *dir) else {
                continue;
            };
            let neighbor_coord = board.coord(neighbor);
            let e = e as u8;

            // Edge e of this hex is edge (e + 3) % 6 of the neighbor; its
            // endpoints pair up crosswise.
            let pairs = [(e, (e + 4) % 6), ((e + 1) % 6, (e + 3) % 6)];
            for (ours, theirs) in pairs {
                if corner_key(coord, ours) != corner_key(neighbor_coord, theirs) {
                    return Err(Error::CornerMismatch {
                        hex_a: hex,
                        corner_a: ours,
                        hex_b: neighbor,
                        corner_b: theirs,
                    });
                }
            }

            let ours: Vec<VertexKey> = (0..CORNERS_PER_HEX as u8)
                .map(|c| corner_key(coord, c))
                .collect();
            let shared = (0..CORNERS_PER_HEX as u8)
                .map(|c| corner_key(neighbor_coord, c))
                .filter(|k| ours.contains(k))
                .count();
            if shared != 2 {
                return Err(Error::SharedCornerCount {
                    hex_a: hex,
                    hex_b: neighbor,
                    found: shared,
                });
            }
        }
    }
    Ok(())
}
