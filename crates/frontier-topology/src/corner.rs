//! Canonical corner and edge identities.
//!
//! Every physical corner of the board is shared by up to three hexes, every
//! edge by up to two, and all of them must deduplicate exactly. Corners are
//! therefore addressed on an integer lattice: the hex center scaled by 3
//! plus a fixed per-corner offset. Two (hex, corner) pairs that touch the
//! same point land on the same integer triple, so identity is plain `==`
//! with no floating-point tolerance anywhere.
//!
//! Hexes are pointy-top. Corner 0 is the north (top) corner and the indices
//! run clockwise: 0 N, 1 NE, 2 SE, 3 S, 4 SW, 5 NW. Edge i spans corners i
//! and (i + 1) % 6.

use crate::hex::HexCoord;

/// Canonical identity of a board corner.
///
/// A point on the corner lattice with `q + r + s = 0`. Coincident corners
/// of different hexes always produce equal keys, independent of which hex
/// resolved them first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VertexKey {
    /// First lattice coordinate
    pub q: i64,
    /// Second lattice coordinate
    pub r: i64,
    /// Third lattice coordinate, always -q - r
    pub s: i64,
}

impl VertexKey {
    /// Create a new key.
    pub const fn new(q: i64, r: i64, s: i64) -> Self {
        Self { q, r, s }
    }
}

impl std::fmt::Display for VertexKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.q, self.r, self.s)
    }
}

/// Canonical identity of a board edge: its two endpoint keys, stored in
/// sorted order so both adjacent hexes derive the same value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeKey {
    a: VertexKey,
    b: VertexKey,
}

impl EdgeKey {
    /// Create a key from two endpoints, in either order.
    pub fn new(v1: VertexKey, v2: VertexKey) -> Self {
        if v1 <= v2 {
            Self { a: v1, b: v2 }
        } else {
            Self { a: v2, b: v1 }
        }
    }

    /// The two endpoint keys, smaller first.
    pub const fn endpoints(&self) -> (VertexKey, VertexKey) {
        (self.a, self.b)
    }
}

/// Per-corner lattice offsets from the scaled hex center, clockwise from
/// the north corner. Each sums to zero, so corner keys stay on the
/// `q + r + s = 0` plane.
pub const CORNER_OFFSETS: [VertexKey; 6] = [
    VertexKey::new(1, -2, 1),   // N
    VertexKey::new(2, -1, -1),  // NE
    VertexKey::new(1, 1, -2),   // SE
    VertexKey::new(-1, 2, -1),  // S
    VertexKey::new(-2, 1, 1),   // SW
    VertexKey::new(-1, -1, 2),  // NW
];

/// Axial direction of the neighbor sharing edge i of a hex.
///
/// Edge 0 runs between the N and NE corners and faces the northeast
/// neighbor; the rest follow clockwise.
pub const EDGE_DIRECTIONS: [HexCoord; 6] = [
    HexCoord::new(1, -1),  // NE
    HexCoord::new(1, 0),   // E
    HexCoord::new(0, 1),   // SE
    HexCoord::new(-1, 1),  // SW
    HexCoord::new(-1, 0),  // W
    HexCoord::new(0, -1),  // NW
];

/// Canonical key of corner `corner` (0..=5) of the hex at `coord`.
pub fn corner_key(coord: HexCoord, corner: u8) -> VertexKey {
    let offset = CORNER_OFFSETS[corner as usize];
    VertexKey::new(
        3 * coord.q + offset.q,
        3 * coord.r + offset.r,
        3 * coord.s() + offset.s,
    )
}

/// Canonical key of edge `edge` (0..=5) of the hex at `coord`.
///
/// Edge i spans corners i and (i + 1) % 6.
pub fn edge_key(coord: HexCoord, edge: u8) -> EdgeKey {
    EdgeKey::new(
        corner_key(coord, edge),
        corner_key(coord, (edge + 1) % 6),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_sum_to_zero() {
        for offset in CORNER_OFFSETS {
            assert_eq!(offset.q + offset.r + offset.s, 0);
        }
    }

    #[test]
    fn offsets_are_unique() {
        for i in 0..6 {
            for j in (i + 1)..6 {
                assert_ne!(CORNER_OFFSETS[i], CORNER_OFFSETS[j]);
            }
        }
    }

    #[test]
    fn opposite_corners_cancel() {
        // Corner i and corner (i + 3) % 6 are point reflections
        for i in 0..6 {
            let o = CORNER_OFFSETS[i];
            let opposite = CORNER_OFFSETS[(i + 3) % 6];
            assert_eq!((o.q + opposite.q, o.r + opposite.r, o.s + opposite.s), (0, 0, 0));
        }
    }

    #[test]
    fn corner_keys_stay_on_the_zero_plane() {
        let hexes = [
            HexCoord::ORIGIN,
            HexCoord::new(2, -1),
            HexCoord::new(-2, 2),
        ];
        for hex in hexes {
            for c in 0..6 {
                let key = corner_key(hex, c);
                assert_eq!(key.q + key.r + key.s, 0);
            }
        }
    }

    #[test]
    fn six_distinct_corners_per_hex() {
        let keys: Vec<_> = (0..6).map(|c| corner_key(HexCoord::new(1, 1), c)).collect();
        for i in 0..6 {
            for j in (i + 1)..6 {
                assert_ne!(keys[i], keys[j]);
            }
        }
    }

    /// Neighbors flanking each corner: corner c of a hex coincides with
    /// corner (c + 2) % 6 of the first flanking neighbor and corner
    /// (c + 4) % 6 of the second.
    const FLANKS: [(HexCoord, HexCoord); 6] = [
        (HexCoord::new(0, -1), HexCoord::new(1, -1)),  // N: NW, NE
        (HexCoord::new(1, -1), HexCoord::new(1, 0)),   // NE: NE, E
        (HexCoord::new(1, 0), HexCoord::new(0, 1)),    // SE: E, SE
        (HexCoord::new(0, 1), HexCoord::new(-1, 1)),   // S: SE, SW
        (HexCoord::new(-1, 1), HexCoord::new(-1, 0)),  // SW: SW, W
        (HexCoord::new(-1, 0), HexCoord::new(0, -1)),  // NW: W, NW
    ];

    #[test]
    fn coincident_corners_resolve_to_equal_keys() {
        let hexes = [
            HexCoord::ORIGIN,
            HexCoord::new(1, -2),
            HexCoord::new(-1, 1),
            HexCoord::new(2, 0),
        ];
        for hex in hexes {
            for c in 0..6u8 {
                let key = corner_key(hex, c);
                let (flank_a, flank_b) = FLANKS[c as usize];
                assert_eq!(key, corner_key(hex + flank_a, (c + 2) % 6));
                assert_eq!(key, corner_key(hex + flank_b, (c + 4) % 6));
            }
        }
    }

    #[test]
    fn edge_keys_agree_across_the_shared_edge() {
        // Edge i of a hex is edge (i + 3) % 6 of the neighbor it faces
        let hexes = [HexCoord::ORIGIN, HexCoord::new(-1, -1), HexCoord::new(0, 2)];
        for hex in hexes {
            for e in 0..6u8 {
                let neighbor = hex + EDGE_DIRECTIONS[e as usize];
                assert_eq!(edge_key(hex, e), edge_key(neighbor, (e + 3) % 6));
            }
        }
    }

    #[test]
    fn edge_key_is_order_independent() {
        let v1 = corner_key(HexCoord::ORIGIN, 0);
        let v2 = corner_key(HexCoord::ORIGIN, 1);
        assert_eq!(EdgeKey::new(v1, v2), EdgeKey::new(v2, v1));
    }

    #[test]
    fn edge_endpoints_are_sorted() {
        let v1 = corner_key(HexCoord::ORIGIN, 3);
        let v2 = corner_key(HexCoord::ORIGIN, 4);
        let (a, b) = EdgeKey::new(v1, v2).endpoints();
        assert!(a <= b);
        assert_eq!((a, b), EdgeKey::new(v2, v1).endpoints());
    }

    #[test]
    fn edge_directions_match_hex_directions() {
        // Every edge faces one of the six axial directions, each exactly once
        for dir in EDGE_DIRECTIONS {
            assert!(HexCoord::DIRECTIONS.contains(&dir));
        }
        for i in 0..6 {
            for j in (i + 1)..6 {
                assert_ne!(EDGE_DIRECTIONS[i], EDGE_DIRECTIONS[j]);
            }
        }
    }
}
