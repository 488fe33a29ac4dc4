//! The fixed radius-2 game board.
//!
//! The board is a hexagon of hexes: one center, an inner ring of 6 and an
//! outer ring of 12. Hexes are numbered 0..18 row by row, top to bottom and
//! west to east, so the numbering is stable across every consumer of the
//! generated tables.

use crate::hex::HexCoord;
use crate::HEX_COUNT;

/// Identifier of one board hex: 0..=18 in row-major order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HexId(pub u8);

impl HexId {
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

impl From<u8> for HexId {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl From<HexId> for u8 {
    fn from(value: HexId) -> Self {
        value.0
    }
}

/// Axial coordinates of the 19 board hexes in row-major order.
pub const BOARD_COORDS: [HexCoord; HEX_COUNT] = [
    // Row 0: hexes 0-2
    HexCoord::new(0, -2),
    HexCoord::new(1, -2),
    HexCoord::new(2, -2),
    // Row 1: hexes 3-6
    HexCoord::new(-1, -1),
    HexCoord::new(0, -1),
    HexCoord::new(1, -1),
    HexCoord::new(2, -1),
    // Row 2: hexes 7-11
    HexCoord::new(-2, 0),
    HexCoord::new(-1, 0),
    HexCoord::new(0, 0),
    HexCoord::new(1, 0),
    HexCoord::new(2, 0),
    // Row 3: hexes 12-15
    HexCoord::new(-2, 1),
    HexCoord::new(-1, 1),
    HexCoord::new(0, 1),
    HexCoord::new(1, 1),
    // Row 4: hexes 16-18
    HexCoord::new(-2, 2),
    HexCoord::new(-1, 2),
    HexCoord::new(0, 2),
];

/// The fixed 19-hex board.
///
/// Defined once, read-only thereafter. All id assignment is derived from
/// the row-major coordinate list, so two independent runs (or independent
/// implementations traversing in the same order) number everything
/// identically.
#[derive(Debug, Clone)]
pub struct Board {
    coords: [HexCoord; HEX_COUNT],
}

impl Board {
    /// The standard radius-2 layout.
    pub const fn standard() -> Self {
        Self {
            coords: BOARD_COORDS,
        }
    }

    /// Coordinate of a board hex.
    #[inline]
    pub fn coord(&self, hex: HexId) -> HexCoord {
        self.coords[hex.index()]
    }

    /// Look up the hex occupying a coordinate, if any.
    pub fn hex_id(&self, coord: HexCoord) -> Option<HexId> {
        self.coords
            .iter()
            .position(|&c| c == coord)
            .map(|i| HexId(i as u8))
    }

    /// All hex ids in traversal order.
    pub fn hexes() -> impl Iterator<Item = HexId> {
        (0..HEX_COUNT as u8).map(HexId)
    }

    /// On-board neighbors of a hex (3 to 6 of them, boundary hexes have
    /// fewer).
    pub fn neighbors(&self, hex: HexId) -> impl Iterator<Item = HexId> + '_ {
        self.coord(hex)
            .neighbors()
            .into_iter()
            .filter_map(|c| self.hex_id(c))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}
