//! Tile identification.
//!
//! Every cell on the board holds a `Tile` value. `Tile::EMPTY` marks the
//! blank cell; every other value is a numbered piece.
//!
//! ## ID Layout
//!
//! On an N×N board the valid values are:
//! - `Tile::EMPTY` (0): the blank cell, exactly one per board
//! - `1..=N²-1`: numbered pieces, each appearing exactly once
//!
//! ## Usage
//!
//! ```
//! use slide_puzzle::core::Tile;
//!
//! let tile = Tile::new(15);
//! assert!(!tile.is_empty());
//! assert_eq!(tile.raw(), 15);
//!
//! assert!(Tile::EMPTY.is_empty());
//! ```

use serde::{Deserialize, Serialize};

/// A single cell value: either a numbered piece or the blank.
///
/// Tiles are plain identifiers. The board owns placement; a `Tile` carries
/// no positional information of its own.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile(pub u32);

impl Tile {
    /// The blank cell.
    pub const EMPTY: Tile = Tile(0);

    /// Create a tile with the given id.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Check whether this is the blank cell.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == Self::EMPTY.0
    }

    /// Get the raw id value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for Tile {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            write!(f, "Tile(empty)")
        } else {
            write!(f, "Tile({})", self.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_tile() {
        assert!(Tile::EMPTY.is_empty());
        assert_eq!(Tile::EMPTY.raw(), 0);
        assert_eq!(Tile::new(0), Tile::EMPTY);
    }

    #[test]
    fn test_numbered_tiles() {
        for id in 1..=15 {
            let tile = Tile::new(id);
            assert!(!tile.is_empty());
            assert_eq!(tile.raw(), id);
        }
    }

    #[test]
    fn test_from_u32() {
        let tile: Tile = 7.into();
        assert_eq!(tile, Tile::new(7));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Tile::new(42)), "Tile(42)");
        assert_eq!(format!("{}", Tile::EMPTY), "Tile(empty)");
    }

    #[test]
    fn test_serialization() {
        let tile = Tile::new(12);
        let json = serde_json::to_string(&tile).unwrap();
        let deserialized: Tile = serde_json::from_str(&json).unwrap();
        assert_eq!(tile, deserialized);
    }
}
