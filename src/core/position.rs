//! Board coordinates and neighbor geometry.
//!
//! A `Position` is a (row, column) pair on an N×N board, both 0-based.
//! Positions convert to and from linear row-major indices, and enumerate
//! their in-bounds orthogonal neighbors in a fixed scan order.
//!
//! ## Usage
//!
//! ```
//! use slide_puzzle::core::Position;
//!
//! let pos = Position::from_index(9, 4);
//! assert_eq!(pos, Position::new(2, 1));
//! assert_eq!(pos.index(4), 9);
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A cell coordinate on the board: `row` and `col`, each in `0..N`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Row index, 0-based from the top.
    pub row: usize,
    /// Column index, 0-based from the left.
    pub col: usize,
}

impl Position {
    /// Create a position from row and column.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Derive a position from a linear row-major index.
    ///
    /// Inverse of [`Position::index`].
    #[must_use]
    pub const fn from_index(index: usize, size: usize) -> Self {
        Self {
            row: index / size,
            col: index % size,
        }
    }

    /// Convert back to a linear row-major index.
    #[must_use]
    pub const fn index(self, size: usize) -> usize {
        self.row * size + self.col
    }

    /// Check whether this position lies on an N×N board.
    #[must_use]
    pub const fn in_bounds(self, size: usize) -> bool {
        self.row < size && self.col < size
    }

    /// In-bounds orthogonal neighbors, in left, right, up, down order.
    ///
    /// A corner has two neighbors, an edge cell three, an interior cell
    /// four. The order is fixed: move resolution and the shuffle walk both
    /// index into this list.
    ///
    /// SmallVec keeps the at-most-4 candidates off the heap.
    #[must_use]
    pub fn neighbors(self, size: usize) -> SmallVec<[Position; 4]> {
        let mut out = SmallVec::new();
        if self.col > 0 {
            out.push(Position::new(self.row, self.col - 1));
        }
        if self.col + 1 < size {
            out.push(Position::new(self.row, self.col + 1));
        }
        if self.row > 0 {
            out.push(Position::new(self.row - 1, self.col));
        }
        if self.row + 1 < size {
            out.push(Position::new(self.row + 1, self.col));
        }
        out
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        let size = 4;
        for index in 0..size * size {
            let pos = Position::from_index(index, size);
            assert_eq!(pos.index(size), index);
        }
    }

    #[test]
    fn test_from_index() {
        assert_eq!(Position::from_index(0, 4), Position::new(0, 0));
        assert_eq!(Position::from_index(3, 4), Position::new(0, 3));
        assert_eq!(Position::from_index(9, 4), Position::new(2, 1));
        assert_eq!(Position::from_index(15, 4), Position::new(3, 3));
    }

    #[test]
    fn test_in_bounds() {
        assert!(Position::new(0, 0).in_bounds(4));
        assert!(Position::new(3, 3).in_bounds(4));
        assert!(!Position::new(4, 0).in_bounds(4));
        assert!(!Position::new(0, 4).in_bounds(4));
        assert!(!Position::new(4, 4).in_bounds(4));
    }

    #[test]
    fn test_corner_neighbors() {
        // Top-left corner: only right and down exist.
        let neighbors = Position::new(0, 0).neighbors(4);
        assert_eq!(neighbors.as_slice(), &[Position::new(0, 1), Position::new(1, 0)]);

        // Bottom-right corner: only left and up exist.
        let neighbors = Position::new(3, 3).neighbors(4);
        assert_eq!(neighbors.as_slice(), &[Position::new(3, 2), Position::new(2, 3)]);
    }

    #[test]
    fn test_edge_neighbors() {
        // Top edge: left, right, down.
        let neighbors = Position::new(0, 2).neighbors(4);
        assert_eq!(
            neighbors.as_slice(),
            &[
                Position::new(0, 1),
                Position::new(0, 3),
                Position::new(1, 2),
            ]
        );
    }

    #[test]
    fn test_interior_neighbors_order() {
        // Interior cell: left, right, up, down, in that order.
        let neighbors = Position::new(2, 1).neighbors(4);
        assert_eq!(
            neighbors.as_slice(),
            &[
                Position::new(2, 0),
                Position::new(2, 2),
                Position::new(1, 1),
                Position::new(3, 1),
            ]
        );
    }

    #[test]
    fn test_neighbors_2x2() {
        // Every cell of a 2x2 board is a corner.
        for index in 0..4 {
            let pos = Position::from_index(index, 2);
            assert_eq!(pos.neighbors(2).len(), 2);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Position::new(2, 3)), "(2, 3)");
    }

    #[test]
    fn test_serialization() {
        let pos = Position::new(1, 2);
        let json = serde_json::to_string(&pos).unwrap();
        let deserialized: Position = serde_json::from_str(&json).unwrap();
        assert_eq!(pos, deserialized);
    }
}
