//! Board state: the N×N cell grid.
//!
//! The board owns a flat row-major sequence of N² cells. Exactly one cell
//! is blank ([`Tile::EMPTY`]); the rest hold the numbered tiles `1..N²-1`.
//!
//! The board only exposes invariant-preserving mutation: [`Board::arrange`]
//! rewrites the whole grid to the solved order, [`Board::swap`] exchanges
//! two cells. Either way the cell multiset stays `{0, 1, ..., N²-1}`.

use serde::{Deserialize, Serialize};

use super::position::Position;
use super::tile::Tile;

/// The N×N cell grid, row-major.
///
/// ## Solved order
///
/// Tile ids ascend row-major with the blank in the bottom-right corner:
/// `[1, 2, ..., N²-1, EMPTY]`.
///
/// ```
/// use slide_puzzle::core::{Board, Position, Tile};
///
/// let board = Board::new(4);
/// assert!(board.is_solved());
/// assert_eq!(board.tile_at(Position::new(0, 0)), Tile::new(1));
/// assert_eq!(board.tile_at(Position::new(3, 3)), Tile::EMPTY);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vec<Tile>,
}

impl Board {
    /// Create a board in solved order.
    ///
    /// Panics if `size` is less than 2: a smaller grid has no legal moves
    /// and no tile to slide.
    #[must_use]
    pub fn new(size: usize) -> Self {
        assert!(size > 1, "Board side must be at least 2");

        let mut board = Self {
            size,
            cells: vec![Tile::EMPTY; size * size],
        };
        board.arrange();
        board
    }

    /// Side length of the board.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells (N²).
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Reset every cell to the solved order.
    pub fn arrange(&mut self) {
        self.cells = Self::solved_cells(self.size);
    }

    /// The tile currently at `position`.
    ///
    /// Panics on an out-of-bounds position; callers work with positions
    /// produced by [`Position::neighbors`] or [`Board::position_of`], which
    /// are always in bounds.
    #[must_use]
    pub fn tile_at(&self, position: Position) -> Tile {
        self.cells[position.index(self.size)]
    }

    /// Check whether the blank currently sits at `position`.
    ///
    /// Out-of-bounds positions hold no blank.
    #[must_use]
    pub fn is_blank_at(&self, position: Position) -> bool {
        position.in_bounds(self.size) && self.tile_at(position).is_empty()
    }

    /// Find the cell holding `tile`.
    ///
    /// Returns `None` when the tile is not on this board (out of range for
    /// this size, or from a differently-sized game). The blank is a cell
    /// value like any other, so `position_of(Tile::EMPTY)` yields the
    /// blank's position.
    #[must_use]
    pub fn position_of(&self, tile: Tile) -> Option<Position> {
        self.cells
            .iter()
            .position(|&cell| cell == tile)
            .map(|index| Position::from_index(index, self.size))
    }

    /// Exchange the contents of two cells.
    pub fn swap(&mut self, a: Position, b: Position) {
        self.cells.swap(a.index(self.size), b.index(self.size));
    }

    /// Snapshot of every numbered tile with its current position.
    ///
    /// One entry per non-blank cell (N²-1 entries), in row-major scan order
    /// over the grid. The snapshot is detached from the board; later moves
    /// do not affect it.
    #[must_use]
    pub fn tiles(&self) -> Vec<(Tile, Position)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, tile)| !tile.is_empty())
            .map(|(index, &tile)| (tile, Position::from_index(index, self.size)))
            .collect()
    }

    /// Check whether the grid equals the solved order exactly.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.cells == Self::solved_cells(self.size)
    }

    fn solved_cells(size: usize) -> Vec<Tile> {
        let count = size * size;
        (1..count as u32)
            .map(Tile::new)
            .chain(std::iter::once(Tile::EMPTY))
            .collect()
    }
}
