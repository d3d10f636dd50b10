//! Puzzle rules: move resolution and the shuffle walk.

use smallvec::SmallVec;

use crate::core::{Board, EntropySource, Position, RandomSource, Tile};

/// Number of blank-walk steps a shuffle performs, independent of board size.
pub const SHUFFLE_STEPS: usize = 150;

/// The puzzle engine contract.
///
/// Implementations are swappable behind this trait: the real
/// [`PuzzleEngine`], or a wrapper such as
/// [`CountingPuzzle`](super::CountingPuzzle) in tests.
///
/// ## Implementation Notes
///
/// - `try_move` mutates only on success; a rejected move leaves the grid
///   untouched
/// - `tiles` returns a detached snapshot, not a live view
/// - `shuffle` must leave the grid reachable from solved by legal slides
pub trait Puzzle {
    /// Side length of the board.
    fn size(&self) -> usize;

    /// Reset the grid to the solved order.
    fn arrange(&mut self);

    /// Scramble the grid with the blank-walk shuffle.
    fn shuffle(&mut self);

    /// Attempt to slide `tile` into the blank cell.
    ///
    /// Returns the tile's new position, or `None` when the tile is the
    /// blank, is not on the board, or is not orthogonally adjacent to the
    /// blank.
    fn try_move(&mut self, tile: Tile) -> Option<Position>;

    /// The cell currently holding `tile`, or `None` when absent.
    fn position_of(&self, tile: Tile) -> Option<Position>;

    /// Snapshot of every numbered tile with its position, row-major.
    fn tiles(&self) -> Vec<(Tile, Position)>;

    /// Check whether the grid is in the solved order.
    fn is_solved(&self) -> bool;
}

/// The sliding-tile puzzle engine.
///
/// Owns the board and a [`RandomSource`] for shuffling. The source is
/// injected so a shuffle can be reproduced exactly in tests; real games use
/// the entropy-backed default.
///
/// ```
/// use slide_puzzle::core::Tile;
/// use slide_puzzle::engine::{Puzzle, PuzzleEngine};
///
/// let mut game = PuzzleEngine::new(4);
/// assert!(game.is_solved());
///
/// // Tile 15 sits next to the blank corner and can slide into it.
/// assert!(game.try_move(Tile::new(15)).is_some());
/// assert!(!game.is_solved());
/// ```
#[derive(Clone, Debug)]
pub struct PuzzleEngine<R: RandomSource> {
    board: Board,
    source: R,
}

impl PuzzleEngine<EntropySource> {
    /// Create an engine with the entropy-backed random source.
    ///
    /// The board starts in solved order. Panics if `size` is less than 2.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self::with_source(size, EntropySource::new())
    }
}

impl<R: RandomSource> PuzzleEngine<R> {
    /// Create an engine with an injected random source.
    ///
    /// The board starts in solved order. Panics if `size` is less than 2.
    #[must_use]
    pub fn with_source(size: usize, source: R) -> Self {
        Self {
            board: Board::new(size),
            source,
        }
    }

    /// Read access to the underlying board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }
}

impl<R: RandomSource> Puzzle for PuzzleEngine<R> {
    fn size(&self) -> usize {
        self.board.size()
    }

    fn arrange(&mut self) {
        self.board.arrange();
    }

    /// Random walk of the blank from the solved state.
    ///
    /// Each step moves the blank to one of its in-bounds neighbors, drawn
    /// uniformly via `source.next() % candidates.len()`. The blank's
    /// previous cell is excluded from the candidates, so the walk never
    /// undoes its own last step. Every step is a legal slide, which keeps
    /// the result in the solved state's reachability class.
    fn shuffle(&mut self) {
        self.board.arrange();

        let size = self.board.size();
        let mut blank = Position::new(size - 1, size - 1);
        // No exclusion on the first step.
        let mut exclude: Option<Position> = None;

        for _ in 0..SHUFFLE_STEPS {
            let candidates: SmallVec<[Position; 4]> = blank
                .neighbors(size)
                .into_iter()
                .filter(|&pos| Some(pos) != exclude)
                .collect();

            // A corner keeps 1 candidate after exclusion, an edge 2, an
            // interior cell 3. Never empty.
            let draw = self.source.next() % candidates.len() as u64;
            let pick = candidates[draw as usize];

            self.board.swap(blank, pick);
            exclude = Some(blank);
            blank = pick;
        }
    }

    fn try_move(&mut self, tile: Tile) -> Option<Position> {
        if tile.is_empty() {
            return None;
        }
        let from = self.board.position_of(tile)?;

        // Check the neighbors in left, right, up, down order; at most one
        // can hold the blank.
        let to = from
            .neighbors(self.board.size())
            .into_iter()
            .find(|&pos| self.board.is_blank_at(pos))?;

        self.board.swap(from, to);
        Some(to)
    }

    fn position_of(&self, tile: Tile) -> Option<Position> {
        self.board.position_of(tile)
    }

    fn tiles(&self) -> Vec<(Tile, Position)> {
        self.board.tiles()
    }

    fn is_solved(&self) -> bool {
        self.board.is_solved()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ConstantSource, SeededSource};

    #[test]
    fn test_new_engine_is_arranged() {
        let game = PuzzleEngine::new(4);
        assert_eq!(game.size(), 4);
        assert!(game.is_solved());
    }

    #[test]
    #[should_panic(expected = "Board side must be at least 2")]
    fn test_rejects_tiny_board() {
        let _ = PuzzleEngine::new(1);
    }

    #[test]
    fn test_try_move_rejects_blank() {
        let mut game = PuzzleEngine::new(4);
        assert_eq!(game.try_move(Tile::EMPTY), None);
        assert!(game.is_solved());
    }

    #[test]
    fn test_try_move_rejects_unknown_tile() {
        let mut game = PuzzleEngine::new(4);
        assert_eq!(game.try_move(Tile::new(17)), None);
        assert!(game.is_solved());
    }

    #[test]
    fn test_try_move_adjacent_tile() {
        let mut game = PuzzleEngine::new(4);

        // Tile 12 sits above the blank corner.
        let new_pos = game.try_move(Tile::new(12));
        assert_eq!(new_pos, Some(Position::new(3, 3)));

        // The blank took the tile's old cell.
        assert_eq!(game.position_of(Tile::EMPTY), Some(Position::new(2, 3)));
    }

    #[test]
    fn test_shuffle_changes_grid() {
        let mut game = PuzzleEngine::with_source(4, ConstantSource::new(5));
        game.shuffle();
        assert!(!game.is_solved());
    }

    #[test]
    fn test_shuffle_preserves_tile_set() {
        for size in 2..=6 {
            let mut game = PuzzleEngine::with_source(size, SeededSource::new(7));
            game.shuffle();

            let mut ids: Vec<u32> = game.tiles().iter().map(|(t, _)| t.raw()).collect();
            ids.sort_unstable();
            let expected: Vec<u32> = (1..(size * size) as u32).collect();
            assert_eq!(ids, expected);
        }
    }

    #[test]
    fn test_shuffle_is_deterministic_with_seeded_source() {
        let mut a = PuzzleEngine::with_source(4, SeededSource::new(42));
        let mut b = PuzzleEngine::with_source(4, SeededSource::new(42));

        a.shuffle();
        b.shuffle();

        assert_eq!(a.tiles(), b.tiles());
    }

    #[test]
    fn test_shuffle_is_deterministic_with_constant_source() {
        let mut a = PuzzleEngine::with_source(4, ConstantSource::new(3));
        let mut b = PuzzleEngine::with_source(4, ConstantSource::new(3));

        a.shuffle();
        b.shuffle();

        assert_eq!(a.tiles(), b.tiles());
    }

    #[test]
    fn test_arrange_after_shuffle() {
        let mut game = PuzzleEngine::with_source(4, SeededSource::new(9));
        game.shuffle();
        assert!(!game.is_solved());

        game.arrange();
        assert!(game.is_solved());
    }

    #[test]
    fn test_shuffle_on_2x2_board() {
        // The smallest board exercises the corner-only walk: after the
        // first step every position leaves exactly one candidate.
        let mut game = PuzzleEngine::with_source(2, SeededSource::new(1));
        game.shuffle();

        let mut ids: Vec<u32> = game.tiles().iter().map(|(t, _)| t.raw()).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
