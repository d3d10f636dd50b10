//! Call-counting engine decorator.
//!
//! Wraps any [`Puzzle`] implementation and records how many times `shuffle`
//! is called. Session tests use it to assert on engine interactions without
//! a bespoke mock type; suppressing the wrapped shuffle keeps the grid in a
//! known state for assertions.

use crate::core::{Position, Tile};

use super::puzzle::Puzzle;

/// Decorator that counts `shuffle` calls on the wrapped engine.
///
/// ```
/// use slide_puzzle::core::SeededSource;
/// use slide_puzzle::engine::{CountingPuzzle, Puzzle, PuzzleEngine};
///
/// let inner = PuzzleEngine::with_source(4, SeededSource::new(42));
/// let mut game = CountingPuzzle::new(inner);
///
/// game.shuffle();
/// assert_eq!(game.shuffle_calls(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct CountingPuzzle<P: Puzzle> {
    inner: P,
    shuffle_calls: u32,
    suppress_shuffle: bool,
}

impl<P: Puzzle> CountingPuzzle<P> {
    /// Wrap an engine.
    #[must_use]
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            shuffle_calls: 0,
            suppress_shuffle: false,
        }
    }

    /// Number of `shuffle` calls observed so far.
    #[must_use]
    pub fn shuffle_calls(&self) -> u32 {
        self.shuffle_calls
    }

    /// When set, `shuffle` is counted but not forwarded to the wrapped
    /// engine, leaving the grid untouched.
    pub fn set_suppress_shuffle(&mut self, suppress: bool) {
        self.suppress_shuffle = suppress;
    }

    /// Read access to the wrapped engine.
    #[must_use]
    pub fn inner(&self) -> &P {
        &self.inner
    }

    /// Unwrap, discarding the counters.
    #[must_use]
    pub fn into_inner(self) -> P {
        self.inner
    }
}

impl<P: Puzzle> Puzzle for CountingPuzzle<P> {
    fn size(&self) -> usize {
        self.inner.size()
    }

    fn arrange(&mut self) {
        self.inner.arrange();
    }

    fn shuffle(&mut self) {
        self.shuffle_calls += 1;
        if !self.suppress_shuffle {
            self.inner.shuffle();
        }
    }

    fn try_move(&mut self, tile: Tile) -> Option<Position> {
        self.inner.try_move(tile)
    }

    fn position_of(&self, tile: Tile) -> Option<Position> {
        self.inner.position_of(tile)
    }

    fn tiles(&self) -> Vec<(Tile, Position)> {
        self.inner.tiles()
    }

    fn is_solved(&self) -> bool {
        self.inner.is_solved()
    }
}
