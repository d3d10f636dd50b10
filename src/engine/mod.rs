//! Puzzle rules: the engine contract, the real engine, test decorators.
//!
//! The [`Puzzle`] trait is the seam between game logic and its consumers.
//! [`PuzzleEngine`] is the real implementation; [`CountingPuzzle`] wraps any
//! implementation to observe calls in tests.

pub mod counting;
pub mod puzzle;

pub use counting::CountingPuzzle;
pub use puzzle::{Puzzle, PuzzleEngine, SHUFFLE_STEPS};
