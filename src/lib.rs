//! # slide-puzzle
//!
//! A sliding-tile puzzle ("Game of Fifteen") engine for N×N boards.
//!
//! ## Design Principles
//!
//! 1. **Engine first**: the grid, move legality, shuffling, and win
//!    detection live in one cohesive component with no presentation state.
//!
//! 2. **Injected randomness**: shuffling draws from a [`RandomSource`]
//!    passed at construction, so a shuffle is reproducible under test and
//!    replayable from a seed.
//!
//! 3. **Swappable implementations over mocks**: the engine and the session
//!    clock sit behind traits ([`Puzzle`], [`session::GameClock`]); tests
//!    observe interactions through call-counting decorators instead of
//!    bespoke mock types.
//!
//! ## Architecture
//!
//! - **Total operations**: a move that cannot happen returns `None`, a
//!   solved check returns `bool`. The only fatal condition is constructing
//!   a board smaller than 2×2.
//!
//! - **Reachable-by-construction shuffle**: scrambling walks the blank cell
//!   through 150 legal slides, so every shuffled grid is solvable.
//!
//! ## Modules
//!
//! - `core`: tiles, positions, the board, random sources
//! - `engine`: the `Puzzle` contract, the real engine, test decorators
//! - `session`: move counting, timing, the new-game confirmation gate

pub mod core;
pub mod engine;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Board, ConstantSource, EntropySource, Position, RandomSource, ScriptedSource, SeededSource,
    Tile,
};

pub use crate::engine::{CountingPuzzle, Puzzle, PuzzleEngine, SHUFFLE_STEPS};

pub use crate::session::{
    CellModel, CountingClock, GameClock, GameSession, MoveFeedback, StartDecision, WallClock,
    DEFAULT_SIZE,
};
