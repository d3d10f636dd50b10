//! Headless game session: the controller around the puzzle engine.
//!
//! Owns the concerns the engine does not: move counting, elapsed-time
//! tracking, the new-game confirmation gate, and the feedback events a
//! presentation layer reacts to.

pub mod clock;
pub mod game;

pub use clock::{format_hms, CountingClock, GameClock, WallClock};
pub use game::{CellModel, GameSession, MoveFeedback, StartDecision, DEFAULT_SIZE};
