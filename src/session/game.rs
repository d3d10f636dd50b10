//! Headless game session: move counting, timing, the new-game gate.
//!
//! The session drives a [`Puzzle`] engine and a [`GameClock`] on behalf of
//! a presentation layer. It owns everything the engine does not: the move
//! counter, the solved banner, the confirmation gate before discarding a
//! game in progress, and the feedback events emitted around moves.
//!
//! Rendering, input devices, and haptic hardware stay outside; the session
//! reports [`MoveFeedback`] synchronously and lets the caller schedule any
//! animation delay before delivering it.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::{EntropySource, Position, Tile};
use crate::engine::{Puzzle, PuzzleEngine};

use super::clock::{format_hms, GameClock, WallClock};

/// Default board side for a standard Game of Fifteen.
pub const DEFAULT_SIZE: usize = 4;

/// One displayed cell: a tile, its label, and its current position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellModel {
    /// The tile this cell shows.
    pub tile: Tile,
    /// Display label, the tile number as text.
    pub label: String,
    /// Current position on the board.
    pub position: Position,
}

/// Feedback event produced by a successful move.
///
/// The presentation layer maps these to haptics/animation: `Impact` for an
/// ordinary slide, `Solved` for the finishing move. Delivery timing is the
/// caller's concern; a UI typically holds both until its slide animation
/// completes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveFeedback {
    /// A tile slid into the blank; the game continues.
    Impact,
    /// The slide completed the puzzle.
    Solved,
}

/// Outcome of a start request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StartDecision {
    /// A new game was started immediately.
    Started,
    /// A game is in progress; the caller must confirm before restarting.
    ConfirmationRequired,
}

/// Session state around one puzzle engine and one clock.
///
/// ```
/// use slide_puzzle::core::{SeededSource, Tile};
/// use slide_puzzle::engine::PuzzleEngine;
/// use slide_puzzle::session::{GameSession, MoveFeedback, WallClock};
///
/// let engine = PuzzleEngine::with_source(4, SeededSource::new(42));
/// let mut session = GameSession::new(engine, WallClock::new());
///
/// // From the solved start, tile 15 can slide into the blank corner.
/// assert_eq!(session.tap_tile(Tile::new(15)), Some(MoveFeedback::Impact));
/// assert_eq!(session.move_count(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct GameSession<P: Puzzle, C: GameClock> {
    engine: P,
    clock: C,
    cells: Vec<CellModel>,
    move_count: u32,
    solved_time_visible: bool,
    confirmation_pending: bool,
}

impl GameSession<PuzzleEngine<EntropySource>, WallClock> {
    /// Standard configuration: 4×4 board, entropy RNG, wall clock.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(PuzzleEngine::new(DEFAULT_SIZE), WallClock::new())
    }
}

impl<P: Puzzle, C: GameClock> GameSession<P, C> {
    /// Create a session over an engine and a clock.
    ///
    /// The engine arrives arranged; the session starts with zero moves, a
    /// stopped clock, and the cell list reflecting the engine's grid.
    #[must_use]
    pub fn new(engine: P, clock: C) -> Self {
        let mut session = Self {
            engine,
            clock,
            cells: Vec::new(),
            move_count: 0,
            solved_time_visible: false,
            confirmation_pending: false,
        };
        session.refresh_cells();
        session
    }

    /// Side length of the board.
    #[must_use]
    pub fn size(&self) -> usize {
        self.engine.size()
    }

    /// Current cell list, one entry per numbered tile.
    ///
    /// Refreshed after every successful move and every new game.
    #[must_use]
    pub fn cells(&self) -> &[CellModel] {
        &self.cells
    }

    /// Successful moves since the last new game.
    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Whether the finishing time should be highlighted (puzzle solved).
    #[must_use]
    pub fn solved_time_visible(&self) -> bool {
        self.solved_time_visible
    }

    /// Whether a start request is waiting on user confirmation.
    #[must_use]
    pub fn confirmation_pending(&self) -> bool {
        self.confirmation_pending
    }

    /// The clock reading.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.clock.elapsed()
    }

    /// The clock reading rendered as `HH:MM:SS`.
    #[must_use]
    pub fn elapsed_label(&self) -> String {
        format_hms(self.clock.elapsed())
    }

    /// Read access to the engine.
    #[must_use]
    pub fn engine(&self) -> &P {
        &self.engine
    }

    /// Read access to the clock.
    #[must_use]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Handle a start ("new game") request.
    ///
    /// Discarding a game in progress needs confirmation: when moves have
    /// been made and the puzzle is unsolved, this arms the confirmation
    /// gate and changes nothing else. Otherwise a new game starts at once.
    pub fn request_start(&mut self) -> StartDecision {
        if self.move_count > 0 && !self.engine.is_solved() {
            self.confirmation_pending = true;
            StartDecision::ConfirmationRequired
        } else {
            self.start_new_game();
            StartDecision::Started
        }
    }

    /// Confirm a pending start request and begin a new game.
    pub fn confirm_start(&mut self) {
        self.confirmation_pending = false;
        self.start_new_game();
    }

    /// Dismiss a pending start request, keeping the game in progress.
    pub fn decline_start(&mut self) {
        self.confirmation_pending = false;
    }

    /// Handle a tap on `tile`.
    ///
    /// A rejected move (blank, unknown, or non-adjacent tile) returns
    /// `None` and changes nothing. A successful move refreshes the cell
    /// list, increments the move counter, and reports feedback; the
    /// finishing move also freezes the clock and shows the solved time.
    pub fn tap_tile(&mut self, tile: Tile) -> Option<MoveFeedback> {
        self.engine.try_move(tile)?;

        self.refresh_cells();
        self.move_count += 1;

        if self.engine.is_solved() {
            self.solved_time_visible = true;
            self.clock.stop();
            Some(MoveFeedback::Solved)
        } else {
            Some(MoveFeedback::Impact)
        }
    }

    fn start_new_game(&mut self) {
        self.engine.shuffle();

        self.move_count = 0;
        self.solved_time_visible = false;

        if self.clock.is_running() {
            self.clock.stop();
        }
        self.clock.start();

        self.refresh_cells();
    }

    fn refresh_cells(&mut self) {
        self.cells = self
            .engine
            .tiles()
            .into_iter()
            .map(|(tile, position)| CellModel {
                tile,
                label: tile.raw().to_string(),
                position,
            })
            .collect();
    }
}
