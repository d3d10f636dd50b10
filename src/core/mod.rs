//! Core puzzle types: tiles, positions, the board, random sources.
//!
//! This module contains the fundamental building blocks. The move and
//! shuffle rules live in `engine`; everything here is plain state.

pub mod board;
pub mod position;
pub mod rng;
pub mod tile;

pub use board::Board;
pub use position::Position;
pub use rng::{ConstantSource, EntropySource, RandomSource, ScriptedSource, SeededSource};
pub use tile::Tile;
