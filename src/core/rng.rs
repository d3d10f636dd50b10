//! Random value sources for the shuffle walk.
//!
//! ## Key Features
//!
//! - **Injected**: the engine takes a [`RandomSource`] at construction, so
//!   shuffling is deterministic under test
//! - **Minimal contract**: a source yields non-negative integers with no
//!   range guarantee; consumers reduce with modulo
//! - **Deterministic variants**: [`SeededSource`] reproduces a shuffle from
//!   a seed, [`ConstantSource`] and [`ScriptedSource`] script it exactly
//!
//! ## Usage
//!
//! ```
//! use slide_puzzle::core::{RandomSource, SeededSource};
//!
//! let mut a = SeededSource::new(42);
//! let mut b = SeededSource::new(42);
//! assert_eq!(a.next(), b.next());
//! ```

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Capability to produce non-negative integers on demand.
///
/// No ordering or bounds contract beyond non-negativity (guaranteed by the
/// unsigned return type). Callers that need a bounded draw apply modulo.
pub trait RandomSource {
    /// Produce the next value.
    fn next(&mut self) -> u64;
}

/// System-entropy-backed source, the default for real games.
///
/// Uses ChaCha8 seeded from OS entropy, matching the deterministic variants
/// in output quality.
#[derive(Clone, Debug)]
pub struct EntropySource {
    inner: ChaCha8Rng,
}

impl EntropySource {
    /// Create a source seeded from OS entropy.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: ChaCha8Rng::from_entropy(),
        }
    }
}

impl Default for EntropySource {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for EntropySource {
    fn next(&mut self) -> u64 {
        self.inner.next_u64()
    }
}

/// Deterministic source: the same seed produces the identical sequence.
///
/// Uses ChaCha8 for speed while keeping cryptographic-quality output.
#[derive(Clone, Debug)]
pub struct SeededSource {
    inner: ChaCha8Rng,
}

impl SeededSource {
    /// Create a source with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededSource {
    fn next(&mut self) -> u64 {
        self.inner.next_u64()
    }
}

/// Test double that returns the same value on every call.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConstantSource(pub u64);

impl ConstantSource {
    /// Create a source that always yields `value`.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }
}

impl RandomSource for ConstantSource {
    fn next(&mut self) -> u64 {
        self.0
    }
}

/// Test double that cycles through a scripted sequence of values.
#[derive(Clone, Debug)]
pub struct ScriptedSource {
    values: Vec<u64>,
    cursor: usize,
}

impl ScriptedSource {
    /// Create a source that replays `values` in order, wrapping around.
    ///
    /// Panics if `values` is empty.
    #[must_use]
    pub fn new(values: Vec<u64>) -> Self {
        assert!(!values.is_empty(), "Script must contain at least one value");
        Self { values, cursor: 0 }
    }
}

impl RandomSource for ScriptedSource {
    fn next(&mut self) -> u64 {
        let value = self.values[self.cursor];
        self.cursor = (self.cursor + 1) % self.values.len();
        value
    }
}
