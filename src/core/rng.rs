//! Deterministic random number generation for tile spawning.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical spawn sequences
//! - **Serializable**: O(1) state capture and restore
//! - **Injectable**: The engine only sees the `TileRng` trait
//!
//! ## Usage
//!
//! ```
//! use rust_2048::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! let checkpoint = rng.state();
//!
//! // A restored checkpoint replays the same draws
//! let a: Vec<_> = (0..8).map(|_| rng.gen_range_usize(0..1000)).collect();
//! let mut replay = GameRng::from_state(&checkpoint);
//! let b: Vec<_> = (0..8).map(|_| replay.gen_range_usize(0..1000)).collect();
//! assert_eq!(a, b);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Source of randomness consumed by tile spawning.
///
/// The grid engine never owns a random generator. Callers pass one in, so
/// tests can substitute a scripted source and replay exact sequences.
pub trait TileRng {
    /// Uniform index in `0..upper`. `upper` is always non-zero.
    fn pick_index(&mut self, upper: usize) -> usize;

    /// `true` with the given probability.
    fn pick_bool(&mut self, probability: f64) -> bool;
}

impl<R: TileRng + ?Sized> TileRng for &mut R {
    fn pick_index(&mut self, upper: usize) -> usize {
        (**self).pick_index(upper)
    }

    fn pick_bool(&mut self, probability: f64) -> bool {
        (**self).pick_bool(probability)
    }
}

/// Deterministic spawn RNG.
///
/// Uses ChaCha8 for speed while keeping good statistical quality.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Generate a random boolean with given probability of true.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability)
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl TileRng for GameRng {
    fn pick_index(&mut self, upper: usize) -> usize {
        self.gen_range_usize(0..upper)
    }

    fn pick_bool(&mut self, probability: f64) -> bool {
        self.gen_bool(probability)
    }
}

/// Serializable RNG state for checkpointing.
///
/// Uses the ChaCha8 word position, so capture and restore cost the same
/// no matter how many tiles have been spawned.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}
