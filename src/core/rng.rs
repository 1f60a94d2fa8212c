//! Deterministic random number generation for self-play.
//!
//! A `GameRng` is created once per dataset run and passed explicitly to
//! every function that consumes randomness. There is no global generator,
//! so the same seed and the same call order always replay the same games.
//!
//! ```
//! use hex_graph::core::GameRng;
//!
//! let mut a = GameRng::new(7);
//! let mut b = GameRng::new(7);
//!
//! assert_eq!(a.gen_range_usize(0..100), b.gen_range_usize(0..100));
//! assert_eq!(a.gen_bool(0.5), b.gen_bool(0.5));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// The single random stream of one self-play run.
///
/// Every game of a run draws from the same generator in order: one opener
/// flip per game, then one move index per ply.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Start the stream for a run seeded with `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed of the run, as recorded in the dataset.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draw an index uniformly from `range`.
    ///
    /// Self-play calls this once per ply with `0..legal_moves.len()`.
    /// Panics on an empty range, like `rand::Rng::gen_range`.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Draw `true` with `probability`.
    ///
    /// Used at 0.5 to pick which side opens each game.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability)
    }

    /// Pick a uniformly random element.
    ///
    /// Draws one index with `gen_range_usize`, so it consumes the stream
    /// exactly like an explicit index draw. Returns `None` without consuming
    /// anything when the slice is empty.
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        if slice.is_empty() {
            return None;
        }
        let index = self.gen_range_usize(0..slice.len());
        slice.get(index)
    }

    /// Position in the stream, so a long run can stop between games and
    /// continue later with the same draws.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Resume the stream at a position taken with [`GameRng::state`].
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

/// Where a run's stream stands: its seed and how many words were consumed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    pub seed: u64,
    pub word_pos: u128,
}
