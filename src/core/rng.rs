//! Random number generation for deck shuffles and luck rolls.
//!
//! ## Key Features
//!
//! - **Single primitive**: the engine only ever asks a [`RandomSource`] for a
//!   uniform value in `[0, 1)`
//! - **Deterministic**: [`GameRng`] is seeded, so the same seed and the same
//!   actions replay the same game
//! - **Forkable**: a restarted game continues from a fork of the old stream
//! - **Serializable**: O(1) state capture and restore
//!
//! ## Usage
//!
//! ```
//! use kingdoms_ccg::core::{fisher_yates, GameRng, RandomSource};
//!
//! let mut rng = GameRng::new(42);
//! let roll = rng.next_unit();
//! assert!((0.0..1.0).contains(&roll));
//!
//! let mut cards: im::Vector<u32> = (1..=5).collect();
//! fisher_yates(&mut cards, &mut rng);
//! cards.sort();
//! assert_eq!(cards, (1..=5).collect::<im::Vector<u32>>());
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Source of uniform random values in `[0, 1)`.
///
/// Shuffling and the combat luck factor are written against this trait
/// alone, so hosts and tests can substitute their own source.
pub trait RandomSource {
    /// Next uniform value in `[0, 1)`.
    fn next_unit(&mut self) -> f64;

    /// Uniform index in `0..bound`. `bound` must be non-zero.
    fn next_index(&mut self, bound: usize) -> usize {
        // Clamp guards against a source that returns exactly 1.0.
        ((self.next_unit() * bound as f64) as usize).min(bound - 1)
    }
}

/// Shuffle `items` in place with a uniform Fisher–Yates pass.
///
/// Written against [`RandomSource`] rather than `SliceRandom` so a scripted
/// source drives the permutation too.
pub fn fisher_yates<T: Clone>(items: &mut im::Vector<T>, rng: &mut dyn RandomSource) {
    for i in (1..items.len()).rev() {
        let j = rng.next_index(i + 1);
        items.swap(i, j);
    }
}

/// Deterministic RNG backing every game.
///
/// Uses ChaCha8 for speed while keeping good statistical quality.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// The seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG to create an independent but deterministic stream.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self::new(fork_seed)
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            fork_counter: self.fork_counter,
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
            fork_counter: state.fork_counter,
        }
    }
}

impl RandomSource for GameRng {
    fn next_unit(&mut self) -> f64 {
        self.inner.gen::<f64>()
    }
}

// Games serialize their RNG as a compact `GameRngState`.
impl Serialize for GameRng {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.state().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for GameRng {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        GameRngState::deserialize(deserializer).map(|state| Self::from_state(&state))
    }
}

impl PartialEq for GameRng {
    fn eq(&self, other: &Self) -> bool {
        self.state() == other.state()
    }
}

/// Serializable RNG state for checkpointing.
///
/// Uses the ChaCha8 word position, so capture is O(1) no matter how many
/// values have been drawn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
    /// Fork counter for deterministic branching
    pub fork_counter: u64,
}
