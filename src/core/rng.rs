//! Seedable random source for formation allocation.
//!
//! Allocation shuffles must be reproducible in tests and replays, so the
//! board never reaches for a thread-local RNG. `BoardRng` wraps ChaCha8 and
//! records its seed and stream position so it can be checkpointed.
//!
//! ```
//! use tactics_board::core::BoardRng;
//!
//! let mut a = BoardRng::new(7);
//! let mut b = BoardRng::new(7);
//!
//! let mut xs = vec![1, 2, 3, 4, 5];
//! let mut ys = xs.clone();
//! a.shuffle(&mut xs);
//! b.shuffle(&mut ys);
//! assert_eq!(xs, ys);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Deterministic RNG used by random allocation.
#[derive(Clone, Debug)]
pub struct BoardRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl BoardRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from OS entropy.
    ///
    /// The chosen seed is still recorded, so the run can be reproduced from
    /// `state()`.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniformly permute a slice in place (Fisher-Yates).
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> BoardRngState {
        BoardRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &BoardRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serializable RNG checkpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}
