//! Deterministic random number generation for seeded, replayable sessions.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical sequence
//! - **Replayable**: The active seed is always readable, so even a session
//!   seeded from entropy can be logged and reproduced
//!
//! ## Usage
//!
//! ```
//! use liars_dice::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! let mut replay = GameRng::new(rng.seed());
//!
//! assert_eq!(rng.gen_range_usize(0..100), replay.gen_range_usize(0..100));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG for die rolls and starting-player draws.
///
/// Uses ChaCha8 for speed while maintaining cryptographic quality randomness.
/// The seed is recorded at construction so any session can be replayed.
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

    /// Create a new RNG seeded from system entropy.
    ///
    /// The chosen seed is readable through `seed()`, so the session can
    /// still be replayed.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Get the seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }
}
