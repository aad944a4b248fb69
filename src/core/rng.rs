//! Deterministic random number generation for deck shuffling.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical deal order
//! - **Unbiased**: Fisher–Yates over a uniform ChaCha8 stream
//! - **Continuing**: Restarting a session keeps drawing from the same
//!   stream, so each restart deals a fresh order
//!
//! ```
//! use pair_match::core::GameRng;
//!
//! let mut a = GameRng::new(7);
//! let mut b = GameRng::new(7);
//!
//! let mut left = vec![1, 2, 3, 4, 5, 6];
//! let mut right = left.clone();
//! a.shuffle(&mut left);
//! b.shuffle(&mut right);
//!
//! assert_eq!(left, right);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seeded RNG driving the shuffle engine.
///
/// Uses ChaCha8 for speed while keeping the output uniform enough that
/// every permutation of the deck is equally likely.
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

    /// The seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Pick a uniform index in `0..=upper`.
    pub fn gen_index_inclusive(&mut self, upper: usize) -> usize {
        self.inner.gen_range(0..=upper)
    }

    /// Shuffle a slice in place (Fisher–Yates).
    ///
    /// Walks from the last index down to 1, swapping each slot with a
    /// uniformly chosen slot in `[0, i]`. Empty and single-element slices
    /// are left untouched.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        let len = slice.len();
        self.shuffle_with(len, |i, j| slice.swap(i, j));
    }

    /// Fisher–Yates over any indexable container of length `len`.
    ///
    /// `swap(i, j)` is called once per step; containers that cannot hand
    /// out a slice (persistent vectors) shuffle through this.
    pub fn shuffle_with<F>(&mut self, len: usize, mut swap: F)
    where
        F: FnMut(usize, usize),
    {
        for i in (1..len).rev() {
            let j = self.gen_index_inclusive(i);
            swap(i, j);
        }
    }
}
