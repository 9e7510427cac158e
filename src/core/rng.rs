//! Deterministic random number generation for shuffling.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces the same deal
//! - **Seeded once per deal**: an [`EntropySource`] supplies the seed
//!
//! ## Usage
//!
//! ```
//! use shenzhen_core::core::GameRng;
//!
//! let mut rng1 = GameRng::new(42);
//! let mut rng2 = GameRng::new(42);
//!
//! assert_eq!(rng1.gen_index(39), rng2.gen_index(39));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::card::Card;

/// Deterministic RNG backing the shuffle.
///
/// Uses ChaCha8 for speed while keeping high-quality uniform output.
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

    /// The seed this generator was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform index in `0..=max`.
    pub fn gen_index(&mut self, max: usize) -> usize {
        self.inner.gen_range(0..=max)
    }

    /// Fisher-Yates shuffle, from the last index down to 1.
    ///
    /// Each position swaps with a uniformly chosen earlier-or-equal index.
    pub fn shuffle_deck(&mut self, deck: &mut [Card]) {
        for i in (1..deck.len()).rev() {
            let j = self.gen_index(i);
            deck.swap(i, j);
        }
    }
}

/// Supplies one seed per deal.
pub trait EntropySource {
    fn next_seed(&mut self) -> u64;
}

/// Always the same seed. Replays one deal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedSeed(pub u64);

impl EntropySource for FixedSeed {
    fn next_seed(&mut self) -> u64 {
        self.0
    }
}

/// Consecutive seeds starting from a base. Useful for batches of deals.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeedSequence {
    next: u64,
}

impl SeedSequence {
    #[must_use]
    pub fn starting_at(base: u64) -> Self {
        Self { next: base }
    }
}

impl EntropySource for SeedSequence {
    fn next_seed(&mut self) -> u64 {
        let seed = self.next;
        self.next = self.next.wrapping_add(1);
        seed
    }
}

/// Seeds from the operating system's thread-local generator.
#[derive(Clone, Copy, Debug, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn next_seed(&mut self) -> u64 {
        rand::random()
    }
}
