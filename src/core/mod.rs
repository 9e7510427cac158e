//! Core engine types: cards, RNG, configuration, errors.
//!
//! These are the leaf building blocks; everything else in the crate is
//! expressed in terms of them.

pub mod card;
pub mod config;
pub mod error;
pub mod rng;

pub use card::{full_deck, Card, Dragon, Suit, DECK_SIZE, SENTINEL};
pub use config::GameConfig;
pub use error::{ConfigError, IntegrityError, Rejection};
pub use rng::{EntropySource, FixedSeed, GameRng, OsEntropy, SeedSequence};
