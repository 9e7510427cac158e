//! # shenzhen-core
//!
//! Rules engine for a Shenzhen-style patience game on a small handheld:
//! 40 cards, eight tableau columns, three dragon holding slots and four
//! foundations, driven by a cursor and two buttons.
//!
//! ## Design
//!
//! 1. **Engine only**: no drawing, timing or input polling. The engine
//!    talks to a [`frontend::Renderer`], a [`frontend::Animator`] and a
//!    [`frontend::InputSource`] supplied by the caller.
//!
//! 2. **Rejections, not faults**: every move returns `Result<_, Rejection>`
//!    and a rejected move changes nothing. The frame loop ignores
//!    rejections, so an illegal press is silently a no-op.
//!
//! 3. **Seeded deals**: a deal is a pure function of its seed.
//!
//! ## Modules
//!
//! - `core`: cards, RNG, configuration, errors
//! - `board`: slots, the board and change tracking
//! - `cursor`: cursor positions and the move-then-clamp state machine
//! - `rules`: pick and place legality
//! - `automation`: dragon triggers and collection, auto-move
//! - `frontend`: collaborator traits and headless implementations
//! - `game`: the [`Game`] aggregate, dealing and the frame loop

pub mod automation;
pub mod board;
pub mod core;
pub mod cursor;
pub mod frontend;
pub mod game;
pub mod rules;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    full_deck, Card, ConfigError, Dragon, EntropySource, FixedSeed, GameConfig, GameRng,
    IntegrityError, OsEntropy, Rejection, SeedSequence, Suit, DECK_SIZE,
};

pub use crate::board::{Board, ChangedSet, SlotId, SlotKind};

pub use crate::cursor::{Cursor, CursorPos, CursorTarget, Direction};

pub use crate::rules::{check_pick, check_place, check_run, PlaceMode};

pub use crate::automation::{dragon_triggers, DragonTriggers};

pub use crate::frontend::{
    Anchor, Animator, Frontend, Headless, Input, InputSource, Intent, Recorder, Renderer,
    ScriptedInput, Slide,
};

pub use crate::game::{DealOutcome, Game, Status};
