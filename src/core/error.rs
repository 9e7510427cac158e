//! Error types.
//!
//! [`Rejection`] is the normal outcome of an illegal input: the board is
//! left exactly as it was. [`IntegrityError`] reports a broken data
//! invariant, which is a bug rather than a player mistake.

use std::fmt;

use super::card::Card;
use crate::board::SlotId;

/// Why a pick, place, cancel or automation request was refused.
///
/// Returning a `Rejection` always means no state changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rejection {
    /// Nothing to pick at the cursor.
    EmptySlot,
    /// The cursor is on the dragon buttons, which hold no cards.
    NotACardSlot,
    /// A dragon or the phoenix can only be moved on its own.
    SpecialCardInRun,
    /// Adjacent cards in the run share a suit.
    RunSameSuit { depth: usize },
    /// Adjacent cards in the run do not descend by exactly one.
    RunNotDescending { depth: usize },
    /// Dragon holding slots only give up their single card at depth 0.
    HoldingSlotLocked,
    /// An operation that needs an empty hand was tried while holding cards.
    HandOccupied,
    /// An operation that needs held cards was tried with an empty hand.
    HandEmpty,
    /// Dragons and the phoenix never stack on the tableau.
    SpecialCardStack,
    /// Tableau stacking needs alternating suits.
    SameSuit { held: Card, target: Card },
    /// Tableau stacking needs the target exactly one rank higher.
    RankMismatch { held: Card, target: Card },
    /// The destination only accepts one card at a time.
    MultipleCards,
    /// The holding slot already has a card.
    SlotOccupied,
    /// Only the phoenix goes on the phoenix foundation.
    NotPhoenix,
    /// Numbered foundations hold numbered cards only.
    NotNumbered,
    /// An empty numbered foundation only accepts a 1.
    FoundationNeedsOne { held: Card },
    /// A numbered foundation keeps a single suit.
    FoundationSuit { held: Card, top: Card },
    /// A numbered foundation ascends one rank at a time.
    FoundationOrder { held: Card, top: Card },
    /// The hand is not holding anything that came from somewhere.
    NothingToCancel,
    /// Auto-move only works on tableau and holding slots.
    NotAutoMovable,
    /// Auto-move only lifts the exposed top card.
    NotTopCard,
    /// No foundation accepted the card.
    NoFoundationAccepts,
    /// The dragon's trigger is not lit.
    TriggerInactive,
    /// The cursor is not on a dragon button.
    NotOnTrigger,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::EmptySlot => write!(f, "no card at the cursor"),
            Rejection::NotACardSlot => write!(f, "the dragon buttons hold no cards"),
            Rejection::SpecialCardInRun => write!(f, "special cards can only be moved alone"),
            Rejection::RunSameSuit { depth } => write!(f, "run repeats a suit at depth {depth}"),
            Rejection::RunNotDescending { depth } => {
                write!(f, "run does not descend by one at depth {depth}")
            }
            Rejection::HoldingSlotLocked => write!(f, "collected dragons cannot be moved"),
            Rejection::HandOccupied => write!(f, "already holding cards"),
            Rejection::HandEmpty => write!(f, "not holding any cards"),
            Rejection::SpecialCardStack => write!(f, "special cards do not stack"),
            Rejection::SameSuit { held, target } => {
                write!(f, "{held} cannot go on {target}: same suit")
            }
            Rejection::RankMismatch { held, target } => {
                write!(f, "{held} cannot go on {target}: not one rank lower")
            }
            Rejection::MultipleCards => write!(f, "only a single card may go here"),
            Rejection::SlotOccupied => write!(f, "slot is occupied"),
            Rejection::NotPhoenix => write!(f, "only the phoenix goes here"),
            Rejection::NotNumbered => write!(f, "only numbered cards go on a foundation"),
            Rejection::FoundationNeedsOne { held } => {
                write!(f, "{held} cannot start a foundation")
            }
            Rejection::FoundationSuit { held, top } => {
                write!(f, "{held} does not match foundation suit of {top}")
            }
            Rejection::FoundationOrder { held, top } => {
                write!(f, "{held} does not follow {top}")
            }
            Rejection::NothingToCancel => write!(f, "no move in progress"),
            Rejection::NotAutoMovable => write!(f, "auto-move needs a tableau or holding slot"),
            Rejection::NotTopCard => write!(f, "auto-move only lifts the top card"),
            Rejection::NoFoundationAccepts => write!(f, "no foundation accepts the card"),
            Rejection::TriggerInactive => write!(f, "dragon trigger is not active"),
            Rejection::NotOnTrigger => write!(f, "cursor is not on a dragon button"),
        }
    }
}

impl std::error::Error for Rejection {}

/// Invalid engine configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The start column must name one of the tableau columns.
    StartColumnOutOfRange(u8),
    /// The configuration text could not be parsed.
    Parse(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::StartColumnOutOfRange(col) => {
                write!(f, "start column {col} is not a tableau column")
            }
            ConfigError::Parse(msg) => write!(f, "invalid configuration: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// A broken board invariant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IntegrityError {
    /// A card appears more often than the deck allows.
    Duplicate { card: Card, count: usize },
    /// A card of the deck is nowhere on the board or in the hand.
    Missing { card: Card, count: usize },
    /// A card that is not part of the deck is present.
    Foreign(Card),
    /// A numbered foundation is not `1..=k` of one suit.
    FoundationOrder(SlotId),
    /// The phoenix foundation holds something other than the phoenix.
    PhoenixFoundation(SlotId),
    /// A raw slot has a card after its sentinel.
    Gap(SlotId),
}

impl fmt::Display for IntegrityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntegrityError::Duplicate { card, count } => {
                write!(f, "{card} appears {count} times")
            }
            IntegrityError::Missing { card, count } => {
                write!(f, "{card} is missing {count} copies")
            }
            IntegrityError::Foreign(card) => write!(f, "{card} is not part of the deck"),
            IntegrityError::FoundationOrder(slot) => write!(f, "{slot} is out of order"),
            IntegrityError::PhoenixFoundation(slot) => write!(f, "{slot} holds a non-phoenix card"),
            IntegrityError::Gap(slot) => write!(f, "{slot} has a card after its end marker"),
        }
    }
}

impl std::error::Error for IntegrityError {}
