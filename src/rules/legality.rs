//! Pick and place legality.
//!
//! These checks are pure: they read the board and report whether a move
//! would be allowed. The [`crate::game::Game`] carries out moves that pass.

use crate::board::{Board, SlotId, SlotKind};
use crate::core::{Card, Rejection};
use crate::cursor::{CursorPos, CursorTarget};

/// Whether a place may short-circuit when returning to the pick origin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaceMode {
    /// Dropping cards back where they came from is always allowed.
    Player,
    /// Always apply the destination's rules. Automation uses this.
    Strict,
}

/// Check that `run` can be lifted as one unit.
///
/// A single card always can. Longer runs must alternate suit and descend
/// by exactly one rank, and may not contain a dragon or the phoenix.
pub fn check_run(run: &[Card]) -> Result<(), Rejection> {
    if run.len() < 2 {
        return Ok(());
    }
    if run.iter().any(|c| c.is_special()) {
        return Err(Rejection::SpecialCardInRun);
    }
    for (depth, pair) in run.windows(2).enumerate() {
        let (upper, lower) = (pair[0], pair[1]);
        if upper.suit() == lower.suit() {
            return Err(Rejection::RunSameSuit { depth: depth + 1 });
        }
        if lower.rank() + 1 != upper.rank() {
            return Err(Rejection::RunNotDescending { depth: depth + 1 });
        }
    }
    Ok(())
}

/// Check that the run starting at `depth` under `pos` can be picked up.
pub fn check_pick(board: &Board, pos: CursorPos, depth: usize) -> Result<(), Rejection> {
    let slot = match pos.target() {
        CursorTarget::Slot(slot) => slot,
        CursorTarget::DragonAction => return Err(Rejection::NotACardSlot),
    };
    if !board.hand_is_empty() {
        return Err(Rejection::HandOccupied);
    }

    let cards = board.cards(slot);
    if depth >= cards.len() {
        return Err(Rejection::EmptySlot);
    }

    if slot.kind() == SlotKind::DragonHolding
        && (depth > 0 || board.locked_dragon(slot).is_some())
    {
        return Err(Rejection::HoldingSlotLocked);
    }

    check_run(&cards[depth..])
}

/// Check that the hand can be laid on `pos`.
pub fn check_place(
    board: &Board,
    pos: CursorPos,
    came_from: Option<CursorPos>,
    mode: PlaceMode,
) -> Result<(), Rejection> {
    let hand = board.hand();
    let Some(&held) = hand.first() else {
        return Err(Rejection::HandEmpty);
    };
    let slot = match pos.target() {
        CursorTarget::Slot(slot) => slot,
        CursorTarget::DragonAction => return Err(Rejection::NotACardSlot),
    };

    if mode == PlaceMode::Player && came_from == Some(pos) {
        return Ok(());
    }

    match slot.kind() {
        SlotKind::Tableau => check_tableau(board.top(slot), held),
        SlotKind::DragonHolding => {
            if hand.len() > 1 {
                Err(Rejection::MultipleCards)
            } else if !board.is_empty(slot) {
                Err(Rejection::SlotOccupied)
            } else {
                Ok(())
            }
        }
        SlotKind::PhoenixFoundation => {
            if !held.is_phoenix() {
                Err(Rejection::NotPhoenix)
            } else if hand.len() > 1 {
                Err(Rejection::MultipleCards)
            } else {
                Ok(())
            }
        }
        SlotKind::NumberFoundation => check_foundation(board, slot, hand.len(), held),
        SlotKind::Hand => Err(Rejection::NotACardSlot),
    }
}

fn check_tableau(top: Option<Card>, held: Card) -> Result<(), Rejection> {
    let Some(target) = top else {
        return Ok(());
    };
    if target.is_special() || held.is_special() {
        return Err(Rejection::SpecialCardStack);
    }
    if target.suit() == held.suit() {
        return Err(Rejection::SameSuit { held, target });
    }
    if target.rank() != held.rank() + 1 {
        return Err(Rejection::RankMismatch { held, target });
    }
    Ok(())
}

fn check_foundation(
    board: &Board,
    slot: SlotId,
    count: usize,
    held: Card,
) -> Result<(), Rejection> {
    if held.is_special() {
        return Err(Rejection::NotNumbered);
    }
    if count > 1 {
        return Err(Rejection::MultipleCards);
    }
    match board.top(slot) {
        None if held.rank() != 0 => Err(Rejection::FoundationNeedsOne { held }),
        None => Ok(()),
        Some(top) if top.suit() != held.suit() => Err(Rejection::FoundationSuit { held, top }),
        Some(top) if top.rank() + 1 != held.rank() => {
            Err(Rejection::FoundationOrder { held, top })
        }
        Some(_) => Ok(()),
    }
}
