//! Dragon collection triggers.
//!
//! A dragon's trigger lights when all four copies are exposed and there is
//! somewhere to put them: an empty holding slot, or a holding slot already
//! showing that dragon.

use serde::{Deserialize, Serialize};

use crate::board::{Board, SlotId, DRAGON_SET};
use crate::core::{Card, Dragon};

/// Which dragon buttons are lit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DragonTriggers([bool; 3]);

impl DragonTriggers {
    #[must_use]
    pub const fn new(active: [bool; 3]) -> Self {
        DragonTriggers(active)
    }

    #[must_use]
    pub fn is_active(self, dragon: Dragon) -> bool {
        self.0[dragon.index()]
    }

    #[must_use]
    pub fn any(self) -> bool {
        self.0.iter().any(|&a| a)
    }

    /// Lit dragons, in button order.
    pub fn active(self) -> impl Iterator<Item = Dragon> {
        Dragon::ALL.into_iter().filter(move |&d| self.is_active(d))
    }

    #[must_use]
    pub fn as_array(self) -> [bool; 3] {
        self.0
    }
}

/// Slots a dragon can be collected from: the tableau and the holding slots.
pub fn collectable_slots() -> impl Iterator<Item = SlotId> {
    SlotId::tableau_slots().chain(SlotId::holding_slots())
}

/// Recompute every dragon trigger from the exposed cards.
#[must_use]
pub fn dragon_triggers(board: &Board) -> DragonTriggers {
    let empty_slot = SlotId::holding_slots().any(|slot| board.is_empty(slot));
    let mut count = [0usize; 3];
    let mut in_slot = [false; 3];

    for slot in collectable_slots() {
        let Some(kind) = board.top(slot).and_then(Card::dragon_kind) else {
            continue;
        };
        count[kind.index()] += 1;
        if !slot.is_tableau() {
            in_slot[kind.index()] = true;
        }
    }

    let mut active = [false; 3];
    for kind in Dragon::ALL {
        let i = kind.index();
        active[i] = count[i] == DRAGON_SET && (empty_slot || in_slot[i]);
    }
    DragonTriggers(active)
}

/// Where collected dragons of `kind` end up.
///
/// A holding slot that already has that dragon wins; otherwise the first
/// empty holding slot. `None` if neither exists.
#[must_use]
pub fn collection_destination(board: &Board, kind: Dragon) -> Option<SlotId> {
    let dragon = Card::dragon(kind);
    SlotId::holding_slots()
        .find(|&slot| board.card(slot, 0) == Some(dragon))
        .or_else(|| SlotId::holding_slots().find(|&slot| board.is_empty(slot)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Suit;

    fn claw() -> Card {
        Card::dragon(Dragon::Claw)
    }

    #[test]
    fn test_all_exposed_with_empty_slot() {
        let mut board = Board::new();
        for col in 0..4 {
            board.push(SlotId::tableau(col), Card::number(Suit::Red, 5));
            board.push(SlotId::tableau(col), claw());
        }

        let triggers = dragon_triggers(&board);
        assert!(triggers.is_active(Dragon::Claw));
        assert!(!triggers.is_active(Dragon::Paw));
        assert_eq!(triggers.active().collect::<Vec<_>>(), vec![Dragon::Claw]);
    }

    #[test]
    fn test_buried_copy_blocks_trigger() {
        let mut board = Board::new();
        for col in 0..3 {
            board.push(SlotId::tableau(col), claw());
        }
        board.push(SlotId::tableau(3), claw());
        board.push(SlotId::tableau(3), Card::number(Suit::Black, 2));

        assert!(!dragon_triggers(&board).any());
    }

    #[test]
    fn test_no_room_blocks_trigger() {
        let mut board = Board::new();
        for col in 0..4 {
            board.push(SlotId::tableau(col), claw());
        }
        board.push(SlotId::holding(0), Card::dragon(Dragon::Paw));
        board.push(SlotId::holding(1), Card::number(Suit::Green, 3));
        board.push(SlotId::holding(2), Card::PHOENIX);

        assert!(!dragon_triggers(&board).is_active(Dragon::Claw));
    }

    #[test]
    fn test_holding_slot_showing_dragon_counts_as_room() {
        let mut board = Board::new();
        for col in 0..3 {
            board.push(SlotId::tableau(col), claw());
        }
        board.push(SlotId::holding(0), Card::dragon(Dragon::Paw));
        board.push(SlotId::holding(1), claw());
        board.push(SlotId::holding(2), Card::number(Suit::Green, 3));

        assert!(dragon_triggers(&board).is_active(Dragon::Claw));
        assert_eq!(collection_destination(&board, Dragon::Claw), Some(SlotId::holding(1)));
    }

    #[test]
    fn test_destination_prefers_existing_then_first_empty() {
        let mut board = Board::new();
        board.push(SlotId::holding(0), Card::number(Suit::Black, 1));

        assert_eq!(collection_destination(&board, Dragon::Hoof), Some(SlotId::holding(1)));

        board.push(SlotId::holding(2), Card::dragon(Dragon::Hoof));
        assert_eq!(collection_destination(&board, Dragon::Hoof), Some(SlotId::holding(2)));

        board.push(SlotId::holding(1), Card::PHOENIX);
        assert_eq!(collection_destination(&board, Dragon::Claw), None);
    }
}
