//! Cursor positions and directions.
//!
//! The cursor cycles through 16 positions. Positions 0-10 are the tableau
//! columns and holding slots, 11 is the dragon button column, and 12-15 are
//! the phoenix and numbered foundations (board slots 11-14).

use serde::{Deserialize, Serialize};

use crate::board::{SlotId, SLOT_COUNT};

/// Number of cursor positions.
pub const CURSOR_POSITIONS: usize = 16;

const DRAGON_ACTION: u8 = 11;

/// What a cursor position points at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CursorTarget {
    /// A card slot.
    Slot(SlotId),
    /// The three dragon collection buttons.
    DragonAction,
}

/// One of the 16 cursor positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CursorPos(u8);

impl CursorPos {
    /// The dragon button column.
    pub const DRAGON_ACTION: CursorPos = CursorPos(DRAGON_ACTION);
    /// The phoenix foundation.
    pub const PHOENIX: CursorPos = CursorPos(DRAGON_ACTION + 1);

    /// Position by raw index, if in range.
    #[must_use]
    pub const fn new(index: u8) -> Option<Self> {
        if (index as usize) < CURSOR_POSITIONS {
            Some(CursorPos(index))
        } else {
            None
        }
    }

    /// The position that selects `slot`. The hand has none.
    #[must_use]
    pub fn from_slot(slot: SlotId) -> Option<Self> {
        match slot.raw() {
            i if i < DRAGON_ACTION => Some(CursorPos(i)),
            i if usize::from(i) < SLOT_COUNT - 1 => Some(CursorPos(i + 1)),
            _ => None,
        }
    }

    /// Tableau column `col`.
    #[must_use]
    pub fn column(col: usize) -> Self {
        CursorPos(SlotId::tableau(col).raw())
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[must_use]
    pub const fn target(self) -> CursorTarget {
        if self.0 == DRAGON_ACTION {
            CursorTarget::DragonAction
        } else if self.0 < DRAGON_ACTION {
            CursorTarget::Slot(SlotId::from_raw_unchecked(self.0))
        } else {
            CursorTarget::Slot(SlotId::from_raw_unchecked(self.0 - 1))
        }
    }

    /// The card slot under this position, if it is not the button column.
    #[must_use]
    pub const fn slot(self) -> Option<SlotId> {
        match self.target() {
            CursorTarget::Slot(slot) => Some(slot),
            CursorTarget::DragonAction => None,
        }
    }

    #[must_use]
    pub const fn is_dragon_action(self) -> bool {
        self.0 == DRAGON_ACTION
    }

    /// Next position to the right, wrapping.
    #[must_use]
    pub const fn next(self) -> Self {
        CursorPos((self.0 + 1) % CURSOR_POSITIONS as u8)
    }

    /// Next position to the left, wrapping.
    #[must_use]
    pub const fn prev(self) -> Self {
        CursorPos((self.0 + CURSOR_POSITIONS as u8 - 1) % CURSOR_POSITIONS as u8)
    }

    /// All positions, left to right.
    pub fn all() -> impl Iterator<Item = CursorPos> {
        (0..CURSOR_POSITIONS as u8).map(CursorPos)
    }
}

impl std::fmt::Display for CursorPos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.target() {
            CursorTarget::Slot(slot) => write!(f, "{slot}"),
            CursorTarget::DragonAction => write!(f, "DragonButtons"),
        }
    }
}

/// A directional input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}
