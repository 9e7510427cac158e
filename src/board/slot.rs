//! Slot identifiers and the per-slot changed set.
//!
//! Slot indices are fixed:
//!
//! | Index | Kind |
//! |---|---|
//! | 0-7 | tableau columns |
//! | 8-10 | dragon holding slots |
//! | 11 | phoenix foundation |
//! | 12-14 | numbered foundations |
//! | 15 | hand |

use serde::{Deserialize, Serialize};

/// Number of tableau columns.
pub const TABLEAU_COLUMNS: usize = 8;
/// Number of dragon holding slots.
pub const HOLDING_SLOTS: usize = 3;
/// Number of numbered foundations.
pub const NUMBER_FOUNDATIONS: usize = 3;
/// Total card containers, hand included.
pub const SLOT_COUNT: usize = 16;
/// Cards a slot holds in the fixed-size wire format.
pub const SLOT_CAPACITY: usize = 16;

const FIRST_HOLDING: u8 = 8;
const PHOENIX: u8 = 11;
const FIRST_FOUNDATION: u8 = 12;
const HAND: u8 = 15;

/// What a slot is for. Decides its pick and place rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SlotKind {
    Tableau,
    DragonHolding,
    PhoenixFoundation,
    NumberFoundation,
    /// Cards currently carried by the cursor.
    Hand,
}

/// Index of a card container on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SlotId(u8);

impl SlotId {
    pub const PHOENIX: SlotId = SlotId(PHOENIX);
    pub const HAND: SlotId = SlotId(HAND);

    /// Slot by raw index, if in range.
    #[must_use]
    pub const fn new(index: u8) -> Option<Self> {
        if (index as usize) < SLOT_COUNT {
            Some(SlotId(index))
        } else {
            None
        }
    }

    /// Caller guarantees `index < SLOT_COUNT`.
    pub(crate) const fn from_raw_unchecked(index: u8) -> Self {
        SlotId(index)
    }

    /// Tableau column `col` (0-7).
    #[must_use]
    pub fn tableau(col: usize) -> Self {
        debug_assert!(col < TABLEAU_COLUMNS);
        SlotId(col as u8)
    }

    /// Dragon holding slot `i` (0-2).
    #[must_use]
    pub fn holding(i: usize) -> Self {
        debug_assert!(i < HOLDING_SLOTS);
        SlotId(FIRST_HOLDING + i as u8)
    }

    /// Numbered foundation `i` (0-2).
    #[must_use]
    pub fn foundation(i: usize) -> Self {
        debug_assert!(i < NUMBER_FOUNDATIONS);
        SlotId(FIRST_FOUNDATION + i as u8)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn kind(self) -> SlotKind {
        match self.0 {
            0..=7 => SlotKind::Tableau,
            8..=10 => SlotKind::DragonHolding,
            PHOENIX => SlotKind::PhoenixFoundation,
            12..=14 => SlotKind::NumberFoundation,
            _ => SlotKind::Hand,
        }
    }

    #[must_use]
    pub const fn is_tableau(self) -> bool {
        matches!(self.kind(), SlotKind::Tableau)
    }

    /// All 16 slots in index order.
    pub fn all() -> impl Iterator<Item = SlotId> {
        (0..SLOT_COUNT as u8).map(SlotId)
    }

    pub fn tableau_slots() -> impl Iterator<Item = SlotId> {
        (0..TABLEAU_COLUMNS as u8).map(SlotId)
    }

    pub fn holding_slots() -> impl Iterator<Item = SlotId> {
        (FIRST_HOLDING..PHOENIX).map(SlotId)
    }

    /// Phoenix first, then the numbered foundations.
    pub fn foundation_slots() -> impl Iterator<Item = SlotId> {
        (PHOENIX..HAND).map(SlotId)
    }
}

impl std::fmt::Display for SlotId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind() {
            SlotKind::Tableau => write!(f, "Tableau({})", self.0),
            SlotKind::DragonHolding => write!(f, "Holding({})", self.0 - FIRST_HOLDING),
            SlotKind::PhoenixFoundation => write!(f, "PhoenixFoundation"),
            SlotKind::NumberFoundation => write!(f, "Foundation({})", self.0 - FIRST_FOUNDATION),
            SlotKind::Hand => write!(f, "Hand"),
        }
    }
}

/// Set of slots whose visible contents changed since the last redraw.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ChangedSet(u16);

impl ChangedSet {
    /// Every slot.
    pub const ALL: ChangedSet = ChangedSet(u16::MAX);

    #[must_use]
    pub const fn new() -> Self {
        ChangedSet(0)
    }

    pub fn insert(&mut self, slot: SlotId) {
        self.0 |= 1 << slot.0;
    }

    #[must_use]
    pub const fn contains(self, slot: SlotId) -> bool {
        self.0 & (1 << slot.0) != 0
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn clear(&mut self) {
        self.0 = 0;
    }

    /// Changed slots in index order.
    pub fn iter(self) -> impl Iterator<Item = SlotId> {
        SlotId::all().filter(move |&slot| self.contains(slot))
    }
}

impl FromIterator<SlotId> for ChangedSet {
    fn from_iter<I: IntoIterator<Item = SlotId>>(iter: I) -> Self {
        let mut set = ChangedSet::new();
        for slot in iter {
            set.insert(slot);
        }
        set
    }
}
