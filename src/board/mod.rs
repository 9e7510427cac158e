//! Card slots and their contents.
//!
//! The board is sixteen ordered slots of fixed kind: tableau columns,
//! dragon holding slots, the phoenix and numbered foundations, and the hand.
//! Slot contents are contiguous from depth 0; the exposed card is the last.

pub mod slot;
pub mod table;

pub use slot::{
    ChangedSet, SlotId, SlotKind, HOLDING_SLOTS, NUMBER_FOUNDATIONS, SLOT_CAPACITY, SLOT_COUNT,
    TABLEAU_COLUMNS,
};
pub use table::{Board, RawBoard, Slot, DRAGON_SET};
