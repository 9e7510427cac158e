//! The board: sixteen ordered card slots plus change tracking.
//!
//! The `Board` owns card placement only. It does not judge legality; the
//! rules module decides what may move, and the board carries it out. Every
//! mutator marks the touched slot in the [`ChangedSet`] so the renderer
//! knows what to redraw.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::slot::{ChangedSet, SlotId, SlotKind, SLOT_CAPACITY, SLOT_COUNT};
use crate::core::card::{full_deck, Card, Dragon, SENTINEL};
use crate::core::error::IntegrityError;

/// Cards in one slot, bottom (depth 0) first.
pub type Slot = SmallVec<[Card; SLOT_CAPACITY]>;

/// Fixed-size sentinel-terminated layout, one row per slot.
pub type RawBoard = [[u8; SLOT_CAPACITY]; SLOT_COUNT];

/// Cards in a collected dragon stack.
pub const DRAGON_SET: usize = 4;

/// All card slots of one deal, including the hand.
///
/// ## Usage
///
/// ```
/// use shenzhen_core::board::{Board, SlotId};
/// use shenzhen_core::core::{Card, Suit};
///
/// let mut board = Board::new();
/// let col = SlotId::tableau(0);
///
/// board.push(col, Card::number(Suit::Black, 3));
/// board.push(col, Card::number(Suit::Red, 2));
///
/// assert_eq!(board.len(col), 2);
/// assert_eq!(board.top_card(col), 1);
/// assert_eq!(board.top(col), Some(Card::number(Suit::Red, 2)));
/// assert!(board.changed().contains(col));
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Board {
    slots: [Slot; SLOT_COUNT],
    #[serde(skip)]
    changed: ChangedSet,
}

impl PartialEq for Board {
    /// Boards compare by contents; pending redraws are ignored.
    fn eq(&self, other: &Self) -> bool {
        self.slots == other.slots
    }
}

impl Eq for Board {}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty every slot and mark all of them for redraw.
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            slot.clear();
        }
        self.changed = ChangedSet::ALL;
    }

    // === Reading ===

    /// Occupied length of a slot.
    #[must_use]
    pub fn len(&self, slot: SlotId) -> usize {
        self.slots[slot.index()].len()
    }

    #[must_use]
    pub fn is_empty(&self, slot: SlotId) -> bool {
        self.slots[slot.index()].is_empty()
    }

    /// Cards in a slot, bottom first.
    #[must_use]
    pub fn cards(&self, slot: SlotId) -> &[Card] {
        &self.slots[slot.index()]
    }

    #[must_use]
    pub fn card(&self, slot: SlotId, depth: usize) -> Option<Card> {
        self.slots[slot.index()].get(depth).copied()
    }

    /// The exposed card of a slot.
    #[must_use]
    pub fn top(&self, slot: SlotId) -> Option<Card> {
        self.slots[slot.index()].last().copied()
    }

    /// Depth of the last occupied entry, or 0 for an empty slot.
    #[must_use]
    pub fn top_card(&self, slot: SlotId) -> usize {
        self.len(slot).saturating_sub(1)
    }

    /// Cards currently carried by the cursor.
    #[must_use]
    pub fn hand(&self) -> &[Card] {
        self.cards(SlotId::HAND)
    }

    #[must_use]
    pub fn hand_is_empty(&self) -> bool {
        self.is_empty(SlotId::HAND)
    }

    /// The dragon a holding slot has collected, if it holds a full set.
    #[must_use]
    pub fn locked_dragon(&self, slot: SlotId) -> Option<Dragon> {
        if slot.kind() != SlotKind::DragonHolding {
            return None;
        }
        let cards = self.cards(slot);
        let first = *cards.first()?;
        let kind = first.dragon_kind()?;
        (cards.len() == DRAGON_SET && cards.iter().all(|&c| c == first)).then_some(kind)
    }

    // === Mutation ===

    /// Append a card and mark the slot changed.
    pub fn push(&mut self, slot: SlotId, card: Card) {
        self.slots[slot.index()].push(card);
        self.changed.insert(slot);
    }

    /// Append cards in order and mark the slot changed.
    pub fn extend<I: IntoIterator<Item = Card>>(&mut self, slot: SlotId, cards: I) {
        self.slots[slot.index()].extend(cards);
        self.changed.insert(slot);
    }

    /// Remove and return the exposed card.
    pub fn pop(&mut self, slot: SlotId) -> Option<Card> {
        let card = self.slots[slot.index()].pop()?;
        self.changed.insert(slot);
        Some(card)
    }

    /// Shorten a slot to `len` cards and mark it changed.
    pub fn truncate(&mut self, slot: SlotId, len: usize) {
        self.slots[slot.index()].truncate(len);
        self.changed.insert(slot);
    }

    /// Remove every card from `depth` upward, returning them bottom first.
    pub fn split_off(&mut self, slot: SlotId, depth: usize) -> Slot {
        let cards = &mut self.slots[slot.index()];
        let depth = depth.min(cards.len());
        let run: Slot = cards.drain(depth..).collect();
        self.changed.insert(slot);
        run
    }

    /// Replace a slot's contents with `count` copies of `card`.
    pub fn fill(&mut self, slot: SlotId, card: Card, count: usize) {
        let cards = &mut self.slots[slot.index()];
        cards.clear();
        cards.extend(std::iter::repeat(card).take(count));
        self.changed.insert(slot);
    }

    // === Change tracking ===

    pub fn mark_changed(&mut self, slot: SlotId) {
        self.changed.insert(slot);
    }

    pub fn mark_all_changed(&mut self) {
        self.changed = ChangedSet::ALL;
    }

    /// Slots changed since the last [`Board::take_changed`].
    #[must_use]
    pub fn changed(&self) -> ChangedSet {
        self.changed
    }

    /// Return the changed set and clear it.
    pub fn take_changed(&mut self) -> ChangedSet {
        std::mem::take(&mut self.changed)
    }

    // === Wire format ===

    /// Encode as 16 rows of 16 bytes, each row terminated by the sentinel
    /// unless it is full.
    #[must_use]
    pub fn to_raw(&self) -> RawBoard {
        let mut raw = [[SENTINEL; SLOT_CAPACITY]; SLOT_COUNT];
        for (row, slot) in raw.iter_mut().zip(&self.slots) {
            debug_assert!(slot.len() <= SLOT_CAPACITY, "slot overflows the wire format");
            for (byte, card) in row.iter_mut().zip(slot.iter()) {
                *byte = card.raw();
            }
        }
        raw
    }

    /// Decode the fixed-size layout. A card after a sentinel is a gap.
    pub fn from_raw(raw: &RawBoard) -> Result<Self, IntegrityError> {
        let mut board = Board::new();
        for (slot, row) in SlotId::all().zip(raw.iter()) {
            let len = row.iter().position(|&b| b == SENTINEL).unwrap_or(SLOT_CAPACITY);
            if row[len..].iter().any(|&b| b != SENTINEL) {
                return Err(IntegrityError::Gap(slot));
            }
            board.slots[slot.index()] = row[..len]
                .iter()
                .filter_map(|&b| Card::from_raw(b))
                .collect();
        }
        board.changed = ChangedSet::ALL;
        Ok(board)
    }

    // === Integrity ===

    /// Check the deck invariant and foundation ordering.
    ///
    /// The board and hand together must hold exactly the 40-card deck.
    /// Numbered foundations must be `1..=k` of a single suit, and the
    /// phoenix foundation may only hold the phoenix.
    pub fn audit(&self) -> Result<(), IntegrityError> {
        let mut expected: FxHashMap<Card, usize> = FxHashMap::default();
        for card in full_deck() {
            *expected.entry(card).or_default() += 1;
        }

        let mut actual: FxHashMap<Card, usize> = FxHashMap::default();
        for card in self.slots.iter().flatten() {
            *actual.entry(*card).or_default() += 1;
        }

        for (&card, &count) in &actual {
            match expected.get(&card) {
                None => return Err(IntegrityError::Foreign(card)),
                Some(&want) if count > want => {
                    return Err(IntegrityError::Duplicate { card, count })
                }
                _ => {}
            }
        }
        for (&card, &want) in &expected {
            let have = actual.get(&card).copied().unwrap_or(0);
            if have < want {
                return Err(IntegrityError::Missing { card, count: want - have });
            }
        }

        self.audit_foundations()
    }

    /// Foundation ordering alone, usable on partial boards.
    pub fn audit_foundations(&self) -> Result<(), IntegrityError> {
        if self.cards(SlotId::PHOENIX).iter().any(|c| !c.is_phoenix()) {
            return Err(IntegrityError::PhoenixFoundation(SlotId::PHOENIX));
        }

        for slot in SlotId::foundation_slots().filter(|s| s.kind() == SlotKind::NumberFoundation) {
            let cards = self.cards(slot);
            let Some(first) = cards.first() else { continue };
            let in_order = cards.iter().enumerate().all(|(i, c)| {
                !c.is_special() && c.suit() == first.suit() && usize::from(c.rank()) == i
            });
            if !in_order {
                return Err(IntegrityError::FoundationOrder(slot));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::card::Suit;

    fn b(value: u8) -> Card {
        Card::number(Suit::Black, value)
    }

    fn r(value: u8) -> Card {
        Card::number(Suit::Red, value)
    }

    #[test]
    fn test_top_card_empty_and_full() {
        let mut board = Board::new();
        let col = SlotId::tableau(0);

        assert_eq!(board.top_card(col), 0);
        assert_eq!(board.top(col), None);

        for _ in 0..SLOT_CAPACITY {
            board.push(col, b(1));
        }
        assert_eq!(board.top_card(col), 15);
    }

    #[test]
    fn test_split_off_returns_run_in_order() {
        let mut board = Board::new();
        let col = SlotId::tableau(2);
        board.extend(col, [b(9), r(8), b(7), r(6)]);
        board.take_changed();

        let run = board.split_off(col, 1);

        assert_eq!(run.as_slice(), &[r(8), b(7), r(6)]);
        assert_eq!(board.cards(col), &[b(9)]);
        assert!(board.changed().contains(col));
    }

    #[test]
    fn test_take_changed_clears() {
        let mut board = Board::new();
        board.push(SlotId::holding(1), b(4));

        let changed = board.take_changed();
        assert!(changed.contains(SlotId::holding(1)));
        assert!(board.changed().is_empty());
    }

    #[test]
    fn test_clear_marks_everything() {
        let mut board = Board::new();
        board.push(SlotId::tableau(0), b(1));
        board.take_changed();

        board.clear();

        assert!(board.is_empty(SlotId::tableau(0)));
        assert_eq!(board.changed(), ChangedSet::ALL);
    }

    #[test]
    fn test_locked_dragon() {
        let mut board = Board::new();
        let slot = SlotId::holding(0);
        let claw = Card::dragon(Dragon::Claw);

        board.push(slot, claw);
        assert_eq!(board.locked_dragon(slot), None);

        board.fill(slot, claw, DRAGON_SET);
        assert_eq!(board.locked_dragon(slot), Some(Dragon::Claw));
        assert_eq!(board.locked_dragon(SlotId::tableau(0)), None);
    }

    #[test]
    fn test_raw_round_trip_keeps_sentinels() {
        let mut board = Board::new();
        board.extend(SlotId::tableau(1), [b(5), r(4)]);
        board.push(SlotId::PHOENIX, Card::PHOENIX);

        let raw = board.to_raw();
        assert_eq!(raw[1][..3], [b(5).raw(), r(4).raw(), SENTINEL]);
        assert_eq!(raw[0][0], SENTINEL);

        let decoded = Board::from_raw(&raw).unwrap();
        assert_eq!(decoded, board);
    }

    #[test]
    fn test_from_raw_rejects_gap() {
        let mut raw = [[SENTINEL; SLOT_CAPACITY]; SLOT_COUNT];
        raw[3][0] = b(1).raw();
        raw[3][2] = b(2).raw();

        assert_eq!(Board::from_raw(&raw), Err(IntegrityError::Gap(SlotId::tableau(3))));
    }

    #[test]
    fn test_audit_full_deck() {
        let mut board = Board::new();
        for (i, card) in full_deck().into_iter().enumerate() {
            board.push(SlotId::tableau(i % 8), card);
        }
        assert_eq!(board.audit(), Ok(()));

        let moved = board.pop(SlotId::tableau(0)).unwrap();
        assert!(matches!(board.audit(), Err(IntegrityError::Missing { .. })));

        board.push(SlotId::HAND, moved);
        assert_eq!(board.audit(), Ok(()));

        board.push(SlotId::HAND, moved);
        assert!(matches!(board.audit(), Err(IntegrityError::Duplicate { .. })));
    }

    #[test]
    fn test_audit_foundations() {
        let mut board = Board::new();
        let f = SlotId::foundation(1);

        board.extend(f, [r(1), r(2), r(3)]);
        assert_eq!(board.audit_foundations(), Ok(()));

        board.push(f, b(4));
        assert_eq!(board.audit_foundations(), Err(IntegrityError::FoundationOrder(f)));

        let mut board = Board::new();
        board.push(SlotId::PHOENIX, r(1));
        assert_eq!(
            board.audit_foundations(),
            Err(IntegrityError::PhoenixFoundation(SlotId::PHOENIX))
        );
    }
}
