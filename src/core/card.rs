//! Card encoding.
//!
//! A card is a single byte:
//!
//! ```text
//! [7:6] always zero
//! [5:4] suit   (0 black, 1 red, 2 green, 3 special)
//! [3:0] rank   numbers: 0-8 for 1-9
//!              special: 0-2 for the three dragons, 3 for the phoenix
//! ```
//!
//! `0xFF` is reserved as the end-of-slot sentinel. It only appears at the
//! raw serialization boundary; in memory an absent card is `None`.

use serde::{Deserialize, Serialize};

/// Raw sentinel marking "no card" in the fixed-size wire format.
pub const SENTINEL: u8 = 0xFF;

const SUIT_MASK: u8 = 0x30;
const RANK_MASK: u8 = 0x0F;
const RAW_MASK: u8 = 0x3F;

/// Number of cards in a deal.
pub const DECK_SIZE: usize = 40;

/// Color-class of a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Suit {
    Black = 0,
    Red = 1,
    Green = 2,
    /// Dragons and the phoenix.
    Special = 3,
}

impl Suit {
    /// The three numbered suits, in foundation order.
    pub const NUMBERED: [Suit; 3] = [Suit::Black, Suit::Red, Suit::Green];

    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0x03 {
            0 => Suit::Black,
            1 => Suit::Red,
            2 => Suit::Green,
            _ => Suit::Special,
        }
    }

    fn symbol(self) -> char {
        match self {
            Suit::Black => 'B',
            Suit::Red => 'R',
            Suit::Green => 'G',
            Suit::Special => 'S',
        }
    }
}

/// The three dragon symbols. Four copies of each are in the deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Dragon {
    Claw = 0,
    Paw = 1,
    Hoof = 2,
}

impl Dragon {
    pub const ALL: [Dragon; 3] = [Dragon::Claw, Dragon::Paw, Dragon::Hoof];

    /// Index into per-dragon arrays (trigger buttons, counters).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Dragon for a trigger button index, if in range.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Dragon::Claw),
            1 => Some(Dragon::Paw),
            2 => Some(Dragon::Hoof),
            _ => None,
        }
    }
}

/// A single card, stored in its raw byte encoding.
///
/// Rank arithmetic ("exactly one higher") is plain integer arithmetic on
/// [`Card::rank`], so the 0-based rank is kept rather than the face value.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Card(u8);

impl Card {
    /// The unique phoenix card.
    pub const PHOENIX: Card = Card(0x33);

    /// Build a card from suit and 0-based rank.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Card(((suit as u8) << 4) | (rank & RANK_MASK))
    }

    /// A numbered card. `value` is the face value, 1 to 9.
    ///
    /// # Panics
    ///
    /// If `suit` is [`Suit::Special`] or `value` is outside 1 to 9. Use
    /// [`Card::try_number`] for values that come from outside.
    #[must_use]
    pub const fn number(suit: Suit, value: u8) -> Self {
        match Card::try_number(suit, value) {
            Some(card) => card,
            None => panic!("not a numbered card"),
        }
    }

    /// A numbered card, or `None` for a special suit or a face value
    /// outside 1 to 9.
    #[must_use]
    pub const fn try_number(suit: Suit, value: u8) -> Option<Self> {
        match (suit, value) {
            (Suit::Special, _) | (_, 0) | (_, 10..=u8::MAX) => None,
            (_, value) => Some(Card::new(suit, value - 1)),
        }
    }

    #[must_use]
    pub const fn dragon(kind: Dragon) -> Self {
        Card::new(Suit::Special, kind as u8)
    }

    /// Decode a raw byte. Returns `None` for the sentinel.
    ///
    /// The two high bits are ignored, so every other byte decodes.
    #[must_use]
    pub const fn from_raw(raw: u8) -> Option<Self> {
        if raw == SENTINEL {
            None
        } else {
            Some(Card(raw & RAW_MASK))
        }
    }

    /// Whether a raw byte is the end-of-slot sentinel.
    #[must_use]
    pub const fn is_sentinel(raw: u8) -> bool {
        raw == SENTINEL
    }

    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn suit(self) -> Suit {
        Suit::from_bits((self.0 & SUIT_MASK) >> 4)
    }

    /// 0-based rank.
    #[must_use]
    pub const fn rank(self) -> u8 {
        self.0 & RANK_MASK
    }

    /// Dragon or phoenix.
    #[must_use]
    pub const fn is_special(self) -> bool {
        self.0 & SUIT_MASK == SUIT_MASK
    }

    #[must_use]
    pub const fn is_phoenix(self) -> bool {
        self.0 == Card::PHOENIX.0
    }

    #[must_use]
    pub const fn dragon_kind(self) -> Option<Dragon> {
        if self.is_special() {
            Dragon::from_index(self.rank() as usize)
        } else {
            None
        }
    }

    /// Face value 1-9 for numbered cards.
    #[must_use]
    pub const fn value(self) -> Option<u8> {
        if self.is_special() {
            None
        } else {
            Some(self.rank() + 1)
        }
    }
}

impl std::fmt::Debug for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({self})")
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_phoenix() {
            return f.write_str("PH");
        }
        match self.dragon_kind() {
            Some(Dragon::Claw) => f.write_str("DC"),
            Some(Dragon::Paw) => f.write_str("DP"),
            Some(Dragon::Hoof) => f.write_str("DH"),
            None if self.is_special() => write!(f, "S{}", self.rank()),
            None => write!(f, "{}{}", self.suit().symbol(), self.rank() + 1),
        }
    }
}

/// The 40-card deck in canonical order.
///
/// Black 1-9, red 1-9, green 1-9, four of each dragon, then the phoenix.
#[must_use]
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);

    for suit in Suit::NUMBERED {
        for rank in 0..9 {
            deck.push(Card::new(suit, rank));
        }
    }
    for kind in Dragon::ALL {
        for _ in 0..4 {
            deck.push(Card::dragon(kind));
        }
    }
    deck.push(Card::PHOENIX);

    debug_assert_eq!(deck.len(), DECK_SIZE);
    deck
}
