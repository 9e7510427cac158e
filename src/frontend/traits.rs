//! Collaborator contracts.
//!
//! The engine draws nothing and owns no timing. It talks to:
//! - a [`Renderer`], handed the board and the slots changed since last time
//! - an [`Animator`], which plays a slide and returns once it has finished
//! - an [`InputSource`], which yields at most one edge-triggered intent per frame

use serde::{Deserialize, Serialize};

use crate::automation::DragonTriggers;
use crate::board::{Board, ChangedSet};
use crate::core::Card;
use crate::cursor::{CursorPos, Direction};

/// Redraws changed slots and the dragon buttons.
pub trait Renderer {
    /// `changed` has already been drained from the board.
    fn redraw(&mut self, board: &Board, changed: ChangedSet, triggers: DragonTriggers);
}

/// Plays card motion. Blocking from the engine's point of view.
pub trait Animator {
    fn slide(&mut self, slide: &Slide<'_>);
}

/// Anything that can both draw and animate.
pub trait Frontend: Renderer + Animator {}

impl<T: Renderer + Animator> Frontend for T {}

/// One end of a slide.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Anchor {
    /// A card position on the table.
    Slot { pos: CursorPos, depth: usize },
    /// Below the visible table: where dealt cards come from and won cards go.
    OffBoard,
}

impl Anchor {
    #[must_use]
    pub fn slot(pos: CursorPos, depth: usize) -> Self {
        Anchor::Slot { pos, depth }
    }
}

/// A card or run moving between two anchors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Slide<'a> {
    pub from: Anchor,
    pub to: Anchor,
    pub cards: &'a [Card],
    pub frames: u8,
    /// Whether the cursor travels with the cards.
    pub show_cursor: bool,
}

/// A player intent.
///
/// The two buttons are context dependent, as on the handheld:
/// - `Primary`: pick up with an empty hand, place while holding, or collect
///   dragons when the cursor is on a lit dragon button
/// - `Secondary`: auto-move to a foundation with an empty hand, cancel while
///   holding; does nothing on the dragon buttons
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Intent {
    Move(Direction),
    Primary,
    Secondary,
}

/// What the input source has for this frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Input {
    /// Nothing pressed this frame.
    Idle,
    Intent(Intent),
    /// Stop playing.
    Quit,
}

/// Delivers edge-triggered input, one poll per frame.
pub trait InputSource {
    fn poll(&mut self) -> Input;
}
