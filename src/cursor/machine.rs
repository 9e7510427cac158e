//! The cursor state machine.
//!
//! Every transition has two phases: move, then clamp. The move phase only
//! adjusts the raw position/depth; the clamp phase bounds depth by what the
//! target slot actually holds. Picks and places reuse the clamp after they
//! change a slot's length.

use log::trace;
use serde::{Deserialize, Serialize};

use super::position::{CursorPos, CursorTarget, Direction};
use crate::board::Board;

/// Raw depth meaning "the bottom of whatever is there". Clamping resolves
/// it to the slot's top card.
pub const DEPTH_BOTTOM: u8 = 15;

/// Deepest dragon button index.
pub const LAST_TRIGGER: u8 = 2;

/// Selected position and depth.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cursor {
    pos: CursorPos,
    depth: u8,
}

impl Cursor {
    /// Cursor at `pos`, resting on that slot's top card.
    #[must_use]
    pub fn at(pos: CursorPos, board: &Board) -> Self {
        let mut cursor = Cursor {
            pos,
            depth: DEPTH_BOTTOM,
        };
        cursor.clamp(board);
        cursor
    }

    #[must_use]
    pub fn position(&self) -> CursorPos {
        self.pos
    }

    #[must_use]
    pub fn depth(&self) -> usize {
        usize::from(self.depth)
    }

    #[must_use]
    pub fn target(&self) -> CursorTarget {
        self.pos.target()
    }

    /// Apply a directional input and clamp.
    pub fn move_in(&mut self, direction: Direction, board: &Board) {
        self.step(direction, !board.hand_is_empty(), board);
        self.clamp(board);
        trace!("cursor {direction:?} -> {} depth {}", self.pos, self.depth);
    }

    /// Jump to `pos` and rest on its top card.
    pub fn reset(&mut self, pos: CursorPos, board: &Board) {
        self.pos = pos;
        self.settle(board);
    }

    /// Re-rest on the current slot's top card after its length changed.
    pub fn settle(&mut self, board: &Board) {
        self.depth = DEPTH_BOTTOM;
        self.move_in(Direction::Down, board);
    }

    /// Move phase.
    fn step(&mut self, direction: Direction, holding: bool, board: &Board) {
        match direction {
            Direction::Left | Direction::Right => {
                let advance = |pos: CursorPos| match direction {
                    Direction::Left => pos.prev(),
                    _ => pos.next(),
                };
                self.pos = advance(self.pos);
                self.depth = DEPTH_BOTTOM;

                if self.pos.is_dragon_action() {
                    if holding {
                        // Held cards cannot press the dragon buttons
                        self.pos = advance(self.pos);
                    } else {
                        self.depth = 0;
                    }
                }
            }
            Direction::Up => {
                let browsable = match self.pos.target() {
                    CursorTarget::DragonAction => true,
                    CursorTarget::Slot(slot) => slot.is_tableau() && board.hand_is_empty(),
                };
                if self.depth > 0 && browsable {
                    self.depth -= 1;
                }
            }
            Direction::Down => {
                self.depth = self.depth.saturating_add(1);
            }
        }
    }

    /// Clamp phase.
    fn clamp(&mut self, board: &Board) {
        let max = match self.pos.target() {
            CursorTarget::DragonAction => LAST_TRIGGER,
            CursorTarget::Slot(slot) => board.top_card(slot) as u8,
        };
        self.depth = self.depth.min(max);
    }
}
