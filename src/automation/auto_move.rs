//! Sending a single exposed card straight to a foundation.

use log::debug;

use crate::board::{SlotId, SlotKind};
use crate::core::Rejection;
use crate::cursor::CursorPos;
use crate::frontend::{Anchor, Frontend, Slide};
use crate::game::Game;
use crate::rules::{check_place, PlaceMode};

impl Game {
    /// Move the card under the cursor to the first foundation that takes it.
    ///
    /// Only the top card of a tableau column or holding slot qualifies.
    /// Foundations are tried phoenix first, then left to right. If none
    /// accepts, the card goes back where it was and the cursor is restored.
    pub fn auto_move(&mut self, frontend: &mut impl Frontend) -> Result<SlotId, Rejection> {
        if self.is_holding() {
            return Err(Rejection::HandOccupied);
        }
        let origin = self.cursor.position();
        let source = match origin.slot() {
            Some(slot) if matches!(slot.kind(), SlotKind::Tableau | SlotKind::DragonHolding) => {
                slot
            }
            _ => return Err(Rejection::NotAutoMovable),
        };
        if self.board.is_empty(source) {
            return Err(Rejection::EmptySlot);
        }
        let depth = self.cursor.depth();
        if depth != self.board.top_card(source) {
            return Err(Rejection::NotTopCard);
        }

        self.pick()?;

        let accepting = SlotId::foundation_slots().find_map(|dest| {
            let pos = CursorPos::from_slot(dest)?;
            check_place(&self.board, pos, self.came_from, PlaceMode::Strict)
                .ok()
                .map(|()| (dest, pos))
        });

        let Some((dest, dest_pos)) = accepting else {
            self.return_to_origin()?;
            return Err(Rejection::NoFoundationAccepts);
        };

        self.sync(frontend);
        frontend.slide(&Slide {
            from: Anchor::slot(origin, depth),
            to: Anchor::slot(dest_pos, self.board.len(dest)),
            cards: self.board.hand(),
            frames: self.config.slide_frames,
            show_cursor: false,
        });

        self.cursor.reset(dest_pos, &self.board);
        self.place_with(PlaceMode::Strict)?;
        self.cursor.reset(origin, &self.board);
        self.sync(frontend);
        debug!("auto-moved {source} -> {dest}");
        Ok(dest)
    }
}
