//! Dragon collection.

use log::info;

use super::dragons::{collectable_slots, collection_destination, dragon_triggers};
use crate::board::{SlotId, DRAGON_SET};
use crate::core::{Card, Dragon, Rejection};
use crate::cursor::CursorPos;
use crate::frontend::{Anchor, Frontend, Slide};
use crate::game::Game;

impl Game {
    /// Gather all four exposed copies of `kind` into one holding slot and
    /// lock it.
    ///
    /// Each exposed copy slides to the destination in slot order. A copy
    /// already sitting in the destination stays where it is.
    pub fn collect_dragons(
        &mut self,
        kind: Dragon,
        frontend: &mut impl Frontend,
    ) -> Result<SlotId, Rejection> {
        if self.is_holding() {
            return Err(Rejection::HandOccupied);
        }
        if !dragon_triggers(&self.board).is_active(kind) {
            return Err(Rejection::TriggerInactive);
        }
        let dest = collection_destination(&self.board, kind).ok_or(Rejection::TriggerInactive)?;
        let dest_pos = CursorPos::from_slot(dest).ok_or(Rejection::NotACardSlot)?;
        let dragon = Card::dragon(kind);

        for slot in collectable_slots().filter(|&slot| slot != dest) {
            if self.board.top(slot) != Some(dragon) {
                continue;
            }
            let Some(from_pos) = CursorPos::from_slot(slot) else {
                continue;
            };
            let depth = self.board.top_card(slot);
            self.board.pop(slot);
            self.sync(frontend);

            frontend.slide(&Slide {
                from: Anchor::slot(from_pos, depth),
                to: Anchor::slot(dest_pos, 0),
                cards: &[dragon],
                frames: self.config.slide_frames,
                show_cursor: false,
            });

            if self.board.is_empty(dest) {
                self.board.push(dest, dragon);
                self.sync(frontend);
            }
        }

        self.board.fill(dest, dragon, DRAGON_SET);
        self.cursor.settle(&self.board);
        self.sync(frontend);
        info!("collected {kind:?} dragons into {dest}");
        Ok(dest)
    }
}

#[cfg(test)]
mod tests {
    use crate::board::{Board, SlotId};
    use crate::core::{Card, Dragon, GameConfig, Rejection, Suit};
    use crate::cursor::CursorPos;
    use crate::frontend::{Headless, Recorder};
    use crate::game::Game;

    fn claw() -> Card {
        Card::dragon(Dragon::Claw)
    }

    fn exposed_claws() -> Board {
        let mut board = Board::new();
        for col in 0..4 {
            board.push(SlotId::tableau(col), Card::number(Suit::Red, 7));
            board.push(SlotId::tableau(col), claw());
        }
        board.take_changed();
        board
    }

    #[test]
    fn test_collect_into_first_empty_slot() {
        let mut game = Game::with_board(exposed_claws(), GameConfig::default()).unwrap();
        let mut recorder = Recorder::new();

        assert_eq!(game.collect_dragons(Dragon::Claw, &mut recorder), Ok(SlotId::holding(0)));

        assert_eq!(game.board().cards(SlotId::holding(0)), &[claw(); 4]);
        assert_eq!(game.board().locked_dragon(SlotId::holding(0)), Some(Dragon::Claw));
        for col in 0..4 {
            assert_eq!(game.board().top(SlotId::tableau(col)), Some(Card::number(Suit::Red, 7)));
        }
        assert_eq!(recorder.slides.len(), 4);
        assert!(!game.triggers().is_active(Dragon::Claw));
    }

    #[test]
    fn test_collect_into_slot_already_showing_dragon() {
        let mut board = exposed_claws();
        let spare = board.pop(SlotId::tableau(3)).unwrap();
        board.push(SlotId::holding(2), spare);
        board.push(SlotId::holding(0), Card::number(Suit::Black, 4));
        let mut game = Game::with_board(board, GameConfig::default()).unwrap();
        let mut recorder = Recorder::new();

        assert_eq!(game.collect_dragons(Dragon::Claw, &mut recorder), Ok(SlotId::holding(2)));
        assert_eq!(game.board().cards(SlotId::holding(2)), &[claw(); 4]);
        assert_eq!(recorder.slides.len(), 3);
    }

    #[test]
    fn test_cursor_resettles_on_emptied_column() {
        let mut game = Game::with_board(exposed_claws(), GameConfig::default()).unwrap();
        game.select(CursorPos::column(0));
        assert_eq!(game.cursor().depth(), 1);

        game.collect_dragons(Dragon::Claw, &mut Headless).unwrap();

        assert_eq!(game.cursor().position(), CursorPos::column(0));
        assert_eq!(game.cursor().depth(), game.board().top_card(SlotId::tableau(0)));
        assert_eq!(game.auto_move(&mut Headless), Err(Rejection::NoFoundationAccepts));
    }

    #[test]
    fn test_collect_inactive_trigger() {
        let mut board = exposed_claws();
        board.push(SlotId::tableau(0), Card::number(Suit::Green, 1));
        let mut game = Game::with_board(board.clone(), GameConfig::default()).unwrap();

        assert_eq!(
            game.collect_dragons(Dragon::Claw, &mut Headless),
            Err(Rejection::TriggerInactive)
        );
        assert_eq!(game.board(), &board);
    }
}
