//! The game aggregate: board, hand, cursor and pick origin.
//!
//! ## Game
//!
//! One `Game` owns everything about a single table:
//! - the [`Board`] (hand included)
//! - the [`Cursor`]
//! - where the held cards were picked from, for cancel
//! - the dragon trigger state as of the last redraw
//!
//! Every operation runs to completion before returning. A rejected
//! operation leaves all of the above untouched.

use log::{debug, info};

use crate::automation::{dragon_triggers, DragonTriggers};
use crate::board::{Board, SlotId};
use crate::core::{ConfigError, Dragon, GameConfig, Rejection};
use crate::cursor::{Cursor, CursorPos, Direction};
use crate::frontend::{Anchor, Frontend, Input, InputSource, Intent, Slide};
use crate::rules::{check_pick, check_place, PlaceMode};

/// Whether the deal is still in progress after a frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Playing,
    Won,
}

/// How a deal ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DealOutcome {
    Won,
    /// The input source quit before the deal was won.
    Quit,
}

/// Authoritative state of one table.
#[derive(Clone, Debug)]
pub struct Game {
    pub(crate) board: Board,
    pub(crate) cursor: Cursor,
    pub(crate) came_from: Option<CursorPos>,
    pub(crate) triggers: DragonTriggers,
    pub(crate) config: GameConfig,
    pub(crate) seed: Option<u64>,
}

impl Default for Game {
    fn default() -> Self {
        Self::assemble(Board::new(), GameConfig::default())
    }
}

impl Game {
    /// Create an empty table. Call [`Game::deal`] to start playing.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        Self::with_board(Board::new(), config)
    }

    /// Start from an arbitrary board, cursor on the start column.
    ///
    /// The board is taken as-is; nothing checks it holds a full deck.
    pub fn with_board(board: Board, config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::assemble(board, config))
    }

    /// `config` must already be valid.
    fn assemble(board: Board, config: GameConfig) -> Self {
        let start = CursorPos::column(usize::from(config.start_column));
        let cursor = Cursor::at(start, &board);
        let triggers = dragon_triggers(&board);
        Self {
            board,
            cursor,
            came_from: None,
            triggers,
            config,
            seed: None,
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Where the held cards were picked from.
    #[must_use]
    pub fn came_from(&self) -> Option<CursorPos> {
        self.came_from
    }

    /// Dragon trigger state as of the last redraw.
    #[must_use]
    pub fn triggers(&self) -> DragonTriggers {
        self.triggers
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Seed of the current deal, if it was dealt by the engine.
    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    #[must_use]
    pub fn is_holding(&self) -> bool {
        !self.board.hand_is_empty()
    }

    // === Cursor ===

    pub fn move_cursor(&mut self, direction: Direction) {
        self.cursor.move_in(direction, &self.board);
    }

    /// Jump to `pos`, resting on its top card.
    pub fn select(&mut self, pos: CursorPos) {
        self.cursor.reset(pos, &self.board);
    }

    // === Moves ===

    /// Lift the run under the cursor into the hand.
    ///
    /// Returns the number of cards lifted.
    pub fn pick(&mut self) -> Result<usize, Rejection> {
        let pos = self.cursor.position();
        let depth = self.cursor.depth();
        check_pick(&self.board, pos, depth)?;
        let Some(slot) = pos.slot() else {
            return Err(Rejection::NotACardSlot);
        };

        let run = self.board.split_off(slot, depth);
        let lifted = run.len();
        self.board.extend(SlotId::HAND, run);
        self.came_from = Some(pos);
        self.cursor.settle(&self.board);
        Ok(lifted)
    }

    /// Lay the hand on the slot under the cursor.
    pub fn place(&mut self) -> Result<SlotId, Rejection> {
        self.place_with(PlaceMode::Player)
    }

    pub(crate) fn place_with(&mut self, mode: PlaceMode) -> Result<SlotId, Rejection> {
        let pos = self.cursor.position();
        check_place(&self.board, pos, self.came_from, mode)?;
        let Some(slot) = pos.slot() else {
            return Err(Rejection::NotACardSlot);
        };

        // Lands at the first empty index of the destination
        let cards = self.board.split_off(SlotId::HAND, 0);
        self.board.extend(slot, cards);
        self.came_from = None;
        self.cursor.settle(&self.board);
        Ok(slot)
    }

    /// Slide the held cards back to where they were picked from.
    pub fn cancel(&mut self, frontend: &mut impl Frontend) -> Result<SlotId, Rejection> {
        if self.board.hand_is_empty() {
            return Err(Rejection::HandEmpty);
        }
        let origin = self.came_from.ok_or(Rejection::NothingToCancel)?;
        let slot = origin.slot().ok_or(Rejection::NotACardSlot)?;

        let from = Anchor::slot(self.cursor.position(), self.cursor.depth());
        let to = Anchor::slot(origin, self.board.len(slot));
        frontend.slide(&Slide {
            from,
            to,
            cards: self.board.hand(),
            frames: self.config.slide_frames,
            show_cursor: true,
        });

        self.return_to_origin()?;
        self.sync(frontend);
        Ok(slot)
    }

    /// Put the hand back at its origin without any rule checks.
    pub(crate) fn return_to_origin(&mut self) -> Result<SlotId, Rejection> {
        let origin = self.came_from.ok_or(Rejection::NothingToCancel)?;
        let slot = origin.slot().ok_or(Rejection::NotACardSlot)?;

        let cards = self.board.split_off(SlotId::HAND, 0);
        self.board.extend(slot, cards);
        self.came_from = None;
        self.cursor.reset(origin, &self.board);
        Ok(slot)
    }

    // === Frame loop ===

    /// Hand the changed slots to the renderer.
    ///
    /// Triggers are recomputed whenever anything changed.
    pub fn sync(&mut self, frontend: &mut impl Frontend) {
        let changed = self.board.take_changed();
        if !changed.is_empty() {
            self.triggers = dragon_triggers(&self.board);
        }
        frontend.redraw(&self.board, changed, self.triggers);
    }

    /// Apply one intent.
    pub fn handle(
        &mut self,
        intent: Intent,
        frontend: &mut impl Frontend,
    ) -> Result<(), Rejection> {
        match intent {
            Intent::Move(direction) => {
                self.move_cursor(direction);
                Ok(())
            }
            Intent::Primary if self.is_holding() => self.place().map(drop),
            Intent::Primary if self.cursor.position().is_dragon_action() => {
                let kind = Dragon::from_index(self.cursor.depth()).ok_or(Rejection::NotOnTrigger)?;
                self.collect_dragons(kind, frontend).map(drop)
            }
            Intent::Primary => self.pick().map(drop),
            Intent::Secondary if self.cursor.position().is_dragon_action() => Ok(()),
            Intent::Secondary if self.is_holding() => self.cancel(frontend).map(drop),
            Intent::Secondary => self.auto_move(frontend).map(drop),
        }
    }

    /// Run one frame: apply at most one intent, redraw, check for a win.
    ///
    /// Rejected intents are ignored; the player just sees nothing happen.
    pub fn step(&mut self, intent: Option<Intent>, frontend: &mut impl Frontend) -> Status {
        if let Some(intent) = intent {
            if let Err(rejection) = self.handle(intent, frontend) {
                debug!("{intent:?} rejected: {rejection}");
            }
        }
        self.sync(frontend);

        if self.is_won() {
            Status::Won
        } else {
            Status::Playing
        }
    }

    /// Play the current deal until it is won or the input quits.
    ///
    /// A win runs the teardown before returning.
    pub fn play_deal(
        &mut self,
        input: &mut impl InputSource,
        frontend: &mut impl Frontend,
    ) -> DealOutcome {
        loop {
            let status = match input.poll() {
                Input::Quit => return DealOutcome::Quit,
                Input::Idle => self.step(None, frontend),
                Input::Intent(intent) => self.step(Some(intent), frontend),
            };
            if status == Status::Won {
                info!("deal won (seed {:?})", self.seed);
                self.undeal(frontend);
                return DealOutcome::Won;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Card, Suit};
    use crate::frontend::{Headless, Recorder};

    fn b(v: u8) -> Card {
        Card::number(Suit::Black, v)
    }
    fn r(v: u8) -> Card {
        Card::number(Suit::Red, v)
    }

    fn game_with(setup: impl FnOnce(&mut Board)) -> Game {
        let mut board = Board::new();
        setup(&mut board);
        board.take_changed();
        Game::with_board(board, GameConfig::default()).unwrap()
    }

    #[test]
    fn test_new_validates_config() {
        assert!(Game::new(GameConfig::default()).is_ok());
        assert!(Game::new(GameConfig::new().with_start_column(9)).is_err());
    }

    #[test]
    fn test_with_board_rejects_bad_start_column() {
        let config = GameConfig::new().with_start_column(9);
        assert_eq!(
            Game::with_board(Board::new(), config).err(),
            Some(ConfigError::StartColumnOutOfRange(9))
        );

        let game = Game::with_board(Board::new(), GameConfig::new().with_start_column(7)).unwrap();
        assert_eq!(game.cursor().position(), CursorPos::column(7));
    }

    #[test]
    fn test_pick_single_card() {
        let mut game = game_with(|board| board.extend(SlotId::tableau(0), [b(9), r(2)]));
        game.select(CursorPos::column(0));

        assert_eq!(game.pick(), Ok(1));
        assert_eq!(game.board().hand(), &[r(2)]);
        assert_eq!(game.board().cards(SlotId::tableau(0)), &[b(9)]);
        assert_eq!(game.came_from(), Some(CursorPos::column(0)));
        assert_eq!(game.cursor().depth(), 0);
    }

    #[test]
    fn test_pick_run_from_depth() {
        let mut game =
            game_with(|board| board.extend(SlotId::tableau(1), [b(1), r(5), b(4), r(3)]));
        game.select(CursorPos::column(1));
        game.move_cursor(Direction::Up);
        game.move_cursor(Direction::Up);

        assert_eq!(game.pick(), Ok(3));
        assert_eq!(game.board().hand(), &[r(5), b(4), r(3)]);
        assert_eq!(game.board().cards(SlotId::tableau(1)), &[b(1)]);
    }

    #[test]
    fn test_rejected_pick_changes_nothing() {
        let mut game = game_with(|board| board.extend(SlotId::tableau(1), [r(5), r(4)]));
        game.select(CursorPos::column(1));
        game.move_cursor(Direction::Up);
        let before = game.board().clone();
        let cursor = game.cursor();

        assert_eq!(game.pick(), Err(Rejection::RunSameSuit { depth: 1 }));
        assert_eq!(game.board(), &before);
        assert_eq!(game.cursor(), cursor);
        assert_eq!(game.came_from(), None);
    }

    #[test]
    fn test_place_appends_after_top() {
        let mut game = game_with(|board| {
            board.push(SlotId::tableau(0), r(2));
            board.push(SlotId::tableau(3), b(3));
        });
        game.select(CursorPos::column(0));
        game.pick().unwrap();
        game.select(CursorPos::column(3));

        assert_eq!(game.place(), Ok(SlotId::tableau(3)));
        assert_eq!(game.board().cards(SlotId::tableau(3)), &[b(3), r(2)]);
        assert!(!game.is_holding());
        assert_eq!(game.came_from(), None);
        assert_eq!(game.cursor().depth(), 1);
    }

    #[test]
    fn test_place_back_on_origin_bypasses_rules() {
        let mut game = game_with(|board| board.extend(SlotId::tableau(0), [r(9), r(2)]));
        game.select(CursorPos::column(0));
        game.pick().unwrap();

        assert_eq!(game.place(), Ok(SlotId::tableau(0)));
        assert_eq!(game.board().cards(SlotId::tableau(0)), &[r(9), r(2)]);
    }

    #[test]
    fn test_rejected_place_keeps_hand() {
        let mut game = game_with(|board| {
            board.push(SlotId::tableau(0), r(2));
            board.push(SlotId::tableau(1), r(3));
        });
        game.select(CursorPos::column(0));
        game.pick().unwrap();
        game.select(CursorPos::column(1));

        assert!(game.place().is_err());
        assert_eq!(game.board().hand(), &[r(2)]);
        assert_eq!(game.came_from(), Some(CursorPos::column(0)));
    }

    #[test]
    fn test_cancel_restores_source() {
        let mut game = game_with(|board| board.extend(SlotId::tableau(2), [b(8), r(7), b(6)]));
        let before = game.board().cards(SlotId::tableau(2)).to_vec();
        game.select(CursorPos::column(2));
        game.move_cursor(Direction::Up);
        game.pick().unwrap();
        game.move_cursor(Direction::Right);

        let mut recorder = Recorder::new();
        assert_eq!(game.cancel(&mut recorder), Ok(SlotId::tableau(2)));

        assert_eq!(game.board().cards(SlotId::tableau(2)), before.as_slice());
        assert!(!game.is_holding());
        assert_eq!(game.cursor().position(), CursorPos::column(2));
        assert_eq!(recorder.slides.len(), 1);
        assert_eq!(recorder.slides[0].cards, vec![r(7), b(6)]);
        assert_eq!(recorder.slides[0].to, Anchor::slot(CursorPos::column(2), 1));
    }

    #[test]
    fn test_cancel_without_hand() {
        let mut game = Game::default();
        assert_eq!(game.cancel(&mut Headless), Err(Rejection::HandEmpty));
    }

    #[test]
    fn test_primary_dispatch() {
        let mut game = game_with(|board| {
            board.push(SlotId::tableau(5), r(2));
            board.push(SlotId::tableau(6), b(3));
        });

        // Cursor starts on column 5
        game.handle(Intent::Primary, &mut Headless).unwrap();
        assert!(game.is_holding());

        game.handle(Intent::Move(Direction::Right), &mut Headless).unwrap();
        game.handle(Intent::Primary, &mut Headless).unwrap();
        assert!(!game.is_holding());
        assert_eq!(game.board().cards(SlotId::tableau(6)), &[b(3), r(2)]);
    }

    #[test]
    fn test_secondary_on_dragon_buttons_is_inert() {
        let mut game = Game::default();
        game.select(CursorPos::DRAGON_ACTION);
        assert_eq!(game.handle(Intent::Secondary, &mut Headless), Ok(()));
    }

    #[test]
    fn test_sync_drains_changes() {
        let mut game = game_with(|board| board.push(SlotId::tableau(5), r(2)));
        game.pick().unwrap();

        let mut recorder = Recorder::new();
        game.sync(&mut recorder);
        assert!(recorder.redraws[0].contains(SlotId::tableau(5)));
        assert!(game.board().changed().is_empty());

        game.sync(&mut recorder);
        assert!(recorder.redraws[1].is_empty());
    }
}
