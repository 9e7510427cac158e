//! Property tests over random play.
//!
//! Random intent sequences on seeded deals must never create, lose or
//! duplicate a card, and never break a tableau run or a foundation.

use proptest::prelude::*;

use shenzhen_core::board::{SlotId, SlotKind};
use shenzhen_core::core::{Card, Dragon};
use shenzhen_core::cursor::{CursorPos, Direction};
use shenzhen_core::frontend::{Headless, Intent};
use shenzhen_core::game::{Game, Status};
use shenzhen_core::rules::check_run;

fn intent() -> impl Strategy<Value = Intent> {
    prop_oneof![
        2 => Just(Intent::Move(Direction::Left)),
        2 => Just(Intent::Move(Direction::Right)),
        1 => Just(Intent::Move(Direction::Up)),
        1 => Just(Intent::Move(Direction::Down)),
        3 => Just(Intent::Primary),
        2 => Just(Intent::Secondary),
    ]
}

fn dealt(seed: u64) -> Game {
    let mut game = Game::default();
    game.deal_seeded(seed, &mut Headless);
    game
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_cards_are_conserved(
        seed in any::<u64>(),
        intents in prop::collection::vec(intent(), 0..400)
    ) {
        let mut game = dealt(seed);
        for intent in intents {
            if game.step(Some(intent), &mut Headless) == Status::Won {
                break;
            }
            prop_assert!(game.board().audit().is_ok(), "{:?}", game.board().audit());
        }
    }

    #[test]
    fn prop_tableau_placements_form_runs(
        seed in any::<u64>(),
        intents in prop::collection::vec(intent(), 0..400)
    ) {
        let mut game = dealt(seed);
        for intent in intents {
            let target = game.cursor().position().slot().filter(|s| s.kind() == SlotKind::Tableau);
            let placing = game.is_holding()
                && intent == Intent::Primary
                && game.came_from() != Some(game.cursor().position());
            let before = target.map(|slot| game.board().len(slot)).unwrap_or(0);

            game.step(Some(intent), &mut Headless);

            if let (true, Some(slot)) = (placing, target) {
                let cards = game.board().cards(slot);
                if cards.len() > before && before > 0 {
                    prop_assert!(check_run(&cards[before - 1..]).is_ok(), "{:?}", cards);
                }
            }
        }
    }

    #[test]
    fn prop_pick_then_cancel_restores(seed in any::<u64>(), col in 0usize..8, up in 0usize..5) {
        let mut game = dealt(seed);
        game.select(CursorPos::column(col));
        for _ in 0..up {
            game.move_cursor(Direction::Up);
        }
        let before = game.board().clone();

        if game.pick().is_ok() {
            game.move_cursor(Direction::Right);
            prop_assert!(game.cancel(&mut Headless).is_ok());
        }
        prop_assert_eq!(game.board(), &before);
        prop_assert!(game.board().hand_is_empty());
    }

    #[test]
    fn prop_triggers_match_exposed_dragons(
        seed in any::<u64>(),
        intents in prop::collection::vec(intent(), 0..200)
    ) {
        let mut game = dealt(seed);
        for intent in intents {
            game.step(Some(intent), &mut Headless);
        }

        let board = game.board();
        let room = SlotId::holding_slots().any(|s| board.is_empty(s));
        for kind in Dragon::ALL {
            let dragon = Card::dragon(kind);
            let exposed = SlotId::tableau_slots()
                .chain(SlotId::holding_slots())
                .filter(|&s| board.top(s) == Some(dragon))
                .count();
            let showing = SlotId::holding_slots().any(|s| board.top(s) == Some(dragon));
            prop_assert_eq!(game.triggers().is_active(kind), exposed == 4 && (room || showing));
        }
    }
}
