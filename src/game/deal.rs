//! Dealing, teardown and the win condition.

use log::{debug, info};

use crate::board::{SlotId, TABLEAU_COLUMNS};
use crate::core::{full_deck, Card, EntropySource, GameRng};
use crate::cursor::CursorPos;
use crate::frontend::{Anchor, Frontend, InputSource, Slide};

use super::state::{DealOutcome, Game};

impl Game {
    /// Deal a fresh layout using the next seed from `entropy`.
    ///
    /// Returns the seed, which reproduces the layout via
    /// [`Game::deal_seeded`].
    pub fn deal(&mut self, entropy: &mut impl EntropySource, frontend: &mut impl Frontend) -> u64 {
        let seed = entropy.next_seed();
        self.deal_seeded(seed, frontend);
        seed
    }

    /// Shuffle the canonical deck with `seed` and deal it.
    pub fn deal_seeded(&mut self, seed: u64, frontend: &mut impl Frontend) {
        let mut rng = GameRng::new(seed);
        let mut deck = full_deck();
        rng.shuffle_deck(&mut deck);

        info!("dealing seed {seed:#018x}");
        self.deal_deck(&deck, frontend);
        self.seed = Some(seed);
    }

    /// Clear the table and deal `deck` face up, row by row.
    ///
    /// Card `i` lands in column `i % 8` at depth `i / 8`, so a 40-card deck
    /// makes five rows. Everything else, hand included, starts empty.
    pub fn deal_deck(&mut self, deck: &[Card], frontend: &mut impl Frontend) {
        self.board.clear();
        self.came_from = None;
        self.seed = None;
        self.sync(frontend);

        for (i, &card) in deck.iter().enumerate() {
            let col = i % TABLEAU_COLUMNS;
            let depth = i / TABLEAU_COLUMNS;
            frontend.slide(&Slide {
                from: Anchor::OffBoard,
                to: Anchor::slot(CursorPos::column(col), depth),
                cards: &[card],
                frames: self.config.deal_frames,
                show_cursor: false,
            });
            self.board.push(SlotId::tableau(col), card);
            self.sync(frontend);
        }

        let start = CursorPos::column(usize::from(self.config.start_column));
        self.cursor.reset(start, &self.board);
    }

    /// True once every tableau column and the hand are empty.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.board.hand_is_empty() && SlotId::tableau_slots().all(|slot| self.board.is_empty(slot))
    }

    /// Slide everything left on the table off the bottom of the screen.
    ///
    /// Holding slots and foundations give up one card each per pass until
    /// all are empty. Returns the number of cards removed.
    pub fn undeal(&mut self, frontend: &mut impl Frontend) -> usize {
        let mut removed = 0;
        loop {
            let mut any = false;
            for slot in SlotId::holding_slots().chain(SlotId::foundation_slots()) {
                let depth = self.board.top_card(slot);
                let Some(card) = self.board.pop(slot) else {
                    continue;
                };
                any = true;
                removed += 1;
                self.sync(frontend);

                let Some(pos) = CursorPos::from_slot(slot) else {
                    continue;
                };
                frontend.slide(&Slide {
                    from: Anchor::slot(pos, depth),
                    to: Anchor::OffBoard,
                    cards: &[card],
                    frames: self.config.undeal_frames,
                    show_cursor: false,
                });
            }
            if !any {
                break;
            }
        }
        self.cursor.settle(&self.board);
        debug!("undealt {removed} cards");
        removed
    }

    /// Deal and play until the input quits. Returns the number of deals won.
    pub fn play_session(
        &mut self,
        entropy: &mut impl EntropySource,
        input: &mut impl InputSource,
        frontend: &mut impl Frontend,
    ) -> u32 {
        let mut wins = 0;
        loop {
            self.deal(entropy, frontend);
            match self.play_deal(input, frontend) {
                DealOutcome::Won => wins += 1,
                DealOutcome::Quit => return wins,
            }
        }
    }
}
