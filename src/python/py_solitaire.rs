//! The `Solitaire` class.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::automation::dragon_triggers;
use crate::board::RawBoard;
use crate::core::{Dragon, GameConfig, Rejection};
use crate::cursor::Direction;
use crate::frontend::{Headless, Intent};
use crate::game::{Game, Status};

fn rejected(rejection: Rejection) -> PyErr {
    PyErr::new::<PyValueError, _>(format!("{rejection}"))
}

fn parse_intent(name: &str) -> PyResult<Intent> {
    let intent = match name.to_ascii_lowercase().as_str() {
        "left" => Intent::Move(Direction::Left),
        "right" => Intent::Move(Direction::Right),
        "up" => Intent::Move(Direction::Up),
        "down" => Intent::Move(Direction::Down),
        "primary" | "a" => Intent::Primary,
        "secondary" | "b" => Intent::Secondary,
        other => {
            return Err(PyErr::new::<PyValueError, _>(format!("unknown intent '{other}'")));
        }
    };
    Ok(intent)
}

/// Python wrapper for a headless [`Game`].
///
/// `press` mirrors the handheld: illegal presses do nothing. The direct
/// methods (`pick`, `place`, ...) raise `ValueError` with the reason instead.
#[pyclass(name = "Solitaire")]
pub struct PySolitaire {
    game: Game,
}

#[pymethods]
impl PySolitaire {
    /// Create an empty table.
    ///
    /// # Arguments
    /// - start_column: Column the cursor rests on after a deal (0-7)
    #[new]
    #[pyo3(signature = (start_column = 5))]
    fn new(start_column: u8) -> PyResult<Self> {
        let config = GameConfig::new().with_start_column(start_column).instant();
        let game = Game::new(config).map_err(|e| PyErr::new::<PyValueError, _>(format!("{e}")))?;
        Ok(Self { game })
    }

    /// Shuffle and deal. The same seed always gives the same layout.
    fn deal(&mut self, seed: u64) {
        self.game.deal_seeded(seed, &mut Headless);
    }

    /// Apply one button press. Returns True once the deal is won.
    fn press(&mut self, intent: &str) -> PyResult<bool> {
        let intent = parse_intent(intent)?;
        let status = self.game.step(Some(intent), &mut Headless);
        Ok(status == Status::Won)
    }

    /// Pick up the run under the cursor. Returns the number of cards lifted.
    fn pick(&mut self) -> PyResult<usize> {
        self.game.pick().map_err(rejected)
    }

    /// Place the hand under the cursor. Returns the destination slot index.
    fn place(&mut self) -> PyResult<u8> {
        self.game.place().map(|slot| slot.raw()).map_err(rejected)
    }

    /// Return the hand to where it came from.
    fn cancel(&mut self) -> PyResult<u8> {
        self.game.cancel(&mut Headless).map(|slot| slot.raw()).map_err(rejected)
    }

    /// Send the card under the cursor to a foundation.
    fn auto_move(&mut self) -> PyResult<u8> {
        self.game.auto_move(&mut Headless).map(|slot| slot.raw()).map_err(rejected)
    }

    /// Collect a dragon set: 0 = claw, 1 = paw, 2 = hoof.
    fn collect(&mut self, dragon: usize) -> PyResult<u8> {
        let kind = Dragon::from_index(dragon)
            .ok_or_else(|| PyErr::new::<PyValueError, _>(format!("no dragon {dragon}")))?;
        self.game
            .collect_dragons(kind, &mut Headless)
            .map(|slot| slot.raw())
            .map_err(rejected)
    }

    /// Raw board: 16 slots of 16 bytes, unused entries 0xFF.
    fn board(&self) -> RawBoard {
        self.game.board().to_raw()
    }

    /// Cursor as (position, depth).
    fn cursor(&self) -> (usize, usize) {
        let cursor = self.game.cursor();
        (cursor.position().index(), cursor.depth())
    }

    /// Lit dragon buttons as [claw, paw, hoof].
    fn triggers(&self) -> [bool; 3] {
        dragon_triggers(self.game.board()).as_array()
    }

    fn is_won(&self) -> bool {
        self.game.is_won()
    }

    #[getter]
    fn seed(&self) -> Option<u64> {
        self.game.seed()
    }

    fn __repr__(&self) -> String {
        format!(
            "Solitaire(seed={:?}, cursor={}, won={})",
            self.game.seed(),
            self.game.cursor().position(),
            self.game.is_won()
        )
    }
}
