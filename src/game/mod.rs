//! The playable game: state, moves, dealing and the frame loop.

mod deal;
mod state;

pub use state::{DealOutcome, Game, Status};
