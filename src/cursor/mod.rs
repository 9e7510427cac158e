//! Cursor selection state machine.
//!
//! - [`CursorPos`]: one of 16 positions (11 card slots, the dragon buttons,
//!   four foundations)
//! - [`Cursor`]: position plus depth, moved by [`Direction`] inputs and
//!   clamped to the occupied length of the target slot

pub mod machine;
pub mod position;

pub use machine::{Cursor, DEPTH_BOTTOM, LAST_TRIGGER};
pub use position::{CursorPos, CursorTarget, Direction, CURSOR_POSITIONS};
