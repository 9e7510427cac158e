//! Move legality.
//!
//! Pick and place rules per slot kind:
//! - Tableau: alternating suits, descending by one, any run onto empty
//! - Dragon holding: one card, empty slot only; full dragon sets never leave
//! - Phoenix foundation: the phoenix alone
//! - Numbered foundations: single suit, ascending from 1
//! - Dragon buttons: never a destination

pub mod legality;

pub use legality::{check_pick, check_place, check_run, PlaceMode};
