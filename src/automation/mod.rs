//! Moves the engine makes on the player's behalf: dragon collection and
//! single-card auto-move to the foundations.

mod auto_move;
mod collect;
pub mod dragons;

pub use dragons::{collectable_slots, collection_destination, dragon_triggers, DragonTriggers};
