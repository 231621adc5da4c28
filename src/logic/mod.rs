//! Matchmaking logic: selection, removal, undo/reset, setup.

mod removal;
mod rewind;
mod selection;
mod setup;

pub use removal::remove_contestant;
pub use rewind::{reset_cooldowns, undo_last};
pub use selection::select_opponent;
pub use setup::{new_game, rename_all};
