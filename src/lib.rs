//! Last-person-standing matchup tracker: matchmaking engine, undo history, and a small web API.

pub mod api;
pub mod config;
pub mod logic;
pub mod models;

pub use config::EngineConfig;
pub use logic::{
    new_game, remove_contestant, rename_all, reset_cooldowns, select_opponent, undo_last,
};
pub use models::{
    Contestant, ContestantId, ContestantView, History, Matchmaker, MatchmakerError, Outcome,
    Snapshot, MIN_ELIGIBLE, ROSTER_SIZE,
};
