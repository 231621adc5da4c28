//! Data structures for the matchup tracker: contestants, history, matchmaker state.

mod contestant;
mod history;
mod matchmaker;

pub use contestant::{Contestant, ContestantId, ContestantView};
pub use history::{History, Snapshot};
pub use matchmaker::{Matchmaker, MatchmakerError, Outcome, MIN_ELIGIBLE, ROSTER_SIZE};
