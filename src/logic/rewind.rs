//! Undo and reset: history-driven changes to the queues.

use crate::models::{Matchmaker, Outcome};

/// Revert the last recorded change by popping the history stack.
///
/// The last opponent is left alone unless the engine is configured to restore it, so after a
/// plain undo it may still name the contestant from the undone match.
/// At the history floor this is a no-op.
pub fn undo_last(matchmaker: &mut Matchmaker) -> Outcome {
    let restore_last = matchmaker.config.undo_restores_last_opponent;
    let Some(previous) = matchmaker.history.rewind() else {
        log::debug!("Nothing to undo");
        return Outcome::Unchanged;
    };
    let eligible = previous.eligible.clone();
    let cooldown = previous.cooldown.clone();
    let last_opponent = previous.last_opponent;

    matchmaker.eligible = eligible;
    matchmaker.cooldown = cooldown;
    if restore_last {
        matchmaker.last_opponent = last_opponent;
    }
    log::info!("Undid last change ({} snapshot(s) left)", matchmaker.history.len());
    matchmaker.log_queues();
    Outcome::Applied
}

/// Return every cooling-down contestant to the eligible queue (appended in cooldown order).
/// Names, removals and the last opponent are kept. Records a snapshot.
pub fn reset_cooldowns(matchmaker: &mut Matchmaker) -> Outcome {
    let cooled = std::mem::take(&mut matchmaker.cooldown);
    matchmaker.eligible.extend(cooled);

    let snapshot = matchmaker.snapshot();
    matchmaker.history.record(snapshot);
    log::info!("Reset cooldowns: all {} contestants eligible", matchmaker.eligible.len());
    matchmaker.log_queues();
    Outcome::Applied
}
