//! Selection: record that a contestant has just been fought.

use crate::models::{ContestantId, Matchmaker, MatchmakerError, Outcome, MIN_ELIGIBLE};

/// Record a match against `id`.
///
/// 1. Remove `id` from the eligible queue.
/// 2. If fewer than `MIN_ELIGIBLE` remain eligible and more than `MIN_ELIGIBLE` are alive,
///    promote the head of cooldown to the eligible tail. One promotion at most.
/// 3. Append `id` to the cooldown tail and make it the last opponent.
/// 4. Push a snapshot.
///
/// A contestant that is alive but cooling down is a no-op (`Outcome::Unchanged`), or
/// `IneligibleSelection` under strict selection. Unknown or removed ids are errors.
pub fn select_opponent(
    matchmaker: &mut Matchmaker,
    id: ContestantId,
) -> Result<Outcome, MatchmakerError> {
    if !matchmaker.is_alive(id) {
        return Err(MatchmakerError::UnknownContestant(id));
    }
    let Some(pos) = matchmaker.eligible.iter().position(|&e| e == id) else {
        if matchmaker.config.strict_selection {
            return Err(MatchmakerError::IneligibleSelection(id));
        }
        log::warn!("Ignoring selection of contestant {}: cooling down", id);
        return Ok(Outcome::Unchanged);
    };

    matchmaker.eligible.remove(pos);
    if matchmaker.eligible.len() < MIN_ELIGIBLE && matchmaker.num_alive() > MIN_ELIGIBLE {
        if let Some(promoted) = matchmaker.cooldown.pop_front() {
            log::debug!("Promoting contestant {} back to eligible", promoted);
            matchmaker.eligible.push_back(promoted);
        }
    }
    matchmaker.cooldown.push_back(id);
    matchmaker.last_opponent = Some(id);

    let snapshot = matchmaker.snapshot();
    matchmaker.history.record(snapshot);
    log::info!("Selected contestant {}", id);
    matchmaker.log_queues();
    Ok(Outcome::Applied)
}
