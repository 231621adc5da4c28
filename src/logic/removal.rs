//! Removal: take a contestant out of the tournament for good.

use crate::models::{ContestantId, Matchmaker, MatchmakerError, Outcome};
use std::collections::VecDeque;

/// Permanently remove `id` from play.
///
/// Both queues are merged (eligible first) and `id` is dropped from the result. The last
/// opponent is never selectable straight after a removal: unless it is the removed contestant,
/// it becomes the only cooldown entry and everybody else is eligible.
///
/// Removal is a hard checkpoint: the history is reset to the post-removal state.
pub fn remove_contestant(
    matchmaker: &mut Matchmaker,
    id: ContestantId,
) -> Result<Outcome, MatchmakerError> {
    matchmaker.alive_contestant_mut(id)?.remove();

    let last = matchmaker.last_opponent;
    let remaining: VecDeque<ContestantId> = matchmaker
        .eligible
        .drain(..)
        .chain(matchmaker.cooldown.drain(..))
        .filter(|&c| c != id && Some(c) != last)
        .collect();

    matchmaker.cooldown = match last {
        Some(last) if last != id => VecDeque::from([last]),
        _ => VecDeque::new(),
    };
    if last == Some(id) {
        matchmaker.last_opponent = None;
    }
    matchmaker.eligible = remaining;

    let checkpoint = matchmaker.snapshot();
    matchmaker.history.reset_to(checkpoint);
    log::info!(
        "Removed contestant {} ({} still alive)",
        id,
        matchmaker.num_alive()
    );
    matchmaker.log_queues();
    Ok(Outcome::Applied)
}
