//! Setup: new game and bulk naming of the roster.

use crate::models::{Matchmaker, MatchmakerError, Outcome, ROSTER_SIZE};

/// Start over with a fresh roster (default names, everyone eligible, single-snapshot history).
/// The engine configuration is kept.
pub fn new_game(matchmaker: &mut Matchmaker) -> Outcome {
    *matchmaker = Matchmaker::new(matchmaker.config);
    log::info!("New game with {} contestants", ROSTER_SIZE);
    Outcome::Applied
}

/// Rename the whole roster from one name per line (`\n` or `\r\n`). Blank lines are skipped.
///
/// Exactly `ROSTER_SIZE` names are required; they are assigned to ids 0.. in order, removed
/// contestants included. On a count mismatch no name changes.
pub fn rename_all(matchmaker: &mut Matchmaker, text: &str) -> Result<Outcome, MatchmakerError> {
    let names: Vec<&str> = text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .collect();
    if names.len() != ROSTER_SIZE {
        log::warn!("Bulk rename rejected: {} names for {} contestants", names.len(), ROSTER_SIZE);
        return Err(MatchmakerError::WrongNameCount {
            expected: ROSTER_SIZE,
            got: names.len(),
        });
    }
    for (contestant, name) in matchmaker.roster.iter_mut().zip(names) {
        contestant.rename(name);
    }
    log::debug!("Renamed roster: {:?}", matchmaker.names_view());
    Ok(Outcome::Applied)
}
