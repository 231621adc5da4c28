//! Matchmaker: roster, eligibility queues, last opponent, and undo history.

use crate::config::EngineConfig;
use crate::models::contestant::{Contestant, ContestantId, ContestantView};
use crate::models::history::{History, Snapshot};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Number of contestants on every roster.
pub const ROSTER_SIZE: usize = 7;

/// While more than this many contestants are alive, a selection keeps at least this many
/// eligible by promoting from cooldown.
pub const MIN_ELIGIBLE: usize = 3;

/// Errors that can occur during matchmaking operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum MatchmakerError {
    /// Contestant is alive but cooling down (only reported with strict selection).
    IneligibleSelection(ContestantId),
    /// Id is not on the roster, or the contestant was removed.
    UnknownContestant(ContestantId),
    /// Bulk rename did not supply exactly one name per roster slot.
    WrongNameCount { expected: usize, got: usize },
}

impl std::fmt::Display for MatchmakerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchmakerError::IneligibleSelection(id) => {
                write!(f, "Contestant {} cannot be selected right now", id)
            }
            MatchmakerError::UnknownContestant(id) => write!(f, "Contestant {} not found", id),
            MatchmakerError::WrongNameCount { expected, got } => {
                write!(f, "Expected {} names, got {}", expected, got)
            }
        }
    }
}

impl std::error::Error for MatchmakerError {}

/// Whether an operation changed anything.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Applied,
    /// Recoverable no-op: ineligible selection, or undo at the history floor.
    Unchanged,
}

/// Full tracker state. One instance per tournament, owned by the caller.
#[derive(Clone, Debug)]
pub struct Matchmaker {
    pub(crate) roster: Vec<Contestant>,
    /// Ids that may be picked next, oldest first.
    pub(crate) eligible: VecDeque<ContestantId>,
    /// Ids that fought recently; the head is promoted back first.
    pub(crate) cooldown: VecDeque<ContestantId>,
    pub(crate) last_opponent: Option<ContestantId>,
    pub(crate) history: History,
    pub(crate) config: EngineConfig,
}

impl Default for Matchmaker {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl Matchmaker {
    /// Fresh tournament: ids 0..ROSTER_SIZE, default names, everyone eligible.
    pub fn new(config: EngineConfig) -> Self {
        let roster: Vec<Contestant> = (0..ROSTER_SIZE).map(Contestant::new).collect();
        let eligible: VecDeque<ContestantId> = roster.iter().map(|c| c.id).collect();
        let initial = Snapshot {
            eligible: eligible.clone(),
            cooldown: VecDeque::new(),
            last_opponent: None,
        };
        Self {
            roster,
            eligible,
            cooldown: VecDeque::new(),
            last_opponent: None,
            history: History::new(initial),
            config,
        }
    }

    pub fn config(&self) -> EngineConfig {
        self.config
    }

    /// True iff `id` is currently in the eligible queue.
    pub fn can_fight(&self, id: ContestantId) -> bool {
        self.eligible.contains(&id)
    }

    pub fn eligible(&self) -> &VecDeque<ContestantId> {
        &self.eligible
    }

    pub fn cooldown(&self) -> &VecDeque<ContestantId> {
        &self.cooldown
    }

    pub fn last_opponent(&self) -> Option<ContestantId> {
        self.last_opponent
    }

    /// Contestants not yet removed.
    pub fn num_alive(&self) -> usize {
        self.roster.iter().filter(|c| c.is_alive()).count()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Every contestant ever on the roster, removed ones included.
    pub fn roster(&self) -> &[Contestant] {
        &self.roster
    }

    pub fn contestant(&self, id: ContestantId) -> Option<&Contestant> {
        self.roster.get(id)
    }

    /// Mutable reference to a contestant that is still in play.
    pub(crate) fn alive_contestant_mut(
        &mut self,
        id: ContestantId,
    ) -> Result<&mut Contestant, MatchmakerError> {
        self.roster
            .get_mut(id)
            .filter(|c| c.is_alive())
            .ok_or(MatchmakerError::UnknownContestant(id))
    }

    pub(crate) fn is_alive(&self, id: ContestantId) -> bool {
        self.roster.get(id).is_some_and(|c| c.is_alive())
    }

    /// Set a contestant's display name. No validation: empty and duplicate names are kept.
    pub fn rename(&mut self, id: ContestantId, name: impl Into<String>) -> Result<(), MatchmakerError> {
        let contestant = self.alive_contestant_mut(id)?;
        contestant.rename(name);
        log::debug!("Renamed contestant {} to {:?}", id, contestant.name);
        Ok(())
    }

    /// Eligible and cooldown queues projected to display names, order preserved.
    pub fn names_view(&self) -> (Vec<String>, Vec<String>) {
        (self.names_of(&self.eligible), self.names_of(&self.cooldown))
    }

    fn names_of(&self, ids: &VecDeque<ContestantId>) -> Vec<String> {
        ids.iter()
            .filter_map(|&id| self.roster.get(id))
            .map(|c| c.name.clone())
            .collect()
    }

    /// Per-contestant view in id order, for coloring and hiding player buttons.
    pub fn contestants(&self) -> Vec<ContestantView> {
        self.roster
            .iter()
            .map(|c| ContestantView {
                id: c.id,
                name: c.name.clone(),
                can_fight: self.can_fight(c.id),
                removed: c.removed,
            })
            .collect()
    }

    /// Copy of the current queue state for the history stack.
    pub(crate) fn snapshot(&self) -> Snapshot {
        Snapshot {
            eligible: self.eligible.clone(),
            cooldown: self.cooldown.clone(),
            last_opponent: self.last_opponent,
        }
    }

    pub(crate) fn log_queues(&self) {
        log::debug!("eligible: {:?} cooldown: {:?}", self.eligible, self.cooldown);
    }
}
