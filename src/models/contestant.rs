//! Contestant and ContestantView data structures.

use serde::{Deserialize, Serialize};

/// Stable identifier for a contestant (index into the roster, never reused).
pub type ContestantId = usize;

/// A contestant on the roster.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Contestant {
    pub id: ContestantId,
    pub name: String,
    /// Set once by removal; a removed contestant never re-enters the queues.
    pub removed: bool,
}

impl Contestant {
    /// Create a contestant whose name defaults to the string form of its id.
    pub fn new(id: ContestantId) -> Self {
        Self {
            id,
            name: id.to_string(),
            removed: false,
        }
    }

    pub fn is_alive(&self) -> bool {
        !self.removed
    }

    /// Overwrite the display name. Empty names are accepted as-is.
    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Mark the contestant as permanently out of play.
    pub fn remove(&mut self) {
        self.removed = true;
    }
}

/// Per-contestant view for the presentation layer (button color, visibility).
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ContestantView {
    pub id: ContestantId,
    pub name: String,
    pub can_fight: bool,
    pub removed: bool,
}
