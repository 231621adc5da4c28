//! Snapshot history used for undo.

use crate::models::contestant::ContestantId;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Queue state captured after a mutating operation.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub eligible: VecDeque<ContestantId>,
    pub cooldown: VecDeque<ContestantId>,
    /// Last opponent at capture time. Only read back when undo is configured to restore it.
    pub last_opponent: Option<ContestantId>,
}

/// Stack of snapshots. Always holds at least one entry (the checkpoint it was created or
/// last reset with).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct History {
    snapshots: Vec<Snapshot>,
}

impl History {
    /// Start a history whose floor is `initial`.
    pub fn new(initial: Snapshot) -> Self {
        Self {
            snapshots: vec![initial],
        }
    }

    /// Append a snapshot on top of the stack.
    pub fn record(&mut self, snapshot: Snapshot) {
        self.snapshots.push(snapshot);
    }

    /// Drop everything and make `checkpoint` the new floor.
    pub fn reset_to(&mut self, checkpoint: Snapshot) {
        self.snapshots.clear();
        self.snapshots.push(checkpoint);
    }

    /// Pop the top snapshot and return the one now on top.
    /// Returns None (and leaves the stack alone) when only the floor remains.
    pub fn rewind(&mut self) -> Option<&Snapshot> {
        if self.snapshots.len() <= 1 {
            return None;
        }
        self.snapshots.pop();
        self.snapshots.last()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false: the floor snapshot is never popped.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}
