//! The persisted burndown aggregate.

use super::{ScanSample, Sprint, SprintKey, SprintStatus};
use crate::board::domain::{Cursor, LaneEvent};
use chrono::FixedOffset;
use serde::{Deserialize, Serialize};

/// Everything the scanner persists for one sprint.
///
/// Only the scanner task mutates a live state; readers see published
/// [`SprintStatus`] snapshots instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BurndownState {
    /// Recorded samples, oldest first.
    #[serde(alias = "trello_events")]
    pub scan_history: Vec<ScanSample>,
    /// Last published status.
    pub sprint_status: SprintStatus,
    /// Version the next publication will carry.
    pub version: u64,
    /// Sprint the history belongs to.
    pub sprint: Sprint,
    /// Lane events ingested from the action log so far.
    #[serde(default)]
    pub lane_events: Vec<LaneEvent>,
    /// Where action-log ingestion resumes.
    #[serde(default)]
    pub cursor: Option<Cursor>,
}

impl BurndownState {
    /// Creates an empty state for a sprint.
    #[must_use]
    pub fn fresh(sprint: Sprint) -> Self {
        Self {
            scan_history: Vec::new(),
            sprint_status: SprintStatus::empty(sprint.name(), None),
            version: 0,
            sprint,
            lane_events: Vec::new(),
            cursor: None,
        }
    }

    /// Returns the persistence key of the state's sprint.
    #[must_use]
    pub fn key(&self) -> SprintKey {
        self.sprint.key()
    }

    /// Returns the most recently recorded sample.
    #[must_use]
    pub fn last_sample(&self) -> Option<&ScanSample> {
        self.scan_history.last()
    }

    /// Records a sample unless it matches the last one on the same day.
    ///
    /// Returns true when the history changed.
    pub fn record(&mut self, sample: ScanSample, offset: FixedOffset) -> bool {
        if self
            .last_sample()
            .is_some_and(|last| last.same_as(&sample, offset))
        {
            return false;
        }
        self.scan_history.push(sample);
        true
    }

    /// Clears all history and adopts a new sprint window.
    pub fn reset_for(&mut self, sprint: Sprint) {
        *self = Self::fresh(sprint);
    }

    /// Returns the version for the next publication and advances the
    /// counter.
    pub const fn next_version(&mut self) -> u64 {
        let version = self.version;
        self.version = version.saturating_add(1);
        version
    }

    /// Stores a freshly projected status under the next version and returns
    /// the stored copy.
    pub fn publish(&mut self, mut status: SprintStatus) -> &SprintStatus {
        status.version = self.next_version();
        self.sprint_status = status;
        &self.sprint_status
    }
}
