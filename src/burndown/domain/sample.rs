//! Point totals sampled from the board.

use super::DayLabel;
use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};

/// One polling sample of point totals per lane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanSample {
    /// When the sample was taken.
    pub time: DateTime<Utc>,
    /// Points in the done lane.
    pub done: i64,
    /// Points in the in-progress lane.
    pub in_progress: i64,
    /// Points in the planned lane.
    pub planned: i64,
}

impl ScanSample {
    /// Creates a sample.
    #[must_use]
    pub const fn new(time: DateTime<Utc>, done: i64, in_progress: i64, planned: i64) -> Self {
        Self {
            time,
            done,
            in_progress,
            planned,
        }
    }

    /// Returns the sprint scope at sample time.
    #[must_use]
    pub const fn total(&self) -> i64 {
        self.done + self.in_progress + self.planned
    }

    /// Returns true when both samples fall on the same calendar day in
    /// `offset` and carry the same counts.
    #[must_use]
    pub fn same_as(&self, other: &Self, offset: FixedOffset) -> bool {
        self.done == other.done
            && self.in_progress == other.in_progress
            && self.planned == other.planned
            && DayLabel::from_time(self.time, offset) == DayLabel::from_time(other.time, offset)
    }
}
