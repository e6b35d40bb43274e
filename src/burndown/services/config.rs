//! Scanner configuration.

use chrono::{FixedOffset, Offset, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(10);
const MIN_POLL_INTERVAL: Duration = Duration::from_secs(1);
const DEFAULT_COMMAND_CAPACITY: usize = 16;

/// Where scan samples come from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackingMode {
    /// Sum the points of the first three lanes (done, in progress,
    /// planned) on every poll.
    #[default]
    LaneTotals,
    /// Replay the done lane's action log and back-date samples to the
    /// moment each card moved.
    ActionLog,
}

/// Settings for the background scanner.
///
/// Deserializes from partial documents; missing fields take their
/// defaults. `poll_interval` is expressed in whole seconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScannerConfig {
    #[serde(with = "whole_seconds")]
    poll_interval: Duration,
    tracking: TrackingMode,
    utc_offset_seconds: i32,
    command_capacity: usize,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            poll_interval: DEFAULT_POLL_INTERVAL,
            tracking: TrackingMode::default(),
            utc_offset_seconds: 0,
            command_capacity: DEFAULT_COMMAND_CAPACITY,
        }
    }
}

impl ScannerConfig {
    /// Sets the delay between polls.
    #[must_use]
    pub const fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    /// Sets the tracking mode.
    #[must_use]
    pub const fn with_tracking(mut self, tracking: TrackingMode) -> Self {
        self.tracking = tracking;
        self
    }

    /// Sets the UTC offset, in seconds east, used to label days.
    #[must_use]
    pub const fn with_utc_offset_seconds(mut self, seconds: i32) -> Self {
        self.utc_offset_seconds = seconds;
        self
    }

    /// Sets how many commands may wait for the scanner.
    #[must_use]
    pub const fn with_command_capacity(mut self, capacity: usize) -> Self {
        self.command_capacity = capacity;
        self
    }

    /// Returns the delay between polls, at least one second.
    #[must_use]
    pub fn poll_interval(&self) -> Duration {
        self.poll_interval.max(MIN_POLL_INTERVAL)
    }

    /// Returns the tracking mode.
    #[must_use]
    pub const fn tracking(&self) -> TrackingMode {
        self.tracking
    }

    /// Returns the offset days are labelled in; out-of-range values fall
    /// back to UTC.
    #[must_use]
    pub fn utc_offset(&self) -> FixedOffset {
        FixedOffset::east_opt(self.utc_offset_seconds).unwrap_or_else(|| Utc.fix())
    }

    /// Returns the command channel capacity, at least one.
    #[must_use]
    pub fn command_capacity(&self) -> usize {
        self.command_capacity.max(1)
    }
}

mod whole_seconds {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(duration.as_secs())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        u64::deserialize(deserializer).map(Duration::from_secs)
    }
}
