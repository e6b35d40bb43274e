//! Calendar-day labels and chart rows.

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Name of the synthetic row holding the sprint's initial scope.
pub const PLANNING_DAY: &str = "Planning";

const DAY_LABEL_FORMAT: &str = "%a, %b %-d";

/// Human-readable calendar-day label such as `Mon, Jan 2`.
///
/// Two instants are on the same day exactly when their labels are equal.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DayLabel(String);

impl DayLabel {
    /// Labels a calendar date.
    #[must_use]
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date.format(DAY_LABEL_FORMAT).to_string())
    }

    /// Labels the calendar day an instant falls on in `offset`.
    #[must_use]
    pub fn from_time(time: DateTime<Utc>, offset: FixedOffset) -> Self {
        Self::from_date(time.with_timezone(&offset).date_naive())
    }

    /// Returns the label text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DayLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A chart value that is either known or not yet reached.
///
/// Serialized as a number or `null`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<i64>", into = "Option<i64>")]
pub enum Tally {
    /// A measured value.
    Known(i64),
    /// No measurement exists for the day.
    Unknown,
}

impl Tally {
    /// Returns the measured value, if any.
    #[must_use]
    pub const fn value(self) -> Option<i64> {
        match self {
            Self::Known(value) => Some(value),
            Self::Unknown => None,
        }
    }
}

impl From<Option<i64>> for Tally {
    fn from(value: Option<i64>) -> Self {
        value.map_or(Self::Unknown, Self::Known)
    }
}

impl From<Tally> for Option<i64> {
    fn from(tally: Tally) -> Self {
        tally.value()
    }
}

/// One row of the projected burndown chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayRecord {
    /// Day label, or [`PLANNING_DAY`] for the leading row.
    pub name: String,
    /// Sprint scope on the day, carried forward when unmeasured.
    pub total: i64,
    /// Ideal remaining scope on the day.
    pub expected: f64,
    /// Points added since the first measured day.
    pub bottom: i64,
    /// Points not yet done, when the day was measured.
    pub top: Tally,
    /// False only for the planning row.
    pub working_day: bool,
}

impl DayRecord {
    /// Creates the planning row seeded with the sprint's initial scope.
    #[must_use]
    #[expect(
        clippy::cast_precision_loss,
        reason = "sprint scopes stay far below 2^52 points"
    )]
    pub fn planning(baseline: i64) -> Self {
        Self {
            name: PLANNING_DAY.to_owned(),
            total: baseline,
            expected: baseline as f64,
            bottom: 0,
            top: Tally::Known(baseline),
            working_day: false,
        }
    }
}
