//! Sprint window and its persistence identity.

use super::BurndownDomainError;
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Days between the starts of two consecutive sprints.
const SPRINT_STRIDE_DAYS: u64 = 7;

/// Name suffixes bumped by [`Sprint::successor`], checked in order.
const VERSION_SUFFIXES: [(&str, &str); 2] = [("-m", "-M"), ("-rc", "-rc")];

/// A named, inclusive calendar window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SprintRecord")]
pub struct Sprint {
    name: String,
    start: NaiveDate,
    end: NaiveDate,
}

#[derive(Deserialize)]
struct SprintRecord {
    name: String,
    start: NaiveDate,
    end: NaiveDate,
}

impl TryFrom<SprintRecord> for Sprint {
    type Error = BurndownDomainError;

    fn try_from(record: SprintRecord) -> Result<Self, Self::Error> {
        Self::new(record.name, record.start, record.end)
    }
}

impl Sprint {
    /// Creates a sprint running from `start` to `end`, both inclusive.
    ///
    /// # Errors
    ///
    /// Returns [`BurndownDomainError::EmptySprintName`] for blank names and
    /// [`BurndownDomainError::InvertedSprintWindow`] when `end` precedes
    /// `start`.
    pub fn new(
        name: impl Into<String>,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Self, BurndownDomainError> {
        let raw = name.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(BurndownDomainError::EmptySprintName);
        }
        if end < start {
            return Err(BurndownDomainError::InvertedSprintWindow { start, end });
        }
        Ok(Self {
            name: trimmed.to_owned(),
            start,
            end,
        })
    }

    /// Returns the sprint name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the first day of the sprint.
    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Returns the last day of the sprint.
    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Returns the key the sprint's state is persisted under.
    #[must_use]
    pub fn key(&self) -> SprintKey {
        SprintKey {
            start: self.start,
            name: self.name.clone(),
        }
    }

    /// Returns every calendar day of the sprint in order.
    #[must_use]
    pub fn days(&self) -> Vec<NaiveDate> {
        self.start
            .iter_days()
            .take_while(|day| *day <= self.end)
            .collect()
    }

    /// Suggests the sprint that follows this one.
    ///
    /// The window moves forward a week. A trailing `-M<n>` or `-rc<n>`
    /// milestone (any case) is bumped to `n + 1`; other names are kept.
    ///
    /// # Errors
    ///
    /// Returns [`BurndownDomainError::DateOverflow`] when the shifted window
    /// leaves the calendar range.
    pub fn successor(&self) -> Result<Self, BurndownDomainError> {
        let shift = |date: NaiveDate| {
            date.checked_add_days(Days::new(SPRINT_STRIDE_DAYS))
                .ok_or(BurndownDomainError::DateOverflow(date))
        };
        let name = VERSION_SUFFIXES
            .iter()
            .find_map(|(marker, canonical)| bump_suffix(&self.name, marker, canonical))
            .unwrap_or_else(|| self.name.clone());
        Self::new(name, shift(self.start)?, shift(self.end)?)
    }
}

fn bump_suffix(name: &str, marker: &str, canonical: &str) -> Option<String> {
    let at = name.to_ascii_lowercase().rfind(marker)?;
    let prefix = name.get(..at)?;
    let digits = name.get(at + marker.len()..)?;
    if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    let next = digits.parse::<u32>().ok()?.checked_add(1)?;
    Some(format!("{prefix}{canonical}{next}"))
}

/// Identity of a sprint's persisted state: start date plus name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SprintKey {
    /// First day of the sprint.
    pub start: NaiveDate,
    /// Sprint name.
    pub name: String,
}

impl fmt::Display for SprintKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.name)
    }
}
