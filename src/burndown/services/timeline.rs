//! Collapses dated items into one representative item per calendar day.

use crate::board::domain::TimelineEntry;
use crate::burndown::domain::{DayLabel, ScanSample};
use chrono::{DateTime, FixedOffset, Utc};
use std::collections::BTreeMap;

/// Anything carrying the instant it describes.
pub trait Dated {
    /// Returns the instant the item describes.
    fn time(&self) -> DateTime<Utc>;
}

impl Dated for ScanSample {
    fn time(&self) -> DateTime<Utc> {
        self.time
    }
}

impl Dated for TimelineEntry {
    fn time(&self) -> DateTime<Utc> {
        self.time
    }
}

/// The last item seen on each calendar day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompressedTimeline<T> {
    days: BTreeMap<DayLabel, T>,
}

impl<T> Default for CompressedTimeline<T> {
    fn default() -> Self {
        Self {
            days: BTreeMap::new(),
        }
    }
}

impl<T> CompressedTimeline<T> {
    /// Returns the item kept for a day.
    #[must_use]
    pub fn get(&self, day: &DayLabel) -> Option<&T> {
        self.days.get(day)
    }

    /// Returns the number of days with at least one item.
    #[must_use]
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Returns true when no day has an item.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Iterates over days and their items, ordered by label text.
    pub fn iter(&self) -> impl Iterator<Item = (&DayLabel, &T)> {
        self.days.iter()
    }
}

/// Maps each calendar day in `offset` to the last of its items in input
/// order.
#[must_use]
pub fn compress<T: Dated + Clone>(items: &[T], offset: FixedOffset) -> CompressedTimeline<T> {
    let days = items
        .iter()
        .map(|item| (DayLabel::from_time(item.time(), offset), item.clone()))
        .collect();
    CompressedTimeline { days }
}

/// Keeps the last item of every run of same-day items, preserving order.
///
/// For chronological input this yields one item per day, oldest first.
#[must_use]
pub fn linearize<T: Dated + Clone>(items: &[T], offset: FixedOffset) -> Vec<T> {
    let mut linear: Vec<(DayLabel, T)> = Vec::new();
    for item in items {
        let label = DayLabel::from_time(item.time(), offset);
        match linear.last_mut() {
            Some((last_label, last_item)) if *last_label == label => {
                *last_item = item.clone();
            }
            _ => linear.push((label, item.clone())),
        }
    }
    linear.into_iter().map(|(_, item)| item).collect()
}
