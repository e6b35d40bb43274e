//! Folds lane events into a running point curve.

use crate::board::domain::{CardId, LaneEvent, StoryPoints, TimelineEntry};
use std::collections::BTreeMap;

/// Replays lane events, tracking which cards are present and how many
/// points they hold.
///
/// Replay is a pure fold: the same event sequence always yields the same
/// timeline. Inserting a card that is already present is a no-op, so a
/// synthesized gap-fill event and the real event for the same card never
/// count twice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PresenceReplayer {
    present: BTreeMap<CardId, StoryPoints>,
    running_points: i64,
}

impl PresenceReplayer {
    /// Creates a replayer with nothing present.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replays a whole event sequence from scratch.
    #[must_use]
    pub fn replay<'a>(events: impl IntoIterator<Item = &'a LaneEvent>) -> Vec<TimelineEntry> {
        let mut replayer = Self::new();
        events
            .into_iter()
            .filter_map(|event| replayer.apply(event))
            .collect()
    }

    /// Applies one event, returning the timeline entry it produced.
    ///
    /// Events for zero-point cards and events that do not change membership
    /// produce no entry.
    pub fn apply(&mut self, event: &LaneEvent) -> Option<TimelineEntry> {
        if !event.points().is_positive() {
            return None;
        }

        if event.kind().inserts() {
            if self.present.contains_key(event.card_id()) {
                return None;
            }
            self.present.insert(event.card_id().clone(), event.points());
            self.running_points += event.points().as_total();
        } else {
            let points = self.present.remove(event.card_id())?;
            self.running_points -= points.as_total();
        }

        Some(TimelineEntry {
            time: event.time(),
            running_points: self.running_points,
            running_cards: self.present.len(),
            card_id: event.card_id().clone(),
            card_name: event.card_name().to_owned(),
        })
    }

    /// Returns the points currently present.
    #[must_use]
    pub const fn running_points(&self) -> i64 {
        self.running_points
    }

    /// Returns the number of cards currently present.
    #[must_use]
    pub fn running_cards(&self) -> usize {
        self.present.len()
    }
}
