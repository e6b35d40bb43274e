//! Cards considered present in the tracked lane.

use super::{CardId, LaneEvent};
use std::collections::BTreeMap;

/// Set of cards present in the tracked lane according to replayed events.
///
/// Every card keeps the last name it was seen with so that a synthesized
/// removal can still describe it. Duplicate inserts are no-ops.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PresenceSet {
    cards: BTreeMap<CardId, String>,
}

impl PresenceSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds the set by replaying events in order.
    ///
    /// Estimates are ignored: a zero-point card is still present.
    #[must_use]
    pub fn from_events<'a>(events: impl IntoIterator<Item = &'a LaneEvent>) -> Self {
        let mut presence = Self::new();
        for event in events {
            presence.apply(event);
        }
        presence
    }

    /// Applies one event, returning true when membership changed.
    pub fn apply(&mut self, event: &LaneEvent) -> bool {
        if event.kind().inserts() {
            if self.cards.contains_key(event.card_id()) {
                return false;
            }
            self.cards
                .insert(event.card_id().clone(), event.card_name().to_owned());
            true
        } else {
            self.cards.remove(event.card_id()).is_some()
        }
    }

    /// Returns true when the card is present.
    #[must_use]
    pub fn contains(&self, card_id: &CardId) -> bool {
        self.cards.contains_key(card_id)
    }

    /// Returns the number of present cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns true when no card is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterates over present cards and their last known names, ordered by
    /// card identifier.
    pub fn iter(&self) -> impl Iterator<Item = (&CardId, &str)> {
        self.cards.iter().map(|(id, name)| (id, name.as_str()))
    }
}
