//! Normalized lane events and the replay timeline they produce.

use super::{CardId, StoryPoints};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of lane membership change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LaneEventKind {
    /// The card was created inside the tracked lane.
    Create,
    /// The card moved into the tracked lane.
    Add,
    /// The card moved out of the tracked lane.
    #[serde(alias = "rm")]
    Remove,
}

impl LaneEventKind {
    /// Returns true for kinds that make a card present.
    #[must_use]
    pub const fn inserts(self) -> bool {
        matches!(self, Self::Create | Self::Add)
    }
}

/// A lane membership change derived from the action log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaneEvent {
    time: DateTime<Utc>,
    kind: LaneEventKind,
    card_id: CardId,
    card_name: String,
    points: StoryPoints,
    #[serde(default)]
    synthesized: bool,
}

impl LaneEvent {
    /// Creates an event; the estimate is parsed from `card_name`.
    #[must_use]
    pub fn new(
        time: DateTime<Utc>,
        kind: LaneEventKind,
        card_id: CardId,
        card_name: impl Into<String>,
    ) -> Self {
        let card_name = card_name.into();
        Self {
            time,
            kind,
            points: StoryPoints::parse(&card_name),
            card_id,
            card_name,
            synthesized: false,
        }
    }

    /// Marks the event as inferred from current board contents rather than
    /// read from the action log.
    #[must_use]
    pub const fn synthesized(mut self) -> Self {
        self.synthesized = true;
        self
    }

    /// Returns when the change happened.
    #[must_use]
    pub const fn time(&self) -> DateTime<Utc> {
        self.time
    }

    /// Returns the event kind.
    #[must_use]
    pub const fn kind(&self) -> LaneEventKind {
        self.kind
    }

    /// Returns the affected card.
    #[must_use]
    pub const fn card_id(&self) -> &CardId {
        &self.card_id
    }

    /// Returns the card name at the time of the event.
    #[must_use]
    pub fn card_name(&self) -> &str {
        &self.card_name
    }

    /// Returns the card estimate at the time of the event.
    #[must_use]
    pub const fn points(&self) -> StoryPoints {
        self.points
    }

    /// Returns true when the event was synthesized by gap filling.
    #[must_use]
    pub const fn is_synthesized(&self) -> bool {
        self.synthesized
    }
}

/// One step of a replayed point curve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    /// When the step happened.
    pub time: DateTime<Utc>,
    /// Points present in the lane after the step.
    pub running_points: i64,
    /// Cards present in the lane after the step.
    pub running_cards: usize,
    /// Card that caused the step.
    pub card_id: CardId,
    /// Name of the card that caused the step.
    pub card_name: String,
}
