//! Raw actions from the board's append-only action log.

use super::{ActionId, CardId, LaneId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of board action relevant to lane membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    /// A card was created.
    CreateCard,
    /// A card was updated; a lane change makes this a move.
    UpdateCard,
}

/// Immutable record of one action taken on a card.
///
/// Action logs are delivered newest-first. An update whose `lane_before` and
/// `lane_after` differ moves the card out of one lane and into another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaneAction {
    id: ActionId,
    time: DateTime<Utc>,
    kind: ActionKind,
    card_id: CardId,
    card_name: String,
    lane_before: Option<LaneId>,
    lane_after: Option<LaneId>,
}

impl LaneAction {
    /// Records the creation of a card, optionally inside a known lane.
    #[must_use]
    pub fn create_card(
        id: ActionId,
        time: DateTime<Utc>,
        card_id: CardId,
        card_name: impl Into<String>,
        lane: Option<LaneId>,
    ) -> Self {
        Self {
            id,
            time,
            kind: ActionKind::CreateCard,
            card_id,
            card_name: card_name.into(),
            lane_before: None,
            lane_after: lane,
        }
    }

    /// Records an update that moved a card from one lane to another.
    ///
    /// Passing the same lane twice records an in-lane update (for example a
    /// reorder), which does not change membership.
    #[must_use]
    pub fn move_card(
        id: ActionId,
        time: DateTime<Utc>,
        card_id: CardId,
        card_name: impl Into<String>,
        from: LaneId,
        to: LaneId,
    ) -> Self {
        Self {
            id,
            time,
            kind: ActionKind::UpdateCard,
            card_id,
            card_name: card_name.into(),
            lane_before: Some(from),
            lane_after: Some(to),
        }
    }

    /// Returns the server-assigned action identifier.
    #[must_use]
    pub const fn id(&self) -> &ActionId {
        &self.id
    }

    /// Returns when the action happened.
    #[must_use]
    pub const fn time(&self) -> DateTime<Utc> {
        self.time
    }

    /// Returns the action kind.
    #[must_use]
    pub const fn kind(&self) -> ActionKind {
        self.kind
    }

    /// Returns the affected card.
    #[must_use]
    pub const fn card_id(&self) -> &CardId {
        &self.card_id
    }

    /// Returns the card name at the time of the action.
    #[must_use]
    pub fn card_name(&self) -> &str {
        &self.card_name
    }

    /// Returns the lane the card left, if any.
    #[must_use]
    pub const fn lane_before(&self) -> Option<&LaneId> {
        self.lane_before.as_ref()
    }

    /// Returns the lane the card entered, if any.
    #[must_use]
    pub const fn lane_after(&self) -> Option<&LaneId> {
        self.lane_after.as_ref()
    }

    /// Returns true when the action changed the card's lane.
    #[must_use]
    pub fn changes_lane(&self) -> bool {
        self.kind == ActionKind::UpdateCard && self.lane_before != self.lane_after
    }
}
