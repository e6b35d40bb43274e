//! Turns a lane's newest-first action log into ordered lane events.

use crate::board::domain::{
    ActionKind, Card, CardId, Cursor, LaneAction, LaneEvent, LaneEventKind, LaneId, PresenceSet,
};
use chrono::{DateTime, TimeDelta, Utc};
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Milliseconds between the last known event and synthesized gap-fill events.
const GAP_FILL_TICK_MS: i64 = 1;

/// Result of one ingestion pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ingestion {
    /// New events in chronological order, gap-fill events last.
    pub events: Vec<LaneEvent>,
    /// Cursor to resume from on the next pass.
    pub cursor: Option<Cursor>,
}

impl Ingestion {
    /// Returns how many of the new events were synthesized by gap filling.
    #[must_use]
    pub fn synthesized_count(&self) -> usize {
        self.events
            .iter()
            .filter(|event| event.is_synthesized())
            .count()
    }
}

/// Ingests the action log of a single tracked lane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionIngester {
    tracked: LaneId,
}

impl ActionIngester {
    /// Creates an ingester for the given lane.
    #[must_use]
    pub const fn new(tracked: LaneId) -> Self {
        Self { tracked }
    }

    /// Returns the tracked lane.
    #[must_use]
    pub const fn tracked(&self) -> &LaneId {
        &self.tracked
    }

    /// Ingests the unseen part of `log` and reconciles the result with the
    /// lane's current cards.
    ///
    /// `prior` holds every event ingested on earlier passes, `log` is the
    /// lane's action log newest first, and `current` the cards the board
    /// reports for the lane right now. `now` stamps gap-fill events when no
    /// event has ever been seen.
    #[must_use]
    pub fn ingest(
        &self,
        prior: &[LaneEvent],
        cursor: Option<&Cursor>,
        log: &[LaneAction],
        current: &[Card],
        now: DateTime<Utc>,
    ) -> Ingestion {
        let unseen = unseen_actions(log, cursor);
        let mut events: Vec<LaneEvent> = unseen
            .iter()
            .rev()
            .filter_map(|action| self.translate(action))
            .collect();

        let next_cursor = log.first().map(Cursor::at).or_else(|| cursor.cloned());

        let last_known = prior
            .iter()
            .chain(events.iter())
            .map(LaneEvent::time)
            .max()
            .unwrap_or(now);
        let presence = PresenceSet::from_events(prior.iter().chain(events.iter()));
        let fill_at = last_known
            .checked_add_signed(TimeDelta::milliseconds(GAP_FILL_TICK_MS))
            .unwrap_or(last_known);
        let gap_fill = fill_gaps(&presence, current, fill_at);

        debug!(
            lane = %self.tracked,
            unseen = unseen.len(),
            translated = events.len(),
            "ingested lane actions"
        );
        if !gap_fill.is_empty() {
            info!(
                lane = %self.tracked,
                synthesized = gap_fill.len(),
                "replayed presence diverged from board, synthesizing events"
            );
        }
        events.extend(gap_fill);

        Ingestion {
            events,
            cursor: next_cursor,
        }
    }

    /// Maps one action to at most one lane event.
    fn translate(&self, action: &LaneAction) -> Option<LaneEvent> {
        let kind = match action.kind() {
            ActionKind::CreateCard
                if action.lane_after().is_none_or(|lane| *lane == self.tracked) =>
            {
                LaneEventKind::Create
            }
            ActionKind::CreateCard => return None,
            ActionKind::UpdateCard if action.changes_lane() => {
                if action.lane_after() == Some(&self.tracked) {
                    LaneEventKind::Add
                } else if action.lane_before() == Some(&self.tracked) {
                    LaneEventKind::Remove
                } else {
                    return None;
                }
            }
            ActionKind::UpdateCard => return None,
        };
        Some(LaneEvent::new(
            action.time(),
            kind,
            action.card_id().clone(),
            action.card_name(),
        ))
    }
}

/// Returns the actions newer than the cursor, newest first.
///
/// When the cursor's action is no longer in the log (first run, or the log
/// rotated past it) the whole log is treated as unseen.
fn unseen_actions<'a>(log: &'a [LaneAction], cursor: Option<&Cursor>) -> &'a [LaneAction] {
    cursor
        .and_then(|cursor| {
            log.iter()
                .position(|action| action.id() == cursor.last_event_id())
        })
        .and_then(|seen_from| log.get(..seen_from))
        .unwrap_or(log)
}

/// Synthesizes the events that reconcile `presence` with the board.
fn fill_gaps(presence: &PresenceSet, current: &[Card], at: DateTime<Utc>) -> Vec<LaneEvent> {
    let on_board: BTreeMap<&CardId, &Card> = current.iter().map(|card| (card.id(), card)).collect();

    let additions = on_board
        .iter()
        .filter(|(card_id, _)| !presence.contains(card_id))
        .map(|(card_id, card)| {
            LaneEvent::new(at, LaneEventKind::Add, (*card_id).clone(), card.name()).synthesized()
        });
    let removals = presence
        .iter()
        .filter(|(card_id, _)| !on_board.contains_key(card_id))
        .map(|(card_id, name)| {
            LaneEvent::new(at, LaneEventKind::Remove, card_id.clone(), name).synthesized()
        });

    additions.chain(removals).collect()
}
