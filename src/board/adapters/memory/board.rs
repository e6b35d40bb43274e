//! In-memory board adapter for tests and local deterministic runs.

use crate::board::{
    domain::{ActionId, Card, CardId, Lane, LaneAction, LaneId},
    ports::{BoardSource, BoardSourceError, BoardSourceResult},
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Thread-safe in-memory task board.
///
/// Mutations made through the helper methods record matching actions in the
/// affected lanes' logs, mimicking what a hosted board reports. Cards can
/// also be placed or removed silently to model history that has expired
/// upstream.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBoard {
    state: Arc<RwLock<InMemoryBoardState>>,
}

#[derive(Debug, Default)]
struct InMemoryBoardState {
    lanes: Vec<Lane>,
    cards: HashMap<LaneId, Vec<Card>>,
    // Oldest first; reversed on read.
    actions: HashMap<LaneId, Vec<LaneAction>>,
    outage: Option<String>,
}

impl InMemoryBoardState {
    fn require_lane(&self, lane: &LaneId) -> BoardSourceResult<()> {
        if self.lanes.iter().any(|candidate| candidate.id() == lane) {
            Ok(())
        } else {
            Err(BoardSourceError::LaneNotFound(lane.clone()))
        }
    }

    fn check_outage(&self) -> BoardSourceResult<()> {
        self.outage.as_ref().map_or(Ok(()), |reason| {
            Err(BoardSourceError::unavailable(std::io::Error::other(
                reason.clone(),
            )))
        })
    }
}

impl InMemoryBoard {
    /// Creates an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn write(&self) -> BoardSourceResult<RwLockWriteGuard<'_, InMemoryBoardState>> {
        self.state
            .write()
            .map_err(|err| BoardSourceError::unavailable(std::io::Error::other(err.to_string())))
    }

    fn read(&self) -> BoardSourceResult<RwLockReadGuard<'_, InMemoryBoardState>> {
        self.state
            .read()
            .map_err(|err| BoardSourceError::unavailable(std::io::Error::other(err.to_string())))
    }

    /// Appends a lane after the existing ones.
    ///
    /// # Errors
    ///
    /// Returns board errors when lock acquisition fails.
    pub fn add_lane(&self, lane: Lane) -> BoardSourceResult<()> {
        let mut state = self.write()?;
        state.cards.entry(lane.id().clone()).or_default();
        state.actions.entry(lane.id().clone()).or_default();
        state.lanes.push(lane);
        Ok(())
    }

    /// Places a card in a lane without recording any action.
    ///
    /// # Errors
    ///
    /// Returns [`BoardSourceError::LaneNotFound`] for unknown lanes.
    pub fn place_card(&self, lane: &LaneId, card: Card) -> BoardSourceResult<()> {
        let mut state = self.write()?;
        state.require_lane(lane)?;
        state.cards.entry(lane.clone()).or_default().push(card);
        Ok(())
    }

    /// Removes a card from a lane without recording any action.
    ///
    /// # Errors
    ///
    /// Returns [`BoardSourceError::LaneNotFound`] for unknown lanes.
    pub fn drop_card(&self, lane: &LaneId, card_id: &CardId) -> BoardSourceResult<()> {
        let mut state = self.write()?;
        state.require_lane(lane)?;
        if let Some(cards) = state.cards.get_mut(lane) {
            cards.retain(|card| card.id() != card_id);
        }
        Ok(())
    }

    /// Appends an action to a lane's log.
    ///
    /// # Errors
    ///
    /// Returns [`BoardSourceError::LaneNotFound`] for unknown lanes.
    pub fn record_action(&self, lane: &LaneId, action: LaneAction) -> BoardSourceResult<()> {
        let mut state = self.write()?;
        state.require_lane(lane)?;
        state.actions.entry(lane.clone()).or_default().push(action);
        Ok(())
    }

    /// Creates a card in a lane and records the creation.
    ///
    /// # Errors
    ///
    /// Returns [`BoardSourceError::LaneNotFound`] for unknown lanes.
    pub fn create_card(
        &self,
        lane: &LaneId,
        card: Card,
        action_id: ActionId,
        time: DateTime<Utc>,
    ) -> BoardSourceResult<()> {
        let action = LaneAction::create_card(
            action_id,
            time,
            card.id().clone(),
            card.name(),
            Some(lane.clone()),
        );
        let mut state = self.write()?;
        state.require_lane(lane)?;
        state.cards.entry(lane.clone()).or_default().push(card);
        state.actions.entry(lane.clone()).or_default().push(action);
        Ok(())
    }

    /// Moves a card between lanes and records the move in both logs.
    ///
    /// A card that is not in `from` is still placed in `to`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardSourceError::LaneNotFound`] for unknown lanes.
    pub fn move_card(
        &self,
        card: &Card,
        from: &LaneId,
        to: &LaneId,
        action_id: ActionId,
        time: DateTime<Utc>,
    ) -> BoardSourceResult<()> {
        let action = LaneAction::move_card(
            action_id,
            time,
            card.id().clone(),
            card.name(),
            from.clone(),
            to.clone(),
        );
        let mut state = self.write()?;
        state.require_lane(from)?;
        state.require_lane(to)?;
        if let Some(cards) = state.cards.get_mut(from) {
            cards.retain(|candidate| candidate.id() != card.id());
        }
        state.cards.entry(to.clone()).or_default().push(card.clone());
        state
            .actions
            .entry(from.clone())
            .or_default()
            .push(action.clone());
        if from != to {
            state.actions.entry(to.clone()).or_default().push(action);
        }
        Ok(())
    }

    /// Discards all but the newest `keep` actions of a lane's log, as a
    /// hosted board does once history expires.
    ///
    /// # Errors
    ///
    /// Returns [`BoardSourceError::LaneNotFound`] for unknown lanes.
    pub fn expire_actions(&self, lane: &LaneId, keep: usize) -> BoardSourceResult<()> {
        let mut state = self.write()?;
        state.require_lane(lane)?;
        if let Some(actions) = state.actions.get_mut(lane) {
            let excess = actions.len().saturating_sub(keep);
            actions.drain(..excess);
        }
        Ok(())
    }

    /// Simulates an outage: every read fails until cleared with `None`.
    ///
    /// # Errors
    ///
    /// Returns board errors when lock acquisition fails.
    pub fn set_outage(&self, reason: Option<String>) -> BoardSourceResult<()> {
        self.write()?.outage = reason;
        Ok(())
    }
}

#[async_trait]
impl BoardSource for InMemoryBoard {
    async fn lanes(&self) -> BoardSourceResult<Vec<Lane>> {
        let state = self.read()?;
        state.check_outage()?;
        Ok(state.lanes.clone())
    }

    async fn cards(&self, lane: &LaneId) -> BoardSourceResult<Vec<Card>> {
        let state = self.read()?;
        state.check_outage()?;
        state.require_lane(lane)?;
        Ok(state.cards.get(lane).cloned().unwrap_or_default())
    }

    async fn actions(&self, lane: &LaneId) -> BoardSourceResult<Vec<LaneAction>> {
        let state = self.read()?;
        state.check_outage()?;
        state.require_lane(lane)?;
        Ok(state
            .actions
            .get(lane)
            .map(|actions| actions.iter().rev().cloned().collect())
            .unwrap_or_default())
    }
}
