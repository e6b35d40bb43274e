//! Read-only port onto the task board.

use crate::board::domain::{Card, Lane, LaneAction, LaneId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for board source operations.
pub type BoardSourceResult<T> = Result<T, BoardSourceError>;

/// Board data source contract.
#[async_trait]
pub trait BoardSource: Send + Sync {
    /// Returns the board's lanes in board order.
    async fn lanes(&self) -> BoardSourceResult<Vec<Lane>>;

    /// Returns the cards currently in a lane.
    ///
    /// # Errors
    ///
    /// Returns [`BoardSourceError::LaneNotFound`] when the lane does not
    /// exist.
    async fn cards(&self, lane: &LaneId) -> BoardSourceResult<Vec<Card>>;

    /// Returns a lane's action log, newest first.
    ///
    /// The log may have been truncated upstream; callers must not assume it
    /// reaches back to the lane's creation.
    async fn actions(&self, lane: &LaneId) -> BoardSourceResult<Vec<LaneAction>>;
}

/// Errors returned by board source implementations.
#[derive(Debug, Clone, Error)]
pub enum BoardSourceError {
    /// The requested lane does not exist.
    #[error("lane not found: {0}")]
    LaneNotFound(LaneId),

    /// The board has no lanes to track.
    #[error("board has no lanes")]
    NoLanes,

    /// The board could not be reached.
    #[error("board unavailable: {0}")]
    Unavailable(Arc<dyn std::error::Error + Send + Sync>),
}

impl BoardSourceError {
    /// Wraps a transport or client error.
    pub fn unavailable(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Unavailable(Arc::new(err))
    }
}
