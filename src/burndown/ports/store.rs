//! Durable storage of burndown state, keyed by sprint.

use crate::burndown::domain::{BurndownState, SprintKey};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for snapshot store operations.
pub type SnapshotStoreResult<T> = Result<T, SnapshotStoreError>;

/// Burndown state persistence contract.
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// Saves the state under its sprint key, replacing any earlier save.
    async fn save(&self, state: &BurndownState) -> SnapshotStoreResult<()>;

    /// Loads the state saved for a sprint.
    ///
    /// Returns `None` when nothing was saved for the key.
    async fn load(&self, key: &SprintKey) -> SnapshotStoreResult<Option<BurndownState>>;
}

/// Errors returned by snapshot store implementations.
#[derive(Debug, Clone, Error)]
pub enum SnapshotStoreError {
    /// A stored document could not be decoded.
    #[error("corrupt snapshot for {key}: {source}")]
    Corrupt {
        /// Key of the unreadable snapshot.
        key: SprintKey,
        /// Decoding failure.
        source: Arc<dyn std::error::Error + Send + Sync>,
    },

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl SnapshotStoreError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }

    /// Wraps a decoding error for the given key.
    pub fn corrupt(key: SprintKey, err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Corrupt {
            key,
            source: Arc::new(err),
        }
    }
}
