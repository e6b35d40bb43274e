//! External mirroring of finished sprint snapshots.

use crate::burndown::domain::BurndownState;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for snapshot archive operations.
pub type SnapshotArchiveResult<T> = Result<T, SnapshotArchiveError>;

/// Publishes a sprint's final state somewhere outside the running process,
/// such as a version-controlled repository.
#[async_trait]
pub trait SnapshotArchive: Send + Sync {
    /// Archives the state of a sprint that is being closed.
    async fn archive(&self, state: &BurndownState) -> SnapshotArchiveResult<()>;
}

/// Errors returned by snapshot archive implementations.
#[derive(Debug, Clone, Error)]
#[error("archive error: {0}")]
pub struct SnapshotArchiveError(Arc<dyn std::error::Error + Send + Sync>);

impl SnapshotArchiveError {
    /// Wraps a transport or storage error.
    pub fn new(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self(Arc::new(err))
    }
}
