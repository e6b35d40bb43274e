//! Source of the current sprint window.

use crate::burndown::domain::Sprint;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for sprint source operations.
pub type SprintSourceResult<T> = Result<T, SprintSourceError>;

/// Sprint definition contract, typically backed by an issue tracker or a
/// small file.
#[async_trait]
pub trait SprintSource: Send + Sync {
    /// Reads the current sprint.
    ///
    /// # Errors
    ///
    /// Returns [`SprintSourceError::Missing`] when no sprint is defined.
    async fn load(&self) -> SprintSourceResult<Sprint>;

    /// Replaces the current sprint.
    async fn store(&self, sprint: &Sprint) -> SprintSourceResult<()>;
}

/// Errors returned by sprint source implementations.
#[derive(Debug, Clone, Error)]
pub enum SprintSourceError {
    /// No sprint has been defined yet.
    #[error("no sprint defined")]
    Missing,

    /// The sprint definition could not be read or written.
    #[error("sprint source error: {0}")]
    Io(Arc<dyn std::error::Error + Send + Sync>),
}

impl SprintSourceError {
    /// Wraps an I/O or decoding error.
    pub fn io(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Io(Arc::new(err))
    }
}
