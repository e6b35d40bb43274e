//! In-memory sprint source.

use crate::burndown::{
    domain::Sprint,
    ports::{SprintSource, SprintSourceError, SprintSourceResult},
};
use async_trait::async_trait;
use std::sync::{Arc, RwLock};

/// Holds the current sprint in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemorySprintSource {
    current: Arc<RwLock<Option<Sprint>>>,
}

impl InMemorySprintSource {
    /// Creates a source with no sprint defined.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a source holding `sprint`.
    #[must_use]
    pub fn with_sprint(sprint: Sprint) -> Self {
        Self {
            current: Arc::new(RwLock::new(Some(sprint))),
        }
    }
}

fn poisoned(err: impl std::fmt::Display) -> SprintSourceError {
    SprintSourceError::io(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl SprintSource for InMemorySprintSource {
    async fn load(&self) -> SprintSourceResult<Sprint> {
        self.current
            .read()
            .map_err(poisoned)?
            .clone()
            .ok_or(SprintSourceError::Missing)
    }

    async fn store(&self, sprint: &Sprint) -> SprintSourceResult<()> {
        *self.current.write().map_err(poisoned)? = Some(sprint.clone());
        Ok(())
    }
}
