//! In-memory snapshot archive.

use crate::burndown::{
    domain::BurndownState,
    ports::{SnapshotArchive, SnapshotArchiveError, SnapshotArchiveResult},
};
use async_trait::async_trait;
use std::sync::{Arc, RwLock};

/// Collects archived snapshots in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemorySnapshotArchive {
    archived: Arc<RwLock<Vec<BurndownState>>>,
}

impl InMemorySnapshotArchive {
    /// Creates an empty archive.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every archived snapshot, oldest first.
    ///
    /// # Errors
    ///
    /// Returns archive errors when lock acquisition fails.
    pub fn archived(&self) -> SnapshotArchiveResult<Vec<BurndownState>> {
        self.archived
            .read()
            .map(|archived| archived.clone())
            .map_err(|err| SnapshotArchiveError::new(std::io::Error::other(err.to_string())))
    }
}

#[async_trait]
impl SnapshotArchive for InMemorySnapshotArchive {
    async fn archive(&self, state: &BurndownState) -> SnapshotArchiveResult<()> {
        self.archived
            .write()
            .map_err(|err| SnapshotArchiveError::new(std::io::Error::other(err.to_string())))?
            .push(state.clone());
        Ok(())
    }
}
