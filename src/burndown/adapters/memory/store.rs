//! In-memory snapshot store.

use crate::burndown::{
    domain::{BurndownState, SprintKey},
    ports::{SnapshotStore, SnapshotStoreError, SnapshotStoreResult},
};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Thread-safe in-memory snapshot store.
///
/// Saves can be made to fail on demand to exercise persistence error
/// handling.
#[derive(Debug, Clone, Default)]
pub struct InMemorySnapshotStore {
    state: Arc<RwLock<InMemoryStoreState>>,
}

#[derive(Debug, Default)]
struct InMemoryStoreState {
    snapshots: HashMap<SprintKey, BurndownState>,
    saves: usize,
    failing: bool,
}

impl InMemorySnapshotStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that already holds `state`.
    #[must_use]
    pub fn with_snapshot(state: BurndownState) -> Self {
        let store = Self::new();
        if let Ok(mut guard) = store.state.write() {
            guard.snapshots.insert(state.key(), state);
        }
        store
    }

    fn write(&self) -> SnapshotStoreResult<RwLockWriteGuard<'_, InMemoryStoreState>> {
        self.state
            .write()
            .map_err(|err| SnapshotStoreError::persistence(std::io::Error::other(err.to_string())))
    }

    fn read(&self) -> SnapshotStoreResult<RwLockReadGuard<'_, InMemoryStoreState>> {
        self.state
            .read()
            .map_err(|err| SnapshotStoreError::persistence(std::io::Error::other(err.to_string())))
    }

    /// Makes subsequent saves fail, or succeed again.
    ///
    /// # Errors
    ///
    /// Returns store errors when lock acquisition fails.
    pub fn set_failing(&self, failing: bool) -> SnapshotStoreResult<()> {
        self.write()?.failing = failing;
        Ok(())
    }

    /// Returns how many saves succeeded.
    ///
    /// # Errors
    ///
    /// Returns store errors when lock acquisition fails.
    pub fn save_count(&self) -> SnapshotStoreResult<usize> {
        Ok(self.read()?.saves)
    }

    /// Returns the stored snapshot for a key without going through the port.
    ///
    /// # Errors
    ///
    /// Returns store errors when lock acquisition fails.
    pub fn snapshot(&self, key: &SprintKey) -> SnapshotStoreResult<Option<BurndownState>> {
        Ok(self.read()?.snapshots.get(key).cloned())
    }
}

#[async_trait]
impl SnapshotStore for InMemorySnapshotStore {
    async fn save(&self, state: &BurndownState) -> SnapshotStoreResult<()> {
        let mut guard = self.write()?;
        if guard.failing {
            return Err(SnapshotStoreError::persistence(std::io::Error::other(
                "snapshot store unavailable",
            )));
        }
        guard.snapshots.insert(state.key(), state.clone());
        guard.saves += 1;
        Ok(())
    }

    async fn load(&self, key: &SprintKey) -> SnapshotStoreResult<Option<BurndownState>> {
        Ok(self.read()?.snapshots.get(key).cloned())
    }
}
