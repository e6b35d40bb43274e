//! Snapshot store writing one JSON document per sprint.

use super::{open_root, read_if_present, replace_file};
use crate::burndown::{
    domain::{BurndownState, SprintKey},
    ports::{SnapshotStore, SnapshotStoreError, SnapshotStoreResult},
};
use async_trait::async_trait;
use camino::Utf8Path;
use cap_std::fs_utf8::Dir;
use minijinja::{Environment, context};
use std::sync::Arc;
use tracing::debug;

/// File name template used unless overridden; `start` and `name` come from
/// the sprint key.
pub const DEFAULT_SNAPSHOT_TEMPLATE: &str = "{{ start }}-{{ name }}-logs.json";

/// Stores each sprint's state as pretty-printed JSON in a directory.
#[derive(Debug, Clone)]
pub struct FsSnapshotStore {
    dir: Arc<Dir>,
    template: String,
}

impl FsSnapshotStore {
    /// Opens (creating when needed) the snapshot directory at `root`.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotStoreError::Persistence`] when the directory cannot
    /// be created or opened.
    pub fn open(root: &Utf8Path) -> SnapshotStoreResult<Self> {
        let dir = open_root(root).map_err(SnapshotStoreError::persistence)?;
        Ok(Self {
            dir: Arc::new(dir),
            template: DEFAULT_SNAPSHOT_TEMPLATE.to_owned(),
        })
    }

    /// Replaces the file name template.
    #[must_use]
    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = template.into();
        self
    }

    /// Renders the file name a sprint's state is stored under.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotStoreError::Persistence`] when the template fails
    /// to render or renders something other than a plain file name.
    pub fn file_name(&self, key: &SprintKey) -> SnapshotStoreResult<String> {
        let rendered = Environment::new()
            .render_str(
                &self.template,
                context! { start => key.start.to_string(), name => key.name.as_str() },
            )
            .map_err(SnapshotStoreError::persistence)?;
        if rendered.is_empty() || rendered.contains(['/', '\\']) {
            return Err(SnapshotStoreError::persistence(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("snapshot file name is not a plain name: {rendered:?}"),
            )));
        }
        Ok(rendered)
    }
}

#[async_trait]
impl SnapshotStore for FsSnapshotStore {
    async fn save(&self, state: &BurndownState) -> SnapshotStoreResult<()> {
        let file_name = self.file_name(&state.key())?;
        let document =
            serde_json::to_string_pretty(state).map_err(SnapshotStoreError::persistence)?;
        let dir = Arc::clone(&self.dir);
        debug!(file = %file_name, "saving burndown snapshot");
        tokio::task::spawn_blocking(move || replace_file(&dir, &file_name, &document))
            .await
            .map_err(SnapshotStoreError::persistence)?
            .map_err(SnapshotStoreError::persistence)
    }

    async fn load(&self, key: &SprintKey) -> SnapshotStoreResult<Option<BurndownState>> {
        let file_name = self.file_name(key)?;
        let dir = Arc::clone(&self.dir);
        let contents = tokio::task::spawn_blocking(move || read_if_present(&dir, &file_name))
            .await
            .map_err(SnapshotStoreError::persistence)?
            .map_err(SnapshotStoreError::persistence)?;
        contents
            .map(|document| {
                serde_json::from_str(&document)
                    .map_err(|err| SnapshotStoreError::corrupt(key.clone(), err))
            })
            .transpose()
    }
}
