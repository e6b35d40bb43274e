//! Sprint source backed by a JSON file.

use super::{open_root, read_if_present, replace_file};
use crate::burndown::{
    domain::Sprint,
    ports::{SprintSource, SprintSourceError, SprintSourceResult},
};
use async_trait::async_trait;
use camino::Utf8Path;
use cap_std::fs_utf8::Dir;
use std::sync::Arc;

/// File the current sprint is kept in unless overridden.
pub const DEFAULT_SPRINT_FILE: &str = "sprint.json";

/// Reads and writes the current sprint as `{name, start, end}` JSON.
#[derive(Debug, Clone)]
pub struct FsSprintSource {
    dir: Arc<Dir>,
    file_name: String,
}

impl FsSprintSource {
    /// Opens (creating when needed) the directory holding the sprint file.
    ///
    /// # Errors
    ///
    /// Returns [`SprintSourceError::Io`] when the directory cannot be
    /// created or opened.
    pub fn open(root: &Utf8Path) -> SprintSourceResult<Self> {
        let dir = open_root(root).map_err(SprintSourceError::io)?;
        Ok(Self {
            dir: Arc::new(dir),
            file_name: DEFAULT_SPRINT_FILE.to_owned(),
        })
    }

    /// Uses a different file name inside the directory.
    #[must_use]
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }
}

#[async_trait]
impl SprintSource for FsSprintSource {
    async fn load(&self) -> SprintSourceResult<Sprint> {
        let dir = Arc::clone(&self.dir);
        let file_name = self.file_name.clone();
        let contents = tokio::task::spawn_blocking(move || read_if_present(&dir, &file_name))
            .await
            .map_err(SprintSourceError::io)?
            .map_err(SprintSourceError::io)?
            .ok_or(SprintSourceError::Missing)?;
        serde_json::from_str(&contents).map_err(SprintSourceError::io)
    }

    async fn store(&self, sprint: &Sprint) -> SprintSourceResult<()> {
        let document = serde_json::to_string_pretty(sprint).map_err(SprintSourceError::io)?;
        let dir = Arc::clone(&self.dir);
        let file_name = self.file_name.clone();
        tokio::task::spawn_blocking(move || replace_file(&dir, &file_name, &document))
            .await
            .map_err(SprintSourceError::io)?
            .map_err(SprintSourceError::io)
    }
}
