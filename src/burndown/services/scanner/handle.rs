//! Caller-side access to a running scanner.

use super::{ScannerCommand, ScannerError, ScannerResult, command::Envelope};
use crate::burndown::domain::{DayLabel, Sprint, SprintStatus};
use chrono::FixedOffset;
use mockable::Clock;
use std::sync::{Arc, PoisonError, RwLock};
use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;
use tracing::error;

/// Result of a conditional status read.
#[derive(Debug, Clone, PartialEq)]
pub enum StatusResponse {
    /// The caller's tag is stale; here is the current status.
    Modified {
        /// Tag identifying `status` on the current day.
        etag: String,
        /// Current status.
        status: Arc<SprintStatus>,
    },
    /// The caller already holds the current status.
    NotModified {
        /// Tag the caller sent.
        etag: String,
    },
}

/// Handle to a spawned scanner.
///
/// Reads never wait for the scanner task; commands wait until the task has
/// applied them.
pub struct ScannerHandle {
    commands: mpsc::Sender<Envelope>,
    shutdown: watch::Sender<bool>,
    published: Arc<RwLock<Arc<SprintStatus>>>,
    clock: Arc<dyn Clock + Send + Sync>,
    offset: FixedOffset,
    task: JoinHandle<()>,
}

impl std::fmt::Debug for ScannerHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScannerHandle")
            .field("offset", &self.offset)
            .field("finished", &self.task.is_finished())
            .finish_non_exhaustive()
    }
}

impl ScannerHandle {
    pub(super) fn new(
        commands: mpsc::Sender<Envelope>,
        shutdown: watch::Sender<bool>,
        published: Arc<RwLock<Arc<SprintStatus>>>,
        clock: Arc<dyn Clock + Send + Sync>,
        offset: FixedOffset,
        task: JoinHandle<()>,
    ) -> Self {
        Self {
            commands,
            shutdown,
            published,
            clock,
            offset,
            task,
        }
    }

    /// Returns the most recently published status.
    #[must_use]
    pub fn sprint_status(&self) -> Arc<SprintStatus> {
        Arc::clone(&self.published.read().unwrap_or_else(PoisonError::into_inner))
    }

    /// Returns the status unless `if_none_match` equals its current tag.
    ///
    /// The tag is `"{version}:{day label}"`, so it also changes when the
    /// day rolls over and `today` moves.
    #[must_use]
    pub fn status_if_modified(&self, if_none_match: Option<&str>) -> StatusResponse {
        let status = self.sprint_status();
        let etag = format!(
            "{}:{}",
            status.version,
            DayLabel::from_time(self.clock.utc(), self.offset)
        );
        if if_none_match == Some(etag.as_str()) {
            StatusResponse::NotModified { etag }
        } else {
            StatusResponse::Modified { etag, status }
        }
    }

    /// Sends a command and waits until the scanner has applied it.
    ///
    /// # Errors
    ///
    /// Returns the command's own failure, or [`ScannerError::Stopped`] when
    /// the scanner is no longer running.
    pub async fn submit(&self, command: ScannerCommand) -> ScannerResult<()> {
        let (ack, outcome) = oneshot::channel();
        self.commands
            .send(Envelope { command, ack })
            .await
            .map_err(|_| ScannerError::Stopped)?;
        outcome.await.map_err(|_| ScannerError::Stopped)?
    }

    /// Closes the current sprint and starts tracking `sprint`.
    ///
    /// # Errors
    ///
    /// See [`ScannerHandle::submit`].
    pub async fn start_sprint(&self, sprint: Sprint) -> ScannerResult<()> {
        self.submit(ScannerCommand::StartSprint(sprint)).await
    }

    /// Polls the board immediately.
    ///
    /// # Errors
    ///
    /// Returns [`ScannerError::Board`] when the board could not be read.
    pub async fn scan_now(&self) -> ScannerResult<()> {
        self.submit(ScannerCommand::Scan).await
    }

    /// Stops the scanner and waits for its task to finish.
    ///
    /// # Errors
    ///
    /// Returns [`ScannerError::Stopped`] when the task ended abnormally.
    pub async fn shutdown(self) -> ScannerResult<()> {
        self.shutdown.send_replace(true);
        self.task.await.map_err(|err| {
            error!(error = %err, "scanner task ended abnormally");
            ScannerError::Stopped
        })
    }
}
