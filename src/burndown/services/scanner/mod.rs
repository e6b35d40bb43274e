//! Background task that polls the board and publishes sprint status.
//!
//! One task owns the [`BurndownState`]. It scans, then waits for whichever
//! comes first: shutdown, a command, or the poll timer. Commands therefore
//! never overlap a scan. Readers copy the published
//! `Arc<SprintStatus>` out of a lock that is only held to swap it.

mod command;
mod handle;
mod sampling;

pub use command::{ScannerCommand, StateMutation};
pub use handle::{ScannerHandle, StatusResponse};

use self::command::Envelope;
use super::{ScannerConfig, SprintProjector, TrackingMode};
use crate::board::ports::{BoardSource, BoardSourceError};
use crate::burndown::{
    domain::{BurndownDomainError, BurndownState, Sprint, SprintStatus},
    ports::{SnapshotArchive, SnapshotStore, SprintSource, SprintSourceError},
};
use mockable::Clock;
use std::sync::{Arc, PoisonError, RwLock};
use thiserror::Error;
use tokio::sync::{mpsc, watch};
use tracing::{debug, info, warn};

/// Errors returned by the scanner.
#[derive(Debug, Clone, Error)]
pub enum ScannerError {
    /// The board could not be read.
    #[error(transparent)]
    Board(#[from] BoardSourceError),

    /// The sprint definition could not be read or written.
    #[error(transparent)]
    Sprint(#[from] SprintSourceError),

    /// A derived sprint was invalid.
    #[error(transparent)]
    Domain(#[from] BurndownDomainError),

    /// The scanner task is no longer running.
    #[error("scanner is not running")]
    Stopped,
}

/// Result type for scanner operations.
pub type ScannerResult<T> = Result<T, ScannerError>;

/// Collaborators the scanner talks to.
#[derive(Clone)]
pub struct ScannerPorts {
    /// Board the samples are taken from.
    pub board: Arc<dyn BoardSource>,
    /// Durable state storage.
    pub snapshots: Arc<dyn SnapshotStore>,
    /// Definition of the current sprint.
    pub sprints: Arc<dyn SprintSource>,
    /// Destination for closed sprints.
    pub archive: Arc<dyn SnapshotArchive>,
}

/// Builder for a scanner task.
pub struct Scanner<C>
where
    C: Clock + Send + Sync + 'static,
{
    ports: ScannerPorts,
    config: ScannerConfig,
    clock: Arc<C>,
}

impl<C> Scanner<C>
where
    C: Clock + Send + Sync + 'static,
{
    /// Creates a scanner that has not started yet.
    #[must_use]
    pub const fn new(ports: ScannerPorts, config: ScannerConfig, clock: Arc<C>) -> Self {
        Self {
            ports,
            config,
            clock,
        }
    }

    /// Bootstraps the state, publishes the first status, and starts the
    /// scanner task.
    ///
    /// Missing or unreadable persisted state starts a fresh history.
    ///
    /// # Errors
    ///
    /// Returns [`ScannerError::Sprint`] when the current sprint cannot be
    /// read.
    pub async fn spawn(self) -> ScannerResult<ScannerHandle> {
        let sprint = self.ports.sprints.load().await?;
        let state = match self.ports.snapshots.load(&sprint.key()).await {
            Ok(Some(mut stored)) => {
                stored.sprint = sprint;
                stored
            }
            Ok(None) => BurndownState::fresh(sprint),
            Err(error) => {
                warn!(%error, sprint = sprint.name(), "could not load burndown state, starting fresh");
                BurndownState::fresh(sprint)
            }
        };
        info!(
            sprint = state.sprint.name(),
            version = state.version,
            samples = state.scan_history.len(),
            "scanner bootstrapped"
        );

        let offset = self.config.utc_offset();
        let published = Arc::new(RwLock::new(Arc::new(SprintStatus::default())));
        let mut worker = Worker {
            projector: SprintProjector::new(offset),
            ports: self.ports,
            config: self.config,
            clock: Arc::clone(&self.clock),
            state,
            published: Arc::clone(&published),
        };
        worker.publish();

        let (command_tx, command_rx) = mpsc::channel(worker.config.command_capacity());
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let task = tokio::spawn(worker.run(command_rx, shutdown_rx));
        let clock: Arc<dyn Clock + Send + Sync> = self.clock;
        Ok(ScannerHandle::new(
            command_tx,
            shutdown_tx,
            published,
            clock,
            offset,
            task,
        ))
    }
}

struct Worker<C> {
    ports: ScannerPorts,
    config: ScannerConfig,
    projector: SprintProjector,
    clock: Arc<C>,
    state: BurndownState,
    published: Arc<RwLock<Arc<SprintStatus>>>,
}

impl<C> Worker<C>
where
    C: Clock + Send + Sync + 'static,
{
    async fn run(
        mut self,
        mut commands: mpsc::Receiver<Envelope>,
        mut shutdown: watch::Receiver<bool>,
    ) {
        loop {
            if let Err(error) = self.scan().await {
                warn!(%error, "scan abandoned, retrying on next poll");
            }
            tokio::select! {
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        info!(sprint = self.state.sprint.name(), "scanner stopping");
                        return;
                    }
                }
                Some(envelope) = commands.recv() => self.handle(envelope).await,
                () = tokio::time::sleep(self.config.poll_interval()) => {}
            }
        }
    }

    async fn handle(&mut self, envelope: Envelope) {
        let Envelope { command, ack } = envelope;
        debug!(?command, "processing scanner command");
        let outcome = match command {
            ScannerCommand::StartSprint(sprint) => self.start_sprint(sprint).await,
            ScannerCommand::StartNextSprint => match self.state.sprint.successor() {
                Ok(next) => self.start_sprint(next).await,
                Err(error) => Err(error.into()),
            },
            ScannerCommand::Scan => self.scan().await,
            ScannerCommand::Apply(mutation) => {
                let issued = self.state.version;
                mutation(&mut self.state);
                // Versions already handed out must never be reissued.
                self.state.version = self.state.version.max(issued);
                self.publish();
                self.persist().await;
                Ok(())
            }
        };
        if ack.send(outcome).is_err() {
            debug!("command submitter left before acknowledgement");
        }
    }

    async fn scan(&mut self) -> ScannerResult<()> {
        let now = self.clock.utc();
        let offset = self.config.utc_offset();
        let board = &*self.ports.board;
        let (changed, progressed) = match self.config.tracking() {
            TrackingMode::LaneTotals => {
                let sample = sampling::lane_totals(board, now).await?;
                (self.state.record(sample, offset), false)
            }
            TrackingMode::ActionLog => {
                let pass = sampling::action_log(board, &self.state, now).await?;
                let progressed = !pass.events.is_empty() || pass.cursor != self.state.cursor;
                self.state.lane_events.extend(pass.events);
                self.state.cursor = pass.cursor;
                let mut changed = false;
                for sample in pass.samples {
                    changed |= self.state.record(sample, offset);
                }
                (changed, progressed)
            }
        };

        if changed {
            info!(
                sprint = self.state.sprint.name(),
                samples = self.state.scan_history.len(),
                "timeline changed"
            );
            self.publish();
        }
        if changed || progressed {
            self.persist().await;
        }
        Ok(())
    }

    async fn start_sprint(&mut self, sprint: Sprint) -> ScannerResult<()> {
        self.persist().await;
        if let Err(error) = self.ports.archive.archive(&self.state).await {
            warn!(%error, sprint = self.state.sprint.name(), "could not archive closing sprint");
        }
        self.ports.sprints.store(&sprint).await?;
        info!(
            closed = self.state.sprint.name(),
            started = sprint.name(),
            "starting new sprint"
        );
        self.state.reset_for(sprint);
        self.publish();
        Ok(())
    }

    /// Projects the state, stamps the next version, and swaps the result
    /// into the published slot.
    fn publish(&mut self) {
        let today = self
            .clock
            .utc()
            .with_timezone(&self.config.utc_offset())
            .date_naive();
        let status =
            self.projector
                .project_history(&self.state.sprint, &self.state.scan_history, today);
        let published = Arc::new(self.state.publish(status).clone());
        let version = published.version;
        *self.published.write().unwrap_or_else(PoisonError::into_inner) = published;
        debug!(sprint = self.state.sprint.name(), version, "published sprint status");
    }

    async fn persist(&self) {
        if let Err(error) = self.ports.snapshots.save(&self.state).await {
            warn!(%error, sprint = self.state.sprint.name(), "could not persist burndown state");
        }
    }
}
