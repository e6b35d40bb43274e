//! Commands accepted by the scanner task.

use super::ScannerResult;
use crate::burndown::domain::{BurndownState, Sprint};
use std::fmt;
use tokio::sync::oneshot;

/// Arbitrary mutation of the scanner's state.
pub type StateMutation = Box<dyn FnOnce(&mut BurndownState) + Send>;

/// A request executed on the scanner task between scans.
pub enum ScannerCommand {
    /// Close the current sprint and start tracking `Sprint`.
    StartSprint(Sprint),
    /// Close the current sprint and start its suggested successor.
    StartNextSprint,
    /// Poll the board now instead of waiting for the timer.
    Scan,
    /// Mutate the state, then recompute and publish the status.
    ///
    /// A mutation may raise `version` but never lower it.
    Apply(StateMutation),
}

impl ScannerCommand {
    /// Wraps a closure as an [`ScannerCommand::Apply`] command.
    pub fn apply(mutation: impl FnOnce(&mut BurndownState) + Send + 'static) -> Self {
        Self::Apply(Box::new(mutation))
    }
}

impl fmt::Debug for ScannerCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StartSprint(sprint) => f.debug_tuple("StartSprint").field(sprint).finish(),
            Self::StartNextSprint => f.write_str("StartNextSprint"),
            Self::Scan => f.write_str("Scan"),
            Self::Apply(_) => f.write_str("Apply(..)"),
        }
    }
}

/// A command paired with the channel its outcome is reported on.
pub(super) struct Envelope {
    pub(super) command: ScannerCommand,
    pub(super) ack: oneshot::Sender<ScannerResult<()>>,
}
