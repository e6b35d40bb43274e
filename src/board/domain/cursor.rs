//! Ingestion resumption marker.

use super::{ActionId, LaneAction};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The newest action already seen by the ingester.
///
/// Actions at or before the cursor are never ingested again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cursor {
    last_event_id: ActionId,
    last_event_time: DateTime<Utc>,
}

impl Cursor {
    /// Creates a cursor pointing at the given action.
    #[must_use]
    pub const fn new(last_event_id: ActionId, last_event_time: DateTime<Utc>) -> Self {
        Self {
            last_event_id,
            last_event_time,
        }
    }

    /// Creates a cursor pointing at `action`.
    #[must_use]
    pub fn at(action: &LaneAction) -> Self {
        Self::new(action.id().clone(), action.time())
    }

    /// Returns the identifier of the newest seen action.
    #[must_use]
    pub const fn last_event_id(&self) -> &ActionId {
        &self.last_event_id
    }

    /// Returns the time of the newest seen action.
    #[must_use]
    pub const fn last_event_time(&self) -> DateTime<Utc> {
        self.last_event_time
    }
}
