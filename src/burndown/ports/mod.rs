//! Port contracts for sprint definitions and snapshot persistence.

mod archive;
mod sprint;
mod store;

pub use archive::{SnapshotArchive, SnapshotArchiveError, SnapshotArchiveResult};
pub use sprint::{SprintSource, SprintSourceError, SprintSourceResult};
pub use store::{SnapshotStore, SnapshotStoreError, SnapshotStoreResult};
