//! In-memory adapters for tests and local runs.

mod archive;
mod sprint;
mod store;

pub use archive::InMemorySnapshotArchive;
pub use sprint::InMemorySprintSource;
pub use store::InMemorySnapshotStore;
