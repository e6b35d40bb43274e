//! Ingestion and replay services for lane events.

mod ingest;
mod replay;

pub use ingest::{ActionIngester, Ingestion};
pub use replay::PresenceReplayer;
