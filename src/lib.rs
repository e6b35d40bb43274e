//! Burndown: sprint progress reconstructed from a task board.
//!
//! The crate rebuilds a deduplicated history of story points from a
//! board's noisy, newest-first action log and projects it into a
//! day-by-day burndown chart with an ideal-progress baseline.
//!
//! # Architecture
//!
//! Each bounded context follows hexagonal architecture principles:
//!
//! - **Domain**: Plain data and pure rules, no I/O
//! - **Ports**: Async trait interfaces for the board, sprint definition,
//!   and persistence
//! - **Adapters**: In-memory and filesystem implementations of the ports
//! - **Services**: Ingestion, replay, projection, and the scanner task
//!
//! # Modules
//!
//! - [`board`]: Lane actions, ingestion with gap filling, presence replay
//! - [`burndown`]: Sprint samples, projection, and the background scanner

pub mod board;
pub mod burndown;
