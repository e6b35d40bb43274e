//! Task-board vocabulary, action ingestion, and presence replay.
//!
//! The board context turns a lane's raw, newest-first action log into an
//! ordered sequence of lane events and folds those events into a running
//! point total. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Ingestion and replay services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
