//! Sprint burndown: sampling, projection, and publication.
//!
//! Samples of per-lane point totals are compressed to one per day and
//! projected onto the sprint calendar against an ideal linear burn. A
//! background [`services::Scanner`] keeps the projection current and
//! serves versioned snapshots.
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - In-memory and filesystem adapters in [`adapters`]
//! - Projection and scanning services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
