//! Domain model for sprints, samples, and the projected burndown.
//!
//! These types carry no I/O. Time enters only through explicit arguments.

mod day;
mod error;
mod sample;
mod sprint;
mod state;
mod status;

pub use day::{DayLabel, DayRecord, PLANNING_DAY, Tally};
pub use error::BurndownDomainError;
pub use sample::ScanSample;
pub use sprint::{Sprint, SprintKey};
pub use state::BurndownState;
pub use status::SprintStatus;
