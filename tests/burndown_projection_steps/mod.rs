//! Step definitions for burndown projection scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
