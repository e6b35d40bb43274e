//! Adapter implementations for burndown ports.

pub mod fs;
pub mod memory;
