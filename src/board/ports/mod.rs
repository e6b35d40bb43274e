//! Port contracts for reading the task board.
//!
//! The board client (authentication, pagination, card CRUD) lives outside
//! this crate; services only see the narrow read interface defined here.

mod source;

pub use source::{BoardSource, BoardSourceError, BoardSourceResult};
