//! In-memory board adapter.

mod board;

pub use board::InMemoryBoard;
