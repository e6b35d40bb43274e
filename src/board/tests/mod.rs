//! Unit tests for the board module.

mod ingest_tests;
mod support;
