//! Unit tests for the burndown module.

mod support;
mod timeline_tests;
