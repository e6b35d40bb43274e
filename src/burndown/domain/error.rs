//! Error types for burndown domain validation.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors returned while constructing burndown domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BurndownDomainError {
    /// A sprint name was empty after trimming.
    #[error("sprint name must not be empty")]
    EmptySprintName,

    /// A sprint ends before it starts.
    #[error("sprint window is inverted: {start} is after {end}")]
    InvertedSprintWindow {
        /// First day of the rejected window.
        start: NaiveDate,
        /// Last day of the rejected window.
        end: NaiveDate,
    },

    /// Shifting a date left the supported calendar range.
    #[error("date out of range when shifting {0}")]
    DateOverflow(NaiveDate),
}
