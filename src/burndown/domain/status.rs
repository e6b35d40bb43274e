//! The externally visible sprint status.

use super::DayRecord;
use serde::{Deserialize, Serialize};

/// Projected burndown for one sprint, versioned for cache invalidation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SprintStatus {
    /// Sprint name.
    pub name: String,
    /// Index of today's row among the working days, if inside the sprint.
    ///
    /// Serialized as `-1` when today falls outside the sprint.
    #[serde(with = "today_index")]
    pub today: Option<usize>,
    /// Planning row followed by one row per sprint day.
    pub days: Vec<DayRecord>,
    /// Publication counter; changes whenever the status is recomputed.
    pub version: u64,
}

impl SprintStatus {
    /// Creates a status with no projected days.
    #[must_use]
    pub fn empty(name: impl Into<String>, today: Option<usize>) -> Self {
        Self {
            name: name.into(),
            today,
            days: Vec::new(),
            version: 0,
        }
    }
}

mod today_index {
    use serde::{Deserialize, Deserializer, Serializer, ser::Error as _};

    const OUTSIDE: i64 = -1;

    pub fn serialize<S>(today: &Option<usize>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match today {
            Some(index) => serializer.serialize_u64(u64::try_from(*index).map_err(S::Error::custom)?),
            None => serializer.serialize_i64(OUTSIDE),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<usize>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = i64::deserialize(deserializer)?;
        Ok(usize::try_from(raw).ok())
    }
}
