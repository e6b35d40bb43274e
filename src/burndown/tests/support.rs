//! Builders and test doubles shared by burndown unit tests.

use crate::board::{
    adapters::memory::InMemoryBoard,
    domain::{Card, CardId, Lane, LaneId},
};
use crate::burndown::domain::{ScanSample, Sprint};
use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use mockable::Clock;
use std::sync::{PoisonError, RwLock};

/// Clock frozen at a settable instant.
pub struct FixedClock {
    now: RwLock<DateTime<Utc>>,
}

impl FixedClock {
    pub fn at(now: DateTime<Utc>) -> Self {
        Self {
            now: RwLock::new(now),
        }
    }

    pub fn set(&self, now: DateTime<Utc>) {
        *self.now.write().unwrap_or_else(PoisonError::into_inner) = now;
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        *self.now.read().unwrap_or_else(PoisonError::into_inner)
    }
}

/// A day in the week of Monday 2024-03-04.
pub fn march(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, day).expect("valid date")
}

pub fn at(day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, day, hour, 0, 0)
        .single()
        .expect("valid timestamp")
}

/// Monday 4 to Friday 8 March 2024.
pub fn work_week() -> Sprint {
    Sprint::new("Sprint-M3", march(4), march(8)).expect("valid sprint")
}

pub fn sample(day: u32, hour: u32, done: i64, in_progress: i64, planned: i64) -> ScanSample {
    ScanSample::new(at(day, hour), done, in_progress, planned)
}

pub fn lane(id: &str) -> LaneId {
    LaneId::new(id).expect("valid lane id")
}

pub fn card(id: &str, name: &str) -> Card {
    Card::new(CardId::new(id).expect("valid card id"), name)
}

/// Board with done, doing, and planned lanes, in that order.
pub fn three_lane_board() -> InMemoryBoard {
    let board = InMemoryBoard::new();
    for (id, name) in [("done", "Done"), ("doing", "In Progress"), ("planned", "Planned")] {
        board
            .add_lane(Lane::new(lane(id), name).expect("valid lane"))
            .expect("lane added");
    }
    board
}
