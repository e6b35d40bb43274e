//! Shared world state for burndown projection BDD scenarios.

use burndown::{
    board::adapters::memory::InMemoryBoard,
    burndown::{
        domain::{ScanSample, Sprint, SprintStatus},
        services::ScannerHandle,
    },
};
use chrono::{DateTime, Local, NaiveDate, Utc};
use mockable::Clock;
use rstest::fixture;

/// Clock frozen at one instant.
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Scenario world for burndown behaviour tests.
#[derive(Default)]
pub struct BurndownWorld {
    pub sprint: Option<Sprint>,
    pub history: Vec<ScanSample>,
    pub status: Option<SprintStatus>,
    pub board: InMemoryBoard,
    pub scanner: Option<ScannerHandle>,
}

impl BurndownWorld {
    /// Returns the status produced by the last projection or scan.
    pub fn current_status(&self) -> Result<SprintStatus, eyre::Report> {
        if let Some(scanner) = &self.scanner {
            return Ok(scanner.sprint_status().as_ref().clone());
        }
        self.status
            .clone()
            .ok_or_else(|| eyre::eyre!("no status projected in scenario world"))
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BurndownWorld {
    BurndownWorld::default()
}

/// Parses an ISO date from a step argument.
pub fn parse_date(raw: &str) -> Result<NaiveDate, eyre::Report> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|err| eyre::eyre!("invalid date {raw:?} in scenario: {err}"))
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
