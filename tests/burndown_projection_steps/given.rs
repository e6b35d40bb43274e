//! Given steps for burndown projection BDD scenarios.

use super::world::{BurndownWorld, FixedClock, parse_date, run_async};
use burndown::{
    board::domain::{Card, CardId, Lane, LaneId},
    burndown::{
        adapters::memory::{InMemorySnapshotArchive, InMemorySnapshotStore, InMemorySprintSource},
        domain::{ScanSample, Sprint},
        services::{Scanner, ScannerConfig, ScannerPorts},
    },
};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use std::sync::Arc;
use std::time::Duration;

#[given(r#"a sprint "{name}" from "{start}" to "{end}""#)]
fn sprint_window(
    world: &mut BurndownWorld,
    name: String,
    start: String,
    end: String,
) -> Result<(), eyre::Report> {
    let sprint = Sprint::new(name, parse_date(&start)?, parse_date(&end)?)
        .wrap_err("build sprint for scenario")?;
    world.sprint = Some(sprint);
    Ok(())
}

#[given(r#"a sample on "{day}" with {points:i64} points remaining"#)]
fn sample_on_day(world: &mut BurndownWorld, day: String, points: i64) -> Result<(), eyre::Report> {
    let time = parse_date(&day)?
        .and_hms_opt(9, 0, 0)
        .ok_or_else(|| eyre::eyre!("invalid sample time"))?
        .and_utc();
    world.history.push(ScanSample::new(time, 0, 0, points));
    Ok(())
}

#[given(r#"a scanner watching a three-lane board on "{day}""#)]
fn scanner_on_board(world: &mut BurndownWorld, day: String) -> Result<(), eyre::Report> {
    let sprint = world
        .sprint
        .clone()
        .ok_or_else(|| eyre::eyre!("missing sprint in scenario world"))?;
    for (lane, name, card, title) in [
        ("done", "Done", "c1", "Login (3)"),
        ("doing", "In Progress", "c2", "Parser (5)"),
        ("planned", "Planned", "c3", "Docs {S}"),
    ] {
        let lane_id = LaneId::new(lane)?;
        world.board.add_lane(Lane::new(lane_id.clone(), name)?)?;
        world
            .board
            .place_card(&lane_id, Card::new(CardId::new(card)?, title))?;
    }

    let now = parse_date(&day)?
        .and_hms_opt(10, 0, 0)
        .ok_or_else(|| eyre::eyre!("invalid scanner time"))?
        .and_utc();
    let ports = ScannerPorts {
        board: Arc::new(world.board.clone()),
        snapshots: Arc::new(InMemorySnapshotStore::new()),
        sprints: Arc::new(InMemorySprintSource::with_sprint(sprint)),
        archive: Arc::new(InMemorySnapshotArchive::new()),
    };
    let config = ScannerConfig::default().with_poll_interval(Duration::from_secs(3600));
    let scanner = run_async(Scanner::new(ports, config, Arc::new(FixedClock(now))).spawn())
        .wrap_err("start scanner for scenario")?;
    world.scanner = Some(scanner);
    Ok(())
}
