//! When steps for burndown projection BDD scenarios.

use super::world::{BurndownWorld, parse_date, run_async};
use burndown::{
    board::domain::{Card, CardId, LaneId},
    burndown::services::{ScannerHandle, SprintProjector},
};
use chrono::FixedOffset;
use eyre::WrapErr;
use rstest_bdd_macros::when;

fn scanner(world: &BurndownWorld) -> Result<&ScannerHandle, eyre::Report> {
    world
        .scanner
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing scanner in scenario world"))
}

#[when(r#"the sprint is projected on "{day}""#)]
fn project_sprint(world: &mut BurndownWorld, day: String) -> Result<(), eyre::Report> {
    let sprint = world
        .sprint
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing sprint in scenario world"))?;
    let utc = FixedOffset::east_opt(0).ok_or_else(|| eyre::eyre!("invalid offset"))?;
    let status =
        SprintProjector::new(utc).project_history(sprint, &world.history, parse_date(&day)?);
    world.status = Some(status);
    Ok(())
}

#[when("the scanner scans twice")]
fn scan_twice(world: &mut BurndownWorld) -> Result<(), eyre::Report> {
    let handle = scanner(world)?;
    run_async(handle.scan_now()).wrap_err("first scan")?;
    run_async(handle.scan_now()).wrap_err("second scan")?;
    Ok(())
}

#[when(r#"card "{title}" is planned and the scanner scans"#)]
fn plan_card_and_scan(world: &mut BurndownWorld, title: String) -> Result<(), eyre::Report> {
    let handle = scanner(world)?;
    run_async(handle.scan_now()).wrap_err("scan before planning")?;
    world
        .board
        .place_card(&LaneId::new("planned")?, Card::new(CardId::new("c4")?, title))?;
    run_async(handle.scan_now()).wrap_err("scan after planning")?;
    Ok(())
}
