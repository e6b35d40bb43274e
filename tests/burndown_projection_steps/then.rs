//! Then steps for burndown projection BDD scenarios.

use super::world::BurndownWorld;
use rstest_bdd_macros::then;

#[then("the chart has {rows:usize} rows")]
fn chart_has_rows(world: &BurndownWorld, rows: usize) -> Result<(), eyre::Report> {
    let status = world.current_status()?;
    if status.days.len() != rows {
        return Err(eyre::eyre!(
            "expected {rows} rows, found {}",
            status.days.len()
        ));
    }
    Ok(())
}

#[then(r#"the totals are "{totals}""#)]
fn totals_are(world: &BurndownWorld, totals: String) -> Result<(), eyre::Report> {
    let expected = totals
        .split(',')
        .map(|value| value.trim().parse::<i64>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|err| eyre::eyre!("invalid totals in scenario: {err}"))?;
    let actual: Vec<i64> = world
        .current_status()?
        .days
        .iter()
        .map(|day| day.total)
        .collect();
    if actual != expected {
        return Err(eyre::eyre!("expected totals {expected:?}, found {actual:?}"));
    }
    Ok(())
}

#[then("the expected values decrease every day")]
fn expected_values_decrease(world: &BurndownWorld) -> Result<(), eyre::Report> {
    let status = world.current_status()?;
    let decreasing = status
        .days
        .windows(2)
        .all(|pair| matches!(pair, [earlier, later] if later.expected < earlier.expected));
    if !decreasing {
        return Err(eyre::eyre!("expected values do not decrease: {:?}", status.days));
    }
    Ok(())
}

#[then(r#"row "{label}" has total {total:i64} and expected {expected:i32}"#)]
fn row_has_values(
    world: &BurndownWorld,
    label: String,
    total: i64,
    expected: i32,
) -> Result<(), eyre::Report> {
    let status = world.current_status()?;
    let row = status
        .days
        .iter()
        .find(|day| day.name == label)
        .ok_or_else(|| eyre::eyre!("no row labelled {label:?}"))?;
    if row.total != total || row.expected != f64::from(expected) {
        return Err(eyre::eyre!(
            "expected total {total} and expected {expected}, found {} and {}",
            row.total,
            row.expected
        ));
    }
    Ok(())
}

#[then("the published version is {version:u64}")]
fn published_version(world: &BurndownWorld, version: u64) -> Result<(), eyre::Report> {
    let actual = world.current_status()?.version;
    if actual != version {
        return Err(eyre::eyre!("expected version {version}, found {actual}"));
    }
    Ok(())
}
