//! Turns board contents into scan samples.

use crate::board::{
    domain::{Card, Cursor, Lane, LaneEvent},
    ports::{BoardSource, BoardSourceError, BoardSourceResult},
    services::{ActionIngester, PresenceReplayer},
};
use crate::burndown::domain::{BurndownState, ScanSample};
use chrono::{DateTime, Utc};

/// Outcome of one action-log pass.
pub(super) struct ActionLogScan {
    pub(super) samples: Vec<ScanSample>,
    pub(super) events: Vec<LaneEvent>,
    pub(super) cursor: Option<Cursor>,
}

async fn lane_points(board: &dyn BoardSource, lane: Option<&Lane>) -> BoardSourceResult<i64> {
    match lane {
        Some(lane) => Ok(Card::total_points(&board.cards(lane.id()).await?)),
        None => Ok(0),
    }
}

/// Samples the point sums of the first three lanes: done, in progress,
/// planned. Missing lanes count as empty.
pub(super) async fn lane_totals(
    board: &dyn BoardSource,
    now: DateTime<Utc>,
) -> BoardSourceResult<ScanSample> {
    let lanes = board.lanes().await?;
    let done = lane_points(board, lanes.first()).await?;
    let in_progress = lane_points(board, lanes.get(1)).await?;
    let planned = lane_points(board, lanes.get(2)).await?;
    Ok(ScanSample::new(now, done, in_progress, planned))
}

/// Ingests the done lane's new actions and back-dates one sample to every
/// replay step they cause, followed by a sample stamped `now`.
///
/// The other lanes are only known as they are now, so every sample carries
/// their current sums. Steps older than the last recorded sample produce no
/// sample of their own: the history stays in time order and days already
/// charted are never rewritten. Their effect shows in the `now` sample.
pub(super) async fn action_log(
    board: &dyn BoardSource,
    state: &BurndownState,
    now: DateTime<Utc>,
) -> BoardSourceResult<ActionLogScan> {
    let lanes = board.lanes().await?;
    let tracked = lanes.first().ok_or(BoardSourceError::NoLanes)?;
    let log = board.actions(tracked.id()).await?;
    let current = board.cards(tracked.id()).await?;
    let in_progress = lane_points(board, lanes.get(1)).await?;
    let planned = lane_points(board, lanes.get(2)).await?;

    let ingestion = ActionIngester::new(tracked.id().clone()).ingest(
        &state.lane_events,
        state.cursor.as_ref(),
        &log,
        &current,
        now,
    );

    let mut replayer = PresenceReplayer::new();
    for event in &state.lane_events {
        replayer.apply(event);
    }
    let recorded_until = state.last_sample().map(|sample| sample.time);
    let mut samples: Vec<ScanSample> = ingestion
        .events
        .iter()
        .filter_map(|event| replayer.apply(event))
        .filter(|entry| recorded_until.is_none_or(|until| entry.time >= until))
        .map(|entry| ScanSample::new(entry.time, entry.running_points, in_progress, planned))
        .collect();
    samples.push(ScanSample::new(
        now,
        replayer.running_points(),
        in_progress,
        planned,
    ));

    Ok(ActionLogScan {
        samples,
        events: ingestion.events,
        cursor: ingestion.cursor,
    })
}
