//! Ingestion tests covering cursor handling, translation, and gap filling.

use super::support::{at, card, created, event, lane, moved};
use crate::board::{
    domain::{Card, Cursor, LaneAction, LaneEventKind},
    services::ActionIngester,
};
use chrono::TimeDelta;
use rstest::{fixture, rstest};

#[fixture]
fn ingester() -> ActionIngester {
    ActionIngester::new(lane("done"))
}

fn newest_first(mut actions: Vec<LaneAction>) -> Vec<LaneAction> {
    actions.reverse();
    actions
}

fn on_board(cards: &[(&str, &str)]) -> Vec<Card> {
    cards
        .iter()
        .map(|(id, name)| Card::new(card(id), *name))
        .collect()
}

#[rstest]
fn translates_moves_into_chronological_events(ingester: ActionIngester) {
    let log = newest_first(vec![
        moved("a1", 1, "c1", "Login (3)", "doing", "done"),
        moved("a2", 2, "c2", "Parser (5)", "doing", "done"),
        moved("a3", 3, "c1", "Login (3)", "done", "doing"),
    ]);
    let current = on_board(&[("c2", "Parser (5)")]);

    let ingestion = ingester.ingest(&[], None, &log, &current, at(10));

    let kinds: Vec<_> = ingestion
        .events
        .iter()
        .map(|event| (event.card_id().as_str().to_owned(), event.kind()))
        .collect();
    assert_eq!(
        kinds,
        vec![
            ("c1".to_owned(), LaneEventKind::Add),
            ("c2".to_owned(), LaneEventKind::Add),
            ("c1".to_owned(), LaneEventKind::Remove),
        ]
    );
    assert_eq!(ingestion.synthesized_count(), 0);
}

#[rstest]
fn reorders_and_foreign_moves_produce_no_events(ingester: ActionIngester) {
    let log = newest_first(vec![
        moved("a1", 1, "c1", "Login (3)", "done", "done"),
        moved("a2", 2, "c9", "Other (1)", "planned", "doing"),
        created("a3", 3, "c7", "Elsewhere (2)", "planned"),
    ]);

    let ingestion = ingester.ingest(&[], None, &log, &[], at(10));

    assert!(ingestion.events.is_empty());
}

#[rstest]
fn creation_in_tracked_lane_yields_create_event(ingester: ActionIngester) {
    let log = vec![created("a1", 1, "c1", "Fresh {S}", "done")];
    let current = on_board(&[("c1", "Fresh {S}")]);

    let ingestion = ingester.ingest(&[], None, &log, &current, at(10));

    assert_eq!(ingestion.events.len(), 1);
    let first = ingestion.events.first().expect("one event");
    assert_eq!(first.kind(), LaneEventKind::Create);
    assert_eq!(first.points().value(), 5);
}

#[rstest]
fn cursor_skips_already_seen_actions(ingester: ActionIngester) {
    let log = newest_first(vec![
        moved("a1", 1, "c1", "Login (3)", "doing", "done"),
        moved("a2", 2, "c2", "Parser (5)", "doing", "done"),
    ]);
    let current = on_board(&[("c1", "Login (3)"), ("c2", "Parser (5)")]);
    let cursor = Cursor::at(log.last().expect("oldest action"));
    let prior = vec![event(1, LaneEventKind::Add, "c1", "Login (3)")];

    let ingestion = ingester.ingest(&prior, Some(&cursor), &log, &current, at(10));

    assert_eq!(ingestion.events.len(), 1);
    assert_eq!(
        ingestion.events.first().map(|event| event.card_id().as_str()),
        Some("c2")
    );
}

#[rstest]
fn cursor_advances_to_newest_action_even_without_events(ingester: ActionIngester) {
    let log = newest_first(vec![
        moved("a1", 1, "c1", "Login (3)", "doing", "done"),
        moved("a2", 2, "c1", "Login (3)", "done", "done"),
    ]);
    let current = on_board(&[("c1", "Login (3)")]);

    let ingestion = ingester.ingest(&[], None, &log, &current, at(10));

    let cursor = ingestion.cursor.expect("cursor set");
    assert_eq!(cursor.last_event_id().as_str(), "a2");
    assert_eq!(cursor.last_event_time(), at(2));
}

#[rstest]
fn empty_log_keeps_previous_cursor(ingester: ActionIngester) {
    let previous = Cursor::at(&moved("a9", 9, "c1", "Login (3)", "doing", "done"));

    let ingestion = ingester.ingest(&[], Some(&previous), &[], &[], at(10));

    assert_eq!(ingestion.cursor, Some(previous));
}

#[rstest]
fn unknown_cursor_treats_whole_log_as_new(ingester: ActionIngester) {
    let log = vec![moved("a5", 5, "c1", "Login (3)", "doing", "done")];
    let rotated_away = Cursor::at(&moved("a1", 1, "c0", "Old (1)", "doing", "done"));
    let current = on_board(&[("c1", "Login (3)")]);

    let ingestion = ingester.ingest(&[], Some(&rotated_away), &log, &current, at(10));

    assert_eq!(ingestion.events.len(), 1);
    assert_eq!(ingestion.synthesized_count(), 0);
}

#[rstest]
fn gap_fill_adds_exactly_one_event_for_untracked_card(ingester: ActionIngester) {
    let log = vec![moved("a1", 4, "c1", "Login (3)", "doing", "done")];
    let current = on_board(&[("c1", "Login (3)"), ("c2", "Expired history (8)")]);

    let ingestion = ingester.ingest(&[], None, &log, &current, at(10));

    let synthesized: Vec<_> = ingestion
        .events
        .iter()
        .filter(|event| event.is_synthesized())
        .collect();
    assert_eq!(synthesized.len(), 1);
    let fill = synthesized.first().expect("one synthesized event");
    assert_eq!(fill.kind(), LaneEventKind::Add);
    assert_eq!(fill.card_id().as_str(), "c2");
    assert_eq!(fill.points().value(), 8);
    assert_eq!(fill.time(), at(4) + TimeDelta::milliseconds(1));
}

#[rstest]
fn gap_fill_removes_cards_missing_from_board(ingester: ActionIngester) {
    let prior = vec![
        event(1, LaneEventKind::Add, "c1", "Login (3)"),
        event(2, LaneEventKind::Add, "c2", "Parser (5)"),
    ];
    let current = on_board(&[("c1", "Login (3)")]);

    let ingestion = ingester.ingest(&prior, None, &[], &current, at(10));

    assert_eq!(ingestion.events.len(), 1);
    let fill = ingestion.events.first().expect("one event");
    assert!(fill.is_synthesized());
    assert_eq!(fill.kind(), LaneEventKind::Remove);
    assert_eq!(fill.card_id().as_str(), "c2");
    assert_eq!(fill.card_name(), "Parser (5)");
    assert_eq!(fill.time(), at(2) + TimeDelta::milliseconds(1));
}

#[rstest]
fn gap_fill_without_history_is_stamped_after_now(ingester: ActionIngester) {
    let current = on_board(&[("c2", "B (1)"), ("c1", "A (1)")]);

    let ingestion = ingester.ingest(&[], None, &[], &current, at(10));

    let ids: Vec<_> = ingestion
        .events
        .iter()
        .map(|event| event.card_id().as_str())
        .collect();
    assert_eq!(ids, vec!["c1", "c2"]);
    assert!(
        ingestion
            .events
            .iter()
            .all(|event| event.time() == at(10) + TimeDelta::milliseconds(1))
    );
}

#[rstest]
fn consistent_replay_needs_no_gap_fill(ingester: ActionIngester) {
    let log = newest_first(vec![
        moved("a1", 1, "c1", "Login (3)", "doing", "done"),
        moved("a2", 2, "c2", "Parser (5)", "doing", "done"),
    ]);
    let current = on_board(&[("c1", "Login (3)"), ("c2", "Parser (5)")]);

    let first = ingester.ingest(&[], None, &log, &current, at(10));
    let second = ingester.ingest(&first.events, first.cursor.as_ref(), &log, &current, at(11));

    assert_eq!(first.synthesized_count(), 0);
    assert!(second.events.is_empty());
    assert_eq!(second.cursor, first.cursor);
}
