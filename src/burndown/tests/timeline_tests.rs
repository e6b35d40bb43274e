//! Day compression and linearization tests.

use super::support::{at, sample};
use crate::board::domain::{CardId, TimelineEntry};
use crate::burndown::{
    domain::DayLabel,
    services::timeline::{compress, linearize},
};
use chrono::{FixedOffset, NaiveDate};
use rstest::{fixture, rstest};

#[fixture]
fn utc() -> FixedOffset {
    FixedOffset::east_opt(0).expect("valid offset")
}

fn label(day: u32) -> DayLabel {
    DayLabel::from_date(NaiveDate::from_ymd_opt(2024, 3, day).expect("valid date"))
}

#[rstest]
fn compression_keeps_last_item_per_day(utc: FixedOffset) {
    let history = [
        sample(4, 9, 0, 0, 1),
        sample(4, 17, 0, 0, 2),
        sample(5, 9, 0, 0, 3),
    ];

    let compressed = compress(&history, utc);

    assert_eq!(compressed.len(), 2);
    assert_eq!(compressed.get(&label(4)).map(|s| s.planned), Some(2));
    assert_eq!(compressed.get(&label(5)).map(|s| s.planned), Some(3));
    assert!(compressed.get(&label(6)).is_none());
}

#[rstest]
fn compression_labels_days_in_configured_offset() {
    let west = FixedOffset::west_opt(5 * 3600).expect("valid offset");
    let history = [sample(5, 2, 0, 0, 7)];

    let compressed = compress(&history, west);

    assert_eq!(compressed.get(&label(4)).map(|s| s.planned), Some(7));
}

#[rstest]
fn linearize_yields_one_item_per_day_in_order(utc: FixedOffset) {
    let history = [
        sample(4, 9, 0, 0, 1),
        sample(4, 17, 0, 0, 2),
        sample(5, 9, 0, 0, 3),
        sample(7, 9, 0, 0, 4),
        sample(7, 10, 0, 0, 5),
    ];

    let linear = linearize(&history, utc);

    let planned: Vec<_> = linear.iter().map(|s| s.planned).collect();
    assert_eq!(planned, vec![2, 3, 5]);
}

#[rstest]
fn replay_entries_compress_like_samples(utc: FixedOffset) {
    let entry = |day, points| TimelineEntry {
        time: at(day, 12),
        running_points: points,
        running_cards: 1,
        card_id: CardId::new("c1").expect("valid card id"),
        card_name: "Login (3)".to_owned(),
    };
    let timeline = [entry(4, 3), entry(4, 6), entry(6, 2)];

    let compressed = compress(&timeline, utc);

    assert_eq!(
        compressed.get(&label(4)).map(|e| e.running_points),
        Some(6)
    );
    assert_eq!(linearize(&timeline, utc).len(), 2);
}
