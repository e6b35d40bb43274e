//! Builders shared by board unit tests.

use crate::board::domain::{ActionId, CardId, LaneAction, LaneEvent, LaneEventKind, LaneId};
use chrono::{DateTime, TimeZone, Utc};

pub fn at(minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 4, 9, minute, 0)
        .single()
        .expect("valid timestamp")
}

pub fn lane(id: &str) -> LaneId {
    LaneId::new(id).expect("valid lane id")
}

pub fn card(id: &str) -> CardId {
    CardId::new(id).expect("valid card id")
}

pub fn action_id(id: &str) -> ActionId {
    ActionId::new(id).expect("valid action id")
}

pub fn event(minute: u32, kind: LaneEventKind, card_id: &str, name: &str) -> LaneEvent {
    LaneEvent::new(at(minute), kind, card(card_id), name)
}

pub fn moved(id: &str, minute: u32, card_id: &str, name: &str, from: &str, to: &str) -> LaneAction {
    LaneAction::move_card(
        action_id(id),
        at(minute),
        card(card_id),
        name,
        lane(from),
        lane(to),
    )
}

pub fn created(id: &str, minute: u32, card_id: &str, name: &str, in_lane: &str) -> LaneAction {
    LaneAction::create_card(
        action_id(id),
        at(minute),
        card(card_id),
        name,
        Some(lane(in_lane)),
    )
}
