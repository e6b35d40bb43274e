//! Domain model for board lanes, cards, actions, and lane events.
//!
//! Everything here is plain data: no type in this module talks to the
//! board or keeps a clock.

mod action;
mod card;
mod cursor;
mod error;
mod event;
mod ids;
mod points;
mod presence;

pub use action::{ActionKind, LaneAction};
pub use card::{Card, Lane};
pub use cursor::Cursor;
pub use error::BoardDomainError;
pub use event::{LaneEvent, LaneEventKind, TimelineEntry};
pub use ids::{ActionId, CardId, LaneId};
pub use points::StoryPoints;
pub use presence::PresenceSet;
