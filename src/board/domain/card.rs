//! Cards and lanes as currently present on the board.

use super::{BoardDomainError, CardId, LaneId, StoryPoints};
use serde::{Deserialize, Serialize};

/// A card as it currently sits on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    id: CardId,
    name: String,
    url: Option<String>,
}

impl Card {
    /// Creates a card with the given identifier and name.
    #[must_use]
    pub fn new(id: CardId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            url: None,
        }
    }

    /// Sets the card's link on the board.
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Returns the card identifier.
    #[must_use]
    pub const fn id(&self) -> &CardId {
        &self.id
    }

    /// Returns the card name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the card's link on the board, if known.
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// Returns the estimate encoded in the card name.
    #[must_use]
    pub fn points(&self) -> StoryPoints {
        StoryPoints::parse(&self.name)
    }

    /// Sums the estimates of a lane's cards.
    #[must_use]
    pub fn total_points(cards: &[Self]) -> i64 {
        cards.iter().map(|card| card.points().as_total()).sum()
    }
}

/// A lane (list) on the board, in board order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lane {
    id: LaneId,
    name: String,
}

impl Lane {
    /// Creates a lane.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyLaneName`] when the name is blank.
    pub fn new(id: LaneId, name: impl Into<String>) -> Result<Self, BoardDomainError> {
        let raw = name.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(BoardDomainError::EmptyLaneName);
        }
        Ok(Self {
            id,
            name: trimmed.to_owned(),
        })
    }

    /// Returns the lane identifier.
    #[must_use]
    pub const fn id(&self) -> &LaneId {
        &self.id
    }

    /// Returns the lane name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}
