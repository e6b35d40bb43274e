//! Story point estimates encoded in card names.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Size tags recognised in card names, checked in order.
const SIZE_TAGS: [(&[&str], u32); 3] = [
    (&["{S}", "{SMALL}"], 5),
    (&["{M}", "{MED}"], 25),
    (&["{L}", "{LARGE}"], 100),
];

/// Story point estimate of a single card.
///
/// Card names carry their estimate inline. An explicit numeric tag such as
/// `(8)` takes precedence; otherwise a size tag (`{S}`, `{M}`, `{L}` or their
/// long forms) maps to a fixed estimate. Names without any tag are worth zero
/// points.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct StoryPoints(u32);

impl StoryPoints {
    /// A card without an estimate.
    pub const ZERO: Self = Self(0);

    /// Creates an estimate from a raw value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Parses the estimate encoded in a card name.
    ///
    /// A numeric tag that does not fit the estimate range yields zero points
    /// rather than falling through to size tags.
    #[must_use]
    pub fn parse(card_name: &str) -> Self {
        if let Some(digits) = numeric_tag(card_name) {
            return digits.parse().map_or(Self::ZERO, Self);
        }

        let upper = card_name.to_uppercase();
        SIZE_TAGS
            .iter()
            .find(|(tags, _)| tags.iter().any(|tag| upper.contains(tag)))
            .map_or(Self::ZERO, |&(_, points)| Self(points))
    }

    /// Returns the raw estimate.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Returns the estimate widened for point arithmetic.
    #[must_use]
    pub fn as_total(self) -> i64 {
        i64::from(self.0)
    }

    /// Returns true when the card contributes to point totals.
    #[must_use]
    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }
}

impl fmt::Display for StoryPoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Returns the digits of the first `(N)` tag in `name`.
fn numeric_tag(name: &str) -> Option<&str> {
    name.match_indices('(').find_map(|(open, _)| {
        let rest = name.get(open + 1..)?;
        let digits_len = rest.find(|ch: char| !ch.is_ascii_digit())?;
        if digits_len == 0 || !rest.get(digits_len..)?.starts_with(')') {
            return None;
        }
        rest.get(..digits_len)
    })
}
