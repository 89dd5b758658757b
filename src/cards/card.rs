//! Card values.
//!
//! A card is nothing but its rank. Ranks 2..=deck_size+1 are dealt; rank 1
//! and rank deck_size+2 only ever appear as pile sentinels.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::core::error::GameError;

/// A numbered card, ordered by rank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Card(pub u16);

impl Card {
    /// Create a card with the given rank.
    #[must_use]
    pub const fn new(rank: u16) -> Self {
        Self(rank)
    }

    /// Raw rank value.
    #[must_use]
    pub const fn rank(self) -> u16 {
        self.0
    }

    /// Starting target of both ascending piles.
    #[must_use]
    pub const fn ascending_sentinel() -> Self {
        Self(1)
    }

    /// Starting target of both descending piles.
    #[must_use]
    pub const fn descending_sentinel(deck_size: u16) -> Self {
        Self(deck_size + 2)
    }

    /// True iff the ranks differ by exactly ten, in either direction.
    ///
    /// ```
    /// use the_game::cards::Card;
    ///
    /// assert!(Card::new(10).diff_ten(Card::new(20)));
    /// assert!(Card::new(20).diff_ten(Card::new(10)));
    /// assert!(!Card::new(10).diff_ten(Card::new(21)));
    /// ```
    #[must_use]
    pub fn diff_ten(self, other: Card) -> bool {
        self.0.abs_diff(other.0) == 10
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Card {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u16>()
            .map(Card)
            .map_err(|_| GameError::InvalidAction(format!("not a card rank: {s:?}")))
    }
}
