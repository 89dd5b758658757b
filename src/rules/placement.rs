//! What a pile accepts, and how a round ends.

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Direction a pile climbs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PileKind {
    /// Targets only rise, except for a jump of exactly ten.
    Ascending,
    /// Targets only fall, except for a jump of exactly ten.
    Descending,
}

impl PileKind {
    /// Can `card` be placed on a pile of this kind currently showing `target`?
    ///
    /// ```
    /// use the_game::cards::Card;
    /// use the_game::rules::PileKind;
    ///
    /// assert!(PileKind::Ascending.accepts(Card::new(20), Card::new(21)));
    /// assert!(PileKind::Ascending.accepts(Card::new(20), Card::new(10)));
    /// assert!(!PileKind::Descending.accepts(Card::new(20), Card::new(21)));
    /// ```
    #[must_use]
    pub fn accepts(self, target: Card, card: Card) -> bool {
        let in_order = match self {
            PileKind::Ascending => card > target,
            PileKind::Descending => card < target,
        };
        in_order || card.diff_ten(target)
    }
}

/// How a finished round ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// Deck exhausted and every hand emptied.
    Won,
    /// A player was stuck before meeting the minimum move count.
    Lost {
        /// Cards left in the deck and all hands (the table's score; lower is better).
        cards_remaining: usize,
    },
}

impl RoundOutcome {
    #[must_use]
    pub fn is_win(&self) -> bool {
        matches!(self, RoundOutcome::Won)
    }
}
