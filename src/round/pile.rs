//! The four discard piles and their current targets.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use crate::cards::Card;
use crate::core::error::GameError;
use crate::rules::PileKind;

/// One of the four discard piles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PileId {
    A1,
    A2,
    D1,
    D2,
}

impl PileId {
    /// All piles in priority order: a1, a2, d1, d2.
    pub const ALL: [PileId; 4] = [PileId::A1, PileId::A2, PileId::D1, PileId::D2];

    /// Position in `ALL`.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            PileId::A1 => 0,
            PileId::A2 => 1,
            PileId::D1 => 2,
            PileId::D2 => 3,
        }
    }

    #[must_use]
    pub const fn kind(self) -> PileKind {
        match self {
            PileId::A1 | PileId::A2 => PileKind::Ascending,
            PileId::D1 | PileId::D2 => PileKind::Descending,
        }
    }

    /// Token prefix used in action strings.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            PileId::A1 => "a1",
            PileId::A2 => "a2",
            PileId::D1 => "d1",
            PileId::D2 => "d2",
        }
    }
}

impl std::fmt::Display for PileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PileId {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "a1" => Ok(PileId::A1),
            "a2" => Ok(PileId::A2),
            "d1" => Ok(PileId::D1),
            "d2" => Ok(PileId::D2),
            other => Err(GameError::InvalidAction(format!("unknown pile: {other:?}"))),
        }
    }
}

/// Top card of each pile, indexed by `PileId`.
///
/// Serialized as `[a1, a2, d1, d2]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PileTargets([Card; 4]);

impl PileTargets {
    /// Sentinels for a fresh round: 1 on the ascending piles, deck_size+2 on the descending ones.
    #[must_use]
    pub fn new(deck_size: u16) -> Self {
        let low = Card::ascending_sentinel();
        let high = Card::descending_sentinel(deck_size);
        Self([low, low, high, high])
    }

    /// Can `card` go on `pile` right now?
    #[must_use]
    pub fn accepts(&self, pile: PileId, card: Card) -> bool {
        pile.kind().accepts(self[pile], card)
    }

    /// Piles that accept `card`, in priority order.
    pub fn accepting(&self, card: Card) -> impl Iterator<Item = PileId> + '_ {
        PileId::ALL.into_iter().filter(move |&pile| self.accepts(pile, card))
    }

    /// Targets as `[a1, a2, d1, d2]`.
    #[must_use]
    pub fn as_array(&self) -> [Card; 4] {
        self.0
    }
}

impl Index<PileId> for PileTargets {
    type Output = Card;

    fn index(&self, pile: PileId) -> &Self::Output {
        &self.0[pile.index()]
    }
}

impl IndexMut<PileId> for PileTargets {
    fn index_mut(&mut self, pile: PileId) -> &mut Self::Output {
        &mut self.0[pile.index()]
    }
}
