//! Action tokens.
//!
//! The wire form is flat text:
//! - `"draw"`: end the turn and refill the hand
//! - `"<pile>-<rank>"`: play that rank onto that pile, e.g. `"a1-11"`, `"d2-87"`

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::pile::PileId;
use crate::cards::Card;
use crate::core::error::GameError;

/// A single move within a turn.
///
/// Serialized as its text token.
///
/// ```
/// use the_game::cards::Card;
/// use the_game::round::{PileId, RoundAction};
///
/// let play: RoundAction = "d2-87".parse().unwrap();
/// assert_eq!(play, RoundAction::play(PileId::D2, Card::new(87)));
/// assert_eq!(RoundAction::Draw.to_string(), "draw");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum RoundAction {
    /// Place `card` on `pile`.
    Play { pile: PileId, card: Card },
    /// End the turn.
    Draw,
}

impl RoundAction {
    #[must_use]
    pub const fn play(pile: PileId, card: Card) -> Self {
        RoundAction::Play { pile, card }
    }

    #[must_use]
    pub fn is_draw(&self) -> bool {
        matches!(self, RoundAction::Draw)
    }
}

impl std::fmt::Display for RoundAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoundAction::Draw => f.write_str("draw"),
            RoundAction::Play { pile, card } => write!(f, "{pile}-{card}"),
        }
    }
}

impl FromStr for RoundAction {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "draw" {
            return Ok(RoundAction::Draw);
        }
        let (pile, rank) = s
            .split_once('-')
            .ok_or_else(|| GameError::InvalidAction(format!("malformed action: {s:?}")))?;
        Ok(RoundAction::Play {
            pile: pile.parse()?,
            card: rank.parse()?,
        })
    }
}

impl TryFrom<String> for RoundAction {
    type Error = GameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<RoundAction> for String {
    fn from(action: RoundAction) -> Self {
        action.to_string()
    }
}
