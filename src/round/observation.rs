//! Per-player view of a round.

use serde::{Deserialize, Serialize};

use super::action::RoundAction;
use super::pile::PileTargets;
use crate::cards::Card;

/// What one player sees when it is asked to act.
///
/// Serializes as
/// `{hand, target: [a1, a2, d1, d2], playable_cards, played_cards, legal_actions}`
/// with cards as rank numbers and actions as text tokens.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerObservation {
    /// The viewer's own hand.
    pub hand: Vec<Card>,

    /// Current pile targets.
    pub target: PileTargets,

    /// Cards not yet placed and not in the viewer's hand: other hands, then the deck.
    pub playable_cards: Vec<Card>,

    /// Everything placed so far, oldest first.
    pub played_cards: Vec<Card>,

    pub legal_actions: Vec<RoundAction>,
}
