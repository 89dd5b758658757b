//! Observation encoding for neural network input.
//!
//! Transforms a `PlayerObservation` into rank planes, and maps action tokens
//! onto a dense action space.

use crate::cards::Card;
use crate::nn::tensor::EncodedState;
use crate::round::{PileId, PlayerObservation, RoundAction};

/// Encodes observations into tensors for neural network input.
///
/// Each encoder defines:
/// - How to convert an observation to a tensor
/// - The shape of the output tensor
/// - The size of the action space
pub trait StateEncoder: Send + Sync {
    /// Encode a player's observation.
    fn encode(&self, observation: &PlayerObservation) -> EncodedState;

    /// Get the shape of encoded states.
    fn output_shape(&self) -> Vec<usize>;

    /// Get the total number of possible actions.
    fn action_space_size(&self) -> usize;
}

/// Four rank planes, one cell per rank 1..=deck_size+2.
///
/// - Plane 0: the viewer's hand
/// - Plane 1: pile targets (two piles on the same rank give 2.0)
/// - Plane 2: playable surface (other hands and the deck)
/// - Plane 3: played cards
///
/// Action ids: `draw` is 0, `<pile>-<rank>` is
/// `1 + pile_index * width + (rank - 1)`.
#[derive(Clone, Debug)]
pub struct ObservationEncoder {
    width: usize,
}

const PLANES: usize = 4;

impl ObservationEncoder {
    /// Create an encoder for a deck of `deck_size` playable cards.
    pub fn new(deck_size: u16) -> Self {
        Self {
            width: usize::from(deck_size) + 2,
        }
    }

    /// Cells per plane.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    fn cell(&self, card: Card) -> Option<usize> {
        let rank = usize::from(card.rank());
        (1..=self.width).contains(&rank).then(|| rank - 1)
    }

    fn fill(&self, encoded: &mut EncodedState, plane: usize, cards: &[Card]) {
        for &card in cards {
            if let Some(cell) = self.cell(card) {
                encoded.add(plane * self.width + cell, 1.0);
            }
        }
    }

    /// Dense id for `action`, or `None` when its rank is off the table.
    #[must_use]
    pub fn action_id(&self, action: &RoundAction) -> Option<usize> {
        match *action {
            RoundAction::Draw => Some(0),
            RoundAction::Play { pile, card } => self
                .cell(card)
                .map(|cell| 1 + pile.index() * self.width + cell),
        }
    }

    /// Inverse of `action_id`.
    #[must_use]
    pub fn action_from_id(&self, id: usize) -> Option<RoundAction> {
        if id == 0 {
            return Some(RoundAction::Draw);
        }
        if id >= self.action_space_size() {
            return None;
        }
        let offset = id - 1;
        let pile = PileId::ALL[offset / self.width];
        let rank = (offset % self.width + 1) as u16;
        Some(RoundAction::play(pile, Card::new(rank)))
    }

    /// One flag per action id, set for the observation's legal actions.
    #[must_use]
    pub fn legal_mask(&self, observation: &PlayerObservation) -> Vec<bool> {
        let mut mask = vec![false; self.action_space_size()];
        for id in observation
            .legal_actions
            .iter()
            .filter_map(|action| self.action_id(action))
        {
            mask[id] = true;
        }
        mask
    }
}

impl StateEncoder for ObservationEncoder {
    fn encode(&self, observation: &PlayerObservation) -> EncodedState {
        let mut encoded = EncodedState::zeros(self.output_shape());

        self.fill(&mut encoded, 0, &observation.hand);
        self.fill(&mut encoded, 1, &observation.target.as_array());
        self.fill(&mut encoded, 2, &observation.playable_cards);
        self.fill(&mut encoded, 3, &observation.played_cards);

        encoded
    }

    fn output_shape(&self) -> Vec<usize> {
        vec![PLANES, self.width]
    }

    fn action_space_size(&self) -> usize {
        1 + PileId::ALL.len() * self.width
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::round::PileTargets;

    fn observation() -> PlayerObservation {
        PlayerObservation {
            hand: vec![Card::new(11), Card::new(40)],
            target: PileTargets::new(98),
            playable_cards: vec![Card::new(2), Card::new(99)],
            played_cards: vec![],
            legal_actions: vec![
                RoundAction::play(PileId::A1, Card::new(11)),
                RoundAction::play(PileId::D2, Card::new(40)),
            ],
        }
    }

    #[test]
    fn test_shape_and_space() {
        let encoder = ObservationEncoder::new(98);
        assert_eq!(encoder.output_shape(), vec![4, 100]);
        assert_eq!(encoder.action_space_size(), 401);
    }

    #[test]
    fn test_encode_planes() {
        let encoder = ObservationEncoder::new(98);
        let encoded = encoder.encode(&observation());

        assert_eq!(encoded.len(), 400);
        assert_eq!(encoded.get(10), Some(1.0)); // hand: 11
        assert_eq!(encoded.get(39), Some(1.0)); // hand: 40
        assert_eq!(encoded.get(100), Some(2.0)); // targets: both ascending at 1
        assert_eq!(encoded.get(199), Some(2.0)); // targets: both descending at 100
        assert_eq!(encoded.get(201), Some(1.0)); // playable: 2
        assert_eq!(encoded.get(298), Some(1.0)); // playable: 99
        assert_eq!(encoded.tensor[300..].iter().sum::<f32>(), 0.0);
    }

    #[test]
    fn test_action_ids() {
        let encoder = ObservationEncoder::new(98);

        assert_eq!(encoder.action_id(&RoundAction::Draw), Some(0));
        assert_eq!(
            encoder.action_id(&RoundAction::play(PileId::A1, Card::new(1))),
            Some(1)
        );
        assert_eq!(
            encoder.action_id(&RoundAction::play(PileId::D2, Card::new(100))),
            Some(400)
        );
        assert_eq!(
            encoder.action_id(&RoundAction::play(PileId::A1, Card::new(101))),
            None
        );

        for id in [0, 1, 57, 233, 400] {
            let action = encoder.action_from_id(id).unwrap();
            assert_eq!(encoder.action_id(&action), Some(id));
        }
        assert_eq!(encoder.action_from_id(401), None);
    }

    #[test]
    fn test_legal_mask() {
        let encoder = ObservationEncoder::new(98);
        let mask = encoder.legal_mask(&observation());

        let set: Vec<usize> = mask
            .iter()
            .enumerate()
            .filter(|(_, &legal)| legal)
            .map(|(id, _)| id)
            .collect();
        assert_eq!(set, vec![11, 1 + 3 * 100 + 39]);
    }
}
