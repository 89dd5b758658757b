//! Player identification and hand custody.
//!
//! ## PlayerId
//!
//! Type-safe seat index supporting 1-255 players.
//!
//! ## Player / Hand
//!
//! Each `Player` owns its `Hand`. The round never splices hand storage
//! directly; it goes through `Hand::index_of` and `Hand::remove`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::Card;

/// Seat identifier supporting 1-255 players.
///
/// Seat indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a round with `player_count` players.
    ///
    /// ```
    /// use the_game::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(players.len(), 3);
    /// assert_eq!(players[2], PlayerId::new(2));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Cards held by one player.
///
/// Backed by a `SmallVec`: standard hand sizes (6-8) never touch the heap.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: SmallVec<[Card; 8]>,
}

impl Hand {
    /// Create an empty hand.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a hand holding the given cards, in order.
    #[must_use]
    pub fn from_cards(cards: &[Card]) -> Self {
        Self {
            cards: SmallVec::from_slice(cards),
        }
    }

    /// Position of the first card with this rank.
    #[must_use]
    pub fn index_of(&self, rank: Card) -> Option<usize> {
        self.cards.iter().position(|&c| c == rank)
    }

    /// Remove and return the card at `index`.
    ///
    /// Panics if `index` is out of bounds; pair with `index_of`.
    pub fn remove(&mut self, index: usize) -> Card {
        self.cards.remove(index)
    }

    /// Add a card to the end of the hand.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards as a plain slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }
}

/// A seat at the table and the hand it owns.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub hand: Hand,
}

impl Player {
    /// Create a player with an empty hand.
    #[must_use]
    pub fn new(id: PlayerId) -> Self {
        Self {
            id,
            hand: Hand::new(),
        }
    }

    /// Create a player holding the given cards.
    #[must_use]
    pub fn with_hand(id: PlayerId, cards: &[Card]) -> Self {
        Self {
            id,
            hand: Hand::from_cards(cards),
        }
    }

    /// Create a roster of `player_count` empty-handed players.
    #[must_use]
    pub fn roster(player_count: usize) -> Vec<Player> {
        PlayerId::all(player_count).map(Player::new).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);

        assert_eq!(p0.index(), 0);
        assert_eq!(p1.index(), 1);
        assert_eq!(format!("{}", p0), "Player 0");
    }

    #[test]
    fn test_player_id_all() {
        let players: Vec<_> = PlayerId::all(4).collect();
        assert_eq!(players.len(), 4);
        assert_eq!(players[0], PlayerId::new(0));
        assert_eq!(players[3], PlayerId::new(3));
    }

    #[test]
    fn test_hand_index_and_remove() {
        let mut hand = Hand::from_cards(&[Card::new(12), Card::new(40), Card::new(77)]);

        assert_eq!(hand.index_of(Card::new(40)), Some(1));
        assert_eq!(hand.index_of(Card::new(41)), None);

        let removed = hand.remove(1);
        assert_eq!(removed, Card::new(40));
        assert_eq!(hand.as_slice(), &[Card::new(12), Card::new(77)]);
        assert_eq!(hand.len(), 2);
    }

    #[test]
    fn test_hand_push_and_empty() {
        let mut hand = Hand::new();
        assert!(hand.is_empty());

        hand.push(Card::new(5));
        assert!(!hand.is_empty());
        assert_eq!(hand.iter().copied().collect::<Vec<_>>(), vec![Card::new(5)]);
    }

    #[test]
    fn test_roster() {
        let roster = Player::roster(3);
        assert_eq!(roster.len(), 3);
        assert_eq!(roster[2].id, PlayerId::new(2));
        assert!(roster.iter().all(|p| p.hand.is_empty()));
    }

    #[test]
    fn test_player_serialization() {
        let player = Player::with_hand(PlayerId::new(1), &[Card::new(3), Card::new(30)]);
        let json = serde_json::to_string(&player).unwrap();
        let deserialized: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(player, deserialized);
    }
}
