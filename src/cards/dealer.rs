//! The dealer: sole custodian of the draw pile.
//!
//! The deck is a plain `Vec` with the top at the end. Nothing outside the
//! dealer mutates it; the round only asks for deals and reads the remainder.

use tracing::trace;

use super::card::Card;
use crate::core::player::Player;
use crate::core::rng::GameRng;

/// Owns and deals from the shared draw pile.
#[derive(Clone, Debug)]
pub struct Dealer {
    deck: Vec<Card>,
    rng: GameRng,
}

impl Dealer {
    /// Build a full deck of ranks 2..=deck_size+1 and shuffle it.
    #[must_use]
    pub fn new(deck_size: u16, rng: GameRng) -> Self {
        let deck = (2..deck_size + 2).map(Card::new).collect();
        let mut dealer = Self { deck, rng };
        dealer.shuffle();
        dealer
    }

    /// Use a fixed deck, top card last. Nothing is shuffled.
    #[must_use]
    pub fn with_deck(deck: Vec<Card>) -> Self {
        Self {
            deck,
            rng: GameRng::new(0),
        }
    }

    /// Reshuffle the remaining deck.
    pub fn shuffle(&mut self) {
        self.rng.shuffle(&mut self.deck);
    }

    /// Move up to `num` cards from the top of the deck into the player's hand.
    ///
    /// Deals fewer when the deck runs out. Returns how many were dealt.
    pub fn deal_cards(&mut self, player: &mut Player, num: usize) -> usize {
        let mut dealt = 0;
        while dealt < num {
            let Some(card) = self.deck.pop() else {
                break;
            };
            player.hand.push(card);
            dealt += 1;
        }
        trace!(player = %player.id, requested = num, dealt, remaining = self.deck.len(), "cards dealt");
        dealt
    }

    /// Cards still in the draw pile, top last.
    #[must_use]
    pub fn deck(&self) -> &[Card] {
        &self.deck
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.deck.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.deck.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::player::PlayerId;

    #[test]
    fn test_full_deck() {
        let dealer = Dealer::new(98, GameRng::new(42));
        assert_eq!(dealer.remaining(), 98);

        let mut ranks: Vec<u16> = dealer.deck().iter().map(|c| c.rank()).collect();
        ranks.sort_unstable();
        assert_eq!(ranks, (2..=99).collect::<Vec<_>>());
    }

    #[test]
    fn test_shuffle_is_seeded() {
        let a = Dealer::new(98, GameRng::new(5));
        let b = Dealer::new(98, GameRng::new(5));
        let c = Dealer::new(98, GameRng::new(6));

        assert_eq!(a.deck(), b.deck());
        assert_ne!(a.deck(), c.deck());
    }

    #[test]
    fn test_deal_from_top() {
        let mut dealer = Dealer::with_deck(vec![Card::new(2), Card::new(3), Card::new(4)]);
        let mut player = Player::new(PlayerId::new(0));

        assert_eq!(dealer.deal_cards(&mut player, 2), 2);
        assert_eq!(player.hand.as_slice(), &[Card::new(4), Card::new(3)]);
        assert_eq!(dealer.deck(), &[Card::new(2)]);
    }

    #[test]
    fn test_deal_underflow() {
        let mut dealer = Dealer::with_deck(vec![Card::new(9)]);
        let mut player = Player::new(PlayerId::new(1));

        assert_eq!(dealer.deal_cards(&mut player, 3), 1);
        assert!(dealer.is_empty());
        assert_eq!(dealer.deal_cards(&mut player, 3), 0);
        assert_eq!(player.hand.len(), 1);
    }

    #[test]
    fn test_deal_zero() {
        let mut dealer = Dealer::with_deck(vec![Card::new(9)]);
        let mut player = Player::new(PlayerId::new(0));

        assert_eq!(dealer.deal_cards(&mut player, 0), 0);
        assert_eq!(dealer.remaining(), 1);
    }
}
