//! Round state machine.
//!
//! ## What it owns
//!
//! - Pile targets, seat to act, turn direction
//! - Plays made this turn and the minimum required before drawing
//! - The append-only log of played cards
//! - The two terminal flags
//!
//! ## What it borrows
//!
//! The deck (through `Dealer`) and the hands (through `Player`) are passed
//! into each call. The round only touches them via `Dealer::deal_cards`,
//! `Hand::index_of` and `Hand::remove`.
//!
//! ## Legality vs. the stuck check
//!
//! `legal_actions` is pure. Losing because a player cannot move is a separate
//! transition, `check_stuck`, which the caller runs when a player is about to
//! act. Both are safe to call any number of times.
//!
//! Legality is NOT re-checked by `proceed`: the caller owns that contract.

use im::Vector;
use tracing::{debug, info, trace};

use super::action::RoundAction;
use super::observation::PlayerObservation;
use super::pile::{PileId, PileTargets};
use crate::cards::{Card, Dealer};
use crate::core::config::DEFAULT_DECK_SIZE;
use crate::core::error::{GameError, Result};
use crate::core::player::{Player, PlayerId};
use crate::core::rng::GameRng;

/// Plays required per turn while the deck still has cards.
pub const MIN_MOVES_WITH_DECK: usize = 2;

/// Plays required per turn once the deck is exhausted.
pub const MIN_MOVES_EMPTY_DECK: usize = 1;

/// State of one round of The Game.
///
/// Cloning is cheap: the played-card log is an `im::Vector`.
#[derive(Clone, Debug)]
pub struct RoundState {
    num_players: usize,
    deck_size: u16,
    targets: PileTargets,
    current_player: PlayerId,
    /// Seat step per turn. Always +1 today; kept signed so reversal is additive.
    direction: i8,
    played_cards: Vector<Card>,
    is_over: bool,
    is_won: bool,
    cards_played_this_turn: usize,
    min_move_size: usize,
    /// Not consumed by the current rules.
    rng: GameRng,
}

impl RoundState {
    /// Create a fresh round with all piles at their sentinels.
    ///
    /// Panics if `num_players` is 0 or above 255.
    #[must_use]
    pub fn new(num_players: usize, rng: GameRng, deck_size: u16) -> Self {
        assert!(num_players > 0, "Must have at least 1 player");
        assert!(num_players <= 255, "At most 255 players supported");

        Self {
            num_players,
            deck_size,
            targets: PileTargets::new(deck_size),
            current_player: PlayerId::new(0),
            direction: 1,
            played_cards: Vector::new(),
            is_over: false,
            is_won: false,
            cards_played_this_turn: 0,
            min_move_size: MIN_MOVES_WITH_DECK,
            rng,
        }
    }

    /// Create a fresh round over the standard 98-card deck.
    #[must_use]
    pub fn with_standard_deck(num_players: usize, rng: GameRng) -> Self {
        Self::new(num_players, rng, DEFAULT_DECK_SIZE)
    }

    // === Accessors ===

    #[must_use]
    pub fn num_players(&self) -> usize {
        self.num_players
    }

    #[must_use]
    pub fn deck_size(&self) -> u16 {
        self.deck_size
    }

    #[must_use]
    pub fn targets(&self) -> &PileTargets {
        &self.targets
    }

    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    #[must_use]
    pub fn direction(&self) -> i8 {
        self.direction
    }

    /// Every card played this round, oldest first.
    #[must_use]
    pub fn played_cards(&self) -> &Vector<Card> {
        &self.played_cards
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.is_over
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.is_won
    }

    #[must_use]
    pub fn cards_played_this_turn(&self) -> usize {
        self.cards_played_this_turn
    }

    #[must_use]
    pub fn min_move_size(&self) -> usize {
        self.min_move_size
    }

    /// The round's RNG branch, for rule extensions that need one.
    pub fn rng_mut(&mut self) -> &mut GameRng {
        &mut self.rng
    }

    // === Transitions ===

    /// Apply one action for the current player.
    ///
    /// A play moves the card from the hand onto the pile and keeps the turn.
    /// `Draw` refills the hand by the number of cards played, lowers the
    /// minimum once the deck is gone, detects a clean sweep, and passes the turn.
    ///
    /// The action is assumed legal. Errors only when the seat is missing from
    /// `players`, the rank is not in the hand, or the round is already over.
    pub fn proceed(
        &mut self,
        dealer: &mut Dealer,
        players: &mut [Player],
        action: RoundAction,
    ) -> Result<()> {
        if self.is_over {
            return Err(GameError::RoundOver);
        }
        let seat = self.current_player;
        let player = players
            .get_mut(seat.index())
            .ok_or(GameError::PlayerNotFound(seat))?;

        match action {
            RoundAction::Draw => {
                let dealt = dealer.deal_cards(player, self.cards_played_this_turn);
                debug!(
                    player = %seat,
                    played = self.cards_played_this_turn,
                    dealt,
                    deck_remaining = dealer.remaining(),
                    "turn ended"
                );
                self.cards_played_this_turn = 0;

                if dealer.is_empty() {
                    self.on_deck_empty(players);
                }
                self.advance_seat();
            }
            RoundAction::Play { pile, card } => {
                let index = player.hand.index_of(card).ok_or_else(|| {
                    GameError::InvalidAction(format!("{seat} does not hold {card}"))
                })?;
                let card = player.hand.remove(index);

                self.played_cards.push_back(card);
                self.cards_played_this_turn += 1;
                let previous = self.targets[pile];
                self.targets[pile] = card;

                debug!(
                    player = %seat,
                    %pile,
                    %card,
                    %previous,
                    plays_this_turn = self.cards_played_this_turn,
                    "card played"
                );
            }
        }
        Ok(())
    }

    fn on_deck_empty(&mut self, players: &[Player]) {
        if self.min_move_size != MIN_MOVES_EMPTY_DECK {
            info!(
                from = self.min_move_size,
                to = MIN_MOVES_EMPTY_DECK,
                "deck exhausted, minimum plays per turn lowered"
            );
            self.min_move_size = MIN_MOVES_EMPTY_DECK;
        }

        if players.iter().all(|p| p.hand.is_empty()) {
            self.is_over = true;
            self.is_won = true;
            info!(played = self.played_cards.len(), "round won, every card placed");
        }
    }

    fn advance_seat(&mut self) {
        let next = (self.current_player.index() as i64 + i64::from(self.direction))
            .rem_euclid(self.num_players as i64);
        self.current_player = PlayerId::new(next as u8);
    }

    /// Declare the round lost if `player` holds cards, has no placement, and
    /// has not yet met the minimum this turn.
    ///
    /// Returns whether the player is stuck. Repeat calls do not re-flip or re-log.
    pub fn check_stuck(&mut self, players: &[Player], player: PlayerId) -> Result<bool> {
        let hand = &Self::seat(players, player)?.hand;

        let stuck = !hand.is_empty()
            && self.cards_played_this_turn < self.min_move_size
            && !hand.iter().any(|&card| self.targets.accepting(card).next().is_some());

        if stuck && !self.is_over {
            self.is_over = true;
            info!(
                player = %player,
                hand = hand.len(),
                played_this_turn = self.cards_played_this_turn,
                required = self.min_move_size,
                "round lost, player has no legal play"
            );
        }
        Ok(stuck)
    }

    // === Queries ===

    /// Legal actions for `player`, in hand order then pile order, `Draw` last.
    ///
    /// A card that fits several piles yields one action per pile. `Draw` is
    /// offered once the minimum has been met this turn, or when the hand is empty.
    pub fn legal_actions(&self, players: &[Player], player: PlayerId) -> Result<Vec<RoundAction>> {
        let hand = &Self::seat(players, player)?.hand;

        let targets = &self.targets;
        let mut actions: Vec<RoundAction> = hand
            .iter()
            .flat_map(|&card| {
                targets
                    .accepting(card)
                    .map(move |pile| RoundAction::play(pile, card))
            })
            .collect();

        if self.cards_played_this_turn >= self.min_move_size || hand.is_empty() {
            actions.push(RoundAction::Draw);
        }

        trace!(player = %player, count = actions.len(), "legal actions computed");
        Ok(actions)
    }

    /// How many undealt cards fit at least one pile right now.
    ///
    /// Each card counts once, whichever pile (checked a1, a2, d1, d2) takes it first.
    #[must_use]
    pub fn count_playable(&self, dealer: &Dealer) -> usize {
        dealer
            .deck()
            .iter()
            .filter(|&&card| PileId::ALL.iter().any(|&pile| self.targets.accepts(pile, card)))
            .count()
    }

    /// Snapshot what `player` can see.
    ///
    /// The playable surface is every other seat's hand plus the deck; the
    /// viewer's own seat is skipped, so equal ranks elsewhere still show.
    pub fn observe(
        &self,
        dealer: &Dealer,
        players: &[Player],
        player: PlayerId,
    ) -> Result<PlayerObservation> {
        let me = Self::seat(players, player)?;

        let playable_cards = players
            .iter()
            .enumerate()
            .filter(|&(index, _)| index != player.index())
            .flat_map(|(_, other)| other.hand.iter().copied())
            .chain(dealer.deck().iter().copied())
            .collect();

        Ok(PlayerObservation {
            hand: me.hand.as_slice().to_vec(),
            target: self.targets,
            playable_cards,
            played_cards: self.played_cards.iter().copied().collect(),
            legal_actions: self.legal_actions(players, player)?,
        })
    }

    fn seat(players: &[Player], player: PlayerId) -> Result<&Player> {
        players
            .get(player.index())
            .ok_or(GameError::PlayerNotFound(player))
    }
}
