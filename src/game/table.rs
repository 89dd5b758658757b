//! A dealt table: dealer, seats and one round, wired together.

use tracing::info;

use crate::cards::Dealer;
use crate::core::{GameConfig, GameError, GameRng, Player, PlayerId, Result};
use crate::round::{PlayerObservation, RoundAction, RoundState};
use crate::rules::RoundOutcome;

/// One round of The Game with its collaborators.
///
/// Unlike `RoundState`, `step` validates every action against the legal set
/// and runs the stuck check for whoever is to act next.
#[derive(Clone, Debug)]
pub struct TheGame {
    config: GameConfig,
    dealer: Dealer,
    players: Vec<Player>,
    round: RoundState,
}

/// Builder for a dealt `TheGame`.
#[derive(Clone, Debug, Default)]
pub struct TheGameBuilder {
    config: GameConfig,
}

impl TheGameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration. Its seed is replaced by `build`'s.
    pub fn from_config(config: GameConfig) -> Self {
        Self { config }
    }

    pub fn player_count(mut self, count: usize) -> Self {
        self.config.player_count = count;
        self
    }

    pub fn deck_size(mut self, size: u16) -> Self {
        self.config.deck_size = size;
        self
    }

    pub fn hand_size(mut self, size: usize) -> Self {
        self.config.hand_size = Some(size);
        self
    }

    /// Shuffle, deal opening hands in seat order, and open the round.
    pub fn build(self, seed: u64) -> Result<TheGame> {
        let config = self.config.with_seed(seed);
        config.validate()?;

        let mut rng = GameRng::new(seed);
        let mut dealer = Dealer::new(config.deck_size, rng.for_context("shuffle"));
        let mut players = Player::roster(config.player_count);

        let hand_size = config.effective_hand_size();
        for player in &mut players {
            dealer.deal_cards(player, hand_size);
        }

        let mut round = RoundState::new(config.player_count, rng.fork(), config.deck_size);
        round.check_stuck(&players, round.current_player())?;

        info!(
            seed,
            players = config.player_count,
            deck_size = config.deck_size,
            hand_size,
            "round dealt"
        );

        Ok(TheGame {
            config,
            dealer,
            players,
            round,
        })
    }
}

impl TheGame {
    /// Build with default table settings.
    pub fn new(seed: u64) -> Result<Self> {
        TheGameBuilder::new().build(seed)
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn round(&self) -> &RoundState {
        &self.round
    }

    #[must_use]
    pub fn dealer(&self) -> &Dealer {
        &self.dealer
    }

    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.round.current_player()
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.round.is_over()
    }

    /// Legal actions for the seat to act.
    pub fn legal_actions(&self) -> Result<Vec<RoundAction>> {
        self.round.legal_actions(&self.players, self.current_player())
    }

    /// Apply `action` for the seat to act.
    ///
    /// Rejects a finished round and any action outside the legal set. After
    /// the action, checks whether the next seat to act is stuck.
    pub fn step(&mut self, action: RoundAction) -> Result<()> {
        if self.round.is_over() {
            return Err(GameError::RoundOver);
        }
        let player = self.current_player();
        if !self.round.legal_actions(&self.players, player)?.contains(&action) {
            return Err(GameError::IllegalAction {
                player,
                action: action.to_string(),
            });
        }

        self.round.proceed(&mut self.dealer, &mut self.players, action)?;

        if !self.round.is_over() {
            let next = self.current_player();
            self.round.check_stuck(&self.players, next)?;
        }
        Ok(())
    }

    /// Parse a text token and `step` with it.
    pub fn step_token(&mut self, token: &str) -> Result<()> {
        self.step(token.parse()?)
    }

    /// Observation for `player`.
    ///
    /// Runs the stuck check for that player first, so asking for the state of
    /// a player with no way forward ends the round.
    pub fn state(&mut self, player: PlayerId) -> Result<PlayerObservation> {
        self.round.check_stuck(&self.players, player)?;
        self.round.observe(&self.dealer, &self.players, player)
    }

    /// Undealt cards that fit at least one pile.
    #[must_use]
    pub fn playable_cards(&self) -> usize {
        self.round.count_playable(&self.dealer)
    }

    /// Cards not yet placed: deck plus every hand.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.dealer.remaining() + self.players.iter().map(|p| p.hand.len()).sum::<usize>()
    }

    /// How the round ended, or `None` while it is running.
    #[must_use]
    pub fn outcome(&self) -> Option<RoundOutcome> {
        if !self.round.is_over() {
            return None;
        }
        Some(if self.round.is_won() {
            RoundOutcome::Won
        } else {
            RoundOutcome::Lost {
                cards_remaining: self.cards_remaining(),
            }
        })
    }

    /// Shared reward for every seat: 1.0 for a win, otherwise minus the
    /// fraction of the deck still unplaced.
    #[must_use]
    pub fn payoffs(&self) -> Vec<f32> {
        let payoff = if self.round.is_won() {
            1.0
        } else {
            -(self.cards_remaining() as f32 / f32::from(self.config.deck_size))
        };
        vec![payoff; self.players.len()]
    }
}
