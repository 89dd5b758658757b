//! # the-game
//!
//! Round engine for The Game, a cooperative climbing-card game, built for
//! RL training.
//!
//! Players share four piles: two climb from 1, two fall from deck_size+2.
//! A card fits a pile if it continues the pile's direction, or if it is
//! exactly ten away from the current top in either direction. Each turn a
//! player must place at least two cards (one once the deck is empty) and
//! then draws back up. The table wins by placing every card; it loses the
//! moment a player with cards cannot make a required play.
//!
//! ## Design Principles
//!
//! 1. **Explicit ownership**: `Dealer` owns the deck, each `Player` owns its
//!    hand, `RoundState` owns only piles, counters and flags.
//!
//! 2. **Pure queries**: Computing legal actions never changes state. The
//!    stuck-player loss is its own transition, `RoundState::check_stuck`.
//!
//! 3. **Deterministic**: One seed fixes the shuffle and the round's RNG branch.
//!
//! ## Modules
//!
//! - `core`: Player IDs and hands, RNG, configuration, errors
//! - `cards`: Cards and the dealer
//! - `rules`: Pile placement predicate and round outcomes
//! - `round`: Piles, action tokens, the round state machine, observations
//! - `game`: A dealt single round that validates each step
//! - `nn`: Tensor encoding of observations and the dense action space

pub mod core;
pub mod cards;
pub mod rules;
pub mod round;
pub mod game;
pub mod nn;

// Re-export commonly used types
pub use crate::core::{GameConfig, GameError, GameRng, Hand, Player, PlayerId, Result};

pub use crate::cards::{Card, Dealer};

pub use crate::rules::{PileKind, RoundOutcome};

pub use crate::round::{PileId, PileTargets, PlayerObservation, RoundAction, RoundState};

pub use crate::game::{TheGame, TheGameBuilder};

pub use crate::nn::{EncodedState, ObservationEncoder, StateEncoder};
