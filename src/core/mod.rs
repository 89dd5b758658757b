//! Core building blocks: players and hands, RNG, configuration, errors.
//!
//! Nothing in here knows about piles or turns; see `round` for that.

pub mod player;
pub mod rng;
pub mod config;
pub mod error;

pub use player::{Hand, Player, PlayerId};
pub use rng::GameRng;
pub use config::{GameConfig, DEFAULT_DECK_SIZE};
pub use error::{GameError, Result};
