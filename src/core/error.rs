//! Error types for the round engine.
//!
//! Only contract violations are errors. A lost or won round is ordinary
//! state, observed through `RoundState::is_over` / `RoundState::is_won`.

use thiserror::Error;

use super::player::PlayerId;

/// Errors surfaced at the engine boundary.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// The token could not be parsed, or names a rank the acting hand does not hold.
    #[error("invalid action: {0}")]
    InvalidAction(String),

    /// The token is well-formed but not in the player's legal set.
    #[error("illegal action for {player}: {action}")]
    IllegalAction { player: PlayerId, action: String },

    /// The player index is outside the roster.
    #[error("player not found: {0}")]
    PlayerNotFound(PlayerId),

    /// The round already ended; it must not be driven further.
    #[error("round is over")]
    RoundOver,

    /// Rejected configuration.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GameError>;
