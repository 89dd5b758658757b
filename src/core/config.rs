//! Round configuration.
//!
//! `GameConfig` carries the table-level knobs: seats, deck size, opening
//! hand size and seed. Everything else about a round is fixed by the rules.

use serde::{Deserialize, Serialize};

use super::error::{GameError, Result};

/// Standard deck: cards 2 through 99.
pub const DEFAULT_DECK_SIZE: u16 = 98;

/// Table configuration for a single round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of seats.
    pub player_count: usize,

    /// Number of playable cards. Ranks run 2..=deck_size+1; the pile
    /// sentinels are 1 and deck_size+2.
    pub deck_size: u16,

    /// Opening hand size. `None` uses the standard table by player count.
    #[serde(default)]
    pub hand_size: Option<usize>,

    /// Seed for the shuffle and the round's RNG branch.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_count: 2,
            deck_size: DEFAULT_DECK_SIZE,
            hand_size: None,
            seed: 42,
        }
    }
}

impl GameConfig {
    pub fn with_player_count(mut self, count: usize) -> Self {
        self.player_count = count;
        self
    }

    pub fn with_deck_size(mut self, size: u16) -> Self {
        self.deck_size = size;
        self
    }

    pub fn with_hand_size(mut self, size: usize) -> Self {
        self.hand_size = Some(size);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Opening hand size: explicit override, else 8 solo, 7 for two, 6 otherwise.
    #[must_use]
    pub fn effective_hand_size(&self) -> usize {
        self.hand_size.unwrap_or(match self.player_count {
            1 => 8,
            2 => 7,
            _ => 6,
        })
    }

    /// Reject configurations the round cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.player_count == 0 {
            return Err(GameError::InvalidConfig("player_count must be at least 1".into()));
        }
        if self.player_count > 255 {
            return Err(GameError::InvalidConfig("at most 255 players supported".into()));
        }
        if self.deck_size == 0 {
            return Err(GameError::InvalidConfig("deck_size must be at least 1".into()));
        }
        if self.deck_size > u16::MAX - 2 {
            return Err(GameError::InvalidConfig(format!(
                "deck_size {} leaves no room for the descending sentinel",
                self.deck_size
            )));
        }
        if self.hand_size == Some(0) {
            return Err(GameError::InvalidConfig("hand_size must be at least 1".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.player_count, 2);
        assert_eq!(config.deck_size, 98);
        assert_eq!(config.effective_hand_size(), 7);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_standard_hand_sizes() {
        let base = GameConfig::default();
        assert_eq!(base.clone().with_player_count(1).effective_hand_size(), 8);
        assert_eq!(base.clone().with_player_count(2).effective_hand_size(), 7);
        assert_eq!(base.clone().with_player_count(3).effective_hand_size(), 6);
        assert_eq!(base.clone().with_player_count(5).effective_hand_size(), 6);
        assert_eq!(base.with_hand_size(3).effective_hand_size(), 3);
    }

    #[test]
    fn test_validate_rejects() {
        let zero_players = GameConfig::default().with_player_count(0);
        assert!(matches!(zero_players.validate(), Err(GameError::InvalidConfig(_))));

        let too_many = GameConfig::default().with_player_count(256);
        assert!(matches!(too_many.validate(), Err(GameError::InvalidConfig(_))));

        let empty_deck = GameConfig::default().with_deck_size(0);
        assert!(matches!(empty_deck.validate(), Err(GameError::InvalidConfig(_))));

        let no_hand = GameConfig::default().with_hand_size(0);
        assert!(matches!(no_hand.validate(), Err(GameError::InvalidConfig(_))));
    }

    #[test]
    fn test_serialization() {
        let config = GameConfig::default().with_seed(9).with_player_count(4);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_hand_size_defaults_when_missing() {
        let json = r#"{"player_count":3,"deck_size":50,"seed":1}"#;
        let config: GameConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.hand_size, None);
        assert_eq!(config.effective_hand_size(), 6);
    }
}
