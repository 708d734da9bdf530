//! Error types.
//!
//! Rejected actions are never fatal: every [`ActionError`] leaves the game
//! exactly as it was, and its `Display` text doubles as the action-log
//! message shown to the player.

use thiserror::Error;

use crate::cards::CardCategory;
use crate::engine::GameStatus;

/// Why an action was refused.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ActionError {
    /// The hand slot is empty or holds the wrong kind of card.
    #[error("The card at hand position {index} is not a usable {expected} card.")]
    InvalidCard { index: usize, expected: CardCategory },

    #[error("Player zone is full! ({capacity} heroes deployed)")]
    ZoneFull { capacity: usize },

    #[error("No hero to attack with at position {index}.")]
    NoHero { index: usize },

    #[error("No enemy to attack at position {index}.")]
    NoEnemy { index: usize },

    #[error("Not enough energy to attack!")]
    NoEnergy,

    /// Turn advancement is blocked until the hand is played down.
    #[error("You cannot proceed to the next turn with {held} cards in hand (limit {limit}).")]
    TooManyCards { held: usize, limit: usize },

    #[error("The game is not in progress ({0}).")]
    NotInProgress(GameStatus),
}

/// Invalid or unreadable rules configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// A game snapshot could not be encoded or decoded.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot codec error: {0}")]
    Codec(#[from] bincode::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_error_messages() {
        assert_eq!(ActionError::NoEnergy.to_string(), "Not enough energy to attack!");
        assert_eq!(
            ActionError::ZoneFull { capacity: 3 }.to_string(),
            "Player zone is full! (3 heroes deployed)"
        );
        assert_eq!(
            ActionError::InvalidCard { index: 2, expected: CardCategory::Energy }.to_string(),
            "The card at hand position 2 is not a usable energy card."
        );
        assert_eq!(
            ActionError::NotInProgress(GameStatus::Won).to_string(),
            "The game is not in progress (won)."
        );
    }

    #[test]
    fn test_config_error_from_json() {
        let err: ConfigError = serde_json::from_str::<u32>("not json").unwrap_err().into();
        assert!(err.to_string().starts_with("config parse error"));
    }
}
