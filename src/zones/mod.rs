//! Zone system for card locations.
//!
//! ## Key Types
//!
//! - `Zone`: ordered, optionally bounded card sequence
//! - `ZoneKind`: names the five zones a game owns

pub mod zone;

pub use zone::Zone;

use serde::{Deserialize, Serialize};

/// The zones owned by one game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZoneKind {
    PlayerDeck,
    EnemyDeck,
    Hand,
    /// Deployed heroes, bounded by `RulesConfig::zone_capacity`.
    PlayerZone,
    /// Deployed enemies.
    EnemyZone,
}

impl std::fmt::Display for ZoneKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::PlayerDeck => "player deck",
            Self::EnemyDeck => "enemy deck",
            Self::Hand => "hand",
            Self::PlayerZone => "player zone",
            Self::EnemyZone => "enemy zone",
        };
        f.write_str(name)
    }
}
