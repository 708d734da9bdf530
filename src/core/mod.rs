//! Core engine types: entities, RNG, rules configuration, errors.
//!
//! Nothing here knows about decks or turns; the `cards`, `zones` and
//! `engine` modules build on these pieces.

pub mod entity;
pub mod rng;
pub mod config;
pub mod error;

pub use entity::EntityId;
pub use rng::{fisher_yates, GameRng, GameRngState, RandomSource};
pub use config::{CombatFormula, DeckTemplate, LuckFactor, PassiveMode, RulesConfig};
pub use error::{ActionError, ConfigError, SnapshotError};
