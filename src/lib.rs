//! # kingdoms-ccg
//!
//! A single-player card battler engine set in the Three Kingdoms era.
//!
//! The player deploys heroes, spends energy, plays stratagems for boosts and
//! attacks an enemy lineup, with a fixed turn limit. The crate owns every
//! rule and all state; presentation is the host's job.
//!
//! ## Design Principles
//!
//! 1. **No globals**: the host constructs a [`BattleEngine`] and passes each
//!    [`Game`] in explicitly.
//!
//! 2. **Rules as data**: successive versions of the game are presets of one
//!    [`RulesConfig`] (`RulesConfig::classic()` and the default).
//!
//! 3. **Deterministic**: all randomness flows through a seeded
//!    [`GameRng`], so a seed and an action sequence replay exactly.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: zones are `im` vectors, so cloning a
//!   game for a render snapshot is O(1).
//!
//! - **Seams**: [`RandomSource`], [`RenderSink`], [`ActionLog`] and
//!   [`PassiveHook`] are the only points where the host plugs in.
//!
//! ## Modules
//!
//! - `core`: entity ids, RNG, rules configuration, errors
//! - `cards`: categories, effects, definitions, instances, deck templates
//! - `zones`: ordered, optionally bounded card zones
//! - `combat`: strike and clash formulas
//! - `passives`: per-turn enemy passives
//! - `engine`: the game aggregate and its operations
//!
//! ## Usage
//!
//! ```
//! use kingdoms_ccg::{BattleEngine, CardCategory, Game, RulesConfig};
//!
//! let mut engine = BattleEngine::new(RulesConfig::default()).unwrap();
//! let mut game = Game::new(2024);
//! engine.initialize(&mut game);
//!
//! let first_hero = |game: &Game| {
//!     game.hand()
//!         .iter()
//!         .position(|card| game.registry().category(card.card_id) == Some(CardCategory::Hero))
//! };
//!
//! // Play whatever heroes the opening hand holds.
//! while let Some(index) = first_hero(&game) {
//!     engine.play_hero(&mut game, index).unwrap();
//! }
//! assert!(game.player_zone().len() <= 3);
//! ```

pub mod core;
pub mod cards;
pub mod zones;
pub mod combat;
pub mod passives;
pub mod engine;

// Re-export commonly used types
pub use crate::core::{
    EntityId,
    GameRng, GameRngState, RandomSource,
    CombatFormula, DeckTemplate, LuckFactor, PassiveMode, RulesConfig,
    ActionError, ConfigError, SnapshotError,
};

pub use crate::cards::{
    CardId, CardCategory, CardDefinition, CardEffect, CardInstance, CardRegistry, DeckEntry,
};

pub use crate::zones::{Zone, ZoneKind};

pub use crate::combat::{BoostPool, Clash, ClashOutcome};

pub use crate::passives::{BurnEachTurn, BurnOnCooldown, InertPassives, PassiveEvent, PassiveHook};

pub use crate::engine::{
    ActionLog, AttackReport, BattleEngine, Game, GameResult, GameStatus, NullLog, NullRender,
    Outcome, RenderSink, StrategyResolution, TurnAdvance, TurnReport,
};
