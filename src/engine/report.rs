//! What successful operations hand back to the caller.

use crate::combat::Clash;
use crate::core::{ActionError, EntityId};
use crate::passives::PassiveEvents;

use super::game::GameResult;

/// Which branch a consumed strategy card took.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StrategyResolution {
    HealthBoost(i64),
    AttackBoost(i64),
    /// The card carried an effect a strategy cannot resolve. It is still
    /// consumed.
    NoEffect,
}

/// Result of one turn advance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnReport {
    /// Turn counter after the advance.
    pub turn: u32,
    /// Heroes removed by enemy passives.
    pub passives: PassiveEvents,
    /// Cards actually drawn (fewer than configured once the deck runs out).
    pub drawn: usize,
    /// Set when the advance ended the game.
    pub outcome: Option<GameResult>,
}

/// What happened to the turn after an attack.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnAdvance {
    Advanced(TurnReport),
    /// The attack resolved but the turn could not advance (hand limit).
    Blocked(ActionError),
    /// The attack itself ended the game.
    GameOver,
}

/// Result of a resolved attack.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttackReport {
    pub hero: EntityId,
    pub enemy: EntityId,
    pub clash: Clash,
    pub enemy_defeated: bool,
    pub hero_defeated: bool,
    /// Set when the attack itself won or lost the game.
    pub outcome: Option<GameResult>,
    pub turn: TurnAdvance,
}

impl AttackReport {
    /// The turn report, if the attack advanced the turn.
    #[must_use]
    pub fn advanced(&self) -> Option<&TurnReport> {
        match &self.turn {
            TurnAdvance::Advanced(report) => Some(report),
            _ => None,
        }
    }
}
