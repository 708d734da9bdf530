//! Rules configuration.
//!
//! The game went through several iterations of the same engine. They
//! differ only in numbers and in which formula or passive rule is active, so
//! each iteration is a preset of one `RulesConfig`:
//!
//! - [`RulesConfig::classic`]: five-card opening hand, no hand limit,
//!   one-sided strikes, burning enemies
//! - [`RulesConfig::default`]: three-card opening hand, hand limit of three,
//!   clash combat with the luck factor, boost cards, inert passives
//!
//! Hosts can also load a config from JSON; missing fields fall back to the
//! default preset.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Deck composition used by every (re)initialization.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeckTemplate {
    /// Hero ranks `1..=hero_count`.
    pub hero_count: u32,
    /// Omit heroes whose rank formula leaves them with no attack.
    pub skip_powerless_heroes: bool,
    /// Strategy cards carrying a health boost.
    pub health_strategies: u32,
    /// Strategy cards carrying an attack boost, added after the health ones.
    pub attack_strategies: u32,
    pub health_boost: i64,
    pub attack_boost: i64,
    /// Printed attack of every strategy card.
    pub strategy_attack: i64,
    /// Printed health of every strategy card.
    pub strategy_health: i64,
    pub energy_count: u32,
    /// Enemy ranks `1..=enemy_count`.
    pub enemy_count: u32,
    /// Every rank divisible by this carries a burn effect.
    pub burn_interval: u32,
    pub burn_cooldown: u32,
}

impl Default for DeckTemplate {
    fn default() -> Self {
        Self {
            hero_count: 16,
            skip_powerless_heroes: true,
            health_strategies: 8,
            attack_strategies: 2,
            health_boost: 1,
            attack_boost: 1000,
            strategy_attack: 1,
            strategy_health: 2,
            energy_count: 16,
            enemy_count: 18,
            burn_interval: 3,
            burn_cooldown: 2,
        }
    }
}

impl DeckTemplate {
    /// The first iteration's deck: all sixteen heroes and eight plain
    /// health-boost stratagems with no printed stats.
    #[must_use]
    pub fn classic() -> Self {
        Self {
            skip_powerless_heroes: false,
            attack_strategies: 0,
            strategy_attack: 0,
            strategy_health: 0,
            ..Self::default()
        }
    }
}

/// Scales for the randomized luck term added to each side's attack.
///
/// Hero luck is `u * (hero.health * hero_health_scale + boosts.health *
/// hero_boost_scale)`, enemy luck is `u * enemy.health * enemy_health_scale`,
/// with a fresh `u` in `[0, 1)` per side.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LuckFactor {
    pub hero_health_scale: f64,
    pub hero_boost_scale: f64,
    pub enemy_health_scale: f64,
}

impl Default for LuckFactor {
    fn default() -> Self {
        Self {
            hero_health_scale: 1.0,
            hero_boost_scale: 100.0,
            enemy_health_scale: 100.0,
        }
    }
}

/// Which combat formula `attack_enemy` uses.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CombatFormula {
    /// The hero's effective attack comes straight off the enemy's health.
    Strike,
    /// Effective attacks are compared; the weaker side takes the stronger
    /// side's value, a tie hurts both.
    Clash {
        #[serde(default)]
        luck: Option<LuckFactor>,
    },
}

impl Default for CombatFormula {
    fn default() -> Self {
        Self::Clash {
            luck: Some(LuckFactor::default()),
        }
    }
}

/// Built-in behaviour for enemy passives at the start of each turn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PassiveMode {
    /// Passives are data only.
    #[default]
    Inert,
    /// Every burning enemy burns a hero every turn.
    BurnEachTurn,
    /// Every burning enemy burns a hero once per `cooldown` turns.
    BurnOnCooldown,
}

/// Complete rules configuration for a game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    pub initial_hand_size: usize,
    /// Turn advancement is refused while the hand holds this many cards.
    pub hand_limit: Option<usize>,
    /// Maximum heroes in the player zone.
    pub zone_capacity: usize,
    /// Enemies deployed from the enemy deck at game start.
    pub enemy_deployment: usize,
    pub cards_drawn_per_turn: usize,
    /// Turn from which an empty player side loses the game.
    pub turn_limit: u32,
    pub combat: CombatFormula,
    pub passives: PassiveMode,
    pub deck: DeckTemplate,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            initial_hand_size: 3,
            hand_limit: Some(3),
            zone_capacity: 3,
            enemy_deployment: 6,
            cards_drawn_per_turn: 2,
            turn_limit: 15,
            combat: CombatFormula::default(),
            passives: PassiveMode::Inert,
            deck: DeckTemplate::default(),
        }
    }
}

impl RulesConfig {
    /// The first iteration of the game.
    #[must_use]
    pub fn classic() -> Self {
        Self {
            initial_hand_size: 5,
            hand_limit: None,
            combat: CombatFormula::Strike,
            passives: PassiveMode::BurnEachTurn,
            deck: DeckTemplate::classic(),
            ..Self::default()
        }
    }

    /// Parse a JSON config and validate it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the invariants the engine relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.zone_capacity == 0 {
            return Err(ConfigError::Invalid("zone_capacity must be at least 1".into()));
        }
        if self.enemy_deployment as u64 > u64::from(self.deck.enemy_count) {
            return Err(ConfigError::Invalid(format!(
                "cannot deploy {} enemies from a deck of {}",
                self.enemy_deployment, self.deck.enemy_count
            )));
        }
        if self.deck.burn_interval == 0 {
            return Err(ConfigError::Invalid("burn_interval must be at least 1".into()));
        }
        if let CombatFormula::Clash { luck: Some(luck) } = self.combat {
            let scales = [luck.hero_health_scale, luck.hero_boost_scale, luck.enemy_health_scale];
            if scales.iter().any(|s| !s.is_finite() || *s < 0.0) {
                return Err(ConfigError::Invalid(
                    "luck scales must be finite and non-negative".into(),
                ));
            }
        }
        Ok(())
    }

    /// Set the opening hand size.
    #[must_use]
    pub fn with_initial_hand_size(mut self, size: usize) -> Self {
        self.initial_hand_size = size;
        self
    }

    /// Set or clear the hand limit.
    #[must_use]
    pub fn with_hand_limit(mut self, limit: Option<usize>) -> Self {
        self.hand_limit = limit;
        self
    }

    /// Set the combat formula.
    #[must_use]
    pub fn with_combat(mut self, combat: CombatFormula) -> Self {
        self.combat = combat;
        self
    }

    /// Set the built-in passive behaviour.
    #[must_use]
    pub fn with_passives(mut self, passives: PassiveMode) -> Self {
        self.passives = passives;
        self
    }

    /// Set the deck template.
    #[must_use]
    pub fn with_deck(mut self, deck: DeckTemplate) -> Self {
        self.deck = deck;
        self
    }

    /// Set the turn limit.
    #[must_use]
    pub fn with_turn_limit(mut self, turn_limit: u32) -> Self {
        self.turn_limit = turn_limit;
        self
    }
}
