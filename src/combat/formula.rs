//! Combat resolution.
//!
//! `resolve` turns one hero/enemy pairing into a [`Clash`]: both effective
//! attack values, the luck each side rolled, and the damage each side
//! takes. It never touches zones; the engine applies the damage and removes
//! the fallen.

use serde::{Deserialize, Serialize};

use crate::core::{CombatFormula, LuckFactor, RandomSource};

/// Accumulated additive modifiers from consumed strategy cards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoostPool {
    /// Added to every hero's attack.
    pub attack: i64,
    /// Feeds the hero side of the luck factor.
    pub health: i64,
}

/// Attacking stats of one side going into combat.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Combatant {
    pub attack: i64,
    pub health: i64,
}

/// Which side came out ahead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClashOutcome {
    /// One-sided strike, no comparison made.
    Unopposed,
    HeroStronger,
    EnemyStronger,
    Even,
}

/// Full breakdown of one attack.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clash {
    pub hero_luck: i64,
    pub enemy_luck: i64,
    /// Base attack + attack boost + luck, saturating at the `i64` bounds.
    pub hero_attack: i64,
    /// Base attack + luck.
    pub enemy_attack: i64,
    pub outcome: ClashOutcome,
    pub hero_damage: i64,
    pub enemy_damage: i64,
}

/// `floor(u * bound)` for one fresh roll, or 0 when `bound` is not positive.
fn roll_luck(bound: f64, rng: &mut dyn RandomSource) -> i64 {
    if bound > 0.0 {
        (rng.next_unit() * bound).floor() as i64
    } else {
        0
    }
}

fn luck_terms(
    luck: Option<LuckFactor>,
    hero: Combatant,
    enemy: Combatant,
    boosts: BoostPool,
    rng: &mut dyn RandomSource,
) -> (i64, i64) {
    let Some(luck) = luck else {
        return (0, 0);
    };
    let hero_bound =
        hero.health as f64 * luck.hero_health_scale + boosts.health as f64 * luck.hero_boost_scale;
    let enemy_bound = enemy.health as f64 * luck.enemy_health_scale;
    let hero_luck = roll_luck(hero_bound, rng);
    let enemy_luck = roll_luck(enemy_bound, rng);
    (hero_luck, enemy_luck)
}

/// Resolve one attack under `formula`.
///
/// The hero's luck is rolled before the enemy's. Without a luck factor no
/// randomness is consumed.
pub fn resolve(
    formula: CombatFormula,
    hero: Combatant,
    enemy: Combatant,
    boosts: BoostPool,
    rng: &mut dyn RandomSource,
) -> Clash {
    match formula {
        CombatFormula::Strike => {
            let hero_attack = hero.attack.saturating_add(boosts.attack);
            Clash {
                hero_luck: 0,
                enemy_luck: 0,
                hero_attack,
                enemy_attack: enemy.attack,
                outcome: ClashOutcome::Unopposed,
                hero_damage: 0,
                enemy_damage: hero_attack,
            }
        }
        CombatFormula::Clash { luck } => {
            let (hero_luck, enemy_luck) = luck_terms(luck, hero, enemy, boosts, rng);
            let hero_attack = hero
                .attack
                .saturating_add(boosts.attack)
                .saturating_add(hero_luck);
            let enemy_attack = enemy.attack.saturating_add(enemy_luck);

            let (outcome, hero_damage, enemy_damage) = match hero_attack.cmp(&enemy_attack) {
                std::cmp::Ordering::Less => (ClashOutcome::EnemyStronger, enemy_attack, 0),
                std::cmp::Ordering::Greater => (ClashOutcome::HeroStronger, 0, hero_attack),
                // Each side loses its own effective value.
                std::cmp::Ordering::Equal => (ClashOutcome::Even, hero_attack, enemy_attack),
            };

            Clash {
                hero_luck,
                enemy_luck,
                hero_attack,
                enemy_attack,
                outcome,
                hero_damage,
                enemy_damage,
            }
        }
    }
}
