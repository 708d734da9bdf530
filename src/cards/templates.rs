//! Fixed deck templates.
//!
//! Every game (and every restart) builds both decks from the same rosters,
//! scaled by a [`DeckTemplate`]:
//!
//! - heroes: attack `5000 - 500 * rank`, health `7 - rank / 3`
//! - enemies: attack `3000 + 200 * rank`, health `4 + rank / 3`, every
//!   `burn_interval`-th rank burns
//! - stratagems: health boosts first, then attack boosts
//! - energy: identical zero-stat copies

use crate::core::DeckTemplate;

use super::definition::{CardCategory, CardDefinition};
use super::effect::CardEffect;

pub const HERO_NAMES: [&str; 16] = [
    "Cao Zhen",
    "Sun Ce",
    "Guan Yu",
    "Zhang Fei",
    "Liu Bei",
    "Huang Zhong",
    "Zhuge Liang",
    "Diao Chan",
    "Lu Bu",
    "Sima Yi",
    "Zhao Yun",
    "Zhou Yu",
    "Sun Shangxiang",
    "Dian Wei",
    "Huang Cheng",
    "Gan Ning",
];

pub const STRATEGY_NAMES: [&str; 16] = [
    "Formation Breaker",
    "Scheme Within a Scheme",
    "Ambush",
    "Active Defense",
    "Surprise Raid",
    "Sow Discord",
    "Fire Attack",
    "Flood Attack",
    "Alliance Plot",
    "Spy Report",
    "High Morale",
    "Lift the Siege",
    "Break the Encirclement",
    "Feigned Surrender",
    "Empty Fort",
    "Lure Them Deep",
];

pub const ENEMY_NAMES: [&str; 18] = [
    "Cao Cao",
    "Yan Liang",
    "Zhang Liao",
    "Xu Chu",
    "Wang Yi",
    "Yuan Shao",
    "Dong Zhuo",
    "Guo Si",
    "Deng Ai",
    "He Jin",
    "Xiahou Dun",
    "Tao Qian",
    "Gao Shun",
    "Sun Quan",
    "Hua Xiong",
    "Cao Hong",
    "Yang Hong",
    "Yuan Shu",
];

/// One definition and how many physical copies of it go into a deck.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeckEntry {
    pub definition: CardDefinition,
    pub copies: u32,
}

impl DeckEntry {
    fn single(definition: CardDefinition) -> Self {
        Self { definition, copies: 1 }
    }
}

/// Name for slot `index` of a roster, numbering past its end.
fn roster_name(roster: &[&str], fallback: &str, index: usize) -> String {
    roster
        .get(index)
        .map_or_else(|| format!("{fallback}-{}", index + 1), |name| (*name).to_string())
}

/// Printed hero stats at `rank` (1-based), before the attack floor.
#[must_use]
pub fn hero_stats(rank: u32) -> (i64, i64) {
    let rank = i64::from(rank);
    (5000 - 500 * rank, 7 - rank / 3)
}

/// Printed enemy stats at `rank` (1-based).
#[must_use]
pub fn enemy_stats(rank: u32) -> (i64, i64) {
    let rank = i64::from(rank);
    (3000 + 200 * rank, 4 + rank / 3)
}

/// Heroes, stratagems and energy for the player deck, in build order.
#[must_use]
pub fn player_deck(template: &DeckTemplate) -> Vec<DeckEntry> {
    let mut entries = Vec::new();

    for rank in 1..=template.hero_count {
        let (attack, health) = hero_stats(rank);
        if template.skip_powerless_heroes && attack <= 0 {
            continue;
        }
        let index = (rank - 1) as usize;
        entries.push(DeckEntry::single(
            CardDefinition::new(roster_name(&HERO_NAMES, "Hero", index), CardCategory::Hero)
                .with_stats(attack, health)
                .with_image(format!("/assets/images/heroes/heroes-{rank}.png")),
        ));
    }

    let boosts = (0..template.health_strategies)
        .map(|_| CardEffect::HealthBoost { value: template.health_boost })
        .chain(
            (0..template.attack_strategies)
                .map(|_| CardEffect::AttackBoost { value: template.attack_boost }),
        );
    for (index, effect) in boosts.enumerate() {
        let name = roster_name(&STRATEGY_NAMES, "Strategy", index);
        entries.push(DeckEntry::single(
            CardDefinition::new(name, CardCategory::Strategy)
                .with_stats(template.strategy_attack, template.strategy_health)
                .with_image(format!("/assets/images/strategy/strategy-{}.png", index + 1))
                .with_effect(effect),
        ));
    }

    if template.energy_count > 0 {
        entries.push(DeckEntry {
            definition: CardDefinition::new("Energy", CardCategory::Energy)
                .with_image("/assets/images/energy/energy.png"),
            copies: template.energy_count,
        });
    }

    entries
}

/// The enemy lineup, in build order.
#[must_use]
pub fn enemy_deck(template: &DeckTemplate) -> Vec<DeckEntry> {
    (1..=template.enemy_count)
        .map(|rank| {
            let (attack, health) = enemy_stats(rank);
            let index = (rank - 1) as usize;
            let name = roster_name(&ENEMY_NAMES, "Enemy", index);
            let mut definition = CardDefinition::new(name, CardCategory::Enemy)
                .with_stats(attack, health)
                .with_image(format!("/assets/images/enemy/enemy-{rank}.png"));
            if template.burn_interval > 0 && rank % template.burn_interval == 0 {
                definition = definition.with_effect(CardEffect::Burn {
                    cooldown: template.burn_cooldown,
                });
            }
            DeckEntry::single(definition)
        })
        .collect()
}
