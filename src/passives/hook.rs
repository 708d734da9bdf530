//! Enemy passive hooks.
//!
//! Enemies can carry a `Burn` effect. Whether and how often it fires is a
//! rules decision, so turn advancement defers to a [`PassiveHook`]. The
//! built-in hooks are:
//!
//! - [`InertPassives`]: burn stays data only (default)
//! - [`BurnEachTurn`]: every burning enemy burns the front hero each turn
//! - [`BurnOnCooldown`]: every burning enemy burns once per `cooldown` turns

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::cards::{CardEffect, CardInstance, CardRegistry};
use crate::core::{EntityId, PassiveMode};
use crate::zones::Zone;

/// A hero removed by an enemy passive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PassiveEvent {
    /// The enemy whose passive fired.
    pub source: EntityId,
    pub removed: CardInstance,
}

/// Passive hits for one turn. Bounded by the player zone capacity in
/// practice, since each hit removes a hero.
pub type PassiveEvents = SmallVec<[PassiveEvent; 3]>;

/// Per-turn enemy passive behavior.
pub trait PassiveHook {
    /// Called once per advanced turn, after the terminal checks and before
    /// the player draws.
    fn on_turn_start(
        &mut self,
        turn: u32,
        enemies: &Zone,
        player_zone: &mut Zone,
        registry: &CardRegistry,
    ) -> PassiveEvents;

    /// Forget any per-game bookkeeping. Called on restart.
    fn reset(&mut self) {}
}

/// Build the hook selected by a config.
#[must_use]
pub fn hook_for(mode: PassiveMode) -> Box<dyn PassiveHook> {
    match mode {
        PassiveMode::Inert => Box::new(InertPassives),
        PassiveMode::BurnEachTurn => Box::new(BurnEachTurn),
        PassiveMode::BurnOnCooldown => Box::new(BurnOnCooldown::default()),
    }
}

fn burn_cooldown(card: &CardInstance, registry: &CardRegistry) -> Option<u32> {
    match registry.get(card.card_id)?.effect? {
        CardEffect::Burn { cooldown } => Some(cooldown),
        _ => None,
    }
}

/// Burn the first hero in the player zone, if there is one.
fn burn_front(source: EntityId, player_zone: &mut Zone, events: &mut PassiveEvents) {
    if let Some(removed) = player_zone.pop_front() {
        events.push(PassiveEvent { source, removed });
    }
}

/// Passives never fire.
#[derive(Clone, Copy, Debug, Default)]
pub struct InertPassives;

impl PassiveHook for InertPassives {
    fn on_turn_start(
        &mut self,
        _turn: u32,
        _enemies: &Zone,
        _player_zone: &mut Zone,
        _registry: &CardRegistry,
    ) -> PassiveEvents {
        PassiveEvents::new()
    }
}

/// Every burning enemy fires every turn.
#[derive(Clone, Copy, Debug, Default)]
pub struct BurnEachTurn;

impl PassiveHook for BurnEachTurn {
    fn on_turn_start(
        &mut self,
        turn: u32,
        enemies: &Zone,
        player_zone: &mut Zone,
        registry: &CardRegistry,
    ) -> PassiveEvents {
        let mut events = PassiveEvents::new();
        for enemy in enemies {
            if burn_cooldown(enemy, registry).is_some() {
                burn_front(enemy.entity_id, player_zone, &mut events);
            }
        }
        log::trace!("turn {turn}: {} burn hit(s)", events.len());
        events
    }
}

/// Each burning enemy fires once every `cooldown` turns, counted from the
/// first turn it is seen in the enemy zone.
#[derive(Clone, Debug, Default)]
pub struct BurnOnCooldown {
    /// Turns each enemy has waited since it last fired.
    waited: FxHashMap<EntityId, u32>,
}

impl BurnOnCooldown {
    /// Turns `enemy` has waited since it last fired.
    #[must_use]
    pub fn waited(&self, enemy: EntityId) -> u32 {
        self.waited.get(&enemy).copied().unwrap_or(0)
    }
}

impl PassiveHook for BurnOnCooldown {
    fn on_turn_start(
        &mut self,
        turn: u32,
        enemies: &Zone,
        player_zone: &mut Zone,
        registry: &CardRegistry,
    ) -> PassiveEvents {
        let mut events = PassiveEvents::new();

        // Defeated enemies no longer tick.
        self.waited.retain(|id, _| enemies.position(*id).is_some());

        for enemy in enemies {
            let Some(cooldown) = burn_cooldown(enemy, registry) else {
                continue;
            };
            let waited = self.waited.entry(enemy.entity_id).or_insert(0);
            *waited += 1;
            if *waited >= cooldown.max(1) {
                *waited = 0;
                burn_front(enemy.entity_id, player_zone, &mut events);
            }
        }
        log::trace!("turn {turn}: {} burn hit(s) on cooldown", events.len());
        events
    }

    fn reset(&mut self) {
        self.waited.clear();
    }
}
