//! The game aggregate.
//!
//! A `Game` owns everything one match needs: both decks, the hand, both
//! battle zones, the energy and boost pools, the turn counter, the card
//! registry and the RNG. It has no rules of its own; [`BattleEngine`]
//! drives it.
//!
//! Cloning is cheap (zones are `im` vectors) and the whole aggregate is
//! serializable, so a host can checkpoint with [`Game::to_bytes`].
//!
//! [`BattleEngine`]: super::BattleEngine

use serde::{Deserialize, Serialize};

use crate::cards::{CardDefinition, CardInstance, CardRegistry};
use crate::combat::BoostPool;
use crate::core::{EntityId, GameRng, SnapshotError};
use crate::zones::{Zone, ZoneKind};

/// Lifecycle of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Constructed but not yet dealt.
    Uninitialized,
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Uninitialized => "uninitialized",
            Self::InProgress => "in progress",
            Self::Won => "won",
            Self::Lost => "lost",
        };
        f.write_str(name)
    }
}

/// How a finished game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    Won,
    Lost,
}

impl GameResult {
    #[must_use]
    pub fn status(self) -> GameStatus {
        match self {
            Self::Won => GameStatus::Won,
            Self::Lost => GameStatus::Lost,
        }
    }
}

/// Terminal result plus the message shown to the player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub result: GameResult,
    pub message: String,
}

/// Complete state of one game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub(super) status: GameStatus,
    pub(super) registry: CardRegistry,

    pub(super) player_deck: Zone,
    pub(super) enemy_deck: Zone,
    pub(super) hand: Zone,
    pub(super) player_zone: Zone,
    pub(super) enemy_zone: Zone,

    pub(super) energy: u32,
    pub(super) boosts: BoostPool,
    pub(super) turn: u32,

    pub(super) outcome: Option<Outcome>,
    /// One-shot flag a host consumes to offer "play again".
    pub(super) restart_armed: bool,

    pub(super) next_entity: EntityId,
    pub(super) rng: GameRng,
}

impl Game {
    /// Create an empty, uninitialized game seeded with `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_rng(GameRng::new(seed))
    }

    pub(super) fn with_rng(rng: GameRng) -> Self {
        Self {
            status: GameStatus::Uninitialized,
            registry: CardRegistry::new(),
            player_deck: Zone::unbounded(),
            enemy_deck: Zone::unbounded(),
            hand: Zone::unbounded(),
            player_zone: Zone::unbounded(),
            enemy_zone: Zone::unbounded(),
            energy: 0,
            boosts: BoostPool::default(),
            turn: 0,
            outcome: None,
            restart_armed: false,
            next_entity: EntityId::FIRST,
            rng,
        }
    }

    // === Lifecycle ===

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    #[must_use]
    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    #[must_use]
    pub fn is_restart_armed(&self) -> bool {
        self.restart_armed
    }

    /// Consume the restart flag. Returns whether it was armed.
    pub fn take_restart(&mut self) -> bool {
        std::mem::take(&mut self.restart_armed)
    }

    // === Counters ===

    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    #[must_use]
    pub fn energy(&self) -> u32 {
        self.energy
    }

    #[must_use]
    pub fn boosts(&self) -> BoostPool {
        self.boosts
    }

    // === Cards ===

    #[must_use]
    pub fn registry(&self) -> &CardRegistry {
        &self.registry
    }

    /// Display name of a card in play.
    #[must_use]
    pub fn name_of(&self, card: &CardInstance) -> &str {
        self.registry.name(card.card_id)
    }

    #[must_use]
    pub fn zone(&self, kind: ZoneKind) -> &Zone {
        match kind {
            ZoneKind::PlayerDeck => &self.player_deck,
            ZoneKind::EnemyDeck => &self.enemy_deck,
            ZoneKind::Hand => &self.hand,
            ZoneKind::PlayerZone => &self.player_zone,
            ZoneKind::EnemyZone => &self.enemy_zone,
        }
    }

    pub(super) fn zone_mut(&mut self, kind: ZoneKind) -> &mut Zone {
        match kind {
            ZoneKind::PlayerDeck => &mut self.player_deck,
            ZoneKind::EnemyDeck => &mut self.enemy_deck,
            ZoneKind::Hand => &mut self.hand,
            ZoneKind::PlayerZone => &mut self.player_zone,
            ZoneKind::EnemyZone => &mut self.enemy_zone,
        }
    }

    #[must_use]
    pub fn hand(&self) -> &Zone {
        &self.hand
    }

    #[must_use]
    pub fn player_zone(&self) -> &Zone {
        &self.player_zone
    }

    #[must_use]
    pub fn enemy_zone(&self) -> &Zone {
        &self.enemy_zone
    }

    #[must_use]
    pub fn player_deck(&self) -> &Zone {
        &self.player_deck
    }

    #[must_use]
    pub fn enemy_deck(&self) -> &Zone {
        &self.enemy_deck
    }

    /// A deployed hero's attack and health with the boost pool folded in,
    /// as a renderer shows them.
    #[must_use]
    pub fn effective_stats(&self, hero: &CardInstance) -> (i64, i64) {
        (hero.attack + self.boosts.attack, hero.health + self.boosts.health)
    }

    /// Register `definition` and place one fresh instance of it in `kind`.
    ///
    /// Returns `None` (and registers nothing) if the zone is full.
    pub fn spawn(&mut self, kind: ZoneKind, definition: CardDefinition) -> Option<EntityId> {
        if self.zone(kind).is_full() {
            return None;
        }
        self.place_copies(kind, definition, 1).first().copied()
    }

    /// Register `definition` once and place `copies` instances of it in
    /// `kind`, stopping early if the zone fills up.
    pub(super) fn place_copies(
        &mut self,
        kind: ZoneKind,
        definition: CardDefinition,
        copies: u32,
    ) -> Vec<EntityId> {
        let card_id = self.registry.register(definition);
        let mut placed = Vec::with_capacity(copies as usize);
        let Some(def) = self.registry.get(card_id) else {
            return placed;
        };
        let template = CardInstance::from_definition(EntityId::FIRST, def);

        for _ in 0..copies {
            let entity_id = self.next_entity.bump();
            let card = CardInstance { entity_id, ..template.clone() };
            if self.zone_mut(kind).push(card).is_err() {
                break;
            }
            placed.push(entity_id);
        }
        placed
    }

    /// Move the top card of `from` onto the back of `to`.
    pub(super) fn move_top(&mut self, from: ZoneKind, to: ZoneKind) -> Option<EntityId> {
        let card = self.zone_mut(from).pop_top()?;
        let entity_id = card.entity_id;
        match self.zone_mut(to).push(card) {
            Ok(()) => Some(entity_id),
            Err(card) => {
                // `from` just gave up this slot.
                let _ = self.zone_mut(from).push(card);
                None
            }
        }
    }

    /// Every entity currently anywhere in the game, zone by zone.
    pub fn entity_ids(&self) -> impl Iterator<Item = EntityId> + '_ {
        [
            ZoneKind::PlayerDeck,
            ZoneKind::EnemyDeck,
            ZoneKind::Hand,
            ZoneKind::PlayerZone,
            ZoneKind::EnemyZone,
        ]
        .into_iter()
        .flat_map(move |kind| self.zone(kind).entity_ids())
    }

    // === Snapshots ===

    /// Encode the whole game, RNG position included.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        Ok(bincode::serialize(self)?)
    }

    /// Restore a game written by [`Game::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        Ok(bincode::deserialize(bytes)?)
    }
}
