//! Card instances - runtime card state.
//!
//! `CardInstance` is one physical card in a game. It points back at its
//! definition and carries the attack and health the card currently has.

use serde::{Deserialize, Serialize};

use super::definition::{CardDefinition, CardId};
use crate::core::EntityId;

/// A card instance in a game.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardInstance {
    /// Unique entity ID for this instance.
    pub entity_id: EntityId,

    /// Reference to the card definition.
    pub card_id: CardId,

    pub attack: i64,

    /// Can drop to zero or below after a clash; the engine removes the card
    /// before the action returns.
    pub health: i64,
}

impl CardInstance {
    /// Create an instance carrying the definition's printed stats.
    #[must_use]
    pub fn from_definition(entity_id: EntityId, definition: &CardDefinition) -> Self {
        Self {
            entity_id,
            card_id: definition.id,
            attack: definition.attack,
            health: definition.health,
        }
    }

    #[must_use]
    pub fn is_defeated(&self) -> bool {
        self.health <= 0
    }

    /// Subtract `amount` from health.
    pub fn take_damage(&mut self, amount: i64) {
        self.health = self.health.saturating_sub(amount);
    }
}
