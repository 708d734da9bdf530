//! Card registry for definition lookup.
//!
//! The `CardRegistry` stores every card definition built for a game and
//! hands out their ids.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::definition::{CardCategory, CardDefinition, CardId};

/// Registry of card definitions.
///
/// ## Example
///
/// ```
/// use kingdoms_ccg::cards::{CardCategory, CardDefinition, CardRegistry};
///
/// let mut registry = CardRegistry::new();
/// let id = registry.register(CardDefinition::new("Energy", CardCategory::Energy));
///
/// assert_eq!(registry.get(id).unwrap().name, "Energy");
/// assert_eq!(registry.name(id), "Energy");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CardRegistry {
    cards: FxHashMap<CardId, CardDefinition>,
    next_id: u32,
}

impl CardRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a definition under a freshly assigned id.
    ///
    /// Any id already on `definition` is overwritten.
    pub fn register(&mut self, mut definition: CardDefinition) -> CardId {
        let id = CardId::new(self.next_id);
        self.next_id += 1;
        definition.id = id;
        self.cards.insert(id, definition);
        id
    }

    /// Get a card definition by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&CardDefinition> {
        self.cards.get(&id)
    }

    /// Display name for a card, or `"Unknown card"` if it is not registered.
    #[must_use]
    pub fn name(&self, id: CardId) -> &str {
        self.get(id).map_or("Unknown card", |def| def.name.as_str())
    }

    /// Category of a registered card.
    #[must_use]
    pub fn category(&self, id: CardId) -> Option<CardCategory> {
        self.get(id).map(|def| def.category)
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all card definitions.
    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        self.cards.values()
    }

    /// Find cards of one category.
    pub fn find_by_category(
        &self,
        category: CardCategory,
    ) -> impl Iterator<Item = &CardDefinition> {
        self.cards.values().filter(move |c| c.category == category)
    }
}
