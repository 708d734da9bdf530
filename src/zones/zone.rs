//! Ordered card zones.
//!
//! A `Zone` is an ordered run of card instances with an optional capacity.
//! Decks, the hand and both battle zones are all zones:
//! - decks draw from the **top**, which is the back of the sequence
//! - battle zones and the hand are addressed by position from the front
//!
//! Cards are stored in an `im::Vector`, so cloning a zone for a render
//! snapshot is O(1).

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::CardInstance;
use crate::core::{fisher_yates, EntityId, RandomSource};

/// An ordered, optionally bounded sequence of cards.
///
/// ## Usage
///
/// ```
/// use kingdoms_ccg::cards::{CardCategory, CardDefinition, CardInstance};
/// use kingdoms_ccg::core::EntityId;
/// use kingdoms_ccg::zones::Zone;
///
/// let def = CardDefinition::new("Energy", CardCategory::Energy);
/// let mut deck = Zone::unbounded();
/// deck.push(CardInstance::from_definition(EntityId(0), &def)).unwrap();
/// deck.push(CardInstance::from_definition(EntityId(1), &def)).unwrap();
///
/// // The last card pushed is on top.
/// assert_eq!(deck.pop_top().unwrap().entity_id, EntityId(1));
/// assert_eq!(deck.len(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zone {
    cards: Vector<CardInstance>,
    capacity: Option<usize>,
}

impl Zone {
    /// Create an empty zone with no size limit.
    #[must_use]
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Create an empty zone holding at most `capacity` cards.
    #[must_use]
    pub fn bounded(capacity: usize) -> Self {
        Self {
            cards: Vector::new(),
            capacity: Some(capacity),
        }
    }

    #[must_use]
    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Whether the zone has reached its capacity.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.capacity.is_some_and(|cap| self.cards.len() >= cap)
    }

    /// Card at `index`, counted from the front.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&CardInstance> {
        self.cards.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut CardInstance> {
        self.cards.get_mut(index)
    }

    /// Position of a card by entity.
    #[must_use]
    pub fn position(&self, entity: EntityId) -> Option<usize> {
        self.cards.iter().position(|c| c.entity_id == entity)
    }

    /// Add a card to the back (the top, for a deck).
    ///
    /// Returns the card back if the zone is full.
    pub fn push(&mut self, card: CardInstance) -> Result<(), CardInstance> {
        if self.is_full() {
            return Err(card);
        }
        self.cards.push_back(card);
        Ok(())
    }

    /// Insert a card at `index`, clamped to the current length.
    ///
    /// Returns the card back if the zone is full.
    pub fn insert(&mut self, index: usize, card: CardInstance) -> Result<(), CardInstance> {
        if self.is_full() {
            return Err(card);
        }
        let index = index.min(self.cards.len());
        self.cards.insert(index, card);
        Ok(())
    }

    /// Remove and return the top card (back of the sequence).
    pub fn pop_top(&mut self) -> Option<CardInstance> {
        self.cards.pop_back()
    }

    /// Remove and return the front card.
    pub fn pop_front(&mut self) -> Option<CardInstance> {
        self.cards.pop_front()
    }

    /// Remove and return the card at `index`, shifting later cards forward.
    pub fn remove(&mut self, index: usize) -> Option<CardInstance> {
        if index < self.cards.len() {
            Some(self.cards.remove(index))
        } else {
            None
        }
    }

    /// Uniformly permute the zone.
    pub fn shuffle(&mut self, rng: &mut dyn RandomSource) {
        fisher_yates(&mut self.cards, rng);
    }

    /// Iterate front to back.
    pub fn iter(&self) -> impl Iterator<Item = &CardInstance> {
        self.cards.iter()
    }

    /// Entity ids front to back.
    pub fn entity_ids(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.cards.iter().map(|c| c.entity_id)
    }
}

impl<'a> IntoIterator for &'a Zone {
    type Item = &'a CardInstance;
    type IntoIter = im::vector::Iter<'a, CardInstance>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
