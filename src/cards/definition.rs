//! Card definitions - static card data.
//!
//! `CardDefinition` holds the immutable identity of a card: its name,
//! category, artwork path, printed stats and effect. Guan Yu's printed
//! attack is part of his definition; the health he has left after a clash
//! is stored on his [`CardInstance`](super::CardInstance).

use serde::{Deserialize, Serialize};

use super::effect::CardEffect;

/// Unique identifier for a card definition.
///
/// This identifies the "type" of card (e.g. "Energy"), not a specific
/// copy in a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// What a card is for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardCategory {
    /// Deployed to the player zone and attacks enemies.
    Hero,
    /// Consumed from hand for a boost.
    Strategy,
    /// Consumed from hand to fill the energy pool.
    Energy,
    /// Lives in the enemy zone.
    Enemy,
}

impl CardCategory {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::Strategy => "strategy",
            Self::Energy => "energy",
            Self::Enemy => "enemy",
        }
    }
}

impl std::fmt::Display for CardCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static card definition.
///
/// ## Example
///
/// ```
/// use kingdoms_ccg::cards::{CardCategory, CardDefinition, CardEffect};
///
/// let burner = CardDefinition::new("Dong Zhuo", CardCategory::Enemy)
///     .with_stats(4200, 6)
///     .with_effect(CardEffect::Burn { cooldown: 2 });
///
/// assert_eq!(burner.attack, 4200);
/// assert!(burner.effect.is_some());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Assigned by the [`CardRegistry`](super::CardRegistry) on registration.
    pub id: CardId,

    pub name: String,

    pub category: CardCategory,

    /// Artwork path, resolved by the presentation layer.
    pub image: String,

    /// Printed attack (never negative).
    pub attack: i64,

    /// Printed health.
    pub health: i64,

    pub effect: Option<CardEffect>,
}

impl CardDefinition {
    /// Create a zero-stat definition. The id is assigned on registration.
    #[must_use]
    pub fn new(name: impl Into<String>, category: CardCategory) -> Self {
        Self {
            id: CardId::new(0),
            name: name.into(),
            category,
            image: String::new(),
            attack: 0,
            health: 0,
            effect: None,
        }
    }

    /// Set printed attack and health. Attack is floored at zero.
    #[must_use]
    pub fn with_stats(mut self, attack: i64, health: i64) -> Self {
        self.attack = attack.max(0);
        self.health = health;
        self
    }

    /// Set the artwork path.
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Attach an effect.
    #[must_use]
    pub fn with_effect(mut self, effect: CardEffect) -> Self {
        self.effect = Some(effect);
        self
    }

    #[must_use]
    pub fn is(&self, category: CardCategory) -> bool {
        self.category == category
    }
}
