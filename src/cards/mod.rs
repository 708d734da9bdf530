//! Card system: definitions, effects, instances, registry and deck templates.
//!
//! ## Key Types
//!
//! - `CardId`: Identifier for card definitions
//! - `CardCategory`: hero, strategy, energy or enemy
//! - `CardEffect`: boost or burn tag printed on a card
//! - `CardDefinition`: Static card identity and printed stats
//! - `CardInstance`: Runtime card state (current attack and health)
//! - `CardRegistry`: Card definition lookup

pub mod definition;
pub mod effect;
pub mod instance;
pub mod registry;
pub mod templates;

pub use definition::{CardCategory, CardDefinition, CardId};
pub use effect::CardEffect;
pub use instance::CardInstance;
pub use registry::CardRegistry;
pub use templates::DeckEntry;
