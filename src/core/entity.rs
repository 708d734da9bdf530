//! Entity identification.
//!
//! Every physical card in a game gets a unique `EntityId`, allocated in
//! deck-build order by the owning [`Game`](crate::engine::Game). Two copies
//! of the same card definition (e.g. sixteen energy cards) share a
//! [`CardId`](crate::cards::CardId) but never an `EntityId`.
//!
//! ```
//! use kingdoms_ccg::core::EntityId;
//!
//! let mut next = EntityId::FIRST;
//! let a = next.bump();
//! let b = next.bump();
//! assert_ne!(a, b);
//! assert_eq!(b.raw(), a.raw() + 1);
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for a card instance within one game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntityId(pub u32);

impl EntityId {
    /// The first id handed out by a fresh game.
    pub const FIRST: Self = Self(0);

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Return the current id and advance `self` to the next one.
    pub fn bump(&mut self) -> Self {
        let current = *self;
        self.0 += 1;
        current
    }
}

impl From<u32> for EntityId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Entity({})", self.0)
    }
}
