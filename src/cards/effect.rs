//! Card effects.
//!
//! Strategy cards carry a boost; some enemies carry a burn passive. The
//! engine reads these tags, it never stores behaviour on the card itself.

use serde::{Deserialize, Serialize};

/// Effect printed on a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardEffect {
    /// Adds `value` to the boost pool's health component ("luck").
    HealthBoost { value: i64 },
    /// Adds `value` to the boost pool's attack component.
    AttackBoost { value: i64 },
    /// Enemy passive: burns the front hero of the player zone.
    /// `cooldown` is the turn interval used by [`BurnOnCooldown`](crate::passives::BurnOnCooldown).
    Burn { cooldown: u32 },
}
