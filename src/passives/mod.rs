//! Per-turn enemy passives.
//!
//! Burn is declared on enemy cards but its firing rule is pluggable: the
//! engine calls a [`PassiveHook`] once per advanced turn and reports the
//! heroes it removed.

mod hook;

pub use hook::{
    hook_for, BurnEachTurn, BurnOnCooldown, InertPassives, PassiveEvent, PassiveEvents, PassiveHook,
};
