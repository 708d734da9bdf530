//! Versioned combat formulas.
//!
//! - `Strike`: the hero's effective attack lands unopposed
//! - `Clash`: effective attacks are compared, optionally with a luck term
//!   scaled by each side's health
//!
//! The formula is chosen by `RulesConfig::combat`.

pub mod formula;

pub use formula::{resolve, BoostPool, Clash, ClashOutcome, Combatant};
