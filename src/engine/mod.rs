//! Battle engine: the game aggregate and the operations that drive it.
//!
//! ## Key Types
//!
//! - `Game`: all state of one match, cheap to clone and serializable
//! - `BattleEngine`: rules configuration plus host collaborators
//! - `RenderSink` / `ActionLog`: presentation seams
//! - `AttackReport` / `TurnReport`: what an operation did

pub mod game;
pub mod battle;
pub mod report;
pub mod sinks;

pub use game::{Game, GameResult, GameStatus, Outcome};
pub use battle::BattleEngine;
pub use report::{AttackReport, StrategyResolution, TurnAdvance, TurnReport};
pub use sinks::{ActionLog, NullLog, NullRender, RenderSink};
