//! Presentation-side collaborators.
//!
//! The engine never draws anything. After every operation it hands the
//! whole [`Game`] to a [`RenderSink`] and one message to an [`ActionLog`].
//! Closures work as both:
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use kingdoms_ccg::core::RulesConfig;
//! use kingdoms_ccg::engine::{BattleEngine, Game};
//!
//! let messages = Rc::new(RefCell::new(Vec::new()));
//! let sink = Rc::clone(&messages);
//!
//! let mut engine = BattleEngine::new(RulesConfig::default())
//!     .unwrap()
//!     .with_action_log(move |message: &str| sink.borrow_mut().push(message.to_string()));
//!
//! let mut game = Game::new(42);
//! engine.initialize(&mut game);
//! assert_eq!(messages.borrow().last().map(String::as_str), Some("Game started."));
//! ```

use super::game::{Game, Outcome};

/// Receives the full game after every operation.
///
/// Implementations must be idempotent for identical state.
pub trait RenderSink {
    fn render(&mut self, game: &Game);

    /// Called once when the game reaches a terminal state.
    fn game_over(&mut self, _outcome: &Outcome) {}
}

/// Receives the single human-readable message produced by each operation.
///
/// Each message replaces the previous one on screen; it is not a history.
pub trait ActionLog {
    fn record(&mut self, message: &str);
}

/// Render sink that ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullRender;

impl RenderSink for NullRender {
    fn render(&mut self, _game: &Game) {}
}

/// Action log that ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullLog;

impl ActionLog for NullLog {
    fn record(&mut self, _message: &str) {}
}

impl<F: FnMut(&Game)> RenderSink for F {
    fn render(&mut self, game: &Game) {
        self(game);
    }
}

impl<F: FnMut(&str)> ActionLog for F {
    fn record(&mut self, message: &str) {
        self(message);
    }
}
