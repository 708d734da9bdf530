//! The battle engine: every rule of the game lives here.
//!
//! `BattleEngine` holds the rules configuration and the host's collaborators
//! (passive hook, render sink, action log). Games are passed in explicitly,
//! so one engine can drive any number of games in turn.
//!
//! Each public operation follows the same shape: an inner `try_*` step
//! validates and mutates the game, then `conclude` records
//! the step's single message and renders. A rejected step never mutates.
//!
//! ## Usage
//!
//! ```
//! use kingdoms_ccg::core::RulesConfig;
//! use kingdoms_ccg::engine::{BattleEngine, Game, GameStatus};
//!
//! let mut engine = BattleEngine::new(RulesConfig::default()).unwrap();
//! let mut game = Game::new(7);
//! engine.initialize(&mut game);
//!
//! assert_eq!(game.status(), GameStatus::InProgress);
//! assert_eq!(game.hand().len(), 3);
//! assert_eq!(game.enemy_zone().len(), 6);
//! ```

use crate::cards::{templates, CardCategory, CardEffect, CardInstance};
use crate::combat::{self, Clash, ClashOutcome, Combatant};
use crate::core::{ActionError, ConfigError, EntityId, RulesConfig};
use crate::passives::{hook_for, PassiveEvents, PassiveHook};
use crate::zones::{Zone, ZoneKind};

use super::game::{Game, GameResult, GameStatus, Outcome};
use super::report::{AttackReport, StrategyResolution, TurnAdvance, TurnReport};
use super::sinks::{ActionLog, NullLog, NullRender, RenderSink};

/// A validated step and the message it produced.
type Step<T> = Result<(T, String), ActionError>;

/// Runs games under one set of rules.
pub struct BattleEngine {
    config: RulesConfig,
    passives: Box<dyn PassiveHook>,
    render: Box<dyn RenderSink>,
    log: Box<dyn ActionLog>,
    last_message: Option<String>,
}

impl BattleEngine {
    /// Create an engine for `config`, with the passive hook its
    /// `PassiveMode` selects and no-op sinks.
    pub fn new(config: RulesConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let passives = hook_for(config.passives);
        Ok(Self {
            config,
            passives,
            render: Box::new(NullRender),
            log: Box::new(NullLog),
            last_message: None,
        })
    }

    /// Replace the passive hook chosen by the config.
    #[must_use]
    pub fn with_passive_hook(mut self, hook: impl PassiveHook + 'static) -> Self {
        self.passives = Box::new(hook);
        self
    }

    #[must_use]
    pub fn with_render_sink(mut self, sink: impl RenderSink + 'static) -> Self {
        self.render = Box::new(sink);
        self
    }

    #[must_use]
    pub fn with_action_log(mut self, log: impl ActionLog + 'static) -> Self {
        self.log = Box::new(log);
        self
    }

    #[must_use]
    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    /// The message produced by the most recent operation.
    #[must_use]
    pub fn last_message(&self) -> Option<&str> {
        self.last_message.as_deref()
    }

    /// An in-progress game with every zone empty, for hosts (and tests) that
    /// want to stage a position by hand with [`Game::spawn`].
    #[must_use]
    pub fn sandbox(&self, seed: u64) -> Game {
        let mut game = Game::new(seed);
        game.player_zone = Zone::bounded(self.config.zone_capacity);
        game.status = GameStatus::InProgress;
        game
    }

    // === Operations ===

    /// Deal a fresh game: build and shuffle both decks, draw the opening
    /// hand and deploy the enemy lineup.
    ///
    /// Any previous state of `game` is discarded; its RNG stream continues.
    pub fn initialize(&mut self, game: &mut Game) {
        let message = self.deal(game);
        self.announce(message);
        self.render.render(game);
    }

    /// Move the top card of the player deck into the hand.
    ///
    /// Returns `Ok(None)` when the deck is empty.
    pub fn draw_card(&mut self, game: &mut Game) -> Result<Option<EntityId>, ActionError> {
        let step = Self::try_draw_card(game);
        self.conclude(game, step)
    }

    /// Deploy the hero at `hand_index` to the back of the player zone.
    pub fn play_hero(
        &mut self,
        game: &mut Game,
        hand_index: usize,
    ) -> Result<EntityId, ActionError> {
        let step = self.try_play_hero(game, hand_index);
        self.conclude(game, step)
    }

    /// Consume the energy card at `hand_index`. Returns the new pool size.
    pub fn use_energy(&mut self, game: &mut Game, hand_index: usize) -> Result<u32, ActionError> {
        let step = Self::try_use_energy(game, hand_index);
        self.conclude(game, step)
    }

    /// Consume the strategy card at `hand_index` into the boost pool.
    pub fn use_strategy(
        &mut self,
        game: &mut Game,
        hand_index: usize,
    ) -> Result<StrategyResolution, ActionError> {
        let step = Self::try_use_strategy(game, hand_index);
        self.conclude(game, step)
    }

    /// Attack the enemy at `enemy_index` with the hero at `hero_index`.
    ///
    /// Costs one energy. Unless the attack ends the game, the turn advances
    /// immediately afterwards.
    pub fn attack_enemy(
        &mut self,
        game: &mut Game,
        hero_index: usize,
        enemy_index: usize,
    ) -> Result<AttackReport, ActionError> {
        let step = self.try_attack_enemy(game, hero_index, enemy_index);
        self.conclude(game, step)
    }

    /// Advance to the next turn.
    pub fn next_turn(&mut self, game: &mut Game) -> Result<TurnReport, ActionError> {
        let step = self.try_next_turn(game);
        self.conclude(game, step)
    }

    /// End an in-progress game with `result`.
    pub fn end_game(
        &mut self,
        game: &mut Game,
        result: GameResult,
        message: impl Into<String>,
    ) -> Result<(), ActionError> {
        let step = match Self::ensure_in_progress(game) {
            Ok(()) => Ok(((), self.finish(game, result, message.into()))),
            Err(err) => Err(err),
        };
        self.conclude(game, step)
    }

    /// Throw the game away and deal a new one.
    ///
    /// The new game's RNG is a fork of the old one, so a seeded session
    /// replays the same sequence of restarts.
    pub fn restart_game(&mut self, game: &mut Game) {
        let rng = game.rng.fork();
        *game = Game::with_rng(rng);
        self.deal(game);
        log::info!("game restarted");
        self.announce("Game restarted.".to_string());
        self.render.render(game);
    }

    // === Steps ===

    fn deal(&mut self, game: &mut Game) -> String {
        let rng = game.rng.clone();
        *game = Game::with_rng(rng);
        game.player_zone = Zone::bounded(self.config.zone_capacity);
        self.passives.reset();

        let deck = &self.config.deck;
        for entry in templates::player_deck(deck) {
            game.place_copies(ZoneKind::PlayerDeck, entry.definition, entry.copies);
        }
        for entry in templates::enemy_deck(deck) {
            game.place_copies(ZoneKind::EnemyDeck, entry.definition, entry.copies);
        }
        game.player_deck.shuffle(&mut game.rng);
        game.enemy_deck.shuffle(&mut game.rng);

        for _ in 0..self.config.initial_hand_size {
            Self::draw(game);
        }
        for _ in 0..self.config.enemy_deployment {
            if let Some(enemy) = game.move_top(ZoneKind::EnemyDeck, ZoneKind::EnemyZone) {
                log::debug!("deployed enemy {enemy}");
            }
        }

        game.status = GameStatus::InProgress;
        log::info!(
            "game started: {} cards in deck, {} in hand, {} enemies deployed",
            game.player_deck.len(),
            game.hand.len(),
            game.enemy_zone.len()
        );
        "Game started.".to_string()
    }

    fn try_draw_card(game: &mut Game) -> Step<Option<EntityId>> {
        Self::ensure_in_progress(game)?;
        let drawn = Self::draw(game);
        let card = drawn
            .and_then(|id| game.hand.position(id))
            .and_then(|i| game.hand.get(i));
        let message = match card {
            Some(card) => format!("Drew {}.", game.name_of(card)),
            None => "The deck is empty.".to_string(),
        };
        Ok((drawn, message))
    }

    fn try_play_hero(&self, game: &mut Game, index: usize) -> Step<EntityId> {
        Self::ensure_in_progress(game)?;
        let full = ActionError::ZoneFull {
            capacity: self.config.zone_capacity,
        };
        if game.player_zone.is_full() {
            return Err(full);
        }

        let card = Self::take_from_hand(game, index, CardCategory::Hero)?;
        let entity_id = card.entity_id;
        let name = game.name_of(&card).to_string();
        if let Err(card) = game.player_zone.push(card) {
            let _ = game.hand.insert(index, card);
            return Err(full);
        }

        log::debug!("{name} ({entity_id}) deployed, {} in zone", game.player_zone.len());
        Ok((entity_id, format!("{name} deployed to player zone.")))
    }

    fn try_use_energy(game: &mut Game, index: usize) -> Step<u32> {
        Self::ensure_in_progress(game)?;
        Self::take_from_hand(game, index, CardCategory::Energy)?;
        game.energy += 1;

        log::debug!("energy pool now {}", game.energy);
        Ok((game.energy, format!("Energy card used. Energy pool increased to {}.", game.energy)))
    }

    fn try_use_strategy(game: &mut Game, index: usize) -> Step<StrategyResolution> {
        Self::ensure_in_progress(game)?;
        let invalid = ActionError::InvalidCard {
            index,
            expected: CardCategory::Strategy,
        };
        let (effect, name) = game
            .hand
            .get(index)
            .and_then(|card| game.registry.get(card.card_id))
            .filter(|def| def.is(CardCategory::Strategy))
            .and_then(|def| def.effect.map(|effect| (effect, def.name.clone())))
            .ok_or(invalid)?;
        game.hand.remove(index).ok_or(invalid)?;

        // The card is spent whichever branch it takes.
        let (resolution, message) = match effect {
            CardEffect::HealthBoost { value } => {
                game.boosts.health = game.boosts.health.saturating_add(value);
                (
                    StrategyResolution::HealthBoost(value),
                    format!("All heroes' luck increased by {value}."),
                )
            }
            CardEffect::AttackBoost { value } => {
                game.boosts.attack = game.boosts.attack.saturating_add(value);
                (
                    StrategyResolution::AttackBoost(value),
                    format!("All heroes' attack increased by {value} due to {name}."),
                )
            }
            CardEffect::Burn { .. } => (
                StrategyResolution::NoEffect,
                format!("{name} doesn't have a valid effect."),
            ),
        };

        log::debug!("strategy {name} resolved as {resolution:?}, boosts now {:?}", game.boosts);
        Ok((resolution, message))
    }

    fn try_attack_enemy(
        &mut self,
        game: &mut Game,
        hero_index: usize,
        enemy_index: usize,
    ) -> Step<AttackReport> {
        Self::ensure_in_progress(game)?;
        let hero = game
            .player_zone
            .get(hero_index)
            .cloned()
            .ok_or(ActionError::NoHero { index: hero_index })?;
        let enemy = game
            .enemy_zone
            .get(enemy_index)
            .cloned()
            .ok_or(ActionError::NoEnemy { index: enemy_index })?;
        if game.energy == 0 {
            return Err(ActionError::NoEnergy);
        }

        let hero_name = game.name_of(&hero).to_string();
        let enemy_name = game.name_of(&enemy).to_string();

        let clash = combat::resolve(
            self.config.combat,
            Combatant {
                attack: hero.attack,
                health: hero.health,
            },
            Combatant {
                attack: enemy.attack,
                health: enemy.health,
            },
            game.boosts,
            &mut game.rng,
        );
        log::debug!(
            "{hero_name} ({}) vs {enemy_name} ({}): {} vs {} (luck {} / {}), {:?}",
            hero.entity_id,
            enemy.entity_id,
            clash.hero_attack,
            clash.enemy_attack,
            clash.hero_luck,
            clash.enemy_luck,
            clash.outcome
        );

        game.energy -= 1;
        if let Some(card) = game.enemy_zone.get_mut(enemy_index) {
            card.take_damage(clash.enemy_damage);
        }
        if let Some(card) = game.player_zone.get_mut(hero_index) {
            card.take_damage(clash.hero_damage);
        }

        let mut parts = vec![describe_clash(&clash, &hero_name, &enemy_name)];

        // Enemy first; the zones are separate so neither index shifts.
        let enemy_defeated = game
            .enemy_zone
            .get(enemy_index)
            .is_some_and(CardInstance::is_defeated);
        if enemy_defeated {
            game.enemy_zone.remove(enemy_index);
            parts.push(format!("{enemy_name} was defeated!"));
        }
        let hero_defeated = game
            .player_zone
            .get(hero_index)
            .is_some_and(CardInstance::is_defeated);
        if hero_defeated {
            game.player_zone.remove(hero_index);
            parts.push(format!("{hero_name} was knocked out."));
        }

        let mut report = AttackReport {
            hero: hero.entity_id,
            enemy: enemy.entity_id,
            clash,
            enemy_defeated,
            hero_defeated,
            outcome: None,
            turn: TurnAdvance::GameOver,
        };

        if game.enemy_zone.is_empty() {
            parts.push(self.finish(game, GameResult::Won, "You won!".to_string()));
            report.outcome = Some(GameResult::Won);
        } else if game.turn >= self.config.turn_limit && game.player_zone.is_empty() {
            let message = format!(
                "You lost! No more heroes in your deck by turn {}.",
                self.config.turn_limit
            );
            parts.push(self.finish(game, GameResult::Lost, message));
            report.outcome = Some(GameResult::Lost);
        } else {
            report.turn = match self.try_next_turn(game) {
                Ok((turn, message)) => {
                    parts.push(message);
                    TurnAdvance::Advanced(turn)
                }
                Err(err) => {
                    parts.push(err.to_string());
                    TurnAdvance::Blocked(err)
                }
            };
        }

        Ok((report, parts.join(" ")))
    }

    fn try_next_turn(&mut self, game: &mut Game) -> Step<TurnReport> {
        Self::ensure_in_progress(game)?;
        if let Some(limit) = self.config.hand_limit {
            let held = game.hand.len();
            if held >= limit {
                return Err(ActionError::TooManyCards { held, limit });
            }
        }

        game.turn += 1;
        log::info!("turn {} started", game.turn);
        let mut report = TurnReport {
            turn: game.turn,
            passives: PassiveEvents::new(),
            drawn: 0,
            outcome: None,
        };
        let mut parts = vec![format!("Turn {} started.", game.turn)];

        if self.out_of_heroes(game) {
            let message = "You lost! You ran out of heroes in your deck and zone.".to_string();
            parts.push(self.finish(game, GameResult::Lost, message));
            report.outcome = Some(GameResult::Lost);
            return Ok((report, parts.join(" ")));
        }
        if game.enemy_zone.is_empty() {
            let message = "You won! All enemy heroes have been defeated.".to_string();
            parts.push(self.finish(game, GameResult::Won, message));
            report.outcome = Some(GameResult::Won);
            return Ok((report, parts.join(" ")));
        }

        report.passives = self
            .passives
            .on_turn_start(game.turn, &game.enemy_zone, &mut game.player_zone, &game.registry);
        for event in &report.passives {
            log::debug!("{} burned by {}", event.removed.entity_id, event.source);
            parts.push(format!("{} was burned by an enemy effect!", game.name_of(&event.removed)));
        }

        for _ in 0..self.config.cards_drawn_per_turn {
            if Self::draw(game).is_some() {
                report.drawn += 1;
            }
        }

        if self.out_of_heroes(game) {
            let message = format!(
                "You lost! You have no heroes left in your deck and zone after turn {}.",
                self.config.turn_limit
            );
            parts.push(self.finish(game, GameResult::Lost, message));
            report.outcome = Some(GameResult::Lost);
        }

        Ok((report, parts.join(" ")))
    }

    // === Helpers ===

    /// Move the game to a terminal state. Returns the outcome message.
    fn finish(&mut self, game: &mut Game, result: GameResult, message: String) -> String {
        log::info!("game over on turn {}: {result:?}", game.turn);
        let outcome = Outcome {
            result,
            message: message.clone(),
        };
        game.status = result.status();
        game.restart_armed = true;
        self.render.game_over(&outcome);
        game.outcome = Some(outcome);
        message
    }

    /// Record a step's message and render, whatever the step's result.
    fn conclude<T>(&mut self, game: &Game, step: Step<T>) -> Result<T, ActionError> {
        let result = match step {
            Ok((value, message)) => {
                self.announce(message);
                Ok(value)
            }
            Err(err) => {
                log::debug!("action rejected: {err}");
                self.announce(err.to_string());
                Err(err)
            }
        };
        self.render.render(game);
        result
    }

    fn announce(&mut self, message: String) {
        self.log.record(&message);
        self.last_message = Some(message);
    }

    fn ensure_in_progress(game: &Game) -> Result<(), ActionError> {
        match game.status {
            GameStatus::InProgress => Ok(()),
            status => Err(ActionError::NotInProgress(status)),
        }
    }

    /// Past the turn limit with nothing left to deploy.
    fn out_of_heroes(&self, game: &Game) -> bool {
        game.turn >= self.config.turn_limit
            && game.player_deck.is_empty()
            && game.player_zone.is_empty()
    }

    fn draw(game: &mut Game) -> Option<EntityId> {
        let drawn = game.move_top(ZoneKind::PlayerDeck, ZoneKind::Hand)?;
        log::debug!("drew {drawn}, {} left in deck", game.player_deck.len());
        Some(drawn)
    }

    /// Remove the card at `index` from the hand if it is an `expected` card.
    fn take_from_hand(
        game: &mut Game,
        index: usize,
        expected: CardCategory,
    ) -> Result<CardInstance, ActionError> {
        let invalid = ActionError::InvalidCard { index, expected };
        let matches = game
            .hand
            .get(index)
            .is_some_and(|card| game.registry.category(card.card_id) == Some(expected));
        if !matches {
            return Err(invalid);
        }
        game.hand.remove(index).ok_or(invalid)
    }
}

fn describe_clash(clash: &Clash, hero: &str, enemy: &str) -> String {
    match clash.outcome {
        ClashOutcome::Unopposed => {
            format!("{hero} attacked {enemy} for {} damage.", clash.enemy_damage)
        }
        ClashOutcome::HeroStronger => format!(
            "{hero} attacked {enemy}, and hero's attack is higher. Enemy health reduced by {}.",
            clash.enemy_damage
        ),
        ClashOutcome::EnemyStronger => format!(
            "{hero} attacked {enemy}, but hero's attack is lower. Hero health reduced by {}.",
            clash.hero_damage
        ),
        ClashOutcome::Even => format!(
            "{hero} and {enemy} have the same attack. Both lose {} health.",
            clash.hero_damage
        ),
    }
}
