//! Battle operation tests.
//!
//! These tests stage positions in a sandbox game and verify:
//! - Deployment, energy and strategy consumption
//! - Combat resolution and removal of the fallen
//! - Rejected actions leave the game untouched

use std::cell::RefCell;
use std::rc::Rc;

use kingdoms_ccg::cards::{CardCategory, CardDefinition, CardEffect};
use kingdoms_ccg::core::{ActionError, CombatFormula, RulesConfig};
use kingdoms_ccg::engine::{
    BattleEngine, Game, GameResult, GameStatus, StrategyResolution, TurnAdvance,
};
use kingdoms_ccg::zones::ZoneKind;
use kingdoms_ccg::ClashOutcome;

fn no_luck() -> RulesConfig {
    RulesConfig::default().with_combat(CombatFormula::Clash { luck: None })
}

fn hero(name: &str, attack: i64, health: i64) -> CardDefinition {
    CardDefinition::new(name, CardCategory::Hero).with_stats(attack, health)
}

fn enemy(name: &str, attack: i64, health: i64) -> CardDefinition {
    CardDefinition::new(name, CardCategory::Enemy).with_stats(attack, health)
}

fn energy() -> CardDefinition {
    CardDefinition::new("Energy", CardCategory::Energy)
}

fn strategy(name: &str, effect: Option<CardEffect>) -> CardDefinition {
    let def = CardDefinition::new(name, CardCategory::Strategy).with_stats(1, 2);
    match effect {
        Some(effect) => def.with_effect(effect),
        None => def,
    }
}

/// Put `amount` energy into the pool through the hand.
fn charge(engine: &mut BattleEngine, game: &mut Game, amount: u32) {
    for _ in 0..amount {
        game.spawn(ZoneKind::Hand, energy());
        let index = game.hand().len() - 1;
        engine.use_energy(game, index).unwrap();
    }
}

/// Test the canonical clash: a 4500/6 hero against a 3200/4 enemy.
#[test]
fn test_stronger_hero_defeats_enemy() {
    let mut engine = BattleEngine::new(no_luck()).unwrap();
    let mut game = engine.sandbox(42);
    let guan_yu = game.spawn(ZoneKind::PlayerZone, hero("Guan Yu", 4500, 6)).unwrap();
    let cao_cao = game.spawn(ZoneKind::EnemyZone, enemy("Cao Cao", 3200, 4)).unwrap();
    game.spawn(ZoneKind::EnemyZone, enemy("Yan Liang", 3400, 4));
    charge(&mut engine, &mut game, 1);

    let report = engine.attack_enemy(&mut game, 0, 0).unwrap();

    assert_eq!(report.hero, guan_yu);
    assert_eq!(report.enemy, cao_cao);
    assert_eq!(report.clash.outcome, ClashOutcome::HeroStronger);
    assert!(report.enemy_defeated);
    assert!(!report.hero_defeated);
    assert_eq!(report.outcome, None);

    // Enemy removed, hero untouched, energy spent.
    assert!(game.enemy_zone().position(cao_cao).is_none());
    assert_eq!(game.enemy_zone().len(), 1);
    let survivor = game.player_zone().get(0).unwrap();
    assert_eq!(survivor.entity_id, guan_yu);
    assert_eq!(survivor.health, 6);
    assert_eq!(game.energy(), 0);

    // A non-terminal attack advances the turn.
    assert_eq!(report.advanced().map(|t| t.turn), Some(1));
    assert_eq!(game.turn(), 1);
}

/// Test a weaker hero takes the enemy's effective attack.
#[test]
fn test_weaker_hero_is_knocked_out() {
    let mut engine = BattleEngine::new(no_luck()).unwrap();
    let mut game = engine.sandbox(42);
    game.spawn(ZoneKind::PlayerZone, hero("Huang Cheng", 500, 3));
    game.spawn(ZoneKind::PlayerZone, hero("Sun Ce", 4000, 7));
    game.spawn(ZoneKind::EnemyZone, enemy("Guo Si", 4400, 6));
    charge(&mut engine, &mut game, 1);

    let report = engine.attack_enemy(&mut game, 0, 0).unwrap();

    assert_eq!(report.clash.outcome, ClashOutcome::EnemyStronger);
    assert_eq!(report.clash.hero_damage, 4400);
    assert!(report.hero_defeated);
    assert!(!report.enemy_defeated);
    assert_eq!(game.enemy_zone().get(0).unwrap().health, 6);
    // The second hero moved up to the front.
    assert_eq!(game.name_of(game.player_zone().get(0).unwrap()), "Sun Ce");
}

/// Test the attack boost shifts the comparison without touching card stats.
#[test]
fn test_attack_boost_feeds_combat() {
    let mut engine = BattleEngine::new(no_luck()).unwrap();
    let mut game = engine.sandbox(1);
    game.spawn(ZoneKind::PlayerZone, hero("Zhou Yu", 2500, 5));
    game.spawn(ZoneKind::EnemyZone, enemy("Guo Si", 3400, 5));
    game.spawn(ZoneKind::EnemyZone, enemy("Cao Hong", 6000, 9));
    let fire_attack = strategy("Fire Attack", Some(CardEffect::AttackBoost { value: 1000 }));
    game.spawn(ZoneKind::Hand, fire_attack);

    assert_eq!(engine.use_strategy(&mut game, 0), Ok(StrategyResolution::AttackBoost(1000)));
    charge(&mut engine, &mut game, 1);
    let report = engine.attack_enemy(&mut game, 0, 0).unwrap();

    assert_eq!(report.clash.hero_attack, 3500);
    assert!(report.enemy_defeated);
    assert_eq!(game.player_zone().get(0).unwrap().attack, 2500);
    assert_eq!(game.boosts().attack, 1000);
}

/// Test extreme configured boosts saturate instead of overflowing.
#[test]
fn test_extreme_boosts_saturate() {
    let json = r#"{
        "deck": {
            "attack_boost": 9223372036854775807,
            "health_boost": 9223372036854775807
        }
    }"#;
    let config = RulesConfig::from_json(json).unwrap();
    let attack = CardEffect::AttackBoost { value: config.deck.attack_boost };
    let health = CardEffect::HealthBoost { value: config.deck.health_boost };
    let mut engine = BattleEngine::new(config).unwrap();
    let mut game = engine.sandbox(8);
    game.spawn(ZoneKind::PlayerZone, hero("Lu Bu", 6000, 7));
    game.spawn(ZoneKind::EnemyZone, enemy("Dong Zhuo", 5000, 8));
    game.spawn(ZoneKind::EnemyZone, enemy("Cao Cao", 3200, 4));
    for effect in [attack, attack, health, health] {
        game.spawn(ZoneKind::Hand, strategy("Stratagem", Some(effect)));
        engine.use_strategy(&mut game, 0).unwrap();
    }

    assert_eq!(game.boosts().attack, i64::MAX);
    assert_eq!(game.boosts().health, i64::MAX);

    charge(&mut engine, &mut game, 1);
    let report = engine.attack_enemy(&mut game, 0, 0).unwrap();

    assert_eq!(report.clash.hero_attack, i64::MAX);
    assert_eq!(report.clash.outcome, ClashOutcome::HeroStronger);
    assert!(report.enemy_defeated);
    assert_eq!(game.enemy_zone().len(), 1);
}

/// Test attacking with no energy changes nothing.
#[test]
fn test_attack_without_energy() {
    let mut engine = BattleEngine::new(no_luck()).unwrap();
    let mut game = engine.sandbox(3);
    game.spawn(ZoneKind::PlayerZone, hero("Guan Yu", 4500, 6));
    game.spawn(ZoneKind::EnemyZone, enemy("Cao Cao", 3200, 4));
    let before = game.clone();

    assert_eq!(engine.attack_enemy(&mut game, 0, 0), Err(ActionError::NoEnergy));
    assert_eq!(game, before);
    assert_eq!(engine.last_message(), Some("Not enough energy to attack!"));
}

/// Test the order of attack preconditions.
#[test]
fn test_attack_precondition_order() {
    let mut engine = BattleEngine::new(no_luck()).unwrap();
    let mut game = engine.sandbox(3);

    assert_eq!(engine.attack_enemy(&mut game, 0, 0), Err(ActionError::NoHero { index: 0 }));

    game.spawn(ZoneKind::PlayerZone, hero("Guan Yu", 4500, 6));
    assert_eq!(engine.attack_enemy(&mut game, 0, 2), Err(ActionError::NoEnemy { index: 2 }));

    game.spawn(ZoneKind::EnemyZone, enemy("Cao Cao", 3200, 4));
    assert_eq!(engine.attack_enemy(&mut game, 0, 0), Err(ActionError::NoEnergy));
}

/// Test deploying into a full zone is refused before the card is inspected.
#[test]
fn test_play_hero_into_full_zone() {
    let mut engine = BattleEngine::new(no_luck()).unwrap();
    let mut game = engine.sandbox(5);
    for name in ["Cao Zhen", "Sun Ce", "Guan Yu"] {
        game.spawn(ZoneKind::PlayerZone, hero(name, 4000, 6));
    }
    game.spawn(ZoneKind::Hand, hero("Zhang Fei", 3000, 6));
    let before = game.clone();

    assert_eq!(engine.play_hero(&mut game, 0), Err(ActionError::ZoneFull { capacity: 3 }));
    // Full zone wins over a bad index.
    assert_eq!(engine.play_hero(&mut game, 9), Err(ActionError::ZoneFull { capacity: 3 }));
    assert_eq!(game, before);
    assert_eq!(engine.last_message(), Some("Player zone is full! (3 heroes deployed)"));
}

/// Test deploying moves the hero to the back of the zone.
#[test]
fn test_play_hero_appends() {
    let mut engine = BattleEngine::new(no_luck()).unwrap();
    let mut game = engine.sandbox(5);
    game.spawn(ZoneKind::PlayerZone, hero("Cao Zhen", 4500, 7));
    game.spawn(ZoneKind::Hand, energy());
    let zhang_fei = game.spawn(ZoneKind::Hand, hero("Zhang Fei", 3000, 6)).unwrap();

    assert_eq!(engine.play_hero(&mut game, 1), Ok(zhang_fei));
    assert_eq!(game.player_zone().position(zhang_fei), Some(1));
    assert_eq!(game.hand().len(), 1);
    assert_eq!(engine.last_message(), Some("Zhang Fei deployed to player zone."));
}

/// Test energy cards are the only thing `use_energy` accepts.
#[test]
fn test_use_energy_rejects_heroes() {
    let mut engine = BattleEngine::new(no_luck()).unwrap();
    let mut game = engine.sandbox(5);
    game.spawn(ZoneKind::Hand, hero("Liu Bei", 3000, 6));
    game.spawn(ZoneKind::Hand, energy());
    let before = game.clone();

    let err = engine.use_energy(&mut game, 0).unwrap_err();
    assert_eq!(
        err,
        ActionError::InvalidCard {
            index: 0,
            expected: CardCategory::Energy
        }
    );
    assert_eq!(game, before);

    assert_eq!(engine.use_energy(&mut game, 1), Ok(1));
    assert_eq!(engine.last_message(), Some("Energy card used. Energy pool increased to 1."));
}

/// Test the three strategy branches.
#[test]
fn test_strategy_branches() {
    let mut engine = BattleEngine::new(no_luck()).unwrap();
    let mut game = engine.sandbox(5);
    game.spawn(ZoneKind::Hand, strategy("Ambush", Some(CardEffect::HealthBoost { value: 1 })));
    game.spawn(ZoneKind::Hand, strategy("Empty Fort", Some(CardEffect::Burn { cooldown: 2 })));
    game.spawn(ZoneKind::Hand, strategy("Spy Report", None));

    assert_eq!(engine.use_strategy(&mut game, 0), Ok(StrategyResolution::HealthBoost(1)));
    assert_eq!(game.boosts().health, 1);
    assert_eq!(engine.last_message(), Some("All heroes' luck increased by 1."));

    // An effect a strategy can't resolve still spends the card.
    assert_eq!(engine.use_strategy(&mut game, 0), Ok(StrategyResolution::NoEffect));
    assert_eq!(game.hand().len(), 1);
    assert_eq!(game.boosts().health, 1);
    assert_eq!(game.boosts().attack, 0);

    // No effect at all is not a usable strategy.
    assert_eq!(
        engine.use_strategy(&mut game, 0),
        Err(ActionError::InvalidCard {
            index: 0,
            expected: CardCategory::Strategy
        })
    );
    assert_eq!(game.hand().len(), 1);
}

/// Test the hand limit blocks turn advancement.
#[test]
fn test_hand_limit_blocks_next_turn() {
    let mut engine = BattleEngine::new(no_luck()).unwrap();
    let mut game = engine.sandbox(8);
    game.spawn(ZoneKind::EnemyZone, enemy("Cao Cao", 3200, 4));
    for _ in 0..3 {
        game.spawn(ZoneKind::Hand, energy());
    }

    assert_eq!(
        engine.next_turn(&mut game),
        Err(ActionError::TooManyCards { held: 3, limit: 3 })
    );
    assert_eq!(game.turn(), 0);

    engine.use_energy(&mut game, 0).unwrap();
    assert_eq!(engine.next_turn(&mut game).map(|t| t.turn), Ok(1));
}

/// Test an attack still resolves when the following turn is blocked.
#[test]
fn test_attack_with_blocked_turn() {
    let mut engine = BattleEngine::new(no_luck()).unwrap();
    let mut game = engine.sandbox(8);
    game.spawn(ZoneKind::PlayerZone, hero("Guan Yu", 4500, 6));
    game.spawn(ZoneKind::EnemyZone, enemy("Cao Cao", 3200, 4));
    game.spawn(ZoneKind::EnemyZone, enemy("Xu Chu", 3600, 5));
    for _ in 0..4 {
        game.spawn(ZoneKind::Hand, energy());
    }
    engine.use_energy(&mut game, 0).unwrap();

    let report = engine.attack_enemy(&mut game, 0, 0).unwrap();

    assert!(report.enemy_defeated);
    assert_eq!(report.turn, TurnAdvance::Blocked(ActionError::TooManyCards { held: 3, limit: 3 }));
    assert_eq!(game.turn(), 0);
    assert_eq!(game.enemy_zone().len(), 1);
}

/// Test defeating the last enemy wins immediately.
#[test]
fn test_last_enemy_wins() {
    let mut engine = BattleEngine::new(no_luck()).unwrap();
    let mut game = engine.sandbox(13);
    game.spawn(ZoneKind::PlayerZone, hero("Guan Yu", 4500, 6));
    game.spawn(ZoneKind::EnemyZone, enemy("Cao Cao", 3200, 4));
    charge(&mut engine, &mut game, 1);

    let report = engine.attack_enemy(&mut game, 0, 0).unwrap();

    assert_eq!(report.outcome, Some(GameResult::Won));
    assert_eq!(report.turn, TurnAdvance::GameOver);
    assert_eq!(game.status(), GameStatus::Won);
    assert_eq!(game.turn(), 0);
    assert!(game.is_restart_armed());
    assert!(engine.last_message().is_some_and(|m| m.ends_with("You won!")));

    // Nothing more can happen in a finished game.
    assert_eq!(
        engine.draw_card(&mut game),
        Err(ActionError::NotInProgress(GameStatus::Won))
    );
}

/// Test losing the last hero after the turn limit loses the game.
#[test]
fn test_last_hero_lost_after_turn_limit() {
    let mut engine = BattleEngine::new(no_luck()).unwrap();
    let mut game = engine.sandbox(21);
    game.spawn(ZoneKind::PlayerZone, hero("Huang Cheng", 500, 3));
    game.spawn(ZoneKind::EnemyZone, enemy("Dong Zhuo", 4200, 6));
    game.spawn(ZoneKind::EnemyZone, enemy("Guo Si", 4400, 6));

    for _ in 0..15 {
        engine.next_turn(&mut game).unwrap();
    }
    assert_eq!(game.turn(), 15);
    assert_eq!(game.status(), GameStatus::InProgress);

    charge(&mut engine, &mut game, 1);
    let report = engine.attack_enemy(&mut game, 0, 0).unwrap();

    assert!(report.hero_defeated);
    assert_eq!(report.outcome, Some(GameResult::Lost));
    assert_eq!(game.status(), GameStatus::Lost);
    assert_eq!(
        game.outcome().map(|o| o.message.as_str()),
        Some("You lost! No more heroes in your deck by turn 15.")
    );
}

/// Test luck rolls come from the game's RNG and are bounded by health.
#[test]
fn test_luck_is_bounded() {
    let mut engine = BattleEngine::new(RulesConfig::default()).unwrap();
    let mut game = engine.sandbox(77);
    game.spawn(ZoneKind::PlayerZone, hero("Guan Yu", 4000, 6));
    game.spawn(ZoneKind::EnemyZone, enemy("Cao Cao", 3200, 4));
    game.spawn(ZoneKind::EnemyZone, enemy("Xu Chu", 3600, 5));
    charge(&mut engine, &mut game, 1);

    let report = engine.attack_enemy(&mut game, 0, 0).unwrap();

    // Hero bound is health (6), enemy bound is health * 100 (400).
    assert!((0..6).contains(&report.clash.hero_luck));
    assert!((0..400).contains(&report.clash.enemy_luck));
    assert_eq!(report.clash.hero_attack, 4000 + report.clash.hero_luck);
    assert!(report.enemy_defeated);
}

/// Test every operation reaches the sinks, whether it succeeds or not.
#[test]
fn test_sinks_see_every_operation() {
    let renders = Rc::new(RefCell::new(0));
    let messages = Rc::new(RefCell::new(Vec::new()));
    let render_count = Rc::clone(&renders);
    let log = Rc::clone(&messages);

    let mut engine = BattleEngine::new(RulesConfig::default())
        .unwrap()
        .with_render_sink(move |_game: &Game| *render_count.borrow_mut() += 1)
        .with_action_log(move |message: &str| log.borrow_mut().push(message.to_string()));
    let mut game = Game::new(4);

    engine.initialize(&mut game);
    let _ = engine.next_turn(&mut game);
    let _ = engine.draw_card(&mut game);

    assert_eq!(*renders.borrow(), 3);
    let messages = messages.borrow();
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[0], "Game started.");
    assert_eq!(
        messages[1],
        "You cannot proceed to the next turn with 3 cards in hand (limit 3)."
    );
    assert!(messages[2].starts_with("Drew "));
}
