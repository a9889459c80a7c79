//! End-to-end game flows driven through a session

use arcade_engine::audio::SoundCue;
use arcade_engine::ecs::EntityId;
use arcade_engine::events::Scheduler;
use arcade_engine::foundation::math::{Point2, Vec2};
use arcade_engine::input::{InputManager, KeyCode};
use arcade_engine::render::DrawList;
use arcade_engine::{Application, Engine, EngineConfig, Host};
use asteroids::assets::sounds;
use asteroids::components::{Actor, Asteroid, Bullet, Ufo};
use asteroids::config::DelayRange;
use asteroids::{Actions, Command, GameConfig, GamePhase, Progression, Session, World};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn config() -> GameConfig {
    let mut config = GameConfig::default();
    config.gameplay.rng_seed = Some(7);
    config
}

/// Session already playing, with wave one held back
fn quiet_session(mut config: GameConfig) -> Session {
    config.spawning.wave_delay = 100.0;
    let mut session = Session::new(config).unwrap();
    session.start();
    session
}

fn idle(session: &mut Session, dt: f32, frames: usize) {
    for _ in 0..frames {
        session.advance(&Actions::default(), dt).unwrap();
    }
}

fn still_rock(session: &mut Session, x: f32, y: f32, tier: u8) -> EntityId {
    let asteroid = Asteroid::new(Point2::new(x, y), 0.0, 0.0, tier).unwrap();
    session.world_mut().spawn_asteroid(asteroid)
}

fn parked_ufo(session: &mut Session, x: f32, y: f32) -> EntityId {
    let mut rng = StdRng::seed_from_u64(3);
    let screen = session.config().gameplay.screen();
    let mut ufo = Ufo::new(true, false, screen, &mut rng);
    ufo.set_center(Point2::new(x, y));
    session.world_mut().spawn(Actor::Ufo(ufo))
}

fn player_shot(session: &mut Session, x: f32, y: f32) {
    let shot = Bullet::new(Point2::new(x, y), Vec2::zeros(), true);
    session.world_mut().spawn(Actor::Bullet(shot));
}

fn expiries(session: &Session) -> usize {
    session
        .scheduler()
        .pending()
        .filter(|s| matches!(s.command, Command::Expire(_)))
        .count()
}

fn fire() -> Actions {
    Actions {
        fire: true,
        ..Actions::default()
    }
}

#[test]
fn test_first_wave_arrives_after_delay() {
    let mut session = Session::new(config()).unwrap();
    session.start();
    assert_eq!(session.progression().wave(), 1);
    assert!(session.progression().wave_pending());

    idle(&mut session, 0.25, 3);
    assert_eq!(session.world().asteroid_count(), 0);

    idle(&mut session, 0.25, 1);
    assert_eq!(session.world().asteroid_count(), 4);
    assert!(!session.progression().wave_pending());
}

#[test]
fn test_cleared_wave_queues_a_bigger_one() {
    let mut session = Session::new(config()).unwrap();
    session.start();
    idle(&mut session, 0.25, 4);
    assert_eq!(session.world().asteroid_count(), 4);

    let asteroids = session.world().groups.asteroids;
    session.world_mut().registry.destroy_group(asteroids);
    idle(&mut session, 0.01, 1);

    assert_eq!(session.progression().wave(), 2);
    assert!(session.scheduler().any(|c| *c == Command::SpawnWave { count: 5 }));

    idle(&mut session, 1.0, 1);
    assert_eq!(session.world().asteroid_count(), 5);
}

#[test]
fn test_last_life_ends_in_game_over_then_menu() {
    let mut config = config();
    config.gameplay.starting_lives = 1;
    let mut session = quiet_session(config);
    still_rock(&mut session, 600.0, 400.0, 3);

    idle(&mut session, 0.25, 1);
    assert_eq!(session.progression().lives(), 0);
    assert!(session.world().player().is_none());
    assert_eq!(session.phase(), GamePhase::Playing);

    idle(&mut session, 0.25, 7);
    assert_eq!(session.phase(), GamePhase::Playing);
    idle(&mut session, 0.25, 1);
    assert_eq!(session.phase(), GamePhase::GameOver);

    idle(&mut session, 0.25, 11);
    assert_eq!(session.phase(), GamePhase::GameOver);
    idle(&mut session, 0.25, 1);
    assert_eq!(session.phase(), GamePhase::Menu);
    assert!(session.world().registry.is_empty());
    assert!(session.scheduler().is_empty());
}

#[test]
fn test_respawn_waits_for_clear_spawn_point() {
    let mut session = quiet_session(config());
    still_rock(&mut session, 600.0, 400.0, 3);

    idle(&mut session, 0.25, 1);
    assert_eq!(session.progression().lives(), 2);
    assert_eq!(session.phase(), GamePhase::AwaitingRespawn { ready: false });

    idle(&mut session, 0.25, 8);
    assert_eq!(session.phase(), GamePhase::AwaitingRespawn { ready: true });
    assert!(session.world().player().is_none());

    let asteroids = session.world().groups.asteroids;
    session.world_mut().registry.destroy_group(asteroids);
    idle(&mut session, 0.25, 1);

    assert_eq!(session.phase(), GamePhase::Playing);
    let origin = session.world().player_origin().unwrap();
    assert_eq!(origin, Point2::new(600.0, 400.0));
}

#[test]
fn test_shooting_an_asteroid_scores_and_awards_extra_life() {
    let mut config = config();
    config.scoring.extra_life_every = 100;
    let mut session = quiet_session(config);
    still_rock(&mut session, 700.0, 400.0, 3);
    session.drain_sounds();

    session.advance(&fire(), 0.1).unwrap();
    let bullets = session.world().groups.player_bullets;
    assert_eq!(session.world().registry.group_len(bullets), 1);
    assert_eq!(session.progression().score(), 0);

    idle(&mut session, 0.1, 1);
    assert_eq!(session.progression().score(), 100);
    assert_eq!(session.progression().lives(), 4);
    assert_eq!(session.world().asteroid_count(), 2);
    assert_eq!(session.world().registry.group_len(bullets), 0);

    let cues = session.drain_sounds();
    assert!(cues.iter().any(|cue| cue.sound() == sounds::FIRE));
    assert!(cues.iter().any(|cue| cue.sound() == sounds::EXPLOSION));
    assert!(cues.iter().any(|cue| cue.sound() == sounds::EXTRA_LIFE));
}

#[test]
fn test_ufo_bullet_breaks_asteroid_without_points() {
    let mut session = quiet_session(config());
    still_rock(&mut session, 200.0, 200.0, 2);
    let shot = Bullet::new(Point2::new(200.0, 200.0), Vec2::zeros(), false);
    session.world_mut().spawn(Actor::Bullet(shot));

    idle(&mut session, 0.1, 1);
    assert_eq!(session.world().asteroid_count(), 2);
    assert_eq!(session.progression().score(), 0);
    assert_eq!(session.progression().lives(), 3);
}

#[test]
fn test_expiry_of_spent_bullet_is_harmless() {
    let mut session = quiet_session(config());
    still_rock(&mut session, 700.0, 400.0, 3);

    session.advance(&fire(), 0.1).unwrap();
    idle(&mut session, 0.1, 1);
    assert_eq!(session.world().asteroid_count(), 2);
    // the spent bullet and the debris burst
    assert_eq!(expiries(&session), 2);
    let live = session.world().registry.len();

    idle(&mut session, 0.5, 2);
    assert_eq!(expiries(&session), 1);
    assert_eq!(session.world().registry.len(), live);
    assert_eq!(session.progression().score(), 100);
}

#[test]
fn test_asteroid_hit_leaves_debris_until_its_lifetime_ends() {
    let mut session = quiet_session(config());
    still_rock(&mut session, 700.0, 400.0, 3);
    let effects = session.world().groups.effects;

    session.advance(&fire(), 0.1).unwrap();
    idle(&mut session, 0.1, 1);
    assert_eq!(session.world().registry.group_len(effects), 1);
    let burst = session.world().registry.first_in_group(effects).unwrap();
    assert!(matches!(
        session.world().registry.get(burst),
        Some(Actor::Particles(p)) if p.count() == 30
    ));

    idle(&mut session, 0.5, 5);
    assert_eq!(session.world().registry.group_len(effects), 1);
    idle(&mut session, 0.5, 1);
    assert_eq!(session.world().registry.group_len(effects), 0);
    assert!(!session.world().registry.contains(burst));
}

#[test]
fn test_bonus_life_after_last_death_brings_player_back() {
    let mut config = config();
    config.gameplay.starting_lives = 1;
    config.scoring.extra_life_every = 100;
    let mut session = quiet_session(config);
    let crusher = still_rock(&mut session, 600.0, 400.0, 1);

    idle(&mut session, 0.25, 1);
    assert_eq!(session.progression().lives(), 0);

    // a shot already on its way lands after the ship is gone
    still_rock(&mut session, 200.0, 200.0, 3);
    player_shot(&mut session, 200.0, 200.0);
    idle(&mut session, 0.25, 1);
    assert_eq!(session.progression().score(), 100);
    assert_eq!(session.progression().lives(), 1);
    assert_eq!(session.phase(), GamePhase::AwaitingRespawn { ready: false });

    session.world_mut().destroy(crusher);
    idle(&mut session, 0.25, 10);
    assert_eq!(session.phase(), GamePhase::Playing);
    assert!(session.world().player().is_some());
    assert_eq!(session.progression().lives(), 1);
}

#[test]
fn test_ufo_arrives_when_its_timer_fires() {
    let mut config = config();
    let quick = DelayRange { min: 0.5, max: 0.6 };
    config.spawning.ufo_delay_common = quick;
    config.spawning.ufo_delay_rare = quick;
    let mut session = quiet_session(config);
    still_rock(&mut session, 600.0, 100.0, 1);

    idle(&mut session, 0.1, 1);
    assert!(session.progression().ufo_pending());
    assert_eq!(session.world().ufo_count(), 0);

    idle(&mut session, 0.1, 7);
    assert_eq!(session.world().ufo_count(), 1);
    assert!(!session.progression().ufo_pending());
    assert!(!session.scheduler().any(|c| *c == Command::SpawnUfo));
}

#[test]
fn test_destroyed_ufo_rearms_its_timer() {
    let mut session = quiet_session(config());
    parked_ufo(&mut session, 300.0, 300.0);
    still_rock(&mut session, 300.0, 300.0, 2);
    assert!(!session.progression().ufo_pending());

    idle(&mut session, 0.1, 1);
    assert_eq!(session.world().ufo_count(), 0);
    assert_eq!(session.world().asteroid_count(), 2);
    assert_eq!(session.progression().score(), 0);
    assert!(session.progression().ufo_pending());
    assert!(session.scheduler().any(|c| *c == Command::SpawnUfo));
}

#[test]
fn test_ufos_cleared_on_death_and_on_respawn() {
    let mut session = quiet_session(config());
    parked_ufo(&mut session, 100.0, 100.0);
    let crusher = still_rock(&mut session, 600.0, 400.0, 3);

    idle(&mut session, 0.25, 1);
    assert_eq!(session.progression().lives(), 2);
    assert_eq!(session.world().ufo_count(), 0);

    session.world_mut().destroy(crusher);
    parked_ufo(&mut session, 100.0, 100.0);
    idle(&mut session, 0.25, 7);
    assert_eq!(session.world().ufo_count(), 1);
    idle(&mut session, 0.25, 1);
    assert_eq!(session.phase(), GamePhase::Playing);
    assert_eq!(session.world().ufo_count(), 0);
}

#[test]
fn test_ufo_delays_split_between_common_and_rare_ranges() {
    let config = GameConfig::default();
    let mut world = World::new().unwrap();
    let mut scheduler = Scheduler::new();
    let mut progression = Progression::new();
    let mut rng = StdRng::seed_from_u64(11);
    progression.start(&mut world, &mut scheduler, &config);
    world.spawn_asteroid(Asteroid::new(Point2::new(50.0, 50.0), 0.0, 0.0, 3).unwrap());

    let draws = 4000;
    let mut common = 0;
    for _ in 0..draws {
        scheduler.clear_all();
        progression.ufo_spawn_due();
        progression.arm_ufo(&world, &mut scheduler, &mut rng, &config.spawning);
        let delay = scheduler
            .pending()
            .find(|s| s.command == Command::SpawnUfo)
            .map(|s| s.remaining)
            .unwrap();
        if (5.0..10.0).contains(&delay) {
            common += 1;
        } else {
            assert!((15.0..25.0).contains(&delay), "delay {delay} in neither range");
        }
    }

    let share = f64::from(common) / f64::from(draws);
    assert!((0.72..0.78).contains(&share), "common share {share}");
}

#[test]
fn test_enter_starts_game_through_engine() {
    let mut session = Session::new(config()).unwrap();
    let mut engine = Engine::new(EngineConfig::headless(1));

    engine.step(&mut session, 1.0 / 60.0).unwrap();
    assert_eq!(session.phase(), GamePhase::Menu);
    assert!(engine.frame().is_empty());

    engine.input.handle_key_input(KeyCode::Enter, true);
    engine.step(&mut session, 1.0 / 60.0).unwrap();
    assert_eq!(session.phase(), GamePhase::Playing);
    assert!(!engine.frame().is_empty());
}

struct ScriptedHost {
    polls: u64,
    presented: u64,
    cues: Vec<SoundCue>,
}

impl Host for ScriptedHost {
    fn poll(&mut self, input: &mut InputManager) -> bool {
        self.polls += 1;
        input.handle_key_input(KeyCode::Enter, self.polls == 1);
        input.handle_key_input(KeyCode::Space, self.polls == 10);
        true
    }

    fn present(&mut self, _frame: &DrawList) {
        self.presented += 1;
    }

    fn play(&mut self, cue: SoundCue) {
        self.cues.push(cue);
    }
}

#[test]
fn test_headless_run_plays_a_wave() {
    let mut session = Session::new(config()).unwrap();
    let mut host = ScriptedHost {
        polls: 0,
        presented: 0,
        cues: Vec::new(),
    };

    Engine::run(EngineConfig::headless(90), &mut host, &mut session).unwrap();

    assert_eq!(host.presented, 90);
    assert_eq!(session.phase(), GamePhase::Playing);
    assert_eq!(session.progression().wave(), 1);
    assert!(!session.progression().wave_pending());
    assert!(host.cues.iter().any(|cue| cue.sound() == sounds::FIRE));
}
