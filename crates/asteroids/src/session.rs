//! Game session
//!
//! The root object of a running game. It owns the world, the scheduler, the
//! progression state and the RNG, and runs each frame in a fixed order:
//!
//! 1. fire due scheduled commands
//! 2. update every entity in registration order
//! 3. resolve collisions
//! 4. respawn, wave and UFO checks
//!
//! Drawing is a separate, read-only pass.

use crate::assets::sounds;
use crate::collisions::{self, CollisionEvent};
use crate::commands::Command;
use crate::components::{Actor, Asteroid, Bullet, FrameContext, Spawn, Ufo};
use crate::config::GameConfig;
use crate::controls::Actions;
use crate::error::GameError;
use crate::progression::{GamePhase, Progression};
use crate::world::World;
use arcade_engine::audio::{SoundCue, SoundQueue};
use arcade_engine::events::Scheduler;
use arcade_engine::foundation::math::{Point2, Rect};
use arcade_engine::input::InputManager;
use arcade_engine::render::{Color, DrawContext};
use arcade_engine::{AppError, Application, Engine};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A running game
pub struct Session {
    config: GameConfig,
    world: World,
    scheduler: Scheduler<Command>,
    progression: Progression,
    rng: StdRng,
    sounds: SoundQueue,
    debug: bool,
    exit_requested: bool,
}

impl Session {
    /// Create a session sitting in the menu
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        let rng = match config.gameplay.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self {
            debug: config.gameplay.debug_mode,
            world: World::new()?,
            scheduler: Scheduler::new(),
            progression: Progression::new(),
            rng,
            sounds: SoundQueue::new(),
            exit_requested: false,
            config,
        })
    }

    /// Game configuration
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Current phase
    pub fn phase(&self) -> GamePhase {
        self.progression.phase()
    }

    /// Score, lives and wave
    pub fn progression(&self) -> &Progression {
        &self.progression
    }

    /// The entity world
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable access to the entity world
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Pending scheduled commands
    pub fn scheduler(&self) -> &Scheduler<Command> {
        &self.scheduler
    }

    /// Debug drawing is on
    pub fn is_debug(&self) -> bool {
        self.debug
    }

    /// Begin a new game regardless of the current phase
    pub fn start(&mut self) {
        self.progression
            .start(&mut self.world, &mut self.scheduler, &self.config);
    }

    /// Run one frame from raw input
    pub fn frame(&mut self, input: &InputManager, dt: f32) -> Result<(), GameError> {
        let actions = Actions::sample(&self.config.controls, input);
        self.advance(&actions, dt)
    }

    /// Run one frame from already-mapped actions
    pub fn advance(&mut self, actions: &Actions, dt: f32) -> Result<(), GameError> {
        if actions.exit {
            self.exit_requested = true;
        }
        if actions.toggle_debug {
            self.debug = !self.debug;
            log::info!("Debug mode {}", if self.debug { "on" } else { "off" });
        }

        for command in self.scheduler.tick(dt) {
            self.apply(command);
        }

        if self.progression.phase() == GamePhase::Menu {
            if actions.start {
                self.start();
            }
            return Ok(());
        }

        self.update_entities(actions, dt);
        self.resolve_collisions()?;

        self.progression.try_respawn(&mut self.world, &self.config);
        self.progression
            .check_wave_cleared(&self.world, &mut self.scheduler, &self.config.spawning);
        self.progression.arm_ufo(
            &self.world,
            &mut self.scheduler,
            &mut self.rng,
            &self.config.spawning,
        );
        Ok(())
    }

    fn apply(&mut self, command: Command) {
        log::trace!("Firing {:?}", command);
        match command {
            Command::SpawnWave { count } => {
                self.progression.wave_spawned();
                if !self.progression.phase().in_game() {
                    return;
                }
                let screen = self.config.gameplay.screen();
                for _ in 0..count {
                    let asteroid = Asteroid::at_random_edge(screen, &mut self.rng);
                    self.world.spawn_asteroid(asteroid);
                }
                log::info!("Wave {}: {} asteroids", self.progression.wave(), count);
            }
            Command::RespawnReady => self.progression.respawn_ready(),
            Command::GameOver { death } => {
                self.progression
                    .enter_game_over(death, &mut self.scheduler, &self.config);
            }
            Command::ReturnToMenu => self
                .progression
                .return_to_menu(&mut self.world, &mut self.scheduler),
            Command::SpawnUfo => {
                if !self.progression.ufo_spawn_due() {
                    return;
                }
                let small = self.rng.gen_bool(self.config.spawning.small_ufo_chance);
                let from_left = self.rng.gen_bool(0.5);
                let ufo = Ufo::new(from_left, small, self.config.gameplay.screen(), &mut self.rng);
                self.world.spawn(Actor::Ufo(ufo));
                log::debug!("UFO ({}) incoming", if small { "small" } else { "big" });
            }
            Command::Expire(id) => {
                if !self.world.destroy(id) {
                    log::trace!("{:?} already gone at expiry", id);
                }
            }
        }
    }

    fn update_entities(&mut self, actions: &Actions, dt: f32) {
        let Self {
            config,
            world,
            scheduler,
            rng,
            sounds,
            ..
        } = self;
        let config: &GameConfig = config;
        let groups = world.groups;
        let screen = config.gameplay.screen();
        let mut spawns = Vec::new();

        world.registry.update_all(|registry, id| {
            let player_origin = groups.player_origin(registry);
            let Some(actor) = registry.get_mut(id) else {
                return;
            };
            actor.update(&mut FrameContext {
                dt,
                actions,
                screen,
                player_origin,
                rng: &mut *rng,
                spawns: &mut spawns,
                sounds: &mut *sounds,
                config,
            });

            for spawn in spawns.drain(..) {
                let Spawn::Bullet {
                    origin,
                    direction,
                    from_player,
                } = spawn;
                let velocity = direction * config.gameplay.bullet_speed;
                let bullet = Actor::Bullet(Bullet::new(origin, velocity, from_player));
                let group = groups.for_actor(&bullet);
                let bullet_id = registry.add_to_group(bullet, group);
                scheduler.schedule(Command::Expire(bullet_id), config.gameplay.bullet_lifetime);
            }
        });
    }

    fn resolve_collisions(&mut self) -> Result<(), GameError> {
        let mut events = Vec::new();
        collisions::resolve(&mut self.world, &mut self.rng, &mut events)?;
        for event in events {
            self.handle(event)?;
        }
        Ok(())
    }

    fn handle(&mut self, event: CollisionEvent) -> Result<(), GameError> {
        self.sounds.play(sounds::EXPLOSION);
        match event {
            CollisionEvent::PlayerDestroyed { at } => {
                log::debug!("Player hit at ({:.0}, {:.0})", at.x, at.y);
                self.sounds.push(SoundCue::StopLoop { sound: sounds::THRUST });
                self.progression
                    .player_destroyed(&mut self.world, &mut self.scheduler, &self.config);
            }
            CollisionEvent::AsteroidDestroyed {
                tier,
                by_player,
                emitter,
                ..
            } => {
                if let Some(Actor::Particles(burst)) = self.world.registry.get(emitter) {
                    self.scheduler
                        .schedule(Command::Expire(emitter), burst.lifetime());
                }
                self.progression.asteroid_destroyed(
                    tier,
                    by_player,
                    &self.config.scoring,
                    &mut self.sounds,
                )?;
                self.progression
                    .revive(&mut self.world, &mut self.scheduler, &self.config);
            }
            CollisionEvent::UfoDestroyed { small, by_player, .. } => {
                self.progression
                    .ufo_destroyed(small, by_player, &self.config.scoring, &mut self.sounds);
                self.progression
                    .revive(&mut self.world, &mut self.scheduler, &self.config);
                self.progression.arm_ufo(
                    &self.world,
                    &mut self.scheduler,
                    &mut self.rng,
                    &self.config.spawning,
                );
            }
        }
        Ok(())
    }
}

impl Application for Session {
    fn initialize(&mut self, _engine: &mut Engine) -> Result<(), AppError> {
        log::info!(
            "Asteroids session ready ({}x{})",
            self.config.gameplay.screen_width,
            self.config.gameplay.screen_height
        );
        Ok(())
    }

    fn update(&mut self, engine: &mut Engine, delta_time: f32) -> Result<(), AppError> {
        self.frame(&engine.input, delta_time).map_err(AppError::from)
    }

    fn draw(&self, frame: &mut dyn DrawContext) {
        if self.progression.phase() != GamePhase::Menu {
            self.world.draw(frame, self.debug);
        }
        if self.debug {
            frame.rectangle(
                Rect::new(Point2::origin(), self.config.gameplay.screen()),
                Color::GREEN,
            );
        }
    }

    fn drain_sounds(&mut self) -> Vec<SoundCue> {
        self.sounds.drain()
    }

    fn should_exit(&self) -> bool {
        self.exit_requested
    }

    fn cleanup(&mut self, _engine: &mut Engine) {
        log::info!(
            "Session ended: score {}, wave {}",
            self.progression.score(),
            self.progression.wave()
        );
    }
}
