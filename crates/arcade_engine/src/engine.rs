//! Core engine implementation
//!
//! The engine owns input state, frame timing and the per-frame draw list, and
//! drives an [`Application`] through a fixed order each frame:
//! host input sampling, application update, input edge roll-over, draw,
//! sound dispatch.

use crate::{
    application::Application,
    audio::SoundCue,
    foundation::time::Timer,
    input::InputManager,
    render::DrawList,
};
use thiserror::Error;

/// Platform side of the main loop
///
/// Windowing, rendering and audio backends live behind this trait.
pub trait Host {
    /// Feed pending platform input into `input`. Returns `false` to close.
    fn poll(&mut self, input: &mut InputManager) -> bool;

    /// Present one frame of draw commands
    fn present(&mut self, frame: &DrawList);

    /// Play a sound cue
    fn play(&mut self, cue: SoundCue);
}

/// Main engine struct
pub struct Engine {
    /// Input handling system
    pub input: InputManager,

    /// Frame timing
    timer: Timer,

    /// Last recorded frame
    frame: DrawList,

    /// Engine configuration
    config: EngineConfig,

    /// Whether the engine should continue running
    running: bool,
}

impl Engine {
    /// Create a new engine instance
    pub fn new(config: EngineConfig) -> Self {
        log::info!("Initializing engine...");
        Self {
            input: InputManager::new(),
            timer: Timer::new(),
            frame: DrawList::new(),
            config,
            running: true,
        }
    }

    /// Run the engine main loop with the given host and application
    pub fn run<H: Host, A: Application>(
        config: EngineConfig,
        host: &mut H,
        app: &mut A,
    ) -> Result<(), EngineError> {
        let mut engine = Self::new(config);

        app.initialize(&mut engine)
            .map_err(|e| EngineError::ApplicationError(format!("App initialization: {}", e)))?;

        log::info!("Starting main loop...");

        while engine.running {
            if !host.poll(&mut engine.input) {
                engine.quit();
                break;
            }

            let delta_time = engine.next_delta();
            engine.step(app, delta_time)?;

            host.present(&engine.frame);
            for cue in app.drain_sounds() {
                host.play(cue);
            }

            if let Some(max_frames) = engine.config.max_frames {
                if engine.timer.frame_count() >= max_frames {
                    engine.quit();
                }
            }
        }

        app.cleanup(&mut engine);

        log::info!(
            "Engine shutdown complete after {} frames ({:.1} simulated seconds)",
            engine.timer.frame_count(),
            engine.timer.total_time()
        );
        Ok(())
    }

    fn next_delta(&mut self) -> f32 {
        match self.config.fixed_timestep {
            Some(step) => self.timer.advance(step),
            None => self.timer.update(),
        }
        self.timer.delta_time()
    }

    /// Run one frame of `app` with `delta_time` seconds elapsed.
    ///
    /// The delta is clamped to `[0, max_delta]` so a stalled host cannot
    /// tunnel entities through each other.
    pub fn step<A: Application>(&mut self, app: &mut A, delta_time: f32) -> Result<(), EngineError> {
        let delta_time = delta_time.clamp(0.0, self.config.max_delta);

        app.update(self, delta_time)
            .map_err(|e| EngineError::ApplicationError(format!("App update: {}", e)))?;
        self.input.end_frame();

        self.frame.clear();
        app.draw(&mut self.frame);

        if app.should_exit() {
            self.quit();
        }
        Ok(())
    }

    /// Request engine shutdown
    pub fn quit(&mut self) {
        if self.running {
            log::info!("Engine shutdown requested");
        }
        self.running = false;
    }

    /// Draw commands recorded by the last frame
    pub fn frame(&self) -> &DrawList {
        &self.frame
    }

    /// Engine configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Get the current frame delta time
    pub fn delta_time(&self) -> f32 {
        self.timer.delta_time()
    }
}

/// Engine configuration
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Largest delta handed to the application, in seconds
    pub max_delta: f32,

    /// Step by a constant delta instead of the wall clock
    pub fixed_timestep: Option<f32>,

    /// Stop after this many frames
    pub max_frames: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_delta: 0.1,
            fixed_timestep: None,
            max_frames: None,
        }
    }
}

impl EngineConfig {
    /// Fixed 60 Hz stepping for hosts without a real clock
    pub fn headless(max_frames: u64) -> Self {
        Self {
            fixed_timestep: Some(1.0 / 60.0),
            max_frames: Some(max_frames),
            ..Self::default()
        }
    }
}

/// Engine errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// Application error
    #[error("Application error: {0}")]
    ApplicationError(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::AppError;
    use crate::audio::SoundId;
    use crate::input::KeyCode;
    use crate::render::{Color, DrawContext};
    use crate::foundation::math::Point2;
    use approx::assert_relative_eq;

    #[derive(Default)]
    struct Counter {
        updates: u32,
        last_delta: f32,
        presses: u32,
        quit_after: Option<u32>,
    }

    impl Application for Counter {
        fn update(&mut self, engine: &mut Engine, delta_time: f32) -> Result<(), AppError> {
            self.updates += 1;
            self.last_delta = delta_time;
            if engine.input.pressed(KeyCode::Space) {
                self.presses += 1;
            }
            Ok(())
        }

        fn draw(&self, frame: &mut dyn DrawContext) {
            frame.line(Point2::origin(), Point2::new(1.0, 1.0), Color::WHITE);
        }

        fn drain_sounds(&mut self) -> Vec<SoundCue> {
            vec![SoundCue::Play {
                sound: SoundId("tick"),
                pitch: 0.0,
            }]
        }

        fn should_exit(&self) -> bool {
            self.quit_after.is_some_and(|n| self.updates >= n)
        }
    }

    struct ScriptedHost {
        presented: usize,
        played: usize,
    }

    impl Host for ScriptedHost {
        fn poll(&mut self, input: &mut InputManager) -> bool {
            input.handle_key_input(KeyCode::Space, true);
            true
        }

        fn present(&mut self, frame: &DrawList) {
            assert_eq!(frame.len(), 1);
            self.presented += 1;
        }

        fn play(&mut self, _cue: SoundCue) {
            self.played += 1;
        }
    }

    #[test]
    fn test_step_clamps_delta() {
        let mut engine = Engine::new(EngineConfig::default());
        let mut app = Counter::default();
        engine.step(&mut app, 5.0).unwrap();
        assert_relative_eq!(app.last_delta, 0.1);
        engine.step(&mut app, -1.0).unwrap();
        assert_relative_eq!(app.last_delta, 0.0);
    }

    #[test]
    fn test_step_rolls_input_edges() {
        let mut engine = Engine::new(EngineConfig::default());
        let mut app = Counter::default();
        engine.input.handle_key_input(KeyCode::Space, true);
        engine.step(&mut app, 0.016).unwrap();
        engine.step(&mut app, 0.016).unwrap();
        assert_eq!(app.presses, 1);
    }

    #[test]
    fn test_run_stops_at_frame_limit() {
        let mut host = ScriptedHost { presented: 0, played: 0 };
        let mut app = Counter::default();
        Engine::run(EngineConfig::headless(10), &mut host, &mut app).unwrap();
        assert_eq!(app.updates, 10);
        assert_eq!(host.presented, 10);
        assert_eq!(host.played, 10);
        assert_relative_eq!(app.last_delta, 1.0 / 60.0);
    }

    #[test]
    fn test_run_honors_exit_request() {
        let mut host = ScriptedHost { presented: 0, played: 0 };
        let mut app = Counter {
            quit_after: Some(3),
            ..Counter::default()
        };
        Engine::run(EngineConfig::headless(100), &mut host, &mut app).unwrap();
        assert_eq!(app.updates, 3);
    }
}
