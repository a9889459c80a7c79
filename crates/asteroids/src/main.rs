//! Headless Asteroids
//!
//! Runs a session against a scripted autopilot instead of a window, logging
//! what happens. Usage: `asteroids [config.toml] [frames]`.

use arcade_engine::audio::SoundCue;
use arcade_engine::foundation::logging;
use arcade_engine::input::{InputManager, KeyCode};
use arcade_engine::render::DrawList;
use arcade_engine::{Engine, EngineConfig, Host};
use asteroids::{GameConfig, Session};

/// Presses keys on a fixed rhythm: start, then turn, thrust and fire
struct Autopilot {
    frame: u64,
    cues: usize,
}

impl Autopilot {
    fn new() -> Self {
        Self { frame: 0, cues: 0 }
    }
}

impl Host for Autopilot {
    fn poll(&mut self, input: &mut InputManager) -> bool {
        self.frame += 1;
        let frame = self.frame;

        input.handle_key_input(KeyCode::Enter, frame % 240 == 1);
        input.handle_key_input(KeyCode::D, frame % 120 < 30);
        input.handle_key_input(KeyCode::W, frame % 180 >= 150);
        input.handle_key_input(KeyCode::Space, frame % 12 == 0);
        true
    }

    fn present(&mut self, frame: &DrawList) {
        if self.frame % 600 == 0 {
            log::debug!("Frame {}: {} draw commands", self.frame, frame.len());
        }
    }

    fn play(&mut self, cue: SoundCue) {
        self.cues += 1;
        log::trace!("Sound {:?}", cue);
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    let mut args = std::env::args().skip(1);
    let config_path = args.next().unwrap_or_else(|| "asteroids.toml".to_string());
    let frames = match args.next() {
        Some(frames) => frames.parse::<u64>()?,
        None => 3600,
    };

    let config = GameConfig::load_or_default(&config_path)?;
    let mut session = Session::new(config)?;
    let mut host = Autopilot::new();

    Engine::run(EngineConfig::headless(frames), &mut host, &mut session)?;

    log::info!(
        "Final score {} (wave {}, {} lives, {} sound cues)",
        session.progression().score(),
        session.progression().wave(),
        session.progression().lives(),
        host.cues
    );
    Ok(())
}
