//! Action bindings
//!
//! Turns raw key state into the handful of logical actions the game reads.

use crate::config::ControlsConfig;
use arcade_engine::input::InputManager;

/// Logical actions for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Actions {
    /// Turn left is held
    pub turn_left: bool,
    /// Turn right is held
    pub turn_right: bool,
    /// Thrust is held
    pub thrust: bool,
    /// Fire was pressed this frame
    pub fire: bool,
    /// Debug toggle was pressed this frame
    pub toggle_debug: bool,
    /// Exit was pressed this frame
    pub exit: bool,
    /// Start was pressed this frame
    pub start: bool,
}

impl Actions {
    /// Sample `input` through `bindings`
    pub fn sample(bindings: &ControlsConfig, input: &InputManager) -> Self {
        Self {
            turn_left: input.is_down(bindings.turn_left),
            turn_right: input.is_down(bindings.turn_right),
            thrust: input.is_down(bindings.thrust),
            fire: input.pressed(bindings.fire),
            toggle_debug: input.pressed(bindings.toggle_debug),
            exit: input.pressed(bindings.exit),
            start: input.pressed(bindings.start),
        }
    }

    /// -1 for left, 1 for right, 0 for neither or both
    pub fn turn_axis(&self) -> f32 {
        f32::from(u8::from(self.turn_right)) - f32::from(u8::from(self.turn_left))
    }
}
