//! Input management system
//!
//! Tracks which keys are held this frame and which were held last frame, so
//! callers can ask for level state (`is_down`) as well as edges (`pressed`,
//! `released`). The host feeds key events in and calls
//! [`InputManager::end_frame`] once the frame has been processed.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Input manager
#[derive(Debug, Default, Clone)]
pub struct InputManager {
    current: HashSet<KeyCode>,
    previous: HashSet<KeyCode>,
}

impl InputManager {
    /// Create a new input manager
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle key input
    pub fn handle_key_input(&mut self, key: KeyCode, pressed: bool) {
        if pressed {
            self.current.insert(key);
        } else {
            self.current.remove(&key);
        }
    }

    /// Key is held this frame
    pub fn is_down(&self, key: KeyCode) -> bool {
        self.current.contains(&key)
    }

    /// Key is held this frame and was not held last frame
    pub fn pressed(&self, key: KeyCode) -> bool {
        self.current.contains(&key) && !self.previous.contains(&key)
    }

    /// Key was held last frame and is not held this frame
    pub fn released(&self, key: KeyCode) -> bool {
        !self.current.contains(&key) && self.previous.contains(&key)
    }

    /// Roll the current state into the previous state
    pub fn end_frame(&mut self) {
        self.previous.clone_from(&self.current);
    }
}

/// Key codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyCode {
    /// A key
    A,
    /// D key
    D,
    /// Q key
    Q,
    /// S key
    S,
    /// W key
    W,
    /// Space key
    Space,
    /// Enter key
    Enter,
    /// Escape key
    Escape,
    /// Up arrow
    Up,
    /// Down arrow
    Down,
    /// Left arrow
    Left,
    /// Right arrow
    Right,
    /// Grave / tilde key
    Grave,
    /// F1 key
    F1,
}
