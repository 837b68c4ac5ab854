//! Keyboard input collaborator.
//!
//! Tracks held keys and a per-frame edge-triggered ("just pressed")
//! set. The simulation never reads raw key codes: the host folds the
//! bindings into a [`FrameInput`] value once per frame and passes it
//! into the tick, then calls [`InputState::end_frame`].

use std::collections::{HashMap, HashSet};

/// Key bindings (browser `KeyboardEvent.code` values)
pub const LEFT_KEYS: [&str; 2] = ["ArrowLeft", "KeyA"];
pub const RIGHT_KEYS: [&str; 2] = ["ArrowRight", "KeyD"];
pub const FIRE_KEYS: [&str; 2] = ["Space", "ArrowUp"];
pub const CONFIRM_KEY: &str = "Enter";
pub const PAUSE_KEY: &str = "Escape";

/// Input commands for a single frame (passed by value into the tick)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInput {
    /// Move left (held)
    pub left: bool,
    /// Move right (held)
    pub right: bool,
    /// Fire (held); rate limiting is the player's cooldown
    pub fire: bool,
    /// Menu/game-over confirm (edge-triggered)
    pub confirm: bool,
    /// Pause toggle (edge-triggered)
    pub pause: bool,
}

/// Raw keyboard state fed by keydown/keyup events
#[derive(Debug, Default)]
pub struct InputState {
    down: HashMap<String, bool>,
    just_pressed: HashSet<String>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a keydown event. OS key repeat does not re-arm the edge set.
    pub fn key_down(&mut self, code: &str) {
        if !self.is_key_down(code) {
            self.just_pressed.insert(code.to_string());
        }
        self.down.insert(code.to_string(), true);
    }

    /// Feed a keyup event
    pub fn key_up(&mut self, code: &str) {
        self.down.insert(code.to_string(), false);
        self.just_pressed.remove(code);
    }

    /// Codes never seen are simply not down
    pub fn is_key_down(&self, code: &str) -> bool {
        self.down.get(code).copied().unwrap_or(false)
    }

    /// True only between the keydown and the next [`Self::end_frame`]
    pub fn is_just_pressed(&self, code: &str) -> bool {
        self.just_pressed.contains(code)
    }

    fn any_down(&self, codes: &[&str]) -> bool {
        codes.iter().any(|code| self.is_key_down(code))
    }

    /// Fold the bindings into this frame's command set
    pub fn frame_input(&self) -> FrameInput {
        FrameInput {
            left: self.any_down(&LEFT_KEYS),
            right: self.any_down(&RIGHT_KEYS),
            fire: self.any_down(&FIRE_KEYS),
            confirm: self.is_just_pressed(CONFIRM_KEY),
            pause: self.is_just_pressed(PAUSE_KEY),
        }
    }

    /// Clear the edge-triggered set; call once per frame, after the tick
    pub fn end_frame(&mut self) {
        self.just_pressed.clear();
    }
}
