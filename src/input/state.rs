//! Input state management.
//!
//! Polls keyboard (macroquad) and gamepad (gilrs on native) and merges them
//! into the logical button set the simulation understands. The result of a
//! poll is a plain `InputSnapshot`: captured once at the top of each tick,
//! immutable for the tick's duration.

use macroquad::prelude::*;

use crate::game::InputSnapshot;
use super::gamepad::Gamepad;

/// Analog axes become digital directions past this deflection
const AXIS_THRESHOLD: f32 = 0.3;

pub struct InputState {
    gamepad: Gamepad,
}

impl InputState {
    pub fn new() -> Self {
        Self { gamepad: Gamepad::new() }
    }

    /// Call once per frame before taking a snapshot
    pub fn poll(&mut self) {
        self.gamepad.poll();
    }

    /// Capture the current logical button state.
    /// Keyboard and gamepad merge by logical OR.
    pub fn snapshot(&self) -> InputSnapshot {
        let axis_x = self.gamepad.axis_x();
        let axis_y = self.gamepad.axis_y();

        InputSnapshot {
            left: is_key_down(KeyCode::Left) || is_key_down(KeyCode::A) || axis_x < -AXIS_THRESHOLD,
            right: is_key_down(KeyCode::Right)
                || is_key_down(KeyCode::D)
                || axis_x > AXIS_THRESHOLD,
            jump: is_key_down(KeyCode::Up)
                || is_key_down(KeyCode::W)
                || is_key_down(KeyCode::Space)
                || self.gamepad.jump_down(),
            down: is_key_down(KeyCode::Down) || is_key_down(KeyCode::S) || axis_y > AXIS_THRESHOLD,
            attack: is_key_down(KeyCode::X) || self.gamepad.attack_down(),
        }
    }

    /// External quit signal: Escape or the controller's Start button
    pub fn quit_requested(&self) -> bool {
        is_key_down(KeyCode::Escape) || self.gamepad.start_down()
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}
