//! Input handling with gamepad support.
//!
//! Keyboard (macroquad) and gamepad (gilrs on native) merge into one logical
//! button set per frame. The simulation only ever sees the resulting
//! `InputSnapshot`; device details stop here.

mod gamepad;
mod state;

pub use state::InputState;
