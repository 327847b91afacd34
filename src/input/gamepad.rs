//! Gamepad backend.
//!
//! Native: gilrs behind a thin wrapper exposing just what the game needs,
//! left-stick/d-pad axes and the three buttons. WASM: a stub (keyboard only;
//! macroquad's JS bundle does not ship gamepad bindings).

#[cfg(not(target_arch = "wasm32"))]
mod platform {
    use gilrs::{Axis, Button, Gilrs};

    pub struct Gamepad {
        gilrs: Option<Gilrs>,
    }

    impl Gamepad {
        pub fn new() -> Self {
            let gilrs = match Gilrs::new() {
                Ok(g) => Some(g),
                Err(e) => {
                    eprintln!("Gamepad support unavailable: {}", e);
                    None
                }
            };
            Self { gilrs }
        }

        /// Drain pending events so gilrs' cached state is current.
        /// Call once per frame before reading.
        pub fn poll(&mut self) {
            let Some(gilrs) = &mut self.gilrs else { return };
            while gilrs.next_event().is_some() {}
        }

        fn active(&self) -> Option<gilrs::Gamepad> {
            self.gilrs.as_ref()?.gamepads().next().map(|(_, gp)| gp)
        }

        /// Left stick X, with the d-pad folded in as ±1
        pub fn axis_x(&self) -> f32 {
            let Some(gp) = self.active() else { return 0.0 };
            if gp.is_pressed(Button::DPadLeft) {
                return -1.0;
            }
            if gp.is_pressed(Button::DPadRight) {
                return 1.0;
            }
            gp.value(Axis::LeftStickX)
        }

        /// Left stick Y, positive = down, d-pad folded in
        pub fn axis_y(&self) -> f32 {
            let Some(gp) = self.active() else { return 0.0 };
            if gp.is_pressed(Button::DPadDown) {
                return 1.0;
            }
            // gilrs reports stick up as positive; the game wants down-positive
            -gp.value(Axis::LeftStickY)
        }

        pub fn jump_down(&self) -> bool {
            self.active().is_some_and(|gp| gp.is_pressed(Button::South))
        }

        pub fn attack_down(&self) -> bool {
            self.active().is_some_and(|gp| gp.is_pressed(Button::West))
        }

        pub fn start_down(&self) -> bool {
            self.active().is_some_and(|gp| gp.is_pressed(Button::Start))
        }
    }
}

#[cfg(target_arch = "wasm32")]
mod platform {
    pub struct Gamepad;

    impl Gamepad {
        pub fn new() -> Self {
            Gamepad
        }

        pub fn poll(&mut self) {}

        pub fn axis_x(&self) -> f32 {
            0.0
        }

        pub fn axis_y(&self) -> f32 {
            0.0
        }

        pub fn jump_down(&self) -> bool {
            false
        }

        pub fn attack_down(&self) -> bool {
            false
        }

        pub fn start_down(&self) -> bool {
            false
        }
    }
}

impl Default for platform::Gamepad {
    fn default() -> Self {
        Self::new()
    }
}

pub use platform::Gamepad;
