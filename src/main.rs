//! GLADE: a 2D side-scrolling forest platformer.
//!
//! Run, double-jump, stomp, and swordfight through a 6400-unit forest to the
//! goal flag, collecting coins and gems on the way.
//!
//! The crate splits cleanly in two:
//! - `game` is the simulation core: fixed-tick, deterministic given a seed
//!   and an input snapshot per tick, with no rendering or device code.
//! - `input` and `render` are the thin presentation shell around it.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod game;
mod input;
mod render;

use macroquad::prelude::*;

use game::constants::{SCREEN_HEIGHT, SCREEN_WIDTH, TICK_RATE};
use game::Game;
use input::InputState;
use render::Sprites;

fn window_conf() -> Conf {
    Conf {
        window_title: format!("GLADE v{}", VERSION),
        window_width: SCREEN_WIDTH as i32,
        window_height: SCREEN_HEIGHT as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    let sprites = Sprites::load().await;

    // The level is compiled in; a table that fails validation is a
    // programming error, so fail fast and loud
    let seed = (macroquad::miniquad::date::now() * 1000.0) as u32;
    let mut game = match Game::from_level(seed) {
        Ok(game) => game,
        Err(e) => panic!("invalid level data: {}", e),
    };

    let mut input = InputState::new();

    println!("=== GLADE v{} ===", VERSION);

    loop {
        let frame_start = get_time();

        input.poll();
        if input.quit_requested() {
            break;
        }

        // One immutable snapshot per tick; the simulation never re-polls
        let snapshot = input.snapshot();
        game.tick(&snapshot);

        render::draw_world(&game, &sprites);
        render::draw_hud(&game);

        limit_frame_rate(frame_start);
        next_frame().await;
    }
}

/// Hold the loop at the fixed tick rate. Sleep for the bulk of the wait,
/// then spin the last stretch for precision (sleep granularity is coarse).
fn limit_frame_rate(frame_start: f64) {
    let target = 1.0 / TICK_RATE;
    #[cfg(not(target_arch = "wasm32"))]
    {
        let spin_margin = 0.002;
        while get_time() - frame_start + spin_margin < target {
            std::thread::sleep(std::time::Duration::from_millis(1));
        }
    }
    while get_time() - frame_start < target {
        // spin
    }
}
