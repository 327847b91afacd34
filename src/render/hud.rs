//! HUD and overlay rendering.
//!
//! Score box, lives, invincibility bar, and the victory/game-over screens.
//! Reads aggregate game state only.

use macroquad::prelude::*;

use crate::game::constants::{INVINCIBILITY_TICKS, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::game::Game;

const HUD_YELLOW: Color = Color::new(0.96, 0.82, 0.25, 1.0);
const HUD_BLUE: Color = Color::new(0.20, 0.60, 0.86, 1.0);
const HEART_RED: Color = Color::new(0.9, 0.1, 0.1, 1.0);

pub fn draw_hud(game: &Game) {
    draw_score_box(game);
    draw_lives(game);
    draw_invincibility_bar(game);

    if game.has_won {
        draw_end_screen("VICTORY!", HUD_YELLOW, game.score, 0.78);
    } else if game.is_dead {
        draw_end_screen("GAME OVER!", HEART_RED, game.score, 0.86);
    }
}

fn draw_score_box(game: &Game) {
    draw_rectangle(10.0, 10.0, 220.0, 70.0, BLACK);
    draw_rectangle_lines(10.0, 10.0, 220.0, 70.0, 2.0, WHITE);

    draw_text(&format!("Score: {}", game.score), 20.0, 30.0, 20.0, HUD_YELLOW);
    draw_text(&format!("Coins: {}", game.coins_collected), 20.0, 50.0, 20.0, HUD_YELLOW);
    draw_text(&format!("Gems: {}", game.gems_collected), 20.0, 70.0, 20.0, HUD_BLUE);
}

fn draw_lives(game: &Game) {
    for i in 0..game.lives {
        draw_heart(SCREEN_WIDTH - 90.0 + i as f32 * 28.0, 24.0, HEART_RED);
    }
}

/// A small heart built from two lobes and a point
fn draw_heart(x: f32, y: f32, color: Color) {
    let r = 6.0;
    draw_circle(x - r, y, r, color);
    draw_circle(x + r, y, r, color);
    draw_triangle(
        vec2(x - 2.0 * r, y + 1.5),
        vec2(x + 2.0 * r, y + 1.5),
        vec2(x, y + 2.2 * r),
        color,
    );
}

fn draw_invincibility_bar(game: &Game) {
    let ticks = game.invincibility_ticks();
    if ticks == 0 {
        return;
    }
    let progress = ticks as f32 / INVINCIBILITY_TICKS as f32;
    draw_rectangle(0.0, SCREEN_HEIGHT - 10.0, progress * SCREEN_WIDTH, 10.0, HUD_YELLOW);
}

fn draw_end_screen(title: &str, title_color: Color, score: u32, dim: f32) {
    draw_rectangle(0.0, 0.0, SCREEN_WIDTH, SCREEN_HEIGHT, Color::new(0.0, 0.0, 0.0, dim));

    let title_size = measure_text(title, None, 48, 1.0);
    draw_text(
        title,
        (SCREEN_WIDTH - title_size.width) / 2.0,
        SCREEN_HEIGHT / 2.0 - 40.0,
        48.0,
        title_color,
    );

    let line = format!("Final Score: {}", score);
    let line_size = measure_text(&line, None, 24, 1.0);
    draw_text(
        &line,
        (SCREEN_WIDTH - line_size.width) / 2.0,
        SCREEN_HEIGHT / 2.0 + 10.0,
        24.0,
        WHITE,
    );
}
