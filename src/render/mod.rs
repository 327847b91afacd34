//! World rendering.
//!
//! A pure consumer of the simulation: reads positions and flags after each
//! tick and draws them, camera-relative, with viewport culling. Never
//! mutates game state.

mod hud;
mod sprites;

pub use hud::draw_hud;
pub use sprites::{SpriteSheet, Sprites};

use macroquad::prelude::*;

use crate::game::character::{Brain, Character};
use crate::game::collectible::{Collectible, CollectibleKind};
use crate::game::combat::sword_hitbox;
use crate::game::constants::*;
use crate::game::particles::{Particle, ParticleKind};
use crate::game::platform::{Platform, PlatformStyle};
use crate::game::Game;

// Palette
const SKY: Color = Color::new(0.37, 0.80, 0.89, 1.0);
const GRASS_TOP: Color = Color::new(0.32, 0.75, 0.50, 1.0);
const GRASS_TUFT: Color = Color::new(0.42, 0.85, 0.59, 1.0);
const DIRT: Color = Color::new(0.23, 0.35, 0.16, 1.0);
const PLATFORM_FILL: Color = Color::new(0.83, 0.33, 0.0, 1.0);
const PLATFORM_HIGHLIGHT: Color = Color::new(1.0, 0.55, 0.26, 1.0);
const PLATFORM_SHADOW: Color = Color::new(0.32, 0.11, 0.04, 1.0);
const PLATFORM_BORDER: Color = Color::new(0.47, 0.26, 0.07, 1.0);
const WOOD: Color = Color::new(0.55, 0.44, 0.28, 1.0);
const WOOD_GRAIN: Color = Color::new(0.44, 0.34, 0.22, 1.0);
const WOOD_BORDER: Color = Color::new(0.35, 0.26, 0.16, 1.0);
const CRYSTAL: Color = Color::new(0.29, 0.56, 0.89, 1.0);
const CRYSTAL_BORDER: Color = Color::new(0.18, 0.36, 0.54, 1.0);
const METAL: Color = Color::new(0.50, 0.55, 0.55, 1.0);
const METAL_SEAM: Color = Color::new(0.29, 0.33, 0.34, 1.0);
const METAL_DARK: Color = Color::new(0.20, 0.29, 0.37, 1.0);
const CLOUD: Color = Color::new(1.0, 1.0, 1.0, 0.9);
const COIN_YELLOW: Color = Color::new(0.96, 0.82, 0.25, 1.0);
const COIN_GOLD: Color = Color::new(0.83, 0.69, 0.22, 1.0);
const COIN_RIM: Color = Color::new(0.60, 0.40, 0.08, 1.0);
const GEM_BLUE: Color = Color::new(0.20, 0.60, 0.86, 1.0);
const GEM_BORDER: Color = Color::new(0.10, 0.32, 0.46, 1.0);
const TREE_TRUNK: Color = Color::new(0.43, 0.30, 0.19, 1.0);
const TREE_CANOPY: Color = Color::new(0.08, 0.56, 0.47, 1.0);
const POLE_GRAY: Color = Color::new(0.40, 0.40, 0.40, 1.0);
const PLAYER_FALLBACK: Color = Color::new(0.20, 0.60, 0.86, 1.0);
const NPC_FALLBACK: Color = Color::new(0.85, 0.20, 0.20, 1.0);
const DUST_GRAY: Color = Color::new(0.67, 0.67, 0.67, 1.0);
const BLOOD_DARK: Color = Color::new(0.55, 0.0, 0.0, 1.0);

/// Background trees scroll at half camera speed
const PARALLAX_TREES: f32 = 0.5;

/// Draw the whole world for the current frame
pub fn draw_world(game: &Game, sprites: &Sprites) {
    clear_background(SKY);

    let cam_x = game.camera_x;

    draw_forest(cam_x);

    for platform in &game.platforms {
        draw_platform(platform, cam_x);
    }

    for collectible in &game.collectibles {
        draw_collectible(collectible, cam_x);
    }

    draw_goal(game, cam_x);

    draw_character(&game.player, sprites.player.as_ref(), cam_x, game.invincibility_ticks());
    draw_sword(game, sprites, cam_x);
    for (i, npc) in game.npcs.iter().enumerate() {
        if !npc.dead {
            draw_character(npc, sprites.npc(i), cam_x, 0);
        }
    }

    for particle in &game.particles {
        draw_particle(particle, cam_x);
    }
}

/// True when a world-space span is entirely off screen
fn culled(screen_x: f32, width: f32, margin: f32) -> bool {
    screen_x + width < -margin || screen_x > SCREEN_WIDTH + margin
}

fn draw_forest(cam_x: f32) {
    let scroll = cam_x * PARALLAX_TREES;
    for i in 0..20 {
        let x = i as f32 * 400.0 - scroll;
        if culled(x, 25.0, 100.0) {
            continue;
        }
        draw_rectangle(x, SCREEN_HEIGHT - 120.0, 25.0, 120.0, TREE_TRUNK);
        draw_circle(x + 12.0, SCREEN_HEIGHT - 110.0, 40.0, TREE_CANOPY);
    }
}

fn draw_platform(platform: &Platform, cam_x: f32) {
    let x = platform.x - cam_x;
    let y = platform.y;
    let w = platform.width;
    let h = platform.height;
    if culled(x, w, 0.0) {
        return;
    }

    if platform.is_ground {
        draw_rectangle(x, y, w, 8.0, GRASS_TOP);
        draw_rectangle(x, y + 8.0, w, h - 8.0, DIRT);
        let mut tuft = 0.0;
        while tuft < w {
            if (tuft / 10.0) as i32 % 2 == 0 {
                draw_rectangle(x + tuft, y - 2.0, 2.0, 3.0, GRASS_TUFT);
            }
            tuft += 10.0;
        }
        return;
    }

    match platform.style {
        PlatformStyle::Normal => {
            draw_rectangle(x, y, w, h, PLATFORM_FILL);
            draw_rectangle(x, y, w, 3.0, PLATFORM_HIGHLIGHT);
            draw_rectangle(x, y + h - 3.0, w, 3.0, PLATFORM_SHADOW);
            draw_rectangle_lines(x, y, w, h, 2.0, PLATFORM_BORDER);
        }
        PlatformStyle::Wood => {
            draw_rectangle(x, y, w, h, WOOD);
            let mut grain = 0.0;
            while grain < w {
                draw_rectangle(x + grain, y, 2.0, h, WOOD_GRAIN);
                grain += 16.0;
            }
            draw_rectangle_lines(x, y, w, h, 2.0, WOOD_BORDER);
        }
        PlatformStyle::Crystal => {
            draw_rectangle(x, y, w, h, CRYSTAL);
            let mut glint = 0.0;
            while glint < w {
                draw_rectangle(x + glint, y + 2.0, 3.0, 3.0, WHITE);
                glint += 20.0;
            }
            draw_rectangle_lines(x, y, w, h, 2.0, CRYSTAL_BORDER);
        }
        PlatformStyle::Metal => {
            draw_rectangle(x, y, w, h, METAL);
            let mut seam = 0.0;
            while seam < w {
                draw_rectangle(x + seam, y, 2.0, h, METAL_SEAM);
                draw_circle(x + seam + 5.0, y + 5.0, 2.0, METAL_DARK);
                seam += 20.0;
            }
            draw_rectangle_lines(x, y, w, h, 2.0, METAL_DARK);
        }
        PlatformStyle::Cloud => {
            draw_rectangle(x, y, w, h, CLOUD);
        }
    }
}

fn draw_collectible(collectible: &Collectible, cam_x: f32) {
    if collectible.collected {
        return;
    }
    let x = collectible.x - cam_x;
    let y = collectible.y + collectible.bob_offset;
    if culled(x, 0.0, 50.0) {
        return;
    }

    match collectible.kind {
        CollectibleKind::Coin => {
            draw_circle(x, y, collectible.size / 2.0, COIN_YELLOW);
            draw_circle(x, y, collectible.size / 3.0, COIN_GOLD);
            draw_circle_lines(x, y, collectible.size / 2.0, 2.0, COIN_RIM);
        }
        CollectibleKind::Gem => {
            // A diamond: 4-gon with a vertex pointing up
            draw_poly(x, y, 4, collectible.size / 2.0, 90.0, GEM_BLUE);
            draw_poly_lines(x, y, 4, collectible.size / 2.0, 90.0, 2.0, GEM_BORDER);
        }
    }
}

fn draw_goal(game: &Game, cam_x: f32) {
    let goal = game.goal();
    let x = goal.x - cam_x;
    if culled(x, goal.w, 100.0) {
        return;
    }

    // Pole
    draw_rectangle(x + 25.0, goal.y, 8.0, goal.h, POLE_GRAY);
    // Waving flag
    let wave = (game.frame as f32 * 0.1).sin() * 3.0;
    draw_rectangle(x + 33.0, goal.y + 10.0, 35.0 + wave, 30.0, COIN_YELLOW);
    draw_text("GOAL", x + 5.0, goal.y + goal.h + 20.0, 24.0, COIN_YELLOW);
}

fn draw_character(ch: &Character, sheet: Option<&SpriteSheet>, cam_x: f32, invincibility: u32) {
    let body = &ch.body;
    let x = body.x - cam_x;
    if culled(x, body.width, 100.0) {
        return;
    }

    // Flash while invincible: hidden half of every 10-tick window
    let flashing = invincibility > 0 && (invincibility / 10) % 2 == 0;
    let tint = if flashing { Color::new(1.0, 1.0, 1.0, 0.5) } else { WHITE };

    match sheet {
        Some(sheet) => sheet.draw(x, body.y, body.width, body.height, body.frame, tint),
        None => {
            let mut fill = if ch.is_player() { PLAYER_FALLBACK } else { NPC_FALLBACK };
            fill.a = tint.a;
            draw_rectangle(x, body.y, body.width, body.height, fill);
        }
    }

    if ch.is_player() {
        draw_name_tag("PLAYER", x + body.width / 2.0, body.y - 10.0);
    }
}

/// The swinging sword, while the player is mid-attack
fn draw_sword(game: &Game, sprites: &Sprites, cam_x: f32) {
    let Brain::Player(state) = &game.player.brain else { return };
    let Some(hitbox) = sword_hitbox(&game.player.body, &state.sword) else { return };

    let body = &game.player.body;
    match &sprites.sword {
        Some(sheet) => {
            // Sweep from raised to lowered over the swing window
            let progress = state.sword.swing_progress();
            let angle = -std::f32::consts::FRAC_PI_2 + std::f32::consts::PI * progress;
            let rotation = if body.facing_right { angle } else { -angle };
            let pivot_x = if body.facing_right {
                body.x + body.width * 0.8
            } else {
                body.x + body.width * 0.2
            };
            sheet.draw_rotated(
                pivot_x - cam_x - SWORD_REACH / 2.0,
                body.y + body.height * 0.3 - SWORD_HITBOX_HEIGHT / 2.0,
                SWORD_REACH,
                SWORD_HITBOX_HEIGHT,
                rotation,
                !body.facing_right,
            );
        }
        None => {
            // Placeholder blade: the actual hitbox, faintly filled
            draw_rectangle(
                hitbox.x - cam_x,
                hitbox.y,
                hitbox.w,
                hitbox.h,
                Color::new(0.9, 0.9, 0.9, 0.5),
            );
        }
    }
}

fn draw_particle(particle: &Particle, cam_x: f32) {
    let x = particle.x - cam_x;
    if culled(x, particle.size, 20.0) {
        return;
    }
    let mut color = match particle.kind {
        ParticleKind::Dust => DUST_GRAY,
        ParticleKind::Sparkle => COIN_YELLOW,
        ParticleKind::Damage => RED,
        ParticleKind::Blood => BLOOD_DARK,
    };
    color.a = particle.fade();
    draw_rectangle(x, particle.y, particle.size, particle.size, color);
}

fn draw_name_tag(name: &str, center_x: f32, y: f32) {
    let size = measure_text(name, None, 16, 1.0);
    let x = center_x - size.width / 2.0;
    draw_rectangle(x - 5.0, y - 12.0, size.width + 10.0, 16.0, BLACK);
    draw_rectangle_lines(x - 5.0, y - 12.0, size.width + 10.0, 16.0, 2.0, WHITE);
    draw_text(name, x, y, 16.0, COIN_YELLOW);
}
