//! Sprite sheet loading.
//!
//! Character art ships as two-frame sheets (frames stacked vertically) drawn
//! at 3x scale. Missing art is never fatal: a character without a sheet
//! still simulates normally and is drawn as a readable placeholder rectangle
//! by the world renderer.

use macroquad::prelude::*;

/// A two-frame character sheet (frame 0 on top, frame 1 below)
pub struct SpriteSheet {
    texture: Texture2D,
    frame_width: f32,
    frame_height: f32,
}

impl SpriteSheet {
    /// Load a sheet, or None if the file is missing/unreadable
    pub async fn load(path: &str) -> Option<Self> {
        match load_texture(path).await {
            Ok(texture) => {
                texture.set_filter(FilterMode::Nearest);
                let frame_width = texture.width();
                let frame_height = texture.height() / 2.0;
                Some(Self { texture, frame_width, frame_height })
            }
            Err(e) => {
                println!("Failed to load {}: {}, drawing placeholder", path, e);
                None
            }
        }
    }

    /// Draw one frame stretched to the destination rectangle
    pub fn draw(&self, x: f32, y: f32, w: f32, h: f32, frame: u8, tint: Color) {
        let source = Rect::new(
            0.0,
            frame.min(1) as f32 * self.frame_height,
            self.frame_width,
            self.frame_height,
        );
        draw_texture_ex(
            &self.texture,
            x,
            y,
            tint,
            DrawTextureParams {
                dest_size: Some(vec2(w, h)),
                source: Some(source),
                ..Default::default()
            },
        );
    }

    /// Draw one frame rotated around a pivot (sword swings)
    pub fn draw_rotated(&self, x: f32, y: f32, w: f32, h: f32, rotation: f32, flip_x: bool) {
        let source = Rect::new(0.0, 0.0, self.frame_width, self.frame_height);
        draw_texture_ex(
            &self.texture,
            x,
            y,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(w, h)),
                source: Some(source),
                rotation,
                flip_x,
                ..Default::default()
            },
        );
    }
}

/// All character art, loaded once at startup
pub struct Sprites {
    pub player: Option<SpriteSheet>,
    pub npcs: Vec<Option<SpriteSheet>>,
    pub sword: Option<SpriteSheet>,
}

/// Enemy sheets are assigned round-robin by spawn index
const NPC_SHEETS: &[&str] = &[
    "assets/sprites/npc1.png",
    "assets/sprites/npc2.png",
    "assets/sprites/npc3.png",
    "assets/sprites/npc4.png",
];

impl Sprites {
    pub async fn load() -> Self {
        let player = SpriteSheet::load("assets/sprites/player.png").await;
        let mut npcs = Vec::with_capacity(NPC_SHEETS.len());
        for path in NPC_SHEETS {
            npcs.push(SpriteSheet::load(path).await);
        }
        let sword = SpriteSheet::load("assets/sprites/sword.png").await;
        Self { player, npcs, sword }
    }

    /// Sheet for the enemy at `spawn_index`, if its art loaded
    pub fn npc(&self, spawn_index: usize) -> Option<&SpriteSheet> {
        if self.npcs.is_empty() {
            return None;
        }
        self.npcs[spawn_index % self.npcs.len()].as_ref()
    }
}
