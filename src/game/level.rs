//! Level data.
//!
//! The level is a compiled-in table, not an external file format. Ground
//! spans, styled section platforms, enemy spawns, collectible placements,
//! and the goal rectangle are validated once at construction; a bad entry
//! is a programming error and fails fast with a `LevelError`.

use std::fmt;

use serde::{Serialize, Deserialize};
use super::collectible::CollectibleKind;
use super::constants::*;
use super::geometry::Aabb;
use super::platform::{Platform, PlatformStyle};

/// Enemy behavior assigned by the spawn table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NpcKind {
    Walking,
    Patrolling,
    Flying,
}

/// Validation failure in the compiled-in level tables
#[derive(Debug, Clone, PartialEq)]
pub enum LevelError {
    NonPositiveWorld { width: f32, height: f32 },
    NonPositivePlatform { index: usize, width: f32, height: f32 },
    BadOscillation { index: usize },
    NonPositiveGoal,
    OutOfBounds { what: &'static str, x: f32, y: f32 },
}

impl fmt::Display for LevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LevelError::NonPositiveWorld { width, height } => {
                write!(f, "world size must be positive, got {}x{}", width, height)
            }
            LevelError::NonPositivePlatform { index, width, height } => {
                write!(f, "platform {} has non-positive size {}x{}", index, width, height)
            }
            LevelError::BadOscillation { index } => {
                write!(f, "platform {} has non-positive oscillation parameters", index)
            }
            LevelError::NonPositiveGoal => write!(f, "goal rectangle has non-positive size"),
            LevelError::OutOfBounds { what, x, y } => {
                write!(f, "{} at ({}, {}) lies outside the world", what, x, y)
            }
        }
    }
}

impl std::error::Error for LevelError {}

/// A validated level, ready for the world to consume
#[derive(Debug, Clone)]
pub struct Level {
    pub world_width: f32,
    pub world_height: f32,
    pub player_start: (f32, f32),
    pub goal: Aabb,
    pub platforms: Vec<Platform>,
    pub npc_spawns: Vec<(f32, f32, NpcKind)>,
    pub collectible_spawns: Vec<(f32, f32, CollectibleKind)>,
}

/// Ground spans: (x, y, width), all 50 units thick
const GROUND_SPANS: &[(f32, f32, f32)] = &[
    (0.0, 430.0, 500.0),
    (700.0, 430.0, 600.0),
    (1500.0, 430.0, 500.0),
    (2200.0, 430.0, 600.0),
    (3000.0, 430.0, 500.0),
    (3700.0, 430.0, 600.0),
    (4500.0, 430.0, 500.0),
    (5200.0, 430.0, 600.0),
    (6000.0, 430.0, 400.0),
];

const GROUND_THICKNESS: f32 = 50.0;
const SECTION_THICKNESS: f32 = 15.0;

/// Section platforms: (x, y, width, style, oscillating), all 15 units thick.
/// Laid out as themed stretches from the tutorial to the final climb; the
/// two drifting clouds in the sky section are the only movers.
const SECTION_PLATFORMS: &[(f32, f32, f32, PlatformStyle, bool)] = &[
    // Tutorial
    (100.0, 360.0, 120.0, PlatformStyle::Wood, false),
    (450.0, 280.0, 120.0, PlatformStyle::Wood, false),
    // Cloud hop
    (850.0, 350.0, 90.0, PlatformStyle::Cloud, false),
    (1150.0, 270.0, 90.0, PlatformStyle::Cloud, false),
    // Crystal cave
    (1550.0, 360.0, 120.0, PlatformStyle::Crystal, false),
    (1730.0, 320.0, 100.0, PlatformStyle::Crystal, false),
    (1880.0, 260.0, 120.0, PlatformStyle::Crystal, false),
    // Metal tower
    (2250.0, 360.0, 100.0, PlatformStyle::Metal, false),
    (2380.0, 320.0, 90.0, PlatformStyle::Metal, false),
    (2320.0, 180.0, 100.0, PlatformStyle::Metal, false),
    (2480.0, 40.0, 120.0, PlatformStyle::Metal, false),
    (2750.0, 180.0, 110.0, PlatformStyle::Metal, false),
    // Mixed stretch
    (2950.0, 320.0, 90.0, PlatformStyle::Wood, false),
    (3250.0, 250.0, 90.0, PlatformStyle::Metal, false),
    (3500.0, 300.0, 100.0, PlatformStyle::Crystal, false),
    // Sky section
    (3650.0, 360.0, 120.0, PlatformStyle::Cloud, false),
    (3980.0, 280.0, 110.0, PlatformStyle::Cloud, true),
    (4050.0, 160.0, 100.0, PlatformStyle::Cloud, false),
    (4250.0, 140.0, 120.0, PlatformStyle::Cloud, true),
    // Industrial
    (4400.0, 240.0, 100.0, PlatformStyle::Metal, false),
    (4570.0, 300.0, 120.0, PlatformStyle::Metal, false),
    (4870.0, 220.0, 100.0, PlatformStyle::Metal, false),
    // Crystal paradise
    (5050.0, 360.0, 100.0, PlatformStyle::Crystal, false),
    (5350.0, 280.0, 100.0, PlatformStyle::Crystal, false),
    (5400.0, 180.0, 100.0, PlatformStyle::Crystal, false),
    // Final climb
    (5730.0, 360.0, 100.0, PlatformStyle::Wood, false),
    (5870.0, 320.0, 110.0, PlatformStyle::Metal, false),
    (6030.0, 280.0, 100.0, PlatformStyle::Crystal, false),
    (6200.0, 220.0, 120.0, PlatformStyle::Metal, false),
];

/// Enemy spawns, spread across the sections with a rotating kind pattern
const NPC_SPAWNS: &[(f32, f32, NpcKind)] = &[
    (600.0, 320.0, NpcKind::Walking),
    (900.0, 320.0, NpcKind::Walking),
    (1250.0, 240.0, NpcKind::Patrolling),
    (1700.0, 300.0, NpcKind::Walking),
    (2000.0, 240.0, NpcKind::Flying),
    (2350.0, 160.0, NpcKind::Walking),
    (2650.0, 130.0, NpcKind::Patrolling),
    (3050.0, 270.0, NpcKind::Walking),
    (3350.0, 220.0, NpcKind::Walking),
    (3800.0, 270.0, NpcKind::Flying),
    (4150.0, 90.0, NpcKind::Walking),
    (4500.0, 210.0, NpcKind::Patrolling),
    (4800.0, 290.0, NpcKind::Walking),
    (5150.0, 270.0, NpcKind::Walking),
    (5450.0, 160.0, NpcKind::Flying),
    (5800.0, 270.0, NpcKind::Walking),
];

/// Collectible placements (positions are item centers)
const COLLECTIBLE_SPAWNS: &[(f32, f32, CollectibleKind)] = &[
    (160.0, 330.0, CollectibleKind::Coin),
    (510.0, 250.0, CollectibleKind::Coin),
    (895.0, 320.0, CollectibleKind::Coin),
    (1195.0, 240.0, CollectibleKind::Coin),
    (1195.0, 210.0, CollectibleKind::Gem),
    (1610.0, 330.0, CollectibleKind::Coin),
    (1780.0, 290.0, CollectibleKind::Coin),
    (1940.0, 230.0, CollectibleKind::Coin),
    (1780.0, 270.0, CollectibleKind::Gem),
    (2300.0, 330.0, CollectibleKind::Coin),
    (2425.0, 290.0, CollectibleKind::Coin),
    (2370.0, 150.0, CollectibleKind::Coin),
    (2540.0, 10.0, CollectibleKind::Gem),
    (2805.0, 150.0, CollectibleKind::Coin),
    (2995.0, 290.0, CollectibleKind::Coin),
    (3295.0, 220.0, CollectibleKind::Coin),
    (3550.0, 270.0, CollectibleKind::Coin),
    (3710.0, 330.0, CollectibleKind::Coin),
    (4035.0, 250.0, CollectibleKind::Coin),
    (4100.0, 130.0, CollectibleKind::Coin),
    (4310.0, 110.0, CollectibleKind::Gem),
    (4450.0, 210.0, CollectibleKind::Coin),
    (4630.0, 270.0, CollectibleKind::Coin),
    (4920.0, 190.0, CollectibleKind::Coin),
    (4630.0, 240.0, CollectibleKind::Gem),
    (5100.0, 330.0, CollectibleKind::Coin),
    (5400.0, 250.0, CollectibleKind::Coin),
    (5450.0, 150.0, CollectibleKind::Gem),
    (5780.0, 330.0, CollectibleKind::Coin),
    (5925.0, 290.0, CollectibleKind::Coin),
    (6080.0, 250.0, CollectibleKind::Coin),
    (6260.0, 190.0, CollectibleKind::Gem),
];

impl Level {
    /// Build and validate the shipped level
    pub fn build() -> Result<Level, LevelError> {
        let mut platforms = Vec::with_capacity(GROUND_SPANS.len() + SECTION_PLATFORMS.len());
        for &(x, y, w) in GROUND_SPANS {
            platforms.push(Platform::ground(x, y, w, GROUND_THICKNESS));
        }
        for &(x, y, w, style, oscillating) in SECTION_PLATFORMS {
            platforms.push(if oscillating {
                Platform::oscillating(x, y, w, SECTION_THICKNESS, style)
            } else {
                Platform::fixed(x, y, w, SECTION_THICKNESS, style)
            });
        }

        let level = Level {
            world_width: WORLD_WIDTH,
            world_height: WORLD_HEIGHT,
            player_start: (PLAYER_START_X, PLAYER_START_Y),
            goal: Aabb::new(GOAL_X, GOAL_Y, GOAL_WIDTH, GOAL_HEIGHT),
            platforms,
            npc_spawns: NPC_SPAWNS.to_vec(),
            collectible_spawns: COLLECTIBLE_SPAWNS.to_vec(),
        };
        level.validate()?;
        Ok(level)
    }

    /// Fail fast on malformed level data
    fn validate(&self) -> Result<(), LevelError> {
        if self.world_width <= 0.0 || self.world_height <= 0.0 {
            return Err(LevelError::NonPositiveWorld {
                width: self.world_width,
                height: self.world_height,
            });
        }

        for (index, p) in self.platforms.iter().enumerate() {
            if p.width <= 0.0 || p.height <= 0.0 {
                return Err(LevelError::NonPositivePlatform {
                    index,
                    width: p.width,
                    height: p.height,
                });
            }
            if let Some(osc) = &p.oscillation {
                if osc.amplitude <= 0.0 || osc.speed <= 0.0 {
                    return Err(LevelError::BadOscillation { index });
                }
            }
            if p.x < 0.0 || p.x + p.width > self.world_width {
                return Err(LevelError::OutOfBounds { what: "platform", x: p.x, y: p.y });
            }
        }

        if self.goal.w <= 0.0 || self.goal.h <= 0.0 {
            return Err(LevelError::NonPositiveGoal);
        }
        if self.goal.x < 0.0 || self.goal.right() > self.world_width {
            return Err(LevelError::OutOfBounds { what: "goal", x: self.goal.x, y: self.goal.y });
        }

        let (sx, sy) = self.player_start;
        if !self.in_world(sx, sy) {
            return Err(LevelError::OutOfBounds { what: "player start", x: sx, y: sy });
        }
        for &(x, y, _) in &self.npc_spawns {
            if !self.in_world(x, y) {
                return Err(LevelError::OutOfBounds { what: "enemy spawn", x, y });
            }
        }
        for &(x, y, _) in &self.collectible_spawns {
            if !self.in_world(x, y) {
                return Err(LevelError::OutOfBounds { what: "collectible", x, y });
            }
        }

        Ok(())
    }

    fn in_world(&self, x: f32, y: f32) -> bool {
        (0.0..=self.world_width).contains(&x) && (0.0..=self.world_height).contains(&y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shipped_level_is_valid() {
        let level = Level::build().expect("shipped level must validate");
        assert_eq!(level.platforms.len(), GROUND_SPANS.len() + SECTION_PLATFORMS.len());
        assert_eq!(level.npc_spawns.len(), 16);
        assert_eq!(level.collectible_spawns.len(), 32);
        // Exactly the two sky clouds drift
        let movers = level.platforms.iter().filter(|p| p.oscillation.is_some()).count();
        assert_eq!(movers, 2);
    }

    #[test]
    fn test_rejects_non_positive_platform() {
        let mut level = Level::build().unwrap();
        level.platforms[3].width = 0.0;
        assert!(matches!(
            level.validate(),
            Err(LevelError::NonPositivePlatform { index: 3, .. })
        ));
    }

    #[test]
    fn test_rejects_bad_world_size() {
        let mut level = Level::build().unwrap();
        level.world_width = -1.0;
        assert!(matches!(level.validate(), Err(LevelError::NonPositiveWorld { .. })));
    }

    #[test]
    fn test_rejects_out_of_bounds_spawn() {
        let mut level = Level::build().unwrap();
        level.npc_spawns.push((9999.0, 100.0, NpcKind::Walking));
        assert!(matches!(
            level.validate(),
            Err(LevelError::OutOfBounds { what: "enemy spawn", .. })
        ));
    }

    #[test]
    fn test_rejects_degenerate_goal() {
        let mut level = Level::build().unwrap();
        level.goal.w = 0.0;
        assert_eq!(level.validate(), Err(LevelError::NonPositiveGoal));
    }
}
