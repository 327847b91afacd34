//! Platforms.
//!
//! Rectangular obstacles characters can land on. Most are static level
//! geometry; a few oscillate horizontally around their spawn position.
//! Styles exist purely for the renderer and have no gameplay effect.

use serde::{Serialize, Deserialize};
use super::geometry::Aabb;

/// Visual style tag, chosen by level data and consumed by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlatformStyle {
    Normal,
    Wood,
    Crystal,
    Metal,
    Cloud,
}

/// Horizontal oscillation around a fixed origin.
///
/// The platform never travels further than `amplitude` from `origin_x`;
/// crossing a bound clamps the position back onto it and flips `direction`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Oscillation {
    pub origin_x: f32,
    pub amplitude: f32,
    pub speed: f32,
    /// +1.0 or -1.0
    pub direction: f32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Platform {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub is_ground: bool,
    pub style: PlatformStyle,
    pub oscillation: Option<Oscillation>,
}

/// Default oscillation parameters for moving section platforms
const OSC_SPEED: f32 = 1.5;
const OSC_AMPLITUDE: f32 = 150.0;

impl Platform {
    /// A static section platform
    pub fn fixed(x: f32, y: f32, width: f32, height: f32, style: PlatformStyle) -> Self {
        Self {
            x,
            y,
            width,
            height,
            is_ground: false,
            style,
            oscillation: None,
        }
    }

    /// A ground span (thick, grass-topped)
    pub fn ground(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            is_ground: true,
            style: PlatformStyle::Normal,
            oscillation: None,
        }
    }

    /// A section platform that oscillates around its spawn position
    pub fn oscillating(x: f32, y: f32, width: f32, height: f32, style: PlatformStyle) -> Self {
        Self {
            oscillation: Some(Oscillation {
                origin_x: x,
                amplitude: OSC_AMPLITUDE,
                speed: OSC_SPEED,
                direction: 1.0,
            }),
            ..Self::fixed(x, y, width, height, style)
        }
    }

    /// Advance one tick. Static platforms never move.
    pub fn advance(&mut self) {
        let Some(osc) = &mut self.oscillation else { return };
        self.x += osc.speed * osc.direction;
        if (self.x - osc.origin_x).abs() > osc.amplitude {
            // Clamp onto the bound that was crossed, then turn around
            self.x = osc.origin_x + osc.amplitude * osc.direction;
            osc.direction = -osc.direction;
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.x, self.y, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_platform_never_moves() {
        let mut p = Platform::fixed(100.0, 200.0, 120.0, 15.0, PlatformStyle::Wood);
        for _ in 0..100 {
            p.advance();
        }
        assert_eq!(p.x, 100.0);
        assert_eq!(p.y, 200.0);
    }

    #[test]
    fn test_oscillation_stays_bounded() {
        let mut p = Platform::oscillating(1000.0, 200.0, 90.0, 15.0, PlatformStyle::Cloud);
        let osc = p.oscillation.unwrap();
        for _ in 0..10_000 {
            p.advance();
            assert!(
                (p.x - osc.origin_x).abs() <= osc.amplitude,
                "drifted to {} (origin {})",
                p.x,
                osc.origin_x
            );
        }
    }

    #[test]
    fn test_direction_flips_once_per_crossing() {
        let mut p = Platform::oscillating(0.0, 0.0, 90.0, 15.0, PlatformStyle::Cloud);
        let mut flips = 0;
        let mut last_dir = p.oscillation.unwrap().direction;
        for _ in 0..1000 {
            p.advance();
            let dir = p.oscillation.unwrap().direction;
            if dir != last_dir {
                flips += 1;
                last_dir = dir;
            }
        }
        // 1000 ticks at speed 1.5 over a 300-unit round trip: 5 crossings
        assert_eq!(flips, 5);
    }

    #[test]
    fn test_flip_clamps_to_crossed_bound() {
        let mut p = Platform::oscillating(0.0, 0.0, 90.0, 15.0, PlatformStyle::Cloud);
        // 101 ticks at speed 1.5 would reach 151.5; the bound caps it
        for _ in 0..101 {
            p.advance();
        }
        assert_eq!(p.x, 150.0);
        assert_eq!(p.oscillation.unwrap().direction, -1.0);
    }
}
