//! Collectibles.
//!
//! Coins and gems that bob in place until the player picks them up.
//! Pickup uses a generous circular proximity test rather than AABB overlap
//! (deliberate: collecting should feel forgiving, unlike combat).

use serde::{Serialize, Deserialize};
use super::constants::{COIN_SCORE, GEM_SCORE};
use super::rng::SimRng;

const BOB_STEP: f32 = 0.05;
const BOB_HEIGHT: f32 = 5.0;
const BASE_SIZE: f32 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollectibleKind {
    Coin,
    Gem,
}

impl CollectibleKind {
    pub fn score(self) -> u32 {
        match self {
            CollectibleKind::Coin => COIN_SCORE,
            CollectibleKind::Gem => GEM_SCORE,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Collectible {
    /// Center position
    pub x: f32,
    pub y: f32,
    pub kind: CollectibleKind,
    pub size: f32,
    /// One-way latch: collected items never return
    pub collected: bool,
    pub bob_phase: f32,
    pub bob_offset: f32,
}

impl Collectible {
    pub fn new(x: f32, y: f32, kind: CollectibleKind, rng: &mut SimRng) -> Self {
        Self {
            x,
            y,
            kind,
            size: BASE_SIZE,
            collected: false,
            // Desynchronize the bobbing across the level
            bob_phase: rng.range(0.0, std::f32::consts::TAU),
            bob_offset: 0.0,
        }
    }

    /// Advance the bob animation one tick
    pub fn advance(&mut self) {
        self.bob_phase += BOB_STEP;
        self.bob_offset = self.bob_phase.sin() * BOB_HEIGHT;
    }

    /// Radius of the circular pickup test, scaled from the item size
    pub fn pickup_radius(&self) -> f32 {
        self.size * 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bob_stays_bounded() {
        let mut rng = SimRng::new(5);
        let mut c = Collectible::new(100.0, 100.0, CollectibleKind::Coin, &mut rng);
        for _ in 0..1000 {
            c.advance();
            assert!(c.bob_offset.abs() <= BOB_HEIGHT);
        }
        // The anchor position itself never moves
        assert_eq!(c.x, 100.0);
        assert_eq!(c.y, 100.0);
    }

    #[test]
    fn test_scores() {
        assert_eq!(CollectibleKind::Coin.score(), 10);
        assert_eq!(CollectibleKind::Gem.score(), 50);
    }
}
