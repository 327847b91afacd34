//! Particle effects.
//!
//! Short-lived visual tokens spawned in bursts: dust, pickup sparkles,
//! damage flashes, kill splatter. Particles never block or interact with
//! anything; they exist only to be drawn and to expire.

use serde::{Serialize, Deserialize};
use super::rng::SimRng;

/// Per-tick downward pull on particles (lighter than character gravity)
const PARTICLE_GRAVITY: f32 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParticleKind {
    Dust,
    Sparkle,
    Damage,
    Blood,
}

impl ParticleKind {
    /// Lifetime in ticks
    fn lifetime(self) -> u32 {
        match self {
            ParticleKind::Blood => 40,
            _ => 30,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    /// Remaining life in ticks; the particle is removed at 0
    pub life: u32,
    pub max_life: u32,
    pub size: f32,
    pub kind: ParticleKind,
}

impl Particle {
    pub fn new(x: f32, y: f32, kind: ParticleKind, rng: &mut SimRng) -> Self {
        let life = kind.lifetime();
        let (vx, vy, size) = match kind {
            // Splatter flies in every direction, larger chunks
            ParticleKind::Blood => (
                (rng.next() - 0.5) * 6.0,
                (rng.next() - 0.5) * 6.0,
                rng.range_i32(3, 9) as f32,
            ),
            // Everything else drifts with a slight upward bias
            _ => (
                (rng.next() - 0.5) * 4.0,
                (rng.next() - 0.5) * 4.0 - 2.0,
                rng.range_i32(2, 6) as f32,
            ),
        };
        Self { x, y, vx, vy, life, max_life: life, size, kind }
    }

    /// Advance one tick
    pub fn advance(&mut self) {
        self.x += self.vx;
        self.y += self.vy;
        self.vy += PARTICLE_GRAVITY;
        self.life = self.life.saturating_sub(1);
    }

    pub fn is_dead(&self) -> bool {
        self.life == 0
    }

    /// Remaining life as a fraction (1 = just spawned, 0 = expiring).
    /// The renderer uses this for alpha fade.
    pub fn fade(&self) -> f32 {
        self.life as f32 / self.max_life as f32
    }
}

/// Spawn a one-shot burst at a point (hits, pickups, kills)
pub fn spawn_burst(
    particles: &mut Vec<Particle>,
    x: f32,
    y: f32,
    kind: ParticleKind,
    count: usize,
    rng: &mut SimRng,
) {
    for _ in 0..count {
        particles.push(Particle::new(x, y, kind, rng));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_life_counts_down_to_death() {
        let mut rng = SimRng::new(9);
        let mut p = Particle::new(0.0, 0.0, ParticleKind::Dust, &mut rng);
        assert_eq!(p.life, 30);
        for i in (0..30).rev() {
            p.advance();
            assert_eq!(p.life, i);
        }
        assert!(p.is_dead());
        // Further advances stay dead, no underflow
        p.advance();
        assert!(p.is_dead());
    }

    #[test]
    fn test_blood_lives_longer() {
        let mut rng = SimRng::new(9);
        let blood = Particle::new(0.0, 0.0, ParticleKind::Blood, &mut rng);
        let spark = Particle::new(0.0, 0.0, ParticleKind::Sparkle, &mut rng);
        assert_eq!(blood.max_life, 40);
        assert_eq!(spark.max_life, 30);
    }

    #[test]
    fn test_burst_count() {
        let mut rng = SimRng::new(3);
        let mut particles = Vec::new();
        spawn_burst(&mut particles, 10.0, 20.0, ParticleKind::Sparkle, 8, &mut rng);
        assert_eq!(particles.len(), 8);
        assert!(particles.iter().all(|p| p.x == 10.0 && p.y == 20.0));
    }
}
