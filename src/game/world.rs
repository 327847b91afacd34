//! Game world.
//!
//! The single owning aggregate for all entity state. All mutation flows
//! through `Game::tick`; the render layer reads the fields afterwards and
//! never writes. Once the run ends (won or out of lives) the world
//! freezes; only presentation keeps going.

use super::character::{Brain, Character};
use super::collectible::{Collectible, CollectibleKind};
use super::combat::{is_stomp_kill, sword_hitbox, DamageState};
use super::constants::*;
use super::geometry::Aabb;
use super::input::InputSnapshot;
use super::level::{Level, LevelError, NpcKind};
use super::particles::{spawn_burst, Particle, ParticleKind};
use super::platform::Platform;
use super::rng::SimRng;

pub struct Game {
    pub platforms: Vec<Platform>,
    pub player: Character,
    pub npcs: Vec<Character>,
    pub collectibles: Vec<Collectible>,
    pub particles: Vec<Particle>,

    /// Only ever increases
    pub score: u32,
    pub lives: u32,
    pub coins_collected: u32,
    pub gems_collected: u32,
    pub damage_state: DamageState,
    /// Derived from the player position each tick, never authoritative
    pub camera_x: f32,
    /// Ticks simulated so far
    pub frame: u64,
    /// Terminal latches: once set, the simulation stops advancing
    pub has_won: bool,
    pub is_dead: bool,

    world_width: f32,
    world_height: f32,
    player_start: (f32, f32),
    goal: Aabb,
    rng: SimRng,
}

impl Game {
    /// Build the world from a validated level
    pub fn new(level: Level, seed: u32) -> Self {
        let mut rng = SimRng::new(seed);

        let player = Character::player(level.player_start.0, level.player_start.1);

        let npcs = level
            .npc_spawns
            .iter()
            .map(|&(x, y, kind)| match kind {
                NpcKind::Walking => Character::walker(x, y, &mut rng),
                NpcKind::Patrolling => Character::patroller(x, y, &mut rng),
                NpcKind::Flying => Character::flyer(x, y, &mut rng),
            })
            .collect();

        let collectibles = level
            .collectible_spawns
            .iter()
            .map(|&(x, y, kind)| Collectible::new(x, y, kind, &mut rng))
            .collect();

        Self {
            platforms: level.platforms,
            player,
            npcs,
            collectibles,
            particles: Vec::new(),
            score: 0,
            lives: PLAYER_LIVES,
            coins_collected: 0,
            gems_collected: 0,
            damage_state: DamageState::Vulnerable,
            camera_x: 0.0,
            frame: 0,
            has_won: false,
            is_dead: false,
            world_width: level.world_width,
            world_height: level.world_height,
            player_start: level.player_start,
            goal: level.goal,
            rng,
        }
    }

    /// Build the shipped level directly
    pub fn from_level(seed: u32) -> Result<Self, LevelError> {
        Ok(Self::new(Level::build()?, seed))
    }

    /// Remaining post-hit invincibility, for the HUD
    pub fn invincibility_ticks(&self) -> u32 {
        self.damage_state.ticks_left()
    }

    pub fn goal(&self) -> Aabb {
        self.goal
    }

    /// Advance the world one tick. The only mutation entry point.
    pub fn tick(&mut self, input: &InputSnapshot) {
        if self.is_dead || self.has_won {
            return;
        }
        self.frame += 1;

        self.damage_state.advance();

        for platform in &mut self.platforms {
            platform.advance();
        }

        self.player.advance(input, &self.platforms, &mut self.rng);
        for npc in &mut self.npcs {
            if !npc.dead {
                npc.advance(input, &self.platforms, &mut self.rng);
            }
        }

        for collectible in &mut self.collectibles {
            collectible.advance();
        }

        self.particles.retain(|p| !p.is_dead());
        for particle in &mut self.particles {
            particle.advance();
        }

        self.resolve_pickups();
        self.resolve_win();
        self.resolve_fall_out();
        self.resolve_sword_hits();
        self.resolve_body_contacts();

        self.camera_x = (self.player.body.x - SCREEN_WIDTH / 2.0 + self.player.body.width / 2.0)
            .clamp(0.0, self.world_width - SCREEN_WIDTH);
    }

    /// Circular proximity pickup: generous on purpose, unlike combat
    fn resolve_pickups(&mut self) {
        let px = self.player.body.center_x();
        let py = self.player.body.center_y();
        for collectible in &mut self.collectibles {
            if collectible.collected {
                continue;
            }
            let dx = px - collectible.x;
            let dy = py - collectible.y;
            if (dx * dx + dy * dy).sqrt() < collectible.pickup_radius() {
                collectible.collected = true;
                self.score += collectible.kind.score();
                match collectible.kind {
                    CollectibleKind::Coin => self.coins_collected += 1,
                    CollectibleKind::Gem => self.gems_collected += 1,
                }
                spawn_burst(
                    &mut self.particles,
                    collectible.x,
                    collectible.y,
                    ParticleKind::Sparkle,
                    8,
                    &mut self.rng,
                );
            }
        }
    }

    /// Winning requires the whole player inside the goal rectangle
    fn resolve_win(&mut self) {
        if self.goal.contains_aabb(&self.player.body.aabb()) {
            self.has_won = true;
            self.score += WIN_SCORE;
        }
    }

    /// Falling past the world bottom costs a life and respawns at the start
    fn resolve_fall_out(&mut self) {
        if self.player.body.y <= self.world_height + FALL_OUT_MARGIN {
            return;
        }
        self.damage_player();
        if !self.is_dead {
            self.player.body.x = self.player_start.0;
            self.player.body.y = self.player_start.1;
            self.player.body.vx = 0.0;
            self.player.body.vy = 0.0;
        }
    }

    fn resolve_sword_hits(&mut self) {
        let Brain::Player(state) = &self.player.brain else { return };
        let Some(hitbox) = sword_hitbox(&self.player.body, &state.sword) else { return };

        for npc in &mut self.npcs {
            if npc.dead || !hitbox.overlaps(&npc.body.aabb()) {
                continue;
            }
            npc.dead = true;
            self.score += SWORD_KILL_SCORE;
            spawn_burst(
                &mut self.particles,
                npc.body.center_x(),
                npc.body.center_y(),
                ParticleKind::Blood,
                20,
                &mut self.rng,
            );
        }
    }

    /// Player/enemy body overlap: a valid stomp kills, anything else hurts
    fn resolve_body_contacts(&mut self) {
        if self.damage_state.is_invincible() {
            return;
        }
        let stomping = matches!(&self.player.brain, Brain::Player(s) if s.is_stomping);
        let player_box = self.player.body.aabb();

        let mut bounce = false;
        let mut hurt = false;
        for npc in &mut self.npcs {
            if npc.dead || !player_box.overlaps(&npc.body.aabb()) {
                continue;
            }
            if is_stomp_kill(&self.player.body, stomping, &npc.body) {
                npc.dead = true;
                self.score += STOMP_KILL_SCORE;
                bounce = true;
                spawn_burst(
                    &mut self.particles,
                    npc.body.center_x(),
                    npc.body.center_y(),
                    ParticleKind::Sparkle,
                    15,
                    &mut self.rng,
                );
            } else {
                hurt = true;
            }
        }

        if bounce {
            self.player.body.vy = STOMP_BOUNCE;
        }
        if hurt {
            self.damage_player();
        }
    }

    /// One hit: lose a life, flash particles, start the invincibility
    /// window. A no-op while invincible or after the run already ended.
    fn damage_player(&mut self) {
        if self.damage_state.is_invincible() || self.is_dead {
            return;
        }
        self.lives = self.lives.saturating_sub(1);
        spawn_burst(
            &mut self.particles,
            self.player.body.center_x(),
            self.player.body.center_y(),
            ParticleKind::Damage,
            10,
            &mut self.rng,
        );
        self.damage_state.trigger();
        if self.lives == 0 {
            self.is_dead = true;
        }
    }
}
