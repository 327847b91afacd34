//! Character simulation.
//!
//! One `Character` type covers the player and every enemy: a shared `Body`
//! carries the physics state, a `Brain` variant carries the kind-specific
//! payload, and the per-tick update dispatches on the tag alone, never on
//! field-presence checks.
//!
//! Collision resolution only handles landing from above. Side and ceiling
//! contacts pass through untouched; characters can overlap platform sides.
//! This is a deliberate simplification, not a bug to fix quietly.

use serde::{Serialize, Deserialize};
use super::constants::*;
use super::geometry::Aabb;
use super::input::InputSnapshot;
use super::platform::Platform;
use super::rng::SimRng;

/// Shared physics state for all characters
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Body {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub vx: f32,
    pub vy: f32,
    pub on_ground: bool,
    pub facing_right: bool,
    /// Two-frame sprite sheet index (0 or 1)
    pub frame: u8,
}

impl Body {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            width: CHARACTER_SIZE,
            height: CHARACTER_SIZE,
            vx: 0.0,
            vy: 0.0,
            on_ground: false,
            facing_right: true,
            frame: 1,
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.x, self.y, self.width, self.height)
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.width * 0.5
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height * 0.5
    }
}

/// Sword swing state: a short active window followed by a longer cooldown.
/// The cooldown blocks new swings but never movement or jumping.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SwordState {
    pub attacking: bool,
    pub attack_timer: u32,
    pub cooldown_timer: u32,
}

impl SwordState {
    /// Begin a swing unless one is active or cooling down.
    /// Returns whether the swing started.
    pub fn try_start(&mut self) -> bool {
        if self.attacking || self.cooldown_timer > 0 {
            return false;
        }
        self.attacking = true;
        self.attack_timer = SWORD_ATTACK_TICKS;
        self.cooldown_timer = SWORD_COOLDOWN_TICKS;
        true
    }

    /// Tick both timers down
    pub fn advance(&mut self) {
        if self.attack_timer > 0 {
            self.attack_timer -= 1;
            if self.attack_timer == 0 {
                self.attacking = false;
            }
        }
        if self.cooldown_timer > 0 {
            self.cooldown_timer -= 1;
        }
    }

    /// Swing progress in [0, 1] while attacking (for the renderer's arc)
    pub fn swing_progress(&self) -> f32 {
        1.0 - self.attack_timer as f32 / SWORD_ATTACK_TICKS as f32
    }
}

/// Player-only state
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PlayerState {
    /// Jumps spent since last landing (double jump budget: 2)
    pub jump_count: u8,
    /// Edge latch: the jump key must be released between jumps
    pub jump_held: bool,
    pub is_stomping: bool,
    pub sword: SwordState,
}

/// Walks along platforms, hops on a randomized timer, and pauses at ledges
/// and world edges before turning around
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WalkerState {
    pub direction: f32,
    /// Ticks until the next hop while grounded
    pub hop_timer: i32,
    pub idle: bool,
    pub idle_timer: u32,
}

/// Bounces between a fixed pair of x bounds, ignoring what it stands on
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PatrolState {
    pub direction: f32,
    pub start_x: f32,
    pub end_x: f32,
    pub speed: f32,
}

/// Drifts horizontally while riding a vertical sinusoid; no gravity,
/// no platform contact
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FlyerState {
    pub direction: f32,
    pub center_y: f32,
    pub amplitude: f32,
    pub phase: f32,
    pub phase_speed: f32,
}

/// Behavior payload, selected once at spawn
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum Brain {
    Player(PlayerState),
    Walking(WalkerState),
    Patrolling(PatrolState),
    Flying(FlyerState),
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Character {
    pub body: Body,
    pub brain: Brain,
    /// One-way latch. Dead NPCs leave simulation and drawing permanently;
    /// the player is never marked dead here (lives are game-level state).
    pub dead: bool,
}

impl Character {
    pub fn player(x: f32, y: f32) -> Self {
        Self {
            body: Body::new(x, y),
            brain: Brain::Player(PlayerState::default()),
            dead: false,
        }
    }

    pub fn walker(x: f32, y: f32, rng: &mut SimRng) -> Self {
        Self {
            body: Body::new(x, y),
            brain: Brain::Walking(WalkerState {
                direction: rng.sign(),
                hop_timer: rng.range_i32(WALKER_HOP_INITIAL.0, WALKER_HOP_INITIAL.1),
                idle: false,
                idle_timer: 0,
            }),
            dead: false,
        }
    }

    pub fn patroller(x: f32, y: f32, rng: &mut SimRng) -> Self {
        Self {
            body: Body::new(x, y),
            brain: Brain::Patrolling(PatrolState {
                direction: rng.sign(),
                start_x: x,
                end_x: x + PATROL_RANGE,
                speed: PATROL_SPEED,
            }),
            dead: false,
        }
    }

    pub fn flyer(x: f32, y: f32, rng: &mut SimRng) -> Self {
        Self {
            body: Body::new(x, y),
            brain: Brain::Flying(FlyerState {
                direction: rng.sign(),
                center_y: y,
                amplitude: FLYER_AMPLITUDE,
                phase: rng.range(0.0, std::f32::consts::TAU),
                phase_speed: FLYER_PHASE_SPEED,
            }),
            dead: false,
        }
    }

    pub fn is_player(&self) -> bool {
        matches!(self.brain, Brain::Player(_))
    }

    /// One simulation tick: gravity, behavior policy, integration, landing
    /// resolution, world clamp, terminal velocity. That order is fixed.
    pub fn advance(&mut self, input: &InputSnapshot, platforms: &[Platform], rng: &mut SimRng) {
        self.body.vy += GRAVITY;

        match &mut self.brain {
            Brain::Player(state) => update_player(&mut self.body, state, input),
            Brain::Walking(state) => update_walker(&mut self.body, state, platforms, rng),
            Brain::Patrolling(state) => update_patroller(&mut self.body, state),
            Brain::Flying(state) => update_flyer(&mut self.body, state),
        }

        self.body.x += self.body.vx;
        self.body.y += self.body.vy;

        if resolve_landings(&mut self.body, platforms) {
            if let Brain::Player(state) = &mut self.brain {
                state.jump_count = 0;
            }
        }

        self.body.x = self.body.x.clamp(0.0, WORLD_WIDTH - self.body.width);

        if self.body.vy > TERMINAL_VELOCITY {
            self.body.vy = TERMINAL_VELOCITY;
        }
    }
}

/// Landing resolution: snap onto any platform the body fell onto this tick.
/// Only catches falls from above: the previous tick's bottom edge must have
/// been at or above the platform top (within tolerance). Returns whether a
/// landing happened.
fn resolve_landings(body: &mut Body, platforms: &[Platform]) -> bool {
    body.on_ground = false;
    let mut landed = false;
    for platform in platforms {
        if !body.aabb().overlaps(&platform.aabb()) {
            continue;
        }
        let prev_bottom = body.y + body.height - body.vy;
        if body.vy > 0.0 && prev_bottom <= platform.y + LANDING_TOLERANCE {
            body.y = platform.y - body.height;
            body.vy = 0.0;
            body.on_ground = true;
            landed = true;
        }
    }
    landed
}

fn update_player(body: &mut Body, state: &mut PlayerState, input: &InputSnapshot) {
    // Instantaneous horizontal control, no acceleration model
    body.vx = 0.0;
    if input.left {
        body.vx = -PLAYER_SPEED;
        body.facing_right = false;
        body.frame = 0;
    }
    if input.right {
        body.vx = PLAYER_SPEED;
        body.facing_right = true;
        body.frame = 1;
    }

    // Double jump: edge-triggered, budget of two until the next landing
    if input.jump && state.jump_count < 2 && !state.jump_held {
        body.vy = PLAYER_JUMP_POWER;
        state.jump_count += 1;
        body.on_ground = false;
        state.jump_held = true;
    }
    if !input.jump {
        state.jump_held = false;
    }

    // Stomp: only meaningful while already falling
    if body.vy > 0.0 && input.down {
        body.vy = body.vy.max(STOMP_FALL_SPEED);
        state.is_stomping = true;
    } else {
        state.is_stomping = false;
    }

    if input.attack {
        state.sword.try_start();
    }
    state.sword.advance();
}

fn update_walker(body: &mut Body, state: &mut WalkerState, platforms: &[Platform], rng: &mut SimRng) {
    if state.idle {
        state.idle_timer += 1;
        body.vx = 0.0;
        body.frame = if state.idle_timer < WALKER_IDLE_TICKS / 2 { 0 } else { 1 };
        if state.idle_timer >= WALKER_IDLE_TICKS {
            state.idle = false;
            state.idle_timer = 0;
            state.direction = -state.direction;
        }
        return;
    }

    // Ledge probe: stop before walking off the platform ahead
    if body.on_ground {
        let probe_x = if state.direction > 0.0 {
            body.x + body.width + WALKER_PROBE_AHEAD
        } else {
            body.x - WALKER_PROBE_AHEAD
        };
        let probe_y = body.y + body.height + WALKER_PROBE_DROP;
        let platform_ahead = platforms.iter().any(|p| {
            probe_x > p.x
                && probe_x < p.x + p.width
                && probe_y > p.y
                && probe_y < p.y + p.height + WALKER_PROBE_BAND
        });

        let at_world_edge = body.x <= 0.0 || body.x >= WORLD_WIDTH - body.width;
        if !platform_ahead || at_world_edge {
            state.idle = true;
            state.idle_timer = 0;
            return;
        }
    }

    body.vx = state.direction * NPC_SPEED;
    body.frame = if state.direction > 0.0 { 1 } else { 0 };
    body.facing_right = state.direction > 0.0;

    state.hop_timer -= 1;
    if state.hop_timer <= 0 && body.on_ground {
        body.vy = NPC_JUMP_POWER;
        state.hop_timer = rng.range_i32(WALKER_HOP_RESET.0, WALKER_HOP_RESET.1);
    }
}

fn update_patroller(body: &mut Body, state: &mut PatrolState) {
    if body.x >= state.end_x {
        state.direction = -1.0;
    } else if body.x <= state.start_x {
        state.direction = 1.0;
    }
    body.vx = state.direction * state.speed;
    body.frame = if state.direction > 0.0 { 1 } else { 0 };
    body.facing_right = state.direction > 0.0;
}

fn update_flyer(body: &mut Body, state: &mut FlyerState) {
    state.phase += state.phase_speed;
    body.y = state.center_y + state.phase.sin() * state.amplitude;
    body.vx = state.direction * NPC_SPEED;
    body.vy = 0.0;
    body.frame = if state.direction > 0.0 { 1 } else { 0 };

    // Turn around near the world edges
    if body.x <= FLYER_TURN_MARGIN && state.direction < 0.0 {
        state.direction = 1.0;
    } else if body.x >= WORLD_WIDTH - body.width - FLYER_TURN_MARGIN && state.direction > 0.0 {
        state.direction = -1.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::platform::PlatformStyle;

    fn floor() -> Vec<Platform> {
        vec![Platform::ground(0.0, 430.0, 6400.0, 50.0)]
    }

    fn grounded_player(platforms: &[Platform]) -> Character {
        let mut rng = SimRng::new(1);
        let mut player = Character::player(100.0, 380.0);
        // Settle onto the floor
        for _ in 0..60 {
            player.advance(&InputSnapshot::default(), platforms, &mut rng);
        }
        assert!(player.body.on_ground);
        player
    }

    #[test]
    fn test_gravity_pulls_airborne_character_down() {
        let mut rng = SimRng::new(1);
        let mut player = Character::player(100.0, 100.0);
        let y0 = player.body.y;
        player.advance(&InputSnapshot::default(), &[], &mut rng);
        assert!(player.body.y > y0);
        assert!(player.body.vy > 0.0);
    }

    #[test]
    fn test_terminal_velocity_cap() {
        let mut rng = SimRng::new(1);
        let mut player = Character::player(100.0, -5000.0);
        for _ in 0..200 {
            player.advance(&InputSnapshot::default(), &[], &mut rng);
            assert!(player.body.vy <= TERMINAL_VELOCITY);
        }
        assert_eq!(player.body.vy, TERMINAL_VELOCITY);
    }

    #[test]
    fn test_landing_snaps_to_platform_top() {
        let platforms = floor();
        let player = grounded_player(&platforms);
        assert_eq!(player.body.y, 430.0 - CHARACTER_SIZE);
        assert_eq!(player.body.vy, 0.0);
    }

    #[test]
    fn test_no_landing_from_the_side() {
        // A tall wall the character is already overlapping mid-fall: the
        // previous bottom edge is far below the top, so no snap happens
        let wall = vec![Platform::fixed(90.0, 100.0, 40.0, 300.0, PlatformStyle::Metal)];
        let mut rng = SimRng::new(1);
        let mut player = Character::player(100.0, 300.0);
        player.advance(&InputSnapshot::default(), &wall, &mut rng);
        assert!(!player.body.on_ground);
        assert!(player.body.vy > 0.0);
    }

    #[test]
    fn test_double_jump_budget() {
        let platforms = floor();
        let mut rng = SimRng::new(1);
        let mut player = grounded_player(&platforms);

        let jump = InputSnapshot { jump: true, ..Default::default() };
        let release = InputSnapshot::default();

        player.advance(&jump, &platforms, &mut rng);
        assert_eq!(player.body.vy, PLAYER_JUMP_POWER);
        player.advance(&release, &platforms, &mut rng);

        player.advance(&jump, &platforms, &mut rng);
        assert_eq!(player.body.vy, PLAYER_JUMP_POWER);
        player.advance(&release, &platforms, &mut rng);

        // Third press mid-air: budget exhausted, gravity keeps acting
        let vy_before = player.body.vy;
        player.advance(&jump, &platforms, &mut rng);
        assert_eq!(player.body.vy, vy_before + GRAVITY);

        let Brain::Player(state) = player.brain else { unreachable!() };
        assert_eq!(state.jump_count, 2);
    }

    #[test]
    fn test_held_jump_key_does_not_retrigger() {
        let platforms = floor();
        let mut rng = SimRng::new(1);
        let mut player = grounded_player(&platforms);

        let jump = InputSnapshot { jump: true, ..Default::default() };
        for _ in 0..10 {
            player.advance(&jump, &platforms, &mut rng);
        }
        let Brain::Player(state) = player.brain else { unreachable!() };
        assert_eq!(state.jump_count, 1);
    }

    #[test]
    fn test_landing_restores_jump_budget() {
        let platforms = floor();
        let mut rng = SimRng::new(1);
        let mut player = grounded_player(&platforms);

        player.advance(&InputSnapshot { jump: true, ..Default::default() }, &platforms, &mut rng);
        // Fall back down and land
        for _ in 0..120 {
            player.advance(&InputSnapshot::default(), &platforms, &mut rng);
        }
        assert!(player.body.on_ground);
        let Brain::Player(state) = player.brain else { unreachable!() };
        assert_eq!(state.jump_count, 0);
    }

    #[test]
    fn test_stomp_accelerates_fall() {
        let mut rng = SimRng::new(1);
        let mut player = Character::player(100.0, 100.0);
        // Get falling first
        player.advance(&InputSnapshot::default(), &[], &mut rng);
        player.advance(&InputSnapshot { down: true, ..Default::default() }, &[], &mut rng);
        let Brain::Player(state) = player.brain else { unreachable!() };
        assert!(state.is_stomping);
        assert_eq!(player.body.vy, STOMP_FALL_SPEED);
    }

    #[test]
    fn test_stomp_clears_without_down_input() {
        let mut rng = SimRng::new(1);
        let mut player = Character::player(100.0, 100.0);
        player.advance(&InputSnapshot::default(), &[], &mut rng);
        player.advance(&InputSnapshot { down: true, ..Default::default() }, &[], &mut rng);
        player.advance(&InputSnapshot::default(), &[], &mut rng);
        let Brain::Player(state) = player.brain else { unreachable!() };
        assert!(!state.is_stomping);
    }

    #[test]
    fn test_sword_cooldown_blocks_restart() {
        let mut sword = SwordState::default();
        assert!(sword.try_start());
        assert!(!sword.try_start());
        // Swing ends after its window, cooldown still running
        for _ in 0..SWORD_ATTACK_TICKS {
            sword.advance();
        }
        assert!(!sword.attacking);
        assert!(!sword.try_start());
        // Cooldown has 70 ticks left at this point
        for _ in 0..(SWORD_COOLDOWN_TICKS - SWORD_ATTACK_TICKS) {
            sword.advance();
        }
        assert!(sword.try_start());
    }

    #[test]
    fn test_walker_idles_at_ledge_then_turns() {
        // A platform just wide enough that the forward probe runs out
        let platforms = vec![Platform::fixed(0.0, 430.0, 200.0, 15.0, PlatformStyle::Wood)];
        let mut rng = SimRng::new(2);
        let mut walker = Character::walker(60.0, 382.0, &mut rng);
        // Force a known direction so the probe result is predictable
        if let Brain::Walking(state) = &mut walker.brain {
            state.direction = 1.0;
            state.hop_timer = 10_000;
        }

        let input = InputSnapshot::default();
        let mut went_idle = false;
        let mut direction_after_idle = 0.0;
        for _ in 0..600 {
            walker.advance(&input, &platforms, &mut rng);
            if let Brain::Walking(state) = &walker.brain {
                if state.idle {
                    went_idle = true;
                }
                if went_idle && !state.idle {
                    direction_after_idle = state.direction;
                    break;
                }
            }
        }
        assert!(went_idle, "walker never stopped at the ledge");
        assert_eq!(direction_after_idle, -1.0);
    }

    #[test]
    fn test_patroller_stays_in_range() {
        let platforms = floor();
        let mut rng = SimRng::new(3);
        let mut patroller = Character::patroller(1000.0, 382.0, &mut rng);
        let input = InputSnapshot::default();
        for _ in 0..2000 {
            patroller.advance(&input, &platforms, &mut rng);
            // One step of slack past each bound before the flip lands
            assert!(patroller.body.x >= 1000.0 - PATROL_SPEED);
            assert!(patroller.body.x <= 1200.0 + PATROL_SPEED);
        }
    }

    #[test]
    fn test_flyer_ignores_gravity_and_platforms() {
        let platforms = floor();
        let mut rng = SimRng::new(4);
        let mut flyer = Character::flyer(500.0, 200.0, &mut rng);
        let input = InputSnapshot::default();
        for _ in 0..1000 {
            flyer.advance(&input, &platforms, &mut rng);
            assert!((flyer.body.y - 200.0).abs() <= FLYER_AMPLITUDE + 0.001);
            assert!(!flyer.body.on_ground);
        }
    }

    #[test]
    fn test_flyer_turns_at_world_margin() {
        let mut rng = SimRng::new(4);
        let mut flyer = Character::flyer(60.0, 200.0, &mut rng);
        if let Brain::Flying(state) = &mut flyer.brain {
            state.direction = -1.0;
        }
        let input = InputSnapshot::default();
        for _ in 0..100 {
            flyer.advance(&input, &[], &mut rng);
        }
        let Brain::Flying(state) = flyer.brain else { unreachable!() };
        assert_eq!(state.direction, 1.0);
        assert!(flyer.body.x >= FLYER_TURN_MARGIN - NPC_SPEED);
    }
}
