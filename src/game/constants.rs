//! Gameplay tuning constants.
//!
//! Everything the simulation needs to reproduce the game feel lives here.
//! The render layer keeps its own colors and layout values.

/// Viewport size in world units (1 unit = 1 screen pixel)
pub const SCREEN_WIDTH: f32 = 640.0;
pub const SCREEN_HEIGHT: f32 = 480.0;

/// Level extents. The world is a single horizontal strip: ten screens wide,
/// one screen tall.
pub const WORLD_WIDTH: f32 = 6400.0;
pub const WORLD_HEIGHT: f32 = 480.0;

/// Target simulation rate (ticks per second)
pub const TICK_RATE: f64 = 60.0;

// Physics (per-tick units)
pub const GRAVITY: f32 = 0.4;
pub const TERMINAL_VELOCITY: f32 = 15.0;
pub const PLAYER_SPEED: f32 = 2.2;
pub const NPC_SPEED: f32 = 0.8;
pub const PLAYER_JUMP_POWER: f32 = -9.0;
pub const NPC_JUMP_POWER: f32 = -8.0;

/// How far below a platform top the previous tick's bottom edge may sit
/// while still counting as a landing from above
pub const LANDING_TOLERANCE: f32 = 10.0;

/// Character bodies are 16 px sprite frames drawn at 3x scale
pub const SPRITE_SCALE: f32 = 3.0;
pub const CHARACTER_SIZE: f32 = 48.0;

// Player
pub const PLAYER_START_X: f32 = 100.0;
pub const PLAYER_START_Y: f32 = 380.0;
pub const PLAYER_LIVES: u32 = 3;
pub const INVINCIBILITY_TICKS: u32 = 180;
/// Minimum downward speed while holding a stomp
pub const STOMP_FALL_SPEED: f32 = 15.0;
/// Upward kick after a successful stomp kill
pub const STOMP_BOUNCE: f32 = -12.0;

// Sword
pub const SWORD_ATTACK_TICKS: u32 = 20;
pub const SWORD_COOLDOWN_TICKS: u32 = 90;
pub const SWORD_REACH: f32 = 60.0;
pub const SWORD_HITBOX_HEIGHT: f32 = 45.0;

// Scoring
pub const COIN_SCORE: u32 = 10;
pub const GEM_SCORE: u32 = 50;
pub const STOMP_KILL_SCORE: u32 = 50;
pub const SWORD_KILL_SCORE: u32 = 75;
pub const WIN_SCORE: u32 = 1000;

/// Distance below the world bottom that counts as falling out
pub const FALL_OUT_MARGIN: f32 = 100.0;
/// Flying enemies turn around this far from the world edges
pub const FLYER_TURN_MARGIN: f32 = 50.0;

// Goal flag
pub const GOAL_X: f32 = 6300.0;
pub const GOAL_Y: f32 = 370.0;
pub const GOAL_WIDTH: f32 = 60.0;
pub const GOAL_HEIGHT: f32 = 80.0;

// Walking enemy behavior
/// Full idle cycle length in ticks; the animation frame swaps at the midpoint
pub const WALKER_IDLE_TICKS: u32 = 120;
/// Forward ledge probe: horizontal reach and vertical drop below the feet
pub const WALKER_PROBE_AHEAD: f32 = 30.0;
pub const WALKER_PROBE_DROP: f32 = 10.0;
/// Extra platform depth accepted by the probe
pub const WALKER_PROBE_BAND: f32 = 20.0;
/// Hop timer ranges in ticks (initial roll, then re-rolls)
pub const WALKER_HOP_INITIAL: (i32, i32) = (30, 90);
pub const WALKER_HOP_RESET: (i32, i32) = (60, 180);

// Patrolling enemy behavior
pub const PATROL_RANGE: f32 = 200.0;
pub const PATROL_SPEED: f32 = 1.0;

// Flying enemy behavior
pub const FLYER_AMPLITUDE: f32 = 40.0;
pub const FLYER_PHASE_SPEED: f32 = 0.03;
