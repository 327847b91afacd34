//! Simulation core.
//!
//! A fixed-tick world simulation: character physics, platform collision,
//! enemy behavior state machines, melee and stomp combat, pickups, and
//! camera tracking. Single-threaded and synchronous: one `Game::tick` per
//! frame, then the render layer reads the result. Nothing outside `tick`
//! mutates world state.
//!
//! Design notes:
//! - Collision is AABB everywhere except pickups, which use a generous
//!   circular proximity test on purpose.
//! - Only downward landings are resolved; side/ceiling contacts pass
//!   through. Kept deliberately.

pub mod constants;
pub mod geometry;
pub mod rng;
pub mod input;
pub mod platform;
pub mod collectible;
pub mod particles;
pub mod character;
pub mod combat;
pub mod level;
pub mod world;

pub use geometry::Aabb;
pub use input::InputSnapshot;
pub use level::{Level, LevelError};
pub use world::Game;
