//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are plain functions that take `&mut World` (or `&World` for read-only).
//! They do not own state. All state lives in components and the engine.

pub mod combat;
pub mod movement;
pub mod projectile;
pub mod snapshot;
pub mod spawner;
pub mod targeting;
