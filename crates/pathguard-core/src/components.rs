//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// An enemy walking the path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    /// Unique id, assigned in spawn order.
    pub id: u32,
    pub enemy_type: EnemyType,
    pub hp: u32,
    pub max_hp: u32,
    /// Path units per second.
    pub speed: f64,
}

/// Distance travelled along the path (arc length). Never decreases.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PathProgress {
    pub distance: f64,
}

/// A homing projectile bound to one enemy for its whole flight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    /// Unique id, assigned in firing order.
    pub id: u32,
    /// Id of the enemy being pursued.
    pub target_id: u32,
    /// Tint captured from the target's type at launch.
    pub color: ProjectileColor,
}

// Position (from types.rs) is attached to both enemies and projectiles.
// For enemies it caches the rendered position derived from PathProgress.
