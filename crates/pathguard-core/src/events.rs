//! Events emitted by the simulation for UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// Something notable that happened during a tick (or a tap).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    EnemySpawned { enemy_id: u32, enemy_type: EnemyType },
    /// Enemy hp reached zero; one point scored.
    EnemyDefeated { enemy_id: u32 },
    /// Enemy reached the end of the path; one life lost.
    EnemyEscaped { enemy_id: u32 },
    ProjectileFired { projectile_id: u32, target_id: u32 },
    /// Projectile struck its target and took one hit point.
    ProjectileHit { projectile_id: u32, target_id: u32 },
    /// Projectile's target no longer exists; removed without effect.
    ProjectileDiscarded { projectile_id: u32, target_id: u32 },
    GameOver { score: u32 },
}
