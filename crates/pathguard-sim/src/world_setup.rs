//! Entity spawn factories.
//!
//! Creates enemy and projectile entities with appropriate component bundles.

use hecs::World;

use pathguard_core::components::*;
use pathguard_core::config::GameRules;
use pathguard_core::enums::EnemyType;
use pathguard_core::types::Position;

use crate::path::PathModel;

/// Spawn an enemy at the start of the path with full hit points.
pub fn spawn_enemy(
    world: &mut World,
    path: &PathModel,
    rules: &GameRules,
    id: u32,
    enemy_type: EnemyType,
) -> hecs::Entity {
    let stats = rules.stats(enemy_type);
    world.spawn((
        Enemy {
            id,
            enemy_type,
            hp: stats.hp,
            max_hp: stats.hp,
            speed: stats.speed,
        },
        PathProgress::default(),
        path.position_at(0.0),
    ))
}

/// Spawn a projectile at `origin`, bound to the enemy with `target_id`.
pub fn spawn_projectile(
    world: &mut World,
    id: u32,
    origin: Position,
    target_id: u32,
    target_type: EnemyType,
) -> hecs::Entity {
    world.spawn((
        Projectile {
            id,
            target_id,
            color: target_type.projectile_color(),
        },
        origin,
    ))
}
