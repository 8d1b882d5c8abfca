//! Target selection for a tap.
//!
//! Picks the live enemy closest to the launch point. Ties go to the enemy
//! spawned first.

use hecs::World;

use pathguard_core::components::Enemy;
use pathguard_core::enums::EnemyType;
use pathguard_core::types::Position;

/// The enemy chosen for a new projectile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetChoice {
    pub enemy_id: u32,
    pub enemy_type: EnemyType,
    pub distance: f64,
}

/// Select the enemy nearest to `launch`, or `None` when there are no enemies.
pub fn select_target(world: &World, launch: Position) -> Option<TargetChoice> {
    let mut candidates: Vec<TargetChoice> = world
        .query::<(&Enemy, &Position)>()
        .iter()
        .map(|(_, (enemy, pos))| TargetChoice {
            enemy_id: enemy.id,
            enemy_type: enemy.enemy_type,
            distance: pos.range_to(&launch),
        })
        .collect();

    // ECS iteration order is not spawn order; ids are.
    candidates.sort_by_key(|c| c.enemy_id);
    nearest(candidates)
}

/// First candidate with the strictly smallest distance.
pub fn nearest(candidates: impl IntoIterator<Item = TargetChoice>) -> Option<TargetChoice> {
    let mut best: Option<TargetChoice> = None;
    for candidate in candidates {
        match best {
            Some(b) if candidate.distance >= b.distance => {}
            _ => best = Some(candidate),
        }
    }
    best
}
