//! Snapshot system: queries the ECS world and builds a complete GameStateSnapshot.
//!
//! This system is read-only and never modifies the world.

use hecs::World;

use pathguard_core::components::*;
use pathguard_core::enums::GamePhase;
use pathguard_core::events::GameEvent;
use pathguard_core::state::*;
use pathguard_core::types::{Position, SimTime};

use crate::path::PathModel;
use crate::scoring::ScoreState;

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    path: &PathModel,
    events: Vec<GameEvent>,
    score: &ScoreState,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        phase,
        tower: path.end(),
        path: path.points().to_vec(),
        enemies: build_enemies(world),
        projectiles: build_projectiles(world),
        events,
        score: score.view(),
    }
}

/// Build EnemyView list, in spawn order.
fn build_enemies(world: &World) -> Vec<EnemyView> {
    let mut enemies: Vec<EnemyView> = world
        .query::<(&Enemy, &PathProgress, &Position)>()
        .iter()
        .map(|(_, (enemy, progress, pos))| EnemyView {
            id: enemy.id,
            enemy_type: enemy.enemy_type,
            position: *pos,
            hp: enemy.hp,
            max_hp: enemy.max_hp,
            progress: progress.distance,
        })
        .collect();

    enemies.sort_by_key(|e| e.id);
    enemies
}

/// Build ProjectileView list, in firing order.
fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    let mut projectiles: Vec<ProjectileView> = world
        .query::<(&Projectile, &Position)>()
        .iter()
        .map(|(_, (projectile, pos))| ProjectileView {
            id: projectile.id,
            position: *pos,
            color: projectile.color,
            target_id: projectile.target_id,
        })
        .collect();

    projectiles.sort_by_key(|p| p.id);
    projectiles
}
