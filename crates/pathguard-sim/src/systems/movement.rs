//! Path-following movement system.
//!
//! Advances every enemy's progress by `speed * DT`, refreshes its cached
//! position, and evicts enemies that reach the end of the path. Eviction
//! costs exactly one life and happens in the same pass, so an escaped enemy
//! is gone before projectiles are resolved this tick.

use hecs::{Entity, World};
use log::debug;

use pathguard_core::components::{Enemy, PathProgress};
use pathguard_core::constants::DT;
use pathguard_core::events::GameEvent;
use pathguard_core::types::Position;

use crate::path::PathModel;
use crate::scoring::ScoreState;

/// Run movement for all enemies. Escapes are reported in spawn order.
pub fn run(
    world: &mut World,
    path: &PathModel,
    score: &mut ScoreState,
    events: &mut Vec<GameEvent>,
    despawn_buffer: &mut Vec<Entity>,
) {
    despawn_buffer.clear();
    let mut escaped: Vec<(u32, Entity)> = Vec::new();

    for (entity, (enemy, progress, pos)) in
        world.query_mut::<(&Enemy, &mut PathProgress, &mut Position)>()
    {
        let (distance, reached_end) = path.clamp_to_end(progress.distance + enemy.speed * DT);
        progress.distance = distance;
        *pos = path.position_at(distance);
        if reached_end {
            escaped.push((enemy.id, entity));
        }
    }

    escaped.sort_by_key(|(id, _)| *id);
    for &(id, entity) in &escaped {
        score.lives -= 1;
        score.enemies_escaped += 1;
        events.push(GameEvent::EnemyEscaped { enemy_id: id });
        despawn_buffer.push(entity);
        debug!("enemy {id} escaped, {} lives left", score.lives);
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
