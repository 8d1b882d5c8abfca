//! Projectile pursuit system.
//!
//! Every tick each projectile re-aims at its target's current position and
//! moves a fixed step toward it, never past it. Within the hit radius it
//! resolves as a hit instead of moving. A projectile whose target is gone is discarded.

use std::collections::HashMap;

use glam::DVec2;
use hecs::{Entity, World};

use pathguard_core::components::{Enemy, Projectile};
use pathguard_core::events::GameEvent;
use pathguard_core::types::Position;

use crate::scoring::ScoreState;

/// A projectile reached its target this tick. Applied by the combat system.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    pub projectile_id: u32,
    pub target_id: u32,
    pub target: Entity,
}

/// Run pursuit for all projectiles. Returns hits in firing order.
pub fn run(
    world: &mut World,
    step: f64,
    hit_radius: f64,
    score: &mut ScoreState,
    events: &mut Vec<GameEvent>,
    despawn_buffer: &mut Vec<Entity>,
) -> Vec<Hit> {
    despawn_buffer.clear();

    // Live enemies as of now (after movement).
    let targets: HashMap<u32, (Entity, Position)> = world
        .query::<(&Enemy, &Position)>()
        .iter()
        .map(|(entity, (enemy, pos))| (enemy.id, (entity, *pos)))
        .collect();

    let mut projectiles: Vec<(Entity, u32, u32, Position)> = world
        .query::<(&Projectile, &Position)>()
        .iter()
        .map(|(entity, (p, pos))| (entity, p.id, p.target_id, *pos))
        .collect();
    projectiles.sort_by_key(|&(_, id, _, _)| id);

    let mut hits = Vec::new();
    let mut moves: Vec<(Entity, Position)> = Vec::new();

    for (entity, projectile_id, target_id, pos) in projectiles {
        let Some(&(target, target_pos)) = targets.get(&target_id) else {
            score.projectiles_discarded += 1;
            events.push(GameEvent::ProjectileDiscarded {
                projectile_id,
                target_id,
            });
            despawn_buffer.push(entity);
            continue;
        };

        let offset: DVec2 = target_pos.as_dvec2() - pos.as_dvec2();
        let distance = offset.length();

        // Zero distance is always a hit; never normalize a zero vector.
        if distance == 0.0 || distance <= hit_radius {
            hits.push(Hit {
                projectile_id,
                target_id,
                target,
            });
            despawn_buffer.push(entity);
            continue;
        }

        let next: DVec2 = pos.as_dvec2() + offset / distance * step.min(distance);
        moves.push((entity, next.into()));
    }

    for (entity, next) in moves {
        if let Ok(mut pos) = world.get::<&mut Position>(entity) {
            *pos = next;
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }

    hits
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathguard_core::components::PathProgress;
    use pathguard_core::constants::{PROJECTILE_HIT_RADIUS, PROJECTILE_STEP};
    use pathguard_core::enums::{EnemyType, ProjectileColor};

    fn spawn_enemy(world: &mut World, id: u32, pos: Position) -> Entity {
        world.spawn((
            Enemy {
                id,
                enemy_type: EnemyType::Medium,
                hp: 2,
                max_hp: 2,
                speed: 0.0,
            },
            PathProgress::default(),
            pos,
        ))
    }

    fn spawn_projectile(world: &mut World, id: u32, target_id: u32, pos: Position) -> Entity {
        world.spawn((
            Projectile {
                id,
                target_id,
                color: ProjectileColor::Yellow,
            },
            pos,
        ))
    }

    fn step(world: &mut World, score: &mut ScoreState, events: &mut Vec<GameEvent>) -> Vec<Hit> {
        let mut buf = Vec::new();
        run(
            world,
            PROJECTILE_STEP,
            PROJECTILE_HIT_RADIUS,
            score,
            events,
            &mut buf,
        )
    }

    #[test]
    fn test_projectile_moves_one_step_toward_target() {
        let mut world = World::new();
        spawn_enemy(&mut world, 0, Position::new(100.0, 0.0));
        let p = spawn_projectile(&mut world, 0, 0, Position::new(0.0, 0.0));
        let mut score = ScoreState::new(5);
        let mut events = Vec::new();

        let hits = step(&mut world, &mut score, &mut events);

        assert!(hits.is_empty());
        let pos = *world.get::<&Position>(p).unwrap();
        assert!((pos.x - 8.0).abs() < 1e-10 && pos.y.abs() < 1e-10, "got {pos:?}");
    }

    #[test]
    fn test_projectile_reaims_at_moved_target() {
        let mut world = World::new();
        let e = spawn_enemy(&mut world, 0, Position::new(100.0, 0.0));
        let p = spawn_projectile(&mut world, 0, 0, Position::new(0.0, 0.0));
        let mut score = ScoreState::new(5);
        let mut events = Vec::new();

        step(&mut world, &mut score, &mut events);
        *world.get::<&mut Position>(e).unwrap() = Position::new(8.0, 100.0);
        step(&mut world, &mut score, &mut events);

        let pos = *world.get::<&Position>(p).unwrap();
        assert!((pos.x - 8.0).abs() < 1e-10, "should head straight up, got {pos:?}");
        assert!((pos.y - 8.0).abs() < 1e-10, "got {pos:?}");
    }

    /// Stationary target: hit lands within ceil(d0 / step) ticks.
    #[test]
    fn test_convergence_bound_on_stationary_target() {
        let cases = [
            Position::new(1.0, 0.0),
            Position::new(8.0, 0.0),
            Position::new(0.0, 9.0),
            Position::new(96.0, 0.0),
            Position::new(60.0, 80.0),
            Position::new(-333.3, 0.0),
        ];
        for target in cases {
            let d0 = target.range_to(&Position::new(0.0, 0.0));
            let mut world = World::new();
            spawn_enemy(&mut world, 0, target);
            spawn_projectile(&mut world, 0, 0, Position::new(0.0, 0.0));
            let mut score = ScoreState::new(5);
            let mut events = Vec::new();

            let bound = (d0 / PROJECTILE_STEP).ceil() as usize;
            let mut hit_tick = None;
            for tick in 1..=bound + 5 {
                if !step(&mut world, &mut score, &mut events).is_empty() {
                    hit_tick = Some(tick);
                    break;
                }
            }
            let hit_tick = hit_tick.expect("projectile never hit");
            assert!(hit_tick <= bound, "d0={d0}: hit on tick {hit_tick}, bound {bound}");
        }
    }

    /// A step longer than the remaining distance lands on the target
    /// instead of overshooting and swinging back and forth.
    #[test]
    fn test_step_stops_at_target() {
        let mut world = World::new();
        let e = spawn_enemy(&mut world, 0, Position::new(12.0, 0.0));
        let p = spawn_projectile(&mut world, 0, 0, Position::new(0.0, 0.0));
        let mut score = ScoreState::new(5);
        let mut events = Vec::new();
        let mut buf = Vec::new();

        let mut hit_tick = None;
        for tick in 1..=10 {
            let hits = run(&mut world, 8.0, 1.0, &mut score, &mut events, &mut buf);
            if !hits.is_empty() {
                assert_eq!(hits[0].target, e);
                hit_tick = Some(tick);
                break;
            }
            let pos = *world.get::<&Position>(p).unwrap();
            assert!(pos.x <= 12.0 + 1e-10, "overshot to {pos:?}");
        }
        assert_eq!(hit_tick, Some(3), "8 units, then the last 4, then hit");
    }

    #[test]
    fn test_zero_distance_is_immediate_hit() {
        let mut world = World::new();
        let e = spawn_enemy(&mut world, 4, Position::new(10.0, 10.0));
        let p = spawn_projectile(&mut world, 0, 4, Position::new(10.0, 10.0));
        let mut score = ScoreState::new(5);
        let mut events = Vec::new();

        let hits = step(&mut world, &mut score, &mut events);

        assert_eq!(
            hits,
            vec![Hit {
                projectile_id: 0,
                target_id: 4,
                target: e
            }]
        );
        assert!(!world.contains(p));
    }

    #[test]
    fn test_missing_target_discards_projectile() {
        let mut world = World::new();
        let p = spawn_projectile(&mut world, 2, 99, Position::new(0.0, 0.0));
        let mut score = ScoreState::new(5);
        let mut events = Vec::new();

        let hits = step(&mut world, &mut score, &mut events);

        assert!(hits.is_empty());
        assert!(!world.contains(p));
        assert_eq!(score.projectiles_discarded, 1);
        assert_eq!(score.score, 0);
        assert_eq!(score.lives, 5);
        assert_eq!(
            events,
            vec![GameEvent::ProjectileDiscarded {
                projectile_id: 2,
                target_id: 99
            }]
        );
    }

    #[test]
    fn test_hits_are_reported_in_firing_order() {
        let mut world = World::new();
        let e = spawn_enemy(&mut world, 0, Position::new(0.0, 0.0));
        for id in [3, 1, 2] {
            spawn_projectile(&mut world, id, 0, Position::new(1.0, 1.0));
        }
        let mut score = ScoreState::new(5);
        let mut events = Vec::new();

        let hits = step(&mut world, &mut score, &mut events);

        let ids: Vec<u32> = hits.iter().map(|h| h.projectile_id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert!(hits.iter().all(|h| h.target == e));
    }
}
