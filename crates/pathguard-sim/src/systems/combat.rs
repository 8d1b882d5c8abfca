//! Combat resolution. Applies projectile hits to enemy hit points.
//!
//! Hits are applied one at a time in firing order. The killing hit despawns
//! the enemy and scores a point; any later hit on the same enemy in the batch
//! finds it gone and counts as a discard, so an enemy is scored at most once.

use hecs::World;
use log::debug;

use pathguard_core::components::Enemy;
use pathguard_core::events::GameEvent;

use crate::scoring::ScoreState;
use crate::systems::projectile::Hit;

/// Apply a batch of hits in order.
pub fn run(
    world: &mut World,
    hits: &[Hit],
    score: &mut ScoreState,
    events: &mut Vec<GameEvent>,
) {
    for hit in hits {
        let killed = match world.get::<&mut Enemy>(hit.target) {
            Ok(mut enemy) => {
                enemy.hp = enemy.hp.saturating_sub(1);
                score.projectiles_hit += 1;
                events.push(GameEvent::ProjectileHit {
                    projectile_id: hit.projectile_id,
                    target_id: hit.target_id,
                });
                enemy.hp == 0
            }
            Err(_) => {
                score.projectiles_discarded += 1;
                events.push(GameEvent::ProjectileDiscarded {
                    projectile_id: hit.projectile_id,
                    target_id: hit.target_id,
                });
                continue;
            }
        };

        if killed {
            let _ = world.despawn(hit.target);
            score.score += 1;
            events.push(GameEvent::EnemyDefeated {
                enemy_id: hit.target_id,
            });
            debug!("enemy {} defeated, score {}", hit.target_id, score.score);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathguard_core::components::PathProgress;
    use pathguard_core::enums::EnemyType;
    use pathguard_core::types::Position;

    fn spawn(world: &mut World, id: u32, hp: u32) -> hecs::Entity {
        world.spawn((
            Enemy {
                id,
                enemy_type: EnemyType::Medium,
                hp,
                max_hp: hp,
                speed: 1.0,
            },
            PathProgress::default(),
            Position::new(0.0, 0.0),
        ))
    }

    fn hits_on(target: hecs::Entity, target_id: u32, count: u32) -> Vec<Hit> {
        (0..count)
            .map(|projectile_id| Hit {
                projectile_id,
                target_id,
                target,
            })
            .collect()
    }

    #[test]
    fn test_single_hit_decrements_hp() {
        let mut world = World::new();
        let e = spawn(&mut world, 0, 3);
        let mut score = ScoreState::new(5);
        let mut events = Vec::new();

        run(&mut world, &hits_on(e, 0, 1), &mut score, &mut events);

        assert_eq!(world.get::<&Enemy>(e).unwrap().hp, 2);
        assert_eq!(
            events,
            vec![GameEvent::ProjectileHit {
                projectile_id: 0,
                target_id: 0
            }]
        );
        assert_eq!(score.score, 0);
    }

    /// maxHp = 2 hit twice in one batch scores exactly one point.
    #[test]
    fn test_two_hits_same_tick_score_once() {
        let mut world = World::new();
        let e = spawn(&mut world, 0, 2);
        let mut score = ScoreState::new(5);
        let mut events = Vec::new();

        run(&mut world, &hits_on(e, 0, 2), &mut score, &mut events);

        assert_eq!(
            events.last(),
            Some(&GameEvent::EnemyDefeated { enemy_id: 0 })
        );
        assert_eq!(score.score, 1);
        assert!(!world.contains(e));
    }

    /// Overkill: the extra hits are discarded, not scored.
    #[test]
    fn test_overkill_hits_are_discarded() {
        let mut world = World::new();
        let e = spawn(&mut world, 5, 1);
        let mut score = ScoreState::new(5);
        let mut events = Vec::new();

        run(&mut world, &hits_on(e, 5, 3), &mut score, &mut events);

        assert_eq!(score.score, 1);
        assert_eq!(score.projectiles_discarded, 2);
        let defeats = events
            .iter()
            .filter(|ev| matches!(ev, GameEvent::EnemyDefeated { .. }))
            .count();
        assert_eq!(defeats, 1);
    }

    #[test]
    fn test_lives_untouched_by_combat() {
        let mut world = World::new();
        let e = spawn(&mut world, 0, 1);
        let mut score = ScoreState::new(5);
        let mut events = Vec::new();

        run(&mut world, &hits_on(e, 0, 1), &mut score, &mut events);

        assert_eq!(score.lives, 5);
    }
}
