//! Spawn system: adds one enemy every spawn interval.

use hecs::World;
use log::debug;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use pathguard_core::config::GameRules;
use pathguard_core::enums::EnemyType;
use pathguard_core::events::GameEvent;

use crate::path::PathModel;
use crate::scoring::ScoreState;

/// Countdown to the next spawn, independent of the other systems.
#[derive(Debug, Clone)]
pub struct SpawnTimer {
    pub interval_ticks: u64,
    /// Ticks elapsed since the last spawn (or since the game started).
    pub elapsed_ticks: u64,
}

impl SpawnTimer {
    pub fn new(interval_ticks: u64) -> Self {
        Self {
            interval_ticks: interval_ticks.max(1),
            elapsed_ticks: 0,
        }
    }

    /// Advance one tick; true when a spawn is due.
    pub fn tick(&mut self) -> bool {
        self.elapsed_ticks += 1;
        if self.elapsed_ticks >= self.interval_ticks {
            self.elapsed_ticks = 0;
            true
        } else {
            false
        }
    }
}

/// Advance the timer and spawn one enemy of a random type when it fires.
#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    timer: &mut SpawnTimer,
    path: &PathModel,
    rules: &GameRules,
    next_enemy_id: &mut u32,
    score: &mut ScoreState,
    events: &mut Vec<GameEvent>,
) {
    if !timer.tick() {
        return;
    }
    let enemy_type = rules.roll_enemy_type(rng.gen::<f64>());
    spawn(world, path, rules, enemy_type, next_enemy_id, score, events);
}

/// Spawn one enemy of a given type with the next id. Returns the id.
pub fn spawn(
    world: &mut World,
    path: &PathModel,
    rules: &GameRules,
    enemy_type: EnemyType,
    next_enemy_id: &mut u32,
    score: &mut ScoreState,
    events: &mut Vec<GameEvent>,
) -> u32 {
    let id = *next_enemy_id;
    *next_enemy_id += 1;

    crate::world_setup::spawn_enemy(world, path, rules, id, enemy_type);
    score.enemies_spawned += 1;
    events.push(GameEvent::EnemySpawned {
        enemy_id: id,
        enemy_type,
    });
    debug!("spawned {enemy_type:?} enemy {id}");
    id
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    use pathguard_core::components::{Enemy, PathProgress};
    use pathguard_core::types::Position;

    #[test]
    fn test_timer_fires_every_interval() {
        let mut timer = SpawnTimer::new(3);
        let fired: Vec<bool> = (0..7).map(|_| timer.tick()).collect();
        assert_eq!(fired, vec![false, false, true, false, false, true, false]);
    }

    #[test]
    fn test_zero_interval_fires_every_tick() {
        let mut timer = SpawnTimer::new(0);
        assert!(timer.tick());
        assert!(timer.tick());
    }

    #[test]
    fn test_spawned_enemy_has_type_stats() {
        let rules = GameRules::default();
        let path = PathModel::new(&rules.waypoints, rules.path_shape).unwrap();
        let mut world = World::new();
        let mut next_id = 7;
        let mut score = ScoreState::new(5);
        let mut events = Vec::new();

        let id = spawn(
            &mut world,
            &path,
            &rules,
            EnemyType::Slow,
            &mut next_id,
            &mut score,
            &mut events,
        );

        assert_eq!(id, 7);
        assert_eq!(next_id, 8);
        assert_eq!(score.enemies_spawned, 1);
        let mut query = world.query::<(&Enemy, &PathProgress, &Position)>();
        let (_, (enemy, progress, pos)) = query.iter().next().unwrap();
        assert_eq!(enemy.hp, 3);
        assert_eq!(enemy.max_hp, 3);
        assert_eq!(progress.distance, 0.0);
        assert_eq!(*pos, path.start());
        assert_eq!(
            events,
            vec![GameEvent::EnemySpawned {
                enemy_id: 7,
                enemy_type: EnemyType::Slow
            }]
        );
    }

    #[test]
    fn test_run_spawns_once_per_interval() {
        let rules = GameRules::default();
        let path = PathModel::new(&rules.waypoints, rules.path_shape).unwrap();
        let mut world = World::new();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut timer = SpawnTimer::new(rules.spawn_interval_ticks());
        let mut next_id = 0;
        let mut score = ScoreState::new(5);
        let mut events = Vec::new();

        for _ in 0..(rules.spawn_interval_ticks() * 4) {
            run(
                &mut world,
                &mut rng,
                &mut timer,
                &path,
                &rules,
                &mut next_id,
                &mut score,
                &mut events,
            );
        }
        assert_eq!(world.len(), 4);
        assert_eq!(next_id, 4);
    }

    /// Over many rolls the type mix follows the 40/30/30 split.
    #[test]
    fn test_type_distribution() {
        let rules = GameRules::default();
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        let mut counts = [0u32; 3];
        for _ in 0..10_000 {
            match rules.roll_enemy_type(rng.gen::<f64>()) {
                EnemyType::Fast => counts[0] += 1,
                EnemyType::Medium => counts[1] += 1,
                EnemyType::Slow => counts[2] += 1,
            }
        }
        assert!((3700..4300).contains(&counts[0]), "fast: {}", counts[0]);
        assert!((2700..3300).contains(&counts[1]), "medium: {}", counts[1]);
        assert!((2700..3300).contains(&counts[2]), "slow: {}", counts[2]);
    }
}
