//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, processes player commands,
//! runs all systems in a fixed order, and produces `GameStateSnapshot`s.
//! Completely headless, enabling deterministic testing.
//!
//! Every pass of a tick sees the state left by the previous pass: spawn,
//! then movement (which evicts escaped enemies), then projectile pursuit and
//! combat against the post-movement enemy set. An enemy that escapes on a
//! tick can never be hit on that same tick.

use std::collections::VecDeque;

use hecs::World;
use log::info;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use pathguard_core::commands::PlayerCommand;
use pathguard_core::config::{ConfigError, GameRules};
use pathguard_core::constants::MAX_TIME_SCALE;
use pathguard_core::enums::{EnemyType, GamePhase};
use pathguard_core::events::GameEvent;
use pathguard_core::state::GameStateSnapshot;
use pathguard_core::types::SimTime;

use crate::path::PathModel;
use crate::scoring::ScoreState;
use crate::systems;
use crate::systems::spawner::SpawnTimer;
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Initial time scale (1.0 = normal).
    pub time_scale: f64,
    pub rules: GameRules,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            time_scale: 1.0,
            rules: GameRules::default(),
        }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    time_scale: f64,
    rng: ChaCha8Rng,
    rules: GameRules,
    path: PathModel,
    next_enemy_id: u32,
    next_projectile_id: u32,
    spawn_timer: SpawnTimer,
    score: ScoreState,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<GameEvent>,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    ///
    /// Fails only if the rules or the path geometry are invalid.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        config.rules.validate()?;
        let path = PathModel::new(&config.rules.waypoints, config.rules.path_shape)?;

        Ok(Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            time_scale: config.time_scale.clamp(0.0, MAX_TIME_SCALE),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            spawn_timer: SpawnTimer::new(config.rules.spawn_interval_ticks()),
            score: ScoreState::new(config.rules.starting_lives),
            rules: config.rules,
            path,
            next_enemy_id: 0,
            next_projectile_id: 0,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
        })
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Active {
            self.run_systems();
            self.time.advance();
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            &self.path,
            events,
            &self.score,
        )
    }

    /// Handle the primary action right away: fire at the enemy nearest the tower.
    ///
    /// Returns the new projectile's id, or `None` when the game is not active
    /// or there is nothing to shoot at (in which case nothing changes).
    pub fn tap(&mut self) -> Option<u32> {
        if self.phase != GamePhase::Active {
            return None;
        }

        let launch = self.path.end();
        let target = systems::targeting::select_target(&self.world, launch)?;

        let id = self.next_projectile_id;
        self.next_projectile_id += 1;
        world_setup::spawn_projectile(
            &mut self.world,
            id,
            launch,
            target.enemy_id,
            target.enemy_type,
        );
        self.score.projectiles_fired += 1;
        self.events.push(GameEvent::ProjectileFired {
            projectile_id: id,
            target_id: target.enemy_id,
        });
        Some(id)
    }

    /// Spawn an enemy now, outside the spawn timer. Returns its id.
    pub fn spawn_enemy(&mut self, enemy_type: EnemyType) -> u32 {
        systems::spawner::spawn(
            &mut self.world,
            &self.path,
            &self.rules,
            enemy_type,
            &mut self.next_enemy_id,
            &mut self.score,
            &mut self.events,
        )
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the current time scale.
    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    pub fn score(&self) -> &ScoreState {
        &self.score
    }

    pub fn rules(&self) -> &GameRules {
        &self.rules
    }

    pub fn path(&self) -> &PathModel {
        &self.path
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::Tap => {
                self.tap();
            }
            PlayerCommand::StartGame => {
                if self.phase == GamePhase::Ready {
                    self.start_game();
                }
            }
            PlayerCommand::Restart => {
                self.start_game();
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                }
            }
            PlayerCommand::SetTimeScale { scale } => {
                self.time_scale = scale.clamp(0.0, MAX_TIME_SCALE);
            }
        }
    }

    /// Discard all entities and counters and begin a fresh game.
    fn start_game(&mut self) {
        self.world.clear();
        self.time = SimTime::default();
        self.score = ScoreState::new(self.rules.starting_lives);
        self.spawn_timer = SpawnTimer::new(self.rules.spawn_interval_ticks());
        self.next_enemy_id = 0;
        self.next_projectile_id = 0;
        self.events.clear();
        self.phase = GamePhase::Active;
        info!(
            "game started: {} lives, path length {:.1}",
            self.score.lives,
            self.path.total_length()
        );
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        // 1. Spawning
        systems::spawner::run(
            &mut self.world,
            &mut self.rng,
            &mut self.spawn_timer,
            &self.path,
            &self.rules,
            &mut self.next_enemy_id,
            &mut self.score,
            &mut self.events,
        );
        // 2. Movement + path-end eviction
        systems::movement::run(
            &mut self.world,
            &self.path,
            &mut self.score,
            &mut self.events,
            &mut self.despawn_buffer,
        );
        // 3. Projectile pursuit against the post-movement enemy set
        let hits = systems::projectile::run(
            &mut self.world,
            self.rules.projectile_step,
            self.rules.hit_radius,
            &mut self.score,
            &mut self.events,
            &mut self.despawn_buffer,
        );
        // 4. Combat
        systems::combat::run(&mut self.world, &hits, &mut self.score, &mut self.events);
        // 5. Game over latch
        if self.score.is_game_over() {
            self.phase = GamePhase::GameOver;
            self.events.push(GameEvent::GameOver {
                score: self.score.score,
            });
            info!(
                "game over at tick {}: score {}",
                self.time.tick, self.score.score
            );
        }
    }
}
