//! Score and lives bookkeeping.
//!
//! Stored in `SimulationEngine`, NOT as ECS entities.

use pathguard_core::state::ScoreView;

/// Running score state tracked by the engine.
#[derive(Debug, Clone, Default)]
pub struct ScoreState {
    /// Enemies defeated.
    pub score: u32,
    /// May dip below zero when several enemies escape on the same tick.
    pub lives: i32,
    pub enemies_spawned: u32,
    pub enemies_escaped: u32,
    pub projectiles_fired: u32,
    pub projectiles_hit: u32,
    pub projectiles_discarded: u32,
}

impl ScoreState {
    pub fn new(starting_lives: i32) -> Self {
        Self {
            lives: starting_lives,
            ..Default::default()
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.lives <= 0
    }

    pub fn view(&self) -> ScoreView {
        ScoreView {
            score: self.score,
            lives: self.lives,
            game_over: self.is_game_over(),
            enemies_spawned: self.enemies_spawned,
            enemies_escaped: self.enemies_escaped,
            projectiles_fired: self.projectiles_fired,
            projectiles_hit: self.projectiles_hit,
            projectiles_discarded: self.projectiles_discarded,
        }
    }
}
