//! Game state snapshot: the complete visible state sent to the frontend each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::GameEvent;
use crate::types::{Position, SimTime};

/// Complete game state broadcast to the frontend after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    /// Launch point for projectiles (last path point).
    pub tower: Position,
    /// Path polyline for drawing (sampled points for smooth paths).
    pub path: Vec<Position>,
    pub enemies: Vec<EnemyView>,
    pub projectiles: Vec<ProjectileView>,
    pub events: Vec<GameEvent>,
    pub score: ScoreView,
}

/// A live enemy, in spawn order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub id: u32,
    pub enemy_type: EnemyType,
    pub position: Position,
    pub hp: u32,
    pub max_hp: u32,
    /// Distance travelled along the path.
    pub progress: f64,
}

/// An in-flight projectile, in firing order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub id: u32,
    pub position: Position,
    pub color: ProjectileColor,
    pub target_id: u32,
}

/// Running score for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreView {
    pub score: u32,
    pub lives: i32,
    pub game_over: bool,
    pub enemies_spawned: u32,
    pub enemies_escaped: u32,
    pub projectiles_fired: u32,
    pub projectiles_hit: u32,
    pub projectiles_discarded: u32,
}
