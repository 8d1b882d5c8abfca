//! Gameplay rules and their TOML loader.
//!
//! Every field has a default, so a config file only needs to name what it
//! changes:
//!
//! ```toml
//! starting_lives = 3
//! path_shape = "smooth"
//!
//! [slow]
//! hp = 4
//! speed = 80.0
//! ```

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::{EnemyType, PathShape};
use crate::types::Position;

/// Per-type enemy stats.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnemyStats {
    /// Hit points at spawn (also max hp).
    pub hp: u32,
    /// Path units per second.
    pub speed: f64,
}

/// Tunable gameplay parameters for one tower-defense game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameRules {
    pub starting_lives: i32,
    pub spawn_interval_ms: u64,
    pub fast_threshold: f64,
    pub medium_threshold: f64,
    pub fast: EnemyStats,
    pub medium: EnemyStats,
    pub slow: EnemyStats,
    /// Distance a projectile covers per tick.
    pub projectile_step: f64,
    pub hit_radius: f64,
    /// Path waypoints, start to goal.
    pub waypoints: Vec<Position>,
    pub path_shape: PathShape,
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            starting_lives: STARTING_LIVES,
            spawn_interval_ms: SPAWN_INTERVAL_MS,
            fast_threshold: FAST_SPAWN_THRESHOLD,
            medium_threshold: MEDIUM_SPAWN_THRESHOLD,
            fast: EnemyStats {
                hp: FAST_ENEMY_HP,
                speed: FAST_ENEMY_SPEED,
            },
            medium: EnemyStats {
                hp: MEDIUM_ENEMY_HP,
                speed: MEDIUM_ENEMY_SPEED,
            },
            slow: EnemyStats {
                hp: SLOW_ENEMY_HP,
                speed: SLOW_ENEMY_SPEED,
            },
            projectile_step: PROJECTILE_STEP,
            hit_radius: PROJECTILE_HIT_RADIUS,
            waypoints: DEFAULT_WAYPOINTS.iter().copied().map(Position::from).collect(),
            path_shape: PathShape::default(),
        }
    }
}

impl GameRules {
    /// Read and validate rules from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate rules from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let rules: GameRules = toml::from_str(content)?;
        rules.validate()?;
        Ok(rules)
    }

    pub fn stats(&self, enemy_type: EnemyType) -> EnemyStats {
        match enemy_type {
            EnemyType::Fast => self.fast,
            EnemyType::Medium => self.medium,
            EnemyType::Slow => self.slow,
        }
    }

    /// Map a uniform roll in `[0, 1)` to an enemy type.
    pub fn roll_enemy_type(&self, roll: f64) -> EnemyType {
        if roll < self.fast_threshold {
            EnemyType::Fast
        } else if roll < self.medium_threshold {
            EnemyType::Medium
        } else {
            EnemyType::Slow
        }
    }

    /// Spawn interval rounded up to whole ticks (at least one).
    pub fn spawn_interval_ticks(&self) -> u64 {
        self.spawn_interval_ms.div_ceil(TICK_MILLIS).max(1)
    }

    /// Check invariants the simulation relies on.
    ///
    /// Path geometry (distinct points, non-zero length) is checked again when
    /// the path model is built.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.starting_lives <= 0 {
            return Err(ConfigError::Invalid("starting_lives must be positive".into()));
        }
        if self.spawn_interval_ms == 0 {
            return Err(ConfigError::Invalid("spawn_interval_ms must be positive".into()));
        }
        if !(0.0..=1.0).contains(&self.fast_threshold)
            || !(0.0..=1.0).contains(&self.medium_threshold)
            || self.fast_threshold > self.medium_threshold
        {
            return Err(ConfigError::Invalid(format!(
                "spawn thresholds must satisfy 0 <= fast ({}) <= medium ({}) <= 1",
                self.fast_threshold, self.medium_threshold
            )));
        }
        for enemy_type in EnemyType::ALL {
            let stats = self.stats(enemy_type);
            if stats.hp == 0 {
                return Err(ConfigError::Invalid(format!("{enemy_type:?} hp must be positive")));
            }
            if !(stats.speed.is_finite() && stats.speed > 0.0) {
                return Err(ConfigError::Invalid(format!(
                    "{enemy_type:?} speed must be positive, got {}",
                    stats.speed
                )));
            }
        }
        if !(self.projectile_step.is_finite() && self.projectile_step > 0.0) {
            return Err(ConfigError::Invalid("projectile_step must be positive".into()));
        }
        // Keeps every hit within ceil(distance / step) ticks of firing.
        if !(self.hit_radius.is_finite() && self.hit_radius >= self.projectile_step) {
            return Err(ConfigError::Invalid(format!(
                "hit_radius ({}) must be at least projectile_step ({})",
                self.hit_radius, self.projectile_step
            )));
        }
        if self.waypoints.len() < 2 {
            return Err(ConfigError::Invalid(format!(
                "path needs at least 2 waypoints, got {}",
                self.waypoints.len()
            )));
        }
        if let Some(bad) = self.waypoints.iter().find(|p| !p.is_finite()) {
            return Err(ConfigError::Invalid(format!("non-finite waypoint {bad:?}")));
        }
        Ok(())
    }
}

/// Failure to load or validate a configuration.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "failed to read config: {e}"),
            ConfigError::Parse(e) => write!(f, "failed to parse config: {e}"),
            ConfigError::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            ConfigError::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}
