//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Enemy archetype. Determines hit points, speed and projectile color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyType {
    Fast,
    Medium,
    Slow,
}

impl EnemyType {
    pub const ALL: [EnemyType; 3] = [EnemyType::Fast, EnemyType::Medium, EnemyType::Slow];

    /// Color of projectiles fired at this type.
    pub fn projectile_color(self) -> ProjectileColor {
        match self {
            EnemyType::Fast => ProjectileColor::Orange,
            EnemyType::Medium => ProjectileColor::Yellow,
            EnemyType::Slow => ProjectileColor::Lime,
        }
    }
}

/// Projectile tint, captured from the target's type when fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectileColor {
    Orange,
    Yellow,
    Lime,
}

/// How the waypoint list is turned into a traversable path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathShape {
    /// Straight segments between consecutive waypoints.
    #[default]
    Polyline,
    /// Catmull-Rom curve through the waypoints, sampled by arc length.
    Smooth,
}

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Engine created, waiting for StartGame.
    #[default]
    Ready,
    Active,
    Paused,
    /// Lives exhausted. Terminal until Restart.
    GameOver,
}

/// Lane-jump travel direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Heading {
    Left,
    #[default]
    Right,
}

impl Heading {
    pub fn flipped(self) -> Self {
        match self {
            Heading::Left => Heading::Right,
            Heading::Right => Heading::Left,
        }
    }
}
