//! Simulation constants and tuning parameters.
//!
//! Values here are the defaults; most gameplay numbers can be overridden
//! through [`crate::config::GameRules`]. The tick duration cannot.

/// Duration of one simulation tick in milliseconds (~60 Hz).
pub const TICK_MILLIS: u64 = 16;

/// Seconds per tick.
pub const DT: f64 = TICK_MILLIS as f64 / 1000.0;

// --- Play area ---

/// Logical play area width (portrait phone screen).
pub const FIELD_WIDTH: f64 = 400.0;

/// Logical play area height.
pub const FIELD_HEIGHT: f64 = 800.0;

/// Default tower-defense waypoints, start to goal. The tower sits on the last one.
pub const DEFAULT_WAYPOINTS: [(f64, f64); 6] = [
    (50.0, FIELD_HEIGHT - 100.0),
    (150.0, FIELD_HEIGHT - 300.0),
    (300.0, FIELD_HEIGHT - 250.0),
    (FIELD_WIDTH - 200.0, FIELD_HEIGHT / 2.0),
    (FIELD_WIDTH - 100.0, 150.0),
    (FIELD_WIDTH - 50.0, 50.0),
];

// --- Path ---

/// Samples per waypoint segment when a smooth path is flattened to a polyline.
pub const SMOOTH_SAMPLES_PER_SEGMENT: usize = 16;

/// Progress within this distance of the path end counts as having reached it.
pub const PATH_END_EPSILON: f64 = 1e-9;

// --- Spawning ---

/// Milliseconds between enemy spawns.
pub const SPAWN_INTERVAL_MS: u64 = 2000;

/// Rolls below this spawn a Fast enemy.
pub const FAST_SPAWN_THRESHOLD: f64 = 0.4;

/// Rolls below this (and at or above the fast threshold) spawn a Medium enemy.
pub const MEDIUM_SPAWN_THRESHOLD: f64 = 0.7;

// --- Enemies ---

pub const FAST_ENEMY_HP: u32 = 1;
pub const MEDIUM_ENEMY_HP: u32 = 2;
pub const SLOW_ENEMY_HP: u32 = 3;

/// Medium enemy speed in path units per second. Baseline for the other types.
pub const MEDIUM_ENEMY_SPEED: f64 = 150.0;

/// Fast enemy speed (2 : 1.5 relative to Medium).
pub const FAST_ENEMY_SPEED: f64 = MEDIUM_ENEMY_SPEED * 2.0 / 1.5;

/// Slow enemy speed (1 : 1.5 relative to Medium).
pub const SLOW_ENEMY_SPEED: f64 = MEDIUM_ENEMY_SPEED / 1.5;

// --- Projectiles ---

/// Distance a projectile travels per tick.
pub const PROJECTILE_STEP: f64 = 8.0;

/// Remaining distance at or below which a projectile resolves as a hit.
pub const PROJECTILE_HIT_RADIUS: f64 = 8.0;

// --- Scoring ---

/// Lives at the start of a game.
pub const STARTING_LIVES: i32 = 5;

// --- Driver ---

/// Upper bound for the driver's time scale.
pub const MAX_TIME_SCALE: f64 = 4.0;

// --- Lane jump variant ---

/// Side length of a lane-jump block.
pub const LANE_BLOCK_SIZE: f64 = 60.0;

/// Number of blocks in the lane-jump course.
pub const LANE_BLOCK_COUNT: usize = 50;

/// Player displacement per tick on each axis.
pub const LANE_PLAYER_SPEED: f64 = 3.0;

/// The player stays on a block while within this fraction of the block size
/// of its centre on both axes.
pub const LANE_FOOTING_FACTOR: f64 = 0.6;

// --- Tap target variant ---

/// Round length in seconds.
pub const TAP_ROUND_SECS: u32 = 30;

/// Diameter of the tap target.
pub const TAP_TARGET_SIZE: f64 = 60.0;

/// Space reserved at the top of the field for the score line.
pub const TAP_HEADER_HEIGHT: f64 = 100.0;
