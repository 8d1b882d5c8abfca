//! Player commands sent from the frontend to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// The single primary action: fire at the enemy nearest the tower.
    Tap,

    // --- Simulation control ---
    /// Start the first game.
    StartGame,
    /// Throw away the current game and start a fresh one.
    Restart,
    /// Set the driver's pacing (1.0 = normal, 2.0 = double), clamped to
    /// `[0, 4]`. Each engine tick is still one fixed step; use `Pause` to stop.
    SetTimeScale { scale: f64 },
    /// Pause the simulation.
    Pause,
    /// Resume the simulation.
    Resume,
}
