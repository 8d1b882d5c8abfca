//! Simulation engine for PATHGUARD.
//!
//! Owns the hecs ECS world, runs systems at a fixed tick rate,
//! and produces GameStateSnapshots for the frontend.

pub mod engine;
pub mod path;
pub mod scoring;
pub mod systems;
pub mod variants;
pub mod world_setup;

pub use engine::{SimConfig, SimulationEngine};
pub use pathguard_core as core;
