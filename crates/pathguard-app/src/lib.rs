//! PATHGUARD headless driver.
//!
//! Runs the simulation engine on its own thread at the fixed tick rate and
//! shares the latest snapshot with whoever is polling it.

pub mod game_loop;
pub mod state;

pub use pathguard_core as core;
