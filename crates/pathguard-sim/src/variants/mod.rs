//! Smaller games built on the same skeleton: a fixed tick, one discrete
//! input, and a score. Neither needs the ECS world.

pub mod lane_jump;
pub mod tap_target;

pub use lane_jump::LaneJumpGame;
pub use tap_target::TapTargetGame;
