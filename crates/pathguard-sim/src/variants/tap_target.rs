//! Tap target: hit a jumping target as often as possible in a timed round.

use log::info;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use pathguard_core::constants::*;
use pathguard_core::types::Position;

/// Render view of the tap-target game.
#[derive(Debug, Clone, Serialize)]
pub struct TapTargetView {
    /// Top-left corner of the target.
    pub target: Position,
    pub target_size: f64,
    pub score: u32,
    pub time_left_secs: u32,
    pub active: bool,
    /// A round has run to completion (as opposed to not started yet).
    pub round_over: bool,
}

#[derive(Debug, Clone)]
pub struct TapTargetGame {
    rng: ChaCha8Rng,
    target: Position,
    score: u32,
    time_left_secs: u32,
    active: bool,
    /// Milliseconds accumulated toward the next whole second.
    elapsed_ms: u64,
}

impl TapTargetGame {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            target: Position::new(100.0, 100.0),
            score: 0,
            time_left_secs: TAP_ROUND_SECS,
            active: false,
            elapsed_ms: 0,
        }
    }

    /// Begin a new round: reset score and clock and place the target.
    pub fn start(&mut self) {
        self.score = 0;
        self.time_left_secs = TAP_ROUND_SECS;
        self.elapsed_ms = 0;
        self.active = true;
        self.move_target();
    }

    /// Advance one tick; the clock counts down in whole seconds.
    pub fn tick(&mut self) {
        if !self.active {
            return;
        }
        self.elapsed_ms += TICK_MILLIS;
        while self.elapsed_ms >= 1000 && self.active {
            self.elapsed_ms -= 1000;
            self.time_left_secs = self.time_left_secs.saturating_sub(1);
            if self.time_left_secs == 0 {
                self.active = false;
                info!("tap target round over: score {}", self.score);
            }
        }
    }

    /// The target was tapped. Scores and relocates it when a round is running.
    pub fn hit_target(&mut self) -> bool {
        if !self.active {
            return false;
        }
        self.score += 1;
        self.move_target();
        true
    }

    /// The primary action: hit the target mid-round, otherwise start a round.
    pub fn tap(&mut self) {
        if self.active {
            self.hit_target();
        } else {
            self.start();
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn time_left_secs(&self) -> u32 {
        self.time_left_secs
    }

    pub fn view(&self) -> TapTargetView {
        TapTargetView {
            target: self.target,
            target_size: TAP_TARGET_SIZE,
            score: self.score,
            time_left_secs: self.time_left_secs,
            active: self.active,
            round_over: self.time_left_secs == 0,
        }
    }

    fn move_target(&mut self) {
        let max_x = FIELD_WIDTH - TAP_TARGET_SIZE;
        let max_y = FIELD_HEIGHT - TAP_TARGET_SIZE - TAP_HEADER_HEIGHT;
        self.target = Position::new(
            self.rng.gen_range(0.0..max_x),
            self.rng.gen_range(0.0..max_y),
        );
    }
}
