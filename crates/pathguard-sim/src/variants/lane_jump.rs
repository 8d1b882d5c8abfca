//! Lane jump: keep a diagonally climbing player on a zigzag of blocks.
//!
//! The player moves up and sideways every tick and scores one point per
//! tick. A tap flips the sideways direction. Leaving the blocks ends the
//! game; a tap after that restarts it.

use log::info;
use serde::Serialize;

use pathguard_core::constants::*;
use pathguard_core::enums::Heading;
use pathguard_core::types::Position;

/// Render view of the lane-jump game.
#[derive(Debug, Clone, Serialize)]
pub struct LaneJumpView {
    /// Top-left corners of the blocks, bottom first.
    pub blocks: Vec<Position>,
    pub block_size: f64,
    pub player: Position,
    pub heading: Heading,
    pub score: u32,
    pub game_over: bool,
}

#[derive(Debug, Clone)]
pub struct LaneJumpGame {
    blocks: Vec<Position>,
    player: Position,
    heading: Heading,
    score: u32,
    game_over: bool,
}

impl Default for LaneJumpGame {
    fn default() -> Self {
        Self::new()
    }
}

impl LaneJumpGame {
    pub fn new() -> Self {
        let blocks = build_course();
        let player = block_centre(&blocks[0]);
        Self {
            blocks,
            player,
            heading: Heading::default(),
            score: 0,
            game_over: false,
        }
    }

    /// Advance one tick: move, score, then check footing.
    pub fn tick(&mut self) {
        if self.game_over {
            return;
        }

        self.player.y -= LANE_PLAYER_SPEED;
        self.player.x += match self.heading {
            Heading::Right => LANE_PLAYER_SPEED,
            Heading::Left => -LANE_PLAYER_SPEED,
        };
        self.score += 1;

        if !self.on_block() {
            self.game_over = true;
            info!("lane jump over: score {}", self.score);
        }
    }

    /// Flip direction, or restart after a fall.
    pub fn tap(&mut self) {
        if self.game_over {
            self.player = block_centre(&self.blocks[0]);
            self.heading = Heading::default();
            self.score = 0;
            self.game_over = false;
        } else {
            self.heading = self.heading.flipped();
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn player(&self) -> Position {
        self.player
    }

    pub fn view(&self) -> LaneJumpView {
        LaneJumpView {
            blocks: self.blocks.clone(),
            block_size: LANE_BLOCK_SIZE,
            player: self.player,
            heading: self.heading,
            score: self.score,
            game_over: self.game_over,
        }
    }

    fn on_block(&self) -> bool {
        let reach = LANE_BLOCK_SIZE * LANE_FOOTING_FACTOR;
        self.blocks.iter().any(|b| {
            let c = block_centre(b);
            (c.x - self.player.x).abs() < reach && (c.y - self.player.y).abs() < reach
        })
    }
}

/// Zigzag course: each block one size up and alternately right and left.
fn build_course() -> Vec<Position> {
    let mut x = FIELD_WIDTH / 2.0 - LANE_BLOCK_SIZE / 2.0;
    let mut y = FIELD_HEIGHT - 100.0;
    let mut blocks = Vec::with_capacity(LANE_BLOCK_COUNT);
    for i in 0..LANE_BLOCK_COUNT {
        blocks.push(Position::new(x, y));
        if i % 2 == 0 {
            x += LANE_BLOCK_SIZE;
        } else {
            x -= LANE_BLOCK_SIZE;
        }
        y -= LANE_BLOCK_SIZE;
    }
    blocks
}

fn block_centre(top_left: &Position) -> Position {
    Position::new(
        top_left.x + LANE_BLOCK_SIZE / 2.0,
        top_left.y + LANE_BLOCK_SIZE / 2.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_layout() {
        let game = LaneJumpGame::new();
        let view = game.view();
        assert_eq!(view.blocks.len(), LANE_BLOCK_COUNT);
        assert_eq!(view.blocks[1].x - view.blocks[0].x, LANE_BLOCK_SIZE);
        assert_eq!(view.blocks[2].x, view.blocks[0].x);
        assert_eq!(view.blocks[0].y - view.blocks[1].y, LANE_BLOCK_SIZE);
        assert_eq!(game.player(), block_centre(&view.blocks[0]));
    }

    /// Never turning runs off the course after 32 ticks.
    #[test]
    fn test_falls_without_turning() {
        let mut game = LaneJumpGame::new();
        for _ in 0..31 {
            game.tick();
        }
        assert!(!game.is_game_over(), "still on block 1 after 31 ticks");
        game.tick();
        assert!(game.is_game_over());
        assert_eq!(game.score(), 32);

        game.tick();
        assert_eq!(game.score(), 32, "no scoring after game over");
    }

    /// Turning at every block centre follows the zigzag.
    #[test]
    fn test_turning_each_block_stays_on_course() {
        let mut game = LaneJumpGame::new();
        for tick in 1..=400 {
            game.tick();
            if tick % 20 == 0 {
                game.tap();
            }
        }
        assert!(!game.is_game_over());
        assert_eq!(game.score(), 400);
    }

    #[test]
    fn test_tap_after_fall_restarts() {
        let mut game = LaneJumpGame::new();
        while !game.is_game_over() {
            game.tick();
        }
        game.tap();
        assert!(!game.is_game_over());
        assert_eq!(game.score(), 0);
        assert_eq!(game.view().heading, Heading::Right);
        assert_eq!(game.player(), block_centre(&game.view().blocks[0]));
    }
}
