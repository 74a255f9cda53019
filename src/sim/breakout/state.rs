//! Brick breaker game state
//!
//! One ball, one rectangular paddle, a grid of one-hit bricks and a level
//! counter. Everything needed to reproduce a run lives here.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::sim::collision::Rect;
use crate::sim::events::GameEvent;
use crate::sim::pick_color;
use crate::tuning::{BreakoutTuning, Rgb};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ball in motion
    Playing,
    /// Frozen by the pause key
    Paused,
    /// New level shown before play resumes
    LevelTransition,
    /// Ball left the bottom of the screen
    GameOver,
    /// Final level cleared
    Won,
}

impl GamePhase {
    /// True once the round has ended
    pub fn is_finished(&self) -> bool {
        matches!(self, GamePhase::GameOver | GamePhase::Won)
    }
}

/// The ball (centre position, per-tick velocity)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    /// Bounding box used for every collision test
    pub fn bounds(&self) -> Rect {
        Rect::around(self.pos, self.radius)
    }
}

/// The player's paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub rect: Rect,
}

impl Paddle {
    /// Paddle centred horizontally at its resting height
    pub fn centered(tuning: &BreakoutTuning) -> Self {
        Self {
            rect: Rect::new(
                tuning.screen_width / 2.0 - tuning.paddle_width / 2.0,
                tuning.paddle_y(),
                tuning.paddle_width,
                tuning.paddle_height,
            ),
        }
    }

    /// Move horizontally, staying on screen
    pub fn shift(&mut self, dx: f32, screen_width: f32) {
        let max_x = (screen_width - self.rect.w).max(0.0);
        self.rect.x = (self.rect.x + dx).clamp(0.0, max_x);
    }
}

/// A one-hit brick
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brick {
    pub id: u32,
    pub rect: Rect,
    pub color: Rgb,
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Brick colour stream
    pub rng: Pcg32,
    /// Balance table
    pub tuning: BreakoutTuning,
    /// Current level (1-based)
    pub level: u32,
    pub score: u64,
    pub phase: GamePhase,
    /// Ticks left in a level transition
    pub transition_ticks: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub paddle: Paddle,
    pub ball: Ball,
    /// Live bricks in creation order
    pub bricks: Vec<Brick>,
    /// Events from the most recent tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    next_id: u32,
}

impl GameState {
    /// New run starting at `start_level` with default tuning
    pub fn new(seed: u64, start_level: u32) -> Self {
        Self::with_tuning(seed, start_level, BreakoutTuning::default())
    }

    pub fn with_tuning(seed: u64, start_level: u32, tuning: BreakoutTuning) -> Self {
        let level = start_level.clamp(1, tuning.max_level.max(1));
        let paddle = Paddle::centered(&tuning);
        let ball = Ball {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            radius: tuning.ball_radius,
        };

        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            tuning,
            level,
            score: 0,
            phase: GamePhase::Playing,
            transition_ticks: 0,
            time_ticks: 0,
            paddle,
            ball,
            bricks: Vec::new(),
            events: Vec::new(),
            next_id: 1,
        };

        let (dx, dy) = state.tuning.ball_start_velocity;
        state.reset_serve(Vec2::new(dx, dy));
        state.generate_bricks();
        log::info!(
            "Brick breaker run: seed={}, level={}, bricks={}",
            seed,
            state.level,
            state.bricks.len()
        );
        state
    }

    /// Allocate a new brick ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Centre the paddle and put the ball mid-screen with `vel`
    pub fn reset_serve(&mut self, vel: Vec2) {
        self.paddle = Paddle::centered(&self.tuning);
        self.ball.pos = Vec2::new(self.tuning.screen_width / 2.0, self.tuning.screen_height / 2.0);
        self.ball.vel = vel;
    }

    /// Replace the brick set with a fresh grid for the current level
    pub fn generate_bricks(&mut self) {
        self.bricks.clear();

        let rows = self.tuning.rows_for_level(self.level);
        let cols = self.tuning.brick_cols;
        let cell_w = self.tuning.brick_cell_width();
        let cell_h = self.tuning.brick_height;
        let gap = self.tuning.brick_gap;
        let top = self.tuning.brick_top;

        for row in 0..rows {
            for col in 0..cols {
                let color = pick_color(&mut self.rng, &self.tuning.brick_colors);
                let id = self.next_entity_id();
                self.bricks.push(Brick {
                    id,
                    rect: Rect::new(
                        col as f32 * cell_w,
                        row as f32 * cell_h + top,
                        cell_w - gap,
                        cell_h - gap,
                    ),
                    color,
                });
            }
        }
    }

    /// Start over from level 1 with score 0
    pub fn restart(&mut self) {
        self.level = 1;
        self.score = 0;
        self.transition_ticks = 0;
        let (dx, dy) = self.tuning.ball_start_velocity;
        self.reset_serve(Vec2::new(dx, dy));
        self.generate_bricks();
        self.phase = GamePhase::Playing;
        log::info!("Brick breaker restarted");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_level_one_grid() {
        let state = GameState::new(7, 1);
        assert_eq!(state.level, 1);
        assert_eq!(state.bricks.len(), 50);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.ball.pos, Vec2::new(400.0, 400.0));
        assert_eq!(state.ball.vel, Vec2::new(4.0, -4.0));

        let first = &state.bricks[0];
        assert_eq!(first.rect, Rect::new(0.0, 80.0, 75.0, 25.0));
        let last = &state.bricks[49];
        assert_eq!(last.rect, Rect::new(720.0, 200.0, 75.0, 25.0));

        // IDs follow creation order
        assert!(state.bricks.windows(2).all(|w| w[0].id < w[1].id));
    }

    #[test]
    fn test_start_level_is_clamped_and_denser() {
        assert_eq!(GameState::new(1, 0).level, 1);
        assert_eq!(GameState::new(1, 99).level, 50);
        assert_eq!(GameState::new(1, 10).bricks.len(), 70);
    }

    #[test]
    fn test_paddle_stays_on_screen() {
        let t = BreakoutTuning::default();
        let mut paddle = Paddle::centered(&t);
        assert_eq!(paddle.rect.x, 350.0);
        paddle.shift(-1000.0, t.screen_width);
        assert_eq!(paddle.rect.x, 0.0);
        paddle.shift(1000.0, t.screen_width);
        assert_eq!(paddle.rect.right(), 800.0);
    }

    #[test]
    fn test_colors_come_from_palette() {
        let state = GameState::new(42, 1);
        assert!(
            state
                .bricks
                .iter()
                .all(|b| state.tuning.brick_colors.contains(&b.color))
        );
    }

    #[test]
    fn test_restart_resets_run() {
        let mut state = GameState::new(3, 12);
        state.score = 40;
        state.phase = GamePhase::GameOver;
        state.restart();
        assert_eq!(state.level, 1);
        assert_eq!(state.score, 0);
        assert_eq!(state.bricks.len(), 50);
        assert_eq!(state.phase, GamePhase::Playing);
    }
}
