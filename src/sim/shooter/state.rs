//! Volley shooter game state
//!
//! Bricks carry hit counters and creep down one row after every volley.
//! A volley is a fixed number of balls fired one after another along the
//! same angle from a stationary launcher.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::sim::collision::Rect;
use crate::sim::events::GameEvent;
use crate::sim::pick_color;
use crate::tuning::{Rgb, ShooterTuning};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Playing,
    /// A brick reached the launcher line
    GameOver,
}

/// Volley lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Volley {
    /// Waiting for the fire key
    Ready,
    /// Balls are still being fed out
    Launching { launched: u32, timer: u32, angle: f32 },
    /// Every ball is out; waiting for them all to drop
    InFlight,
}

/// A ball in a volley
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Cleared for good once the ball drops off the bottom
    pub active: bool,
}

impl Ball {
    /// Fire a ball from `origin` at `angle_deg` (0° = right, 90° = straight up)
    pub fn launch(origin: Vec2, angle_deg: f32, speed: f32, radius: f32) -> Self {
        let theta = angle_deg.to_radians();
        Self {
            pos: origin,
            vel: Vec2::new(speed * theta.cos(), -speed * theta.sin()),
            radius,
            active: true,
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::around(self.pos, self.radius)
    }
}

/// The stationary launcher; its height is also the loss line
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Launcher {
    pub pos: Vec2,
    pub radius: f32,
}

/// A brick with a hit counter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brick {
    pub id: u32,
    pub rect: Rect,
    /// Remaining hits; the brick is removed once this is 0 or less
    pub hits: i32,
    pub color: Rgb,
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub seed: u64,
    /// Brick, row and coin randomness
    pub rng: Pcg32,
    pub tuning: ShooterTuning,
    pub score: u64,
    pub coins: u64,
    /// Aim angle in degrees
    pub angle: f32,
    pub volley: Volley,
    pub phase: GamePhase,
    /// Ticks spent on the game over screen
    pub game_over_ticks: u32,
    pub time_ticks: u64,
    pub launcher: Launcher,
    /// Balls of the current volley
    pub balls: Vec<Ball>,
    /// Live bricks in creation order
    pub bricks: Vec<Brick>,
    /// Events from the most recent tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    next_id: u32,
}

impl GameState {
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, ShooterTuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: ShooterTuning) -> Self {
        let launcher = Launcher {
            pos: Vec2::new(tuning.screen_width / 2.0, tuning.launcher_y()),
            radius: tuning.launcher_radius,
        };
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            angle: tuning.start_angle,
            tuning,
            score: 0,
            coins: 0,
            volley: Volley::Ready,
            phase: GamePhase::Playing,
            game_over_ticks: 0,
            time_ticks: 0,
            launcher,
            balls: Vec::new(),
            bricks: Vec::new(),
            events: Vec::new(),
            next_id: 1,
        };
        state.generate_grid();
        log::info!(
            "Ball shooter run: seed={}, bricks={}",
            seed,
            state.bricks.len()
        );
        state
    }

    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// True when a new volley may be fired
    pub fn shoot_ready(&self) -> bool {
        self.volley == Volley::Ready
    }

    /// Number of balls still bouncing
    pub fn active_balls(&self) -> usize {
        self.balls.iter().filter(|b| b.active).count()
    }

    /// Append a random brick in `col` with its top edge at `y`
    fn spawn_brick(&mut self, col: u32, y: f32) {
        let (lo, hi) = self.tuning.brick_hits;
        let hits = self.rng.random_range(lo..=hi.max(lo)) as i32;
        let color = pick_color(&mut self.rng, &self.tuning.brick_colors);
        let id = self.next_entity_id();
        self.bricks.push(Brick {
            id,
            rect: Rect::new(
                self.tuning.column_x(col),
                y,
                self.tuning.brick_width,
                self.tuning.brick_height,
            ),
            hits,
            color,
        });
    }

    /// Replace the brick set with the starting grid
    pub fn generate_grid(&mut self) {
        self.bricks.clear();
        let top = self.tuning.grid_top();
        let pitch = self.tuning.row_pitch();
        for row in 0..self.tuning.initial_rows {
            for col in 0..self.tuning.cols() {
                self.spawn_brick(col, top + row as f32 * pitch);
            }
        }
    }

    /// Shift every brick down one row and spawn a partial new top row.
    ///
    /// Returns how many bricks were spawned.
    pub fn add_row(&mut self) -> usize {
        let pitch = self.tuning.row_pitch();
        for brick in &mut self.bricks {
            brick.rect.y += pitch;
        }

        // Non-finite chances spawn nothing
        let chance = match self.tuning.new_row_chance {
            c if c.is_finite() => c.clamp(0.0, 1.0),
            _ => 0.0,
        };
        let top = self.tuning.grid_top();
        let mut spawned = 0;
        for col in 0..self.tuning.cols() {
            if self.rng.random_bool(chance) {
                self.spawn_brick(col, top);
                spawned += 1;
            }
        }
        spawned
    }

    /// Any brick at or past the launcher line
    pub fn bricks_reached_launcher(&self) -> bool {
        self.bricks
            .iter()
            .any(|b| b.rect.bottom() >= self.launcher.pos.y)
    }

    /// Fresh grid, zero score and coins
    pub fn restart(&mut self) {
        self.score = 0;
        self.coins = 0;
        self.angle = self.tuning.start_angle;
        self.volley = Volley::Ready;
        self.balls.clear();
        self.generate_grid();
        self.phase = GamePhase::Playing;
        self.game_over_ticks = 0;
        log::info!("Ball shooter restarted");
    }
}
