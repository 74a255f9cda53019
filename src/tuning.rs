//! Data-driven game balance
//!
//! Every gameplay number lives here as a literal so behavior stays stable
//! across refactors. Screen sizes are in pixels, speeds in pixels per tick.

use serde::{Deserialize, Serialize};

/// RGB colour as stored on bricks
pub type Rgb = [u8; 3];

/// Brick breaker balance table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakoutTuning {
    pub screen_width: f32,
    pub screen_height: f32,

    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Distance from the paddle top to the bottom of the screen
    pub paddle_bottom_gap: f32,
    pub paddle_speed: f32,
    /// dx after a paddle hit is `offset * paddle_deflection`
    pub paddle_deflection: f32,

    pub ball_radius: f32,
    /// Starting velocity for a fresh run
    pub ball_start_velocity: (f32, f32),
    /// Level-advance speed is `ball_base_speed + level * ball_speed_per_level`
    pub ball_base_speed: f32,
    pub ball_speed_per_level: f32,

    pub brick_cols: u32,
    pub brick_base_rows: u32,
    /// One extra row every `levels_per_extra_row` levels
    pub levels_per_extra_row: u32,
    pub brick_max_rows: u32,
    pub brick_height: f32,
    /// Gap trimmed from the right/bottom of each grid cell
    pub brick_gap: f32,
    pub brick_top: f32,
    pub brick_colors: Vec<Rgb>,

    pub score_per_brick: u64,
    pub max_level: u32,
    /// Ticks the new level is shown before play resumes
    pub level_transition_ticks: u32,
}

impl Default for BreakoutTuning {
    fn default() -> Self {
        Self {
            screen_width: 800.0,
            screen_height: 800.0,

            paddle_width: 100.0,
            paddle_height: 15.0,
            paddle_bottom_gap: 40.0,
            paddle_speed: 7.0,
            paddle_deflection: 5.0,

            ball_radius: 10.0,
            ball_start_velocity: (4.0, -4.0),
            ball_base_speed: 4.0,
            ball_speed_per_level: 0.1,

            brick_cols: 10,
            brick_base_rows: 5,
            levels_per_extra_row: 5,
            brick_max_rows: 10,
            brick_height: 30.0,
            brick_gap: 5.0,
            brick_top: 80.0,
            brick_colors: vec![
                [255, 100, 100],
                [255, 165, 0],
                [255, 255, 0],
                [0, 255, 127],
                [135, 206, 250],
            ],

            score_per_brick: 1,
            max_level: 50,
            level_transition_ticks: 60,
        }
    }
}

impl BreakoutTuning {
    /// Brick rows for a level (denser every few levels, capped).
    ///
    /// A zero `levels_per_extra_row` keeps the base row count on every level.
    pub fn rows_for_level(&self, level: u32) -> u32 {
        let extra = level.checked_div(self.levels_per_extra_row).unwrap_or(0);
        self.brick_base_rows
            .saturating_add(extra)
            .min(self.brick_max_rows)
    }

    /// Ball velocity after advancing to `level`
    pub fn velocity_for_level(&self, level: u32) -> (f32, f32) {
        let boost = level as f32 * self.ball_speed_per_level;
        (self.ball_base_speed + boost, -self.ball_base_speed - boost)
    }

    /// Width of one grid cell
    pub fn brick_cell_width(&self) -> f32 {
        (self.screen_width / self.brick_cols as f32).floor()
    }

    /// Paddle top edge
    pub fn paddle_y(&self) -> f32 {
        self.screen_height - self.paddle_bottom_gap
    }
}

/// Volley shooter balance table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShooterTuning {
    pub screen_width: f32,
    pub screen_height: f32,
    /// The HUD strip at the top doubles as the ceiling
    pub scoreboard_height: f32,

    pub brick_width: f32,
    pub brick_height: f32,
    pub brick_spacing: f32,
    pub initial_rows: u32,
    /// Inclusive range of starting hit counters
    pub brick_hits: (u32, u32),
    pub brick_colors: Vec<Rgb>,
    pub new_row_chance: f64,

    pub ball_speed: f32,
    pub ball_radius: f32,
    pub balls_per_volley: u32,
    pub launch_interval_ticks: u32,

    pub launcher_bottom_gap: f32,
    pub launcher_radius: f32,

    pub start_angle: f32,
    pub min_angle: f32,
    pub max_angle: f32,
    /// Degrees per tick while an aim key is held
    pub aim_step: f32,

    pub score_per_hit: u64,
    /// Inclusive range of coins per hit
    pub coins_per_hit: (u64, u64),
    /// Ticks the game over screen ignores restart clicks
    pub game_over_hold_ticks: u32,
}

impl Default for ShooterTuning {
    fn default() -> Self {
        Self {
            screen_width: 600.0,
            screen_height: 800.0,
            scoreboard_height: 80.0,

            brick_width: 80.0,
            brick_height: 45.0,
            brick_spacing: 5.0,
            initial_rows: 5,
            brick_hits: (1, 5),
            brick_colors: vec![
                [255, 100, 100],
                [100, 255, 100],
                [100, 100, 255],
                [255, 255, 100],
                [255, 100, 255],
                [100, 255, 255],
            ],
            new_row_chance: 0.8,

            ball_speed: 8.0,
            ball_radius: 5.0,
            balls_per_volley: 10,
            launch_interval_ticks: 10,

            launcher_bottom_gap: 30.0,
            launcher_radius: 10.0,

            start_angle: 60.0,
            min_angle: 10.0,
            max_angle: 170.0,
            aim_step: 1.0,

            score_per_hit: 10,
            coins_per_hit: (1, 3),
            game_over_hold_ticks: 120,
        }
    }
}

impl ShooterTuning {
    /// Number of brick columns that fit on screen
    pub fn cols(&self) -> u32 {
        (self.screen_width / (self.brick_width + self.brick_spacing)) as u32
    }

    /// Vertical distance between rows
    pub fn row_pitch(&self) -> f32 {
        self.brick_height + self.brick_spacing
    }

    /// Top edge of the first brick row
    pub fn grid_top(&self) -> f32 {
        self.scoreboard_height + 10.0
    }

    /// Left edge of a column
    pub fn column_x(&self, col: u32) -> f32 {
        col as f32 * (self.brick_width + self.brick_spacing) + self.brick_spacing
    }

    /// Vertical position of the launcher, which is also the loss line
    pub fn launcher_y(&self) -> f32 {
        self.screen_height - self.launcher_bottom_gap
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakout_rows_grow_and_cap() {
        let t = BreakoutTuning::default();
        assert_eq!(t.rows_for_level(1), 5);
        assert_eq!(t.rows_for_level(4), 5);
        assert_eq!(t.rows_for_level(5), 6);
        assert_eq!(t.rows_for_level(25), 10);
        assert_eq!(t.rows_for_level(50), 10);
    }

    #[test]
    fn breakout_rows_without_growth_step() {
        let t = BreakoutTuning {
            levels_per_extra_row: 0,
            ..Default::default()
        };
        assert_eq!(t.rows_for_level(1), 5);
        assert_eq!(t.rows_for_level(50), 5);
    }

    #[test]
    fn breakout_level_velocity() {
        let t = BreakoutTuning::default();
        let (dx, dy) = t.velocity_for_level(2);
        assert!((dx - 4.2).abs() < 1e-5);
        assert!((dy + 4.2).abs() < 1e-5);
        assert_eq!(t.brick_cell_width(), 80.0);
        assert_eq!(t.paddle_y(), 760.0);
    }

    #[test]
    fn shooter_grid_geometry() {
        let t = ShooterTuning::default();
        assert_eq!(t.cols(), 7);
        assert_eq!(t.row_pitch(), 50.0);
        assert_eq!(t.grid_top(), 90.0);
        assert_eq!(t.column_x(0), 5.0);
        assert_eq!(t.column_x(6), 515.0);
        assert_eq!(t.launcher_y(), 770.0);
    }
}
