//! Player preferences chosen from the menus
//!
//! Skins only change colours; the starting level feeds the first brick grid.

use serde::{Deserialize, Serialize};

use crate::tuning::Rgb;

/// Ball colours offered in the skin selector
pub const BALL_SKINS: [Rgb; 3] = [[255, 255, 0], [255, 0, 255], [0, 255, 255]];

/// Paddle colours offered in the skin selector
pub const PADDLE_SKINS: [Rgb; 3] = [[100, 200, 255], [200, 100, 255], [255, 150, 50]];

/// Highest level the level selector offers
pub const MAX_START_LEVEL: u32 = 50;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Index into `BALL_SKINS`
    pub ball_skin: usize,
    /// Index into `PADDLE_SKINS`
    pub paddle_skin: usize,
    /// Level a new brick breaker run starts on
    pub start_level: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ball_skin: 0,
            paddle_skin: 0,
            start_level: 1,
        }
    }
}

impl Settings {
    /// Select a ball skin; out-of-range picks are ignored
    pub fn select_ball_skin(&mut self, index: usize) -> bool {
        if index < BALL_SKINS.len() {
            self.ball_skin = index;
            true
        } else {
            false
        }
    }

    /// Select a paddle skin; out-of-range picks are ignored
    pub fn select_paddle_skin(&mut self, index: usize) -> bool {
        if index < PADDLE_SKINS.len() {
            self.paddle_skin = index;
            true
        } else {
            false
        }
    }

    /// Select the starting level (1..=50)
    pub fn select_level(&mut self, level: u32) -> bool {
        if (1..=MAX_START_LEVEL).contains(&level) {
            self.start_level = level;
            true
        } else {
            false
        }
    }

    pub fn ball_color(&self) -> Rgb {
        BALL_SKINS[self.ball_skin.min(BALL_SKINS.len() - 1)]
    }

    pub fn paddle_color(&self) -> Rgb {
        PADDLE_SKINS[self.paddle_skin.min(PADDLE_SKINS.len() - 1)]
    }
}
