//! Trailing Ball Shooter: volleys of balls against bricks with hit counters

pub mod state;
pub mod tick;

pub use state::{Ball, Brick, GamePhase, GameState, Launcher, Volley};
pub use tick::{TickInput, step_ball, tick};
