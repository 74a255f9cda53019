//! Brick By Brick: single-ball brick breaker with 50 levels

pub mod state;
pub mod tick;

pub use state::{Ball, Brick, GamePhase, GameState, Paddle};
pub use tick::{BallStep, TickInput, step_ball, tick};
