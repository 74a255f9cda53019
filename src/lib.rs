//! Brick By Brick - two small arcade games on one engine
//!
//! Core modules:
//! - `sim`: Deterministic simulation (brick breaker and volley shooter)
//! - `renderer`: Draw-call boundary and frame composition
//! - `platform`: Input sampling and frame pacing
//! - `runner`: The fixed-rate loop tying them together
//! - `persistence`: High score file storage
//! - `tuning`: Data-driven game balance

pub mod audio;
pub mod config;
pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod runner;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use highscores::HighScore;
pub use settings::Settings;

/// Game loop constants
pub mod consts {
    use std::time::Duration;

    /// Simulation and render rate (ticks per second)
    pub const TICK_RATE: u32 = 60;
    /// Wall-clock length of one tick
    pub const TICK_INTERVAL: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);
    /// Frames a slow host may fall behind before the clock gives up catching up
    pub const MAX_LAG_FRAMES: u32 = 8;
}
