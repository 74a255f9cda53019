//! Platform abstraction layer
//!
//! Handles host differences for:
//! - Input sampling (one snapshot per tick)
//! - Frame timing (fixed 60 Hz deadline)

pub mod input;
pub mod time;

pub use input::{IdleInput, InputSnapshot, InputSource, ScriptedInput};
pub use time::FrameClock;
