//! Per-tick input sampling

use std::collections::VecDeque;

use crate::sim::{breakout, shooter};

/// Everything the games read from the host in one tick.
///
/// Held keys (`left`, `right`, `fire`) are level-triggered; `pause` and
/// `click` are edge-triggered and only true on the tick they happened.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    pub left: bool,
    pub right: bool,
    pub fire: bool,
    pub pause: bool,
    pub click: bool,
    /// Window closed or the host asked us to stop
    pub quit: bool,
    /// Let the autopilot play
    pub idle: bool,
}

impl InputSnapshot {
    pub fn to_breakout(&self) -> breakout::TickInput {
        breakout::TickInput {
            left: self.left,
            right: self.right,
            pause: self.pause,
            restart: self.click,
            idle_mode: self.idle,
        }
    }

    pub fn to_shooter(&self) -> shooter::TickInput {
        shooter::TickInput {
            aim_left: self.left,
            aim_right: self.right,
            fire: self.fire,
            restart: self.click,
            idle_mode: self.idle,
        }
    }
}

/// Source of input snapshots
pub trait InputSource {
    /// Poll once; called exactly once per tick
    fn sample(&mut self) -> InputSnapshot;
}

/// Demo input: the autopilot plays and clicks through end screens.
///
/// Quits after `max_ticks` samples (0 = never).
#[derive(Debug, Clone)]
pub struct IdleInput {
    sampled: u64,
    max_ticks: u64,
}

impl IdleInput {
    pub fn new(max_ticks: u64) -> Self {
        Self {
            sampled: 0,
            max_ticks,
        }
    }
}

impl InputSource for IdleInput {
    fn sample(&mut self) -> InputSnapshot {
        self.sampled += 1;
        InputSnapshot {
            idle: true,
            click: true,
            quit: self.max_ticks > 0 && self.sampled > self.max_ticks,
            ..Default::default()
        }
    }
}

/// Replays a fixed list of snapshots, then quits
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    frames: VecDeque<InputSnapshot>,
}

impl ScriptedInput {
    pub fn new(frames: impl IntoIterator<Item = InputSnapshot>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }

    /// Hold `snapshot` for `ticks` ticks
    pub fn hold(mut self, snapshot: InputSnapshot, ticks: usize) -> Self {
        self.frames.extend(std::iter::repeat_n(snapshot, ticks));
        self
    }

    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl InputSource for ScriptedInput {
    fn sample(&mut self) -> InputSnapshot {
        self.frames.pop_front().unwrap_or(InputSnapshot {
            quit: true,
            ..Default::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_quits_after_budget() {
        let mut input = IdleInput::new(2);
        assert!(!input.sample().quit);
        let second = input.sample();
        assert!(second.idle && second.click && !second.quit);
        assert!(input.sample().quit);

        let mut forever = IdleInput::new(0);
        assert!((0..1000).all(|_| !forever.sample().quit));
    }

    #[test]
    fn test_scripted_replays_then_quits() {
        let left = InputSnapshot {
            left: true,
            ..Default::default()
        };
        let mut input = ScriptedInput::new([InputSnapshot::default()]).hold(left, 2);
        assert_eq!(input.remaining(), 3);
        assert_eq!(input.sample(), InputSnapshot::default());
        assert!(input.sample().left);
        assert!(input.sample().left);
        assert!(input.sample().quit);
    }

    #[test]
    fn test_snapshot_mapping() {
        let snap = InputSnapshot {
            left: true,
            fire: true,
            click: true,
            idle: true,
            ..Default::default()
        };
        let b = snap.to_breakout();
        assert!(b.left && !b.right && b.restart && b.idle_mode && !b.pause);
        let s = snap.to_shooter();
        assert!(s.aim_left && !s.aim_right && s.fire && s.restart && s.idle_mode);
    }
}
