//! Sound cues
//!
//! The simulation never plays audio itself; the runner turns events into
//! cues and hands them to an `AudioSink`.

use crate::sim::{GameEvent, RoundOutcome};

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Ball hits a brick
    BrickHit,
    /// Final level cleared
    Win,
}

impl SoundEffect {
    /// Cue for a simulation event, if it has one
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::BrickHit { .. } => Some(SoundEffect::BrickHit),
            GameEvent::RoundOver {
                outcome: RoundOutcome::Won,
                ..
            } => Some(SoundEffect::Win),
            _ => None,
        }
    }

    /// Sound file for this cue
    pub fn asset_name(&self) -> &'static str {
        match self {
            SoundEffect::BrickHit => "wine-bottle-hit.wav",
            SoundEffect::Win => "winning.wav",
        }
    }
}

/// Something that can play cues
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect);
}

/// Headless sink: logs cues instead of playing them
#[derive(Debug, Default)]
pub struct LogAudio {
    muted: bool,
    played: usize,
}

impl LogAudio {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Cues played so far (muted cues are not counted)
    pub fn played(&self) -> usize {
        self.played
    }
}

impl AudioSink for LogAudio {
    fn play(&mut self, effect: SoundEffect) {
        if self.muted {
            return;
        }
        self.played += 1;
        log::debug!("Sound: {:?} ({})", effect, effect.asset_name());
    }
}
