//! Events emitted by a tick for the audio and persistence boundaries

use serde::{Deserialize, Serialize};

/// How a round finished
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    Lost,
    Won,
}

/// Something the outside world may want to react to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A ball struck a brick
    BrickHit { brick_id: u32, destroyed: bool },
    /// The ball bounced off the paddle
    PaddleHit,
    /// All bricks cleared; play resumes on `level` after a pause
    LevelCleared { level: u32 },
    /// A volley started
    VolleyStarted,
    /// Bricks shifted down and a new top row was spawned
    RowAdded { spawned: usize },
    /// The round ended with this score
    RoundOver { score: u64, outcome: RoundOutcome },
}
