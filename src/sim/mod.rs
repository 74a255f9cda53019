//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One call to `tick` per frame, no wall-clock time
//! - Seeded RNG only
//! - Stable iteration order (bricks are kept in creation order)
//! - No rendering or platform dependencies

pub mod breakout;
pub mod collision;
pub mod events;
pub mod shooter;

pub use collision::{Rect, WallContact, first_overlap, reflect_off_walls};
pub use events::{GameEvent, RoundOutcome};

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::tuning::Rgb;

/// Pick a colour from a palette, white if the palette is empty
pub(crate) fn pick_color<R: Rng + ?Sized>(rng: &mut R, palette: &[Rgb]) -> Rgb {
    palette.choose(rng).copied().unwrap_or([255, 255, 255])
}
