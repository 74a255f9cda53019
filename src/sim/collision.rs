//! Collision detection and response for axis-aligned geometry
//!
//! Both games treat balls as their bounding boxes and bricks as rectangles.
//! Overlap is strict: rectangles that only share an edge do not collide.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in screen space (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Bounding box of a circle
    pub fn around(center: Vec2, radius: f32) -> Self {
        Self::new(center.x - radius, center.y - radius, radius * 2.0, radius * 2.0)
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Strict overlap test
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

/// Which walls a reflection touched
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallContact {
    pub side: bool,
    pub top: bool,
}

impl WallContact {
    pub fn any(&self) -> bool {
        self.side || self.top
    }
}

/// Reflect `vel` off the left, right and top edges of `arena`.
///
/// `extent` is the moving body's box (a zero-size box for point balls).
/// A component is negated only while moving toward the wall it touches, so a
/// body that is already heading back out is left alone. The bottom edge is
/// never a wall; callers decide what crossing it means.
pub fn reflect_off_walls(extent: &Rect, arena: &Rect, vel: &mut Vec2) -> WallContact {
    let mut contact = WallContact::default();

    if (extent.left() <= arena.left() && vel.x < 0.0)
        || (extent.right() >= arena.right() && vel.x > 0.0)
    {
        vel.x = -vel.x;
        contact.side = true;
    }
    if extent.top() <= arena.top() && vel.y < 0.0 {
        vel.y = -vel.y;
        contact.top = true;
    }

    contact
}

/// Index of the first rectangle (in iteration order) that overlaps `probe`
pub fn first_overlap<'a, I>(probe: &Rect, rects: I) -> Option<usize>
where
    I: IntoIterator<Item = &'a Rect>,
{
    rects.into_iter().position(|r| probe.overlaps(r))
}
