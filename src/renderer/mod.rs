//! Presentation boundary
//!
//! Games draw through the `Renderer` trait after the physics step. The
//! bundled `DrawList` records each frame as a vertex buffer plus text and
//! sprite items, ready to hand to a GPU or a test.

pub mod draw_list;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use draw_list::{DrawList, Frame, SpriteItem, TextItem};
pub use vertex::{Vertex, colors};

use glam::Vec2;

use crate::sim::Rect;

/// RGBA colour in 0..=1
pub type Color = [f32; 4];

/// Font size classes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSize {
    /// HUD text
    Small,
    /// Titles and banners
    Large,
}

/// Where a text position is measured from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    TopLeft,
    Center,
}

/// Images the games blit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sprite {
    Logo,
    Coin,
}

/// Drawing primitives a frontend must provide
pub trait Renderer {
    /// Start a frame filled with `color`
    fn clear(&mut self, color: Color);
    fn fill_rect(&mut self, rect: &Rect, color: Color);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);
    fn text(&mut self, text: &str, pos: Vec2, anchor: Anchor, size: TextSize, color: Color);
    fn sprite(&mut self, sprite: Sprite, rect: &Rect);
    /// Show the finished frame
    fn present(&mut self);
}
