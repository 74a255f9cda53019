//! Recording renderer
//!
//! Accumulates one frame of geometry and hands it over on `present`.

use glam::Vec2;

use super::shapes;
use super::vertex::Vertex;
use super::{Anchor, Color, Renderer, Sprite, TextSize};
use crate::sim::Rect;

/// Circle tessellation
const CIRCLE_SEGMENTS: u32 = 24;

#[derive(Debug, Clone, PartialEq)]
pub struct TextItem {
    pub text: String,
    pub pos: Vec2,
    pub anchor: Anchor,
    pub size: TextSize,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpriteItem {
    pub sprite: Sprite,
    pub rect: Rect,
}

/// One recorded frame
#[derive(Debug, Clone, Default)]
pub struct Frame {
    pub clear: Color,
    pub vertices: Vec<Vertex>,
    pub texts: Vec<TextItem>,
    pub sprites: Vec<SpriteItem>,
}

impl Frame {
    /// Vertex data as raw bytes for upload
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// True if any text item equals `text`
    pub fn has_text(&self, text: &str) -> bool {
        self.texts.iter().any(|t| t.text == text)
    }
}

/// Renderer that records frames instead of drawing them
#[derive(Debug, Default)]
pub struct DrawList {
    current: Frame,
    presented: Frame,
    frames: u64,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recently presented frame
    pub fn last_frame(&self) -> &Frame {
        &self.presented
    }

    /// Number of frames presented
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Renderer for DrawList {
    fn clear(&mut self, color: Color) {
        self.current = Frame {
            clear: color,
            ..Default::default()
        };
    }

    fn fill_rect(&mut self, rect: &Rect, color: Color) {
        self.current.vertices.extend(shapes::rect(rect, color));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.current
            .vertices
            .extend(shapes::circle(center, radius, color, CIRCLE_SEGMENTS));
    }

    fn text(&mut self, text: &str, pos: Vec2, anchor: Anchor, size: TextSize, color: Color) {
        self.current.texts.push(TextItem {
            text: text.to_string(),
            pos,
            anchor,
            size,
            color,
        });
    }

    fn sprite(&mut self, sprite: Sprite, rect: &Rect) {
        self.current.sprites.push(SpriteItem {
            sprite,
            rect: *rect,
        });
    }

    fn present(&mut self) {
        self.presented = std::mem::take(&mut self.current);
        self.frames += 1;
        log::trace!(
            "Frame {}: {} vertices ({} bytes), {} texts, {} sprites",
            self.frames,
            self.presented.vertices.len(),
            self.presented.vertex_bytes().len(),
            self.presented.texts.len(),
            self.presented.sprites.len()
        );
    }
}
