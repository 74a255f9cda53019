//! Flat-coloured 2D vertices

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

use super::Color;

/// Screen-space vertex, laid out for direct upload
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: Color,
}

impl Vertex {
    pub fn at(p: Vec2, color: Color) -> Self {
        Self {
            position: p.to_array(),
            color,
        }
    }
}

/// Palette for HUD and playfield elements
pub mod colors {
    use super::Color;
    use crate::tuning::Rgb;

    /// 8-bit RGB to opaque float RGBA
    pub const fn rgb(c: Rgb) -> Color {
        [c[0] as f32 / 255.0, c[1] as f32 / 255.0, c[2] as f32 / 255.0, 1.0]
    }

    pub const BLACK: Color = rgb([0, 0, 0]);
    pub const WHITE: Color = rgb([255, 255, 255]);
    pub const FRAME_BG: Color = rgb([40, 40, 40]);
    pub const TITLE: Color = rgb([255, 215, 0]);
    pub const GAME_OVER: Color = rgb([255, 0, 0]);
    pub const SHOOTER_BACKGROUND: Color = rgb([20, 20, 30]);
    pub const SCOREBOARD: Color = rgb([10, 10, 20]);
    pub const SHOOTER_BALL: Color = rgb([0, 200, 255]);
    pub const LAUNCHER: Color = rgb([255, 255, 0]);
    pub const AIM_GUIDE: Color = [1.0, 1.0, 1.0, 0.35];
}
