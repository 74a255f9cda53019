//! Triangle lists for the two primitives the games draw

use glam::Vec2;
use std::f32::consts::TAU;

use super::Color;
use super::vertex::Vertex;
use crate::sim::Rect;

/// Two triangles covering `r`
pub fn rect(r: &Rect, color: Color) -> Vec<Vertex> {
    let tl = Vec2::new(r.left(), r.top());
    let tr = Vec2::new(r.right(), r.top());
    let bl = Vec2::new(r.left(), r.bottom());
    let br = Vec2::new(r.right(), r.bottom());
    [tl, tr, bl, bl, tr, br]
        .into_iter()
        .map(|p| Vertex::at(p, color))
        .collect()
}

/// Triangle fan around `center`, emitted as a plain list
pub fn circle(center: Vec2, radius: f32, color: Color, segments: u32) -> Vec<Vertex> {
    let rim: Vec<Vec2> = (0..=segments)
        .map(|i| center + Vec2::from_angle(i as f32 / segments as f32 * TAU) * radius)
        .collect();

    rim.windows(2)
        .flat_map(|edge| [center, edge[0], edge[1]])
        .map(|p| Vertex::at(p, color))
        .collect()
}
