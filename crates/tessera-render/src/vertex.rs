//! Vertex format produced by the batch renderer.

use crate::Color;
use bytemuck::{Pod, Zeroable};
use glam::Vec2;
use static_assertions::const_assert_eq;

/// A 2D position with an RGBA color, the only vertex format the batch
/// renderer emits.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct ColorVertex {
    /// Position in screen space.
    pub position: [f32; 2],
    /// Linear RGBA color.
    pub color: [f32; 4],
}

// The layout backends rely on when casting the vertex array to bytes.
const_assert_eq!(std::mem::size_of::<ColorVertex>(), 24);

impl ColorVertex {
    /// Create a vertex from a position and color.
    pub fn new(position: Vec2, color: Color) -> Self {
        Self {
            position: [position.x, position.y],
            color: color.to_array(),
        }
    }

    /// The position as a [`Vec2`].
    pub fn position(&self) -> Vec2 {
        Vec2::from_array(self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_round_trip() {
        let v = ColorVertex::new(Vec2::new(1.0, 2.0), Color::RED);
        assert_eq!(v.position(), Vec2::new(1.0, 2.0));
        assert_eq!(v.color, [1.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_vertices_cast_to_bytes() {
        let vertices = [ColorVertex::new(Vec2::ZERO, Color::WHITE); 2];
        let bytes: &[u8] = bytemuck::cast_slice(&vertices);
        assert_eq!(bytes.len(), 48);
    }
}
