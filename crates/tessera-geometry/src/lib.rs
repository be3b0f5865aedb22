//! Tessera Geometry - 2D primitives and triangulation
//!
//! This crate provides:
//! - Value types for common 2D primitives (circle, triangle, line
//!   segment, polygon)
//! - Containment and intersection tests over those primitives
//! - Affine transforms with a shared [`Transformable`] capability
//! - Ear-clipping triangulation of simple polygons into triangle lists
//!
//! Points are plain [`glam::Vec2`] values throughout.
//!
//! # Example
//!
//! ```
//! use glam::Vec2;
//! use tessera_geometry::{Polygon, rotate};
//!
//! let polygon = Polygon::new(vec![
//!     Vec2::new(0.0, 0.0),
//!     Vec2::new(4.0, 0.0),
//!     Vec2::new(4.0, 4.0),
//!     Vec2::new(0.0, 4.0),
//! ])
//! .unwrap();
//!
//! // Triangulated once at construction, cached for rendering.
//! assert_eq!(polygon.indices().len(), 6);
//!
//! // Transforms produce a new, freshly triangulated polygon.
//! let spun = rotate(&polygon, std::f32::consts::FRAC_PI_4);
//! assert_eq!(spun.triangle_count(), 2);
//! ```

mod circle;
mod line_segment;
mod polygon;
mod transform;
mod triangle;

pub use circle::*;
pub use line_segment::*;
pub use polygon::*;
pub use transform::*;
pub use triangle::*;
