//! Tessera - 2D computational geometry and batched rendering
//!
//! Tessera is a small 2D library in two parts:
//!
//! - **Geometry** ([`tessera_geometry`]): circle, triangle, line
//!   segment, and polygon value types with containment, intersection,
//!   and affine-transform operations, plus ear-clipping triangulation
//!   of simple polygons.
//! - **Rendering** ([`tessera_render`]): a bounded primitive batch that
//!   tessellates shapes into indexed triangle lists and flushes them to
//!   a pluggable render device.
//!
//! # Quick Start
//!
//! ```
//! use tessera::prelude::*;
//!
//! let mut batch = PrimitiveBatch::new(RecordingDevice::default());
//!
//! batch.begin()?;
//! batch.rectangle(Vec2::new(10.0, 10.0), Vec2::new(90.0, 60.0), Color::BLUE)?;
//! batch.circle(Vec2::new(50.0, 50.0), 20.0, Color::WHITE)?;
//! batch.end()?;
//! # Ok::<(), tessera::render::BatchError>(())
//! ```

pub mod logging;

pub use tessera_geometry as geometry;
pub use tessera_render as render;

/// The most commonly used types, for glob import.
pub mod prelude {
    pub use glam::Vec2;

    pub use tessera_geometry::{
        Circle, LineSegment, Polygon, Transform2D, Transformable, Triangle,
    };
    pub use tessera_render::{
        Color, ColorVertex, PrimitiveBatch, RecordingDevice, RenderDevice, Viewport,
    };
}
