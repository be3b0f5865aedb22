//! Tessera Render - batched 2D primitive rendering
//!
//! This crate provides:
//! - A color + position vertex format safe to cast to GPU bytes
//! - The [`RenderDevice`] boundary a backend implements to receive
//!   indexed triangle-list draw calls
//! - [`PrimitiveBatch`], which tessellates submitted shapes on the host
//!   and flushes them to the device in bounded, reusable buffers
//!
//! # Example
//!
//! ```
//! use glam::Vec2;
//! use tessera_render::{Color, PrimitiveBatch, RecordingDevice};
//!
//! let mut batch = PrimitiveBatch::new(RecordingDevice::default());
//!
//! batch.begin()?;
//! batch.circle(Vec2::new(100.0, 100.0), 50.0, Color::RED)?;
//! batch.line_segment(Vec2::ZERO, Vec2::new(200.0, 50.0), 2.0, Color::BLACK)?;
//! batch.end()?;
//!
//! assert_eq!(batch.device().draw_calls.len(), 1);
//! # Ok::<(), tessera_render::BatchError>(())
//! ```

mod batch;
mod color;
mod device;
mod error;
mod vertex;

pub use batch::*;
pub use color::*;
pub use device::*;
pub use error::*;
pub use vertex::*;
