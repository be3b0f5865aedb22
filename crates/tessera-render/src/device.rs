//! The render-device boundary.
//!
//! The batch renderer tessellates on the host and hands finished
//! vertex/index arrays to a [`RenderDevice`]. Anything that can draw an
//! indexed triangle list can sit behind this trait; the crate ships a
//! [`RecordingDevice`] that just logs the calls, which is what the test
//! suite draws into.

use crate::vertex::ColorVertex;
use tessera_geometry::Transform2D;

/// Dimensions of the render target, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// The screen-space orthographic projection for a viewport: pixel
/// coordinates with the origin at the top-left, mapped to the unit
/// square the device expects.
pub fn screen_projection(viewport: Viewport) -> Transform2D {
    let scale = glam::Vec2::new(2.0 / viewport.width as f32, -2.0 / viewport.height as f32);
    Transform2D::scale_xy(scale).then(&Transform2D::translate(glam::Vec2::new(-1.0, 1.0)))
}

/// A device the batch renderer can flush to.
///
/// Implementations are expected to be synchronous: when
/// [`draw_triangle_list`](Self::draw_triangle_list) returns, the device
/// no longer needs the borrowed arrays.
pub trait RenderDevice {
    /// Current render-target dimensions, used to build the default
    /// screen-space projection.
    fn viewport(&self) -> Viewport;

    /// Disable back-face culling. Called once when the batch renderer is
    /// constructed, since triangulation winding is not guaranteed to
    /// match any particular facing convention.
    fn disable_culling(&mut self);

    /// Set the projection applied to every vertex of the next draws.
    fn set_projection(&mut self, projection: &Transform2D);

    /// Number of passes the active shader/material state requires. The
    /// batch renderer re-submits the same geometry once per pass.
    fn passes(&self) -> usize {
        1
    }

    /// Draw `triangle_count` triangles from the given vertex and index
    /// arrays, three consecutive indices per triangle.
    fn draw_triangle_list(
        &mut self,
        vertices: &[ColorVertex],
        indices: &[u32],
        triangle_count: usize,
    );
}

/// One recorded [`RecordingDevice`] draw call.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCall {
    pub vertex_count: usize,
    pub index_count: usize,
    pub triangle_count: usize,
}

/// A [`RenderDevice`] that records every call instead of drawing.
///
/// Useful for tests and for inspecting what a batch would submit.
#[derive(Debug, Clone)]
pub struct RecordingDevice {
    viewport: Viewport,
    /// Every draw call received, in order.
    pub draw_calls: Vec<DrawCall>,
    /// The last projection set, if any.
    pub projection: Option<Transform2D>,
    /// Whether [`RenderDevice::disable_culling`] has been called.
    pub culling_disabled: bool,
}

impl RecordingDevice {
    /// Create a recording device with the given viewport.
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            draw_calls: Vec::new(),
            projection: None,
            culling_disabled: false,
        }
    }
}

impl Default for RecordingDevice {
    fn default() -> Self {
        Self::new(Viewport::new(800, 600))
    }
}

impl RenderDevice for RecordingDevice {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn disable_culling(&mut self) {
        self.culling_disabled = true;
    }

    fn set_projection(&mut self, projection: &Transform2D) {
        self.projection = Some(*projection);
    }

    fn draw_triangle_list(
        &mut self,
        vertices: &[ColorVertex],
        indices: &[u32],
        triangle_count: usize,
    ) {
        self.draw_calls.push(DrawCall {
            vertex_count: vertices.len(),
            index_count: indices.len(),
            triangle_count,
        });
    }
}
