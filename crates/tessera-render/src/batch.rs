//! Batched rendering of 2D primitives.
//!
//! [`PrimitiveBatch`] accumulates submitted shapes as triangle-list
//! geometry in fixed-capacity buffers and flushes them to a
//! [`RenderDevice`] in as few draw calls as possible. The buffers are
//! allocated once and reused across `begin`/`end` cycles, so the steady
//! state performs no allocation.

use crate::{
    BatchError, Color, ColorVertex, RenderDevice, Viewport, device::screen_projection,
};
use glam::Vec2;
use std::f32::consts::{FRAC_PI_2, TAU};
use tessera_geometry::{Polygon, Transform2D};

/// Default vertex capacity when none is given.
const DEFAULT_MAX_VERTEX_COUNT: usize = 2048;

/// Smallest side count used when approximating a circle or ellipse, so
/// small radii still look round.
const MIN_ELLIPSE_SIDE_COUNT: usize = 8;

/// A bounded accumulator that converts shapes into indexed triangle
/// lists and submits them to a [`RenderDevice`].
///
/// Shapes may only be submitted between [`begin`](Self::begin) and
/// [`end`](Self::end). When a submission would overflow the buffers the
/// accumulated geometry is flushed first; a shape that cannot fit even
/// into empty buffers is rejected with
/// [`BatchError::ShapeTooLarge`] before anything is written.
///
/// Not thread-safe: submissions mutate shared cursors without locking.
pub struct PrimitiveBatch<D: RenderDevice> {
    device: D,
    vertices: Box<[ColorVertex]>,
    indices: Box<[u32]>,
    max_vertex_count: usize,
    max_index_count: usize,
    vertex_count: usize,
    index_count: usize,
    shape_count: usize,
    batching: bool,
}

impl<D: RenderDevice> PrimitiveBatch<D> {
    /// Create a batch with the default vertex capacity.
    pub fn new(device: D) -> Self {
        Self::with_capacity(device, DEFAULT_MAX_VERTEX_COUNT)
    }

    /// Create a batch holding at most `max_vertex_count` vertices and
    /// three times as many indices.
    ///
    /// Disables back-face culling on the device, since triangulation
    /// winding is not guaranteed to match its facing convention.
    pub fn with_capacity(mut device: D, max_vertex_count: usize) -> Self {
        device.disable_culling();

        let max_index_count = max_vertex_count * 3;
        Self {
            device,
            vertices: vec![ColorVertex::new(Vec2::ZERO, Color::TRANSPARENT); max_vertex_count]
                .into_boxed_slice(),
            indices: vec![0u32; max_index_count].into_boxed_slice(),
            max_vertex_count,
            max_index_count,
            vertex_count: 0,
            index_count: 0,
            shape_count: 0,
            batching: false,
        }
    }

    /// Begin a batch with the plain screen-space projection.
    pub fn begin(&mut self) -> Result<(), BatchError> {
        self.begin_transformed(&Transform2D::IDENTITY)
    }

    /// Begin a batch, composing `transform` with the screen-space
    /// projection for the device's current viewport. The combined
    /// transform applies to every shape until [`end`](Self::end).
    pub fn begin_transformed(&mut self, transform: &Transform2D) -> Result<(), BatchError> {
        if self.batching {
            return Err(BatchError::AlreadyBatching);
        }

        let projection = transform.then(&screen_projection(self.device.viewport()));
        self.device.set_projection(&projection);

        self.vertex_count = 0;
        self.index_count = 0;
        self.shape_count = 0;
        self.batching = true;
        Ok(())
    }

    /// Flush whatever has accumulated and end the batch.
    pub fn end(&mut self) -> Result<(), BatchError> {
        self.ensure_batching()?;
        self.flush();
        self.batching = false;
        Ok(())
    }

    /// Submit a triangle.
    pub fn triangle(
        &mut self,
        a: Vec2,
        b: Vec2,
        c: Vec2,
        color: Color,
    ) -> Result<(), BatchError> {
        self.ensure_batching()?;
        self.handle_overflow(3, 3)?;

        let base = self.vertex_count as u32;
        self.push_indices(&[base, base + 1, base + 2]);
        self.push_vertex(a, color);
        self.push_vertex(b, color);
        self.push_vertex(c, color);

        self.shape_count += 1;
        Ok(())
    }

    /// Submit an axis-aligned rectangle given two opposite corners.
    pub fn rectangle(
        &mut self,
        top_left: Vec2,
        bottom_right: Vec2,
        color: Color,
    ) -> Result<(), BatchError> {
        self.ensure_batching()?;
        self.handle_overflow(4, 6)?;

        let base = self.vertex_count as u32;
        self.push_indices(&[base, base + 1, base + 2, base, base + 2, base + 3]);
        self.push_vertex(top_left, color);
        self.push_vertex(Vec2::new(bottom_right.x, top_left.y), color);
        self.push_vertex(bottom_right, color);
        self.push_vertex(Vec2::new(top_left.x, bottom_right.y), color);

        self.shape_count += 1;
        Ok(())
    }

    /// Submit a regular polygon as a fan of `sides` triangles around the
    /// center: `sides + 1` vertices, `3 * sides` indices.
    pub fn regular_polygon(
        &mut self,
        center: Vec2,
        radius: f32,
        sides: u32,
        color: Color,
    ) -> Result<(), BatchError> {
        self.ensure_batching()?;
        if sides < 3 {
            return Err(BatchError::TooFewSides { sides });
        }
        self.fan(center, radius, sides as usize, &Transform2D::IDENTITY, color)
    }

    /// Submit a circle, approximated by a regular polygon whose side
    /// count grows with the radius.
    pub fn circle(&mut self, center: Vec2, radius: f32, color: Color) -> Result<(), BatchError> {
        self.ellipse(center, radius, 1.0, color)
    }

    /// Submit an ellipse: a circle of the given radius squashed along
    /// the x axis by `1 / eccentricity`, about its center.
    ///
    /// An eccentricity of exactly zero is degenerate and rejected.
    pub fn ellipse(
        &mut self,
        center: Vec2,
        radius: f32,
        eccentricity: f32,
        color: Color,
    ) -> Result<(), BatchError> {
        self.ensure_batching()?;
        if eccentricity == 0.0 {
            return Err(BatchError::ZeroEccentricity);
        }

        let sides = (radius as usize + 4).max(MIN_ELLIPSE_SIDE_COUNT);
        let squash = Transform2D::scale_xy(Vec2::new(1.0 / eccentricity, 1.0)).about(center);
        self.fan(center, radius, sides, &squash, color)
    }

    /// Submit a line segment of the given width as a quad: the two
    /// endpoints offset perpendicular to the segment by half the width.
    pub fn line_segment(
        &mut self,
        start: Vec2,
        end: Vec2,
        width: f32,
        color: Color,
    ) -> Result<(), BatchError> {
        self.ensure_batching()?;
        self.handle_overflow(4, 6)?;

        let direction = (end - start).normalize_or_zero();
        let offset =
            Transform2D::rotate(FRAC_PI_2).transform_vector(direction) * (width * 0.5);

        let base = self.vertex_count as u32;
        self.push_indices(&[base, base + 2, base + 3, base, base + 1, base + 3]);
        self.push_vertex(start + offset, color);
        self.push_vertex(start - offset, color);
        self.push_vertex(end + offset, color);
        self.push_vertex(end - offset, color);

        self.shape_count += 1;
        Ok(())
    }

    /// Submit an arbitrary simple polygon, reusing its cached
    /// triangulation.
    ///
    /// A polygon whose index cache is empty (its triangulation failed)
    /// describes no triangles and is skipped without consuming
    /// capacity.
    pub fn polygon(&mut self, polygon: &Polygon, color: Color) -> Result<(), BatchError> {
        self.ensure_batching()?;
        if polygon.indices().is_empty() {
            return Ok(());
        }
        self.handle_overflow(polygon.vertices().len(), polygon.indices().len())?;

        let base = self.vertex_count as u32;
        for &index in polygon.indices() {
            self.push_index(base + index);
        }
        for &vertex in polygon.vertices() {
            self.push_vertex(vertex, color);
        }

        self.shape_count += 1;
        Ok(())
    }

    /// Whether a batch is currently active.
    pub fn is_batching(&self) -> bool {
        self.batching
    }

    /// Vertices currently buffered.
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Indices currently buffered.
    pub fn index_count(&self) -> usize {
        self.index_count
    }

    /// Shapes buffered since the last flush.
    pub fn shape_count(&self) -> usize {
        self.shape_count
    }

    /// Configured vertex capacity.
    pub fn max_vertex_count(&self) -> usize {
        self.max_vertex_count
    }

    /// Configured index capacity.
    pub fn max_index_count(&self) -> usize {
        self.max_index_count
    }

    /// The device's viewport.
    pub fn viewport(&self) -> Viewport {
        self.device.viewport()
    }

    /// Borrow the underlying device.
    pub fn device(&self) -> &D {
        &self.device
    }

    /// Mutably borrow the underlying device.
    ///
    /// Interleaving draw calls with an active batch on the same device
    /// is the caller's responsibility to avoid.
    pub fn device_mut(&mut self) -> &mut D {
        &mut self.device
    }

    /// Consume the batch and return the device.
    pub fn into_device(self) -> D {
        self.device
    }

    fn ensure_batching(&self) -> Result<(), BatchError> {
        if self.batching {
            Ok(())
        } else {
            Err(BatchError::NotBatching)
        }
    }

    /// Make room for a shape needing `shape_vertices` and
    /// `shape_indices`. A shape exceeding total capacity is rejected
    /// outright; one that merely does not fit right now triggers an
    /// eager flush of the accumulated geometry.
    fn handle_overflow(
        &mut self,
        shape_vertices: usize,
        shape_indices: usize,
    ) -> Result<(), BatchError> {
        if shape_vertices > self.max_vertex_count || shape_indices > self.max_index_count {
            return Err(BatchError::ShapeTooLarge {
                vertices: shape_vertices,
                indices: shape_indices,
                max_vertices: self.max_vertex_count,
                max_indices: self.max_index_count,
            });
        }
        if self.vertex_count + shape_vertices > self.max_vertex_count
            || self.index_count + shape_indices > self.max_index_count
        {
            self.flush();
        }
        Ok(())
    }

    /// Submit the accumulated geometry to the device, once per pass,
    /// and reset the cursors. No-op when nothing has been buffered.
    fn flush(&mut self) {
        if self.shape_count == 0 {
            return;
        }

        tracing::trace!(
            shapes = self.shape_count,
            vertices = self.vertex_count,
            indices = self.index_count,
            "flushing primitive batch"
        );

        for _ in 0..self.device.passes() {
            self.device.draw_triangle_list(
                &self.vertices[..self.vertex_count],
                &self.indices[..self.index_count],
                self.index_count / 3,
            );
        }

        self.vertex_count = 0;
        self.index_count = 0;
        self.shape_count = 0;
    }

    /// Triangle fan around `center`: the rim points come from rotating
    /// an initial offset vector by `TAU / side_count` per step, then
    /// mapping through `mapping` (identity for regular polygons, the
    /// about-center squash for ellipses).
    fn fan(
        &mut self,
        center: Vec2,
        radius: f32,
        side_count: usize,
        mapping: &Transform2D,
        color: Color,
    ) -> Result<(), BatchError> {
        self.handle_overflow(side_count + 1, side_count * 3)?;

        let sides = side_count as u32;
        let base = self.vertex_count as u32;
        for i in 0..sides {
            // Center vertex sits after the rim points.
            self.push_index(base + sides);
            self.push_index(base + i);
            self.push_index(base + (i + 1) % sides);
        }

        let rotation = Transform2D::rotate(TAU / side_count as f32);
        let mut offset = Vec2::new(0.0, radius);
        for _ in 0..side_count {
            offset = rotation.transform_vector(offset);
            self.push_vertex(mapping.transform_point(center + offset), color);
        }
        self.push_vertex(mapping.transform_point(center), color);

        self.shape_count += 1;
        Ok(())
    }

    fn push_vertex(&mut self, position: Vec2, color: Color) {
        self.vertices[self.vertex_count] = ColorVertex::new(position, color);
        self.vertex_count += 1;
    }

    fn push_index(&mut self, index: u32) {
        self.indices[self.index_count] = index;
        self.index_count += 1;
    }

    fn push_indices(&mut self, indices: &[u32]) {
        for &index in indices {
            self.push_index(index);
        }
    }
}
