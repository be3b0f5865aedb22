//! Circles.

use crate::{Transform2D, Transformable, distance_squared};
use glam::Vec2;

/// A circle described by its center and radius.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

impl Circle {
    /// Create a circle from a center and radius.
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }

    /// The circumference of this circle.
    pub fn perimeter(&self) -> f32 {
        std::f32::consts::TAU * self.radius
    }

    /// The area of this circle.
    pub fn area(&self) -> f32 {
        std::f32::consts::PI * self.radius * self.radius
    }

    /// Whether `point` lies inside this circle, boundary included.
    pub fn contains(&self, point: Vec2) -> bool {
        distance_squared(point, self.center) <= self.radius * self.radius
    }

    /// Whether this circle and `other` overlap, touching included.
    pub fn intersects(&self, other: &Circle) -> bool {
        let reach = self.radius + other.radius;
        distance_squared(self.center, other.center) <= reach * reach
    }

    /// A copy of this circle with its center offset by `delta`.
    pub fn translate(&self, delta: Vec2) -> Self {
        Self {
            center: self.center + delta,
            radius: self.radius,
        }
    }

    /// A copy of this circle with its radius multiplied by `factor`.
    pub fn scale(&self, factor: f32) -> Self {
        Self {
            center: self.center,
            radius: self.radius * factor,
        }
    }
}

impl Transformable for Circle {
    fn center(&self) -> Vec2 {
        self.center
    }

    /// A circle stays a circle: the center is mapped through the matrix
    /// and the radius is scaled by the length of the transformed x axis.
    /// Non-uniform scales therefore do not turn a circle into an
    /// ellipse; use the batch renderer's ellipse path for that.
    fn transform(&self, transform: &Transform2D) -> Self {
        Self {
            center: transform.transform_point(self.center),
            radius: self.radius * transform.transform_vector(Vec2::X).length(),
        }
    }
}
