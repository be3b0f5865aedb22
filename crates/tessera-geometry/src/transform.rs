//! 2D affine transformations.
//!
//! [`Transform2D`] wraps a 3x3 matrix for translation, rotation, and
//! scaling, composable via multiplication. [`Transformable`] is the
//! capability every shape type implements to produce a transformed copy
//! of itself, either about the world origin or about an arbitrary point.

use glam::{Mat3, Vec2};

/// A 2D affine transformation matrix.
///
/// Internally a 3x3 matrix whose last row is always `[0, 0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform2D {
    matrix: Mat3,
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform2D {
    /// Identity transform (no transformation).
    pub const IDENTITY: Self = Self {
        matrix: Mat3::IDENTITY,
    };

    /// Create from a 3x3 matrix.
    pub fn from_mat3(matrix: Mat3) -> Self {
        Self { matrix }
    }

    /// Create a translation transform.
    pub fn translate(offset: Vec2) -> Self {
        Self {
            matrix: Mat3::from_translation(offset),
        }
    }

    /// Create a rotation transform (angle in radians, counter-clockwise).
    pub fn rotate(angle: f32) -> Self {
        Self {
            matrix: Mat3::from_angle(angle),
        }
    }

    /// Create a uniform scale transform.
    pub fn scale(factor: f32) -> Self {
        Self {
            matrix: Mat3::from_scale(Vec2::splat(factor)),
        }
    }

    /// Create a non-uniform scale transform.
    pub fn scale_xy(factor: Vec2) -> Self {
        Self {
            matrix: Mat3::from_scale(factor),
        }
    }

    /// Combine two transforms: apply `self` first, then `other`.
    pub fn then(&self, other: &Transform2D) -> Self {
        Self {
            matrix: other.matrix * self.matrix,
        }
    }

    /// Re-anchor this transform so it applies about `origin` instead of
    /// the world origin: translate `origin` to zero, apply, translate
    /// back.
    pub fn about(&self, origin: Vec2) -> Self {
        Transform2D::translate(-origin)
            .then(self)
            .then(&Transform2D::translate(origin))
    }

    /// Transform a point.
    pub fn transform_point(&self, point: Vec2) -> Vec2 {
        self.matrix.transform_point2(point)
    }

    /// Transform a direction vector (translation is ignored).
    pub fn transform_vector(&self, vector: Vec2) -> Vec2 {
        self.matrix.transform_vector2(vector)
    }

    /// The translation component.
    pub fn translation(&self) -> Vec2 {
        Vec2::new(self.matrix.z_axis.x, self.matrix.z_axis.y)
    }

    /// The determinant of the linear part. Zero means the transform
    /// collapses the plane and is not invertible.
    pub fn determinant(&self) -> f32 {
        self.matrix.determinant()
    }

    /// Get the underlying 3x3 matrix.
    pub fn as_mat3(&self) -> &Mat3 {
        &self.matrix
    }
}

impl std::ops::Mul<Transform2D> for Transform2D {
    type Output = Transform2D;

    fn mul(self, rhs: Transform2D) -> Transform2D {
        self.then(&rhs)
    }
}

impl std::ops::Mul<Vec2> for Transform2D {
    type Output = Vec2;

    fn mul(self, rhs: Vec2) -> Vec2 {
        self.transform_point(rhs)
    }
}

/// Capability for 2D shapes that can produce a transformed copy of
/// themselves.
///
/// Implementors never mutate in place; transforming yields a new value.
pub trait Transformable: Sized {
    /// The reference point of this shape, used as the default origin for
    /// the [`rotate`]/[`scale`] helpers. Usually the average of the
    /// shape's coordinates.
    fn center(&self) -> Vec2;

    /// Apply `transform` about the world origin.
    fn transform(&self, transform: &Transform2D) -> Self;

    /// Apply `transform` about an arbitrary `origin`.
    fn transform_about(&self, transform: &Transform2D, origin: Vec2) -> Self {
        self.transform(&transform.about(origin))
    }
}

/// Translate a shape by `delta`.
pub fn translate<T: Transformable>(shape: &T, delta: Vec2) -> T {
    shape.transform(&Transform2D::translate(delta))
}

/// Rotate a shape about its center by `radians`.
pub fn rotate<T: Transformable>(shape: &T, radians: f32) -> T {
    rotate_about(shape, radians, shape.center())
}

/// Rotate a shape about `origin` by `radians`.
pub fn rotate_about<T: Transformable>(shape: &T, radians: f32, origin: Vec2) -> T {
    shape.transform_about(&Transform2D::rotate(radians), origin)
}

/// Scale a shape uniformly about its center.
pub fn scale<T: Transformable>(shape: &T, factor: f32) -> T {
    scale_about(shape, Vec2::splat(factor), shape.center())
}

/// Scale a shape about `origin`, with independent x and y factors.
pub fn scale_about<T: Transformable>(shape: &T, factor: Vec2, origin: Vec2) -> T {
    shape.transform_about(&Transform2D::scale_xy(factor), origin)
}

/// Distance between two points.
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    (b - a).length()
}

/// Squared distance between two points.
pub fn distance_squared(a: Vec2, b: Vec2) -> f32 {
    (b - a).length_squared()
}
