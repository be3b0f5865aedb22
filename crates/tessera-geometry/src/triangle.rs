//! Triangles.

use crate::{Polygon, Transform2D, Transformable};
use glam::Vec2;

/// Tolerance for the area-sum containment test. Sub-triangle areas of a
/// contained point sum to the triangle's own area up to this slack.
pub(crate) const CONTAINS_EPSILON: f32 = 1e-4;

/// A triangle described by its three corners.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Triangle {
    pub a: Vec2,
    pub b: Vec2,
    pub c: Vec2,
}

impl Triangle {
    /// Create a triangle from its corners.
    pub fn new(a: Vec2, b: Vec2, c: Vec2) -> Self {
        Self { a, b, c }
    }

    /// The perimeter of this triangle.
    pub fn perimeter(&self) -> f32 {
        (self.a - self.b).length() + (self.b - self.c).length() + (self.c - self.a).length()
    }

    /// The area of this triangle, independent of winding.
    pub fn area(&self) -> f32 {
        0.5 * (self.a.x * (self.b.y - self.c.y)
            + self.b.x * (self.c.y - self.a.y)
            + self.c.x * (self.a.y - self.b.y))
            .abs()
    }

    /// Whether `point` lies inside this triangle, boundary included.
    ///
    /// Uses the area-sum test: the three sub-triangles formed by the
    /// point and each edge tile the whole triangle exactly when the
    /// point is inside.
    pub fn contains(&self, point: Vec2) -> bool {
        let t1 = Triangle::new(point, self.a, self.b);
        let t2 = Triangle::new(point, self.b, self.c);
        let t3 = Triangle::new(point, self.c, self.a);
        t1.area() + t2.area() + t3.area() - self.area() <= CONTAINS_EPSILON
    }

    /// This triangle as a three-vertex [`Polygon`].
    pub fn to_polygon(&self) -> Polygon {
        // Three distinct points always triangulate.
        Polygon::new(vec![self.a, self.b, self.c]).unwrap_or_default()
    }
}

impl Transformable for Triangle {
    fn center(&self) -> Vec2 {
        (self.a + self.b + self.c) / 3.0
    }

    fn transform(&self, transform: &Transform2D) -> Self {
        Self {
            a: transform.transform_point(self.a),
            b: transform.transform_point(self.b),
            c: transform.transform_point(self.c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{rotate, scale_about};

    fn right_triangle() -> Triangle {
        Triangle::new(Vec2::ZERO, Vec2::new(4.0, 0.0), Vec2::new(0.0, 3.0))
    }

    #[test]
    fn test_area() {
        assert!((right_triangle().area() - 6.0).abs() < 1e-6);
    }

    #[test]
    fn test_area_winding_independent() {
        let t = right_triangle();
        let reversed = Triangle::new(t.c, t.b, t.a);
        assert_eq!(t.area(), reversed.area());
    }

    #[test]
    fn test_perimeter() {
        assert!((right_triangle().perimeter() - 12.0).abs() < 1e-6);
    }

    #[test]
    fn test_center() {
        let t = Triangle::new(Vec2::ZERO, Vec2::new(3.0, 0.0), Vec2::new(0.0, 3.0));
        assert_eq!(t.center(), Vec2::new(1.0, 1.0));
    }

    #[test]
    fn test_contains() {
        let t = right_triangle();
        assert!(t.contains(Vec2::new(1.0, 1.0)));
        assert!(t.contains(Vec2::ZERO));
        assert!(t.contains(Vec2::new(2.0, 0.0)));
        assert!(!t.contains(Vec2::new(4.0, 3.0)));
        assert!(!t.contains(Vec2::new(-0.5, 0.0)));
    }

    #[test]
    fn test_to_polygon() {
        let poly = right_triangle().to_polygon();
        assert_eq!(poly.vertices().len(), 3);
        assert_eq!(poly.indices().len(), 3);
    }

    #[test]
    fn test_rotation_preserves_area() {
        let t = right_triangle();
        let r = rotate(&t, 1.2345);
        assert!((r.area() - t.area()).abs() < 1e-4);
    }

    #[test]
    fn test_scale_about_origin() {
        let t = right_triangle();
        let s = scale_about(&t, Vec2::splat(2.0), Vec2::ZERO);
        assert!((s.area() - 24.0).abs() < 1e-4);
        assert_eq!(s.b, Vec2::new(8.0, 0.0));
    }
}
