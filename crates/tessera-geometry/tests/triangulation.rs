//! Triangulation properties over a spread of polygon shapes.
//!
//! These tests verify the invariants the renderer relies on: index
//! counts, index validity, area preservation, and input-order
//! independence.

use glam::Vec2;
use tessera_geometry::{Polygon, Transformable, Triangle, rotate_about};

fn regular(n: usize, radius: f32) -> Vec<Vec2> {
    (0..n)
        .map(|i| {
            let angle = std::f32::consts::TAU * i as f32 / n as f32;
            Vec2::new(angle.cos(), angle.sin()) * radius
        })
        .collect()
}

fn star(tips: usize, outer: f32, inner: f32) -> Vec<Vec2> {
    (0..2 * tips)
        .map(|i| {
            let angle = std::f32::consts::TAU * i as f32 / (2 * tips) as f32;
            let radius = if i % 2 == 0 { outer } else { inner };
            Vec2::new(angle.cos(), angle.sin()) * radius
        })
        .collect()
}

fn triangulated_area(polygon: &Polygon) -> f32 {
    polygon.triangles().map(|t| t.area()).sum()
}

#[test]
fn test_triangle_count_matches_vertex_count() {
    for n in 3..32 {
        let polygon = Polygon::new(regular(n, 10.0)).unwrap();
        assert_eq!(polygon.indices().len(), 3 * (n - 2), "n = {n}");
        assert_eq!(polygon.triangle_count(), n - 2, "n = {n}");
    }
}

#[test]
fn test_indices_stay_in_bounds() {
    for n in 3..32 {
        let polygon = Polygon::new(regular(n, 10.0)).unwrap();
        assert!(polygon.indices().iter().all(|&i| (i as usize) < n));
    }
}

#[test]
fn test_triangles_tile_the_polygon_area() {
    for points in [
        regular(5, 3.0),
        regular(12, 50.0),
        star(5, 10.0, 4.0),
        star(8, 100.0, 30.0),
        // L-shape with a reflex corner.
        vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(6.0, 0.0),
            Vec2::new(6.0, 2.0),
            Vec2::new(2.0, 2.0),
            Vec2::new(2.0, 6.0),
            Vec2::new(0.0, 6.0),
        ],
    ] {
        let polygon = Polygon::new(points).unwrap();
        let total = triangulated_area(&polygon);
        assert!(
            (total - polygon.area()).abs() <= 1e-2 * polygon.area().max(1.0),
            "triangles cover {total}, polygon area is {}",
            polygon.area()
        );
    }
}

#[test]
fn test_reversed_input_gives_identical_triangulation() {
    for points in [regular(7, 10.0), star(4, 8.0, 3.0)] {
        let forward = Polygon::new(points.clone()).unwrap();
        let mut reversed = points;
        reversed.reverse();
        let backward = Polygon::new(reversed).unwrap();
        assert_eq!(forward.vertices(), backward.vertices());
        assert_eq!(forward.indices(), backward.indices());
    }
}

#[test]
fn test_l_shape_triangles_stay_inside() {
    let polygon = Polygon::new(vec![
        Vec2::new(0.0, 0.0),
        Vec2::new(6.0, 0.0),
        Vec2::new(6.0, 2.0),
        Vec2::new(2.0, 2.0),
        Vec2::new(2.0, 6.0),
        Vec2::new(0.0, 6.0),
    ])
    .unwrap();

    // The notch corner region is outside the polygon; no triangle
    // centroid may land there.
    for tri in polygon.triangles() {
        let centroid = tri.center();
        assert!(
            polygon.contains(centroid),
            "centroid {centroid:?} escaped the polygon"
        );
        assert!(
            !(centroid.x > 2.0 && centroid.y > 2.0),
            "centroid {centroid:?} landed in the notch"
        );
    }
}

#[test]
fn test_transformed_polygon_keeps_tiling() {
    let polygon = Polygon::new(star(6, 20.0, 8.0)).unwrap();
    let spun = rotate_about(&polygon, 1.1, Vec2::new(5.0, 5.0));
    assert_eq!(spun.triangle_count(), polygon.triangle_count());
    assert!(
        (triangulated_area(&spun) - triangulated_area(&polygon)).abs()
            <= 1e-2 * triangulated_area(&polygon)
    );
}

#[test]
fn test_degenerate_triangle_helpers_agree() {
    // A polygon triangle and a standalone triangle report the same area.
    let tri = Triangle::new(Vec2::ZERO, Vec2::new(4.0, 0.0), Vec2::new(0.0, 4.0));
    let polygon = tri.to_polygon();
    assert!((polygon.area() - tri.area()).abs() < 1e-5);
}
