//! Simple polygons and ear-clipping triangulation.
//!
//! A [`Polygon`] stores its vertices in one canonical winding order and
//! caches the triangle-list indices produced by ear clipping. The cache
//! is recomputed whenever the vertex list is replaced, so readers never
//! observe a stale triangulation.

use crate::{Transform2D, Transformable, Triangle};
use glam::Vec2;

/// Triangulation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriangulateError {
    /// A polygon needs at least three vertices.
    TooFewVertices {
        /// How many vertices were supplied.
        count: usize,
    },
    /// A full scan found no clippable ear. The input is degenerate or
    /// self-intersecting, which ear clipping does not support.
    NoEarFound,
}

impl std::fmt::Display for TriangulateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TriangulateError::TooFewVertices { count } => {
                write!(f, "polygon requires at least 3 vertices, got {count}")
            }
            TriangulateError::NoEarFound => {
                write!(f, "no clippable ear found; polygon is degenerate or self-intersecting")
            }
        }
    }
}

impl std::error::Error for TriangulateError {}

/// A simple (non-self-intersecting) polygon with a cached triangulation.
///
/// Vertices are normalized to a single winding order at construction,
/// independent of the order the caller supplied. The cached index list
/// always holds `3 * (N - 2)` entries for an `N`-vertex polygon.
///
/// Self-intersection is not detected; triangulating a self-intersecting
/// polygon fails with [`TriangulateError::NoEarFound`] or produces
/// meaningless triangles.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polygon {
    vertices: Vec<Vec2>,
    indices: Vec<u32>,
}

impl Polygon {
    /// Create a polygon from at least three vertices describing a simple
    /// polygon, in either winding order.
    pub fn new(vertices: Vec<Vec2>) -> Result<Self, TriangulateError> {
        let mut polygon = Self {
            vertices: Vec::new(),
            indices: Vec::new(),
        };
        polygon.set_vertices(vertices)?;
        Ok(polygon)
    }

    /// Replace the vertex list and synchronously retriangulate.
    ///
    /// On error the polygon is left unchanged.
    pub fn set_vertices(&mut self, mut vertices: Vec<Vec2>) -> Result<(), TriangulateError> {
        if vertices.len() < 3 {
            return Err(TriangulateError::TooFewVertices {
                count: vertices.len(),
            });
        }
        normalize_winding(&mut vertices);
        let indices = triangulate(&vertices)?;
        self.vertices = vertices;
        self.indices = indices;
        Ok(())
    }

    /// The vertices, in canonical winding order.
    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    /// The cached triangle-list indices into [`vertices`](Self::vertices).
    /// Every three consecutive entries form one triangle.
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Number of triangles in the cached triangulation.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Iterate over the triangles of the cached triangulation.
    pub fn triangles(&self) -> impl Iterator<Item = Triangle> + '_ {
        self.indices.chunks_exact(3).map(|tri| {
            Triangle::new(
                self.vertices[tri[0] as usize],
                self.vertices[tri[1] as usize],
                self.vertices[tri[2] as usize],
            )
        })
    }

    /// The area enclosed by this polygon.
    pub fn area(&self) -> f32 {
        0.5 * signed_double_area(&self.vertices).abs()
    }

    /// The total edge length of this polygon.
    pub fn perimeter(&self) -> f32 {
        let n = self.vertices.len();
        (0..n)
            .map(|i| (self.vertices[(i + 1) % n] - self.vertices[i]).length())
            .sum()
    }

    /// Whether `point` lies inside this polygon, boundary included.
    /// Tested against the cached triangulation.
    pub fn contains(&self, point: Vec2) -> bool {
        self.triangles().any(|tri| tri.contains(point))
    }
}

impl Transformable for Polygon {
    fn center(&self) -> Vec2 {
        self.vertices.iter().sum::<Vec2>() / self.vertices.len() as f32
    }

    /// Map every vertex through the matrix and retriangulate from
    /// scratch. A non-invertible transform can collapse the polygon so
    /// that no triangulation exists; the result then carries an empty
    /// index cache and a warning is logged.
    fn transform(&self, transform: &Transform2D) -> Self {
        let vertices: Vec<Vec2> = self
            .vertices
            .iter()
            .map(|&v| transform.transform_point(v))
            .collect();
        match Polygon::new(vertices.clone()) {
            Ok(polygon) => polygon,
            Err(err) => {
                tracing::warn!("retriangulation after transform failed: {err}");
                Polygon {
                    vertices,
                    indices: Vec::new(),
                }
            }
        }
    }
}

/// Reorder `vertices` into the canonical winding.
///
/// The shoelace-style sum `Σ (x_{i+1} - x_i) * (y_{i+1} + y_i)` is
/// positive for one winding and negative for the other; a positive sum
/// gets reversed so every polygon stores the same orientation no matter
/// how the caller listed the points.
fn normalize_winding(vertices: &mut [Vec2]) {
    if signed_double_area(vertices) > 0.0 {
        vertices.reverse();
    }
}

/// Twice the signed area of the polygon outlined by `vertices`.
fn signed_double_area(vertices: &[Vec2]) -> f32 {
    let n = vertices.len();
    (0..n)
        .map(|i| {
            let p = vertices[i];
            let q = vertices[(i + 1) % n];
            (q.x - p.x) * (q.y + p.y)
        })
        .sum()
}

/// Ear-clipping triangulation of a simple polygon in canonical winding.
///
/// Produces `3 * (N - 2)` indices into `vertices`. O(N³) worst case,
/// which is fine for the vertex counts 2D game geometry uses.
fn triangulate(vertices: &[Vec2]) -> Result<Vec<u32>, TriangulateError> {
    debug_assert!(vertices.len() >= 3);

    // Working set of indices into the normalized vertex list. Clipping
    // removes the ear's middle index; the scan restarts after each clip.
    let mut working: Vec<u32> = (0..vertices.len() as u32).collect();
    let mut indices = Vec::with_capacity(3 * (vertices.len() - 2));

    while working.len() > 3 {
        let n = working.len();
        let mut clipped = false;

        for i in 0..n {
            let i0 = working[i];
            let i1 = working[(i + 1) % n];
            let i2 = working[(i + 2) % n];
            let ear = Triangle::new(
                vertices[i0 as usize],
                vertices[i1 as usize],
                vertices[i2 as usize],
            );

            // Reflex check: the normal of the long edge (i -> i+2) must
            // not face away from the short edge (i -> i+1), otherwise
            // the ear opens outward and clipping it would eat exterior.
            let long_edge = ear.c - ear.a;
            let short_edge = ear.b - ear.a;
            let long_normal = Vec2::new(long_edge.y, -long_edge.x);
            if long_normal.dot(short_edge) < 0.0 {
                continue;
            }

            // The ear must not contain any other remaining vertex.
            let blocked = (0..n)
                .filter(|&j| j != i && j != (i + 1) % n && j != (i + 2) % n)
                .any(|j| ear.contains(vertices[working[j] as usize]));
            if blocked {
                continue;
            }

            indices.extend_from_slice(&[i0, i1, i2]);
            working.remove((i + 1) % n);
            clipped = true;
            break;
        }

        if !clipped {
            return Err(TriangulateError::NoEarFound);
        }
    }

    // Three points left always form the final triangle.
    indices.extend_from_slice(&working);
    Ok(indices)
}
