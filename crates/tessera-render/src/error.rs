//! Error types for the batch renderer.

use std::fmt;

/// Errors surfaced by [`PrimitiveBatch`](crate::PrimitiveBatch).
///
/// All of these signal caller mistakes: invalid shape parameters,
/// shapes that can never fit the configured buffers, or calls made in
/// the wrong state. None are retryable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchError {
    /// `begin` was called while a batch was already active.
    AlreadyBatching,

    /// A shape was submitted, or `end` was called, with no active batch.
    NotBatching,

    /// A regular polygon was requested with fewer than three sides.
    TooFewSides {
        /// The requested side count.
        sides: u32,
    },

    /// An ellipse was requested with an eccentricity of exactly zero.
    ZeroEccentricity,

    /// A single shape needs more vertices than the buffers can ever
    /// hold; flushing cannot help.
    ShapeTooLarge {
        /// Vertices the shape needs.
        vertices: usize,
        /// Indices the shape needs.
        indices: usize,
        /// Configured vertex capacity.
        max_vertices: usize,
        /// Configured index capacity.
        max_indices: usize,
    },
}

impl fmt::Display for BatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BatchError::AlreadyBatching => {
                write!(f, "batch has already begun")
            }
            BatchError::NotBatching => {
                write!(f, "batch has not yet begun")
            }
            BatchError::TooFewSides { sides } => {
                write!(f, "regular polygons need at least 3 sides, got {sides}")
            }
            BatchError::ZeroEccentricity => {
                write!(f, "ellipse eccentricity cannot be 0")
            }
            BatchError::ShapeTooLarge {
                vertices,
                indices,
                max_vertices,
                max_indices,
            } => {
                write!(
                    f,
                    "shape needs {vertices} vertices / {indices} indices but the batch \
                     holds at most {max_vertices} / {max_indices}"
                )
            }
        }
    }
}

impl std::error::Error for BatchError {}
