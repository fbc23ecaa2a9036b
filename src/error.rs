// src/error.rs

use thiserror::Error;

/// Precondition violations reported by polygon and rectangle operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClipError {
    /// Rectangle rotation outside of `[0, 360)` degrees.
    #[error("invalid angle {angle}: expected a value in [0, 360)")]
    InvalidAngle { angle: f64 },

    /// Appending past the fixed capacity of a polygon buffer.
    #[error("polygon capacity of {capacity} vertices exceeded")]
    CapacityExceeded { capacity: usize },

    /// Area or centroid requested on fewer than three vertices.
    #[error("need at least 3 vertices, polygon has {count}")]
    InsufficientVertices { count: usize },

    #[error("vertex index {index} out of range for {len} vertices")]
    IndexOutOfRange { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, ClipError>;
