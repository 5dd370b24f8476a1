//! # Mesh Errors
//!
//! Error types for mesh generation operations.

use lathe_curve::CurveError;
use thiserror::Error;

/// Errors that can occur during mesh generation.
#[derive(Debug, Error)]
pub enum MeshError {
    /// Error from the profile-curve layer
    #[error("Curve error: {0}")]
    Curve(#[from] CurveError),

    /// Malformed or out-of-range input
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// Too many vertices
    #[error("Too many vertices: {count} (max: {max})")]
    TooManyVertices { count: usize, max: usize },

    /// Too many triangles
    #[error("Too many triangles: {count} (max: {max})")]
    TooManyTriangles { count: usize, max: usize },
}

impl MeshError {
    /// Creates an invalid input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }
}
