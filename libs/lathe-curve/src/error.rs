//! # Curve Errors
//!
//! Error types for profile-curve tessellation.

use thiserror::Error;

/// Errors that can occur while flattening or simplifying a profile curve.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CurveError {
    /// Malformed or out-of-range input
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// Defensive recursion bound hit
    #[error("Recursion limit exceeded after {limit} levels")]
    RecursionLimitExceeded { limit: usize },
}

impl CurveError {
    /// Creates an invalid input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Creates a recursion limit error.
    pub fn recursion_limit(limit: usize) -> Self {
        Self::RecursionLimitExceeded { limit }
    }
}
