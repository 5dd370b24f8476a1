//! # Config Crate
//!
//! Centralized configuration constants for the lathe pipeline.
//! All magic numbers and tunable parameters are defined here to ensure
//! consistency across crates and easy configuration management.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{EPSILON, DEFAULT_TOLERANCE, DEFAULT_DIVISIONS};
//!
//! // Use EPSILON for floating-point comparisons
//! let value: f64 = 0.00000000001; // 1e-11, smaller than EPSILON (1e-10)
//! let is_zero = value.abs() < EPSILON;
//! assert!(is_zero);
//!
//! // Use tessellation defaults when the caller supplies none
//! let user_tolerance: Option<f64> = None;
//! let tolerance = user_tolerance.unwrap_or(DEFAULT_TOLERANCE);
//! assert!(tolerance > 0.0);
//! assert!(DEFAULT_DIVISIONS >= 1);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Browser-Safe**: No platform-specific values
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;

#[cfg(test)]
mod tests;
