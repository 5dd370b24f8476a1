//! # Lathe Curve
//!
//! Browser-safe profile-curve tessellation for the lathe pipeline.
//! Turns a cubic Bezier profile into a polyline ready for revolution.
//!
//! ## Architecture
//!
//! ```text
//! control points → lathe-curve (polyline) → lathe-mesh (Mesh)
//! ```
//!
//! ## Algorithms
//!
//! All algorithms are browser-safe (pure Rust, no native dependencies):
//! - **Flattening**: adaptive midpoint subdivision with a flatness metric
//! - **Simplification**: Ramer-Douglas-Peucker within an error bound
//!
//! ## Usage
//!
//! ```rust
//! use glam::DVec2;
//! use lathe_curve::{flatten_profile, simplify_polyline};
//!
//! let control_points = [
//!     DVec2::new(0.0, 0.0),
//!     DVec2::new(1.0, 3.0),
//!     DVec2::new(3.0, 3.0),
//!     DVec2::new(4.0, 0.0),
//! ];
//! let flattened = flatten_profile(&control_points, 0.1)?;
//! let profile = simplify_polyline(&flattened, 0.001)?;
//! assert!(profile.len() >= 2);
//! # Ok::<(), lathe_curve::CurveError>(())
//! ```

pub mod bezier;
pub mod error;
pub mod simplify;
pub mod vec2;

pub use bezier::{
    flatness, flatten_cubic, flatten_profile, point_on_cubic, sample_cubic, split_cubic,
    CubicSegment,
};
pub use error::CurveError;
pub use simplify::simplify_polyline;
