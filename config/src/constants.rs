//! # Configuration Constants
//!
//! Centralized constants for the lathe pipeline. All geometry calculations,
//! tessellation parameters, and precision values are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Tessellation**: Default flattening/simplification/revolution parameters
//! - **Limits**: Maximum values for safety bounds
//! - **Camera**: Framing defaults consumed by the browser boundary

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Used for determining if two floating-point values are "equal" within
/// numerical tolerance.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

// =============================================================================
// TESSELLATION CONSTANTS
// =============================================================================

/// Default flatness tolerance for adaptive Bezier subdivision.
///
/// A segment whose flatness metric drops below this value is emitted as a
/// straight line. Smaller values produce more polyline points.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_TOLERANCE;
///
/// assert!(DEFAULT_TOLERANCE > 0.0);
/// ```
pub const DEFAULT_TOLERANCE: f64 = 0.1;

/// Default error bound for polyline simplification.
///
/// Points closer than this to the simplified chain are discarded. Zero keeps
/// every point that deviates at all.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_SIMPLIFY_EPSILON;
///
/// assert!(DEFAULT_SIMPLIFY_EPSILON >= 0.0);
/// ```
pub const DEFAULT_SIMPLIFY_EPSILON: f64 = 0.001;

/// Default number of angular divisions for a surface of revolution.
///
/// 120 divisions step the full turn in 3-degree increments, enough for a
/// smooth silhouette at typical viewing distances.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_DIVISIONS;
///
/// assert!(DEFAULT_DIVISIONS >= 1);
/// ```
pub const DEFAULT_DIVISIONS: u32 = 120;

/// Minimum number of angular divisions for a surface of revolution.
///
/// A single division still produces one band of quads; zero divisions is
/// rejected as invalid input.
pub const MIN_DIVISIONS: u32 = 1;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum subdivision depth for adaptive Bezier flattening.
///
/// Each level halves the parameter range, so 32 levels resolve parameter
/// intervals of 2^-32, far below any useful tolerance. Hitting this bound
/// means the flatness metric cannot converge for the given input and is
/// reported as an error rather than truncating the curve.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_SPLIT_DEPTH;
///
/// assert!(MAX_SPLIT_DEPTH >= 16);
/// ```
pub const MAX_SPLIT_DEPTH: usize = 32;

/// Maximum recursion depth for polyline simplification.
///
/// Simplification recurses once per retained split point; depth can approach
/// the polyline length for adversarial chains. The `stacker` crate is used to
/// handle deep recursion safely, and this bound converts runaway recursion
/// into an error.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_RECURSION_DEPTH;
///
/// let current_depth = 500;
/// assert!(current_depth < MAX_RECURSION_DEPTH);
/// ```
pub const MAX_RECURSION_DEPTH: usize = 1000;

/// Bytes of stack space reserved when growing recursion limits using the
/// `stacker` crate.
///
/// # Example
///
/// ```rust
/// use config::constants::STACKER_STACK_SIZE_BYTES;
///
/// assert!(STACKER_STACK_SIZE_BYTES >= 1024);
/// ```
pub const STACKER_STACK_SIZE_BYTES: usize = 8 * 1024 * 1024;

/// Maximum number of vertices in a single mesh.
///
/// Safety limit to prevent memory exhaustion from extreme division counts.
pub const MAX_VERTICES: usize = 10_000_000;

/// Maximum number of triangles in a single mesh.
///
/// Safety limit to prevent memory exhaustion from extreme division counts.
pub const MAX_TRIANGLES: usize = 10_000_000;

// =============================================================================
// CAMERA CONSTANTS
// =============================================================================

/// Default vertical field of view in radians for the framing camera.
pub const DEFAULT_FOV_RADIANS: f64 = std::f64::consts::FRAC_PI_4;

/// Fraction of the mesh height the framing camera fits into the viewport.
///
/// Values below 1.0 leave a margin around the silhouette.
pub const CAMERA_FIT_FRACTION: f64 = 0.6;

/// Near clip plane distance for the framing camera.
pub const CAMERA_NEAR: f64 = 1.0;

/// Far clip plane distance for the framing camera.
pub const CAMERA_FAR: f64 = 2000.0;

/// Scale applied to pointer deltas when converting to orbit rotation.
///
/// Pointer deltas are first normalized by the viewport size, then multiplied
/// by this factor to get radians of rotation.
pub const ORBIT_SENSITIVITY: f64 = 5.0;

/// Normalization applied to pointer deltas relative to the viewport.
///
/// A drag across the full viewport spans this many normalized units.
pub const POINTER_VIEWPORT_SCALE: f64 = 4.0;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if two f64 values are approximately equal within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_equal;
///
/// assert!(approx_equal(1.0, 1.0 + 1e-11));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Checks if a f64 value is approximately zero within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1e-11));
/// assert!(!approx_zero(0.1));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}
