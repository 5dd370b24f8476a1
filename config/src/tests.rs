//! # Tests for Config Constants
//!
//! Unit tests verifying the correctness of configuration constants
//! and helper functions.

use crate::constants::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_epsilon_is_positive() {
    assert!(EPSILON > 0.0, "EPSILON must be positive");
}

#[test]
fn test_epsilon_is_small() {
    assert!(EPSILON < 1e-6, "EPSILON should be small for precision");
}

// =============================================================================
// TESSELLATION TESTS
// =============================================================================

#[test]
fn test_default_tolerance_is_positive() {
    assert!(DEFAULT_TOLERANCE > 0.0);
    assert!(DEFAULT_TOLERANCE.is_finite());
}

#[test]
fn test_default_simplify_epsilon_is_non_negative() {
    assert!(DEFAULT_SIMPLIFY_EPSILON >= 0.0);
    assert!(DEFAULT_SIMPLIFY_EPSILON.is_finite());
}

#[test]
fn test_default_divisions_at_least_minimum() {
    assert!(DEFAULT_DIVISIONS >= MIN_DIVISIONS);
}

#[test]
fn test_min_divisions_is_one() {
    // One division produces exactly one band of quads
    assert_eq!(MIN_DIVISIONS, 1);
}

// =============================================================================
// LIMIT TESTS
// =============================================================================

#[test]
fn test_split_depth_resolves_below_epsilon() {
    // 2^-MAX_SPLIT_DEPTH parameter intervals must be finer than any
    // tolerance the pipeline accepts
    let finest_interval = 0.5f64.powi(MAX_SPLIT_DEPTH as i32);
    assert!(finest_interval < EPSILON);
}

#[test]
fn test_recursion_depth_is_generous() {
    assert!(MAX_RECURSION_DEPTH >= 100);
}

#[test]
fn test_stacker_stack_size_reasonable() {
    assert!(STACKER_STACK_SIZE_BYTES >= 1024 * 1024);
}

#[test]
fn test_mesh_limits_positive() {
    assert!(MAX_VERTICES > 0);
    assert!(MAX_TRIANGLES > 0);
    // Indices must stay addressable by u32
    assert!(MAX_VERTICES <= u32::MAX as usize);
}

// =============================================================================
// CAMERA TESTS
// =============================================================================

#[test]
fn test_fov_within_open_interval() {
    assert!(DEFAULT_FOV_RADIANS > 0.0);
    assert!(DEFAULT_FOV_RADIANS < std::f64::consts::PI);
}

#[test]
fn test_clip_planes_ordered() {
    assert!(CAMERA_NEAR > 0.0);
    assert!(CAMERA_FAR > CAMERA_NEAR);
}

#[test]
fn test_fit_fraction_leaves_margin() {
    assert!(CAMERA_FIT_FRACTION > 0.0);
    assert!(CAMERA_FIT_FRACTION <= 1.0);
}

// =============================================================================
// HELPER FUNCTION TESTS
// =============================================================================

#[test]
fn test_approx_equal() {
    assert!(approx_equal(1.0, 1.0));
    assert!(approx_equal(1.0, 1.0 + EPSILON / 2.0));
    assert!(!approx_equal(1.0, 1.0 + EPSILON * 2.0));
}

#[test]
fn test_approx_zero() {
    assert!(approx_zero(0.0));
    assert!(approx_zero(-EPSILON / 2.0));
    assert!(!approx_zero(EPSILON * 2.0));
}
