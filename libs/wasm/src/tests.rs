//! # Native Tests for the WASM Boundary
//!
//! These tests exercise the host-callable internals directly so they run
//! without a JavaScript host.

use crate::{build_lathe_internal, frame_view, LatheConfig, OrbitSession};
use config::constants::{DEFAULT_DIVISIONS, DEFAULT_FOV_RADIANS, DEFAULT_TOLERANCE};
use glam::DVec3;
use lathe_mesh::{Extents, MeshError};

#[test]
fn test_default_config_builds() {
    let handle = build_lathe_internal(&LatheConfig::default()).unwrap();

    assert!(handle.vertex_count() > 0);
    assert!(handle.triangle_count() > 0);
    assert_eq!(handle.positions().len(), handle.vertex_count() * 3);
    assert_eq!(handle.texcoords().len(), handle.vertex_count() * 2);
    assert_eq!(handle.indices().len(), handle.triangle_count() * 3);
}

#[test]
fn test_empty_json_uses_defaults() {
    let config: LatheConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config.divisions, DEFAULT_DIVISIONS);
    assert_eq!(config.tolerance, DEFAULT_TOLERANCE);
    assert_eq!(config.control_points.len(), 13);
    assert!(!config.cap_start);
    assert!(!config.cap_end);
}

#[test]
fn test_partial_json_overrides_single_fields() {
    let config: LatheConfig =
        serde_json::from_str(r#"{"divisions": 8, "cap_start": true}"#).unwrap();
    assert_eq!(config.divisions, 8);
    assert!(config.cap_start);
    // untouched fields keep their defaults
    assert_eq!(config.tolerance, DEFAULT_TOLERANCE);
    assert!(!config.cap_end);
}

#[test]
fn test_straight_profile_counts_through_boundary() {
    // A straight profile collapses to 2 points, so 4 divisions produce
    // 5 columns x 2 points and 4 quads
    let config = LatheConfig {
        control_points: vec![[1.0, 0.0], [1.0, 1.0], [1.0, 2.0], [1.0, 3.0]],
        divisions: 4,
        ..LatheConfig::default()
    };
    let handle = build_lathe_internal(&config).unwrap();

    assert_eq!(handle.vertex_count(), 10);
    assert_eq!(handle.positions().len(), 30);
    assert_eq!(handle.indices().len(), 24);
}

#[test]
fn test_extents_cross_boundary() {
    let handle = build_lathe_internal(&LatheConfig::default()).unwrap();
    let min = handle.extents_min();
    let max = handle.extents_max();

    assert_eq!(min.len(), 3);
    assert_eq!(max.len(), 3);
    for axis in 0..3 {
        assert!(min[axis] <= max[axis]);
    }
}

#[test]
fn test_zero_divisions_rejected() {
    let config = LatheConfig {
        divisions: 0,
        ..LatheConfig::default()
    };
    assert!(matches!(
        build_lathe_internal(&config),
        Err(MeshError::InvalidInput { .. })
    ));
}

#[test]
fn test_malformed_control_points_rejected() {
    let config = LatheConfig {
        control_points: vec![[0.0, 0.0]; 5],
        ..LatheConfig::default()
    };
    assert!(build_lathe_internal(&config).is_err());
}

#[test]
fn test_frame_view_centers_mesh_height() {
    let extents = Extents {
        min: DVec3::new(-10.0, 0.0, -10.0),
        max: DVec3::new(10.0, 50.0, 10.0),
    };
    let view_projection = frame_view(&extents, DEFAULT_FOV_RADIANS, 16.0 / 9.0);

    // The vertical midpoint of the extents projects to the viewport center
    let mid = view_projection.project_point3(DVec3::new(0.0, 25.0, 0.0));
    assert!(mid.x.abs() < 1e-9);
    assert!(mid.y.abs() < 1e-9);
}

#[test]
fn test_view_projection_exposed_as_f32_matrix() {
    let handle = build_lathe_internal(&LatheConfig::default()).unwrap();
    let matrix = handle.view_projection(1.0);
    assert_eq!(matrix.len(), 16);
    assert!(matrix.iter().all(|v| v.is_finite()));
}

#[test]
fn test_orbit_ignores_moves_without_press() {
    let mut session = OrbitSession::new(800.0, 600.0);
    let before = session.world_matrix();

    session.drag(40.0, 20.0);

    assert!(!session.is_dragging());
    assert_eq!(session.world_matrix(), before);
}

#[test]
fn test_orbit_drag_accumulates_rotation() {
    let mut session = OrbitSession::new(800.0, 600.0);
    let identity = session.world_matrix();

    session.press(100.0, 100.0);
    assert!(session.is_dragging());
    session.drag(140.0, 80.0);

    assert_ne!(session.world_matrix(), identity);
}

#[test]
fn test_orbit_release_stops_rotation() {
    let mut session = OrbitSession::new(800.0, 600.0);

    session.press(100.0, 100.0);
    session.drag(140.0, 80.0);
    session.release();
    let settled = session.world_matrix();

    session.drag(500.0, 400.0);

    assert!(!session.is_dragging());
    assert_eq!(session.world_matrix(), settled);
}
