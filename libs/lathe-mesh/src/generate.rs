//! # Mesh Generation Pipeline
//!
//! Whole-profile rebuild: flatten the Bezier profile, simplify the
//! polyline, revolve it, and measure the result. Callers re-run the whole
//! pipeline whenever any input changes; there is no incremental update.

use crate::error::MeshError;
use crate::extents::Extents;
use crate::lathe::{lathe_profile, LatheParams};
use crate::mesh::Mesh;
use glam::DVec2;
use lathe_curve::{flatten_profile, simplify_polyline};

/// Output of a whole-profile rebuild.
#[derive(Debug, Clone)]
pub struct LatheOutput {
    /// The revolved, textured triangle mesh
    pub mesh: Mesh,
    /// Bounding extents of the mesh, for camera framing
    pub extents: Extents,
}

/// Flattens, simplifies, and revolves a cubic Bezier profile.
///
/// This is the main entry point for the mesh generation pipeline.
///
/// # Arguments
///
/// * `control_points` - Flat control point sequence, length `3k + 1`
/// * `tolerance` - Flatness tolerance for Bezier subdivision, `> 0`
/// * `epsilon` - Error bound for polyline simplification, `>= 0`
/// * `params` - Revolution parameters
///
/// # Errors
///
/// Any stage's validation failure surfaces here unchanged; no partial
/// result is produced.
///
/// # Example
///
/// ```rust
/// use glam::DVec2;
/// use lathe_mesh::{generate_lathe_mesh, LatheParams};
///
/// let control_points = [
///     DVec2::new(1.0, 0.0),
///     DVec2::new(2.0, 1.0),
///     DVec2::new(2.0, 2.0),
///     DVec2::new(1.0, 3.0),
/// ];
/// let output = generate_lathe_mesh(
///     &control_points,
///     0.1,
///     0.001,
///     &LatheParams::default(),
/// ).unwrap();
/// assert!(!output.mesh.is_empty());
/// assert!(output.extents.min.y <= output.extents.max.y);
/// ```
pub fn generate_lathe_mesh(
    control_points: &[DVec2],
    tolerance: f64,
    epsilon: f64,
    params: &LatheParams,
) -> Result<LatheOutput, MeshError> {
    let flattened = flatten_profile(control_points, tolerance)?;
    let profile = simplify_polyline(&flattened, epsilon)?;
    let mesh = lathe_profile(&profile, params)?;
    let extents = mesh.extents()?;

    Ok(LatheOutput { mesh, extents })
}
