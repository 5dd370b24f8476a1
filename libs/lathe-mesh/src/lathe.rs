//! # Lathe
//!
//! Revolves a 2D profile polyline around the Y axis to create a 3D mesh.
//!
//! ## Algorithm
//!
//! 1. The profile is an open polyline in the XY plane
//! 2. One column of vertices is generated per angular step, rotating every
//!    profile point about the Y axis; caps add a center-axis point at the
//!    top and/or bottom of each column
//! 3. Adjacent columns are stitched with two triangles per quad
//!
//! ## Seam
//!
//! A full revolution generates its first and last columns at coincident
//! positions. Both columns are kept as distinct vertices: texture u runs
//! from 0 to 1 across the revolution, and the seam needs one column at
//! u = 0 and one at u = 1 to wrap without a visible discontinuity.

use crate::error::MeshError;
use crate::mesh::Mesh;
use config::constants::{DEFAULT_DIVISIONS, MAX_TRIANGLES, MAX_VERTICES, MIN_DIVISIONS};
use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};

/// Parameters for a surface of revolution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LatheParams {
    /// Angle of the first generated column in radians
    pub start_angle: f64,
    /// Angle of the last generated column in radians
    pub end_angle: f64,
    /// Number of angular steps between columns
    pub divisions: u32,
    /// Add a center-axis point before the first profile point of each column
    pub cap_start: bool,
    /// Add a center-axis point after the last profile point of each column
    pub cap_end: bool,
}

impl Default for LatheParams {
    fn default() -> Self {
        Self {
            start_angle: 0.0,
            end_angle: std::f64::consts::TAU,
            divisions: DEFAULT_DIVISIONS,
            cap_start: false,
            cap_end: false,
        }
    }
}

/// Revolves a 2D profile polyline around the Y axis.
///
/// The profile is an ordered open polyline; `points[i].x` is the distance
/// from the rotation axis and `points[i].y` the height. Texture u follows
/// the angular fraction of each column; texture v is spaced by point index
/// within the column, not by distance along the profile.
///
/// # Arguments
///
/// * `points` - The profile polyline (at least 2 points)
/// * `params` - Revolution parameters
///
/// # Returns
///
/// A textured triangle mesh with `(divisions + 1) * column_height`
/// vertices, where `column_height` is the profile length plus one per
/// enabled cap.
///
/// # Example
///
/// ```rust
/// use glam::DVec2;
/// use lathe_mesh::lathe::{lathe_profile, LatheParams};
///
/// let profile = [DVec2::new(1.0, 0.0), DVec2::new(1.0, 2.0)];
/// let params = LatheParams {
///     divisions: 16,
///     ..LatheParams::default()
/// };
/// let mesh = lathe_profile(&profile, &params).unwrap();
/// assert_eq!(mesh.vertex_count(), 17 * 2);
/// ```
pub fn lathe_profile(points: &[DVec2], params: &LatheParams) -> Result<Mesh, MeshError> {
    if params.divisions < MIN_DIVISIONS {
        return Err(MeshError::invalid_input(format!(
            "divisions must be at least {MIN_DIVISIONS}, got {}",
            params.divisions
        )));
    }

    if points.len() < 2 {
        return Err(MeshError::invalid_input(format!(
            "profile needs at least 2 points, got {}",
            points.len()
        )));
    }

    if !params.start_angle.is_finite() || !params.end_angle.is_finite() {
        return Err(MeshError::invalid_input(format!(
            "angles must be finite, got start {} and end {}",
            params.start_angle, params.end_angle
        )));
    }

    let divisions = params.divisions as usize;
    let cap_offset = usize::from(params.cap_start);
    let column_height = points.len() + cap_offset + usize::from(params.cap_end);
    let quads_down = column_height - 1;

    let vertex_count = (divisions + 1) * column_height;
    if vertex_count > MAX_VERTICES {
        return Err(MeshError::TooManyVertices {
            count: vertex_count,
            max: MAX_VERTICES,
        });
    }

    let triangle_count = divisions * quads_down * 2;
    if triangle_count > MAX_TRIANGLES {
        return Err(MeshError::TooManyTriangles {
            count: triangle_count,
            max: MAX_TRIANGLES,
        });
    }

    let mut mesh = Mesh::with_capacity(vertex_count, triangle_count);

    // Generate one column of vertices per angular step
    for division in 0..=divisions {
        let u = division as f64 / divisions as f64;
        let angle = params.start_angle + (params.end_angle - params.start_angle) * u;
        let (sin_angle, cos_angle) = angle.sin_cos();

        if params.cap_start {
            mesh.add_vertex(DVec3::new(0.0, points[0].y, 0.0), DVec2::new(u, 0.0));
        }

        for (index, p) in points.iter().enumerate() {
            // Rotate (p.x, p.y, 0) about the Y axis:
            // result is (p.x * cos, p.y, -p.x * sin)
            let position = DVec3::new(p.x * cos_angle, p.y, -p.x * sin_angle);
            // v is spaced by point index, not by distance along the profile
            let v = (index + cap_offset) as f64 / quads_down as f64;
            mesh.add_vertex(position, DVec2::new(u, v));
        }

        if params.cap_end {
            mesh.add_vertex(
                DVec3::new(0.0, points[points.len() - 1].y, 0.0),
                DVec2::new(u, 1.0),
            );
        }
    }

    // Stitch adjacent columns with two triangles per quad
    for division in 0..divisions {
        let column1 = (division * column_height) as u32;
        let column2 = column1 + column_height as u32;

        for quad in 0..quads_down as u32 {
            mesh.add_triangle(column1 + quad, column1 + quad + 1, column2 + quad);
            mesh.add_triangle(column1 + quad + 1, column2 + quad + 1, column2 + quad);
        }
    }

    Ok(mesh)
}
