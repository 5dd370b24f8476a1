//! # Lathe WASM
//!
//! WASM-facing entry points for the lathe pipeline.
//!
//! This crate is compiled to a `cdylib` and consumed from JavaScript via
//! `wasm-bindgen`. The host describes a rebuild as a JSON configuration,
//! receives GPU-ready flat buffers in a [`LatheMeshHandle`], and drives the
//! camera helpers in [`camera`] with discrete pointer events. Native tests
//! interact with the internal helper `build_lathe_internal` to avoid
//! depending on a JS host.

use config::constants::{
    DEFAULT_DIVISIONS, DEFAULT_FOV_RADIANS, DEFAULT_SIMPLIFY_EPSILON, DEFAULT_TOLERANCE,
};
use glam::DVec2;
use lathe_mesh::{generate_lathe_mesh, Extents, LatheParams, MeshError};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

mod camera;

#[cfg(test)]
mod tests;

pub use camera::{frame_view, OrbitSession};

/// Installs a panic hook that forwards Rust panics to the browser console.
///
/// # Examples
/// ```no_run
/// // In JavaScript: import and call once at startup.
/// // import { init_panic_hook } from "lathe-wasm";
/// // init_panic_hook();
/// ```
#[wasm_bindgen]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Full description of one mesh rebuild.
///
/// Every field has a default, so a host can send `{}` and tweak single
/// fields from there. Angles are radians; `control_points` is a flat
/// sequence of `[x, y]` pairs of length `3k + 1`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LatheConfig {
    /// Cubic Bezier control points of the profile curve
    pub control_points: Vec<[f64; 2]>,
    /// Flatness tolerance for Bezier subdivision
    pub tolerance: f64,
    /// Error bound for polyline simplification
    pub epsilon: f64,
    /// Angle of the first generated column in radians
    pub start_angle: f64,
    /// Angle of the last generated column in radians
    pub end_angle: f64,
    /// Number of angular steps between columns
    pub divisions: u32,
    /// Close the start of the profile with a center-axis point
    pub cap_start: bool,
    /// Close the end of the profile with a center-axis point
    pub cap_end: bool,
}

impl Default for LatheConfig {
    fn default() -> Self {
        Self {
            // A goblet-like demo profile: four cubic segments
            control_points: vec![
                [44.0, 240.5],
                [62.0, 207.5],
                [63.0, 174.5],
                [59.0, 129.5],
                [55.0, 84.5],
                [22.0, 25.5],
                [20.0, -2.5],
                [18.0, -30.5],
                [31.0, -53.5],
                [36.0, -83.5],
                [41.0, -113.5],
                [39.0, -146.5],
                [0.0, -146.5],
            ],
            tolerance: DEFAULT_TOLERANCE,
            epsilon: DEFAULT_SIMPLIFY_EPSILON,
            start_angle: 0.0,
            end_angle: std::f64::consts::TAU,
            divisions: DEFAULT_DIVISIONS,
            cap_start: false,
            cap_end: false,
        }
    }
}

impl LatheConfig {
    fn control_points_vec2(&self) -> Vec<DVec2> {
        self.control_points
            .iter()
            .map(|&[x, y]| DVec2::new(x, y))
            .collect()
    }

    fn lathe_params(&self) -> LatheParams {
        LatheParams {
            start_angle: self.start_angle,
            end_angle: self.end_angle,
            divisions: self.divisions,
            cap_start: self.cap_start,
            cap_end: self.cap_end,
        }
    }
}

/// Returns the default rebuild configuration as a JSON string.
///
/// Hosts typically fetch this once, patch individual fields, and feed the
/// result back to [`build_lathe`].
///
/// # Errors
/// Returns a JavaScript error value if serialization fails.
#[wasm_bindgen]
pub fn default_config() -> Result<String, JsValue> {
    serde_json::to_string_pretty(&LatheConfig::default())
        .map_err(|err| JsValue::from_str(&err.to_string()))
}

/// Mesh handle returned from a rebuild.
///
/// Carries the flat GPU-ready buffers and the bounding extents of the
/// generated geometry.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // const mesh = build_lathe(JSON.stringify(config));
/// // gl.bufferData(gl.ARRAY_BUFFER, mesh.positions(), gl.STATIC_DRAW);
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct LatheMeshHandle {
    vertex_count: usize,
    triangle_count: usize,
    positions: Vec<f32>,
    texcoords: Vec<f32>,
    indices: Vec<u32>,
    extents: Extents,
}

#[wasm_bindgen]
impl LatheMeshHandle {
    /// Returns the number of vertices in the mesh.
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Returns the number of triangles in the mesh.
    pub fn triangle_count(&self) -> usize {
        self.triangle_count
    }

    /// Returns the position buffer as a Float32Array, 3 values per vertex.
    pub fn positions(&self) -> Vec<f32> {
        self.positions.clone()
    }

    /// Returns the texture coordinate buffer as a Float32Array, 2 values
    /// per vertex.
    pub fn texcoords(&self) -> Vec<f32> {
        self.texcoords.clone()
    }

    /// Returns the index buffer as a Uint32Array.
    pub fn indices(&self) -> Vec<u32> {
        self.indices.clone()
    }

    /// Returns the minimum corner of the bounding extents as `[x, y, z]`.
    pub fn extents_min(&self) -> Vec<f64> {
        vec![self.extents.min.x, self.extents.min.y, self.extents.min.z]
    }

    /// Returns the maximum corner of the bounding extents as `[x, y, z]`.
    pub fn extents_max(&self) -> Vec<f64> {
        vec![self.extents.max.x, self.extents.max.y, self.extents.max.z]
    }

    /// Returns a column-major view-projection matrix framing this mesh for
    /// the given viewport aspect ratio.
    pub fn view_projection(&self, aspect: f64) -> Vec<f32> {
        camera::frame_view(&self.extents, DEFAULT_FOV_RADIANS, aspect)
            .to_cols_array()
            .iter()
            .map(|&v| v as f32)
            .collect()
    }
}

/// Rebuilds the lathe mesh described by a JSON configuration.
///
/// This is the main entry point used from JavaScript. For Rust tests,
/// prefer [`build_lathe_internal`], which exposes Rust error types
/// directly.
///
/// # Errors
/// Returns a JavaScript error value containing a human-readable message
/// when the configuration cannot be parsed or the pipeline rejects it.
///
/// # Examples
/// ```no_run
/// // In JavaScript: build_lathe(JSON.stringify({ divisions: 64 }));
/// ```
#[wasm_bindgen]
pub fn build_lathe(config_json: &str) -> Result<LatheMeshHandle, JsValue> {
    let config: LatheConfig = serde_json::from_str(config_json)
        .map_err(|err| JsValue::from_str(&format!("invalid config: {err}")))?;

    build_lathe_internal(&config).map_err(|err| JsValue::from_str(&err.to_string()))
}

/// Host-only helper that runs the full pipeline for a parsed configuration.
///
/// # Errors
/// Propagates pipeline validation errors unchanged.
pub fn build_lathe_internal(config: &LatheConfig) -> Result<LatheMeshHandle, MeshError> {
    let control_points = config.control_points_vec2();
    let output = generate_lathe_mesh(
        &control_points,
        config.tolerance,
        config.epsilon,
        &config.lathe_params(),
    )?;

    Ok(LatheMeshHandle {
        vertex_count: output.mesh.vertex_count(),
        triangle_count: output.mesh.triangle_count(),
        positions: output.mesh.positions_f32(),
        texcoords: output.mesh.texcoords_f32(),
        indices: output.mesh.indices_u32(),
        extents: output.extents,
    })
}
