//! # Camera Framing and Orbit Control
//!
//! Pure-math camera helpers for the browser host: a view-projection that
//! frames freshly built extents, and an explicit orbit session that turns
//! discrete pointer events into world-matrix updates. All state lives in
//! the session value handed to the host; nothing here is global.

use config::constants::{
    CAMERA_FAR, CAMERA_FIT_FRACTION, CAMERA_NEAR, ORBIT_SENSITIVITY, POINTER_VIEWPORT_SCALE,
};
use glam::{DMat4, DVec2, DVec3};
use lathe_mesh::Extents;
use wasm_bindgen::prelude::*;

/// Computes a view-projection matrix that frames the given extents.
///
/// The camera sits on the +Z axis looking at the vertical midpoint of the
/// box, at a distance chosen so the mesh height fills
/// `CAMERA_FIT_FRACTION` of the viewport. Up is -Y: the profile points are
/// 2D screen-space coordinates, where y grows downward.
pub fn frame_view(extents: &Extents, fov_radians: f64, aspect: f64) -> DMat4 {
    let projection = DMat4::perspective_rh(fov_radians, aspect, CAMERA_NEAR, CAMERA_FAR);

    let mid_y = extents.center().y;
    let fit_height = extents.size().y * CAMERA_FIT_FRACTION;
    let distance = fit_height / (fov_radians * 0.5).tan();

    let eye = DVec3::new(0.0, mid_y, distance);
    let target = DVec3::new(0.0, mid_y, 0.0);
    let view = DMat4::look_at_rh(eye, target, DVec3::NEG_Y);

    projection * view
}

/// Orbit-drag state between a pointer press and release.
///
/// The host forwards press, drag, and release events; the session
/// accumulates rotation into a world matrix that it exposes for upload.
/// Drags outside a press/release pair are ignored.
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct OrbitSession {
    world: DMat4,
    viewport: DVec2,
    last_position: Option<DVec2>,
}

#[wasm_bindgen]
impl OrbitSession {
    /// Creates a session for a viewport of the given pixel size.
    #[wasm_bindgen(constructor)]
    pub fn new(viewport_width: f64, viewport_height: f64) -> OrbitSession {
        OrbitSession {
            world: DMat4::IDENTITY,
            viewport: DVec2::new(viewport_width, viewport_height),
            last_position: None,
        }
    }

    /// Updates the viewport size after a resize.
    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.viewport = DVec2::new(width, height);
    }

    /// Begins a drag at the given pointer position.
    pub fn press(&mut self, x: f64, y: f64) {
        self.last_position = Some(DVec2::new(x, y));
    }

    /// Applies a pointer move, rotating the world while a drag is active.
    ///
    /// The delta since the last event is normalized by the viewport size
    /// and applied as an X rotation followed by a Y rotation.
    pub fn drag(&mut self, x: f64, y: f64) {
        let Some(last) = self.last_position else {
            return;
        };

        let position = DVec2::new(x, y);
        let delta = (last - position)
            * DVec2::new(
                POINTER_VIEWPORT_SCALE / self.viewport.x,
                POINTER_VIEWPORT_SCALE / self.viewport.y,
            );

        self.world = DMat4::from_rotation_x(delta.y * ORBIT_SENSITIVITY) * self.world;
        self.world = DMat4::from_rotation_y(delta.x * ORBIT_SENSITIVITY) * self.world;

        self.last_position = Some(position);
    }

    /// Ends the drag; further moves are ignored until the next press.
    pub fn release(&mut self) {
        self.last_position = None;
    }

    /// Returns true while a drag is active.
    pub fn is_dragging(&self) -> bool {
        self.last_position.is_some()
    }

    /// Returns the accumulated world matrix as a column-major f32 array.
    pub fn world_matrix(&self) -> Vec<f32> {
        self.world
            .to_cols_array()
            .iter()
            .map(|&v| v as f32)
            .collect()
    }
}

impl OrbitSession {
    /// The accumulated world matrix at full precision, for host-side math.
    pub fn world(&self) -> DMat4 {
        self.world
    }
}
