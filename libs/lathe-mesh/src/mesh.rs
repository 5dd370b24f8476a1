//! # Mesh Data Structure
//!
//! Core mesh representation with positions, texture coordinates, and
//! triangle indices.

use crate::error::MeshError;
use crate::extents::Extents;
use glam::{DVec2, DVec3};

/// A textured triangle mesh.
///
/// All geometry calculations use f64 internally. Export to f32 only
/// happens at the browser boundary for GPU rendering. Texture coordinates
/// are aligned 1:1 with positions.
///
/// # Example
///
/// ```rust
/// use lathe_mesh::Mesh;
/// use glam::{DVec2, DVec3};
///
/// let mut mesh = Mesh::new();
/// mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0), DVec2::new(0.0, 0.0));
/// mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0), DVec2::new(1.0, 0.0));
/// mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0), DVec2::new(0.0, 1.0));
/// mesh.add_triangle(0, 1, 2);
/// assert!(mesh.validate());
/// ```
#[derive(Debug, Clone)]
pub struct Mesh {
    /// Vertex positions (f64 for precision)
    positions: Vec<DVec3>,
    /// Texture coordinates, one per position
    texcoords: Vec<DVec2>,
    /// Triangle indices (3 indices per triangle)
    triangles: Vec<[u32; 3]>,
}

impl Default for Mesh {
    fn default() -> Self {
        Self::new()
    }
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self {
            positions: Vec::new(),
            texcoords: Vec::new(),
            triangles: Vec::new(),
        }
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertex_count),
            texcoords: Vec::with_capacity(vertex_count),
            triangles: Vec::with_capacity(triangle_count),
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if the mesh is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Adds a vertex with its texture coordinate and returns its index.
    pub fn add_vertex(&mut self, position: DVec3, texcoord: DVec2) -> u32 {
        let index = self.positions.len() as u32;
        self.positions.push(position);
        self.texcoords.push(texcoord);
        index
    }

    /// Adds a triangle by vertex indices.
    pub fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.triangles.push([v0, v1, v2]);
    }

    /// Returns a reference to the positions.
    #[inline]
    pub fn positions(&self) -> &[DVec3] {
        &self.positions
    }

    /// Returns a reference to the texture coordinates.
    #[inline]
    pub fn texcoords(&self) -> &[DVec2] {
        &self.texcoords
    }

    /// Returns a reference to the triangles.
    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Returns the position at the given index.
    #[inline]
    pub fn position(&self, index: u32) -> DVec3 {
        self.positions[index as usize]
    }

    /// Returns the texture coordinate at the given index.
    #[inline]
    pub fn texcoord(&self, index: u32) -> DVec2 {
        self.texcoords[index as usize]
    }

    /// Returns the triangle at the given index.
    #[inline]
    pub fn triangle(&self, index: usize) -> [u32; 3] {
        self.triangles[index]
    }

    /// Computes the bounding extents of the mesh.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for an empty mesh, which has no meaningful
    /// bounding box.
    pub fn extents(&self) -> Result<Extents, MeshError> {
        Extents::from_positions(&self.positions)
    }

    /// Validates the mesh for correctness.
    ///
    /// Checks that texture coordinates stay aligned with positions and that
    /// all triangle indices are in range. Zero-area triangles are allowed:
    /// revolved meshes legitimately contain them at caps, on the seam
    /// column, and wherever a profile point lies on the rotation axis.
    ///
    /// Returns true if valid.
    pub fn validate(&self) -> bool {
        if self.texcoords.len() != self.positions.len() {
            return false;
        }

        let vertex_count = self.positions.len() as u32;
        self.triangles
            .iter()
            .all(|tri| tri.iter().all(|&index| index < vertex_count))
    }

    /// Exports positions as a flat f32 array for GPU upload.
    ///
    /// Returns a flattened `[x, y, z, x, y, z, ...]` array.
    pub fn positions_f32(&self) -> Vec<f32> {
        let mut result = Vec::with_capacity(self.positions.len() * 3);
        for p in &self.positions {
            result.push(p.x as f32);
            result.push(p.y as f32);
            result.push(p.z as f32);
        }
        result
    }

    /// Exports texture coordinates as a flat f32 array for GPU upload.
    ///
    /// Returns a flattened `[u, v, u, v, ...]` array.
    pub fn texcoords_f32(&self) -> Vec<f32> {
        let mut result = Vec::with_capacity(self.texcoords.len() * 2);
        for t in &self.texcoords {
            result.push(t.x as f32);
            result.push(t.y as f32);
        }
        result
    }

    /// Exports triangle indices as a flat u32 array for GPU upload.
    ///
    /// Returns a flattened `[i0, i1, i2, i0, i1, i2, ...]` array.
    pub fn indices_u32(&self) -> Vec<u32> {
        let mut result = Vec::with_capacity(self.triangles.len() * 3);
        for tri in &self.triangles {
            result.push(tri[0]);
            result.push(tri[1]);
            result.push(tri[2]);
        }
        result
    }
}
