//! # Extents
//!
//! Axis-aligned bounding boxes over position buffers, used by callers to
//! frame a camera around freshly generated geometry.

use crate::error::MeshError;
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Componentwise bounds over a non-empty position set.
///
/// `min[i] <= max[i]` holds for each axis, and both bounds are attained by
/// some input point on each axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extents {
    /// Componentwise minimum corner
    pub min: DVec3,
    /// Componentwise maximum corner
    pub max: DVec3,
}

impl Extents {
    /// Computes extents over a position buffer in a single linear pass.
    ///
    /// The first position seeds both bounds; each further position folds in
    /// with componentwise min/max.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for an empty buffer, which has no meaningful
    /// bounding box.
    ///
    /// # Example
    ///
    /// ```rust
    /// use glam::DVec3;
    /// use lathe_mesh::Extents;
    ///
    /// let positions = [DVec3::new(-1.0, 2.0, 0.0), DVec3::new(3.0, -2.0, 1.0)];
    /// let extents = Extents::from_positions(&positions).unwrap();
    /// assert_eq!(extents.min, DVec3::new(-1.0, -2.0, 0.0));
    /// assert_eq!(extents.max, DVec3::new(3.0, 2.0, 1.0));
    /// ```
    pub fn from_positions(positions: &[DVec3]) -> Result<Self, MeshError> {
        let Some((first, rest)) = positions.split_first() else {
            return Err(MeshError::invalid_input(
                "cannot compute extents of an empty position set",
            ));
        };

        let mut min = *first;
        let mut max = *first;
        for p in rest {
            min = min.min(*p);
            max = max.max(*p);
        }

        Ok(Self { min, max })
    }

    /// Size of the box along each axis.
    pub fn size(&self) -> DVec3 {
        self.max - self.min
    }

    /// Center of the box.
    pub fn center(&self) -> DVec3 {
        (self.min + self.max) * 0.5
    }
}
