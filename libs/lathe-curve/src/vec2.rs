//! # Segment Distance Helpers
//!
//! 2D helpers on top of `glam::DVec2`. Arithmetic, interpolation, and
//! point-to-point distances come from glam itself; only the point-to-segment
//! distances used by polyline simplification live here.

use glam::DVec2;

/// Squared distance from `p` to the closest point on the segment `[v, w]`.
///
/// Projects `p` onto the line through `v` and `w`, clamps the projection
/// parameter to `[0, 1]` so the closest point stays on the segment, and
/// returns the squared distance to that point. A degenerate segment
/// (`v == w`) reduces to the squared distance to `v`.
pub fn distance_to_segment_sq(p: DVec2, v: DVec2, w: DVec2) -> f64 {
    let length_sq = v.distance_squared(w);
    if length_sq == 0.0 {
        return p.distance_squared(v);
    }

    let t = ((p - v).dot(w - v) / length_sq).clamp(0.0, 1.0);
    p.distance_squared(v.lerp(w, t))
}

/// Distance from `p` to the closest point on the segment `[v, w]`.
pub fn distance_to_segment(p: DVec2, v: DVec2, w: DVec2) -> f64 {
    distance_to_segment_sq(p, v, w).sqrt()
}
