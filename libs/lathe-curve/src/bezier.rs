//! # Adaptive Bezier Flattening
//!
//! Turns cubic Bezier profile segments into polylines by recursive midpoint
//! subdivision. A segment is split until a flatness metric drops below the
//! caller's tolerance, at which point only its two endpoints are emitted.
//!
//! ## Termination Rule
//!
//! Flat-enough leaves contribute their endpoints and nothing else. The
//! output is an endpoint collection, not a dense sampling: interior points
//! of a flat leaf are never evaluated. Adjacent segments of a multi-segment
//! profile share an endpoint, so the concatenated output carries one
//! duplicate point per join; simplification removes those downstream.

use crate::error::CurveError;
use config::constants::{MAX_SPLIT_DEPTH, STACKER_STACK_SIZE_BYTES};
use glam::DVec2;
use stacker::maybe_grow;

/// A cubic Bezier segment as its four control points.
pub type CubicSegment = [DVec2; 4];

/// Evaluates the cubic Bernstein blend at parameter `t`.
///
/// # Example
///
/// ```rust
/// use glam::DVec2;
/// use lathe_curve::bezier::point_on_cubic;
///
/// let segment = [
///     DVec2::new(0.0, 0.0),
///     DVec2::new(1.0, 2.0),
///     DVec2::new(3.0, 2.0),
///     DVec2::new(4.0, 0.0),
/// ];
/// assert_eq!(point_on_cubic(&segment, 0.0), segment[0]);
/// assert_eq!(point_on_cubic(&segment, 1.0), segment[3]);
/// ```
pub fn point_on_cubic(segment: &CubicSegment, t: f64) -> DVec2 {
    let inv = 1.0 - t;

    segment[0] * (inv * inv * inv)
        + segment[1] * (3.0 * t * inv * inv)
        + segment[2] * (3.0 * inv * t * t)
        + segment[3] * (t * t * t)
}

/// Uniformly samples `count` points on a cubic segment, `t = i / (count - 1)`.
///
/// Fixed-step sampling for callers that want a predictable point count
/// instead of adaptive flattening.
///
/// # Errors
///
/// Returns `InvalidInput` if `count < 2`.
pub fn sample_cubic(segment: &CubicSegment, count: usize) -> Result<Vec<DVec2>, CurveError> {
    if count < 2 {
        return Err(CurveError::invalid_input(format!(
            "sample count must be at least 2, got {count}"
        )));
    }

    Ok((0..count)
        .map(|i| point_on_cubic(segment, i as f64 / (count - 1) as f64))
        .collect())
}

/// Flatness metric for a cubic segment.
///
/// Measures how far the control polygon deviates from the chord between the
/// endpoints. Exactly collinear, evenly spaced control points yield zero.
pub fn flatness(segment: &CubicSegment) -> f64 {
    let [p1, p2, p3, p4] = *segment;

    let ux = 3.0 * p2.x - 2.0 * p1.x - p4.x;
    let uy = 3.0 * p2.y - 2.0 * p1.y - p4.y;
    let vx = 3.0 * p3.x - 2.0 * p4.x - p1.x;
    let vy = 3.0 * p3.y - 2.0 * p4.y - p1.y;

    (ux * ux).max(vx * vx) + (uy * uy).max(vy * vy)
}

/// Splits a cubic segment at parameter `t` via de Casteljau construction.
///
/// Three levels of pairwise lerps; the halves share the split point.
pub fn split_cubic(segment: &CubicSegment, t: f64) -> (CubicSegment, CubicSegment) {
    let [p1, p2, p3, p4] = *segment;

    let q1 = p1.lerp(p2, t);
    let q2 = p2.lerp(p3, t);
    let q3 = p3.lerp(p4, t);

    let r1 = q1.lerp(q2, t);
    let r2 = q2.lerp(q3, t);

    let mid = r1.lerp(r2, t);

    ([p1, q1, r1, mid], [mid, r2, q3, p4])
}

/// Flattens a single cubic segment into a polyline within `tolerance`.
///
/// # Errors
///
/// Returns `InvalidInput` for a non-finite or non-positive tolerance and
/// `RecursionLimitExceeded` if the flatness metric fails to converge (for
/// example when control points are non-finite).
pub fn flatten_cubic(segment: &CubicSegment, tolerance: f64) -> Result<Vec<DVec2>, CurveError> {
    validate_tolerance(tolerance)?;

    let mut points = Vec::new();
    flatten_into(segment, tolerance, 0, &mut points)?;
    Ok(points)
}

/// Flattens a multi-segment cubic Bezier profile into one polyline.
///
/// `control_points` is a flat sequence of length `3k + 1` describing `k`
/// segments that share endpoints. Segments are flattened in order into a
/// single accumulator, left before right within each segment.
///
/// # Errors
///
/// Returns `InvalidInput` if the control point count is not `3k + 1` for
/// `k >= 1` or the tolerance is non-finite or non-positive, and
/// `RecursionLimitExceeded` if subdivision fails to converge.
///
/// # Example
///
/// ```rust
/// use glam::DVec2;
/// use lathe_curve::bezier::flatten_profile;
///
/// let control_points = [
///     DVec2::new(0.0, 0.0),
///     DVec2::new(1.0, 3.0),
///     DVec2::new(3.0, 3.0),
///     DVec2::new(4.0, 0.0),
/// ];
/// let polyline = flatten_profile(&control_points, 0.1).unwrap();
/// assert_eq!(polyline.first(), Some(&control_points[0]));
/// assert_eq!(polyline.last(), Some(&control_points[3]));
/// ```
pub fn flatten_profile(
    control_points: &[DVec2],
    tolerance: f64,
) -> Result<Vec<DVec2>, CurveError> {
    validate_tolerance(tolerance)?;

    if control_points.len() < 4 || (control_points.len() - 1) % 3 != 0 {
        return Err(CurveError::invalid_input(format!(
            "control point count must be 3k+1 for k >= 1 segments, got {}",
            control_points.len()
        )));
    }

    maybe_grow(STACKER_STACK_SIZE_BYTES, STACKER_STACK_SIZE_BYTES / 8, || {
        let segment_count = (control_points.len() - 1) / 3;
        let mut points = Vec::new();

        for i in 0..segment_count {
            let offset = i * 3;
            let segment: CubicSegment = [
                control_points[offset],
                control_points[offset + 1],
                control_points[offset + 2],
                control_points[offset + 3],
            ];
            flatten_into(&segment, tolerance, 0, &mut points)?;
        }

        Ok(points)
    })
}

fn validate_tolerance(tolerance: f64) -> Result<(), CurveError> {
    if !tolerance.is_finite() || tolerance <= 0.0 {
        return Err(CurveError::invalid_input(format!(
            "tolerance must be finite and positive, got {tolerance}"
        )));
    }
    Ok(())
}

fn flatten_into(
    segment: &CubicSegment,
    tolerance: f64,
    depth: usize,
    points: &mut Vec<DVec2>,
) -> Result<(), CurveError> {
    if flatness(segment) < tolerance {
        // flat enough: only the endpoints contribute
        points.push(segment[0]);
        points.push(segment[3]);
        return Ok(());
    }

    if depth >= MAX_SPLIT_DEPTH {
        return Err(CurveError::recursion_limit(MAX_SPLIT_DEPTH));
    }

    let (left, right) = split_cubic(segment, 0.5);
    flatten_into(&left, tolerance, depth + 1, points)?;
    flatten_into(&right, tolerance, depth + 1, points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::constants::EPSILON;

    fn arch_segment() -> CubicSegment {
        [
            DVec2::new(0.0, 0.0),
            DVec2::new(1.0, 3.0),
            DVec2::new(3.0, 3.0),
            DVec2::new(4.0, 0.0),
        ]
    }

    #[test]
    fn test_point_on_cubic_endpoints() {
        let segment = arch_segment();
        assert_eq!(point_on_cubic(&segment, 0.0), segment[0]);
        assert_eq!(point_on_cubic(&segment, 1.0), segment[3]);
    }

    #[test]
    fn test_point_on_cubic_midpoint_matches_split() {
        let segment = arch_segment();
        let (left, right) = split_cubic(&segment, 0.5);
        let mid = point_on_cubic(&segment, 0.5);

        assert!(left[3].distance(mid) < EPSILON);
        assert!(right[0].distance(mid) < EPSILON);
    }

    #[test]
    fn test_split_preserves_outer_endpoints() {
        let segment = arch_segment();
        let (left, right) = split_cubic(&segment, 0.5);
        assert_eq!(left[0], segment[0]);
        assert_eq!(right[3], segment[3]);
    }

    #[test]
    fn test_sample_cubic_counts() {
        let segment = arch_segment();
        let samples = sample_cubic(&segment, 9).unwrap();
        assert_eq!(samples.len(), 9);
        assert_eq!(samples[0], segment[0]);
        assert_eq!(samples[8], segment[3]);
    }

    #[test]
    fn test_sample_cubic_rejects_single_point() {
        let segment = arch_segment();
        assert!(matches!(
            sample_cubic(&segment, 1),
            Err(CurveError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_collinear_segment_has_zero_flatness() {
        // Evenly spaced points on a line
        let segment = [
            DVec2::new(0.0, 0.0),
            DVec2::new(1.0, 1.0),
            DVec2::new(2.0, 2.0),
            DVec2::new(3.0, 3.0),
        ];
        assert_eq!(flatness(&segment), 0.0);
    }

    #[test]
    fn test_collinear_segment_flattens_to_endpoints() {
        let segment = [
            DVec2::new(0.0, 0.0),
            DVec2::new(1.0, 1.0),
            DVec2::new(2.0, 2.0),
            DVec2::new(3.0, 3.0),
        ];
        let points = flatten_cubic(&segment, 1e-6).unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(points[0], segment[0]);
        assert_eq!(points[1], segment[3]);
    }

    #[test]
    fn test_finer_tolerance_never_yields_fewer_points() {
        let segment = arch_segment();
        let coarse = flatten_cubic(&segment, 1.0).unwrap();
        let fine = flatten_cubic(&segment, 0.01).unwrap();
        assert!(fine.len() >= coarse.len());
    }

    #[test]
    fn test_flattened_points_lie_near_curve() {
        let segment = arch_segment();
        let points = flatten_cubic(&segment, 0.01).unwrap();

        // Every emitted point is an endpoint of some subdivided piece and
        // therefore lies exactly on the curve; spot-check a few against
        // dense uniform samples.
        let dense = sample_cubic(&segment, 1024).unwrap();
        for p in &points {
            let closest = dense
                .iter()
                .map(|q| p.distance_squared(*q))
                .fold(f64::INFINITY, f64::min);
            assert!(closest < 1e-3, "point {p:?} too far from curve");
        }
    }

    #[test]
    fn test_flatten_profile_join_duplicates() {
        // Two segments sharing an endpoint produce one duplicate at the join
        let control_points = [
            DVec2::new(0.0, 0.0),
            DVec2::new(1.0, 1.0),
            DVec2::new(2.0, 2.0),
            DVec2::new(3.0, 3.0),
            DVec2::new(4.0, 4.0),
            DVec2::new(5.0, 5.0),
            DVec2::new(6.0, 6.0),
        ];
        let points = flatten_profile(&control_points, 0.1).unwrap();
        assert_eq!(points.len(), 4);
        assert_eq!(points[1], points[2]);
    }

    #[test]
    fn test_flatten_profile_rejects_bad_count() {
        // 5 is not 3k+1
        let control_points = vec![DVec2::ZERO; 5];
        assert!(matches!(
            flatten_profile(&control_points, 0.1),
            Err(CurveError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_flatten_profile_rejects_too_few_points() {
        let control_points = vec![DVec2::ZERO; 1];
        assert!(matches!(
            flatten_profile(&control_points, 0.1),
            Err(CurveError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_flatten_rejects_bad_tolerance() {
        let segment = arch_segment();
        assert!(flatten_cubic(&segment, 0.0).is_err());
        assert!(flatten_cubic(&segment, -1.0).is_err());
        assert!(flatten_cubic(&segment, f64::NAN).is_err());
        assert!(flatten_cubic(&segment, f64::INFINITY).is_err());
    }

    #[test]
    fn test_non_finite_control_points_hit_depth_bound() {
        // NaN poisons the flatness metric, so subdivision can never
        // terminate; the depth guard must convert that into an error
        let segment = [
            DVec2::new(0.0, 0.0),
            DVec2::new(f64::NAN, 1.0),
            DVec2::new(2.0, 1.0),
            DVec2::new(3.0, 0.0),
        ];
        assert_eq!(
            flatten_cubic(&segment, 0.1),
            Err(CurveError::RecursionLimitExceeded {
                limit: MAX_SPLIT_DEPTH
            })
        );
    }
}
