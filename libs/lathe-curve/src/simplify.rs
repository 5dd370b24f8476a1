//! # Polyline Simplification
//!
//! Ramer-Douglas-Peucker reduction: keeps the points that deviate from the
//! chord of their sub-chain by more than an error bound, discards the rest.
//! Endpoints always survive, point order is preserved, and each retained
//! point appears exactly once in the output.

use crate::error::CurveError;
use crate::vec2::distance_to_segment_sq;
use config::constants::{MAX_RECURSION_DEPTH, STACKER_STACK_SIZE_BYTES};
use glam::DVec2;
use stacker::maybe_grow;

/// Simplifies a polyline within the error bound `epsilon`.
///
/// No discarded point deviates from the simplified chain by more than
/// `epsilon`. With `epsilon = 0`, only points that add no deviation at all
/// (exact collinear runs and coincident duplicates) are removed.
///
/// # Errors
///
/// Returns `InvalidInput` for fewer than 2 points or a non-finite or
/// negative epsilon, and `RecursionLimitExceeded` for pathologically deep
/// split chains.
///
/// # Example
///
/// ```rust
/// use glam::DVec2;
/// use lathe_curve::simplify::simplify_polyline;
///
/// let points = [
///     DVec2::new(0.0, 0.0),
///     DVec2::new(1.0, 0.01),
///     DVec2::new(2.0, 0.0),
/// ];
/// let simplified = simplify_polyline(&points, 0.1).unwrap();
/// assert_eq!(simplified, vec![points[0], points[2]]);
/// ```
pub fn simplify_polyline(points: &[DVec2], epsilon: f64) -> Result<Vec<DVec2>, CurveError> {
    if points.len() < 2 {
        return Err(CurveError::invalid_input(format!(
            "polyline needs at least 2 points, got {}",
            points.len()
        )));
    }

    if !epsilon.is_finite() || epsilon < 0.0 {
        return Err(CurveError::invalid_input(format!(
            "epsilon must be finite and non-negative, got {epsilon}"
        )));
    }

    maybe_grow(STACKER_STACK_SIZE_BYTES, STACKER_STACK_SIZE_BYTES / 8, || {
        let mut kept = Vec::new();
        simplify_range(points, 0, points.len(), epsilon * epsilon, 0, &mut kept)?;
        Ok(kept)
    })
}

/// Simplifies the half-open range `[start, end)` into `kept`.
fn simplify_range(
    points: &[DVec2],
    start: usize,
    end: usize,
    epsilon_sq: f64,
    depth: usize,
    kept: &mut Vec<DVec2>,
) -> Result<(), CurveError> {
    if depth >= MAX_RECURSION_DEPTH {
        return Err(CurveError::recursion_limit(MAX_RECURSION_DEPTH));
    }

    let first = points[start];
    let last = points[end - 1];

    // Farthest interior point from the chord; strict comparison makes the
    // lowest index win ties.
    let mut max_dist_sq = 0.0;
    let mut max_index = start;

    for i in start + 1..end - 1 {
        let dist_sq = distance_to_segment_sq(points[i], first, last);
        if dist_sq > max_dist_sq {
            max_dist_sq = dist_sq;
            max_index = i;
        }
    }

    if max_dist_sq > epsilon_sq {
        simplify_range(points, start, max_index + 1, epsilon_sq, depth + 1, kept)?;
        // The split point bounds both halves; drop the copy the left half
        // emitted and keep the one the right half is about to emit.
        kept.pop();
        simplify_range(points, max_index, end, epsilon_sq, depth + 1, kept)
    } else {
        kept.push(first);
        kept.push(last);
        Ok(())
    }
}
