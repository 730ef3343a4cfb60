//! Coverage mask construction (the O(n²) predicate sweep).

use crate::geom::{covers, Point};

use super::types::{Mask, PointId, SolveError, MAX_POINTS};

/// Build the per-point coverage masks for `points` at the given radius.
///
/// `coverage[i]` has bit `j` set iff a transmitter at `points[i]` reaches
/// `points[j]`. The relation is symmetric for a shared radius and reflexive
/// for `radius >= 0`, so every returned mask has its own bit set.
///
/// Fails with `CapacityExceeded` when `points.len() > MAX_POINTS`; the
/// instance is never silently truncated.
pub fn build_coverage(points: &[Point], radius: f64) -> Result<Vec<Mask>, SolveError> {
    let n = points.len();
    if n > MAX_POINTS {
        return Err(SolveError::CapacityExceeded { n, max: MAX_POINTS });
    }
    let mut coverage = Vec::with_capacity(n);
    for (i, &a) in points.iter().enumerate() {
        let mut mask = Mask::EMPTY;
        for (j, &b) in points.iter().enumerate() {
            if covers(a, b, radius) {
                mask.insert(PointId(j));
            }
        }
        debug_assert!(mask.contains(PointId(i)), "coverage must be reflexive");
        coverage.push(mask);
    }
    Ok(coverage)
}
