//! Greedy max-new-coverage heuristic.

use crate::cover::{build_coverage, full_mask, Mask, PointId, SolveError};
use crate::geom::Point;

/// Greedy set cover: repeatedly pick the point covering the most
/// still-uncovered points.
///
/// Candidates are scanned in increasing index order and a candidate replaces
/// the incumbent only on a strictly greater gain, so ties go to the lowest
/// index. That tie-break is part of the contract: identical inputs yield the
/// identical chosen sequence.
///
/// Returns the chosen indices in pick order. With reflexive masks the result
/// always reaches full coverage; if no candidate adds coverage the loop stops
/// early rather than spin (the caller can detect the gap by OR-ing the
/// chosen masks).
pub fn greedy_solve(coverage: &[Mask]) -> Vec<PointId> {
    let n = coverage.len();
    let full = full_mask(n);
    let mut covered = Mask::EMPTY;
    let mut chosen: Vec<PointId> = Vec::new();

    while covered != full {
        let mut best: Option<PointId> = None;
        let mut best_gain = 0u32;
        for (i, &mask) in coverage.iter().enumerate() {
            let id = PointId(i);
            if chosen.contains(&id) {
                continue;
            }
            let gain = mask.minus(covered).count();
            if gain > best_gain {
                best_gain = gain;
                best = Some(id);
            }
        }
        // Stall guard: unreachable with reflexive masks, but the loop must
        // provably terminate for arbitrary mask inputs.
        let Some(id) = best else { break };
        covered = covered.union(coverage[id.0]);
        chosen.push(id);
    }
    chosen
}

/// Convenience: build coverage from raw points and run the greedy solver.
pub fn greedy_solve_points(points: &[Point], radius: f64) -> Result<Vec<PointId>, SolveError> {
    let coverage = build_coverage(points, radius)?;
    Ok(greedy_solve(&coverage))
}
