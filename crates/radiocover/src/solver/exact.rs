//! Exact minimum cover via forward DP over covered-set bitmask states.
//!
//! The state space is every subset of points, encoded as a `Mask`; applying
//! point `i` moves state `s` to `s | coverage[i]` at cost 1, and the answer is
//! the cheapest path from the empty set to the full mask.
//!
//! A single sweep in increasing numeric state order is sufficient: OR never
//! decreases a mask's value, so every transition lands on a state at or after
//! the current one, and a state's cost is final by the time it relaxes its
//! successors. This ordering property is what lets the solver skip a
//! priority-queue shortest path; it must not be reordered.

use crate::cover::{build_coverage, full_mask, Mask, PointId, SolveError, MAX_POINTS};
use crate::geom::Point;

/// Optimal set cover: the minimum-length choice of points whose masks union
/// to the full mask, reconstructed via parent pointers.
///
/// Costs are `Option<u32>` cells (`None` = unreached) rather than a sentinel
/// "infinity", so there is nothing to overflow or to confuse with a real
/// count. All tables are local to the call: O(2^n) space, O(2^n · n) time.
///
/// Errors: `CapacityExceeded` when `coverage.len() > MAX_POINTS`;
/// `Unsolvable` when the full mask is unreachable (impossible while coverage
/// is reflexive, still checked).
pub fn exact_solve(coverage: &[Mask]) -> Result<Vec<PointId>, SolveError> {
    let n = coverage.len();
    if n > MAX_POINTS {
        return Err(SolveError::CapacityExceeded { n, max: MAX_POINTS });
    }
    DpSweep::new(coverage).solve()
}

/// Convenience: build coverage from raw points and run the exact solver.
pub fn exact_solve_points(points: &[Point], radius: f64) -> Result<Vec<PointId>, SolveError> {
    let coverage = build_coverage(points, radius)?;
    exact_solve(&coverage)
}

/// DP sweep carrying the per-invocation tables.
struct DpSweep<'a> {
    coverage: &'a [Mask],
    full: Mask,
    /// Minimum picks to reach each covered-set state; `None` = unreached.
    dp: Vec<Option<u32>>,
    /// Predecessor state and the point applied there, for the path that set
    /// the state's final cost.
    parent: Vec<Option<(Mask, PointId)>>,
}

impl<'a> DpSweep<'a> {
    fn new(coverage: &'a [Mask]) -> Self {
        let full = full_mask(coverage.len());
        let states = full.0 as usize + 1;
        let mut dp = vec![None; states];
        dp[0] = Some(0);
        Self {
            coverage,
            full,
            dp,
            parent: vec![None; states],
        }
    }

    fn solve(mut self) -> Result<Vec<PointId>, SolveError> {
        for state in 0..=self.full.0 {
            let Some(cost) = self.dp[state as usize] else {
                continue;
            };
            for (i, &mask) in self.coverage.iter().enumerate() {
                let next = Mask(state).union(mask);
                if next.0 == state {
                    continue; // self-loop, no new coverage
                }
                let cell = &mut self.dp[next.0 as usize];
                if cell.is_none_or(|c| c > cost + 1) {
                    *cell = Some(cost + 1);
                    self.parent[next.0 as usize] = Some((Mask(state), PointId(i)));
                }
            }
        }
        self.reconstruct()
    }

    /// Walk parent links from the full mask back to the empty set.
    fn reconstruct(&self) -> Result<Vec<PointId>, SolveError> {
        if self.dp[self.full.0 as usize].is_none() {
            return Err(SolveError::Unsolvable {
                covered: self.best_union(),
            });
        }
        let mut chosen = Vec::new();
        let mut state = self.full;
        while !state.is_empty() {
            // Every improved cell records a parent, and parents are strictly
            // smaller masks, so the walk reaches the empty set.
            let (prev, id) = self.parent[state.0 as usize]
                .expect("reached state without parent link");
            chosen.push(id);
            state = prev;
        }
        Ok(chosen)
    }

    /// Union of all masks, for the `Unsolvable` report.
    fn best_union(&self) -> Mask {
        self.coverage
            .iter()
            .fold(Mask::EMPTY, |acc, &m| acc.union(m))
    }
}
