use super::*;
use crate::cover::{build_coverage, full_mask, Mask, PointId, SolveError, MAX_POINTS};
use crate::geom::Point;
use crate::scatter::{scatter_points, Bounds2, ReplayToken, ScatterCfg};
use nalgebra::vector;
use proptest::prelude::*;

fn union_of(coverage: &[Mask], chosen: &[PointId]) -> Mask {
    chosen
        .iter()
        .fold(Mask::EMPTY, |acc, id| acc.union(coverage[id.0]))
}

fn reference_points() -> Vec<Point> {
    vec![vector![0.0, 0.0], vector![10.0, 0.0], vector![100.0, 0.0]]
}

#[test]
fn reference_scenario_greedy_picks_0_then_2() {
    let cov = build_coverage(&reference_points(), 50.0).unwrap();
    let chosen = greedy_solve(&cov);
    // Point 0 covers {0,1} (gain 2, ties with point 1 broken downward),
    // then point 2 covers the rest.
    assert_eq!(chosen, vec![PointId(0), PointId(2)]);
}

#[test]
fn reference_scenario_exact_needs_two() {
    let cov = build_coverage(&reference_points(), 50.0).unwrap();
    let chosen = exact_solve(&cov).unwrap();
    assert_eq!(chosen.len(), 2);
    assert_eq!(union_of(&cov, &chosen), full_mask(3));
}

#[test]
fn single_point_both_solvers() {
    let points = vec![vector![3.0, 4.0]];
    let cov = build_coverage(&points, 1.0).unwrap();
    assert_eq!(greedy_solve(&cov), vec![PointId(0)]);
    assert_eq!(exact_solve(&cov).unwrap(), vec![PointId(0)]);
}

#[test]
fn fully_connected_needs_one() {
    // All pairwise distances well under the radius.
    let points = vec![
        vector![0.0, 0.0],
        vector![1.0, 1.0],
        vector![-1.0, 2.0],
        vector![2.0, -1.0],
    ];
    let cov = build_coverage(&points, 10.0).unwrap();
    assert_eq!(greedy_solve(&cov).len(), 1);
    assert_eq!(exact_solve(&cov).unwrap().len(), 1);
}

#[test]
fn radius_zero_needs_every_point() {
    let points: Vec<Point> = (0..5).map(|i| vector![i as f64, 0.0]).collect();
    let cov = build_coverage(&points, 0.0).unwrap();
    let greedy = greedy_solve(&cov);
    let exact = exact_solve(&cov).unwrap();
    assert_eq!(greedy.len(), 5);
    assert_eq!(exact.len(), 5);
    assert_eq!(union_of(&cov, &exact), full_mask(5));
}

#[test]
fn empty_instance_is_trivially_covered() {
    let cov = build_coverage(&[], 1.0).unwrap();
    assert!(greedy_solve(&cov).is_empty());
    assert!(exact_solve(&cov).unwrap().is_empty());
}

#[test]
fn exact_rejects_oversized_instance() {
    // Hand-built masks one past capacity; mirrors the build_coverage check
    // for callers that construct masks themselves.
    let coverage: Vec<Mask> = (0..=MAX_POINTS).map(|_| Mask::EMPTY).collect();
    let err = exact_solve(&coverage).unwrap_err();
    assert!(matches!(err, SolveError::CapacityExceeded { .. }));
}

#[test]
fn exact_reports_unsolvable_without_reflexivity() {
    // Point 2 is covered by nobody (non-reflexive masks by hand).
    let coverage = vec![Mask(0b011), Mask(0b011), Mask(0b000)];
    let err = exact_solve(&coverage).unwrap_err();
    assert_eq!(err, SolveError::Unsolvable { covered: Mask(0b011) });
}

#[test]
fn greedy_stalls_rather_than_spins_without_reflexivity() {
    let coverage = vec![Mask(0b011), Mask(0b011), Mask(0b000)];
    let chosen = greedy_solve(&coverage);
    // Terminates early with the reachable part covered.
    assert_eq!(chosen, vec![PointId(0)]);
}

#[test]
fn greedy_tie_break_is_lowest_index() {
    // Two disjoint pairs, all gains equal at the start: index 0 must win the
    // first round and index 2 the second.
    let coverage = vec![Mask(0b0011), Mask(0b0011), Mask(0b1100), Mask(0b1100)];
    assert_eq!(greedy_solve(&coverage), vec![PointId(0), PointId(2)]);
}

#[test]
fn convenience_wrappers_match_two_step_calls() {
    let points = reference_points();
    let cov = build_coverage(&points, 50.0).unwrap();
    assert_eq!(greedy_solve_points(&points, 50.0).unwrap(), greedy_solve(&cov));
    assert_eq!(
        exact_solve_points(&points, 50.0).unwrap(),
        exact_solve(&cov).unwrap()
    );
}

fn scatter_instance(count: usize, seed: u64, index: u64) -> Vec<Point> {
    let cfg = ScatterCfg {
        count,
        bounds: Bounds2 {
            min: vector![0.0, 0.0],
            max: vector![100.0, 100.0],
        },
    };
    scatter_points(&cfg, ReplayToken { seed, index })
}

proptest! {
    // Small state spaces only; the exact solver is 2^n.
    #[test]
    fn greedy_always_reaches_full_coverage(n in 1usize..12, index in 0u64..64, radius in 0.0f64..60.0) {
        let points = scatter_instance(n, 0xc0ffee, index);
        let cov = build_coverage(&points, radius).unwrap();
        let chosen = greedy_solve(&cov);
        prop_assert_eq!(union_of(&cov, &chosen), full_mask(n));
    }

    #[test]
    fn exact_never_beats_reality_and_never_loses_to_greedy(n in 1usize..12, index in 0u64..64, radius in 0.0f64..60.0) {
        let points = scatter_instance(n, 0xbeef, index);
        let cov = build_coverage(&points, radius).unwrap();
        let greedy = greedy_solve(&cov);
        let exact = exact_solve(&cov).unwrap();
        // Optimality relative to the heuristic upper bound.
        prop_assert!(exact.len() <= greedy.len());
        // And still a genuine cover.
        prop_assert_eq!(union_of(&cov, &exact), full_mask(n));
        prop_assert!(!exact.is_empty());
    }

    #[test]
    fn solvers_are_deterministic(n in 1usize..10, index in 0u64..64) {
        let points = scatter_instance(n, 42, index);
        let cov = build_coverage(&points, 25.0).unwrap();
        prop_assert_eq!(greedy_solve(&cov), greedy_solve(&cov));
        prop_assert_eq!(exact_solve(&cov).unwrap(), exact_solve(&cov).unwrap());
    }

    #[test]
    fn chosen_indices_are_distinct_and_in_range(n in 1usize..12, index in 0u64..64, radius in 0.0f64..60.0) {
        let points = scatter_instance(n, 7, index);
        let cov = build_coverage(&points, radius).unwrap();
        for chosen in [greedy_solve(&cov), exact_solve(&cov).unwrap()] {
            let mut seen = Mask::EMPTY;
            for id in &chosen {
                prop_assert!(id.0 < n);
                prop_assert!(!seen.contains(*id));
                seen.insert(*id);
            }
        }
    }
}
