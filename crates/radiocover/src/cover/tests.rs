use super::*;
use crate::geom::Point;
use nalgebra::vector;

#[test]
fn mask_ops() {
    let mut m = Mask::EMPTY;
    assert!(m.is_empty());
    m.insert(PointId(0));
    m.insert(PointId(3));
    assert!(m.contains(PointId(0)));
    assert!(!m.contains(PointId(1)));
    assert_eq!(m.count(), 2);
    assert_eq!(m.union(Mask::single(PointId(1))).count(), 3);
    assert_eq!(m.minus(Mask::single(PointId(0))), Mask::single(PointId(3)));
    assert_eq!(full_mask(3), Mask(0b111));
    assert_eq!(full_mask(0), Mask::EMPTY);
}

#[test]
fn coverage_reference_scenario() {
    // Points at 0, 10, 100 on the x-axis, radius 50: the first two see each
    // other, the third only itself.
    let points: Vec<Point> = vec![vector![0.0, 0.0], vector![10.0, 0.0], vector![100.0, 0.0]];
    let cov = build_coverage(&points, 50.0).unwrap();
    assert_eq!(cov, vec![Mask(0b011), Mask(0b011), Mask(0b100)]);
}

#[test]
fn coverage_is_reflexive_at_radius_zero() {
    let points: Vec<Point> = vec![vector![1.0, 2.0], vector![-3.0, 4.0], vector![0.0, 0.0]];
    let cov = build_coverage(&points, 0.0).unwrap();
    for (i, m) in cov.iter().enumerate() {
        assert_eq!(*m, Mask::single(PointId(i)));
    }
}

#[test]
fn coverage_rejects_oversized_instance() {
    let points: Vec<Point> = (0..=MAX_POINTS).map(|i| vector![i as f64, 0.0]).collect();
    let err = build_coverage(&points, 1.0).unwrap_err();
    assert_eq!(
        err,
        SolveError::CapacityExceeded {
            n: MAX_POINTS + 1,
            max: MAX_POINTS
        }
    );
}

#[test]
fn capacity_boundary_is_inclusive() {
    let points: Vec<Point> = (0..MAX_POINTS).map(|i| vector![i as f64, 0.0]).collect();
    let cov = build_coverage(&points, 0.5).unwrap();
    assert_eq!(cov.len(), MAX_POINTS);
}
