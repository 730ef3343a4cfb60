//! 2D point primitive and the coverage predicate.
//!
//! Purpose
//! - Keep the only geometric decision of the whole pipeline — "does a
//!   transmitter at `a` reach a point at `b`?" — in one pure, total function.
//!
//! Note on the distance formula
//! - `dist` is the true Euclidean distance `sqrt(dx² + dy²)`. A historical
//!   implementation of this planner mixed the axis deltas (`dx * dy`), which
//!   silently changed which points count as "nearby"; that behavior is wrong
//!   and is not preserved.

use nalgebra::Vector2;

/// Facility position in the plane. No identity beyond its index in the input.
pub type Point = Vector2<f64>;

/// Euclidean distance between two points.
#[inline]
pub fn dist(a: Point, b: Point) -> f64 {
    (a - b).norm()
}

/// True iff a transmitter at `a` reaches `b`: `dist(a, b) <= radius`.
///
/// The boundary counts as covered. Reflexive for any `radius >= 0` since the
/// self-distance is zero.
#[inline]
pub fn covers(a: Point, b: Point, radius: f64) -> bool {
    dist(a, b) <= radius
}
