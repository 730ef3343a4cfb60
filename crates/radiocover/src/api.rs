//! Curated internal API (UNSTABLE).
//!
//! Important
//! - This is not a public API. It is a convenience surface for project-internal
//!   code and experiments. Breaking changes are allowed and expected.
//! - Prefer these re-exports for clarity and consistency across callers.

// Geometry predicate
pub use crate::geom::{covers, dist, Point};
// Coverage bitmask model
pub use crate::cover::{build_coverage, full_mask, Mask, PointId, SolveError, MAX_POINTS};
// Solvers
pub use crate::solver::{exact_solve, exact_solve_points, greedy_solve, greedy_solve_points};
// Random instances
pub use crate::scatter::{scatter_points, Bounds2 as ScatterBounds, ReplayToken, ScatterCfg};
