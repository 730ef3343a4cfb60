//! Minimum geometric set cover in the plane.
//!
//! Given `n` facility points in R² and a fixed coverage radius, choose the
//! smallest subset of points such that every point lies within radius of at
//! least one chosen point. Two interchangeable solvers share one coverage
//! model:
//! - `solver::greedy`: polynomial heuristic, deterministic tie-break;
//! - `solver::exact`: subset-enumeration DP over coverage bitmasks, optimal.
//!
//! API Policy
//! - This crate is project-internal. There is no stable public API.
//! - Prefer clarity and better design over compatibility; breaking changes
//!   are fine when they improve quality.

pub mod api;
pub mod cover;
pub mod geom;
pub mod scatter;
pub mod solver;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Convenience re-export so callers write `Vec2<f64>` like the core does.
pub use geom::Point;
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cover::{build_coverage, full_mask, Mask, PointId, SolveError, MAX_POINTS};
    pub use crate::geom::{covers, dist, Point};
    pub use crate::scatter::{scatter_points, Bounds2, ReplayToken, ScatterCfg};
    pub use crate::solver::{exact_solve, exact_solve_points, greedy_solve, greedy_solve_points};
    pub use nalgebra::Vector2 as Vec2;
}
