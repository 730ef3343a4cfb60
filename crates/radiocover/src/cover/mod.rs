//! Coverage bitmask model shared by both solvers.
//!
//! Purpose
//! - Reduce the geometric instance to pure combinatorics once: for each point
//!   `i`, a `Mask` whose bit `j` says "a transmitter at `i` reaches `j`".
//!   Greedy and exact solvers only ever look at these masks.
//!
//! Why this design
//! - Both solvers need the same O(n²) predicate sweep; building it once keeps
//!   them interchangeable and makes the capacity ceiling a single check.
//! - `Mask` wraps a fixed-width integer, so `n` is hard-capped at
//!   `MAX_POINTS`; exceeding it is an error, never a truncation.

mod build;
mod types;

pub use build::build_coverage;
pub use types::{full_mask, Mask, PointId, SolveError, MAX_POINTS};

#[cfg(test)]
mod tests;
