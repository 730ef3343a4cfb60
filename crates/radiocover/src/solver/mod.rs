//! Set-cover solvers over the shared coverage-mask model.
//!
//! Purpose
//! - `greedy`: iterative max-new-coverage heuristic. Polynomial, an upper
//!   bound on the optimum, never fails on valid masks.
//! - `exact`: forward DP over all `2^n` covered-set states with parent-pointer
//!   reconstruction. Exponential, optimal.
//!
//! Why this design
//! - Both consume the same `&[Mask]` slice from `cover::build_coverage`, so a
//!   caller can run them side by side on one instance and compare counts (the
//!   exact count is a certificate for how far greedy was off).
//! - Solvers are pure functions of their input: all scratch state is local to
//!   the call and released on return, so repeated invocations are independent.

mod exact;
mod greedy;

pub use exact::{exact_solve, exact_solve_points};
pub use greedy::{greedy_solve, greedy_solve_points};

#[cfg(test)]
mod tests;
