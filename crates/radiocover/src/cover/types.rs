//! Data types for the coverage model: masks, point ids, errors.
//!
//! Kept small and explicit to make `build` and the solver modules easy to read.

use std::fmt;

/// Hard ceiling on instance size.
///
/// The exact solver allocates a table of `2^n` cells, so the ceiling is set by
/// DP feasibility well below the `u32` mask width: at `n = 20` the dp table is
/// about 4 MiB and a sweep touches `2^20 · 20` transitions.
pub const MAX_POINTS: usize = 20;

/// Index of a point in the input sequence (0-based throughout the core).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PointId(pub usize);

impl fmt::Display for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Set of points as an n-bit mask; bit `j` set means point `j` is in the set.
///
/// Used both for per-point coverage (`coverage[i]`) and for the covered-set
/// states of the solvers. Plain value type; all ops are branch-free bit math.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Mask(pub u32);

impl Mask {
    pub const EMPTY: Mask = Mask(0);

    /// Singleton set `{id}`.
    #[inline]
    pub fn single(id: PointId) -> Mask {
        Mask(1 << id.0)
    }

    #[inline]
    pub fn contains(self, id: PointId) -> bool {
        self.0 & (1 << id.0) != 0
    }

    #[inline]
    pub fn insert(&mut self, id: PointId) {
        self.0 |= 1 << id.0;
    }

    #[inline]
    pub fn union(self, other: Mask) -> Mask {
        Mask(self.0 | other.0)
    }

    /// Elements of `self` not in `other`.
    #[inline]
    pub fn minus(self, other: Mask) -> Mask {
        Mask(self.0 & !other.0)
    }

    /// Number of points in the set.
    #[inline]
    pub fn count(self) -> u32 {
        self.0.count_ones()
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Mask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:b}", self.0)
    }
}

/// Mask with bits `0..n` set: "every point covered".
///
/// Callers must have checked `n <= MAX_POINTS` (the shift below is only valid
/// for n strictly below the mask width).
#[inline]
pub fn full_mask(n: usize) -> Mask {
    debug_assert!(n <= MAX_POINTS, "full_mask beyond capacity");
    Mask((1u32 << n) - 1)
}

/// Errors surfaced by coverage construction and the exact solver.
#[derive(Debug, PartialEq, Eq)]
pub enum SolveError {
    /// Instance larger than the bitmask/DP capacity. Fatal; never truncated.
    CapacityExceeded { n: usize, max: usize },
    /// The masks cannot be combined into the full mask. Unreachable while
    /// coverage is reflexive, but checked rather than assumed: a variant
    /// without self-coverage would hit this.
    Unsolvable { covered: Mask },
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveError::CapacityExceeded { n, max } => {
                write!(f, "instance has {n} points, capacity is {max}")
            }
            SolveError::Unsolvable { covered } => {
                write!(f, "no combination of masks reaches full coverage (best union {covered})")
            }
        }
    }
}

impl std::error::Error for SolveError {}
