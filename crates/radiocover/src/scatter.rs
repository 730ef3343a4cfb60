//! Random point instances (uniform scatter + replay tokens).
//!
//! Purpose
//! - Provide a small, deterministic sampler of facility layouts for property
//!   tests, benchmarks, and the CLI demo path. Parameterizable, reproducible,
//!   returns plain `Point`s ready for `build_coverage`.
//!
//! Model
//! - Draw `count` points uniformly in an axis-aligned box. Determinism uses a
//!   replay token `(seed, index)` mixed into a single RNG, so an instance can
//!   be regenerated from its token alone.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::geom::Point;

/// Axis-aligned sampling box (min/max corner per axis).
#[derive(Clone, Copy, Debug)]
pub struct Bounds2 {
    pub min: Vector2<f64>,
    pub max: Vector2<f64>,
}

impl Default for Bounds2 {
    fn default() -> Self {
        Self {
            min: Vector2::new(0.0, 0.0),
            max: Vector2::new(100.0, 100.0),
        }
    }
}

/// Scatter sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct ScatterCfg {
    pub count: usize,
    pub bounds: Bounds2,
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw `cfg.count` points uniformly in `cfg.bounds`.
///
/// Degenerate bounds (max <= min on an axis) collapse that axis to the min
/// coordinate rather than erroring; the solvers do not care about duplicate
/// or collinear points.
pub fn scatter_points(cfg: &ScatterCfg, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.to_std_rng();
    let span = cfg.bounds.max - cfg.bounds.min;
    (0..cfg.count)
        .map(|_| {
            let u: f64 = rng.gen();
            let v: f64 = rng.gen();
            Vector2::new(
                cfg.bounds.min.x + u * span.x.max(0.0),
                cfg.bounds.min.y + v * span.y.max(0.0),
            )
        })
        .collect()
}
