//! Seeded random point clouds in 2D.
//!
//! Purpose
//! - Reproducible inputs for benchmarks and property tests of the hull engine.
//! - `CloudShape::Grid` draws integer coordinates so that every predicate is
//!   evaluated exactly in `f64`, which lets tests assert containment without
//!   a tolerance.
//!
//! Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use super::types::Point;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Region the points are drawn from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CloudShape {
    /// Uniform in the disk of radius `scale` around the origin.
    Disk,
    /// Uniform in the square `[-scale, scale]²`.
    Square,
    /// Integer lattice points in `[-scale, scale]²` (scale rounded down).
    Grid,
}

/// Point cloud sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct CloudCfg {
    pub count: usize,
    pub shape: CloudShape,
    pub scale: f64,
}

impl Default for CloudCfg {
    fn default() -> Self {
        Self {
            count: 100,
            shape: CloudShape::Disk,
            scale: 100.0,
        }
    }
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
        // SplitMix64 finalizer.
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

/// Draw `cfg.count` points. Duplicates are possible (always for dense grids).
pub fn draw_points(cfg: CloudCfg, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.to_std_rng();
    let s = cfg.scale.abs().max(1e-9);
    (0..cfg.count)
        .map(|_| match cfg.shape {
            CloudShape::Disk => {
                let th = rng.gen::<f64>() * std::f64::consts::TAU;
                let r = s * rng.gen::<f64>().sqrt();
                Point::new(th.cos() * r, th.sin() * r)
            }
            CloudShape::Square => Point::new(rng.gen_range(-s..=s), rng.gen_range(-s..=s)),
            CloudShape::Grid => {
                let k = s.floor().max(1.0) as i64;
                Point::new(
                    rng.gen_range(-k..=k) as f64,
                    rng.gen_range(-k..=k) as f64,
                )
            }
        })
        .collect()
}
