//! Random integer point clouds (replay tokens, a few layouts).
//!
//! Purpose
//! - Provide a small, deterministic sampler of exact point sets for benches,
//!   property tests and the CLI. Coordinates are integers, so every cloud is
//!   exactly representable and hull/caliper results are reproducible bit for bit.
//!
//! Model
//! - `Square`: uniform on `[-extent, extent]²`.
//! - `Disc`: uniform on lattice points with `x² + y² <= extent²` (rejection).
//! - `Line`: points `t·(dx, dy)` on one random lattice direction; a deliberately
//!   degenerate layout whose hull has 2 vertices.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.
//!
//! Code cross-refs: `Point`, `convex_hull`

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::point::Point;

/// Point count distribution.
#[derive(Clone, Copy, Debug)]
pub enum PointCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}
impl PointCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            PointCount::Fixed(n) => n.max(1),
            PointCount::Uniform { min, max } => {
                let lo = min.max(1);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layout {
    Square,
    Disc,
    Line,
}

/// Point cloud sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct CloudCfg {
    pub count: PointCount,
    /// Half-width of the square / radius of the disc. Clamped to `[1, 1e9]`.
    pub extent: i64,
    pub layout: Layout,
}
impl Default for CloudCfg {
    fn default() -> Self {
        Self {
            count: PointCount::Fixed(24),
            extent: 100,
            layout: Layout::Disc,
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

/// Draw a point cloud. May contain duplicates (the hull dedups).
pub fn draw_point_cloud(cfg: CloudCfg, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.to_std_rng();
    let n = cfg.count.sample(&mut rng);
    let e = cfg.extent.clamp(1, 1_000_000_000);
    match cfg.layout {
        Layout::Square => (0..n)
            .map(|_| Point::new(rng.gen_range(-e..=e), rng.gen_range(-e..=e)))
            .collect(),
        Layout::Disc => {
            let r2 = (e as i128) * (e as i128);
            let mut out = Vec::with_capacity(n);
            while out.len() < n {
                let x: i64 = rng.gen_range(-e..=e);
                let y: i64 = rng.gen_range(-e..=e);
                if (x as i128) * (x as i128) + (y as i128) * (y as i128) <= r2 {
                    out.push(Point::new(x, y));
                }
            }
            out
        }
        Layout::Line => {
            let (dx, dy) = loop {
                let dx: i64 = rng.gen_range(-3..=3);
                let dy: i64 = rng.gen_range(-3..=3);
                if dx != 0 || dy != 0 {
                    break (dx, dy);
                }
            };
            let t_max = (e / 3).max(1);
            (0..n)
                .map(|_| {
                    let t = rng.gen_range(-t_max..=t_max);
                    Point::new(t * dx, t * dy)
                })
                .collect()
        }
    }
}
