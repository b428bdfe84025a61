//! Random simple rings (radial jitter + replay tokens).
//!
//! Model
//! - Start from `n` equally spaced angles on [0, 2π), add bounded angular and
//!   radial jitter, and connect the points in angle order around `center`.
//! - Angular jitter stays below half the spacing, so angles stay strictly
//!   increasing and the ring is star-shaped around `center`, hence simple and
//!   counter-clockwise.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{Point, Polygon, Ring};

/// Vertex count distribution.
#[derive(Clone, Copy, Debug)]
pub enum VertexCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}

impl VertexCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            VertexCount::Fixed(n) => n.max(3),
            VertexCount::Uniform { min, max } => {
                let lo = min.max(3);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// Star-shaped ring sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct StarCfg {
    pub vertex_count: VertexCount,
    /// Angular jitter as a fraction of the base spacing Δ=2π/n. Clamped to [0, 0.49].
    pub angle_jitter_frac: f64,
    /// Radii are `base_radius * (1 + u)` with `u ∈ [-radial_jitter, radial_jitter]`,
    /// clamped to [0, 0.95].
    pub radial_jitter: f64,
    pub base_radius: f64,
    pub center: Point<f64>,
    /// Random global phase in [0, 2π)?
    pub random_phase: bool,
}

impl Default for StarCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Fixed(16),
            angle_jitter_frac: 0.3,
            radial_jitter: 0.4,
            base_radius: 100.0,
            center: Point::new(0.0, 0.0),
            random_phase: true,
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
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

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
        StdRng::seed_from_u64(mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15))))
    }
}

/// Draw a random simple, counter-clockwise ring.
pub fn draw_star_ring(cfg: StarCfg, tok: ReplayToken) -> Ring<f64> {
    let mut rng = tok.to_std_rng();
    let n = cfg.vertex_count.sample(&mut rng);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let rj = cfg.radial_jitter.clamp(0.0, 0.95);
    let r0 = cfg.base_radius.max(1e-9);
    let delta = std::f64::consts::TAU / (n as f64);
    let phase = if cfg.random_phase {
        rng.gen::<f64>() * std::f64::consts::TAU
    } else {
        0.0
    };
    let points = (0..n)
        .map(|k| {
            let jitter = (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            let theta = phase + (k as f64) * delta + jitter;
            let r = (1.0 + (rng.gen::<f64>() * 2.0 - 1.0) * rj) * r0;
            Point::new(
                cfg.center.x + theta.cos() * r,
                cfg.center.y + theta.sin() * r,
            )
        })
        .collect();
    Ring::new_unchecked(points)
}

/// Hole-free polygon around a random star ring.
#[inline]
pub fn draw_star_polygon(cfg: StarCfg, tok: ReplayToken) -> Polygon<f64> {
    Polygon::new(draw_star_ring(cfg, tok))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replay_is_deterministic() {
        let cfg = StarCfg::default();
        let a = draw_star_ring(cfg, ReplayToken::new(7, 3));
        let b = draw_star_ring(cfg, ReplayToken::new(7, 3));
        let c = draw_star_ring(cfg, ReplayToken::new(7, 4));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn rings_are_ccw_with_requested_size() {
        let cfg = StarCfg {
            vertex_count: VertexCount::Uniform { min: 5, max: 40 },
            ..StarCfg::default()
        };
        for i in 0..20 {
            let ring = draw_star_ring(cfg, ReplayToken::new(11, i));
            assert!((5..=40).contains(&ring.len()));
            assert!(ring.signed_area() > 0.0);
        }
    }
}
