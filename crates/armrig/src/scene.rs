//! Deterministic random scene sampling (obstacles and arm chains).
//!
//! Purpose
//! - Benchmarks, property tests, and the CLI all need scenes that are
//!   reproducible and indexable. Sampling is driven by a replay token
//!   `(seed, index)` mixed into a single RNG; the same token always yields
//!   the same scene.
//!
//! Model
//! - Obstacles: `n` equally spaced angles on [0, 2π) with bounded angular
//!   and radial jitter, emitted in insertion order around the local origin.
//! - Chains: link count, then per-link length and angle drawn from the
//!   configured ranges, root first.

use crate::arm::{Arm, ArmParams, DEFAULT_ARM_ANGLE};
use crate::obstacle::Obstacle;
use crate::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::TAU;

/// Vertex/link count distribution.
#[derive(Clone, Copy, Debug)]
pub enum CountDist {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}

impl CountDist {
    /// Sample a count, clamped to at least `floor`.
    fn sample<R: Rng>(&self, rng: &mut R, floor: usize) -> usize {
        match *self {
            CountDist::Fixed(n) => n.max(floor),
            CountDist::Uniform { min, max } => {
                let lo = min.max(floor);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
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

/// Radial-jitter obstacle sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct RadialObstacleCfg {
    /// Vertex count; floored at 3 so the result has an interior.
    pub vertex_count: CountDist,
    /// Angular jitter as a fraction of the base spacing 2π/n. Clamped to
    /// [0, 0.49] so vertex order stays monotone around the circle.
    pub angle_jitter_frac: f64,
    /// Radial jitter (relative amplitude): radii are
    /// `base_radius * (1 + u)` with `u ∈ [-radial_jitter, radial_jitter]`.
    pub radial_jitter: f64,
    /// Base radius in pixels.
    pub base_radius: f64,
}

impl Default for RadialObstacleCfg {
    fn default() -> Self {
        Self {
            vertex_count: CountDist::Fixed(8),
            angle_jitter_frac: 0.3,
            radial_jitter: 0.25,
            base_radius: 80.0,
        }
    }
}

/// Draw a random star-shaped polygon around the local origin.
pub fn sample_obstacle(cfg: RadialObstacleCfg, tok: ReplayToken) -> Obstacle {
    let mut rng = tok.to_std_rng();
    let n = cfg.vertex_count.sample(&mut rng, 3);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let rj = cfg.radial_jitter.max(0.0);
    let r0 = cfg.base_radius.max(1e-9);
    let delta = TAU / n as f64;

    let mut vertices = Vec::with_capacity(n);
    for k in 0..n {
        let theta = (k as f64 + rng.gen_range(-aj..=aj)) * delta;
        let r = r0 * (1.0 + rng.gen_range(-rj..=rj));
        vertices.push(Vec2::new(r * theta.cos(), r * theta.sin()));
    }
    Obstacle::new(vertices)
}

/// Chain sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct ChainCfg {
    /// Link count; floored at 1.
    pub links: CountDist,
    pub length_min: f64,
    pub length_max: f64,
    /// Draw initial angles uniformly from [0, 2π); otherwise every link
    /// starts at the default angle.
    pub random_angles: bool,
}

impl Default for ChainCfg {
    fn default() -> Self {
        Self {
            links: CountDist::Fixed(3),
            length_min: 60.0,
            length_max: 140.0,
            random_angles: true,
        }
    }
}

/// Draw a random chain, root first.
pub fn sample_chain(cfg: ChainCfg, tok: ReplayToken) -> Arm {
    let mut rng = tok.to_std_rng();
    let n = cfg.links.sample(&mut rng, 1);
    let lo = cfg.length_min.max(1e-9);
    let hi = cfg.length_max.max(lo);

    // Draw root-first so the replay stream matches the chain order, then
    // fold leaf-first into the owned chain.
    let mut drawn = Vec::with_capacity(n);
    for _ in 0..n {
        let length = rng.gen_range(lo..=hi);
        let angle = if cfg.random_angles {
            rng.gen::<f64>() * TAU
        } else {
            DEFAULT_ARM_ANGLE
        };
        drawn.push((length, angle));
    }

    let mut child: Option<Box<Arm>> = None;
    for &(length, angle) in drawn[1..].iter().rev() {
        child = Some(Box::new(Arm::new(ArmParams {
            length,
            angle,
            child,
            ..ArmParams::default()
        })));
    }
    let (length, angle) = drawn[0];
    Arm::new(ArmParams {
        length,
        angle,
        child,
        ..ArmParams::default()
    })
}
