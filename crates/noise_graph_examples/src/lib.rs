#![forbid(unsafe_code)]
//! Shared helpers for the `noise_graph` example binaries.
use glam::Vec3;
use noise_graph::prelude::*;
use rand::Rng;
use tracing_subscriber::EnvFilter;

/// Installs a formatting subscriber honoring `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Cheap deterministic stand-in for a coherent noise generator: a sum of three
/// rotated sine waves, roughly in `[-1, 1]`.
pub fn wave_source(frequency: f32) -> ModuleRef {
    FnSource::new(move |x, y, z| {
        let (x, y, z) = (x * frequency, y * frequency, z * frequency);
        ((x * 1.3 + y * 0.4).sin() + (y * 1.1 - z * 0.7).sin() + (z * 0.9 + x * 0.5).sin())
            / 3.0
    })
    .into_ref()
}

/// Summary statistics of sampled values.
#[derive(Clone, Copy, Debug)]
pub struct Stats {
    pub min: f32,
    pub max: f32,
    pub mean: f32,
    pub nan_count: usize,
}

impl Stats {
    pub fn from_values(values: &[f32]) -> Self {
        let mut min = f32::INFINITY;
        let mut max = f32::NEG_INFINITY;
        let mut sum = 0.0f64;
        let mut finite = 0usize;
        let mut nan_count = 0usize;
        for &v in values {
            if v.is_nan() {
                nan_count += 1;
                continue;
            }
            min = min.min(v);
            max = max.max(v);
            sum += f64::from(v);
            finite += 1;
        }
        let mean = if finite > 0 {
            (sum / finite as f64) as f32
        } else {
            f32::NAN
        };
        Self {
            min,
            max,
            mean,
            nan_count,
        }
    }
}

/// Generates `count` points uniformly distributed in `[0, extent)^2` on the `z = 0` plane.
pub fn random_points(count: usize, extent: f32, rng: &mut impl Rng) -> Vec<Vec3> {
    (0..count)
        .map(|_| Vec3::new(rand01(rng) * extent, rand01(rng) * extent, 0.0))
        .collect()
}

#[inline]
fn rand01(rng: &mut impl Rng) -> f32 {
    (rng.next_u32() as f32) / ((u32::MAX as f32) + 1.0)
}
