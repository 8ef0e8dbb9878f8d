//! Shared fixtures for the noise_graph benches.
#![allow(dead_code)]

use std::time::Duration;

use criterion::{Criterion, Throughput};
use glam::Vec3;
use noise_graph::prelude::*;

/// Short runs: module evaluation is cheap and the sweeps have many points.
pub fn quick_criterion() -> Criterion {
    Criterion::default()
        .sample_size(20)
        .warm_up_time(Duration::from_millis(750))
        .measurement_time(Duration::from_secs(2))
        .configure_from_args()
}

/// Reports throughput as sampled points (or compiled nodes) per second.
pub fn per_item(count: usize) -> Throughput {
    Throughput::Elements(count as u64)
}

/// Smooth stand-in for an external noise source.
pub fn wave() -> ModuleRef {
    FnSource::new(|x, y, z| (x * 1.7).sin() * (y * 0.9).cos() + z * 0.1).into_ref()
}

/// `side * side` points on the z = 0 plane, spaced 0.05 apart.
pub fn plane_grid(side: usize) -> Vec<Vec3> {
    (0..side * side)
        .map(|k| Vec3::new((k % side) as f32 * 0.05, (k / side) as f32 * 0.05, 0.0))
        .collect()
}
