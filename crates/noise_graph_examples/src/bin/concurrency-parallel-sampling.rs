use std::sync::Arc;
use std::time::Instant;

use anyhow::{anyhow, Result};
use noise_graph::prelude::*;
use noise_graph_examples::{init_tracing, random_points, wave_source, Stats};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

const THREADS: usize = 4;

fn main() -> Result<()> {
    init_tracing();

    let wave = wave_source(0.1);
    // Inverted on purpose: concurrent first evaluations all normalize it safely.
    let clamp: ModuleRef = Clamp::with_source(0.5, -0.5, Arc::clone(&wave)).into_ref();
    let root: ModuleRef = Multiply::with_sources(
        Abs::with_source(Arc::clone(&clamp)).into_ref(),
        ScaleBias::with_source(0.5, 0.5, wave).into_ref(),
    )
    .into_ref();

    let mut rng = StdRng::seed_from_u64(7);
    let points = random_points(200_000, 512.0, &mut rng);

    let start = Instant::now();
    let serial = root.sample_points(&points);
    info!("Serial: {} samples in {:?}.", serial.len(), start.elapsed());

    let start = Instant::now();
    let chunk = points.len().div_ceil(THREADS);
    let chunks: Vec<Vec<f32>> = std::thread::scope(|s| {
        let handles: Vec<_> = points
            .chunks(chunk)
            .map(|part| {
                let root = Arc::clone(&root);
                s.spawn(move || root.sample_points(part))
            })
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().map_err(|_| anyhow!("sampling worker panicked")))
            .collect::<Result<_>>()
    })?;
    let parallel: Vec<f32> = chunks.into_iter().flatten().collect();
    info!(
        "Parallel ({} threads): {} samples in {:?}.",
        THREADS,
        parallel.len(),
        start.elapsed()
    );

    let stats = Stats::from_values(&parallel);
    info!(
        "Identical: {} | min = {:.4}, max = {:.4}, mean = {:.4}.",
        serial == parallel,
        stats.min,
        stats.max,
        stats.mean
    );

    Ok(())
}
