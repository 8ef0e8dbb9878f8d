use std::sync::Arc;

use glam::Vec3;
use noise_graph::prelude::*;
use noise_graph_examples::{init_tracing, wave_source};
use tracing::info;

fn main() {
    init_tracing();

    // One source shared by two parents.
    let wave = wave_source(0.8);
    let abs: ModuleRef = Abs::with_source(Arc::clone(&wave)).into_ref();
    let clamped = Clamp::with_source(0.2, 0.6, Arc::clone(&abs));

    // Inverted bounds are swapped on first evaluation.
    let inverted = Clamp::with_source(0.6, 0.2, Arc::clone(&abs));
    info!(
        "Inverted clamp before evaluation: {:?}.",
        inverted.bounds()
    );

    for i in 0..=16 {
        let p = Vec3::new(i as f32 * 0.5, 1.0, 0.0);
        info!(
            "x = {:>4.1} | wave = {:>7.4} | abs = {:>6.4} | clamp(abs) = {:>6.4} | inverted = {:>6.4}",
            p.x,
            wave.sample(p),
            abs.sample(p),
            clamped.sample(p),
            inverted.sample(p),
        );
    }

    info!("Inverted clamp after evaluation: {:?}.", inverted.bounds());
}
