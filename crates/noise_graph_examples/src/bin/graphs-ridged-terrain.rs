use noise_graph::prelude::*;
use noise_graph_examples::{init_tracing, random_points, wave_source, Stats};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let mut registry = ModuleRegistry::new();
    registry.register_ref("low", wave_source(0.05));
    registry.register_ref("high", wave_source(0.4));

    // height = clamp(blend(hills, ridges, low), 0, 1)
    //   hills  = low * 0.5 + 0.5
    //   ridges = (1 - |high|)^2
    let mut spec = ModuleGraphSpec::default();
    spec.add("low", ModuleSpec::external("low"))
        .add("high", ModuleSpec::external("high"))
        .add("hills", ModuleSpec::scale_bias("low".into(), 0.5, 0.5))
        .add("high_abs", ModuleSpec::abs("high".into()))
        .add("ridge_base", ModuleSpec::scale_bias("high_abs".into(), -1.0, 1.0))
        .add("ridges", ModuleSpec::exponent("ridge_base".into(), 2.0))
        .add(
            "mixed",
            ModuleSpec::blend("hills".into(), "ridges".into(), "low".into()),
        )
        .add("height", ModuleSpec::clamp("mixed".into(), 0.0, 1.0));

    let graph = GraphCompiler::compile(&spec, &registry)?;
    info!("Compiled {} modules: {:?}.", graph.len(), graph.topo());

    let mut rng = StdRng::seed_from_u64(42);
    let points = random_points(10_000, 256.0, &mut rng);

    for id in ["hills", "ridges", "mixed", "height"] {
        let module = graph.module(id)?;
        let stats = Stats::from_values(&module.sample_points(&points));
        info!(
            "{:>7}: min = {:>7.4}, max = {:>7.4}, mean = {:>7.4}, nan = {}",
            id, stats.min, stats.max, stats.mean, stats.nan_count
        );
    }

    Ok(())
}
