mod common;

use std::hint::black_box;
use std::sync::Arc;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use common::{per_item, plane_grid, wave};
use noise_graph::prelude::*;

const DEPTHS: [usize; 4] = [1, 4, 16, 64];

/// Alternating Abs / Clamp chain of the given depth over one source.
fn make_chain(depth: usize) -> ModuleRef {
    let mut node = wave();
    for i in 0..depth {
        node = if i % 2 == 0 {
            Abs::with_source(node).into_ref()
        } else {
            Clamp::with_source(-0.75, 0.75, node).into_ref()
        };
    }
    node
}

/// Same shape as [`make_chain`], assembled through the graph compiler.
fn make_compiled_chain(depth: usize) -> ModuleRef {
    let mut registry = ModuleRegistry::new();
    registry.register_ref("wave", wave());

    let mut spec = ModuleGraphSpec::default();
    spec.add("n0", ModuleSpec::external("wave"));
    for i in 0..depth {
        let input = format!("n{i}");
        let node = if i % 2 == 0 {
            ModuleSpec::abs(input)
        } else {
            ModuleSpec::clamp(input, -0.75, 0.75)
        };
        spec.add(&format!("n{}", i + 1), node);
    }

    GraphCompiler::compile_root(&spec, &registry, &format!("n{depth}")).expect("compile ok")
}

/// A diamond: one source shared by `width` Abs/Clamp branches summed together.
fn make_shared_fan(width: usize) -> ModuleRef {
    let x = wave();
    let mut acc: ModuleRef = Abs::with_source(Arc::clone(&x)).into_ref();
    for _ in 1..width {
        let branch = Clamp::with_source(0.0, 0.5, Abs::with_source(Arc::clone(&x)).into_ref());
        acc = Add::with_sources(acc, branch.into_ref()).into_ref();
    }
    acc
}

fn evaluate_benches(c: &mut Criterion) {
    let points = plane_grid(64);

    let mut group = c.benchmark_group("evaluate/chain");
    group.throughput(per_item(points.len()));
    for &depth in &DEPTHS {
        let direct = make_chain(depth);
        let compiled = make_compiled_chain(depth);

        group.bench_with_input(BenchmarkId::new("direct", depth), &depth, |b, _| {
            b.iter(|| {
                let mut sum = 0.0f32;
                for &p in &points {
                    sum += direct.sample(black_box(p));
                }
                black_box(sum);
            });
        });

        group.bench_with_input(BenchmarkId::new("compiled", depth), &depth, |b, _| {
            b.iter(|| {
                let mut sum = 0.0f32;
                for &p in &points {
                    sum += compiled.sample(black_box(p));
                }
                black_box(sum);
            });
        });
    }
    group.finish();

    let mut group = c.benchmark_group("evaluate/shared_fan");
    group.throughput(per_item(points.len()));
    for &width in &DEPTHS {
        let root = make_shared_fan(width);
        group.bench_with_input(BenchmarkId::from_parameter(width), &width, |b, _| {
            b.iter(|| black_box(root.sample_points(&points)));
        });
    }
    group.finish();

    let mut group = c.benchmark_group("evaluate/clamp_inverted_bounds");
    group.throughput(per_item(points.len()));
    let ordered = Clamp::with_source(-0.5, 0.5, wave());
    let inverted = Clamp::with_source(0.5, -0.5, wave());
    group.bench_function("ordered", |b| {
        b.iter(|| black_box(ordered.sample_points(&points)));
    });
    group.bench_function("inverted", |b| {
        b.iter(|| {
            inverted.set_bounds(0.5, -0.5);
            black_box(inverted.sample_points(&points))
        });
    });
    group.finish();
}

criterion_group! {
    name = benches;
    config = common::quick_criterion();
    targets = evaluate_benches
}
criterion_main!(benches);
