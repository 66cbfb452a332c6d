//! Benchmark of laying out and rendering a chart.

#![allow(
    unused_crate_dependencies,
    missing_docs,
    reason = "Benchmarks don't use all dev-dependencies"
)]

use std::hint::black_box;

use catsim::prelude::*;
use criterion::{Criterion, criterion_group, criterion_main};
use rand::{SeedableRng, rngs::StdRng};

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Chart");

    let config = ChartConfig::default();
    let mut rng = StdRng::seed_from_u64(0);
    let probs = generate(20, &mut rng).expect("categories > 0");
    let stats = theoretical(&probs);

    group.bench_function("layout_20", |b| {
        b.iter(|| {
            black_box(layout(
                black_box(&probs),
                THEORETICAL_TITLE,
                THEORETICAL_COLOR,
                stats,
                &config,
            ))
        })
    });

    let chart = layout(&probs, THEORETICAL_TITLE, THEORETICAL_COLOR, stats, &config)
        .expect("valid probabilities");
    group.bench_function("render_20", |b| {
        b.iter_with_setup(
            || Vec::<DrawCommand>::with_capacity(64),
            |mut commands| {
                render(&chart, &mut commands);
                black_box(commands)
            },
        )
    });
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
