use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use urn_rs::estimate::{estimate_seeded, Target};
use urn_rs::urn::Urn;

fn bench_estimate(c: &mut Criterion) {
    let urn = Urn::try_from_counts([("black", 6), ("red", 4), ("green", 3)]).unwrap();
    let target = Target::try_from_counts([("red", 2), ("green", 1)]).unwrap();

    let mut g = c.benchmark_group("estimate_seeded");
    for trials in [1_000u64, 10_000] {
        g.bench_with_input(BenchmarkId::from_parameter(trials), &trials, |b, &trials| {
            b.iter(|| estimate_seeded(black_box(&urn), black_box(&target), 5, trials, 42))
        });
    }
    g.finish();
}

fn bench_draw(c: &mut Criterion) {
    let urn = Urn::try_from_counts([("black", 60), ("red", 40), ("green", 30)]).unwrap();
    c.bench_function("draw_50_of_130", |b| {
        b.iter(|| {
            let mut working = urn.fresh();
            black_box(working.draw_seeded(50, 7))
        })
    });
}

criterion_group!(benches, bench_estimate, bench_draw);
criterion_main!(benches);
