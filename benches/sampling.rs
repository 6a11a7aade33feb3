use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use fukubiki::{Selection, WeightedSampler};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn skewed(n: usize) -> WeightedSampler<usize> {
    WeightedSampler::new((0..n).map(|i| (i, 1 + (i as i64 % 17))))
        .expect("positive weights")
}

fn bench_selection(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection");

    // Linear scan wins for small partitions; binary search should overtake it
    // somewhere in the hundreds.
    let sizes = [10, 100, 1_000, 10_000];

    for &size in &sizes {
        for (name, selection) in [("linear", Selection::Linear), ("binary", Selection::Binary)] {
            let sampler = skewed(size).with_selection(selection);
            let mut rng = ChaCha8Rng::seed_from_u64(42);
            group.bench_function(format!("{name}_n{size}"), |b| {
                b.iter(|| black_box(sampler.sample_with_rng(&mut rng)))
            });
        }
    }
    group.finish();
}

fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");

    for &size in &[100, 10_000] {
        group.bench_function(format!("new_n{size}"), |b| {
            b.iter(|| black_box(skewed(black_box(size))))
        });
    }
    group.finish();
}

fn bench_sample_many(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample_many");
    let sampler = WeightedSampler::new([
        ("London", 350),
        ("Birmingham", 200),
        ("Manchester", 150),
        ("Glasgow", 100),
        ("Other", 200),
    ])
    .expect("positive weights");

    for &count in &[1_000, 100_000] {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        group.bench_function(format!("cities_{count}"), |b| {
            b.iter(|| black_box(sampler.sample_many_with_rng(black_box(count), &mut rng)))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_selection,
    bench_construction,
    bench_sample_many
);
criterion_main!(benches);
