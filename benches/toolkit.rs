//! Benchmarks for spark-toolkit
//!
//! Run with: cargo bench

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;
use spark_toolkit::{Nested, compact, flatten, max_by_key, sample, shuffle, union, without};

// =============================================================================
// RANDOMIZATION BENCHMARKS
// =============================================================================

fn bench_shuffle(c: &mut Criterion) {
    let mut group = c.benchmark_group("shuffle");

    for len in [10usize, 100, 1_000, 10_000] {
        let input: Vec<u64> = (0..len as u64).collect();
        group.bench_with_input(BenchmarkId::new("len", len), &input, |b, input| {
            let mut rng = StdRng::seed_from_u64(1);
            b.iter(|| black_box(shuffle(input, &mut rng)))
        });
    }

    group.finish();
}

fn bench_sample_vs_shuffle_prefix(c: &mut Criterion) {
    let input: Vec<u64> = (0..10_000).collect();
    let mut rng = StdRng::seed_from_u64(2);

    c.bench_function("sample_10_of_10000", |b| {
        b.iter(|| black_box(sample(&input, 10, &mut rng)))
    });

    c.bench_function("shuffle_prefix_10_of_10000", |b| {
        b.iter(|| {
            let mut all = shuffle(&input, &mut rng);
            all.truncate(10);
            black_box(all)
        })
    });
}

// =============================================================================
// CLEANING BENCHMARKS
// =============================================================================

fn bench_compact(c: &mut Criterion) {
    let input: Vec<i64> = (0..10_000).map(|i| i % 3).collect();
    c.bench_function("compact_10000", |b| b.iter(|| black_box(compact(&input))));
}

fn nested_tree(depth: usize, width: usize) -> Vec<Nested<u32>> {
    if depth == 0 {
        return (0..width as u32).map(Nested::Leaf).collect();
    }
    (0..width)
        .map(|_| Nested::List(nested_tree(depth - 1, width)))
        .collect()
}

fn bench_flatten(c: &mut Criterion) {
    let mut group = c.benchmark_group("flatten");

    for depth in [1, 3, 5] {
        let tree = nested_tree(depth, 5);
        group.bench_with_input(BenchmarkId::new("depth", depth), &tree, |b, tree| {
            b.iter(|| black_box(flatten(tree)))
        });
    }

    group.finish();
}

fn bench_union_without(c: &mut Criterion) {
    let a: Vec<u32> = (0..500).collect();
    let b: Vec<u32> = (250..750).collect();

    c.bench_function("union_2x500", |bench| {
        bench.iter(|| black_box(union::<u32, _>([&a, &b])))
    });

    let excluded: Vec<u32> = (0..50).collect();
    c.bench_function("without_500_minus_50", |bench| {
        bench.iter(|| black_box(without(&a, &excluded)))
    });
}

// =============================================================================
// RANKING BENCHMARKS
// =============================================================================

fn bench_max_by_key(c: &mut Criterion) {
    let input: Vec<(u32, f64)> = (0..10_000).map(|i| (i, (i as f64).sin())).collect();
    c.bench_function("max_by_key_10000", |b| {
        b.iter(|| black_box(max_by_key(&input, |pair| pair.1)))
    });
}

criterion_group!(random_benches, bench_shuffle, bench_sample_vs_shuffle_prefix);
criterion_group!(cleaning_benches, bench_compact, bench_flatten, bench_union_without);
criterion_group!(ranking_benches, bench_max_by_key);

criterion_main!(random_benches, cleaning_benches, ranking_benches);
