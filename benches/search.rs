//! Build and search benchmarks.
//!
//! Run with: `cargo bench`
//! Save baseline: `cargo bench -- --save-baseline main`
//! Compare: `cargo bench -- --baseline main`

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use cix::index::{CharIndex, DEFAULT_END, DEFAULT_START};

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    group.sample_size(20);

    group.bench_function("bmp_start", |b| {
        b.iter(|| CharIndex::build(black_box(32), black_box(0x3000)).unwrap())
    });

    group.sample_size(10);
    group.bench_function("full_range", |b| {
        b.iter(|| CharIndex::build(black_box(DEFAULT_START), black_box(DEFAULT_END)).unwrap())
    });

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let index = CharIndex::build(DEFAULT_START, DEFAULT_END).unwrap();

    let mut group = c.benchmark_group("search");
    group.bench_function("single_word", |b| {
        b.iter(|| index.search(black_box("digit")))
    });
    group.bench_function("narrowing_pair", |b| {
        b.iter(|| index.search(black_box("eight digit")))
    });
    group.bench_function("wide_intersection", |b| {
        b.iter(|| index.search(black_box("latin capital letter")))
    });
    group.bench_function("miss", |b| {
        b.iter(|| index.search(black_box("borogove")))
    });
    group.finish();
}

criterion_group!(benches, bench_build, bench_search);
criterion_main!(benches);
