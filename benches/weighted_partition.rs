// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, Criterion};
use iced_mosaic::layout::partition;
use std::hint::black_box;

fn partition_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("weighted_partition");

    group.bench_function("three_equal_slots", |b| {
        b.iter(|| {
            let _ = black_box(partition(black_box(1080), &[1.0, 1.0, 1.0]).unwrap());
        });
    });

    group.bench_function("fractional_slots", |b| {
        b.iter(|| {
            let _ = black_box(partition(black_box(1081), &[0.15, 0.75, 0.10]).unwrap());
        });
    });

    let many: Vec<f32> = (1..=64).map(|i| i as f32).collect();
    group.bench_function("sixty_four_slots", |b| {
        b.iter(|| {
            let _ = black_box(partition(black_box(4096), black_box(&many)).unwrap());
        });
    });

    group.finish();
}

criterion_group!(benches, partition_benchmark);
criterion_main!(benches);
