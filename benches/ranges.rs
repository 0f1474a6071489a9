//! Benchmarks for range resolution performance.
//!
//! Run with: cargo bench
//!
//! Results are saved to `target/criterion/` with HTML reports.
#![allow(
    clippy::expect_used,
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation
)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use gridviewport::{cols_to_render, rows_to_render, ColumnMetrics};

/// Benchmark the vertical resolver; pure scalar math, should be flat
fn bench_vertical(c: &mut Criterion) {
    c.bench_function("rows_to_render", |b| {
        b.iter(|| {
            rows_to_render(
                black_box(800.0),
                black_box(50.0),
                black_box(2950.0),
                black_box(1_000_000),
                black_box(12),
            )
        })
    });
}

/// Benchmark the horizontal resolver at growing column counts; the binary
/// search over column edges should scale O(log n)
fn bench_horizontal(c: &mut Criterion) {
    let mut group = c.benchmark_group("cols_to_render");
    for count in [1_000usize, 10_000, 100_000] {
        let widths: Vec<f64> = (0..count).map(|i| 60.0 + (i % 7) as f64 * 20.0).collect();
        let metrics = ColumnMetrics::new(&widths, 2, 1200.0);
        let mid_scroll = metrics.total_column_width / 2.0;

        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &metrics, |b, metrics| {
            b.iter(|| cols_to_render(black_box(metrics), black_box(mid_scroll)))
        });
    }
    group.finish();
}

/// Benchmark metrics construction, the O(n) part callers do on column change
fn bench_metrics_build(c: &mut Criterion) {
    let widths: Vec<f64> = (0..100_000).map(|i| 60.0 + (i % 7) as f64 * 20.0).collect();
    c.bench_function("column_metrics_new_100k", |b| {
        b.iter(|| ColumnMetrics::new(black_box(&widths), black_box(2), black_box(1200.0)))
    });
}

criterion_group!(benches, bench_vertical, bench_horizontal, bench_metrics_build);
criterion_main!(benches);
