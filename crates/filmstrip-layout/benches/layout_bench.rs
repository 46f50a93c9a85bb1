//! Benchmarks for the thumbnail sizing engine.
//!
//! Run with: cargo bench -p filmstrip-layout

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use filmstrip_layout::{
    GridShape, HorizontalSizer, LayoutCache, LayoutCacheKey, LayoutFlags, Size, TileSizer,
};
use std::hint::black_box;

fn bench_tile_compute(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout/tile_compute");
    let sizer = TileSizer::new();
    let viewport = Size::new(1920, 1080);
    let flags = LayoutFlags {
        panel_open: true,
        panel_reserved_width: 315,
        responsive_disabled: false,
    };

    for (columns, rows) in [(1u16, 1u16), (2, 2), (5, 3), (10, 8)] {
        let grid = GridShape::new(columns, rows);
        group.bench_with_input(
            BenchmarkId::new("grid", format!("{columns}x{rows}")),
            &grid,
            |b, &grid| b.iter(|| black_box(sizer.compute(grid, viewport, flags))),
        );
    }

    group.finish();
}

fn bench_horizontal_compute(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout/horizontal_compute");
    let sizer = HorizontalSizer::new();

    for height in [0u32, 180, 480, 2160] {
        group.bench_with_input(BenchmarkId::new("height", height), &height, |b, &h| {
            b.iter(|| black_box(sizer.compute(h)))
        });
    }

    group.finish();
}

fn bench_cached_compute(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout/cached_compute");
    let sizer = TileSizer::new();
    let grid = GridShape::new(4, 2);
    let viewport = Size::new(1280, 720);
    let flags = LayoutFlags::default();
    let key = LayoutCacheKey::new(grid, viewport, flags);

    group.bench_function("hit", |b| {
        let mut cache = LayoutCache::default();
        cache.get_or_compute(key, || sizer.compute(grid, viewport, flags));
        b.iter(|| black_box(cache.get_or_compute(key, || sizer.compute(grid, viewport, flags))));
    });

    group.bench_function("miss", |b| {
        b.iter(|| {
            let mut cache = LayoutCache::default();
            black_box(cache.get_or_compute(key, || sizer.compute(grid, viewport, flags)))
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_tile_compute,
    bench_horizontal_compute,
    bench_cached_compute
);
criterion_main!(benches);
