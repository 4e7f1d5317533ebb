// Copyright 2026 the Bagwall Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use bagwall_catalog::{AssetPaths, CatalogItem, CatalogRecord, build_pool};
use bagwall_masonry::{MasonryConfig, build_layout};
use bagwall_tiling::{hit_test, visible_instances};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect, Size};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn catalog(count: u32) -> Vec<CatalogItem> {
    (1..=count)
        .map(|number| {
            let record = CatalogRecord {
                number,
                ..CatalogRecord::default()
            };
            let mut item = CatalogItem::from_record(&record, &AssetPaths::default());
            item.natural_size = Some(Size::new(800.0, 1000.0 + f64::from(number % 11) * 45.0));
            item
        })
        .collect()
}

fn bench_build_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_layout");
    let config = MasonryConfig::default();
    for count in [26_u32, 120, 600] {
        let items = catalog(count);
        let all: Vec<usize> = (0..items.len()).collect();
        let pool = build_pool(&items, &all, &mut StdRng::seed_from_u64(9));
        group.throughput(Throughput::Elements(pool.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &pool, |b, pool| {
            b.iter(|| build_layout(black_box(pool), &config));
        });
    }
    group.finish();
}

fn bench_queries(c: &mut Criterion) {
    let items = catalog(26);
    let all: Vec<usize> = (0..items.len()).collect();
    let pool = build_pool(&items, &all, &mut StdRng::seed_from_u64(9));
    let Ok(layout) = build_layout(&pool, &MasonryConfig::default()) else {
        return;
    };

    let mut group = c.benchmark_group("tiling");
    for (name, origin) in [
        ("origin", Point::ZERO),
        ("far", Point::new(-48_000.0, 1.2e7)),
    ] {
        let window = Rect::from_origin_size(origin, Size::new(1680.0, 1200.0));
        group.bench_with_input(BenchmarkId::new("visible_instances", name), &window, |b, w| {
            b.iter(|| visible_instances(&layout, black_box(*w)));
        });
        group.bench_with_input(BenchmarkId::new("hit_test", name), &origin, |b, o| {
            b.iter(|| hit_test(&layout, black_box(Point::new(640.0, 400.0)), *o));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_build_layout, bench_queries);
criterion_main!(benches);
