// Copyright 2026 the Bagwall Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use bagwall_camera::WheelDelta;
use bagwall_catalog::{AssetPaths, CatalogItem, CatalogRecord};
use bagwall_view::{
    DetailView, InputEvent, InstanceKey, Renderer, VisualInstance, WallConfig, WallView,
};
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::Size;

/// Renderer that only touches its inputs.
struct Sink(u64);

impl Renderer for Sink {
    fn position_visual(&mut self, visual: &VisualInstance) {
        self.0 = self.0.wrapping_add(black_box(visual.key.item) as u64);
    }

    fn release_visual(&mut self, key: InstanceKey) {
        self.0 = self.0.wrapping_sub(black_box(key.item) as u64);
    }
}

struct NoDetail;

impl DetailView for NoDetail {
    fn open_detail(&mut self, _item: &CatalogItem) -> bool {
        false
    }
}

fn wall() -> Option<WallView> {
    let items: Vec<CatalogItem> = (1..=26)
        .map(|number| {
            let record = CatalogRecord {
                number,
                ..CatalogRecord::default()
            };
            let mut item = CatalogItem::from_record(&record, &AssetPaths::default());
            item.natural_size = Some(Size::new(800.0, 1000.0 + f64::from(number % 7) * 60.0));
            item
        })
        .collect();
    let mut config = WallConfig::default();
    config.view.seed = Some(5);
    WallView::new(items, config, Size::new(1920.0, 1080.0)).ok()
}

fn bench_frame(c: &mut Criterion) {
    let Some(mut steady) = wall() else {
        return;
    };
    let mut sink = Sink(0);
    steady.frame(&mut sink);
    c.bench_function("frame/steady", |b| b.iter(|| steady.frame(&mut sink)));

    let Some(mut panning) = wall() else {
        return;
    };
    let scroll = InputEvent::Wheel(WheelDelta {
        dx: 9.0,
        dy: 40.0,
        shift: false,
    });
    c.bench_function("frame/panning", |b| {
        b.iter(|| {
            panning.handle_input(scroll, &mut NoDetail);
            panning.frame(&mut sink)
        });
    });
}

criterion_group!(benches, bench_frame);
criterion_main!(benches);
