// Copyright 2026 the Bagwall Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! From raw JSON to a laid-out pool.

use std::io::Write as _;

use bagwall_catalog::{
    AssetPaths, CatalogError, CatalogItem, ProbeError, UnresolvedPolicy, build_pool,
    filter_catalog, load_catalog, parse_catalog, resolve_dimensions,
};
use bagwall_masonry::{MasonryConfig, build_layout};
use kurbo::Size;
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn catalog_json(count: u32) -> String {
    let records: Vec<String> = (1..=count)
        .map(|n| format!(r#"{{"number": {n}, "name": "Coffee {n}", "tags": ["lot-{}"]}}"#, n % 4))
        .collect();
    format!("[{}]", records.join(","))
}

fn probe_with_timeouts(item: &CatalogItem) -> Result<Size, ProbeError> {
    if item.number % 7 == 0 {
        Err(ProbeError::TimedOut)
    } else {
        Ok(Size::new(500.0, 500.0 + f64::from(item.number % 3) * 250.0))
    }
}

#[test]
fn unresolved_items_never_reach_the_layout() {
    let records = parse_catalog(&catalog_json(30)).unwrap();
    let mut items = CatalogItem::from_records(&records, &AssetPaths::default());
    let report = resolve_dimensions(&mut items, &mut probe_with_timeouts, UnresolvedPolicy::Exclude);
    assert_eq!(report.excluded, [7, 14, 21, 28]);

    let all: Vec<usize> = (0..items.len()).collect();
    let pool = build_pool(&items, &all, &mut StdRng::seed_from_u64(9));
    let layout = build_layout(&pool, &MasonryConfig::default()).unwrap();
    assert_eq!(layout.items().len(), 26 * 3);
    assert!(layout.items().iter().all(|placed| placed.number() % 7 != 0));
}

#[test]
fn empty_search_rebuilds_from_everything() {
    let records = parse_catalog(&catalog_json(12)).unwrap();
    let mut items = CatalogItem::from_records(&records, &AssetPaths::default());
    resolve_dimensions(&mut items, &mut probe_with_timeouts, UnresolvedPolicy::Exclude);

    let result = filter_catalog(&items, "no such coffee");
    assert!(result.fell_back);
    let pool = build_pool(&items, &result.indices, &mut StdRng::seed_from_u64(1));
    let layout = build_layout(&pool, &MasonryConfig::default()).unwrap();
    assert!(!layout.is_empty());
}

#[test]
fn load_reports_missing_file() {
    let err = load_catalog("/definitely/not/here/coffee.json").unwrap_err();
    assert!(matches!(err, CatalogError::Io { .. }));
}

#[test]
fn load_reads_file() {
    let path = std::env::temp_dir().join(format!("bagwall-catalog-{}.json", std::process::id()));
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(catalog_json(3).as_bytes()).unwrap();
    drop(file);
    let records = load_catalog(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(records.len(), 3);
}

proptest! {
    #[test]
    fn pool_holds_exactly_k_copies_of_the_selection(
        count in 1_u32..40,
        picks in prop::collection::vec(any::<prop::sample::Index>(), 0..40),
        seed in any::<u64>(),
    ) {
        let records = parse_catalog(&catalog_json(count)).unwrap();
        let mut items = CatalogItem::from_records(&records, &AssetPaths::default());
        resolve_dimensions(&mut items, &mut probe_with_timeouts, UnresolvedPolicy::Exclude);

        let mut subset: Vec<usize> = picks.iter().map(|p| p.index(items.len())).collect();
        subset.sort_unstable();
        subset.dedup();
        let placeable = subset.iter().filter(|&&i| items[i].is_placeable()).count();

        let pool = build_pool(&items, &subset, &mut StdRng::seed_from_u64(seed));
        let k = usize::from(bagwall_catalog::duplicate_factor(placeable));
        prop_assert_eq!(pool.len(), placeable * k);
        for &index in &subset {
            let copies = pool.iter().filter(|e| e.catalog_index == index).count();
            let expected = if items[index].is_placeable() { k } else { 0 };
            prop_assert_eq!(copies, expected);
        }
    }
}
