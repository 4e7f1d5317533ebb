// Copyright 2026 the Bagwall Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use bagwall_masonry::PoolEntry;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::CatalogItem;

/// How many copies of each item go into a pool built from `unique_items` items.
///
/// Small selections get more copies so that a handful of search results
/// still fills the wall.
#[must_use]
pub fn duplicate_factor(unique_items: usize) -> u16 {
    match unique_items {
        0..=2 => 10,
        3..=5 => 6,
        _ => 3,
    }
}

/// Narrows `subset` to the distinct, in-range, placeable catalog indices.
///
/// The result is ascending with each index once, so a selection that names
/// an item twice does not inflate its share of the pool.
#[must_use]
pub fn placeable_selection(items: &[CatalogItem], subset: &[usize]) -> Vec<usize> {
    let mut selection: Vec<usize> = subset
        .iter()
        .copied()
        .filter(|&index| items.get(index).is_some_and(CatalogItem::is_placeable))
        .collect();
    selection.sort_unstable();
    selection.dedup();
    selection
}

/// Builds a shuffled placement pool from the items at `subset`.
///
/// The subset is narrowed with [`placeable_selection`] first; each
/// remaining item appears [`duplicate_factor`] times with duplicate tags
/// `0..k`. The order is a uniform shuffle drawn from `rng`.
pub fn build_pool<R: Rng + ?Sized>(
    items: &[CatalogItem],
    subset: &[usize],
    rng: &mut R,
) -> Vec<PoolEntry> {
    let placeable = placeable_selection(items, subset);
    let copies = duplicate_factor(placeable.len());

    let mut pool = Vec::with_capacity(placeable.len() * usize::from(copies));
    for duplicate in 0..copies {
        pool.extend(placeable.iter().map(|&index| {
            let item = &items[index];
            PoolEntry {
                catalog_index: index,
                number: item.number,
                duplicate,
                natural_size: item.natural_size,
            }
        }));
    }
    pool.shuffle(rng);

    tracing::debug!(
        unique = placeable.len(),
        dropped = subset.len() - placeable.len(),
        copies,
        entries = pool.len(),
        "pool built"
    );
    pool
}
