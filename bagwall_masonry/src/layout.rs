// Copyright 2026 the Bagwall Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Rect;
use smallvec::SmallVec;

use crate::{LayoutError, MasonryConfig, PlacedItem, PoolEntry};

/// Vertical band, as a multiple of the taller item, inside which a same-number
/// item in a neighboring column counts as adjacent.
pub const NEIGHBOR_BAND: f64 = 1.5;

/// Counters describing how a layout was produced.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LayoutStats {
    /// Entries that received a position.
    pub placed: usize,
    /// Entries skipped because their image size was never resolved.
    pub skipped_unresolved: usize,
    /// Entries that had no adjacency-safe column and went to the shortest one.
    pub fallback_placements: usize,
}

/// The result of packing a pool into columns.
///
/// A layout covers one horizontal period (`global_period`) and, per column,
/// one vertical period (`column_period`). Both repeat seamlessly; see the
/// tiling crate for how they are addressed in world space.
#[derive(Clone, Debug)]
pub struct Layout {
    config: MasonryConfig,
    column_width: f64,
    items: Vec<PlacedItem>,
    column_periods: Vec<f64>,
    column_members: Vec<Vec<usize>>,
    stats: LayoutStats,
}

impl Layout {
    /// Configuration the layout was built with.
    #[must_use]
    pub fn config(&self) -> &MasonryConfig {
        &self.config
    }

    /// Number of columns.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.column_periods.len()
    }

    /// Width shared by every placed item.
    #[must_use]
    pub fn column_width(&self) -> f64 {
        self.column_width
    }

    /// Horizontal tiling width.
    #[must_use]
    pub fn global_period(&self) -> f64 {
        self.config.global_period
    }

    /// Vertical distance after which `column` repeats.
    ///
    /// This is the sum of item heights plus one gutter per item, so it
    /// includes the trailing gutter. Empty columns have a period of `0.0`.
    #[must_use]
    pub fn column_period(&self, column: usize) -> f64 {
        self.column_periods.get(column).copied().unwrap_or(0.0)
    }

    /// All column periods, indexed by column.
    #[must_use]
    pub fn column_periods(&self) -> &[f64] {
        &self.column_periods
    }

    /// Placed items in placement order.
    #[must_use]
    pub fn items(&self) -> &[PlacedItem] {
        &self.items
    }

    /// Returns the item at `index` in placement order.
    #[must_use]
    pub fn item(&self, index: usize) -> Option<&PlacedItem> {
        self.items.get(index)
    }

    /// Indices (into [`Layout::items`]) of the items in `column`, top to bottom.
    #[must_use]
    pub fn column_items(&self, column: usize) -> &[usize] {
        self.column_members
            .get(column)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Returns `true` when nothing was placed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Counters from the build.
    #[must_use]
    pub fn stats(&self) -> LayoutStats {
        self.stats
    }

    /// The item a freshly built layout should be centered on.
    ///
    /// This is the first item placed in the middle column, or the first item
    /// overall when the middle column is empty.
    #[must_use]
    pub fn featured_item(&self) -> Option<usize> {
        let middle = self.column_count() / 2;
        self.column_items(middle)
            .first()
            .copied()
            .or_else(|| (!self.items.is_empty()).then_some(0))
    }
}

/// Packs `pool` into columns, in pool order.
///
/// For each entry the item is scaled to the column width and placed in the
/// shortest column that does not already end with the same number and whose
/// neighbors hold no same-number item in a nearby band (see
/// [`NEIGHBOR_BAND`]). When every column is ruled out the entry goes to the
/// globally shortest column, so every resolved entry is placed exactly once.
/// Entries without a resolved size are skipped silently.
///
/// The function is deterministic: any randomness lives in the pool order.
pub fn build_layout(pool: &[PoolEntry], config: &MasonryConfig) -> Result<Layout, LayoutError> {
    config.validate()?;

    let columns = config.column_count;
    let width = config.column_width();
    let gutter = config.column_gutter;

    let mut heights = vec![0.0_f64; columns];
    let mut last_number: Vec<Option<u32>> = vec![None; columns];
    let mut members: Vec<Vec<usize>> = vec![Vec::new(); columns];
    let mut items = Vec::with_capacity(pool.len());
    let mut stats = LayoutStats::default();

    for entry in pool {
        let Some(height) = entry.fitted_height(width) else {
            tracing::trace!(number = entry.number, "skipping entry with unresolved size");
            stats.skipped_unresolved += 1;
            continue;
        };

        let candidates: SmallVec<[usize; 16]> = (0..columns)
            .filter(|&c| last_number[c] != Some(entry.number))
            .filter(|&c| {
                !has_neighbor_duplicate(&items, &members, c, entry.number, heights[c], height)
            })
            .collect();

        let column = match shortest_of(&heights, candidates.iter().copied()) {
            Some(c) => c,
            None => {
                stats.fallback_placements += 1;
                shortest_of(&heights, 0..columns).unwrap_or(0)
            }
        };

        let x = config.column_x(column);
        let y = heights[column];
        items.push(PlacedItem {
            entry: *entry,
            rect: Rect::new(x, y, x + width, y + height),
            column,
        });
        members[column].push(items.len() - 1);
        last_number[column] = Some(entry.number);
        heights[column] += height + gutter;
    }

    stats.placed = items.len();
    tracing::debug!(
        placed = stats.placed,
        skipped = stats.skipped_unresolved,
        fallbacks = stats.fallback_placements,
        columns,
        "built masonry layout"
    );

    Ok(Layout {
        config: *config,
        column_width: width,
        items,
        column_periods: heights,
        column_members: members,
        stats,
    })
}

/// Returns `true` if a column beside `column` holds `number` near height `y`.
fn has_neighbor_duplicate(
    items: &[PlacedItem],
    members: &[Vec<usize>],
    column: usize,
    number: u32,
    y: f64,
    height: f64,
) -> bool {
    let left = column.checked_sub(1);
    let right = (column + 1 < members.len()).then_some(column + 1);
    left.into_iter().chain(right).any(|n| {
        members[n].iter().map(|&i| &items[i]).any(|p| {
            p.number() == number && (p.y() - y).abs() < p.height().max(height) * NEIGHBOR_BAND
        })
    })
}

/// First column with the smallest accumulated height among `columns`.
fn shortest_of(heights: &[f64], columns: impl Iterator<Item = usize>) -> Option<usize> {
    let mut best: Option<usize> = None;
    for c in columns {
        match best {
            Some(b) if heights[c] >= heights[b] => {}
            _ => best = Some(c),
        }
    }
    best
}
