// Copyright 2026 the Bagwall Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Forward mapping: layout items to world-space instances.

use core::ops::RangeInclusive;

use bagwall_masonry::Layout;
use kurbo::{Rect, Vec2};

/// Repeat index of one tile, horizontally (`tx`) and per column vertically (`ty`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileIndex {
    /// Horizontal repeat, in units of the global period.
    pub tx: i64,
    /// Vertical repeat, in units of the owning column's period.
    pub ty: i64,
}

impl TileIndex {
    /// Creates a tile index.
    #[must_use]
    pub const fn new(tx: i64, ty: i64) -> Self {
        Self { tx, ty }
    }
}

/// One spatial occurrence of a placed item.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Instance {
    /// Index into [`Layout::items`].
    pub item: usize,
    /// Which repeat of the item this is.
    pub tile: TileIndex,
    /// World-space bounding box.
    pub world: Rect,
}

/// Floors `value` to a tile index.
#[expect(
    clippy::cast_possible_truncation,
    reason = "The cast saturates, so coordinates beyond the i64 range clamp to the outermost tile"
)]
pub(crate) fn floor_index(value: f64) -> i64 {
    value.floor() as i64
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "The cast saturates, so coordinates beyond the i64 range clamp to the outermost tile"
)]
fn ceil_index(value: f64) -> i64 {
    value.ceil() as i64
}

/// Horizontal repeat indices that may intersect `[left, right]`.
///
/// The range is `floor(left / period) - 1 ..= ceil(right / period) + 1`. The
/// extra tile on each side covers items that straddle a period edge. Both
/// ends saturate at the limits of `i64`.
#[must_use]
pub fn horizontal_tiles(period: f64, left: f64, right: f64) -> RangeInclusive<i64> {
    tile_range(period, left, right).unwrap_or(1..=0)
}

/// Vertical repeat indices of a column with `period` that may intersect `[top, bottom]`.
///
/// Returns `None` for empty columns (a period of zero).
#[must_use]
pub fn vertical_tiles(period: f64, top: f64, bottom: f64) -> Option<RangeInclusive<i64>> {
    tile_range(period, top, bottom)
}

fn tile_range(period: f64, start: f64, end: f64) -> Option<RangeInclusive<i64>> {
    if !period.is_finite() || period <= 0.0 || !start.is_finite() || !end.is_finite() {
        return None;
    }
    let first = floor_index(start / period).saturating_sub(1);
    let last = ceil_index(end / period).saturating_add(1);
    Some(first..=last)
}

/// World-space box of `item` at `tile`.
///
/// Returns `None` if `item` is out of range.
#[must_use]
pub fn world_rect(layout: &Layout, item: usize, tile: TileIndex) -> Option<Rect> {
    let placed = layout.item(item)?;
    let offset = Vec2::new(
        tile.tx as f64 * layout.global_period(),
        tile.ty as f64 * layout.column_period(placed.column),
    );
    Some(placed.rect + offset)
}

/// Calls `f` for every instance whose box intersects `window`.
///
/// `window` is a world-space rectangle, usually the viewport already expanded
/// by a margin. Boxes that only touch the window edge count as intersecting.
/// Instances are visited column by column, then by vertical tile, then in
/// placement order, then by horizontal tile.
pub fn visit_instances<F: FnMut(Instance)>(layout: &Layout, window: Rect, mut f: F) {
    let window = window.abs();
    let global = layout.global_period();
    let columns = horizontal_tiles(global, window.x0, window.x1);

    for column in 0..layout.column_count() {
        let members = layout.column_items(column);
        if members.is_empty() {
            continue;
        }
        let period = layout.column_period(column);
        let Some(rows) = vertical_tiles(period, window.y0, window.y1) else {
            continue;
        };
        for ty in rows {
            let dy = ty as f64 * period;
            for &index in members {
                let rect = layout.items()[index].rect;
                if rect.y1 + dy < window.y0 || rect.y0 + dy > window.y1 {
                    continue;
                }
                for tx in columns.clone() {
                    let dx = tx as f64 * global;
                    if rect.x1 + dx < window.x0 || rect.x0 + dx > window.x1 {
                        continue;
                    }
                    f(Instance {
                        item: index,
                        tile: TileIndex::new(tx, ty),
                        world: rect + Vec2::new(dx, dy),
                    });
                }
            }
        }
    }
}

/// Collects every instance whose box intersects `window`.
///
/// See [`visit_instances`] for the visiting order.
#[must_use]
pub fn visible_instances(layout: &Layout, window: Rect) -> Vec<Instance> {
    let mut out = Vec::new();
    visit_instances(layout, window, |instance| out.push(instance));
    out
}
