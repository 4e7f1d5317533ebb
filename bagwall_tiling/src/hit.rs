// Copyright 2026 the Bagwall Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Inverse mapping: screen and world points back to layout items.

use bagwall_masonry::Layout;
use kurbo::Point;

use crate::TileIndex;
use crate::address::floor_index;

/// An item found under a point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Hit {
    /// Index into [`Layout::items`].
    pub item: usize,
    /// Repeat of the item that was hit.
    pub tile: TileIndex,
}

/// Reduces `coord` into `[0, period)`, returning the repeat index and the local value.
///
/// Returns `None` for non-positive periods. Coordinates past the last
/// representable tile clamp to it and come back outside `[0, period)`.
#[must_use]
pub fn wrap(coord: f64, period: f64) -> Option<(i64, f64)> {
    if !period.is_finite() || period <= 0.0 || !coord.is_finite() {
        return None;
    }
    let index = floor_index(coord / period);
    Some((index, coord - index as f64 * period))
}

/// Maps a world point into `column`'s period-local space.
///
/// Returns the tile the point falls in and the point relative to that tile.
#[must_use]
pub fn locate(layout: &Layout, column: usize, world: Point) -> Option<(TileIndex, Point)> {
    let (tx, x) = wrap(world.x, layout.global_period())?;
    let (ty, y) = wrap(world.y, layout.column_period(column))?;
    Some((TileIndex::new(tx, ty), Point::new(x, y)))
}

/// Finds the item under a world-space point.
///
/// Columns are checked from last to first and items within a column from
/// last placed to first, so later placements win. Box edges are inclusive.
/// A point over a gutter or padding yields `None`.
#[must_use]
pub fn hit_test_world(layout: &Layout, world: Point) -> Option<Hit> {
    for column in (0..layout.column_count()).rev() {
        let Some((tile, local)) = locate(layout, column, world) else {
            continue;
        };
        for &index in layout.column_items(column).iter().rev() {
            let rect = layout.items()[index].rect;
            if local.x >= rect.x0 && local.x <= rect.x1 && local.y >= rect.y0 && local.y <= rect.y1
            {
                return Some(Hit { item: index, tile });
            }
        }
    }
    None
}

/// Finds the item under a screen-space point for a camera at `camera_position`.
///
/// The world point is `screen + camera_position`.
#[must_use]
pub fn hit_test(layout: &Layout, screen: Point, camera_position: Point) -> Option<Hit> {
    hit_test_world(layout, screen + camera_position.to_vec2())
}

#[cfg(test)]
mod tests {
    use bagwall_masonry::{MasonryConfig, PoolEntry, build_layout};
    use kurbo::{Point, Size};

    use super::{Hit, hit_test, hit_test_world, wrap};
    use crate::TileIndex;

    fn two_column_layout() -> bagwall_masonry::Layout {
        let config = MasonryConfig {
            column_count: 2,
            column_gutter: 10.0,
            side_padding: 5.0,
            global_period: 220.0,
        };
        // Column width (220 - 10 - 10) / 2 = 100.
        let pool: Vec<PoolEntry> = [(1, 100.0), (2, 50.0), (3, 80.0)]
            .into_iter()
            .map(|(number, h)| PoolEntry {
                catalog_index: number as usize,
                number,
                duplicate: 0,
                natural_size: Some(Size::new(100.0, h)),
            })
            .collect();
        build_layout(&pool, &config).unwrap()
    }

    #[test]
    fn wrap_handles_negative_coordinates() {
        assert_eq!(wrap(250.0, 100.0), Some((2, 50.0)));
        assert_eq!(wrap(-25.0, 100.0), Some((-1, 75.0)));
        assert_eq!(wrap(-100.0, 100.0), Some((-1, 0.0)));
        assert_eq!(wrap(10.0, 0.0), None);
    }

    #[test]
    fn points_beyond_the_tile_range_miss() {
        let layout = two_column_layout();
        assert_eq!(wrap(1e30, 100.0).map(|(index, _)| index), Some(i64::MAX));
        assert_eq!(hit_test_world(&layout, Point::new(1e30, 1e30)), None);
        assert_eq!(hit_test_world(&layout, Point::new(-1e30, 50.0)), None);
    }

    #[test]
    fn hits_item_in_base_tile() {
        let layout = two_column_layout();
        // #1 sits in column 0 at (5, 0) .. (105, 100).
        let hit = hit_test_world(&layout, Point::new(50.0, 50.0)).unwrap();
        assert_eq!(layout.items()[hit.item].number(), 1);
        assert_eq!(hit.tile, TileIndex::new(0, 0));
    }

    #[test]
    fn hits_item_in_repeated_tiles() {
        let layout = two_column_layout();
        let p0 = layout.column_period(0);
        let world = Point::new(50.0 - 2.0 * 220.0, 50.0 + 3.0 * p0);
        let hit = hit_test_world(&layout, world).unwrap();
        assert_eq!(layout.items()[hit.item].number(), 1);
        assert_eq!(hit.tile, TileIndex::new(-2, 3));
    }

    #[test]
    fn gutters_and_padding_miss() {
        let layout = two_column_layout();
        // Left padding.
        assert_eq!(hit_test_world(&layout, Point::new(2.0, 10.0)), None);
        // Between the two columns.
        assert_eq!(hit_test_world(&layout, Point::new(110.0, 10.0)), None);
    }

    #[test]
    fn screen_points_are_offset_by_camera() {
        let layout = two_column_layout();
        let camera = Point::new(1000.0, -400.0);
        let expected = hit_test_world(&layout, Point::new(1050.0, -350.0));
        assert!(expected.is_some(), "a repeat of #3 lives there");
        assert_eq!(hit_test(&layout, Point::new(50.0, 50.0), camera), expected);
    }

    #[test]
    fn later_columns_win() {
        let layout = two_column_layout();
        // Column 1 holds #2 at (115, 0) .. (215, 50).
        let hit = hit_test_world(&layout, Point::new(150.0, 20.0)).unwrap();
        assert_eq!(
            hit,
            Hit {
                item: 1,
                tile: TileIndex::new(0, 0)
            }
        );
    }
}
