// Copyright 2026 the Bagwall Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=bagwall_tiling --heading-base-level=0

//! Bagwall Tiling: infinite addressing over a finite masonry layout.
//!
//! A [`Layout`](bagwall_masonry::Layout) covers one horizontal period and, per
//! column, one vertical period. This crate maps that finite layout onto an
//! unbounded plane:
//! - [`visible_instances`] / [`visit_instances`] enumerate every repeat of
//!   every item that intersects a world-space window.
//! - [`hit_test`] / [`hit_test_world`] are the exact inverse: they reduce a
//!   point into period-local space and find the item under it.
//!
//! Horizontal repeats use the single global period, so `x` only depends on
//! the column and `tx`. Vertical repeats use each column's own period, which
//! lets columns of different natural length lap independently while staying
//! aligned horizontally.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Size};
//! use bagwall_masonry::{MasonryConfig, PoolEntry, build_layout};
//! use bagwall_tiling::{hit_test_world, visible_instances};
//!
//! let config = MasonryConfig::default();
//! let pool: Vec<PoolEntry> = (1..=20)
//!     .map(|number| PoolEntry {
//!         catalog_index: 0,
//!         number,
//!         duplicate: 0,
//!         natural_size: Some(Size::new(300.0, 400.0)),
//!     })
//!     .collect();
//! let layout = build_layout(&pool, &config).unwrap();
//!
//! let window = Rect::new(-1200.0, -800.0, 1200.0, 800.0);
//! let instances = visible_instances(&layout, window);
//! assert!(!instances.is_empty());
//!
//! // Every emitted instance can be found again from a point inside it.
//! let first = instances[0];
//! let hit = hit_test_world(&layout, first.world.center()).unwrap();
//! assert_eq!((hit.item, hit.tile), (first.item, first.tile));
//! ```

mod address;
mod hit;

pub use address::{
    Instance, TileIndex, horizontal_tiles, vertical_tiles, visible_instances, visit_instances,
    world_rect,
};
pub use hit::{Hit, hit_test, hit_test_world, locate, wrap};
