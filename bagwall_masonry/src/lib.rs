// Copyright 2026 the Bagwall Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=bagwall_masonry --heading-base-level=0

//! Bagwall Masonry: column bin-packing for a seamlessly tiling wall.
//!
//! This crate turns a placement pool (a shuffled multiset of catalog items,
//! see [`PoolEntry`]) into a [`Layout`]: absolute positions for every entry
//! plus a per-column vertical period. It focuses on:
//! - Aspect-preserving fit of each item to a fixed column width.
//! - Shortest-column selection, so column lengths stay balanced.
//! - Keeping copies of the same item away from each other, both directly
//!   above/below and in the neighboring columns.
//!
//! It does **not** shuffle, fetch images, or know about cameras. Callers are
//! expected to:
//! - Build and shuffle the pool upstream (randomness never lives here).
//! - Resolve natural image sizes before building; entries without one are
//!   skipped silently.
//! - Address the finite layout in an unbounded world with the tiling crate.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Size;
//! use bagwall_masonry::{MasonryConfig, PoolEntry, build_layout};
//!
//! let config = MasonryConfig {
//!     column_count: 1,
//!     column_gutter: 10.0,
//!     side_padding: 0.0,
//!     global_period: 100.0,
//! };
//! let pool = [1, 2].map(|number| PoolEntry {
//!     catalog_index: 0,
//!     number,
//!     duplicate: 0,
//!     natural_size: Some(Size::new(100.0, 100.0)),
//! });
//!
//! let layout = build_layout(&pool, &config).unwrap();
//! assert_eq!(layout.items()[1].y(), 110.0);
//! assert_eq!(layout.column_period(0), 220.0);
//! ```
//!
//! ## Design notes
//!
//! - Placement never drops a resolved entry: when adjacency rules leave no
//!   column, the entry goes to the globally shortest one and the layout's
//!   [`LayoutStats::fallback_placements`] counter is bumped.
//! - A column's period includes the trailing gutter, so stacking the column
//!   on top of itself keeps the gutter rhythm.

mod config;
mod error;
mod layout;
mod types;

pub use config::MasonryConfig;
pub use error::LayoutError;
pub use layout::{Layout, LayoutStats, NEIGHBOR_BAND, build_layout};
pub use types::{PlacedItem, PoolEntry};
