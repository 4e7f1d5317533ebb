// Copyright 2026 the Bagwall Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=bagwall_catalog --heading-base-level=0

//! Bagwall Catalog: everything that happens to catalog data before layout.
//!
//! The wall shows a catalog of coffee bags. Before the masonry engine can run,
//! the catalog goes through a short pipeline:
//!
//! 1. [`parse_catalog`] / [`load_catalog`] read a JSON array of records.
//!    Malformed input is a [`CatalogError`], which is fatal to the view.
//! 2. [`CatalogItem::from_records`] attaches image and recipe locations
//!    ([`AssetPaths`]).
//! 3. [`resolve_dimensions`] asks a [`DimensionProbe`] for each image's
//!    natural size. Failures are logged and handled by an
//!    [`UnresolvedPolicy`]; they never abort the pass.
//! 4. [`filter_catalog`] narrows the catalog for a search query, falling back
//!    to the whole catalog when nothing matches.
//! 5. [`build_pool`] narrows the selection to distinct placeable items
//!    ([`placeable_selection`]), then duplicates and shuffles it into the
//!    [`PoolEntry`](bagwall_masonry::PoolEntry) list the layout consumes.
//!
//! Randomness is always injected, so a seeded RNG gives a reproducible wall.
//!
//! ## Minimal example
//!
//! ```rust
//! use bagwall_catalog::{
//!     AssetPaths, CatalogItem, ProbeError, UnresolvedPolicy, build_pool, filter_catalog,
//!     parse_catalog, resolve_dimensions,
//! };
//! use kurbo::Size;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let records = parse_catalog(r#"[
//!     {"number": 1, "name": "Kenya Nyeri", "tags": ["fruity"]},
//!     {"number": 2, "name": "Brazil Cerrado", "tags": ["nutty"]}
//! ]"#).unwrap();
//! let mut items = CatalogItem::from_records(&records, &AssetPaths::default());
//!
//! let mut probe = |_: &CatalogItem| -> Result<Size, ProbeError> { Ok(Size::new(600.0, 800.0)) };
//! resolve_dimensions(&mut items, &mut probe, UnresolvedPolicy::Exclude);
//!
//! let found = filter_catalog(&items, "fruity");
//! assert_eq!(found.indices, [0]);
//!
//! let pool = build_pool(&items, &found.indices, &mut StdRng::seed_from_u64(3));
//! assert_eq!(pool.len(), 10);
//! ```

mod error;
mod item;
mod pool;
mod record;
mod resolve;
mod search;

pub use error::{CatalogError, ProbeError};
pub use item::{AssetPaths, CatalogItem};
pub use pool::{build_pool, duplicate_factor, placeable_selection};
pub use record::{CatalogRecord, load_catalog, parse_catalog};
pub use resolve::{DimensionProbe, ResolveReport, UnresolvedPolicy, resolve_dimensions};
pub use search::{SearchResult, filter_catalog};
