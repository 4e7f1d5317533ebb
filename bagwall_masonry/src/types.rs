// Copyright 2026 the Bagwall Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Rect, Size};

/// One slot of the placement pool.
///
/// The pool is a multiset of catalog items: every item appears several times,
/// distinguished by `duplicate`. The engine only needs the identity `number`
/// and the decoded image size; `catalog_index` lets callers get back to their
/// own item record.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PoolEntry {
    /// Index of the item in the caller's catalog.
    pub catalog_index: usize,
    /// Unique positive identity of the catalog item.
    pub number: u32,
    /// Which copy of the item this entry is (`0..k`).
    pub duplicate: u16,
    /// Natural pixel size of the item's image, if it was resolved.
    pub natural_size: Option<Size>,
}

impl PoolEntry {
    /// Returns the natural size when both sides are finite and positive.
    #[must_use]
    pub fn resolved_size(&self) -> Option<Size> {
        self.natural_size.filter(|s| {
            s.width.is_finite() && s.height.is_finite() && s.width > 0.0 && s.height > 0.0
        })
    }

    /// Height of this entry once scaled to `column_width`, preserving aspect ratio.
    #[must_use]
    pub fn fitted_height(&self, column_width: f64) -> Option<f64> {
        self.resolved_size()
            .map(|s| s.height * (column_width / s.width))
    }
}

/// A pool entry with its final position in the layout.
///
/// Coordinates are layout-local: `x` lies inside `[0, global_period)` and
/// `y + height` never exceeds the owning column's period.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacedItem {
    /// The entry that was placed.
    pub entry: PoolEntry,
    /// Layout-local bounding box.
    pub rect: Rect,
    /// Owning column, 0-indexed.
    pub column: usize,
}

impl PlacedItem {
    /// Identity of the underlying catalog item.
    #[must_use]
    pub fn number(&self) -> u32 {
        self.entry.number
    }

    /// Left edge.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.rect.x0
    }

    /// Top edge.
    #[must_use]
    pub fn y(&self) -> f64 {
        self.rect.y0
    }

    /// Placed width (the column width).
    #[must_use]
    pub fn width(&self) -> f64 {
        self.rect.width()
    }

    /// Placed height.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.rect.height()
    }
}
