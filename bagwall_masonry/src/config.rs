// Copyright 2026 the Bagwall Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::LayoutError;

/// Geometry of one horizontal period of the wall.
///
/// The global period is the fixed horizontal tiling width. Columns are laid
/// out inside it after `side_padding` on both edges, separated by
/// `column_gutter`. The same gutter is also used vertically between items in
/// a column.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MasonryConfig {
    /// Number of columns in one horizontal period.
    pub column_count: usize,
    /// Gap between adjacent columns and between stacked items.
    pub column_gutter: f64,
    /// Empty band at the left and right edge of the period.
    pub side_padding: f64,
    /// Horizontal tiling width, independent of content.
    pub global_period: f64,
}

impl Default for MasonryConfig {
    fn default() -> Self {
        Self {
            column_count: 10,
            column_gutter: 60.0,
            side_padding: 30.0,
            global_period: 2400.0,
        }
    }
}

impl MasonryConfig {
    /// Width every placed item is scaled to.
    ///
    /// `(global_period - 2 * side_padding - gutter * (columns - 1)) / columns`.
    /// Returns a non-positive value for degenerate configurations; see
    /// [`MasonryConfig::validate`].
    #[must_use]
    pub fn column_width(&self) -> f64 {
        if self.column_count == 0 {
            return 0.0;
        }
        let cols = self.column_count as f64;
        let gutters = self.column_gutter * (cols - 1.0);
        (self.global_period - self.side_padding * 2.0 - gutters) / cols
    }

    /// Left edge of column `column` inside the period.
    #[must_use]
    pub fn column_x(&self, column: usize) -> f64 {
        self.side_padding + column as f64 * (self.column_width() + self.column_gutter)
    }

    /// Checks that the configuration describes a usable layout.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.column_count == 0 {
            return Err(LayoutError::NoColumns);
        }
        if !self.global_period.is_finite() || self.global_period <= 0.0 {
            return Err(LayoutError::InvalidPeriod(self.global_period));
        }
        if !self.column_gutter.is_finite() || self.column_gutter < 0.0 {
            return Err(LayoutError::InvalidGutter(self.column_gutter));
        }
        if !self.side_padding.is_finite() || self.side_padding < 0.0 {
            return Err(LayoutError::InvalidPadding(self.side_padding));
        }
        let width = self.column_width();
        if !width.is_finite() || width <= 0.0 {
            return Err(LayoutError::ColumnsDoNotFit {
                column_count: self.column_count,
                column_width: width,
            });
        }
        Ok(())
    }
}
