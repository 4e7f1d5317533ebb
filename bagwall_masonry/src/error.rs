// Copyright 2026 the Bagwall Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Reasons a [`MasonryConfig`](crate::MasonryConfig) cannot produce a layout.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum LayoutError {
    /// The layout needs at least one column.
    #[error("layout needs at least one column")]
    NoColumns,
    /// The horizontal period must be finite and positive.
    #[error("global period must be finite and positive, got {0}")]
    InvalidPeriod(f64),
    /// The gutter must be finite and non-negative.
    #[error("column gutter must be finite and non-negative, got {0}")]
    InvalidGutter(f64),
    /// The side padding must be finite and non-negative.
    #[error("side padding must be finite and non-negative, got {0}")]
    InvalidPadding(f64),
    /// Padding and gutters leave no room for the requested columns.
    #[error("{column_count} columns do not fit in the period (column width {column_width})")]
    ColumnsDoNotFit {
        /// Requested column count.
        column_count: usize,
        /// Resulting (non-positive) column width.
        column_width: f64,
    },
}
