// Copyright 2026 the Bagwall Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::io;
use std::path::PathBuf;

/// A catalog that cannot back a wall.
///
/// Every variant is fatal to the view: without a catalog there is nothing to
/// lay out.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The catalog source could not be read.
    #[error("failed to read catalog from {}", path.display())]
    Io {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// The catalog is not a JSON array of objects.
    #[error("malformed catalog JSON")]
    Json(#[from] serde_json::Error),
    /// A record has no `number` field.
    #[error("catalog record {index} has no number")]
    MissingNumber {
        /// Position of the record in the source array.
        index: usize,
    },
    /// A record's `number` is not a positive integer.
    #[error("catalog record {index} has invalid number {value}")]
    InvalidNumber {
        /// Position of the record in the source array.
        index: usize,
        /// The offending value, as JSON.
        value: String,
    },
    /// Two records share a `number`.
    #[error("catalog number {0} appears more than once")]
    DuplicateNumber(u32),
    /// The catalog has no records.
    #[error("catalog is empty")]
    Empty,
}

/// Failure to learn one image's natural size.
///
/// Never fatal: the item is excluded or drawn as a placeholder.
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    /// The image could not be read.
    #[error("failed to read image {}", path.display())]
    Io {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// The image data could not be decoded.
    #[error("failed to decode image: {0}")]
    Decode(String),
    /// The image decoded to an unusable size.
    #[error("image has unusable size {width}x{height}")]
    InvalidSize {
        /// Decoded width.
        width: f64,
        /// Decoded height.
        height: f64,
    },
    /// Decoding did not finish within its time budget.
    #[error("reading the image size timed out")]
    TimedOut,
}
