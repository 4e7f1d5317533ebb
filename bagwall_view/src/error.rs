// Copyright 2026 the Bagwall Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::io;
use std::path::PathBuf;

use bagwall_catalog::CatalogError;
use bagwall_masonry::LayoutError;

/// A configuration that cannot be used.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config from {}", path.display())]
    Io {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// The text is not valid TOML for a [`WallConfig`](crate::WallConfig).
    #[error("malformed config")]
    Parse(#[from] toml::de::Error),
    /// The masonry geometry is unusable.
    #[error("invalid layout settings")]
    Layout(#[from] LayoutError),
    /// A view, camera, or tap value is out of range.
    #[error("invalid config: {0}")]
    Invalid(&'static str),
}

/// Failure to bring up or rebuild a wall.
#[derive(Debug, thiserror::Error)]
pub enum ViewError {
    /// The catalog could not be loaded.
    #[error("catalog unavailable")]
    Catalog(#[from] CatalogError),
    /// The configuration is unusable.
    #[error("configuration rejected")]
    Config(#[from] ConfigError),
    /// The layout could not be built.
    #[error("layout failed")]
    Layout(#[from] LayoutError),
    /// No catalog item has a usable image size.
    #[error("no catalog item can be shown")]
    NothingToShow,
}
