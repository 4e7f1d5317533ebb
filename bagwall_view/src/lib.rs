// Copyright 2026 the Bagwall Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=bagwall_view --heading-base-level=0

//! Bagwall View: the context object that runs an infinite coffee-bag wall.
//!
//! [`WallView`] ties the other Bagwall crates together. It owns the catalog,
//! the current masonry layout, the camera, and the set of visuals realized on
//! screen, and it exposes the handful of entry points a host needs:
//!
//! - [`WallView::handle_input`] routes pointer and wheel events to the camera,
//!   tracks hover, and turns taps into [`DetailView::open_detail`] calls.
//! - [`WallView::frame`] runs once per display refresh. It steps the camera,
//!   queries the visible instances, and diffs them against the visuals it
//!   already realized, so a [`Renderer`] only sees incremental
//!   position/release commands.
//! - [`WallView::search`] and [`WallView::search_now`] filter the catalog and
//!   rebuild the layout, debounced through a [`Debouncer`].
//! - [`WallView::pause`] and [`WallView::resume`] hold the wall while a detail
//!   view covers it.
//!
//! Hover zoom and the fade-in after a rebuild are per-frame easings from
//! `bagwall_camera::ease`, the same step the camera spring uses.
//!
//! Everything is configured through [`WallConfig`], which deserializes from
//! TOML with every field defaulted.
//!
//! The view is single-threaded: all of its state changes inside
//! `handle_input` and `frame`. A multi-threaded host must confine the view to
//! one task.

mod config;
mod debounce;
mod error;
mod input;
mod render;
mod wall;

pub use config::{ViewConfig, WallConfig};
pub use debounce::Debouncer;
pub use error::{ConfigError, ViewError};
pub use input::{CursorHint, DetailView, InputEvent, PointerSample};
pub use render::{FrameReport, FrameStats, InstanceKey, Renderer, VisualInstance};
pub use wall::WallView;
