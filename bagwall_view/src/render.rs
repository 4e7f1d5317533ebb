// Copyright 2026 the Bagwall Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use bagwall_tiling::TileIndex;
use kurbo::Rect;

/// Identity of one realized visual.
///
/// A visual is one repeat (`tile`) of one placed item (`item`) in one layout
/// `generation`. Rebuilding the layout bumps the generation, so visuals of the
/// old layout never collide with the new one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InstanceKey {
    /// Layout generation the visual belongs to.
    pub generation: u64,
    /// Index into the layout's placed items.
    pub item: usize,
    /// Repeat of the item.
    pub tile: TileIndex,
}

/// Everything a renderer needs to place one visual.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisualInstance {
    /// Stable identity across frames.
    pub key: InstanceKey,
    /// Index of the backing item in the view's catalog.
    pub catalog_index: usize,
    /// Catalog number of the backing item.
    pub number: u32,
    /// Unscaled bounds in world space.
    pub world: Rect,
    /// Bounds on the display, including any hover zoom around the center.
    pub screen: Rect,
    /// Hover zoom applied to `screen`; `1.0` at rest.
    pub scale: f64,
    /// Opacity of the image.
    pub alpha: f64,
    /// Draw a placeholder box: the image is unavailable, or the wall is
    /// still early in its fade-in.
    pub placeholder: bool,
}

/// Receives positioning commands for realized visuals.
///
/// This is a retained interface: a visual stays on screen from the first
/// [`position_visual`](Self::position_visual) for its key until
/// [`release_visual`](Self::release_visual). A renderer typically keeps a
/// pool of image elements keyed by [`InstanceKey`].
pub trait Renderer {
    /// Creates or moves the visual for `visual.key`.
    fn position_visual(&mut self, visual: &VisualInstance);

    /// Removes the visual for `key`.
    fn release_visual(&mut self, key: InstanceKey);

    /// Shows a human-readable failure in place of the wall.
    fn show_failure(&mut self, message: &str) {
        let _ = message;
    }
}

/// Counts from one [`WallView::frame`](crate::WallView::frame).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Visuals positioned for the first time.
    pub added: usize,
    /// Visuals that already existed and were repositioned.
    pub updated: usize,
    /// Visuals released.
    pub released: usize,
    /// Visuals alive after the frame.
    pub active: usize,
}

/// Outcome of one frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameReport {
    /// The view is paused; nothing was advanced or drawn.
    Paused,
    /// The frame ran.
    Drawn(FrameStats),
}

impl FrameReport {
    /// Stats of a drawn frame.
    #[must_use]
    pub fn stats(&self) -> Option<FrameStats> {
        match self {
            Self::Paused => None,
            Self::Drawn(stats) => Some(*stats),
        }
    }
}
