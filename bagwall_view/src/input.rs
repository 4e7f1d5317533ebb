// Copyright 2026 the Bagwall Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use bagwall_camera::{PointerId, PointerKind, WheelDelta};
use bagwall_catalog::CatalogItem;
use kurbo::Point;

/// One pointer sample in display coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    /// Which pointer.
    pub pointer: PointerId,
    /// Device behind the pointer.
    pub kind: PointerKind,
    /// Position on the display.
    pub pos: Point,
    /// Timestamp in milliseconds.
    pub time_ms: u64,
}

/// Input delivered to [`WallView::handle_input`](crate::WallView::handle_input).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// A pointer was pressed.
    PointerDown(PointerSample),
    /// A pointer moved, pressed or not.
    PointerMove(PointerSample),
    /// A pointer was released.
    PointerUp(PointerSample),
    /// The platform cancelled a pointer.
    PointerCancel(PointerId),
    /// The pointer left the wall surface.
    PointerLeave,
    /// A wheel or trackpad scroll.
    Wheel(WheelDelta),
}

/// Shows details for a tapped item.
///
/// While a detail view is open the wall is paused; the host calls
/// [`WallView::resume`](crate::WallView::resume) when it closes.
pub trait DetailView {
    /// Opens the detail view for `item`, returning `true` if it opened.
    fn open_detail(&mut self, item: &CatalogItem) -> bool;
}

/// Cursor the host should show over the wall.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CursorHint {
    /// Idle over empty wall.
    #[default]
    Grab,
    /// A drag is in progress.
    Grabbing,
    /// Over an item that can be opened.
    Pointer,
}
