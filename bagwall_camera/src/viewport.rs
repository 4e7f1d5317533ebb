// Copyright 2026 the Bagwall Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size, Vec2};

/// The world-space window seen through the display for one frame.
///
/// The camera position is the world point shown at the display's top-left
/// corner; there is no zoom, so one world unit is one logical pixel. A
/// window is derived fresh every frame and never stored across frames.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportWindow {
    origin: Point,
    size: Size,
}

impl ViewportWindow {
    /// Creates the window for a camera at `position` and a display of `size`.
    #[must_use]
    pub fn new(position: Point, size: Size) -> Self {
        Self {
            origin: position,
            size: Size::new(size.width.max(0.0), size.height.max(0.0)),
        }
    }

    /// World point at the display's top-left corner.
    #[must_use]
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Display size in logical pixels.
    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    /// The exactly visible world rectangle.
    #[must_use]
    pub fn world_rect(&self) -> Rect {
        Rect::from_origin_size(self.origin, self.size)
    }

    /// The visible world rectangle grown by `margin` on every side.
    ///
    /// Used to pre-render content just off screen and to decide how long
    /// visuals stay alive after scrolling out of view.
    #[must_use]
    pub fn expanded(&self, margin: f64) -> Rect {
        self.world_rect().inflate(margin, margin)
    }

    /// Converts a world-space point into display coordinates.
    #[must_use]
    pub fn world_to_screen_point(&self, pt: Point) -> Point {
        pt - self.origin.to_vec2()
    }

    /// Converts a display-space point into world coordinates.
    #[must_use]
    pub fn screen_to_world_point(&self, pt: Point) -> Point {
        pt + self.origin.to_vec2()
    }

    /// Converts a world-space rectangle into display coordinates.
    #[must_use]
    pub fn world_to_screen_rect(&self, rect: Rect) -> Rect {
        rect - self.origin.to_vec2()
    }

    /// Camera position that puts `world_pt` at the center of a display of `size`.
    #[must_use]
    pub fn centered_on(world_pt: Point, size: Size) -> Point {
        world_pt - Vec2::new(size.width / 2.0, size.height / 2.0)
    }
}
