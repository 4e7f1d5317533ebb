// Copyright 2026 the Bagwall Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag tracker: pointer identity, movement deltas, and sample timing.
//!
//! ## Usage
//!
//! 1) Start tracking with [`DragTracker::start`], giving the pointer, its position and a timestamp.
//! 2) On each move of that pointer, call [`DragTracker::update`] to get the delta and elapsed time.
//! 3) End with [`DragTracker::end`] to reset state.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use bagwall_camera::drag::{DragTracker, PointerId};
//!
//! let mut drag = DragTracker::default();
//! drag.start(PointerId(1), Point::new(10.0, 20.0), 1_000);
//! assert!(drag.is_dragging());
//!
//! let step = drag.update(Point::new(15.0, 25.0), 1_008).unwrap();
//! assert_eq!(step.delta.x, 5.0);
//! assert_eq!(step.elapsed_ms, 8);
//! ```

use kurbo::{Point, Vec2};

/// Identifies one pointer (mouse, pen, or a single touch contact).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct PointerId(pub u64);

/// Movement reported by [`DragTracker::update`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragStep {
    /// Movement since the previous sample.
    pub delta: Vec2,
    /// Milliseconds since the previous sample; `0` when samples share a timestamp.
    pub elapsed_ms: u64,
}

/// Tracks one active drag.
#[derive(Debug, Clone, Default, Copy)]
pub struct DragTracker {
    /// Pointer that owns the drag.
    pub pointer: Option<PointerId>,
    /// Start position of the drag.
    pub start_pos: Option<Point>,
    /// Last recorded pointer position.
    pub last_pos: Option<Point>,
    /// Timestamp of the last sample, in milliseconds.
    pub last_time_ms: u64,
}

impl DragTracker {
    /// Start tracking a drag by `pointer` from `pos`.
    pub fn start(&mut self, pointer: PointerId, pos: Point, time_ms: u64) {
        self.pointer = Some(pointer);
        self.start_pos = Some(pos);
        self.last_pos = Some(pos);
        self.last_time_ms = time_ms;
    }

    /// Record a new sample, returning the movement since the last one.
    pub fn update(&mut self, pos: Point, time_ms: u64) -> Option<DragStep> {
        self.start_pos?;
        let elapsed_ms = time_ms.saturating_sub(self.last_time_ms);
        self.last_time_ms = time_ms;
        self.last_pos.replace(pos).map(|last_pos| DragStep {
            delta: pos - last_pos,
            elapsed_ms,
        })
    }

    /// End the current drag and reset state.
    pub fn end(&mut self) {
        *self = Self::default();
    }

    /// Returns `true` while a drag is active.
    pub fn is_dragging(&self) -> bool {
        self.start_pos.is_some()
    }

    /// Returns `true` if `pointer` owns the active drag.
    pub fn is_active_pointer(&self, pointer: PointerId) -> bool {
        self.pointer == Some(pointer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_tracker_is_not_dragging() {
        let drag = DragTracker::default();
        assert!(!drag.is_dragging());
        assert!(drag.pointer.is_none());
    }

    #[test]
    fn update_returns_delta_and_elapsed() {
        let mut drag = DragTracker::default();
        drag.start(PointerId(3), Point::new(10.0, 20.0), 100);

        let step = drag.update(Point::new(15.0, 25.0), 116).unwrap();
        assert_eq!(step.delta, Vec2::new(5.0, 5.0));
        assert_eq!(step.elapsed_ms, 16);
        assert_eq!(drag.last_pos, Some(Point::new(15.0, 25.0)));
    }

    #[test]
    fn update_returns_none_when_not_dragging() {
        let mut drag = DragTracker::default();
        assert_eq!(drag.update(Point::new(15.0, 25.0), 10), None);
        assert!(drag.last_pos.is_none());
    }

    #[test]
    fn clock_going_backwards_reports_zero_elapsed() {
        let mut drag = DragTracker::default();
        drag.start(PointerId(0), Point::ZERO, 500);
        let step = drag.update(Point::new(1.0, 0.0), 400).unwrap();
        assert_eq!(step.elapsed_ms, 0);
    }

    #[test]
    fn deltas_are_incremental() {
        let mut drag = DragTracker::default();
        drag.start(PointerId(0), Point::new(0.0, 0.0), 0);

        assert_eq!(
            drag.update(Point::new(5.0, 3.0), 10).map(|s| s.delta),
            Some(Vec2::new(5.0, 3.0))
        );
        assert_eq!(
            drag.update(Point::new(8.0, 7.0), 20).map(|s| s.delta),
            Some(Vec2::new(3.0, 4.0))
        );
        assert_eq!(drag.start_pos, Some(Point::ZERO));
    }

    #[test]
    fn end_resets_everything() {
        let mut drag = DragTracker::default();
        drag.start(PointerId(9), Point::new(10.0, 20.0), 5);
        drag.end();
        assert!(!drag.is_dragging());
        assert!(!drag.is_active_pointer(PointerId(9)));
        assert_eq!(drag.update(Point::ZERO, 10), None);
    }

    #[test]
    fn start_overwrites_previous_drag() {
        let mut drag = DragTracker::default();
        drag.start(PointerId(1), Point::new(0.0, 0.0), 0);
        drag.start(PointerId(2), Point::new(50.0, 60.0), 10);

        assert!(drag.is_active_pointer(PointerId(2)));
        assert_eq!(
            drag.update(Point::new(55.0, 65.0), 20).map(|s| s.delta),
            Some(Vec2::new(5.0, 5.0))
        );
    }
}
