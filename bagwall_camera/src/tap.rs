// Copyright 2026 the Bagwall Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tap recognition with spatial and temporal tolerance.
//!
//! A press counts as a tap when it is released quickly, close to where it
//! started, and no individual move during the press was large enough to read
//! as a drag. Touch contacts get a looser radius than mice and pens.
//!
//! ```
//! use bagwall_camera::tap::{PointerKind, TapConfig, TapRecognizer};
//! use kurbo::{Point, Vec2};
//!
//! let mut tap = TapRecognizer::new(TapConfig::default());
//! tap.on_down(Point::new(40.0, 40.0), 1_000, PointerKind::Touch);
//! tap.on_move(Vec2::new(2.0, 1.0));
//! assert_eq!(tap.on_up(Point::new(46.0, 44.0), 1_120), Some(Point::new(46.0, 44.0)));
//! ```

use kurbo::{Point, Vec2};

/// Kind of device behind a pointer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PointerKind {
    /// A mouse.
    #[default]
    Mouse,
    /// A touch contact.
    Touch,
    /// A stylus.
    Pen,
}

/// Thresholds for [`TapRecognizer`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TapConfig {
    /// A press held this long or longer is not a tap.
    pub max_duration_ms: u64,
    /// Manhattan distance a mouse or pen may travel between press and release.
    pub mouse_slop: f64,
    /// Manhattan distance a touch contact may travel between press and release.
    pub touch_slop: f64,
    /// A single move with a larger Manhattan length turns the press into a drag.
    pub drag_threshold: f64,
}

impl Default for TapConfig {
    fn default() -> Self {
        Self {
            max_duration_ms: 300,
            mouse_slop: 10.0,
            touch_slop: 15.0,
            drag_threshold: 3.0,
        }
    }
}

impl TapConfig {
    /// Release radius for `kind`.
    #[must_use]
    pub fn slop(&self, kind: PointerKind) -> f64 {
        match kind {
            PointerKind::Touch => self.touch_slop,
            PointerKind::Mouse | PointerKind::Pen => self.mouse_slop,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Press {
    pos: Point,
    time_ms: u64,
    kind: PointerKind,
    moved: bool,
}

/// Recognizes taps for one pointer at a time.
#[derive(Clone, Debug, Default)]
pub struct TapRecognizer {
    config: TapConfig,
    press: Option<Press>,
}

impl TapRecognizer {
    /// Creates an idle recognizer.
    #[must_use]
    pub fn new(config: TapConfig) -> Self {
        Self {
            config,
            press: None,
        }
    }

    /// Active thresholds.
    #[must_use]
    pub fn config(&self) -> &TapConfig {
        &self.config
    }

    /// Records a press, replacing any earlier one.
    pub fn on_down(&mut self, pos: Point, time_ms: u64, kind: PointerKind) {
        self.press = Some(Press {
            pos,
            time_ms,
            kind,
            moved: false,
        });
    }

    /// Records a pointer move of `delta` since the previous sample.
    pub fn on_move(&mut self, delta: Vec2) {
        if let Some(press) = &mut self.press {
            if delta.x.abs() + delta.y.abs() > self.config.drag_threshold {
                press.moved = true;
            }
        }
    }

    /// Returns `true` once a move has exceeded the drag threshold.
    #[must_use]
    pub fn has_moved(&self) -> bool {
        self.press.is_some_and(|press| press.moved)
    }

    /// Returns `true` while a press is being tracked.
    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.press.is_some()
    }

    /// Finishes the press, returning the release point when it was a tap.
    pub fn on_up(&mut self, pos: Point, time_ms: u64) -> Option<Point> {
        let press = self.press.take()?;
        let duration = time_ms.saturating_sub(press.time_ms);
        let travel = (pos.x - press.pos.x).abs() + (pos.y - press.pos.y).abs();
        let is_tap = duration < self.config.max_duration_ms
            && travel < self.config.slop(press.kind)
            && !press.moved;
        is_tap.then_some(pos)
    }

    /// Forgets the current press without producing a tap.
    pub fn cancel(&mut self) {
        self.press = None;
    }
}
