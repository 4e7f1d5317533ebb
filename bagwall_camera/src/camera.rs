// Copyright 2026 the Bagwall Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size, Vec2};

use crate::drag::{DragTracker, PointerId};
use crate::ease::Approach;
use crate::viewport::ViewportWindow;

/// Coarse state of the camera.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CameraPhase {
    /// No pointer is held and no momentum remains; the position may still be
    /// easing toward the target.
    #[default]
    Idle,
    /// A pointer owns the camera; the position follows it directly.
    Dragging,
    /// Momentum left over from a drag is decaying.
    Settling,
}

/// Snapshot of the camera.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CameraState {
    /// World point shown at the display's top-left corner.
    pub position: Point,
    /// Position the camera eases toward when not dragging.
    pub target: Point,
    /// Momentum in pixels per reference frame.
    pub velocity: Vec2,
    /// Current phase.
    pub phase: CameraPhase,
}

impl CameraState {
    /// Returns `true` while a pointer owns the camera.
    #[must_use]
    pub fn dragging(&self) -> bool {
        self.phase == CameraPhase::Dragging
    }
}

/// Tuning for [`CameraController`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CameraConfig {
    /// Fraction of the remaining distance to the target covered per frame.
    pub ease_factor: f64,
    /// Distance below which the position snaps onto the target.
    pub snap_epsilon: f64,
    /// Per-frame velocity multiplier while settling.
    pub friction: f64,
    /// Velocity component magnitude below which momentum stops.
    pub stop_speed: f64,
    /// Scale applied to wheel deltas.
    pub wheel_multiplier: f64,
    /// Frame duration velocities are normalized to, in milliseconds.
    pub reference_frame_ms: u64,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            ease_factor: 0.15,
            snap_epsilon: 0.05,
            friction: 0.95,
            stop_speed: 0.1,
            wheel_multiplier: 1.2,
            reference_frame_ms: 16,
        }
    }
}

/// A wheel or trackpad scroll.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WheelDelta {
    /// Native horizontal delta.
    pub dx: f64,
    /// Native vertical delta.
    pub dy: f64,
    /// Whether shift is held, turning vertical scroll into horizontal.
    pub shift: bool,
}

impl WheelDelta {
    /// The camera-space delta before the wheel multiplier.
    ///
    /// Native horizontal scroll wins; otherwise shift maps vertical scroll to
    /// horizontal.
    #[must_use]
    pub fn resolved(&self) -> Vec2 {
        let dx = if self.dx != 0.0 {
            self.dx
        } else if self.shift {
            self.dy
        } else {
            0.0
        };
        let dy = if self.dy != 0.0 && !self.shift {
            self.dy
        } else {
            0.0
        };
        Vec2::new(dx, dy)
    }
}

/// Drag, momentum, wheel, and spring state machine for the wall camera.
///
/// Inputs arrive between frames through the pointer and wheel methods;
/// [`CameraController::step`] runs once per frame.
///
/// ```
/// use bagwall_camera::{CameraConfig, CameraController, CameraPhase, PointerId};
/// use kurbo::Point;
///
/// let mut camera = CameraController::new(CameraConfig::default());
/// camera.pointer_down(PointerId(1), Point::new(100.0, 100.0), 0);
/// camera.pointer_move(PointerId(1), Point::new(80.0, 100.0), 16);
/// assert_eq!(camera.position(), Point::new(20.0, 0.0));
///
/// camera.pointer_up(PointerId(1));
/// assert_eq!(camera.phase(), CameraPhase::Settling);
/// while camera.phase() != CameraPhase::Idle {
///     camera.step();
/// }
/// assert!(camera.position().x > 20.0);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CameraController {
    config: CameraConfig,
    state: CameraState,
    drag: DragTracker,
}

impl CameraController {
    /// Creates a camera at the world origin.
    #[must_use]
    pub fn new(config: CameraConfig) -> Self {
        Self {
            config,
            state: CameraState::default(),
            drag: DragTracker::default(),
        }
    }

    /// Creates a camera resting at `position`.
    #[must_use]
    pub fn with_position(config: CameraConfig, position: Point) -> Self {
        let mut camera = Self::new(config);
        camera.jump_to(position);
        camera
    }

    /// Active tuning.
    #[must_use]
    pub fn config(&self) -> &CameraConfig {
        &self.config
    }

    /// Full state snapshot.
    #[must_use]
    pub fn state(&self) -> CameraState {
        self.state
    }

    /// World point at the display's top-left corner.
    #[must_use]
    pub fn position(&self) -> Point {
        self.state.position
    }

    /// Point the camera eases toward.
    #[must_use]
    pub fn target(&self) -> Point {
        self.state.target
    }

    /// Momentum in pixels per reference frame.
    #[must_use]
    pub fn velocity(&self) -> Vec2 {
        self.state.velocity
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> CameraPhase {
        self.state.phase
    }

    /// Returns `true` while a pointer owns the camera.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.state.dragging()
    }

    /// Pointer that owns the current drag.
    #[must_use]
    pub fn active_pointer(&self) -> Option<PointerId> {
        self.drag.pointer
    }

    /// Returns `true` if another [`step`](Self::step) would move the camera.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.state.phase == CameraPhase::Settling || self.state.position != self.state.target
    }

    /// The world window seen through a display of `size`.
    #[must_use]
    pub fn window(&self, size: Size) -> ViewportWindow {
        ViewportWindow::new(self.state.position, size)
    }

    /// Starts a drag.
    ///
    /// A second pointer arriving while another one drags ends the drag as if
    /// the first pointer had been released.
    pub fn pointer_down(&mut self, pointer: PointerId, pos: Point, time_ms: u64) {
        if self.is_dragging() {
            if !self.drag.is_active_pointer(pointer) {
                tracing::trace!(?pointer, "second pointer ends drag");
                self.release();
            }
            return;
        }
        self.drag.start(pointer, pos, time_ms);
        self.state.velocity = Vec2::ZERO;
        self.state.target = self.state.position;
        self.state.phase = CameraPhase::Dragging;
    }

    /// Moves the camera with the dragging pointer.
    ///
    /// Returns the pointer delta, or `None` when `pointer` does not own a drag.
    pub fn pointer_move(&mut self, pointer: PointerId, pos: Point, time_ms: u64) -> Option<Vec2> {
        if !self.is_dragging() || !self.drag.is_active_pointer(pointer) {
            return None;
        }
        let step = self.drag.update(pos, time_ms)?;
        self.state.position -= step.delta;
        self.state.target = self.state.position;
        if step.elapsed_ms > 0 {
            let scale = self.config.reference_frame_ms as f64 / step.elapsed_ms as f64;
            self.state.velocity = -step.delta * scale;
        }
        Some(step.delta)
    }

    /// Ends the drag owned by `pointer`, keeping its momentum.
    pub fn pointer_up(&mut self, pointer: PointerId) {
        if self.drag.is_active_pointer(pointer) {
            self.release();
        }
    }

    /// Handles a cancelled pointer exactly like [`pointer_up`](Self::pointer_up).
    pub fn pointer_cancel(&mut self, pointer: PointerId) {
        self.pointer_up(pointer);
    }

    /// Handles the pointer leaving the surface; any drag ends.
    pub fn pointer_leave(&mut self) {
        self.release();
    }

    /// Ends any active drag and hands its velocity to the settling phase.
    pub fn release(&mut self) {
        if !self.is_dragging() {
            return;
        }
        self.drag.end();
        self.state.phase = if self.above_stop_speed(self.state.velocity) {
            CameraPhase::Settling
        } else {
            self.state.velocity = Vec2::ZERO;
            CameraPhase::Idle
        };
        tracing::trace!(velocity = ?self.state.velocity, phase = ?self.state.phase, "drag released");
    }

    /// Scrolls the target; ignored while dragging.
    ///
    /// Scrolling during momentum cancels it so the new target is honored.
    pub fn wheel(&mut self, delta: WheelDelta) {
        match self.state.phase {
            CameraPhase::Dragging => return,
            CameraPhase::Settling => {
                self.state.velocity = Vec2::ZERO;
                self.state.phase = CameraPhase::Idle;
            }
            CameraPhase::Idle => {}
        }
        self.state.target += delta.resolved() * self.config.wheel_multiplier;
    }

    /// Advances one frame of momentum and spring easing.
    pub fn step(&mut self) {
        if self.state.phase == CameraPhase::Settling {
            self.state.velocity *= self.config.friction;
            if self.above_stop_speed(self.state.velocity) {
                self.state.position += self.state.velocity;
                self.state.target = self.state.position;
            } else {
                self.state.velocity = Vec2::ZERO;
                self.state.phase = CameraPhase::Idle;
            }
        }
        if self.state.phase != CameraPhase::Dragging {
            let approach = Approach::Exponential {
                factor: self.config.ease_factor,
            };
            self.state.position =
                approach.step_point(self.state.position, self.state.target, self.config.snap_epsilon);
        }
    }

    /// Moves the camera to `position` immediately and stops all motion.
    pub fn jump_to(&mut self, position: Point) {
        self.drag.end();
        self.state = CameraState {
            position,
            target: position,
            velocity: Vec2::ZERO,
            phase: CameraPhase::Idle,
        };
    }

    /// Jumps so that `world_pt` sits at the center of a display of `view_size`.
    pub fn center_on(&mut self, world_pt: Point, view_size: Size) {
        self.jump_to(ViewportWindow::centered_on(world_pt, view_size));
    }

    fn above_stop_speed(&self, velocity: Vec2) -> bool {
        velocity.x.abs() > self.config.stop_speed || velocity.y.abs() > self.config.stop_speed
    }
}
