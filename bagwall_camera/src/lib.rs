// Copyright 2026 the Bagwall Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=bagwall_camera --heading-base-level=0

//! Bagwall Camera: the pan camera of an infinite wall and its input helpers.
//!
//! This crate provides small, focused state machines for the interactions a
//! pannable wall needs:
//!
//! - [`CameraController`]: the Idle / Dragging / Settling state machine.
//!   Drags move the camera with zero latency, releases hand their velocity to
//!   a decaying momentum phase, and wheels move a target the camera springs
//!   toward.
//! - [`drag`]: pointer ownership, movement deltas, and sample timing.
//! - [`tap`]: tap recognition with per-device release radius.
//! - [`ease`]: the per-frame "approach" step shared by the camera spring,
//!   hover zoom, and fades.
//! - [`ViewportWindow`]: the world rectangle visible through the display.
//!
//! None of these assume a windowing system. Hosts feed them timestamps in
//! milliseconds and positions in logical pixels, and call
//! [`CameraController::step`] once per frame.
//!
//! ## Minimal example
//!
//! ```rust
//! use bagwall_camera::{CameraConfig, CameraController, WheelDelta};
//!
//! let mut camera = CameraController::new(CameraConfig::default());
//! camera.wheel(WheelDelta { dx: 0.0, dy: 100.0, shift: false });
//!
//! // The position eases toward the wheel target without overshooting.
//! let mut last = 0.0;
//! while camera.is_animating() {
//!     camera.step();
//!     assert!(camera.position().y >= last);
//!     last = camera.position().y;
//! }
//! assert_eq!(camera.position(), camera.target());
//! ```
//!
//! ## Features
//!
//! - `serde`: derive `Serialize`/`Deserialize` for [`CameraConfig`] and
//!   [`TapConfig`].

mod camera;
pub mod drag;
pub mod ease;
pub mod tap;
mod viewport;

pub use camera::{CameraConfig, CameraController, CameraPhase, CameraState, WheelDelta};
pub use drag::{DragStep, DragTracker, PointerId};
pub use ease::{Approach, EasedScalar};
pub use tap::{PointerKind, TapConfig, TapRecognizer};
pub use viewport::ViewportWindow;
