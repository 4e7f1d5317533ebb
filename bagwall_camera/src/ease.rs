// Copyright 2026 the Bagwall Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-frame "approach" easing shared by the camera spring, hover zoom, and fades.

use kurbo::Point;

/// How a value moves toward its target on each frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Approach {
    /// Cover `factor` of the remaining distance per step (`0 < factor <= 1`).
    ///
    /// Never overshoots; converges geometrically.
    Exponential {
        /// Fraction of the remaining distance covered per step.
        factor: f64,
    },
    /// Move by a fixed `step` per frame, clamped at the target.
    Linear {
        /// Distance covered per step.
        step: f64,
    },
}

impl Approach {
    /// Advances `current` one frame toward `target`.
    ///
    /// Lands exactly on `target` once within `epsilon`, so animations do not
    /// keep producing sub-pixel motion forever.
    #[must_use]
    pub fn step(self, current: f64, target: f64, epsilon: f64) -> f64 {
        let remaining = target - current;
        if remaining.abs() <= epsilon {
            return target;
        }
        let next = match self {
            Self::Exponential { factor } => current + remaining * factor.clamp(0.0, 1.0),
            Self::Linear { step } if step.abs() >= remaining.abs() => target,
            Self::Linear { step } => current + remaining.signum() * step.abs(),
        };
        if (target - next).abs() <= epsilon {
            target
        } else {
            next
        }
    }

    /// Advances both coordinates of `current` toward `target`.
    #[must_use]
    pub fn step_point(self, current: Point, target: Point, epsilon: f64) -> Point {
        Point::new(
            self.step(current.x, target.x, epsilon),
            self.step(current.y, target.y, epsilon),
        )
    }
}

/// A scalar that eases toward a target once per frame.
///
/// ```
/// use bagwall_camera::ease::{Approach, EasedScalar};
///
/// let mut alpha = EasedScalar::new(0.0, Approach::Linear { step: 0.25 }, 1e-6);
/// alpha.set_target(1.0);
/// alpha.step();
/// assert_eq!(alpha.value(), 0.25);
/// for _ in 0..3 {
///     alpha.step();
/// }
/// assert!(alpha.is_settled());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EasedScalar {
    value: f64,
    target: f64,
    approach: Approach,
    epsilon: f64,
}

impl EasedScalar {
    /// Creates a scalar resting at `value`.
    #[must_use]
    pub fn new(value: f64, approach: Approach, epsilon: f64) -> Self {
        Self {
            value,
            target: value,
            approach,
            epsilon: epsilon.abs(),
        }
    }

    /// Current value.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Value being approached.
    #[must_use]
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Changes the target without moving the value.
    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    /// Jumps to `value` and makes it the target.
    pub fn snap_to(&mut self, value: f64) {
        self.value = value;
        self.target = value;
    }

    /// Restarts the animation from `from` toward the current target.
    pub fn restart_from(&mut self, from: f64) {
        self.value = from;
    }

    /// Advances one frame and returns the new value.
    pub fn step(&mut self) -> f64 {
        self.value = self.approach.step(self.value, self.target, self.epsilon);
        self.value
    }

    /// Returns `true` once the value sits on its target.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.value == self.target
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use super::{Approach, EasedScalar};

    #[test]
    fn exponential_covers_fraction_of_distance() {
        let a = Approach::Exponential { factor: 0.15 };
        let next = a.step(0.0, 100.0, 0.01);
        assert!((next - 15.0).abs() < 1e-12, "got {next}");
    }

    #[test]
    fn exponential_snaps_within_epsilon() {
        let a = Approach::Exponential { factor: 0.5 };
        assert_eq!(a.step(99.99, 100.0, 0.05), 100.0);
        // Landing within epsilon after the step also snaps.
        assert_eq!(a.step(99.9, 100.0, 0.06), 100.0);
    }

    #[test]
    fn linear_clamps_at_target() {
        let a = Approach::Linear { step: 0.08 };
        assert_eq!(a.step(0.95, 1.0, 0.0), 1.0);
        assert!((a.step(0.0, 1.0, 0.0) - 0.08).abs() < 1e-12);
        assert!((a.step(1.0, 0.0, 0.0) - 0.92).abs() < 1e-12);
    }

    #[test]
    fn point_steps_each_axis() {
        let a = Approach::Exponential { factor: 0.5 };
        let p = a.step_point(Point::new(0.0, 10.0), Point::new(10.0, 0.0), 1e-9);
        assert_eq!(p, Point::new(5.0, 5.0));
    }

    #[test]
    fn eased_scalar_settles_on_target() {
        let mut hover = EasedScalar::new(1.0, Approach::Exponential { factor: 0.12 }, 0.001);
        hover.set_target(1.04);
        let mut steps = 0;
        while !hover.is_settled() {
            hover.step();
            steps += 1;
            assert!(hover.value() <= 1.04, "no overshoot");
            assert!(steps < 200, "did not settle");
        }
        hover.set_target(1.0);
        hover.step();
        assert!(hover.value() < 1.04);
    }

    #[test]
    fn restart_keeps_target() {
        let mut fade = EasedScalar::new(1.0, Approach::Linear { step: 0.5 }, 0.0);
        fade.restart_from(0.0);
        assert_eq!(fade.target(), 1.0);
        fade.step();
        fade.step();
        assert!(fade.is_settled());
    }
}
