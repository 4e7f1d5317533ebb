// Copyright 2026 the Bagwall Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Convergence of the spring and decay of momentum.

use bagwall_camera::{CameraConfig, CameraController, CameraPhase, PointerId, WheelDelta};
use kurbo::Point;
use proptest::prelude::*;

proptest! {
    #[test]
    fn idle_spring_converges_without_overshoot(
        start in (-1.0e5..1.0e5_f64, -1.0e5..1.0e5_f64),
        offset in (-5.0e4..5.0e4_f64, -5.0e4..5.0e4_f64),
    ) {
        let mut camera = CameraController::with_position(
            CameraConfig::default(),
            Point::new(start.0, start.1),
        );
        // A horizontal then a vertical wheel produce an arbitrary target.
        camera.wheel(WheelDelta { dx: offset.0, dy: 0.0, shift: false });
        camera.wheel(WheelDelta { dx: 0.0, dy: offset.1, shift: false });
        let target = camera.target();

        let mut distance = camera.position().distance(target);
        let mut steps = 0;
        while camera.is_animating() {
            camera.step();
            steps += 1;
            let next = camera.position().distance(target);
            prop_assert!(next <= distance, "distance grew from {distance} to {next}");
            distance = next;
            prop_assert!(steps < 1_000, "did not converge");
        }
        prop_assert_eq!(camera.position(), target);
        prop_assert_eq!(camera.phase(), CameraPhase::Idle);
    }

    #[test]
    fn momentum_decays_to_rest(
        drag in (-400.0..400.0_f64, -400.0..400.0_f64),
        elapsed in 1_u64..64,
    ) {
        let config = CameraConfig::default();
        let mut camera = CameraController::new(config);
        camera.pointer_down(PointerId(0), Point::ZERO, 0);
        camera.pointer_move(PointerId(0), Point::new(drag.0, drag.1), elapsed);
        camera.pointer_up(PointerId(0));

        let mut speed = camera.velocity().hypot();
        let mut steps = 0;
        while camera.phase() == CameraPhase::Settling {
            camera.step();
            steps += 1;
            let next = camera.velocity().hypot();
            prop_assert!(next < speed, "speed did not decrease: {speed} -> {next}");
            speed = next;
            prop_assert!(steps < 1_000, "momentum never stopped");
        }
        prop_assert!(camera.velocity().x.abs() <= config.stop_speed);
        prop_assert!(camera.velocity().y.abs() <= config.stop_speed);
        prop_assert_eq!(camera.target(), camera.position());
    }
}

#[test]
fn interleaved_pointers_never_leave_a_stuck_drag() {
    let mut camera = CameraController::new(CameraConfig::default());
    camera.pointer_down(PointerId(1), Point::new(200.0, 200.0), 0);
    camera.pointer_move(PointerId(1), Point::new(180.0, 200.0), 16);
    // A second finger lands, then both lift in either order.
    camera.pointer_down(PointerId(2), Point::new(400.0, 200.0), 20);
    camera.pointer_up(PointerId(2));
    camera.pointer_up(PointerId(1));
    assert!(!camera.is_dragging());

    for _ in 0..500 {
        camera.step();
    }
    assert!(!camera.is_animating());
    assert_eq!(camera.phase(), CameraPhase::Idle);
}
