// Tests for the looping progress tween and the camera path driver.

use glam::Vec3;
use tunnel_core::{
    aim_along_path, look_ahead_fraction, path_points_vec3, Camera, LoopTween, PointerState,
    SimState, TunnelPath, FLIGHT_DURATION_SEC, LOOK_AHEAD, SHAKE_STRENGTH, TIME_STEP,
};

#[test]
fn progress_stays_in_unit_interval() {
    let mut tween = LoopTween::new(10.0, true);
    for _ in 0..2000 {
        let p = tween.tick(0.016);
        assert!((0.0..1.0).contains(&p), "progress out of range: {p}");
    }
}

#[test]
fn progress_advances_at_constant_rate() {
    let mut tween = LoopTween::new(10.0, true);
    assert!((tween.tick(1.0) - 0.1).abs() < 1e-6);
    assert!((tween.tick(2.5) - 0.35).abs() < 1e-6);
    assert!((tween.value() - 0.35).abs() < 1e-6); // reading does not advance
}

#[test]
fn loop_closes_after_exactly_one_duration() {
    let mut tween = LoopTween::new(10.0, true);
    let start = tween.value();
    let end = tween.tick(10.0);
    assert_eq!(start, end);
}

#[test]
fn wrap_keeps_the_fractional_remainder() {
    let mut tween = LoopTween::new(10.0, true);
    tween.tick(9.5);
    let p = tween.tick(1.0);
    assert!((p - 0.05).abs() < 1e-6, "expected 0.05 after wrap, got {p}");
}

#[test]
fn non_looping_tween_saturates() {
    let mut tween = LoopTween::new(2.0, false);
    assert!(!tween.is_looping());
    assert_eq!(tween.tick(5.0), 1.0);
    assert_eq!(tween.tick(1.0), 1.0);
}

#[test]
fn look_ahead_wraps_near_loop_end() {
    let progress = 1.0 - LOOK_AHEAD / 2.0;
    let ahead = look_ahead_fraction(progress);
    assert!(
        ahead < LOOK_AHEAD,
        "look-ahead should wrap to the path start, got {ahead}"
    );
}

#[test]
fn camera_follows_the_path_with_pointer_shake() {
    let path = TunnelPath::new(path_points_vec3()).unwrap();
    let mut camera = Camera::new(16.0 / 9.0);
    let pointer = PointerState { x: 1.0, y: -0.5 };
    let progress = 0.25;

    aim_along_path(&mut camera, &path, progress, pointer);

    let a = path.point_at(progress);
    let b = path.point_at(progress + LOOK_AHEAD);
    let expected_eye = a + Vec3::new(SHAKE_STRENGTH, -0.5 * SHAKE_STRENGTH, 0.0);

    assert!((camera.eye - expected_eye).length() < 1e-5);
    assert!((camera.target - b).length() < 1e-5);
    // Parallax shifts the eye laterally and vertically only.
    assert_eq!(camera.eye.z, a.z);
}

#[test]
fn sim_advance_moves_camera_and_steps_time() {
    let mut sim = SimState::new(16.0 / 9.0).unwrap();
    assert!(sim.tween.is_looping());

    sim.advance(0.5);
    let expected_progress = 0.5 / FLIGHT_DURATION_SEC;
    let expected_eye = sim.path.point_at(expected_progress);

    assert!((sim.camera.eye - expected_eye).length() < 1e-5); // pointer at rest
    assert!((sim.uniforms.time - TIME_STEP).abs() < 1e-6);

    sim.advance(0.5);
    assert!((sim.uniforms.time - 2.0 * TIME_STEP).abs() < 1e-6);
}
