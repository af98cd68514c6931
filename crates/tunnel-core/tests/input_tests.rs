// Tests for pointer normalization, resize handling and the effect toggle.

use tunnel_core::{pointer_ndc, Camera, PointerState, UniformSet};

#[test]
fn pointer_corners_map_to_unit_extremes() {
    let (w, h) = (800.0, 600.0);

    let top_left = pointer_ndc(0.0, 0.0, w, h);
    assert_eq!(top_left, PointerState { x: -1.0, y: 1.0 });

    let bottom_right = pointer_ndc(w, h, w, h);
    assert_eq!(bottom_right, PointerState { x: 1.0, y: -1.0 });

    let center = pointer_ndc(w / 2.0, h / 2.0, w, h);
    assert_eq!(center, PointerState { x: 0.0, y: 0.0 });
}

#[test]
fn pointer_y_axis_is_inverted() {
    // Moving the pointer down the screen lowers the normalized y.
    let upper = pointer_ndc(100.0, 50.0, 800.0, 600.0);
    let lower = pointer_ndc(100.0, 500.0, 800.0, 600.0);
    assert!(upper.y > lower.y);
}

#[test]
fn degenerate_viewport_yields_center() {
    assert_eq!(pointer_ndc(10.0, 10.0, 0.0, 600.0), PointerState::default());
    assert_eq!(pointer_ndc(10.0, 10.0, 800.0, 0.0), PointerState::default());
}

#[test]
fn resize_updates_aspect_and_nothing_else() {
    let mut camera = Camera::new(4.0 / 3.0);
    let eye = camera.eye;
    let target = camera.target;

    camera.set_aspect(1920, 1080);
    assert!((camera.aspect - 1920.0 / 1080.0).abs() < 1e-6);
    assert_eq!(camera.eye, eye);
    assert_eq!(camera.target, target);

    // Zero-sized viewports are ignored.
    camera.set_aspect(0, 1080);
    assert!((camera.aspect - 1920.0 / 1080.0).abs() < 1e-6);
}

#[test]
fn toggle_flips_only_the_displacement_flag() {
    let mut uniforms = UniformSet::default();
    uniforms.time = 7.5;
    let reference = uniforms.clone();

    uniforms.set_displacement_enabled(true);
    uniforms.set_displacement_enabled(false);

    assert!(!uniforms.displacement_enabled);
    assert_eq!(uniforms.time, reference.time);
    assert_eq!(uniforms.grid_density, reference.grid_density);
    assert_eq!(uniforms.noise_scale, reference.noise_scale);
    assert_eq!(uniforms.noise_speed, reference.noise_speed);
    assert_eq!(uniforms.noise_strength, reference.noise_strength);
    assert_eq!(uniforms.smoothness, reference.smoothness);
    assert_eq!(uniforms.wire_color, reference.wire_color);
    assert_eq!(uniforms.base_color, reference.base_color);
}
