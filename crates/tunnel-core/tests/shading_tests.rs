// Host-side tests for the material math shared with the WGSL shader.

use glam::Vec2;
use tunnel_core::{grid_line_mask, shade, value_noise, UniformSet, GRID_DENSITY};

// A plausible fragment derivative of the scaled uv at this grid density.
const DERIV: Vec2 = Vec2::new(0.05, 0.05);

#[test]
fn grid_mask_is_zero_inside_a_cell() {
    // Cell centers sit half a cell away from every line.
    for k in [0.0_f32, 3.0, 11.0] {
        let uv = Vec2::splat((k + 0.5) / GRID_DENSITY);
        let mask = grid_line_mask(uv, DERIV, GRID_DENSITY, 1.0);
        assert!(
            mask.abs() < 1e-5,
            "expected no line at cell center {k}, got {mask}"
        );
    }
}

#[test]
fn grid_mask_is_one_on_cell_boundaries() {
    // uv multiples of 1/gridDensity lie exactly on a grid line.
    for k in [0.0_f32, 1.0, 5.0, 13.0] {
        let uv = Vec2::new(k / GRID_DENSITY, 0.37);
        let mask = grid_line_mask(uv, DERIV, GRID_DENSITY, 1.0);
        assert!(
            (mask - 1.0).abs() < 1e-4,
            "expected a line at boundary {k}, got {mask}"
        );
    }
}

#[test]
fn noise_is_deterministic() {
    for p in [
        Vec2::new(0.0, 0.0),
        Vec2::new(3.7, -1.2),
        Vec2::new(-128.4, 512.9),
    ] {
        assert_eq!(value_noise(p), value_noise(p));
    }
}

#[test]
fn noise_stays_in_unit_range() {
    for ix in 0..50 {
        for iy in 0..50 {
            let p = Vec2::new(ix as f32 * 0.37 - 5.0, iy as f32 * 0.53 - 7.0);
            let n = value_noise(p);
            assert!((0.0..1.0).contains(&n), "noise out of range at {p}: {n}");
        }
    }
}

#[test]
fn disabled_displacement_ignores_time_and_noise_params() {
    let mut uniforms = UniformSet {
        displacement_enabled: false,
        ..UniformSet::default()
    };
    let uv = Vec2::new(0.21, 0.77);

    let before = shade(uv, DERIV, &uniforms);
    uniforms.time = 123.0;
    uniforms.noise_scale = 99.0;
    uniforms.noise_speed = 42.0;
    uniforms.noise_strength = 7.0;
    let after = shade(uv, DERIV, &uniforms);

    assert_eq!(before, after);
}

#[test]
fn enabled_displacement_brightens_all_channels_equally() {
    let mut uniforms = UniformSet {
        displacement_enabled: false,
        ..UniformSet::default()
    };
    let uv = Vec2::new(0.21, 0.77);

    let base = shade(uv, DERIV, &uniforms);
    uniforms.displacement_enabled = true;
    let lit = shade(uv, DERIV, &uniforms);

    let delta = lit - base;
    assert!(delta.x >= 0.0);
    assert!((delta.x - delta.y).abs() < 1e-6);
    assert!((delta.y - delta.z).abs() < 1e-6);
}

#[test]
fn color_follows_the_mask_endpoints() {
    let uniforms = UniformSet {
        displacement_enabled: false,
        ..UniformSet::default()
    };

    // On a boundary the full wire color shows through.
    let on_line = Vec2::new(5.0 / GRID_DENSITY, 0.37);
    let c = shade(on_line, DERIV, &uniforms);
    assert!((c - uniforms.wire_color).length() < 1e-3);

    // A cell center shows the base color.
    let in_cell = Vec2::splat(3.5 / GRID_DENSITY);
    let c = shade(in_cell, DERIV, &uniforms);
    assert!((c - uniforms.base_color).length() < 1e-3);
}

#[test]
fn noise_sum_is_left_unclamped() {
    // On a grid line with full-strength noise the sum may exceed 1; the
    // shading function must not clamp it.
    let uniforms = UniformSet {
        noise_strength: 10.0,
        time: 0.25,
        ..UniformSet::default()
    };
    let mut exceeded = false;
    for k in 0..40 {
        let uv = Vec2::new(5.0 / GRID_DENSITY, k as f32 * 0.025);
        let c = shade(uv, DERIV, &uniforms);
        if c.x > 1.0 {
            exceeded = true;
            break;
        }
    }
    assert!(exceeded, "expected at least one over-range sample");
}
