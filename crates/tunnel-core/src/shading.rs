//! CPU mirror of the material math in `shaders/scene.wgsl`.
//!
//! The GPU evaluates this once per visible pixel; the functions here keep the
//! same arithmetic reachable from host-side tests. Both sides must stay in
//! sync by hand.

use glam::{Vec2, Vec3};

use crate::state::UniformSet;

/// Cubic smooth 0→1 transition on `[edge0, edge1]`.
#[inline]
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

// GLSL-style fract: result is in [0, 1) for negative inputs too.
#[inline]
fn fract(x: f32) -> f32 {
    x - x.floor()
}

/// Hash a cell corner to a pseudo-random value in `[0, 1)`.
#[inline]
pub fn corner_hash(p: Vec2) -> f32 {
    fract(p.dot(Vec2::new(12.9898, 78.233)).sin() * 43758.5453123)
}

/// Smoothed value noise: smoothstep-weighted bilinear blend of the four
/// hashed corners of the cell containing `p`. Pure function of `p`.
pub fn value_noise(p: Vec2) -> f32 {
    let i = p.floor();
    let f = p - i;

    let a = corner_hash(i);
    let b = corner_hash(i + Vec2::new(1.0, 0.0));
    let c = corner_hash(i + Vec2::new(0.0, 1.0));
    let d = corner_hash(i + Vec2::new(1.0, 1.0));

    let w = f * f * (Vec2::splat(3.0) - 2.0 * f);

    a + (b - a) * w.x + (c - a) * w.y * (1.0 - w.x) + (d - b) * w.x * w.y
}

/// Grid-line mask: 1 exactly on a grid line, 0 in the cell interior.
///
/// `deriv` is the local rate of change of `uv * grid_density` at the sample,
/// the stand-in for the fragment-shader derivative that anti-aliases the
/// line edge. Line width scales with `smoothness`.
pub fn grid_line_mask(uv: Vec2, deriv: Vec2, grid_density: f32, smoothness: f32) -> f32 {
    let scaled = uv * grid_density;
    let gx = (fract(scaled.x - 0.5) - 0.5).abs();
    let gy = (fract(scaled.y - 0.5) - 0.5).abs();
    let line_x = smoothstep(0.0, deriv.x * smoothness, gx);
    let line_y = smoothstep(0.0, deriv.y * smoothness, gy);
    1.0 - line_x.min(line_y)
}

/// Evaluate the full material at one surface sample.
///
/// Base and wire colors blend by the grid mask; when displacement is enabled
/// the animated noise value is added equally to all three channels. The sum
/// is deliberately unclamped; the output stage of the render pipeline clamps
/// to the displayable range.
pub fn shade(uv: Vec2, deriv: Vec2, uniforms: &UniformSet) -> Vec3 {
    let line = grid_line_mask(uv, deriv, uniforms.grid_density, uniforms.smoothness);

    let noise = if uniforms.displacement_enabled {
        value_noise(uv * uniforms.noise_scale + Vec2::splat(uniforms.time * uniforms.noise_speed))
            * uniforms.noise_strength
    } else {
        0.0
    };

    uniforms.base_color.lerp(uniforms.wire_color, line) + Vec3::splat(noise)
}
