//! Shared simulation state mutated by the frame driver and input events.
//!
//! Everything lives in one explicit struct handed to the frame loop by
//! mutable reference; all access happens on the event-loop thread, so there
//! is no locking anywhere.

use glam::Vec3;

use crate::camera::{aim_along_path, Camera};
use crate::constants::{
    path_points_vec3, BASE_COLOR, FLIGHT_DURATION_SEC, GRID_DENSITY, NOISE_SCALE, NOISE_SPEED,
    NOISE_STRENGTH, SMOOTHNESS, TIME_STEP, WIRE_COLOR,
};
use crate::path::{PathError, TunnelPath};
use crate::tween::LoopTween;

/// Shading parameters shared between the host and the material.
///
/// `time` increases monotonically and is never reset for the life of the
/// session; it is advanced only by the frame driver. The displacement flag
/// is flipped only through [`UniformSet::set_displacement_enabled`].
#[derive(Clone, Debug, PartialEq)]
pub struct UniformSet {
    pub smoothness: f32,
    pub grid_density: f32,
    pub noise_scale: f32,
    pub noise_speed: f32,
    pub noise_strength: f32,
    pub displacement_enabled: bool,
    pub time: f32,
    pub wire_color: Vec3,
    pub base_color: Vec3,
}

impl Default for UniformSet {
    fn default() -> Self {
        Self {
            smoothness: SMOOTHNESS,
            grid_density: GRID_DENSITY,
            noise_scale: NOISE_SCALE,
            noise_speed: NOISE_SPEED,
            noise_strength: NOISE_STRENGTH,
            displacement_enabled: true,
            time: 0.0,
            wire_color: Vec3::from(WIRE_COLOR),
            base_color: Vec3::from(BASE_COLOR),
        }
    }
}

impl UniformSet {
    /// Enable or disable the noise brightness effect. No other state is
    /// touched; frames already rendered are unaffected.
    pub fn set_displacement_enabled(&mut self, enabled: bool) {
        self.displacement_enabled = enabled;
        log::info!("Displacement Enabled: {enabled}");
    }

    /// Advance shader time by the fixed per-frame step.
    pub fn advance_time(&mut self) {
        self.time += TIME_STEP;
    }
}

/// Normalized pointer position: both axes in `[-1, 1]`, y up.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
}

/// Map device pixel coordinates to normalized pointer coordinates.
///
/// `(0, 0)` maps to `(-1, 1)`, `(width, height)` to `(1, -1)` and the
/// viewport center to `(0, 0)`. A degenerate viewport yields the center.
#[inline]
pub fn pointer_ndc(px: f32, py: f32, width: f32, height: f32) -> PointerState {
    if width <= 0.0 || height <= 0.0 {
        return PointerState::default();
    }
    PointerState {
        x: (px / width) * 2.0 - 1.0,
        y: -((py / height) * 2.0 - 1.0),
    }
}

/// Everything the frame driver mutates, owned in one place.
pub struct SimState {
    pub uniforms: UniformSet,
    pub tween: LoopTween,
    pub pointer: PointerState,
    pub camera: Camera,
    pub path: TunnelPath,
}

impl SimState {
    pub fn new(aspect: f32) -> Result<Self, PathError> {
        let path = TunnelPath::new(path_points_vec3())?;
        Ok(Self {
            uniforms: UniformSet::default(),
            tween: LoopTween::new(FLIGHT_DURATION_SEC, true),
            pointer: PointerState::default(),
            camera: Camera::new(aspect),
            path,
        })
    }

    /// One simulation tick: advance flight progress by wall-clock `dt_sec`,
    /// place the camera, and step shader time by its fixed increment.
    pub fn advance(&mut self, dt_sec: f32) {
        let progress = self.tween.tick(dt_sec);
        aim_along_path(&mut self.camera, &self.path, progress, self.pointer);
        self.uniforms.advance_time();
    }
}
