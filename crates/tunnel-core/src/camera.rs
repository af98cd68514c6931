use glam::{Mat4, Vec3};

use crate::constants::{
    CAMERA_FOVY_RADIANS, CAMERA_ZFAR, CAMERA_ZNEAR, LOOK_AHEAD, SHAKE_STRENGTH,
};
use crate::path::TunnelPath;
use crate::state::PointerState;

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn new(aspect: f32) -> Self {
        Self {
            eye: Vec3::ZERO,
            target: Vec3::NEG_Z,
            up: Vec3::Y,
            aspect,
            fovy_radians: CAMERA_FOVY_RADIANS,
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }

    /// Track a new viewport size. Zero-sized viewports are ignored.
    pub fn set_aspect(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

/// Fraction of the path the camera looks toward: slightly ahead of
/// `progress`, wrapping across the loop seam so the orientation stays
/// continuous through a full lap.
#[inline]
pub fn look_ahead_fraction(progress: f32) -> f32 {
    (progress + LOOK_AHEAD) % 1.0
}

/// Place the camera on the flight path for the current tick.
///
/// The pointer offset shifts the eye laterally and vertically only; the
/// look-at target stays on the path so the view keeps pointing down the
/// tunnel.
pub fn aim_along_path(
    camera: &mut Camera,
    path: &TunnelPath,
    progress: f32,
    pointer: PointerState,
) {
    let a = path.point_at(progress);
    let b = path.point_at(look_ahead_fraction(progress));

    camera.eye = Vec3::new(
        a.x + pointer.x * SHAKE_STRENGTH,
        a.y + pointer.y * SHAKE_STRENGTH,
        a.z,
    );
    camera.target = b;
}
