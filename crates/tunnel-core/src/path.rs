use glam::Vec3;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PathError {
    #[error("a tunnel path needs at least 2 control points, got {0}")]
    TooFewPoints(usize),
}

/// Smooth flight path through a fixed sequence of control points.
///
/// Uniform Catmull-Rom interpolation in cubic Hermite form. The curve passes
/// through every control point; end segments reuse the nearest neighbor so
/// the first and last points are interpolated exactly.
#[derive(Clone, Debug)]
pub struct TunnelPath {
    points: Vec<Vec3>,
}

impl TunnelPath {
    pub fn new(points: Vec<Vec3>) -> Result<Self, PathError> {
        if points.len() < 2 {
            return Err(PathError::TooFewPoints(points.len()));
        }
        Ok(Self { points })
    }

    pub fn control_points(&self) -> &[Vec3] {
        &self.points
    }

    /// Evaluate the curve at `u` in `[0, 1]`. Out-of-range inputs are clamped.
    pub fn point_at(&self, u: f32) -> Vec3 {
        let u = u.clamp(0.0, 1.0);
        let segments = (self.points.len() - 1) as f32;
        let scaled = u * segments;

        let i1 = (scaled.floor() as usize).min(self.points.len() - 2);
        let t = scaled - i1 as f32;
        let i0 = i1.saturating_sub(1);
        let i2 = i1 + 1;
        let i3 = (i1 + 2).min(self.points.len() - 1);

        catmull_rom(
            self.points[i0],
            self.points[i1],
            self.points[i2],
            self.points[i3],
            t,
        )
    }

    /// Unit tangent at `u`, from a central difference.
    pub fn tangent_at(&self, u: f32) -> Vec3 {
        let eps = 5e-4;
        let a = self.point_at((u - eps).max(0.0));
        let b = self.point_at((u + eps).min(1.0));
        (b - a).normalize_or_zero()
    }
}

fn catmull_rom(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3, t: f32) -> Vec3 {
    let v0 = (p2 - p0) * 0.5;
    let v1 = (p3 - p1) * 0.5;

    let t2 = t * t;
    let t3 = t2 * t;

    let h00 = 2.0 * t3 - 3.0 * t2 + 1.0;
    let h10 = t3 - 2.0 * t2 + t;
    let h01 = -2.0 * t3 + 3.0 * t2;
    let h11 = t3 - t2;

    p1 * h00 + v0 * h10 + p2 * h01 + v1 * h11
}
