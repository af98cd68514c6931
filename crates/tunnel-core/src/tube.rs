use bytemuck::{Pod, Zeroable};
use glam::{Quat, Vec3};

use crate::path::TunnelPath;

/// Vertex layout shared with the GPU pipeline.
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct TubeVertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
}

/// Indexed tube surface: one ring of vertices per path sample.
#[derive(Clone, Debug, Default)]
pub struct TubeGeometry {
    pub vertices: Vec<TubeVertex>,
    pub indices: Vec<u32>,
}

impl TubeGeometry {
    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }
}

#[derive(Clone, Copy)]
struct RingFrame {
    normal: Vec3,
    binormal: Vec3,
}

/// Sweep a circle of `radius` along `path`.
///
/// `segments` rings along the length, `radial_segments` vertices around each
/// ring. Ring frames are parallel-transported so the cross-section does not
/// twist. With `closed` the last ring connects back to the first instead of
/// emitting a seam ring; either way the tube has no end caps.
pub fn build_tube(
    path: &TunnelPath,
    segments: usize,
    radius: f32,
    radial_segments: usize,
    closed: bool,
) -> TubeGeometry {
    let rings = if closed { segments } else { segments + 1 };
    let ring_verts = radial_segments + 1;
    let frames = transport_frames(path, rings, segments);

    let mut vertices = Vec::with_capacity(rings * ring_verts);
    for (j, frame) in frames.iter().enumerate() {
        let u = j as f32 / segments as f32;
        let center = path.point_at(u);
        for i in 0..ring_verts {
            let v = i as f32 / radial_segments as f32;
            let ang = v * std::f32::consts::TAU;
            let dir = frame.normal * ang.cos() + frame.binormal * ang.sin();
            let p = center + dir * radius;
            vertices.push(TubeVertex {
                position: p.to_array(),
                uv: [u, v],
            });
        }
    }

    let mut indices = Vec::with_capacity(segments * radial_segments * 6);
    for j in 0..segments {
        let ring0 = ((j % rings) * ring_verts) as u32;
        let ring1 = (((j + 1) % rings) * ring_verts) as u32;
        for i in 0..radial_segments as u32 {
            let a = ring0 + i;
            let b = ring1 + i;
            let c = ring1 + i + 1;
            let d = ring0 + i + 1;
            indices.extend_from_slice(&[a, b, d, b, c, d]);
        }
    }

    TubeGeometry { vertices, indices }
}

/// Parallel-transport one frame per ring along the path.
fn transport_frames(path: &TunnelPath, rings: usize, segments: usize) -> Vec<RingFrame> {
    let tangents: Vec<Vec3> = (0..rings)
        .map(|j| path.tangent_at(j as f32 / segments as f32))
        .collect();

    // Seed normal: any axis not parallel to the first tangent, projected
    // into the plane perpendicular to it.
    let mut seed = Vec3::Y;
    if seed.dot(tangents[0]).abs() > 0.9 {
        seed = Vec3::X;
    }
    let n0 = (seed - tangents[0] * seed.dot(tangents[0])).normalize_or_zero();

    let mut frames = Vec::with_capacity(rings);
    frames.push(RingFrame {
        normal: n0,
        binormal: tangents[0].cross(n0).normalize_or_zero(),
    });

    for j in 1..rings {
        let t_prev = tangents[j - 1];
        let t_cur = tangents[j];
        let mut normal = frames[j - 1].normal;

        // Rotate the previous normal by the rotation carrying t_prev to t_cur.
        let axis = t_prev.cross(t_cur);
        let axis_len = axis.length();
        if axis_len > 1e-8 {
            let angle = t_prev.dot(t_cur).clamp(-1.0, 1.0).acos();
            normal = Quat::from_axis_angle(axis / axis_len, angle) * normal;
        }
        normal = (normal - t_cur * normal.dot(t_cur)).normalize_or_zero();
        if normal.length_squared() < 1e-10 {
            normal = frames[j - 1].normal;
        }

        frames.push(RingFrame {
            normal,
            binormal: t_cur.cross(normal).normalize_or_zero(),
        });
    }

    frames
}
