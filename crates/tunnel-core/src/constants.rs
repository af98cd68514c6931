use glam::Vec3;

// Scene tuning constants shared by the frontend and the host-side tests.

// Material
pub const SMOOTHNESS: f32 = 1.0; // anti-alias width multiplier for grid lines
pub const GRID_DENSITY: f32 = 26.0; // grid cells per unit of surface uv
pub const NOISE_SCALE: f32 = 10.0; // value-noise frequency
pub const NOISE_SPEED: f32 = 0.5; // noise animation rate
pub const NOISE_STRENGTH: f32 = 0.15; // brightness added at full noise
pub const WIRE_COLOR: [f32; 3] = [1.0, 1.0, 1.0]; // grid line color (white)
pub const BASE_COLOR: [f32; 3] = [0.08, 0.08, 0.08]; // backdrop dark grey

// Flight path: ~70 units of depth with a lateral S-curve.
pub const PATH_POINTS: [[f32; 3]; 8] = [
    [0.0, 0.0, 0.0],
    [0.0, 0.0, -10.0],
    [3.0, 2.0, -20.0],
    [-3.0, -2.0, -30.0],
    [0.0, 0.0, -40.0],
    [2.0, 1.0, -50.0],
    [-2.0, -1.0, -60.0],
    [0.0, 0.0, -70.0],
];

// Tube sweep
pub const TUBE_SEGMENTS: usize = 300; // rings along the length
pub const TUBE_RADIUS: f32 = 2.0;
pub const TUBE_RADIAL_SEGMENTS: usize = 32; // vertices around each ring
pub const TUBE_CLOSED: bool = false; // open-ended, no caps

// Camera flight
pub const FLIGHT_DURATION_SEC: f32 = 10.0; // one full loop of the path
pub const LOOK_AHEAD: f32 = 0.01; // look-at fraction ahead of the eye
pub const SHAKE_STRENGTH: f32 = 0.3; // pointer parallax amplitude

// Render loop
pub const TIME_STEP: f32 = 0.01; // per-frame shader-time increment

// Camera projection
pub const CAMERA_FOVY_RADIANS: f32 = 75.0 * std::f32::consts::PI / 180.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;

// Initial window size (logical pixels)
pub const WINDOW_WIDTH: u32 = 1280;
pub const WINDOW_HEIGHT: u32 = 720;

#[inline]
pub fn path_points_vec3() -> Vec<Vec3> {
    PATH_POINTS.iter().copied().map(Vec3::from).collect()
}
