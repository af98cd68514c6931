pub mod camera;
pub mod constants;
pub mod path;
pub mod shading;
pub mod state;
pub mod tube;
pub mod tween;
pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

pub use camera::*;
pub use constants::*;
pub use path::*;
pub use shading::*;
pub use state::*;
pub use tube::*;
pub use tween::*;
