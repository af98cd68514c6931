use std::time::Instant;

use winit::{
    event::{ElementState, Event, WindowEvent},
    event_loop::EventLoop,
    keyboard::{KeyCode, PhysicalKey},
    window::WindowBuilder,
};

use tunnel_core::{
    build_tube, pointer_ndc, SimState, TUBE_CLOSED, TUBE_RADIAL_SEGMENTS, TUBE_RADIUS,
    TUBE_SEGMENTS, WINDOW_HEIGHT, WINDOW_WIDTH,
};

mod render;
use render::GpuState;

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Grid Tunnel")
        .with_inner_size(winit::dpi::LogicalSize::new(
            WINDOW_WIDTH as f64,
            WINDOW_HEIGHT as f64,
        ))
        .build(&event_loop)?;

    let size = window.inner_size();
    let mut sim = SimState::new(size.width.max(1) as f32 / size.height.max(1) as f32)?;
    // The demo starts with the noise effect off; Space flips it at runtime.
    sim.uniforms.set_displacement_enabled(false);

    let geometry = build_tube(
        &sim.path,
        TUBE_SEGMENTS,
        TUBE_RADIUS,
        TUBE_RADIAL_SEGMENTS,
        TUBE_CLOSED,
    );
    log::info!(
        "tunnel mesh: {} vertices, {} indices",
        geometry.vertices.len(),
        geometry.indices.len()
    );

    let mut gpu = pollster::block_on(GpuState::new(&window, &geometry))?;
    let mut last_frame = Instant::now();

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::Resized(size) => {
                sim.camera.set_aspect(size.width, size.height);
                gpu.resize(size);
            }
            WindowEvent::CursorMoved { position, .. } => {
                let (w, h) = gpu.size();
                sim.pointer = pointer_ndc(
                    position.x as f32,
                    position.y as f32,
                    w as f32,
                    h as f32,
                );
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed && !event.repeat {
                    match event.physical_key {
                        PhysicalKey::Code(KeyCode::Space) => {
                            let enabled = !sim.uniforms.displacement_enabled;
                            sim.uniforms.set_displacement_enabled(enabled);
                        }
                        PhysicalKey::Code(KeyCode::Escape) => elwt.exit(),
                        _ => {}
                    }
                }
            }
            _ => {}
        },
        Event::AboutToWait => {
            let now = Instant::now();
            let dt = (now - last_frame).as_secs_f32();
            last_frame = now;
            sim.advance(dt);
            match gpu.render(&sim) {
                Ok(()) => gpu.window().request_redraw(),
                Err(wgpu::SurfaceError::Lost) => gpu.resize(gpu.window().inner_size()),
                Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                Err(e) => log::error!("render error: {e:?}"),
            }
        }
        _ => {}
    })?;

    Ok(())
}
