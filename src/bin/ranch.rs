//! Tumbleweed Ranch
//!
//! Run with: `cargo run --bin ranch`
//!
//! A top-down ranch sandbox: wander the field while the camera follows with
//! a dead zone, stepped zoom, and world-edge clamping.
//!
//! Controls:
//! - WASD / Arrows: Move
//! - Q / E: Zoom out / in
//! - ESC: Pause (and back out of menus)
//! - Enter: Confirm menu entries

use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;
use glam::Vec2;
use tracing_subscriber::EnvFilter;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode as WinitKeyCode, PhysicalKey};
use winit::window::{Window, WindowAttributes, WindowId};

use tumbleweed_engine::game::config::SandboxConfig;
use tumbleweed_engine::game::scenes::SceneManager;
use tumbleweed_engine::input::{InputSnapshot, KeyCode, MouseButton};
use tumbleweed_engine::render::{GpuContext, GpuContextConfig, QuadPass};
use tumbleweed_engine::world::Letterbox;

/// Optional tuning overrides, read from beside the binary
const CONFIG_PATH: &str = "ranch.json";

/// Map a winit key code onto the engine's window-system-agnostic codes.
fn map_key(key: WinitKeyCode) -> KeyCode {
    match key {
        WinitKeyCode::KeyW => KeyCode::W,
        WinitKeyCode::KeyA => KeyCode::A,
        WinitKeyCode::KeyS => KeyCode::S,
        WinitKeyCode::KeyD => KeyCode::D,
        WinitKeyCode::KeyQ => KeyCode::Q,
        WinitKeyCode::KeyE => KeyCode::E,
        WinitKeyCode::ArrowUp => KeyCode::ArrowUp,
        WinitKeyCode::ArrowDown => KeyCode::ArrowDown,
        WinitKeyCode::ArrowLeft => KeyCode::ArrowLeft,
        WinitKeyCode::ArrowRight => KeyCode::ArrowRight,
        WinitKeyCode::Enter | WinitKeyCode::NumpadEnter => KeyCode::Enter,
        WinitKeyCode::Escape => KeyCode::Escape,
        _ => KeyCode::Unknown,
    }
}

fn map_mouse_button(button: winit::event::MouseButton) -> MouseButton {
    match button {
        winit::event::MouseButton::Left => MouseButton::Left,
        winit::event::MouseButton::Middle => MouseButton::Middle,
        winit::event::MouseButton::Right => MouseButton::Right,
        winit::event::MouseButton::Back => MouseButton::Other(3),
        winit::event::MouseButton::Forward => MouseButton::Other(4),
        winit::event::MouseButton::Other(id) => MouseButton::Other(id),
    }
}

struct AppState {
    window: Arc<Window>,
    gpu: GpuContext,
    quad_pass: QuadPass,
    letterbox: Letterbox,
    scenes: SceneManager,
    /// Current frame's accumulated input, consumed by the scene update
    input: InputSnapshot,
    last_frame_time: Instant,
    frame_count: u32,
    fps_update_time: Instant,
    title_base: String,
}

impl AppState {
    fn new(window: Arc<Window>, config: SandboxConfig) -> anyhow::Result<Self> {
        let gpu = GpuContext::new(window.clone(), GpuContextConfig::default())
            .context("failed to initialize the GPU")?;
        let quad_pass = QuadPass::new(&gpu);

        let (width, height) = gpu.dimensions();
        let letterbox = Letterbox::new(
            config.virtual_size(),
            Vec2::new(width as f32, height as f32),
        );

        let title_base = config.window_title.clone();
        let scenes = SceneManager::new(config);

        let now = Instant::now();
        Ok(Self {
            window,
            gpu,
            quad_pass,
            letterbox,
            scenes,
            input: InputSnapshot::default(),
            last_frame_time: now,
            frame_count: 0,
            fps_update_time: now,
            title_base,
        })
    }

    fn resize(&mut self, new_size: PhysicalSize<u32>) {
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }
        self.gpu.resize(new_size.width, new_size.height);
        self.letterbox = Letterbox::new(
            self.scenes.world.config.virtual_size(),
            Vec2::new(new_size.width as f32, new_size.height as f32),
        );
    }

    /// One frame: dt bookkeeping, scene update, draw-list build, GPU submit.
    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        let dt = (now - self.last_frame_time).as_secs_f32().clamp(0.0, 0.1);
        self.last_frame_time = now;

        // Once-per-second FPS readout in the title
        self.frame_count += 1;
        let fps_elapsed = (now - self.fps_update_time).as_secs_f32();
        if fps_elapsed >= 1.0 {
            let fps = self.frame_count as f32 / fps_elapsed;
            self.frame_count = 0;
            self.fps_update_time = now;
            self.window
                .set_title(&format!("{} | FPS: {:.0}", self.title_base, fps));
        }

        if self.scenes.update(dt, &self.input) {
            event_loop.exit();
            return;
        }

        let frame = self.scenes.draw(&self.letterbox);
        self.quad_pass.prepare(&self.gpu, &frame);

        match self.gpu.get_current_texture() {
            Ok(output) => {
                let view = output
                    .texture
                    .create_view(&wgpu::TextureViewDescriptor::default());
                let mut encoder =
                    self.gpu
                        .device
                        .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                            label: Some("Frame Encoder"),
                        });
                self.quad_pass.render(&mut encoder, &view, frame.clear_color);
                self.gpu.queue.submit(std::iter::once(encoder.finish()));
                output.present();
            }
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.resize(self.window.inner_size());
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                tracing::error!("surface out of memory");
                event_loop.exit();
            }
            Err(e) => tracing::warn!("surface error: {e:?}"),
        }
    }
}

struct App {
    /// Taken when the window comes up
    config: Option<SandboxConfig>,
    state: Option<AppState>,
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }
        let Some(config) = self.config.take() else {
            return;
        };

        let window_attrs = WindowAttributes::default()
            .with_title(&config.window_title)
            .with_inner_size(PhysicalSize::new(1280, 720));
        let window = match event_loop.create_window(window_attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                tracing::error!("failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        match AppState::new(window, config) {
            Ok(state) => self.state = Some(state),
            Err(e) => {
                tracing::error!("failed to initialize: {e:#}");
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let Some(state) = &mut self.state else {
            return;
        };

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                state.resize(new_size);
            }
            WindowEvent::Focused(false) => {
                // Keys released while unfocused would otherwise stay stuck
                state.input.reset();
            }
            WindowEvent::KeyboardInput {
                event:
                    winit::event::KeyEvent {
                        physical_key: PhysicalKey::Code(key),
                        state: key_state,
                        ..
                    },
                ..
            } => {
                state
                    .input
                    .handle_key(map_key(key), key_state == ElementState::Pressed);
            }
            WindowEvent::MouseInput {
                button,
                state: button_state,
                ..
            } => {
                state.input.set_button(
                    map_mouse_button(button),
                    button_state == ElementState::Pressed,
                );
            }
            WindowEvent::CursorMoved { position, .. } => {
                let screen = Vec2::new(position.x as f32, position.y as f32);
                state.input.set_pointer(state.letterbox.screen_to_virtual(screen));
            }
            WindowEvent::RedrawRequested => {
                state.redraw(event_loop);
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _: &ActiveEventLoop) {
        if let Some(state) = &self.state {
            state.window.request_redraw();
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = SandboxConfig::load(CONFIG_PATH).context("failed to load config")?;
    tracing::info!("starting {}", config.window_title);

    let event_loop = EventLoop::new().context("failed to create event loop")?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App {
        config: Some(config),
        state: None,
    };
    event_loop.run_app(&mut app).context("event loop failed")?;

    tracing::info!("shutting down");
    Ok(())
}
