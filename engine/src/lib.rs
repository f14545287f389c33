//! Tumbleweed Engine Library
//!
//! Engine layer for the Tumbleweed Ranch sandbox: a bounded 2D world, a
//! dead-zone follow camera with discrete zoom levels, and a thin wgpu quad
//! renderer behind a GPU-free draw-list boundary.
//!
//! # Modules
//!
//! - [`camera`] - Dead-zone follow camera with zoom cycling and world clamping
//! - [`input`] - Platform-agnostic input snapshots for keyboard and mouse
//! - [`player`] - Player entity movement with world-bounds clamping
//! - [`render`] - wgpu context and the textured quad pass
//! - [`world`] - Rectangle and letterbox value types
//!
//! # Example
//!
//! ```ignore
//! use tumbleweed_engine::camera::FollowCamera;
//! use tumbleweed_engine::input::{InputSnapshot, KeyCode};
//! use tumbleweed_engine::player::{MoveInput, Player};
//! use tumbleweed_engine::world::Rect;
//! use glam::Vec2;
//!
//! let world_bounds = Rect::new(0.0, 0.0, 2400.0, 1800.0);
//! let viewport = Rect::new(0.0, 0.0, 960.0, 540.0);
//!
//! let mut player = Player::new(world_bounds.center(), world_bounds);
//! let mut camera = FollowCamera::new(viewport, world_bounds);
//! camera.snap_to(player.position);
//!
//! // Each frame:
//! let move_input = MoveInput { right: true, ..Default::default() };
//! player.update(move_input, delta_time);
//! camera.update(player.position, delta_time);
//! let view = camera.view_transform();
//! ```

pub mod camera;
pub mod input;
pub mod player;
pub mod render;
pub mod world;

// Game-specific modules (located in src/game/ directory)
#[path = "../../src/game/mod.rs"]
pub mod game;

// Re-export commonly used engine types at crate level for convenience
pub use camera::{FollowCamera, ZoomDirection};
pub use input::{InputSnapshot, KeyCode, KeyState, MouseButton, PointerState};
pub use player::{MoveInput, Player};
pub use render::{FrameDraw, GpuContext, GpuContextConfig, Mesh2D, QuadPass, RenderError};
pub use world::{Letterbox, Rect};
