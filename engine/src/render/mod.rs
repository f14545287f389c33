//! Render Module
//!
//! Thin wgpu rendering layer for the sandbox: GPU context/device setup,
//! procedurally generated textures, and a single alpha-blended quad pass.
//! Scenes never touch wgpu directly - they build [`FrameDraw`] quad lists
//! and the pass draws them.

pub mod gpu_context;
pub mod quad_pass;
pub mod texture;

// Re-export commonly used types for convenience
pub use gpu_context::{GpuContext, GpuContextConfig, RenderError};
pub use quad_pass::{
    FrameDraw, Mesh2D, QuadPass, QuadVertex, max_quads_per_slot, INDEX_BUFFER_CAPACITY,
    VERTEX_BUFFER_CAPACITY,
};
pub use texture::{
    create_rgba_texture, create_sprite_texture, create_white_texture, generate_disc_rgba,
    SPRITE_TEXTURE_SIZE,
};
