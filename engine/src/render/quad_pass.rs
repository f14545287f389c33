//! Quad Render Pass
//!
//! Draws everything the sandbox shows: one pipeline for textured,
//! vertex-colored, alpha-blended quads with no depth testing. Each frame the
//! active scene fills a [`FrameDraw`] with three quad lists - world-space
//! flat geometry, world-space sprites, screen-space UI - plus the transforms
//! to draw them under; the pass uploads the lists into dynamic buffers and
//! issues three draws.

use glam::{Mat4, Vec2};
use static_assertions::assert_eq_size;

use crate::render::{texture, GpuContext};
use crate::world::Rect;

/// Capacity of each dynamic vertex buffer
pub const VERTEX_BUFFER_CAPACITY: u64 = 512 * 1024;
/// Capacity of each dynamic index buffer
pub const INDEX_BUFFER_CAPACITY: u64 = 128 * 1024;

/// Vertex for quad rendering (position, uv, color)
#[repr(C)]
#[derive(Clone, Copy, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct QuadVertex {
    pub position: [f32; 2],
    pub uv: [f32; 2],
    pub color: [f32; 4],
}

// The WGSL vertex layout assumes this exact packing
assert_eq_size!(QuadVertex, [u8; 32]);

/// Uniform data for one draw list (the composed clip transform)
#[repr(C)]
#[derive(Clone, Copy, Debug, bytemuck::Pod, bytemuck::Zeroable)]
struct QuadUniforms {
    transform: [[f32; 4]; 4],
}

impl QuadUniforms {
    fn from_mat4(transform: Mat4) -> Self {
        Self {
            transform: transform.to_cols_array_2d(),
        }
    }
}

/// A CPU-side quad list. Always grows in whole quads (4 vertices, 6 indices).
#[derive(Debug, Clone, Default)]
pub struct Mesh2D {
    pub vertices: Vec<QuadVertex>,
    pub indices: Vec<u32>,
}

impl Mesh2D {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
        self.indices.clear();
    }

    /// Number of whole quads in the list.
    pub fn quad_count(&self) -> usize {
        self.indices.len() / 6
    }

    /// Add an axis-aligned quad spanning (x1,y1)..(x2,y2).
    pub fn add_quad(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, color: [f32; 4]) {
        let base = self.vertices.len() as u32;

        self.vertices.push(QuadVertex {
            position: [x1, y1],
            uv: [0.0, 0.0],
            color,
        });
        self.vertices.push(QuadVertex {
            position: [x2, y1],
            uv: [1.0, 0.0],
            color,
        });
        self.vertices.push(QuadVertex {
            position: [x2, y2],
            uv: [1.0, 1.0],
            color,
        });
        self.vertices.push(QuadVertex {
            position: [x1, y2],
            uv: [0.0, 1.0],
            color,
        });

        self.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    /// Add a filled rectangle.
    pub fn add_rect(&mut self, rect: Rect, color: [f32; 4]) {
        self.add_quad(rect.left(), rect.top(), rect.right(), rect.bottom(), color);
    }

    /// Add a textured sprite quad.
    ///
    /// # Arguments
    /// * `position` - World position of the origin point
    /// * `size` - Quad extent (scale is folded in here)
    /// * `origin` - Normalized origin inside the quad (0.5, 0.5 = centered)
    /// * `rotation` - Rotation around the origin, radians, clockwise
    /// * `color` - Tint multiplied with the texture
    pub fn add_sprite(
        &mut self,
        position: Vec2,
        size: Vec2,
        origin: Vec2,
        rotation: f32,
        color: [f32; 4],
    ) {
        let (sin, cos) = rotation.sin_cos();
        let min = -origin * size;
        let max = (Vec2::ONE - origin) * size;

        let corners = [
            (min.x, min.y, 0.0, 0.0),
            (max.x, min.y, 1.0, 0.0),
            (max.x, max.y, 1.0, 1.0),
            (min.x, max.y, 0.0, 1.0),
        ];

        let base = self.vertices.len() as u32;
        for (x, y, u, v) in corners {
            let rotated_x = x * cos - y * sin;
            let rotated_y = x * sin + y * cos;
            self.vertices.push(QuadVertex {
                position: [position.x + rotated_x, position.y + rotated_y],
                uv: [u, v],
                color,
            });
        }

        self.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
}

/// One frame's draw lists, built by the active scene. GPU-free, so scenes
/// and tests can construct it without a device.
#[derive(Debug, Clone)]
pub struct FrameDraw {
    /// World-space flat geometry (tile grid), drawn with the white texture
    pub world: Mesh2D,
    /// World-space sprite quads, drawn with the sprite texture
    pub sprites: Mesh2D,
    /// Screen-space UI quads in virtual coordinates
    pub ui: Mesh2D,
    /// Clip-from-world transform applied to `world` and `sprites`
    pub world_transform: Mat4,
    /// Clip-from-virtual transform applied to `ui`
    pub ui_transform: Mat4,
    /// Backbuffer clear color (sRGB values in 0..1)
    pub clear_color: [f64; 4],
}

impl Default for FrameDraw {
    fn default() -> Self {
        Self {
            world: Mesh2D::new(),
            sprites: Mesh2D::new(),
            ui: Mesh2D::new(),
            world_transform: Mat4::IDENTITY,
            ui_transform: Mat4::IDENTITY,
            clear_color: [0.05, 0.05, 0.08, 1.0],
        }
    }
}

impl FrameDraw {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Dynamic buffer pair holding one uploaded quad list.
struct MeshSlot {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
}

impl MeshSlot {
    fn new(gpu: &GpuContext, label: &str) -> Self {
        Self {
            vertex_buffer: gpu.create_dynamic_vertex_buffer(
                &format!("{} Vertex Buffer", label),
                VERTEX_BUFFER_CAPACITY,
            ),
            index_buffer: gpu.create_dynamic_index_buffer(
                &format!("{} Index Buffer", label),
                INDEX_BUFFER_CAPACITY,
            ),
            index_count: 0,
        }
    }

    fn upload(&mut self, gpu: &GpuContext, mesh: &Mesh2D) {
        let quads = mesh.quad_count().min(max_quads_per_slot());
        if quads < mesh.quad_count() {
            tracing::warn!(
                dropped = mesh.quad_count() - quads,
                "quad list exceeds buffer capacity, truncating"
            );
        }

        self.index_count = (quads * 6) as u32;
        if quads == 0 {
            return;
        }

        gpu.write_buffer(&self.vertex_buffer, &mesh.vertices[..quads * 4]);
        gpu.write_buffer(&self.index_buffer, &mesh.indices[..quads * 6]);
    }
}

/// Whole quads that fit in one slot's vertex and index buffers.
pub fn max_quads_per_slot() -> usize {
    let by_vertices = VERTEX_BUFFER_CAPACITY as usize / (4 * std::mem::size_of::<QuadVertex>());
    let by_indices = INDEX_BUFFER_CAPACITY as usize / (6 * std::mem::size_of::<u32>());
    by_vertices.min(by_indices)
}

/// The sandbox's single render pass.
pub struct QuadPass {
    pipeline: wgpu::RenderPipeline,
    world_uniform_buffer: wgpu::Buffer,
    world_uniform_bind: wgpu::BindGroup,
    ui_uniform_buffer: wgpu::Buffer,
    ui_uniform_bind: wgpu::BindGroup,
    white_texture_bind: wgpu::BindGroup,
    sprite_texture_bind: wgpu::BindGroup,
    world_slot: MeshSlot,
    sprite_slot: MeshSlot,
    ui_slot: MeshSlot,
}

impl QuadPass {
    pub fn new(gpu: &GpuContext) -> Self {
        let shader_source = include_str!("../../../shaders/quad.wgsl");
        let shader = gpu
            .device
            .create_shader_module(wgpu::ShaderModuleDescriptor {
                label: Some("Quad Shader"),
                source: wgpu::ShaderSource::Wgsl(shader_source.into()),
            });

        let uniform_layout =
            gpu.device
                .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                    label: Some("Quad Uniform Layout"),
                    entries: &[wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::VERTEX,
                        ty: wgpu::BindingType::Buffer {
                            ty: wgpu::BufferBindingType::Uniform,
                            has_dynamic_offset: false,
                            min_binding_size: None,
                        },
                        count: None,
                    }],
                });

        let texture_layout =
            gpu.device
                .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                    label: Some("Quad Texture Layout"),
                    entries: &[
                        wgpu::BindGroupLayoutEntry {
                            binding: 0,
                            visibility: wgpu::ShaderStages::FRAGMENT,
                            ty: wgpu::BindingType::Texture {
                                sample_type: wgpu::TextureSampleType::Float { filterable: true },
                                view_dimension: wgpu::TextureViewDimension::D2,
                                multisampled: false,
                            },
                            count: None,
                        },
                        wgpu::BindGroupLayoutEntry {
                            binding: 1,
                            visibility: wgpu::ShaderStages::FRAGMENT,
                            ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                            count: None,
                        },
                    ],
                });

        let sampler = gpu.device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("Quad Sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });

        let white_view = texture::create_white_texture(gpu);
        let sprite_view = texture::create_sprite_texture(gpu);

        let texture_bind = |label: &str, view: &wgpu::TextureView| {
            gpu.device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some(label),
                layout: &texture_layout,
                entries: &[
                    wgpu::BindGroupEntry {
                        binding: 0,
                        resource: wgpu::BindingResource::TextureView(view),
                    },
                    wgpu::BindGroupEntry {
                        binding: 1,
                        resource: wgpu::BindingResource::Sampler(&sampler),
                    },
                ],
            })
        };
        let white_texture_bind = texture_bind("White Texture Bind Group", &white_view);
        let sprite_texture_bind = texture_bind("Sprite Texture Bind Group", &sprite_view);

        let identity = QuadUniforms::from_mat4(Mat4::IDENTITY);
        let world_uniform_buffer = gpu.create_uniform_buffer("World Uniform Buffer", &identity);
        let ui_uniform_buffer = gpu.create_uniform_buffer("UI Uniform Buffer", &identity);

        let uniform_bind = |label: &str, buffer: &wgpu::Buffer| {
            gpu.device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some(label),
                layout: &uniform_layout,
                entries: &[wgpu::BindGroupEntry {
                    binding: 0,
                    resource: buffer.as_entire_binding(),
                }],
            })
        };
        let world_uniform_bind = uniform_bind("World Uniform Bind Group", &world_uniform_buffer);
        let ui_uniform_bind = uniform_bind("UI Uniform Bind Group", &ui_uniform_buffer);

        let pipeline_layout = gpu
            .device
            .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("Quad Pipeline Layout"),
                bind_group_layouts: &[&uniform_layout, &texture_layout],
                push_constant_ranges: &[],
            });

        let pipeline = gpu
            .device
            .create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some("Quad Pipeline"),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some("vs_main"),
                    buffers: &[wgpu::VertexBufferLayout {
                        array_stride: std::mem::size_of::<QuadVertex>() as u64,
                        step_mode: wgpu::VertexStepMode::Vertex,
                        attributes: &[
                            wgpu::VertexAttribute {
                                format: wgpu::VertexFormat::Float32x2,
                                offset: 0,
                                shader_location: 0,
                            },
                            wgpu::VertexAttribute {
                                format: wgpu::VertexFormat::Float32x2,
                                offset: 8,
                                shader_location: 1,
                            },
                            wgpu::VertexAttribute {
                                format: wgpu::VertexFormat::Float32x4,
                                offset: 16,
                                shader_location: 2,
                            },
                        ],
                    }],
                    compilation_options: Default::default(),
                },
                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some("fs_main"),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: gpu.surface_config.format,
                        blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                    compilation_options: Default::default(),
                }),
                primitive: wgpu::PrimitiveState {
                    topology: wgpu::PrimitiveTopology::TriangleList,
                    strip_index_format: None,
                    front_face: wgpu::FrontFace::Ccw,
                    cull_mode: None, // Quads are emitted in screen winding; nothing to cull
                    polygon_mode: wgpu::PolygonMode::Fill,
                    unclipped_depth: false,
                    conservative: false,
                },
                depth_stencil: None, // 2D painter's order, no depth
                multisample: wgpu::MultisampleState::default(),
                multiview: None,
                cache: None,
            });

        Self {
            pipeline,
            world_uniform_buffer,
            world_uniform_bind,
            ui_uniform_buffer,
            ui_uniform_bind,
            white_texture_bind,
            sprite_texture_bind,
            world_slot: MeshSlot::new(gpu, "World"),
            sprite_slot: MeshSlot::new(gpu, "Sprite"),
            ui_slot: MeshSlot::new(gpu, "UI"),
        }
    }

    /// Upload this frame's draw lists and transforms. Must run before
    /// [`Self::render`] each frame.
    pub fn prepare(&mut self, gpu: &GpuContext, frame: &FrameDraw) {
        gpu.write_buffer(
            &self.world_uniform_buffer,
            &[QuadUniforms::from_mat4(frame.world_transform)],
        );
        gpu.write_buffer(
            &self.ui_uniform_buffer,
            &[QuadUniforms::from_mat4(frame.ui_transform)],
        );

        self.world_slot.upload(gpu, &frame.world);
        self.sprite_slot.upload(gpu, &frame.sprites);
        self.ui_slot.upload(gpu, &frame.ui);
    }

    /// Record the frame's render pass: clear, then world, sprites, UI in
    /// painter's order.
    pub fn render(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        clear_color: [f64; 4],
    ) {
        let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Quad Render Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color {
                        r: clear_color[0],
                        g: clear_color[1],
                        b: clear_color[2],
                        a: clear_color[3],
                    }),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        pass.set_pipeline(&self.pipeline);

        let draws = [
            (&self.world_slot, &self.world_uniform_bind, &self.white_texture_bind),
            (&self.sprite_slot, &self.world_uniform_bind, &self.sprite_texture_bind),
            (&self.ui_slot, &self.ui_uniform_bind, &self.white_texture_bind),
        ];

        for (slot, uniforms, texture) in draws {
            if slot.index_count == 0 {
                continue;
            }
            pass.set_bind_group(0, uniforms, &[]);
            pass.set_bind_group(1, texture, &[]);
            pass.set_vertex_buffer(0, slot.vertex_buffer.slice(..));
            pass.set_index_buffer(slot.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
            pass.draw_indexed(0..slot.index_count, 0, 0..1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quad_vertex_is_32_bytes() {
        assert_eq!(std::mem::size_of::<QuadVertex>(), 32);
    }

    #[test]
    fn test_add_quad_counts() {
        let mut mesh = Mesh2D::new();
        mesh.add_quad(0.0, 0.0, 10.0, 10.0, [1.0; 4]);
        assert_eq!(mesh.vertices.len(), 4);
        assert_eq!(mesh.indices.len(), 6);
        assert_eq!(mesh.quad_count(), 1);
    }

    #[test]
    fn test_add_rect_matches_edges() {
        let mut mesh = Mesh2D::new();
        mesh.add_rect(Rect::new(5.0, 6.0, 10.0, 20.0), [1.0; 4]);
        assert_eq!(mesh.vertices[0].position, [5.0, 6.0]);
        assert_eq!(mesh.vertices[2].position, [15.0, 26.0]);
    }

    #[test]
    fn test_add_sprite_centered_origin() {
        let mut mesh = Mesh2D::new();
        mesh.add_sprite(
            Vec2::new(100.0, 100.0),
            Vec2::new(32.0, 32.0),
            Vec2::splat(0.5),
            0.0,
            [1.0; 4],
        );
        assert_eq!(mesh.vertices[0].position, [84.0, 84.0]);
        assert_eq!(mesh.vertices[2].position, [116.0, 116.0]);
    }

    #[test]
    fn test_add_sprite_quarter_turn() {
        let mut mesh = Mesh2D::new();
        mesh.add_sprite(
            Vec2::ZERO,
            Vec2::new(10.0, 10.0),
            Vec2::splat(0.5),
            std::f32::consts::FRAC_PI_2,
            [1.0; 4],
        );
        // Top-left corner (-5,-5) rotates to (5,-5)
        let p = mesh.vertices[0].position;
        assert!((p[0] - 5.0).abs() < 1e-4);
        assert!((p[1] + 5.0).abs() < 1e-4);
    }

    #[test]
    fn test_indices_reference_fresh_vertices() {
        let mut mesh = Mesh2D::new();
        mesh.add_quad(0.0, 0.0, 1.0, 1.0, [1.0; 4]);
        mesh.add_quad(2.0, 2.0, 3.0, 3.0, [1.0; 4]);
        assert_eq!(&mesh.indices[6..], &[4, 5, 6, 4, 6, 7]);
    }

    #[test]
    fn test_slot_capacity_is_vertex_bound() {
        // 512KB of 32-byte vertices = 4096 quads; 128KB of u32 indices = 5461
        assert_eq!(max_quads_per_slot(), 4096);
    }

    #[test]
    fn test_frame_draw_default() {
        let frame = FrameDraw::new();
        assert!(frame.world.is_empty());
        assert_eq!(frame.world_transform, Mat4::IDENTITY);
    }
}
