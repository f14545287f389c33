//! Procedural Textures
//!
//! The sandbox ships no image assets. The two textures it needs are built
//! in code at startup: a 1x1 white pixel backing every flat rectangle and
//! text quad, and an anti-aliased disc used as the player sprite. Both are
//! tinted per-vertex, so one white-on-transparent bitmap serves any color.

use crate::render::GpuContext;

/// Side length of the generated player sprite bitmap
pub const SPRITE_TEXTURE_SIZE: u32 = 64;

/// RGBA bytes for a white disc with an anti-aliased rim, centered in a
/// `size` x `size` bitmap.
pub fn generate_disc_rgba(size: u32) -> Vec<u8> {
    let mut pixels = Vec::with_capacity((size * size * 4) as usize);
    let center = (size as f32 - 1.0) * 0.5;
    let radius = size as f32 * 0.5 - 1.0;

    for y in 0..size {
        for x in 0..size {
            let dx = x as f32 - center;
            let dy = y as f32 - center;
            let dist = (dx * dx + dy * dy).sqrt();
            // Solid inside, one-pixel linear falloff at the rim
            let coverage = (radius - dist + 1.0).clamp(0.0, 1.0);
            let alpha = (coverage * 255.0).round() as u8;
            pixels.extend_from_slice(&[255, 255, 255, alpha]);
        }
    }

    pixels
}

/// Upload an RGBA bitmap and return a view usable in a texture bind group.
pub fn create_rgba_texture(
    gpu: &GpuContext,
    label: &str,
    width: u32,
    height: u32,
    pixels: &[u8],
) -> wgpu::TextureView {
    let texture = gpu.device.create_texture(&wgpu::TextureDescriptor {
        label: Some(label),
        size: wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: wgpu::TextureFormat::Rgba8UnormSrgb,
        usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
        view_formats: &[],
    });

    gpu.queue.write_texture(
        wgpu::TexelCopyTextureInfo {
            texture: &texture,
            mip_level: 0,
            origin: wgpu::Origin3d::ZERO,
            aspect: wgpu::TextureAspect::All,
        },
        pixels,
        wgpu::TexelCopyBufferLayout {
            offset: 0,
            bytes_per_row: Some(width * 4),
            rows_per_image: Some(height),
        },
        wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        },
    );

    texture.create_view(&wgpu::TextureViewDescriptor::default())
}

/// 1x1 opaque white texture backing untextured fills.
pub fn create_white_texture(gpu: &GpuContext) -> wgpu::TextureView {
    create_rgba_texture(gpu, "White Texture", 1, 1, &[255, 255, 255, 255])
}

/// The generated player sprite.
pub fn create_sprite_texture(gpu: &GpuContext) -> wgpu::TextureView {
    let pixels = generate_disc_rgba(SPRITE_TEXTURE_SIZE);
    create_rgba_texture(
        gpu,
        "Sprite Texture",
        SPRITE_TEXTURE_SIZE,
        SPRITE_TEXTURE_SIZE,
        &pixels,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disc_dimensions() {
        let pixels = generate_disc_rgba(16);
        assert_eq!(pixels.len(), 16 * 16 * 4);
    }

    #[test]
    fn test_disc_center_opaque_corners_clear() {
        let size = 32;
        let pixels = generate_disc_rgba(size);
        let alpha_at = |x: u32, y: u32| pixels[((y * size + x) * 4 + 3) as usize];

        assert_eq!(alpha_at(size / 2, size / 2), 255);
        assert_eq!(alpha_at(0, 0), 0);
        assert_eq!(alpha_at(size - 1, 0), 0);
        assert_eq!(alpha_at(0, size - 1), 0);
        assert_eq!(alpha_at(size - 1, size - 1), 0);
    }

    #[test]
    fn test_disc_alpha_falls_off_along_radius() {
        let size = 32;
        let pixels = generate_disc_rgba(size);
        let alpha_at = |x: u32| pixels[(((size / 2) * size + x) * 4 + 3) as usize];

        // Scanning outward from the center along one row never increases alpha
        let mut previous = alpha_at(size / 2);
        for x in (size / 2)..size {
            let current = alpha_at(x);
            assert!(current <= previous);
            previous = current;
        }
    }

    #[test]
    fn test_disc_is_white_everywhere() {
        let pixels = generate_disc_rgba(8);
        for pixel in pixels.chunks_exact(4) {
            assert_eq!(&pixel[..3], &[255, 255, 255]);
        }
    }
}
