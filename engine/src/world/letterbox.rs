//! Letterbox Module
//!
//! Maps a fixed virtual resolution onto the real backbuffer with a uniform
//! scale and centering bars. The resulting matrix is computed on resize only
//! and composed *outside* the camera transform, so game and UI code always
//! work in virtual coordinates regardless of the window size.

use glam::{Mat4, Vec2, Vec3};

/// Virtual-resolution fit for the current backbuffer.
#[derive(Debug, Clone, Copy)]
pub struct Letterbox {
    /// Uniform virtual-to-physical scale factor
    pub scale: f32,
    /// Physical-pixel offset of the virtual origin (the bar widths)
    pub offset: Vec2,
    /// Logical coordinate space size
    pub virtual_size: Vec2,
    /// Physical backbuffer size
    pub screen_size: Vec2,
}

impl Letterbox {
    /// Fit `virtual_size` into `screen_size`, preserving aspect ratio.
    ///
    /// A zero or degenerate screen size (minimized window) falls back to a
    /// scale of 1.0 so downstream math stays finite.
    pub fn new(virtual_size: Vec2, screen_size: Vec2) -> Self {
        let raw = (screen_size.x / virtual_size.x).min(screen_size.y / virtual_size.y);
        let scale = if raw.is_finite() && raw > 0.0 { raw } else { 1.0 };
        let offset = (screen_size - virtual_size * scale) * 0.5;
        Self {
            scale,
            offset,
            virtual_size,
            screen_size,
        }
    }

    /// Virtual-space to physical-pixel transform.
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_translation(self.offset.extend(0.0))
            * Mat4::from_scale(Vec3::new(self.scale, self.scale, 1.0))
    }

    /// Physical-pixel to clip-space projection for the current backbuffer.
    pub fn projection(&self) -> Mat4 {
        Mat4::orthographic_rh(0.0, self.screen_size.x, self.screen_size.y, 0.0, -1.0, 1.0)
    }

    /// Composed virtual-space to clip-space transform, ready to prepend to a
    /// camera view transform (or used alone for screen-space UI).
    pub fn clip_from_virtual(&self) -> Mat4 {
        self.projection() * self.matrix()
    }

    /// Unproject a physical-pixel pointer position into virtual coordinates.
    pub fn screen_to_virtual(&self, point: Vec2) -> Vec2 {
        (point - self.offset) / self.scale
    }
}
