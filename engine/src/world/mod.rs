//! World Module
//!
//! World-space value types shared across the engine: axis-aligned rectangles
//! (dead zones, bounds, viewports) and the virtual-resolution letterbox fit.
//! Coordinates are 2D screen-style, origin top-left, y down, 1 unit = 1
//! virtual pixel.

pub mod letterbox;
pub mod rect;

pub use letterbox::Letterbox;
pub use rect::Rect;
