//! Rectangle Module
//!
//! Axis-aligned rectangle value type shared across the engine: camera dead
//! zones and world bounds, viewports, and UI hit testing all speak `Rect`.
//! Coordinates are screen-style (origin top-left, y grows downward).

use glam::Vec2;

/// Axis-aligned rectangle in screen-style coordinates.
///
/// Edges are derived accessors, never stored alongside the origin/size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    /// Create a rectangle from its top-left corner and size.
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Create a rectangle centered on a point.
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        Self {
            x: center.x - size.x * 0.5,
            y: center.y - size.y * 0.5,
            w: size.x,
            h: size.y,
        }
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w * 0.5, self.y + self.h * 0.5)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.w, self.h)
    }

    /// Point-in-rectangle test. Left/top edges are inclusive, right/bottom
    /// exclusive, so adjacent rectangles never claim the same point.
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.left()
            && point.x < self.right()
            && point.y >= self.top()
            && point.y < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges() {
        let r = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(r.left(), 10.0);
        assert_eq!(r.right(), 110.0);
        assert_eq!(r.top(), 20.0);
        assert_eq!(r.bottom(), 70.0);
    }

    #[test]
    fn test_center_and_size() {
        let r = Rect::new(0.0, 0.0, 200.0, 100.0);
        assert_eq!(r.center(), Vec2::new(100.0, 50.0));
        assert_eq!(r.size(), Vec2::new(200.0, 100.0));
    }

    #[test]
    fn test_from_center_round_trips() {
        let r = Rect::from_center(Vec2::new(50.0, 50.0), Vec2::new(20.0, 40.0));
        assert_eq!(r.x, 40.0);
        assert_eq!(r.y, 30.0);
        assert_eq!(r.center(), Vec2::new(50.0, 50.0));
    }

    #[test]
    fn test_contains() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(r.contains(Vec2::new(0.0, 0.0)));
        assert!(r.contains(Vec2::new(5.0, 5.0)));
        assert!(!r.contains(Vec2::new(10.0, 5.0)));
        assert!(!r.contains(Vec2::new(5.0, 10.0)));
        assert!(!r.contains(Vec2::new(-0.1, 5.0)));
    }
}
