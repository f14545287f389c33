//! UI Button
//!
//! A rectangular click target with a centered label. Activation fires on the
//! press edge of the primary pointer button, so holding the button down over
//! a widget does not retrigger it.

use crate::input::PointerState;
use crate::render::Mesh2D;
use crate::world::Rect;

use super::text::draw_text_centered;

/// A single UI button
#[derive(Clone, Debug)]
pub struct Button {
    /// Hit area in virtual coordinates
    pub bounds: Rect,
    /// Label drawn centered in the bounds
    pub label: String,
}

impl Button {
    pub fn new(bounds: Rect, label: impl Into<String>) -> Self {
        Self {
            bounds,
            label: label.into(),
        }
    }

    /// Check if the pointer is within this button
    pub fn is_hovered(&self, pointer: &PointerState) -> bool {
        self.bounds.contains(pointer.position)
    }

    /// True on the frame the primary button goes down while the pointer is
    /// inside the bounds. `previous` is the snapshot from the prior frame.
    pub fn is_clicked(&self, current: &PointerState, previous: &PointerState) -> bool {
        self.is_hovered(current) && current.left && !previous.left
    }

    /// Draw the button background and centered label into a UI mesh.
    pub fn draw(&self, mesh: &mut Mesh2D, text_scale: f32, background: [f32; 4], text_color: [f32; 4]) {
        mesh.add_rect(self.bounds, background);
        draw_text_centered(mesh, &self.label, self.bounds.center(), text_scale, text_color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn pointer(x: f32, y: f32, left: bool) -> PointerState {
        let mut p = PointerState::default();
        p.set_position(Vec2::new(x, y));
        p.left = left;
        p
    }

    #[test]
    fn test_click_requires_press_edge() {
        let button = Button::new(Rect::new(10.0, 10.0, 100.0, 40.0), "PLAY");
        let inside_up = pointer(50.0, 20.0, false);
        let inside_down = pointer(50.0, 20.0, true);

        // Fresh press inside fires
        assert!(button.is_clicked(&inside_down, &inside_up));
        // Held from last frame does not
        assert!(!button.is_clicked(&inside_down, &inside_down));
        // Released this frame does not
        assert!(!button.is_clicked(&inside_up, &inside_down));
    }

    #[test]
    fn test_click_outside_bounds_ignored() {
        let button = Button::new(Rect::new(10.0, 10.0, 100.0, 40.0), "PLAY");
        let outside_up = pointer(500.0, 500.0, false);
        let outside_down = pointer(500.0, 500.0, true);
        assert!(!button.is_clicked(&outside_down, &outside_up));
    }

    #[test]
    fn test_hover_tracks_bounds() {
        let button = Button::new(Rect::new(0.0, 0.0, 50.0, 50.0), "X");
        assert!(button.is_hovered(&pointer(25.0, 25.0, false)));
        assert!(!button.is_hovered(&pointer(75.0, 25.0, false)));
    }

    #[test]
    fn test_draw_emits_background_and_label() {
        let button = Button::new(Rect::new(0.0, 0.0, 120.0, 40.0), "OK");
        let mut mesh = Mesh2D::new();
        button.draw(&mut mesh, 2.0, [0.2, 0.2, 0.2, 1.0], [1.0; 4]);
        // Background quad plus at least one glyph pixel
        assert!(mesh.quad_count() > 1);
    }
}
