//! Mouse Input Module
//!
//! Pointer snapshot tracking: position in virtual coordinates plus button
//! state. Decoupled from winit; the window shell translates raw events and
//! unprojects positions through the letterbox before they land here.

use glam::Vec2;

/// Mouse button identifier, independent of windowing system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
    /// Other buttons (back/forward etc.)
    Other(u16),
}

/// Per-frame pointer snapshot.
///
/// `Copy` so state machines can hold the previous frame's value and compare
/// explicitly for click edges. The position is in virtual coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerState {
    /// Pointer position in virtual coordinates
    pub position: Vec2,
    /// Primary button held
    pub left: bool,
    /// Secondary button held
    pub right: bool,
}

impl PointerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    /// Record a button press or release. Middle and extra buttons are not
    /// tracked.
    pub fn set_button(&mut self, button: MouseButton, pressed: bool) {
        match button {
            MouseButton::Left => self.left = pressed,
            MouseButton::Right => self.right = pressed,
            MouseButton::Middle | MouseButton::Other(_) => {}
        }
    }

    pub fn reset(&mut self) {
        self.left = false;
        self.right = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pointer_default() {
        let pointer = PointerState::new();
        assert_eq!(pointer.position, Vec2::ZERO);
        assert!(!pointer.left);
        assert!(!pointer.right);
    }

    #[test]
    fn test_set_button() {
        let mut pointer = PointerState::new();
        pointer.set_button(MouseButton::Left, true);
        assert!(pointer.left);
        pointer.set_button(MouseButton::Right, true);
        assert!(pointer.right);
        pointer.set_button(MouseButton::Left, false);
        assert!(!pointer.left);
    }

    #[test]
    fn test_untracked_buttons_ignored() {
        let mut pointer = PointerState::new();
        pointer.set_button(MouseButton::Middle, true);
        pointer.set_button(MouseButton::Other(4), true);
        assert!(!pointer.left);
        assert!(!pointer.right);
    }

    #[test]
    fn test_reset_keeps_position() {
        let mut pointer = PointerState::new();
        pointer.set_position(Vec2::new(12.0, 34.0));
        pointer.set_button(MouseButton::Left, true);
        pointer.reset();
        assert!(!pointer.left);
        assert_eq!(pointer.position, Vec2::new(12.0, 34.0));
    }
}
