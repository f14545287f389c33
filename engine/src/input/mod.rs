//! Input Module
//!
//! Provides platform-agnostic input handling for keyboard and mouse.
//! This module is decoupled from any specific windowing system (like winit)
//! to allow for flexible integration and device-free testing.
//!
//! The core never sees raw events. The window shell accumulates events into
//! an [`InputSnapshot`] and hands the same snapshot to everything that runs
//! that frame; consumers that need edge detection keep a copy of the previous
//! frame's snapshot and compare the two explicitly.
//!
//! # Example
//!
//! ```rust,ignore
//! use tumbleweed_engine::input::{InputSnapshot, KeyCode};
//!
//! let mut current = InputSnapshot::new();
//! current.handle_key(KeyCode::Escape, true);
//!
//! let previous = InputSnapshot::new();
//! if current.pressed_edge(KeyCode::Escape, &previous) {
//!     // Escape went down this frame
//! }
//! ```

pub mod keyboard;
pub mod mouse;

// Re-export commonly used types at module level
pub use keyboard::{KeyCode, KeyState};
pub use mouse::{MouseButton, PointerState};

use glam::Vec2;

/// Combined keyboard + pointer snapshot for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputSnapshot {
    pub keys: KeyState,
    pub pointer: PointerState,
}

impl InputSnapshot {
    /// Create a snapshot with all inputs in their default state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key press or release.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) -> bool {
        self.keys.handle_key(key, pressed)
    }

    /// Record a mouse button press or release.
    pub fn set_button(&mut self, button: MouseButton, pressed: bool) {
        self.pointer.set_button(button, pressed);
    }

    /// Record the pointer position (virtual coordinates).
    pub fn set_pointer(&mut self, position: Vec2) {
        self.pointer.set_position(position);
    }

    /// Is this named key currently held?
    pub fn is_down(&self, key: KeyCode) -> bool {
        self.keys.is_down(key)
    }

    /// Did this key go down between `previous` and now?
    pub fn pressed_edge(&self, key: KeyCode, previous: &InputSnapshot) -> bool {
        self.keys.is_down(key) && !previous.keys.is_down(key)
    }

    /// Did this key come up between `previous` and now?
    pub fn released_edge(&self, key: KeyCode, previous: &InputSnapshot) -> bool {
        !self.keys.is_down(key) && previous.keys.is_down(key)
    }

    /// Release all keys and buttons (focus loss). Pointer position is kept.
    pub fn reset(&mut self) {
        self.keys.reset();
        self.pointer.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_default() {
        let input = InputSnapshot::new();
        assert!(!input.is_down(KeyCode::W));
        assert!(!input.pointer.left);
    }

    #[test]
    fn test_pressed_edge_fires_once() {
        let previous = InputSnapshot::new();
        let mut current = InputSnapshot::new();
        current.handle_key(KeyCode::Escape, true);

        assert!(current.pressed_edge(KeyCode::Escape, &previous));
        // Held across the next frame: no new edge
        let held = current;
        assert!(!current.pressed_edge(KeyCode::Escape, &held));
    }

    #[test]
    fn test_released_edge() {
        let mut previous = InputSnapshot::new();
        previous.handle_key(KeyCode::Escape, true);
        let current = InputSnapshot::new();

        assert!(current.released_edge(KeyCode::Escape, &previous));
        assert!(!current.pressed_edge(KeyCode::Escape, &previous));
    }

    #[test]
    fn test_reset_clears_keys_and_buttons() {
        let mut input = InputSnapshot::new();
        input.handle_key(KeyCode::W, true);
        input.set_button(MouseButton::Left, true);
        input.set_pointer(Vec2::new(5.0, 6.0));
        input.reset();
        assert!(!input.is_down(KeyCode::W));
        assert!(!input.pointer.left);
        assert_eq!(input.pointer.position, Vec2::new(5.0, 6.0));
    }
}
