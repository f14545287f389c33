//! Keyboard Input Module
//!
//! Keyboard snapshot tracking for the sandbox's bound keys.
//! Decoupled from winit to use generic key codes.

/// Generic key codes for the keys the sandbox binds, independent of
/// windowing system.
///
/// These map to standard keyboard keys but are not tied to winit::keyboard::KeyCode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    // Movement keys
    W,
    A,
    S,
    D,

    // Zoom keys
    Q,
    E,

    // Arrow keys
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    // Control keys
    Enter,
    Escape,

    /// Catch-all for unhandled keys
    Unknown,
}

/// Held/released snapshot of every bound key.
///
/// One boolean per key so the struct stays `Copy`; state machines store the
/// previous frame's snapshot and compare explicitly for edge detection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyState {
    pub w: bool,
    pub a: bool,
    pub s: bool,
    pub d: bool,
    pub q: bool,
    pub e: bool,
    pub arrow_up: bool,
    pub arrow_down: bool,
    pub arrow_left: bool,
    pub arrow_right: bool,
    pub enter: bool,
    pub escape: bool,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key press or release.
    ///
    /// Returns true if the key was one of the tracked keys.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) -> bool {
        match key {
            KeyCode::W => self.w = pressed,
            KeyCode::A => self.a = pressed,
            KeyCode::S => self.s = pressed,
            KeyCode::D => self.d = pressed,
            KeyCode::Q => self.q = pressed,
            KeyCode::E => self.e = pressed,
            KeyCode::ArrowUp => self.arrow_up = pressed,
            KeyCode::ArrowDown => self.arrow_down = pressed,
            KeyCode::ArrowLeft => self.arrow_left = pressed,
            KeyCode::ArrowRight => self.arrow_right = pressed,
            KeyCode::Enter => self.enter = pressed,
            KeyCode::Escape => self.escape = pressed,
            KeyCode::Unknown => return false,
        }
        true
    }

    /// Is this named key currently held?
    pub fn is_down(&self, key: KeyCode) -> bool {
        match key {
            KeyCode::W => self.w,
            KeyCode::A => self.a,
            KeyCode::S => self.s,
            KeyCode::D => self.d,
            KeyCode::Q => self.q,
            KeyCode::E => self.e,
            KeyCode::ArrowUp => self.arrow_up,
            KeyCode::ArrowDown => self.arrow_down,
            KeyCode::ArrowLeft => self.arrow_left,
            KeyCode::ArrowRight => self.arrow_right,
            KeyCode::Enter => self.enter,
            KeyCode::Escape => self.escape,
            KeyCode::Unknown => false,
        }
    }

    pub fn any_pressed(&self) -> bool {
        self.w
            || self.a
            || self.s
            || self.d
            || self.q
            || self.e
            || self.arrow_up
            || self.arrow_down
            || self.arrow_left
            || self.arrow_right
            || self.enter
            || self.escape
    }

    /// Release every key. Used when the window loses focus so keys do not
    /// stay stuck down.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_state_default() {
        let keys = KeyState::new();
        assert!(!keys.any_pressed());
        assert!(!keys.is_down(KeyCode::W));
    }

    #[test]
    fn test_handle_key_press_and_release() {
        let mut keys = KeyState::new();
        assert!(keys.handle_key(KeyCode::Escape, true));
        assert!(keys.is_down(KeyCode::Escape));
        assert!(keys.any_pressed());

        assert!(keys.handle_key(KeyCode::Escape, false));
        assert!(!keys.is_down(KeyCode::Escape));
        assert!(!keys.any_pressed());
    }

    #[test]
    fn test_unknown_key_ignored() {
        let mut keys = KeyState::new();
        assert!(!keys.handle_key(KeyCode::Unknown, true));
        assert!(!keys.any_pressed());
    }

    #[test]
    fn test_reset_releases_everything() {
        let mut keys = KeyState::new();
        keys.handle_key(KeyCode::W, true);
        keys.handle_key(KeyCode::Enter, true);
        keys.reset();
        assert!(!keys.any_pressed());
    }
}
