//! Input Configuration
//!
//! Defines all key bindings as a data structure, enabling future remapping
//! and centralizing input documentation. Scenes read bindings from here
//! instead of matching on raw key codes.

use crate::input::{InputSnapshot, KeyCode};
use crate::player::MoveInput;

/// Movement key bindings (WASD with arrow-key alternates).
#[derive(Clone, Debug)]
pub struct MovementBindings {
    pub up: [KeyCode; 2],
    pub down: [KeyCode; 2],
    pub left: [KeyCode; 2],
    pub right: [KeyCode; 2],
}

/// Camera zoom key bindings.
#[derive(Clone, Debug)]
pub struct CameraBindings {
    pub zoom_out: KeyCode,
    pub zoom_in: KeyCode,
}

/// Menu navigation key bindings.
#[derive(Clone, Debug)]
pub struct MenuBindings {
    pub accept: KeyCode,
    pub back: KeyCode,
}

/// Centralized input configuration containing all key bindings.
///
/// `InputConfig::default()` returns the shipped bindings.
#[derive(Clone, Debug)]
pub struct InputConfig {
    pub movement: MovementBindings,
    pub camera: CameraBindings,
    pub menu: MenuBindings,
    /// Toggles pause while playing
    pub pause: KeyCode,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            movement: MovementBindings {
                up: [KeyCode::W, KeyCode::ArrowUp],
                down: [KeyCode::S, KeyCode::ArrowDown],
                left: [KeyCode::A, KeyCode::ArrowLeft],
                right: [KeyCode::D, KeyCode::ArrowRight],
            },
            camera: CameraBindings {
                zoom_out: KeyCode::Q,
                zoom_in: KeyCode::E,
            },
            menu: MenuBindings {
                accept: KeyCode::Enter,
                back: KeyCode::Escape,
            },
            pause: KeyCode::Escape,
        }
    }
}

impl InputConfig {
    fn any_down(input: &InputSnapshot, keys: &[KeyCode; 2]) -> bool {
        keys.iter().any(|&key| input.is_down(key))
    }

    /// Sample the movement bindings into a direction request.
    pub fn movement_input(&self, input: &InputSnapshot) -> MoveInput {
        MoveInput {
            up: Self::any_down(input, &self.movement.up),
            down: Self::any_down(input, &self.movement.down),
            left: Self::any_down(input, &self.movement.left),
            right: Self::any_down(input, &self.movement.right),
        }
    }

    fn any_edge(input: &InputSnapshot, previous: &InputSnapshot, keys: &[KeyCode; 2]) -> bool {
        keys.iter().any(|&key| input.pressed_edge(key, previous))
    }

    /// Menu navigation: move the highlight down (shares the movement keys).
    pub fn menu_down_edge(&self, input: &InputSnapshot, previous: &InputSnapshot) -> bool {
        Self::any_edge(input, previous, &self.movement.down)
    }

    /// Menu navigation: move the highlight up.
    pub fn menu_up_edge(&self, input: &InputSnapshot, previous: &InputSnapshot) -> bool {
        Self::any_edge(input, previous, &self.movement.up)
    }

    /// Accept key press edge.
    pub fn accept_edge(&self, input: &InputSnapshot, previous: &InputSnapshot) -> bool {
        input.pressed_edge(self.menu.accept, previous)
    }

    /// Back/cancel key press edge.
    pub fn back_edge(&self, input: &InputSnapshot, previous: &InputSnapshot) -> bool {
        input.pressed_edge(self.menu.back, previous)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_and_alternate_both_move() {
        let config = InputConfig::default();

        let mut wasd = InputSnapshot::default();
        wasd.handle_key(KeyCode::W, true);
        assert!(config.movement_input(&wasd).up);

        let mut arrows = InputSnapshot::default();
        arrows.handle_key(KeyCode::ArrowUp, true);
        assert!(config.movement_input(&arrows).up);
    }

    #[test]
    fn test_idle_input_requests_no_movement() {
        let config = InputConfig::default();
        let idle = InputSnapshot::default();
        assert!(!config.movement_input(&idle).any());
    }

    #[test]
    fn test_menu_edges_fire_once_per_press() {
        let config = InputConfig::default();
        let mut down = InputSnapshot::default();
        down.handle_key(KeyCode::S, true);
        let idle = InputSnapshot::default();

        assert!(config.menu_down_edge(&down, &idle));
        // Held across frames: no new edge
        assert!(!config.menu_down_edge(&down, &down));
    }
}
