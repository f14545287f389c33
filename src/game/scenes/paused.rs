//! Paused Scene
//!
//! Freezes the world and overlays a pause menu. The world keeps rendering
//! exactly as the playing scene left it, but nothing simulates.
//!
//! Escape both enters and leaves this scene, so resume-by-escape is gated:
//! the key must be seen released inside the pause scene before a fresh press
//! can resume. Without the gate a held escape would bounce straight back.

use glam::Vec2;

use crate::game::scenes::playing::build_world_frame;
use crate::game::scenes::{SceneId, SceneRequest, WorldState};
use crate::game::ui::text::draw_text_centered;
use crate::game::ui::{Button, ConfirmChoice, ConfirmDialog};
use crate::input::InputSnapshot;
use crate::render::FrameDraw;
use crate::world::{Letterbox, Rect};

const BUTTON_SIZE: Vec2 = Vec2::new(260.0, 46.0);

const SELECTED_COLOR: [f32; 4] = [0.85, 0.65, 0.2, 1.0];
const IDLE_COLOR: [f32; 4] = [0.25, 0.25, 0.3, 1.0];
const BUTTON_TEXT_COLOR: [f32; 4] = [0.05, 0.05, 0.05, 1.0];

/// Destructive menu entries confirm before acting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PendingAction {
    ReturnToMenu,
    QuitGame,
}

/// Pause menu over the frozen world.
pub struct PausedScene {
    /// RESUME, MAIN MENU, EXIT, matching selection indices
    pub buttons: [Button; 3],
    /// Currently highlighted entry
    pub selected: usize,
    /// Confirmation dialog for the destructive entries
    pub dialog: ConfirmDialog,
    /// Which action the open dialog would commit; `None` means no dialog
    pending: Option<PendingAction>,
    /// Set once escape has been observed up since entering
    esc_released: bool,
    virtual_size: Vec2,
    /// Input from the previous frame, for edge detection
    prev: InputSnapshot,
}

impl PausedScene {
    pub fn new(virtual_size: Vec2) -> Self {
        let center_x = virtual_size.x * 0.5;
        let resume = Button::new(
            Rect::from_center(Vec2::new(center_x, 250.0), BUTTON_SIZE),
            "RESUME",
        );
        let to_menu = Button::new(
            Rect::from_center(Vec2::new(center_x, 312.0), BUTTON_SIZE),
            "MAIN MENU",
        );
        let quit = Button::new(
            Rect::from_center(Vec2::new(center_x, 374.0), BUTTON_SIZE),
            "EXIT",
        );
        Self {
            buttons: [resume, to_menu, quit],
            selected: 0,
            dialog: ConfirmDialog::new("QUIT THE GAME?", virtual_size),
            pending: None,
            esc_released: false,
            virtual_size,
            prev: InputSnapshot::default(),
        }
    }

    /// Scene entry: escape is almost always still held from the press that
    /// paused, so the resume gate starts closed.
    pub fn enter(&mut self, _world: &mut WorldState, input: &InputSnapshot) {
        self.selected = 0;
        self.pending = None;
        self.esc_released = false;
        self.prev = *input;
    }

    pub fn exit(&mut self, _world: &mut WorldState) {
        self.pending = None;
    }

    pub fn update(
        &mut self,
        _dt: f32,
        world: &mut WorldState,
        input: &InputSnapshot,
    ) -> Option<SceneRequest> {
        let request = self.update_paused(world, input);
        // Always refresh, including on transition frames
        self.prev = *input;
        request
    }

    fn update_paused(&mut self, world: &mut WorldState, input: &InputSnapshot) -> Option<SceneRequest> {
        if !self.esc_released && !input.is_down(world.bindings.pause) {
            self.esc_released = true;
        }

        if let Some(action) = self.pending {
            return match self.dialog.update(input, &self.prev) {
                Some(ConfirmChoice::Confirm) => match action {
                    PendingAction::ReturnToMenu => Some(SceneRequest::Switch(SceneId::MainMenu)),
                    PendingAction::QuitGame => Some(SceneRequest::Quit),
                },
                Some(ConfirmChoice::Cancel) => {
                    self.pending = None;
                    None
                }
                None => None,
            };
        }

        if self.esc_released && input.pressed_edge(world.bindings.pause, &self.prev) {
            return Some(SceneRequest::Switch(SceneId::Playing));
        }

        if world.bindings.menu_down_edge(input, &self.prev) {
            self.selected = (self.selected + 1) % self.buttons.len();
        }
        if world.bindings.menu_up_edge(input, &self.prev) {
            self.selected = (self.selected + self.buttons.len() - 1) % self.buttons.len();
        }
        if world.bindings.accept_edge(input, &self.prev) {
            return self.activate(self.selected);
        }

        for index in 0..self.buttons.len() {
            if self.buttons[index].is_hovered(&input.pointer) {
                self.selected = index;
            }
            if self.buttons[index].is_clicked(&input.pointer, &self.prev.pointer) {
                return self.activate(index);
            }
        }

        None
    }

    fn activate(&mut self, index: usize) -> Option<SceneRequest> {
        match index {
            0 => Some(SceneRequest::Switch(SceneId::Playing)),
            1 => {
                self.open_dialog("RETURN TO THE MAIN MENU?", PendingAction::ReturnToMenu);
                None
            }
            _ => {
                self.open_dialog("QUIT THE GAME?", PendingAction::QuitGame);
                None
            }
        }
    }

    fn open_dialog(&mut self, prompt: &str, action: PendingAction) {
        self.dialog.prompt = prompt.to_string();
        self.dialog.open();
        self.pending = Some(action);
    }

    pub fn draw(&self, world: &WorldState, letterbox: &Letterbox) -> FrameDraw {
        // Frozen world beneath everything
        let mut frame = build_world_frame(world, letterbox);

        frame.ui.add_rect(
            Rect::new(0.0, 0.0, self.virtual_size.x, self.virtual_size.y),
            [0.0, 0.0, 0.0, 0.55],
        );
        draw_text_centered(
            &mut frame.ui,
            "PAUSED",
            Vec2::new(self.virtual_size.x * 0.5, 160.0),
            5.0,
            [0.92, 0.78, 0.45, 1.0],
        );

        for (index, button) in self.buttons.iter().enumerate() {
            let background = if index == self.selected {
                SELECTED_COLOR
            } else {
                IDLE_COLOR
            };
            button.draw(&mut frame.ui, 2.0, background, BUTTON_TEXT_COLOR);
        }

        if self.pending.is_some() {
            self.dialog.draw(&mut frame.ui, self.virtual_size);
        }

        frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::config::SandboxConfig;
    use crate::input::KeyCode;

    const DT: f32 = 1.0 / 60.0;

    fn scene_and_world() -> (PausedScene, WorldState) {
        let world = WorldState::new(SandboxConfig::default());
        let scene = PausedScene::new(world.config.virtual_size());
        (scene, world)
    }

    fn keys(pressed: &[KeyCode]) -> InputSnapshot {
        let mut snapshot = InputSnapshot::default();
        for &key in pressed {
            snapshot.handle_key(key, true);
        }
        snapshot
    }

    #[test]
    fn test_escape_held_from_entry_does_not_resume() {
        let (mut scene, mut world) = scene_and_world();
        let held = keys(&[KeyCode::Escape]);
        scene.enter(&mut world, &held);

        assert_eq!(scene.update(DT, &mut world, &held), None);
        assert_eq!(scene.update(DT, &mut world, &held), None);
    }

    #[test]
    fn test_escape_release_then_press_resumes() {
        let (mut scene, mut world) = scene_and_world();
        let held = keys(&[KeyCode::Escape]);
        scene.enter(&mut world, &held);

        assert_eq!(scene.update(DT, &mut world, &held), None);
        assert_eq!(scene.update(DT, &mut world, &keys(&[])), None);
        assert_eq!(
            scene.update(DT, &mut world, &held),
            Some(SceneRequest::Switch(SceneId::Playing))
        );
    }

    #[test]
    fn test_resume_entry_resumes_without_confirmation() {
        let (mut scene, mut world) = scene_and_world();
        scene.enter(&mut world, &keys(&[]));

        let request = scene.update(DT, &mut world, &keys(&[KeyCode::Enter]));
        assert_eq!(request, Some(SceneRequest::Switch(SceneId::Playing)));
    }

    #[test]
    fn test_selection_wraps_over_three_entries() {
        let (mut scene, mut world) = scene_and_world();
        scene.enter(&mut world, &keys(&[]));

        for expected in [1, 2, 0] {
            scene.update(DT, &mut world, &keys(&[KeyCode::ArrowDown]));
            assert_eq!(scene.selected, expected);
            scene.update(DT, &mut world, &keys(&[]));
        }
    }

    #[test]
    fn test_main_menu_entry_confirms_before_switching() {
        let (mut scene, mut world) = scene_and_world();
        scene.enter(&mut world, &keys(&[]));

        scene.update(DT, &mut world, &keys(&[KeyCode::ArrowDown]));
        scene.update(DT, &mut world, &keys(&[]));
        assert_eq!(scene.update(DT, &mut world, &keys(&[KeyCode::Enter])), None);
        assert!(scene.pending.is_some());
        assert_eq!(scene.dialog.prompt, "RETURN TO THE MAIN MENU?");

        scene.update(DT, &mut world, &keys(&[]));
        assert_eq!(
            scene.update(DT, &mut world, &keys(&[KeyCode::Enter])),
            Some(SceneRequest::Switch(SceneId::MainMenu))
        );
    }

    #[test]
    fn test_dialog_cancel_returns_to_pause_menu() {
        let (mut scene, mut world) = scene_and_world();
        scene.enter(&mut world, &keys(&[]));

        scene.update(DT, &mut world, &keys(&[KeyCode::ArrowDown]));
        scene.update(DT, &mut world, &keys(&[]));
        scene.update(DT, &mut world, &keys(&[KeyCode::Enter]));
        assert!(scene.pending.is_some());

        scene.update(DT, &mut world, &keys(&[]));
        assert_eq!(scene.update(DT, &mut world, &keys(&[KeyCode::Escape])), None);
        assert!(scene.pending.is_none());
    }

    #[test]
    fn test_dialog_escape_does_not_also_resume() {
        let (mut scene, mut world) = scene_and_world();
        scene.enter(&mut world, &keys(&[]));

        // Open the quit dialog (two steps down, then accept)
        scene.update(DT, &mut world, &keys(&[KeyCode::ArrowDown]));
        scene.update(DT, &mut world, &keys(&[]));
        scene.update(DT, &mut world, &keys(&[KeyCode::ArrowDown]));
        scene.update(DT, &mut world, &keys(&[]));
        scene.update(DT, &mut world, &keys(&[KeyCode::Enter]));
        assert_eq!(scene.dialog.prompt, "QUIT THE GAME?");

        // Escape closes the dialog but must not resume on the same press
        scene.update(DT, &mut world, &keys(&[]));
        assert_eq!(scene.update(DT, &mut world, &keys(&[KeyCode::Escape])), None);
        assert!(scene.pending.is_none());

        // The press is still held; only a fresh press resumes
        assert_eq!(scene.update(DT, &mut world, &keys(&[KeyCode::Escape])), None);
        scene.update(DT, &mut world, &keys(&[]));
        assert_eq!(
            scene.update(DT, &mut world, &keys(&[KeyCode::Escape])),
            Some(SceneRequest::Switch(SceneId::Playing))
        );
    }

    #[test]
    fn test_world_stays_frozen_while_paused() {
        let (mut scene, mut world) = scene_and_world();
        scene.enter(&mut world, &keys(&[]));
        let player_start = world.player.position;
        let camera_start = world.camera.position;

        for _ in 0..30 {
            scene.update(DT, &mut world, &keys(&[KeyCode::D]));
        }
        assert_eq!(world.player.position, player_start);
        assert_eq!(world.camera.position, camera_start);
    }
}
