//! Main Menu Scene
//!
//! Title screen with PLAY and QUIT. Quitting goes through the shared
//! confirmation dialog; PLAY resets the world for a fresh run.

use glam::Vec2;

use crate::game::scenes::{SceneId, SceneRequest, WorldState};
use crate::game::ui::text::{draw_text_centered, measure_text};
use crate::game::ui::{Button, ConfirmChoice, ConfirmDialog};
use crate::input::InputSnapshot;
use crate::render::FrameDraw;
use crate::world::{Letterbox, Rect};

const BUTTON_SIZE: Vec2 = Vec2::new(240.0, 52.0);
const TITLE_SCALE: f32 = 6.0;

const SELECTED_COLOR: [f32; 4] = [0.85, 0.65, 0.2, 1.0];
const IDLE_COLOR: [f32; 4] = [0.25, 0.25, 0.3, 1.0];
const BUTTON_TEXT_COLOR: [f32; 4] = [0.05, 0.05, 0.05, 1.0];

/// Title screen scene.
pub struct MainMenuScene {
    /// PLAY then QUIT, matching selection indices
    pub buttons: [Button; 2],
    /// Currently highlighted entry
    pub selected: usize,
    /// Quit confirmation dialog, shown when `confirming` is set
    pub quit_confirm: ConfirmDialog,
    pub confirming: bool,
    virtual_size: Vec2,
    /// Input from the previous frame, for edge detection
    prev: InputSnapshot,
}

impl MainMenuScene {
    pub fn new(virtual_size: Vec2) -> Self {
        let center_x = virtual_size.x * 0.5;
        let play = Button::new(
            Rect::from_center(Vec2::new(center_x, 310.0), BUTTON_SIZE),
            "PLAY",
        );
        let quit = Button::new(
            Rect::from_center(Vec2::new(center_x, 382.0), BUTTON_SIZE),
            "QUIT",
        );
        Self {
            buttons: [play, quit],
            selected: 0,
            quit_confirm: ConfirmDialog::new("QUIT THE GAME?", virtual_size),
            confirming: false,
            virtual_size,
            prev: InputSnapshot::default(),
        }
    }

    /// Scene entry: reset the menu and seed edge detection with the input
    /// captured on the frame the transition happened.
    pub fn enter(&mut self, _world: &mut WorldState, input: &InputSnapshot) {
        self.selected = 0;
        self.confirming = false;
        self.quit_confirm.open();
        self.prev = *input;
    }

    pub fn exit(&mut self, _world: &mut WorldState) {
        self.confirming = false;
    }

    pub fn update(
        &mut self,
        _dt: f32,
        world: &mut WorldState,
        input: &InputSnapshot,
    ) -> Option<SceneRequest> {
        let request = self.update_menu(world, input);
        // Always refresh, including on transition frames
        self.prev = *input;
        request
    }

    fn update_menu(&mut self, world: &mut WorldState, input: &InputSnapshot) -> Option<SceneRequest> {
        if self.confirming {
            return match self.quit_confirm.update(input, &self.prev) {
                Some(ConfirmChoice::Confirm) => Some(SceneRequest::Quit),
                Some(ConfirmChoice::Cancel) => {
                    self.confirming = false;
                    None
                }
                None => None,
            };
        }

        if world.bindings.menu_down_edge(input, &self.prev) {
            self.selected = (self.selected + 1) % self.buttons.len();
        }
        if world.bindings.menu_up_edge(input, &self.prev) {
            self.selected = (self.selected + self.buttons.len() - 1) % self.buttons.len();
        }
        if world.bindings.accept_edge(input, &self.prev) {
            return self.activate(self.selected, world);
        }

        for index in 0..self.buttons.len() {
            if self.buttons[index].is_hovered(&input.pointer) {
                self.selected = index;
            }
            if self.buttons[index].is_clicked(&input.pointer, &self.prev.pointer) {
                return self.activate(index, world);
            }
        }

        None
    }

    fn activate(&mut self, index: usize, world: &mut WorldState) -> Option<SceneRequest> {
        match index {
            0 => {
                world.reset_run();
                Some(SceneRequest::Switch(SceneId::Playing))
            }
            _ => {
                self.quit_confirm.open();
                self.confirming = true;
                None
            }
        }
    }

    pub fn draw(&self, _world: &WorldState, letterbox: &Letterbox) -> FrameDraw {
        let mut frame = FrameDraw::new();
        frame.ui_transform = letterbox.clip_from_virtual();
        frame.clear_color = [0.08, 0.06, 0.04, 1.0];

        let center_x = self.virtual_size.x * 0.5;
        draw_text_centered(
            &mut frame.ui,
            "TUMBLEWEED RANCH",
            Vec2::new(center_x, 160.0),
            TITLE_SCALE,
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

        let hint = "UP DOWN SELECT - ENTER CONFIRM";
        let hint_size = measure_text(hint, 2.0);
        draw_text_centered(
            &mut frame.ui,
            hint,
            Vec2::new(center_x, self.virtual_size.y - hint_size.y - 18.0),
            2.0,
            [0.55, 0.5, 0.42, 1.0],
        );

        if self.confirming {
            self.quit_confirm.draw(&mut frame.ui, self.virtual_size);
        }

        frame
    }
}
