//! Game Over Scene
//!
//! End-of-run screen. A fresh press of the back or accept key returns to
//! the main menu; whatever was held when the run ended is ignored.

use glam::Vec2;

use crate::game::scenes::{SceneId, SceneRequest, WorldState};
use crate::game::ui::text::draw_text_centered;
use crate::input::InputSnapshot;
use crate::render::FrameDraw;
use crate::world::Letterbox;

/// End-of-run scene.
pub struct GameOverScene {
    virtual_size: Vec2,
    /// Input from the previous frame, for edge detection
    prev: InputSnapshot,
}

impl GameOverScene {
    pub fn new(virtual_size: Vec2) -> Self {
        Self {
            virtual_size,
            prev: InputSnapshot::default(),
        }
    }

    pub fn enter(&mut self, _world: &mut WorldState, input: &InputSnapshot) {
        self.prev = *input;
    }

    pub fn exit(&mut self, _world: &mut WorldState) {}

    pub fn update(
        &mut self,
        _dt: f32,
        world: &mut WorldState,
        input: &InputSnapshot,
    ) -> Option<SceneRequest> {
        let request = if world.bindings.back_edge(input, &self.prev)
            || world.bindings.accept_edge(input, &self.prev)
        {
            Some(SceneRequest::Switch(SceneId::MainMenu))
        } else {
            None
        };
        // Always refresh, including on transition frames
        self.prev = *input;
        request
    }

    pub fn draw(&self, _world: &WorldState, letterbox: &Letterbox) -> FrameDraw {
        let mut frame = FrameDraw::new();
        frame.ui_transform = letterbox.clip_from_virtual();
        frame.clear_color = [0.10, 0.03, 0.03, 1.0];

        let center_x = self.virtual_size.x * 0.5;
        draw_text_centered(
            &mut frame.ui,
            "GAME OVER",
            Vec2::new(center_x, 220.0),
            7.0,
            [0.9, 0.25, 0.2, 1.0],
        );
        draw_text_centered(
            &mut frame.ui,
            "PRESS ESCAPE FOR MENU",
            Vec2::new(center_x, 330.0),
            2.0,
            [0.8, 0.7, 0.6, 1.0],
        );

        frame
    }
}
