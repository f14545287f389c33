//! Confirmation Dialog
//!
//! A modal two-option prompt used anywhere the game needs a yes/no decision
//! before a destructive action. The dialog owns its selection state and
//! reports a choice; the opening scene decides what that choice means.
//!
//! Cancel always wins ties: if confirm and cancel are pressed on the same
//! frame, the dialog cancels.

use glam::Vec2;

use crate::input::{InputSnapshot, KeyCode};
use crate::render::Mesh2D;
use crate::world::Rect;

use super::button::Button;
use super::text::draw_text_centered;

/// Number of options in the dialog (confirm and cancel)
const OPTION_COUNT: usize = 2;
/// Selection index of the confirm option
const CONFIRM_INDEX: usize = 0;

const PANEL_WIDTH: f32 = 420.0;
const PANEL_HEIGHT: f32 = 170.0;
const BUTTON_WIDTH: f32 = 130.0;
const BUTTON_HEIGHT: f32 = 42.0;

/// Outcome of a confirmation dialog
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfirmChoice {
    /// The user accepted the prompt
    Confirm,
    /// The user backed out
    Cancel,
}

/// A modal yes/no dialog centered in the virtual viewport
#[derive(Clone, Debug)]
pub struct ConfirmDialog {
    /// Question drawn at the top of the panel
    pub prompt: String,
    /// Currently highlighted option index (0 = confirm, 1 = cancel)
    pub selected: usize,
    /// Panel background rect
    panel: Rect,
    /// Confirm then cancel, matching selection indices
    buttons: [Button; 2],
}

impl ConfirmDialog {
    /// Build a dialog centered in a viewport of the given size.
    pub fn new(prompt: impl Into<String>, viewport: Vec2) -> Self {
        let panel = Rect::from_center(viewport * 0.5, Vec2::new(PANEL_WIDTH, PANEL_HEIGHT));
        let button_y = panel.bottom() - BUTTON_HEIGHT - 20.0;
        let gap = (PANEL_WIDTH - 2.0 * BUTTON_WIDTH) / 3.0;
        let confirm = Button::new(
            Rect::new(panel.x + gap, button_y, BUTTON_WIDTH, BUTTON_HEIGHT),
            "YES",
        );
        let cancel = Button::new(
            Rect::new(
                panel.x + gap * 2.0 + BUTTON_WIDTH,
                button_y,
                BUTTON_WIDTH,
                BUTTON_HEIGHT,
            ),
            "NO",
        );
        Self {
            prompt: prompt.into(),
            selected: CONFIRM_INDEX,
            panel,
            buttons: [confirm, cancel],
        }
    }

    /// Reset the highlight for a fresh appearance of the dialog.
    pub fn open(&mut self) {
        self.selected = CONFIRM_INDEX;
    }

    fn choice_at(index: usize) -> ConfirmChoice {
        if index == CONFIRM_INDEX {
            ConfirmChoice::Confirm
        } else {
            ConfirmChoice::Cancel
        }
    }

    /// Process one frame of input. Returns a choice when the user commits,
    /// `None` while the dialog stays open.
    pub fn update(&mut self, input: &InputSnapshot, previous: &InputSnapshot) -> Option<ConfirmChoice> {
        // Cancel precedence: check escape before the accept key
        if input.pressed_edge(KeyCode::Escape, previous) {
            return Some(ConfirmChoice::Cancel);
        }
        if input.pressed_edge(KeyCode::Enter, previous) {
            return Some(Self::choice_at(self.selected));
        }

        if input.pressed_edge(KeyCode::ArrowDown, previous) || input.pressed_edge(KeyCode::S, previous) {
            self.selected = (self.selected + 1) % OPTION_COUNT;
        }
        if input.pressed_edge(KeyCode::ArrowUp, previous) || input.pressed_edge(KeyCode::W, previous) {
            self.selected = (self.selected + OPTION_COUNT - 1) % OPTION_COUNT;
        }

        for (index, button) in self.buttons.iter().enumerate() {
            if button.is_hovered(&input.pointer) {
                self.selected = index;
            }
            if button.is_clicked(&input.pointer, &previous.pointer) {
                return Some(Self::choice_at(index));
            }
        }

        None
    }

    /// Draw the dimmed backdrop, panel, prompt, and option buttons.
    pub fn draw(&self, mesh: &mut Mesh2D, viewport: Vec2) {
        mesh.add_rect(
            Rect::new(0.0, 0.0, viewport.x, viewport.y),
            [0.0, 0.0, 0.0, 0.55],
        );
        mesh.add_rect(self.panel, [0.12, 0.12, 0.16, 0.95]);
        draw_text_centered(
            mesh,
            &self.prompt,
            Vec2::new(self.panel.center().x, self.panel.y + 40.0),
            2.0,
            [0.95, 0.95, 0.9, 1.0],
        );
        for (index, button) in self.buttons.iter().enumerate() {
            let background = if index == self.selected {
                [0.85, 0.65, 0.2, 1.0]
            } else {
                [0.25, 0.25, 0.3, 1.0]
            };
            button.draw(mesh, 2.0, background, [0.05, 0.05, 0.05, 1.0]);
        }
    }
}
