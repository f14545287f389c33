//! UI Module
//!
//! User interface components for the game.

pub mod button;
pub mod confirm;
pub mod text;

pub use button::Button;
pub use confirm::{ConfirmChoice, ConfirmDialog};
pub use text::{draw_text, draw_text_centered, get_char_bitmap, measure_text};
