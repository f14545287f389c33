//! Game Module
//!
//! Contains game-specific systems that build on top of the engine: the
//! scene graph, menu UI, and configuration.

pub mod config;
pub mod scenes;
pub mod ui;

pub use config::{ConfigError, InputConfig, SandboxConfig};
pub use scenes::{SceneId, SceneManager, SceneRequest, WorldState};
pub use ui::{Button, ConfirmChoice, ConfirmDialog};
