//! Scene Module
//!
//! The application's scene graph: main menu, gameplay, pause, and game over,
//! plus the manager that owns them and the world they share.

pub mod game_over;
pub mod main_menu;
pub mod manager;
pub mod paused;
pub mod playing;

pub use game_over::GameOverScene;
pub use main_menu::MainMenuScene;
pub use manager::{SceneId, SceneManager, SceneRequest, WorldState, legal_transition};
pub use paused::PausedScene;
pub use playing::{PlayingScene, build_world_frame};
