//! Scene Manager
//!
//! Owns every scene plus the shared world, and routes per-frame update/draw
//! to whichever scene is active. Transitions run the full exit/enter cycle,
//! including when a scene is re-entered. **No wgpu imports** - this module
//! is GPU-agnostic.

use glam::Vec2;

use crate::camera::{FollowCamera, ZOOM_DEFAULT};
use crate::game::config::{InputConfig, SandboxConfig};
use crate::game::scenes::{GameOverScene, MainMenuScene, PausedScene, PlayingScene};
use crate::input::InputSnapshot;
use crate::player::Player;
use crate::render::FrameDraw;
use crate::world::{Letterbox, Rect};

/// Identifier for each top-level scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneId {
    MainMenu,
    Playing,
    Paused,
    GameOver,
}

/// What a scene asks the manager to do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneRequest {
    /// Switch to another scene (exit current, enter target)
    Switch(SceneId),
    /// Shut the whole game down
    Quit,
}

/// Whether a direct transition between two scenes is part of the scene
/// graph. Re-entering the current scene is always allowed and restarts it.
pub fn legal_transition(from: SceneId, to: SceneId) -> bool {
    use SceneId::*;
    if from == to {
        return true;
    }
    matches!(
        (from, to),
        (MainMenu, Playing)
            | (Playing, Paused)
            | (Playing, GameOver)
            | (Paused, Playing)
            | (Paused, MainMenu)
            | (GameOver, MainMenu)
    )
}

/// Shared simulation state that persists across scene switches.
///
/// The pause scene draws the same world the playing scene left behind, so
/// the world lives here rather than inside any single scene.
pub struct WorldState {
    /// The ranch hand wandering the world
    pub player: Player,
    /// Follow camera tracking the player
    pub camera: FollowCamera,
    /// World and window tuning
    pub config: SandboxConfig,
    /// Key bindings
    pub bindings: InputConfig,
}

impl WorldState {
    pub fn new(config: SandboxConfig) -> Self {
        let world_bounds = config.world_bounds();
        let viewport = Rect::new(0.0, 0.0, config.virtual_width, config.virtual_height);
        let mut player = Player::new(config.spawn_point(), world_bounds);
        player.speed = config.player_speed;
        player.size = Vec2::splat(config.player_size);
        let mut camera = FollowCamera::new(viewport, world_bounds);
        camera.smoothing = config.camera_smoothing;
        camera.snap_to(player.position);
        Self {
            player,
            camera,
            config,
            bindings: InputConfig::default(),
        }
    }

    /// Reset for a fresh run started from the main menu: player back at
    /// spawn, camera snapped onto the player at the default zoom.
    pub fn reset_run(&mut self) {
        self.player.position = self.config.spawn_point();
        self.camera.set_zoom(ZOOM_DEFAULT);
        self.camera.snap_to(self.player.position);
    }
}

/// Top-level scene state machine.
///
/// Scenes are owned concretely rather than boxed; dispatch is an explicit
/// match on [`SceneId`]. `update` feeds the active scene and applies any
/// transition it requests; a requested transition means exit on the old
/// scene, then enter on the new one, in that order, on the same frame.
pub struct SceneManager {
    pub main_menu: MainMenuScene,
    pub playing: PlayingScene,
    pub paused: PausedScene,
    pub game_over: GameOverScene,
    pub world: WorldState,
    active: SceneId,
    /// Most recent input snapshot, used to seed a scene's edge detection
    /// when it is entered mid-frame
    last_input: InputSnapshot,
}

impl SceneManager {
    /// Create the manager with the main menu active.
    pub fn new(config: SandboxConfig) -> Self {
        let world = WorldState::new(config);
        let virtual_size = world.config.virtual_size();
        let mut manager = Self {
            main_menu: MainMenuScene::new(virtual_size),
            playing: PlayingScene::new(),
            paused: PausedScene::new(virtual_size),
            game_over: GameOverScene::new(virtual_size),
            world,
            active: SceneId::MainMenu,
            last_input: InputSnapshot::default(),
        };
        let seed = manager.last_input;
        manager.main_menu.enter(&mut manager.world, &seed);
        manager
    }

    /// Currently active scene.
    pub fn active(&self) -> SceneId {
        self.active
    }

    /// Run one frame of the active scene.
    ///
    /// Returns `true` when the player asked to quit the game.
    pub fn update(&mut self, dt: f32, input: &InputSnapshot) -> bool {
        self.last_input = *input;
        let request = match self.active {
            SceneId::MainMenu => self.main_menu.update(dt, &mut self.world, input),
            SceneId::Playing => self.playing.update(dt, &mut self.world, input),
            SceneId::Paused => self.paused.update(dt, &mut self.world, input),
            SceneId::GameOver => self.game_over.update(dt, &mut self.world, input),
        };
        match request {
            Some(SceneRequest::Switch(to)) => {
                self.change_scene(to);
                false
            }
            Some(SceneRequest::Quit) => {
                tracing::info!("quit requested from {:?}", self.active);
                true
            }
            None => false,
        }
    }

    /// Switch scenes: exit the active scene, then enter the target.
    ///
    /// Re-entering the active scene restarts it through the same cycle.
    pub fn change_scene(&mut self, to: SceneId) {
        debug_assert!(
            legal_transition(self.active, to),
            "illegal scene transition {:?} -> {:?}",
            self.active,
            to
        );
        tracing::info!("scene transition {:?} -> {:?}", self.active, to);
        match self.active {
            SceneId::MainMenu => self.main_menu.exit(&mut self.world),
            SceneId::Playing => self.playing.exit(&mut self.world),
            SceneId::Paused => self.paused.exit(&mut self.world),
            SceneId::GameOver => self.game_over.exit(&mut self.world),
        }
        self.active = to;
        let seed = self.last_input;
        match self.active {
            SceneId::MainMenu => self.main_menu.enter(&mut self.world, &seed),
            SceneId::Playing => self.playing.enter(&mut self.world, &seed),
            SceneId::Paused => self.paused.enter(&mut self.world, &seed),
            SceneId::GameOver => self.game_over.enter(&mut self.world, &seed),
        }
    }

    /// External game-over signal from gameplay systems. Only meaningful
    /// while playing; fired in any other scene it is ignored.
    pub fn signal_game_over(&mut self) {
        if self.active == SceneId::Playing {
            tracing::warn!("game over signalled");
            self.change_scene(SceneId::GameOver);
        } else {
            tracing::debug!("game over signal ignored in {:?}", self.active);
        }
    }

    /// Build the frame's draw lists from the active scene.
    pub fn draw(&self, letterbox: &Letterbox) -> FrameDraw {
        match self.active {
            SceneId::MainMenu => self.main_menu.draw(&self.world, letterbox),
            SceneId::Playing => self.playing.draw(&self.world, letterbox),
            SceneId::Paused => self.paused.draw(&self.world, letterbox),
            SceneId::GameOver => self.game_over.draw(&self.world, letterbox),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::KeyCode;

    const DT: f32 = 1.0 / 60.0;

    fn manager() -> SceneManager {
        SceneManager::new(SandboxConfig::default())
    }

    fn keys(pressed: &[KeyCode]) -> InputSnapshot {
        let mut snapshot = InputSnapshot::default();
        for &key in pressed {
            snapshot.handle_key(key, true);
        }
        snapshot
    }

    /// Drive the manager from the menu into the playing scene.
    fn start_playing(manager: &mut SceneManager) {
        manager.update(DT, &keys(&[KeyCode::Enter]));
        manager.update(DT, &keys(&[]));
        assert_eq!(manager.active(), SceneId::Playing);
    }

    #[test]
    fn test_transition_table() {
        use SceneId::*;
        assert!(legal_transition(MainMenu, Playing));
        assert!(legal_transition(Playing, Paused));
        assert!(legal_transition(Playing, GameOver));
        assert!(legal_transition(Paused, Playing));
        assert!(legal_transition(Paused, MainMenu));
        assert!(legal_transition(GameOver, MainMenu));
        assert!(legal_transition(Playing, Playing));

        assert!(!legal_transition(MainMenu, Paused));
        assert!(!legal_transition(MainMenu, GameOver));
        assert!(!legal_transition(Paused, GameOver));
        assert!(!legal_transition(GameOver, Playing));
    }

    #[test]
    fn test_starts_in_main_menu() {
        let manager = manager();
        assert_eq!(manager.active(), SceneId::MainMenu);
    }

    #[test]
    fn test_enter_on_play_starts_run() {
        let mut manager = manager();
        // Scuff the world so the reset is observable
        manager.world.player.position = Vec2::new(64.0, 64.0);

        let quit = manager.update(DT, &keys(&[KeyCode::Enter]));
        assert!(!quit);
        assert_eq!(manager.active(), SceneId::Playing);
        assert_eq!(manager.world.player.position, manager.world.config.spawn_point());
    }

    #[test]
    fn test_reentering_scene_restarts_it() {
        let mut manager = manager();
        manager.main_menu.selected = 1;
        manager.change_scene(SceneId::MainMenu);
        // Enter ran again and reset the menu state
        assert_eq!(manager.main_menu.selected, 0);
    }

    #[test]
    fn test_game_over_signal_only_fires_while_playing() {
        let mut manager = manager();
        manager.signal_game_over();
        assert_eq!(manager.active(), SceneId::MainMenu);

        start_playing(&mut manager);
        manager.signal_game_over();
        assert_eq!(manager.active(), SceneId::GameOver);
    }

    #[test]
    fn test_game_over_dismisses_to_menu() {
        let mut manager = manager();
        start_playing(&mut manager);
        manager.signal_game_over();

        manager.update(DT, &keys(&[]));
        manager.update(DT, &keys(&[KeyCode::Escape]));
        assert_eq!(manager.active(), SceneId::MainMenu);
    }

    #[test]
    fn test_escape_pauses_and_release_gates_resume() {
        let mut manager = manager();
        start_playing(&mut manager);

        // Press pauses
        manager.update(DT, &keys(&[KeyCode::Escape]));
        assert_eq!(manager.active(), SceneId::Paused);

        // Still held: must not resume
        manager.update(DT, &keys(&[KeyCode::Escape]));
        assert_eq!(manager.active(), SceneId::Paused);

        // Release, then a fresh press resumes
        manager.update(DT, &keys(&[]));
        assert_eq!(manager.active(), SceneId::Paused);
        manager.update(DT, &keys(&[KeyCode::Escape]));
        assert_eq!(manager.active(), SceneId::Playing);
    }

    #[test]
    fn test_quit_from_menu_requires_confirmation() {
        let mut manager = manager();

        // Move highlight to QUIT and activate it
        manager.update(DT, &keys(&[KeyCode::ArrowDown]));
        manager.update(DT, &keys(&[]));
        let quit = manager.update(DT, &keys(&[KeyCode::Enter]));
        assert!(!quit);
        assert_eq!(manager.active(), SceneId::MainMenu);

        // Dialog is up; confirming it quits
        manager.update(DT, &keys(&[]));
        let quit = manager.update(DT, &keys(&[KeyCode::Enter]));
        assert!(quit);
    }

    #[test]
    fn test_pause_menu_returns_to_main_menu_after_confirm() {
        let mut manager = manager();
        start_playing(&mut manager);
        manager.update(DT, &keys(&[KeyCode::Escape]));
        assert_eq!(manager.active(), SceneId::Paused);
        manager.update(DT, &keys(&[]));

        // Highlight MAIN MENU (second entry) and activate
        manager.update(DT, &keys(&[KeyCode::ArrowDown]));
        manager.update(DT, &keys(&[]));
        manager.update(DT, &keys(&[KeyCode::Enter]));
        assert_eq!(manager.active(), SceneId::Paused);

        // Confirm the dialog
        manager.update(DT, &keys(&[]));
        manager.update(DT, &keys(&[KeyCode::Enter]));
        assert_eq!(manager.active(), SceneId::MainMenu);
    }
}
