//! Playing Scene
//!
//! The actual sandbox: the player roams a checkered tile field while the
//! follow camera tracks them. Escape pauses; Q and E step the camera zoom.

use glam::Vec2;

use crate::camera::ZoomDirection;
use crate::game::scenes::{SceneId, SceneRequest, WorldState};
use crate::game::ui::text::draw_text;
use crate::input::InputSnapshot;
use crate::render::FrameDraw;
use crate::world::{Letterbox, Rect};

const TILE_LIGHT: [f32; 4] = [0.50, 0.56, 0.30, 1.0];
const TILE_DARK: [f32; 4] = [0.43, 0.49, 0.26, 1.0];
const PLAYER_TINT: [f32; 4] = [0.85, 0.58, 0.25, 1.0];
const HUD_TEXT_COLOR: [f32; 4] = [0.95, 0.95, 0.9, 0.85];

/// Fill a frame with the ranch world: culled checkered tiles plus the player
/// sprite, drawn under the composed letterbox and camera transform. The
/// pause scene draws the same frozen world beneath its overlay.
pub fn build_world_frame(world: &WorldState, letterbox: &Letterbox) -> FrameDraw {
    let mut frame = FrameDraw::new();
    frame.world_transform = letterbox.clip_from_virtual() * world.camera.view_transform();
    frame.ui_transform = letterbox.clip_from_virtual();
    frame.clear_color = [0.09, 0.10, 0.07, 1.0];

    // Only tiles intersecting the camera's visible rect get quads
    let tile = world.config.tile_size;
    let cols = (world.config.world_width / tile).ceil() as i32;
    let rows = (world.config.world_height / tile).ceil() as i32;
    let view = Rect::from_center(
        world.camera.position,
        world.camera.visible_half_extents() * 2.0,
    );
    let first_col = ((view.left() / tile).floor() as i32).clamp(0, cols);
    let last_col = ((view.right() / tile).ceil() as i32).clamp(0, cols);
    let first_row = ((view.top() / tile).floor() as i32).clamp(0, rows);
    let last_row = ((view.bottom() / tile).ceil() as i32).clamp(0, rows);

    for ty in first_row..last_row {
        for tx in first_col..last_col {
            let color = if (tx + ty) % 2 == 0 {
                TILE_LIGHT
            } else {
                TILE_DARK
            };
            frame.world.add_rect(
                Rect::new(tx as f32 * tile, ty as f32 * tile, tile, tile),
                color,
            );
        }
    }

    frame.sprites.add_sprite(
        world.player.position,
        world.player.size,
        Vec2::splat(0.5),
        0.0,
        PLAYER_TINT,
    );

    frame
}

/// Active gameplay scene.
pub struct PlayingScene {
    /// Input from the previous frame, for edge detection
    prev: InputSnapshot,
}

impl PlayingScene {
    pub fn new() -> Self {
        Self {
            prev: InputSnapshot::default(),
        }
    }

    pub fn enter(&mut self, _world: &mut WorldState, input: &InputSnapshot) {
        self.prev = *input;
    }

    pub fn exit(&mut self, _world: &mut WorldState) {}

    pub fn update(
        &mut self,
        dt: f32,
        world: &mut WorldState,
        input: &InputSnapshot,
    ) -> Option<SceneRequest> {
        let request = self.update_playing(dt, world, input);
        // Always refresh, including on transition frames
        self.prev = *input;
        request
    }

    fn update_playing(
        &mut self,
        dt: f32,
        world: &mut WorldState,
        input: &InputSnapshot,
    ) -> Option<SceneRequest> {
        if input.pressed_edge(world.bindings.pause, &self.prev) {
            return Some(SceneRequest::Switch(SceneId::Paused));
        }

        let movement = world.bindings.movement_input(input);
        world.player.update(movement, dt);

        if input.pressed_edge(world.bindings.camera.zoom_out, &self.prev) {
            world.camera.cycle_zoom(ZoomDirection::Decrease);
        }
        if input.pressed_edge(world.bindings.camera.zoom_in, &self.prev) {
            world.camera.cycle_zoom(ZoomDirection::Increase);
        }

        world.camera.update(world.player.position, dt);
        None
    }

    pub fn draw(&self, world: &WorldState, letterbox: &Letterbox) -> FrameDraw {
        let mut frame = build_world_frame(world, letterbox);
        draw_text(
            &mut frame.ui,
            "WASD MOVE - Q E ZOOM - ESC PAUSE",
            12.0,
            12.0,
            2.0,
            HUD_TEXT_COLOR,
        );
        draw_text(
            &mut frame.ui,
            &format!("ZOOM: {}", world.camera.current_zoom),
            12.0,
            34.0,
            2.0,
            HUD_TEXT_COLOR,
        );
        frame
    }
}

impl Default for PlayingScene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::{ZOOM_CLOSE, ZOOM_DEFAULT};
    use crate::game::config::SandboxConfig;
    use crate::input::KeyCode;

    const DT: f32 = 1.0 / 60.0;

    fn scene_and_world() -> (PlayingScene, WorldState) {
        let world = WorldState::new(SandboxConfig::default());
        (PlayingScene::new(), world)
    }

    fn keys(pressed: &[KeyCode]) -> InputSnapshot {
        let mut snapshot = InputSnapshot::default();
        for &key in pressed {
            snapshot.handle_key(key, true);
        }
        snapshot
    }

    #[test]
    fn test_escape_requests_pause() {
        let (mut scene, mut world) = scene_and_world();
        let request = scene.update(DT, &mut world, &keys(&[KeyCode::Escape]));
        assert_eq!(request, Some(SceneRequest::Switch(SceneId::Paused)));
    }

    #[test]
    fn test_held_escape_requests_pause_once() {
        let (mut scene, mut world) = scene_and_world();
        let held = keys(&[KeyCode::Escape]);
        assert!(scene.update(DT, &mut world, &held).is_some());
        assert!(scene.update(DT, &mut world, &held).is_none());
    }

    #[test]
    fn test_movement_moves_player() {
        let (mut scene, mut world) = scene_and_world();
        let start = world.player.position;
        scene.update(DT, &mut world, &keys(&[KeyCode::D]));
        assert!(world.player.position.x > start.x);
        assert_eq!(world.player.position.y, start.y);
    }

    #[test]
    fn test_zoom_keys_step_levels() {
        let (mut scene, mut world) = scene_and_world();
        assert_eq!(world.camera.current_zoom, ZOOM_DEFAULT);

        scene.update(DT, &mut world, &keys(&[KeyCode::E]));
        assert_eq!(world.camera.current_zoom, ZOOM_CLOSE);

        // Held key does not keep stepping
        scene.update(DT, &mut world, &keys(&[KeyCode::E]));
        assert_eq!(world.camera.current_zoom, ZOOM_CLOSE);
    }

    #[test]
    fn test_world_frame_culls_to_visible_tiles() {
        let (_, world) = scene_and_world();
        let letterbox = Letterbox::new(world.config.virtual_size(), Vec2::new(1920.0, 1080.0));
        let frame = build_world_frame(&world, &letterbox);

        // Tiles plus nothing else in the world mesh
        assert!(!frame.world.is_empty());
        let visible = world.camera.visible_half_extents() * 2.0;
        let tile = world.config.tile_size;
        let max_tiles = ((visible.x / tile) as usize + 2) * ((visible.y / tile) as usize + 2);
        assert!(frame.world.quad_count() <= max_tiles);

        // Exactly one player sprite
        assert_eq!(frame.sprites.quad_count(), 1);
    }

    #[test]
    fn test_camera_follows_player_across_dead_zone() {
        let (mut scene, mut world) = scene_and_world();
        let camera_start = world.camera.position;

        // Walk right long enough to cross the dead zone edge
        for _ in 0..240 {
            scene.update(DT, &mut world, &keys(&[KeyCode::D]));
        }
        assert!(world.camera.position.x > camera_start.x);
    }
}
