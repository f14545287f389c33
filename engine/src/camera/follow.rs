//! Follow Camera Module
//!
//! 2D dead-zone follow camera with discrete zoom levels and world-bounds
//! clamping. The camera tracks a target position: while the target stays
//! inside the dead zone the camera does not move at all; once the target
//! crosses a dead-zone edge the camera is pulled just far enough, per axis,
//! to put the target back on that edge, smoothed with an exponential-decay
//! lerp. After smoothing the position is clamped so the visible rectangle
//! (which depends on the current zoom) never leaves the world bounds.
//!
//! This module is window-system agnostic - it only deals with camera state
//! and math.

use glam::{Mat4, Vec2, Vec3};

use crate::world::Rect;

/// Smoothing rate constant (per second) applied to the follow lerp
pub const CAMERA_SMOOTHING: f32 = 5.0;
/// Full side length of the default dead zone, in virtual pixels
pub const DEAD_ZONE_SIZE: f32 = 200.0;

/// Names of the built-in zoom levels, in cycle order
pub const ZOOM_FAR: &str = "FAR";
pub const ZOOM_DEFAULT: &str = "DEFAULT";
pub const ZOOM_CLOSE: &str = "CLOSE";

/// Direction for stepping through the ordered zoom levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDirection {
    /// Step toward the first (widest) level
    Decrease,
    /// Step toward the last (tightest) level
    Increase,
}

/// Dead-zone follow camera over a bounded 2D world.
#[derive(Debug, Clone)]
pub struct FollowCamera {
    /// Camera center position in world space
    pub position: Vec2,
    /// Ordered (name, factor) zoom table; insertion order defines cycle order
    pub zoom_levels: Vec<(String, f32)>,
    /// Name of the active zoom level. May name a missing entry, in which
    /// case the factor falls back to 1.0
    pub current_zoom: String,
    /// Dead zone rectangle; coordinates are offsets from the camera center
    pub dead_zone: Rect,
    /// Absolute world extent the visible rectangle may never leave
    pub world_bounds: Rect,
    /// Follow smoothing rate constant (per second)
    pub smoothing: f32,
    /// Viewport extent in virtual pixels
    pub viewport: Rect,
}

impl Default for FollowCamera {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            zoom_levels: Self::standard_zoom_levels(),
            current_zoom: ZOOM_DEFAULT.to_string(),
            // Dead zone spans -100..+100 on both axes
            dead_zone: Rect::from_center(Vec2::ZERO, Vec2::splat(DEAD_ZONE_SIZE)),
            world_bounds: Rect::new(0.0, 0.0, 1920.0, 1080.0),
            smoothing: CAMERA_SMOOTHING,
            viewport: Rect::new(0.0, 0.0, 960.0, 540.0),
        }
    }
}

impl FollowCamera {
    /// Create a camera for the given viewport and world, with the standard
    /// zoom table and default dead zone/smoothing.
    pub fn new(viewport: Rect, world_bounds: Rect) -> Self {
        Self {
            viewport,
            world_bounds,
            ..Self::default()
        }
    }

    /// The built-in zoom table: FAR 0.65, DEFAULT 0.9, CLOSE 1.25.
    pub fn standard_zoom_levels() -> Vec<(String, f32)> {
        vec![
            (ZOOM_FAR.to_string(), 0.65),
            (ZOOM_DEFAULT.to_string(), 0.9),
            (ZOOM_CLOSE.to_string(), 1.25),
        ]
    }

    /// Select a zoom level by name.
    ///
    /// No validation: an unknown name is accepted and renders with factor
    /// 1.0 until a known name is selected again.
    pub fn set_zoom(&mut self, name: &str) {
        self.current_zoom = name.to_string();
    }

    /// Zoom factor of the active level, or 1.0 if the active name is not in
    /// the table.
    pub fn zoom_factor(&self) -> f32 {
        self.zoom_levels
            .iter()
            .find(|(name, _)| name == &self.current_zoom)
            .map(|(_, factor)| *factor)
            .unwrap_or(1.0)
    }

    /// Step one zoom level in the given direction.
    ///
    /// Stops at the table ends without wrapping. If the active name is not
    /// in the table the cycle position is undefined, so this is a no-op.
    pub fn cycle_zoom(&mut self, direction: ZoomDirection) {
        let Some(index) = self
            .zoom_levels
            .iter()
            .position(|(name, _)| name == &self.current_zoom)
        else {
            return;
        };

        let next = match direction {
            ZoomDirection::Decrease => index.checked_sub(1),
            ZoomDirection::Increase => {
                if index + 1 < self.zoom_levels.len() {
                    Some(index + 1)
                } else {
                    None
                }
            }
        };

        if let Some(next) = next {
            self.current_zoom = self.zoom_levels[next].0.clone();
        }
    }

    /// Half extents of the world area visible at the current zoom.
    pub fn visible_half_extents(&self) -> Vec2 {
        let factor = self.zoom_factor();
        Vec2::new(
            (self.viewport.w / factor) * 0.5,
            (self.viewport.h / factor) * 0.5,
        )
    }

    /// Advance the follow behavior by one frame.
    ///
    /// # Arguments
    /// * `target` - World position of the tracked entity
    /// * `dt` - Seconds since the previous frame
    pub fn update(&mut self, target: Vec2, dt: f32) {
        let offset = target - self.position;
        let mut desired = self.position;

        // Per axis: pull back exactly to the dead-zone edge the target
        // crossed; axes still inside their bounds are left alone.
        if offset.x > self.dead_zone.right() {
            desired.x = target.x - self.dead_zone.right();
        } else if offset.x < self.dead_zone.left() {
            desired.x = target.x - self.dead_zone.left();
        }
        if offset.y > self.dead_zone.bottom() {
            desired.y = target.y - self.dead_zone.bottom();
        } else if offset.y < self.dead_zone.top() {
            desired.y = target.y - self.dead_zone.top();
        }

        // Factor clamped to [0,1]: at large dt the camera lands exactly on
        // the desired position instead of overshooting past it.
        let t = (self.smoothing * dt).clamp(0.0, 1.0);
        self.position = self.position.lerp(desired, t);

        self.clamp_to_world();
    }

    /// Place the camera directly on the target (still world-clamped).
    /// Used when play begins so the first frames do not lerp across the map.
    pub fn snap_to(&mut self, target: Vec2) {
        self.position = target;
        self.clamp_to_world();
    }

    /// View transform mapping world space to viewport space: translate by
    /// -position, scale by the zoom factor, then offset to the viewport
    /// center, in that order.
    pub fn view_transform(&self) -> Mat4 {
        let factor = self.zoom_factor();
        Mat4::from_translation(Vec3::new(
            self.viewport.w * 0.5,
            self.viewport.h * 0.5,
            0.0,
        )) * Mat4::from_scale(Vec3::new(factor, factor, 1.0))
            * Mat4::from_translation(Vec3::new(-self.position.x, -self.position.y, 0.0))
    }

    fn clamp_to_world(&mut self) {
        let half = self.visible_half_extents();
        self.position.x = clamp_axis(
            self.position.x,
            self.world_bounds.left() + half.x,
            self.world_bounds.right() - half.x,
        );
        self.position.y = clamp_axis(
            self.position.y,
            self.world_bounds.top() + half.y,
            self.world_bounds.bottom() - half.y,
        );
    }
}

/// Clamp with a deterministic fallback: when the range is inverted (the
/// visible area is wider than the world on that axis), the camera sits at
/// the range midpoint, i.e. centered over the world.
fn clamp_axis(value: f32, min: f32, max: f32) -> f32 {
    if min > max {
        (min + max) * 0.5
    } else {
        value.clamp(min, max)
    }
}
