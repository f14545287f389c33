//! Player Movement
//!
//! Converts four directional booleans into a clamped world position.
//! Direction is normalized whenever it is non-zero, so diagonal input covers
//! exactly the same distance per second as axis-aligned input. After
//! integration the position is clamped so the sprite's visual bounds never
//! cross the world edges.
//!
//! # Usage
//!
//! ```rust,ignore
//! use tumbleweed_engine::player::{MoveInput, Player};
//!
//! let mut player = Player::new(start, world_bounds);
//! // Each frame:
//! player.update(move_input, delta_time);
//! ```

use glam::Vec2;

use crate::world::Rect;

/// Walk speed in world units per second
pub const PLAYER_SPEED: f32 = 220.0;

/// Sprite side length in world units
pub const PLAYER_SIZE: f32 = 32.0;

/// Directional input for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl MoveInput {
    /// Movement direction as a unit-or-zero vector (y grows downward).
    pub fn direction(&self) -> Vec2 {
        let mut dir = Vec2::ZERO;

        if self.up {
            dir.y -= 1.0;
        }
        if self.down {
            dir.y += 1.0;
        }
        if self.left {
            dir.x -= 1.0;
        }
        if self.right {
            dir.x += 1.0;
        }

        if dir != Vec2::ZERO {
            dir = dir.normalize();
        }

        dir
    }

    pub fn any(&self) -> bool {
        self.up || self.down || self.left || self.right
    }
}

/// The single moving entity of the sandbox.
#[derive(Debug, Clone)]
pub struct Player {
    /// Sprite center in world space
    pub position: Vec2,
    /// Walk speed in world units per second
    pub speed: f32,
    /// Sprite extent in world units
    pub size: Vec2,
    /// World extent the sprite may never leave
    pub world_bounds: Rect,
}

impl Player {
    pub fn new(position: Vec2, world_bounds: Rect) -> Self {
        Self {
            position,
            speed: PLAYER_SPEED,
            size: Vec2::splat(PLAYER_SIZE),
            world_bounds,
        }
    }

    /// Integrate one frame of movement and clamp to the world.
    pub fn update(&mut self, input: MoveInput, dt: f32) {
        self.position += input.direction() * self.speed * dt;

        let half = self.size * 0.5;
        self.position.x = self.position.x.clamp(
            self.world_bounds.left() + half.x,
            self.world_bounds.right() - half.x,
        );
        self.position.y = self.position.y.clamp(
            self.world_bounds.top() + half.y,
            self.world_bounds.bottom() - half.y,
        );
    }
}
