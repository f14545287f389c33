//! Player Module
//!
//! Provides player entity movement for the sandbox.
//!
//! # Components
//!
//! - [`Player`] - position + speed with world-bounds clamping
//! - [`MoveInput`] - four directional booleans, normalized into a direction

pub mod movement;

pub use movement::{MoveInput, Player, PLAYER_SIZE, PLAYER_SPEED};
