//! Sandbox Configuration
//!
//! Centralized tuning for the ranch sandbox: world dimensions, virtual
//! resolution, and player/camera parameters. `Default` returns the shipped
//! values; `load` overlays an optional JSON file for local experimentation.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::camera::CAMERA_SMOOTHING;
use crate::player::{PLAYER_SIZE, PLAYER_SPEED};
use crate::world::Rect;

/// Errors from loading a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Central configuration for the sandbox world and window.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SandboxConfig {
    /// World width in world units
    pub world_width: f32,
    /// World height in world units
    pub world_height: f32,
    /// Edge length of one background tile
    pub tile_size: f32,
    /// Virtual resolution the game renders at before letterboxing
    pub virtual_width: f32,
    pub virtual_height: f32,
    /// Player walk speed (world units per second)
    pub player_speed: f32,
    /// Player sprite edge length
    pub player_size: f32,
    /// Camera follow smoothing rate
    pub camera_smoothing: f32,
    /// Window title base text
    pub window_title: String,
}

impl Default for SandboxConfig {
    fn default() -> Self {
        Self {
            world_width: 2400.0,
            world_height: 1800.0,
            tile_size: 120.0,
            virtual_width: 960.0,
            virtual_height: 540.0,
            player_speed: PLAYER_SPEED,
            player_size: PLAYER_SIZE,
            camera_smoothing: CAMERA_SMOOTHING,
            window_title: "Tumbleweed Ranch".to_string(),
        }
    }
}

impl SandboxConfig {
    /// Load configuration from a JSON file, or defaults when the file does
    /// not exist. A present but malformed file is an error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!("no config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        tracing::info!("loaded config from {}", path.display());
        Ok(config)
    }

    /// World bounds as a rect anchored at the origin.
    pub fn world_bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.world_width, self.world_height)
    }

    /// Virtual viewport size.
    pub fn virtual_size(&self) -> Vec2 {
        Vec2::new(self.virtual_width, self.virtual_height)
    }

    /// Player spawn point (world center).
    pub fn spawn_point(&self) -> Vec2 {
        self.world_bounds().center()
    }
}
