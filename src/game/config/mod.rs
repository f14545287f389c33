//! Config Module
//!
//! Centralized configuration for world layout, key bindings, and gameplay
//! parameters.

pub mod input_config;
pub mod sandbox_config;

pub use input_config::InputConfig;
pub use sandbox_config::{ConfigError, SandboxConfig};
