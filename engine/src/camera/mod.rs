//! Camera Module
//!
//! Provides the dead-zone follow camera for the sandbox.
//! This module is window-system agnostic - it only deals with camera state and math.

pub mod follow;

pub use follow::{
    FollowCamera, ZoomDirection, CAMERA_SMOOTHING, DEAD_ZONE_SIZE, ZOOM_CLOSE, ZOOM_DEFAULT,
    ZOOM_FAR,
};
