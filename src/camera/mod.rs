//! Camera system for the lessons.
//!
//! Provides a free-fly Euler-angle camera, the controller that feeds it
//! input, and its GPU uniform binding.

/// GPU uniform buffer and bind group for the camera.
pub mod binding;
/// Camera plus the input state that drives it.
pub mod controller;
/// Core camera struct and GPU uniform types.
pub mod core;

pub use self::core::{Camera, CameraMovement, CameraUniform};
pub use binding::CameraBinding;
pub use controller::CameraController;
