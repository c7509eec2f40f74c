//! Free-fly camera for 3D scene viewing.
//!
//! Provides a yaw/pitch camera with WASD-style movement, a perspective
//! projection with a GPU-ready uniform, and a frame-driven controller that
//! applies input commands.

/// Commands produced by the input layer.
pub mod command;
/// Frame-driven controller owning the camera and its projection.
pub mod controller;
/// Core camera struct and orientation math.
pub mod core;
/// Perspective projection and GPU uniform types.
pub mod projection;

pub use command::CameraCommand;
pub use controller::CameraController;
pub use self::core::Camera;
pub use projection::{CameraUniform, Projection};
