//! Shared utilities.

/// Per-frame delta time, FPS smoothing, and optional frame limiting.
pub mod frame_timing;

pub use frame_timing::FrameTiming;
