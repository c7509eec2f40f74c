use glam::Vec2;

/// A discrete camera request produced by the
/// [`InputProcessor`](crate::input::InputProcessor).
///
/// Held movement is not a command; it is sampled once per frame through
/// [`MovementState`](crate::input::MovementState).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraCommand {
    /// Turn the camera by a raw pointer delta (`y` positive = look up).
    Look {
        /// Raw pointer delta in device units, before sensitivity.
        delta: Vec2,
    },
    /// The user asked to leave; the host should close its loop.
    Quit,
}
