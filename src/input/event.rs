/// Platform-agnostic input events.
///
/// The host translates its windowing library's events into these and feeds
/// them to an [`InputProcessor`](super::InputProcessor), which produces
/// [`CameraCommand`](crate::camera::CameraCommand) values.
///
/// # Example
///
/// ```
/// use flycam::input::{InputEvent, InputProcessor};
///
/// let mut input = InputProcessor::new();
/// assert!(input.handle_event(InputEvent::CursorMoved { x: 400.0, y: 300.0 }).is_none());
/// assert!(input.handle_event(InputEvent::CursorMoved { x: 410.0, y: 300.0 }).is_some());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Cursor moved to absolute screen position.
    CursorMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels, growing downward.
        y: f32,
    },
    /// Keyboard key pressed or released.
    Key {
        /// Physical key code in `KeyCode` debug form (`"KeyW"`, `"Escape"`).
        code: String,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// The window lost input focus. Held keys and cursor history are dropped.
    FocusLost,
}
