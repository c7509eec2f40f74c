//! Input handling: event types, cursor tracking, and the input processor
//! that converts raw window events into camera commands.

/// Platform-agnostic input events.
pub mod event;
/// Absolute-to-relative cursor tracking.
pub(crate) mod mouse;
/// Converts raw events into camera commands and held movement.
pub mod processor;

pub use event::InputEvent;
pub use processor::{InputProcessor, KeyBindings, MoveAction, MovementState};
