//! Converts raw platform events into camera commands.
//!
//! The `InputProcessor` owns all transient input state (cursor history,
//! held movement keys) and the key-binding map. It is the only thing that
//! sits between raw window events and the
//! [`CameraController`](crate::camera::CameraController).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::event::InputEvent;
use super::mouse::MouseTracker;
use crate::camera::CameraCommand;

/// Actions a key can be bound to.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// KeyW = "forward"
/// Escape = "quit"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveAction {
    /// Move along the look direction while held.
    Forward,
    /// Move against the look direction while held.
    Backward,
    /// Strafe left while held.
    Left,
    /// Strafe right while held.
    Right,
    /// Ask the host to stop (fires once on press).
    Quit,
}

/// Maps physical key strings to [`MoveAction`]s.
///
/// Key strings use the `winit::keyboard::KeyCode` debug format:
/// `"KeyW"`, `"Escape"`, etc.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct KeyBindings {
    /// Forward map: key string → action.
    bindings: HashMap<String, MoveAction>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let bindings = HashMap::from([
            ("KeyW".into(), MoveAction::Forward),
            ("KeyS".into(), MoveAction::Backward),
            ("KeyA".into(), MoveAction::Left),
            ("KeyD".into(), MoveAction::Right),
            ("Escape".into(), MoveAction::Quit),
        ]);
        Self { bindings }
    }
}

impl KeyBindings {
    /// Look up the action for a physical key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<MoveAction> {
        self.bindings.get(key).copied()
    }

    /// Bind `key` to `action`, returning the action it replaced.
    pub fn bind(
        &mut self,
        key: impl Into<String>,
        action: MoveAction,
    ) -> Option<MoveAction> {
        self.bindings.insert(key.into(), action)
    }

    /// Remove the binding for `key`.
    pub fn unbind(&mut self, key: &str) -> Option<MoveAction> {
        self.bindings.remove(key)
    }

    /// Whether any key maps to `action`.
    #[must_use]
    pub fn is_bound(&self, action: MoveAction) -> bool {
        self.bindings.values().any(|a| *a == action)
    }
}

/// Directions currently held down.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct MovementState {
    /// Forward key held.
    pub forward: bool,
    /// Backward key held.
    pub backward: bool,
    /// Strafe-left key held.
    pub left: bool,
    /// Strafe-right key held.
    pub right: bool,
}

impl MovementState {
    /// Whether no direction is held.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        *self == Self::default()
    }

    pub(crate) fn set(&mut self, action: MoveAction, held: bool) {
        match action {
            MoveAction::Forward => self.forward = held,
            MoveAction::Backward => self.backward = held,
            MoveAction::Left => self.left = held,
            MoveAction::Right => self.right = held,
            MoveAction::Quit => {}
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// InputProcessor
// ─────────────────────────────────────────────────────────────────────────────

/// Converts raw window events into [`CameraCommand`]s and held movement.
///
/// # Usage
///
/// ```ignore
/// // In the event loop:
/// if let Some(cmd) = input.handle_event(event) {
///     if !controller.execute(&cmd) {
///         event_loop.exit();
///     }
/// }
///
/// // Once per frame:
/// controller.update(timing.tick(), input.movement());
/// ```
#[derive(Debug, Clone, Default)]
pub struct InputProcessor {
    /// Cursor history for delta computation.
    mouse: MouseTracker,
    /// Directions currently held.
    movement: MovementState,
    /// Key string → action mapping.
    key_bindings: KeyBindings,
}

impl InputProcessor {
    /// Create a new processor with default key bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a processor with custom key bindings.
    #[must_use]
    pub fn with_key_bindings(key_bindings: KeyBindings) -> Self {
        Self {
            key_bindings,
            ..Self::new()
        }
    }

    /// Directions currently held.
    #[must_use]
    pub fn movement(&self) -> &MovementState {
        &self.movement
    }

    /// Last cursor position seen, if the tracker is primed.
    #[must_use]
    pub fn cursor_position(&self) -> Option<(f32, f32)> {
        self.mouse.position().map(|p| (p.x, p.y))
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn key_bindings(&self) -> &KeyBindings {
        &self.key_bindings
    }

    /// Mutable access to the key bindings for reconfiguration.
    pub fn key_bindings_mut(&mut self) -> &mut KeyBindings {
        &mut self.key_bindings
    }

    /// Drop held keys and cursor history, e.g. when the cursor is released
    /// from the window.
    pub fn reset(&mut self) {
        self.mouse.reset();
        self.movement = MovementState::default();
    }

    /// Process a raw input event and return zero or one commands.
    pub fn handle_event(&mut self, event: InputEvent) -> Option<CameraCommand> {
        match event {
            InputEvent::CursorMoved { x, y } => self
                .mouse
                .handle_position(x, y)
                .map(|delta| CameraCommand::Look { delta }),
            InputEvent::Key { code, pressed } => self.handle_key(&code, pressed),
            InputEvent::FocusLost => {
                log::debug!("focus lost, clearing held input");
                self.reset();
                None
            }
        }
    }

    fn handle_key(&mut self, code: &str, pressed: bool) -> Option<CameraCommand> {
        let action = self.key_bindings.lookup(code)?;
        if action == MoveAction::Quit {
            return pressed.then_some(CameraCommand::Quit);
        }
        self.movement.set(action, pressed);
        None
    }
}
