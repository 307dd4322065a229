//! Converts raw platform events into camera commands.
//!
//! The `InputProcessor` owns all transient input state (cursor tracking,
//! cursor capture, held movement keys) and the key-binding map. It is the
//! only thing that sits between raw window events and the camera.

use std::collections::HashSet;

use super::event::InputEvent;
use super::keyboard::KeyAction;
use super::mouse::CursorTracker;
use crate::camera::core::CameraMovement;
use crate::options::KeybindingOptions;

/// Commands produced from input events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputCommand {
    /// Rotate the camera. `yoffset` is positive for looking up.
    Look {
        /// Horizontal cursor delta in pixels.
        xoffset: f32,
        /// Vertical cursor delta in pixels, already inverted.
        yoffset: f32,
    },
    /// Change the field of view.
    Zoom {
        /// Scroll amount (positive = narrower field of view).
        delta: f32,
    },
    /// The cursor was grabbed (`true`) or released (`false`).
    CursorCaptureChanged(bool),
    /// The user asked to close the lesson.
    Exit,
}

/// Converts raw window events into [`InputCommand`]s.
///
/// Held movement keys are not turned into commands; the per-frame update
/// reads them through [`held_movements`](Self::held_movements) so movement
/// scales with frame time.
///
/// # Usage
///
/// ```ignore
/// // In the event loop:
/// if let Some(cmd) = input.handle_event(event) {
///     apply(cmd);
/// }
/// // Once per frame:
/// for direction in input.held_movements() {
///     camera.process_keyboard(direction, dt);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct InputProcessor {
    cursor: CursorTracker,
    captured: bool,
    /// Pressed keys bound to a movement action.
    held_keys: HashSet<String>,
    key_bindings: KeybindingOptions,
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new(KeybindingOptions::default(), false)
    }
}

impl InputProcessor {
    /// Create a processor with the given bindings and initial capture state.
    #[must_use]
    pub fn new(key_bindings: KeybindingOptions, captured: bool) -> Self {
        Self {
            cursor: CursorTracker::new(),
            captured,
            held_keys: HashSet::new(),
            key_bindings,
        }
    }

    /// Whether cursor motion currently drives the camera.
    #[must_use]
    pub fn is_captured(&self) -> bool {
        self.captured
    }

    /// Grab or release the cursor. Grabbing re-arms the first-sample guard.
    pub fn set_captured(&mut self, captured: bool) {
        if captured && !self.captured {
            self.cursor.reset();
        }
        self.captured = captured;
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn key_bindings(&self) -> &KeybindingOptions {
        &self.key_bindings
    }

    /// Replace the key bindings. Keys held under the old map are released.
    pub fn set_key_bindings(&mut self, key_bindings: KeybindingOptions) {
        self.key_bindings = key_bindings;
        self.held_keys.clear();
    }

    /// Movement directions with at least one bound key held, in a stable
    /// order.
    pub fn held_movements(&self) -> impl Iterator<Item = CameraMovement> + '_ {
        CameraMovement::ALL.into_iter().filter(|direction| {
            self.held_keys.iter().any(|key| {
                self.key_bindings.lookup(key).and_then(KeyAction::movement)
                    == Some(*direction)
            })
        })
    }

    /// Release every held movement key.
    pub fn release_all(&mut self) {
        self.held_keys.clear();
    }

    /// Process a raw input event and return zero or one commands.
    pub fn handle_event(&mut self, event: InputEvent) -> Option<InputCommand> {
        match event {
            InputEvent::CursorMoved { x, y } => self.handle_cursor_moved(x, y),
            InputEvent::Scroll { delta } => Some(InputCommand::Zoom { delta }),
            InputEvent::Key { key, pressed } => self.handle_key(&key, pressed),
            InputEvent::FocusLost => {
                self.release_all();
                None
            }
        }
    }

    fn handle_cursor_moved(&mut self, x: f32, y: f32) -> Option<InputCommand> {
        if !self.captured {
            return None;
        }
        self.cursor
            .sample(x, y)
            .map(|(xoffset, yoffset)| InputCommand::Look { xoffset, yoffset })
    }

    fn handle_key(&mut self, key: &str, pressed: bool) -> Option<InputCommand> {
        let action = self.key_bindings.lookup(key)?;

        if action.movement().is_some() {
            if pressed {
                let _ = self.held_keys.insert(key.to_owned());
            } else {
                let _ = self.held_keys.remove(key);
            }
            return None;
        }

        if !pressed {
            return None;
        }

        match action {
            KeyAction::ToggleCursorCapture => {
                self.set_captured(!self.captured);
                log::debug!("cursor capture: {}", self.captured);
                Some(InputCommand::CursorCaptureChanged(self.captured))
            }
            KeyAction::Exit => Some(InputCommand::Exit),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(key: &str, pressed: bool) -> InputEvent {
        InputEvent::Key {
            key: key.into(),
            pressed,
        }
    }

    fn captured() -> InputProcessor {
        InputProcessor::new(KeybindingOptions::default(), true)
    }

    #[test]
    fn cursor_motion_is_ignored_until_captured() {
        let mut input = InputProcessor::default();
        assert!(!input.is_captured());
        let _ = input.handle_event(InputEvent::CursorMoved { x: 0.0, y: 0.0 });
        assert_eq!(
            input.handle_event(InputEvent::CursorMoved { x: 50.0, y: 0.0 }),
            None
        );
    }

    #[test]
    fn captured_cursor_produces_inverted_look() {
        let mut input = captured();
        assert_eq!(
            input.handle_event(InputEvent::CursorMoved { x: 400.0, y: 300.0 }),
            None
        );
        assert_eq!(
            input.handle_event(InputEvent::CursorMoved { x: 420.0, y: 280.0 }),
            Some(InputCommand::Look {
                xoffset: 20.0,
                yoffset: 20.0
            })
        );
    }

    #[test]
    fn scroll_zooms_regardless_of_capture() {
        let mut input = InputProcessor::default();
        assert_eq!(
            input.handle_event(InputEvent::Scroll { delta: 1.0 }),
            Some(InputCommand::Zoom { delta: 1.0 })
        );
    }

    #[test]
    fn movement_keys_are_held_until_released() {
        let mut input = captured();
        assert_eq!(input.handle_event(key("KeyW", true)), None);
        assert_eq!(input.handle_event(key("KeyD", true)), None);
        assert_eq!(
            input.held_movements().collect::<Vec<_>>(),
            vec![CameraMovement::Forward, CameraMovement::Right]
        );

        let _ = input.handle_event(key("KeyW", false));
        assert_eq!(
            input.held_movements().collect::<Vec<_>>(),
            vec![CameraMovement::Right]
        );
    }

    #[test]
    fn either_shift_key_keeps_moving_down() {
        let mut input = captured();
        let _ = input.handle_event(key("ShiftLeft", true));
        let _ = input.handle_event(key("ShiftRight", true));
        let _ = input.handle_event(key("ShiftLeft", false));
        assert_eq!(
            input.held_movements().collect::<Vec<_>>(),
            vec![CameraMovement::Down]
        );
        let _ = input.handle_event(key("ShiftRight", false));
        assert_eq!(input.held_movements().count(), 0);
    }

    #[test]
    fn focus_loss_releases_held_keys() {
        let mut input = captured();
        let _ = input.handle_event(key("Space", true));
        let _ = input.handle_event(InputEvent::FocusLost);
        assert_eq!(input.held_movements().count(), 0);
    }

    #[test]
    fn unbound_keys_do_nothing() {
        let mut input = captured();
        assert_eq!(input.handle_event(key("KeyZ", true)), None);
        assert_eq!(input.held_movements().count(), 0);
    }

    #[test]
    fn exit_fires_on_press_only() {
        let mut input = captured();
        assert_eq!(
            input.handle_event(key("Escape", true)),
            Some(InputCommand::Exit)
        );
        assert_eq!(input.handle_event(key("Escape", false)), None);
    }

    #[test]
    fn toggling_capture_rearms_first_sample() {
        let mut input = captured();
        let _ = input.handle_event(InputEvent::CursorMoved { x: 0.0, y: 0.0 });

        assert_eq!(
            input.handle_event(key("Tab", true)),
            Some(InputCommand::CursorCaptureChanged(false))
        );
        assert_eq!(
            input.handle_event(key("Tab", true)),
            Some(InputCommand::CursorCaptureChanged(true))
        );

        // The cursor moved a long way while released; no jump on re-grab.
        assert_eq!(
            input.handle_event(InputEvent::CursorMoved { x: 600.0, y: 600.0 }),
            None
        );
        assert_eq!(
            input.handle_event(InputEvent::CursorMoved { x: 601.0, y: 600.0 }),
            Some(InputCommand::Look {
                xoffset: 1.0,
                yoffset: 0.0
            })
        );
    }

    #[test]
    fn replacing_bindings_releases_keys() {
        let mut input = captured();
        let _ = input.handle_event(key("KeyW", true));
        let mut bindings = KeybindingOptions::default();
        bindings.bind(KeyAction::MoveForward, "ArrowUp");
        input.set_key_bindings(bindings);
        assert_eq!(input.held_movements().count(), 0);
        let _ = input.handle_event(key("ArrowUp", true));
        assert_eq!(
            input.held_movements().collect::<Vec<_>>(),
            vec![CameraMovement::Forward]
        );
    }
}
