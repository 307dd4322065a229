use serde::{Deserialize, Serialize};

use crate::camera::core::CameraMovement;

/// Actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// move_forward = "KeyW"
/// move_down = ["ShiftLeft", "ShiftRight"]
/// toggle_cursor_capture = "Tab"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Hold to move forward.
    MoveForward,
    /// Hold to move backward.
    MoveBackward,
    /// Hold to strafe left.
    MoveLeft,
    /// Hold to strafe right.
    MoveRight,
    /// Hold to rise along the world up axis.
    MoveUp,
    /// Hold to sink along the world up axis.
    MoveDown,
    /// Grab or release the cursor.
    ToggleCursorCapture,
    /// Close the lesson.
    Exit,
}

impl KeyAction {
    /// Every action, in a stable order.
    pub const ALL: [Self; 8] = [
        Self::MoveForward,
        Self::MoveBackward,
        Self::MoveLeft,
        Self::MoveRight,
        Self::MoveUp,
        Self::MoveDown,
        Self::ToggleCursorCapture,
        Self::Exit,
    ];

    /// The camera movement a held key drives, if this is a movement action.
    #[must_use]
    pub fn movement(self) -> Option<CameraMovement> {
        match self {
            Self::MoveForward => Some(CameraMovement::Forward),
            Self::MoveBackward => Some(CameraMovement::Backward),
            Self::MoveLeft => Some(CameraMovement::Left),
            Self::MoveRight => Some(CameraMovement::Right),
            Self::MoveUp => Some(CameraMovement::Up),
            Self::MoveDown => Some(CameraMovement::Down),
            Self::ToggleCursorCapture | Self::Exit => None,
        }
    }
}
