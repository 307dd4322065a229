/// Platform-agnostic input events.
///
/// These are fed into an [`InputProcessor`](super::InputProcessor) which
/// converts them into [`InputCommand`](super::InputCommand) values.
///
/// # Example
///
/// ```
/// # use freelook::input::{InputEvent, InputProcessor};
/// # use freelook::options::KeybindingOptions;
/// let mut input = InputProcessor::new(KeybindingOptions::default(), true);
/// assert!(input
///     .handle_event(InputEvent::CursorMoved { x: 100.0, y: 200.0 })
///     .is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Cursor moved to absolute screen position.
    CursorMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels, growing downwards.
        y: f32,
    },
    /// Scroll wheel (positive = away from the user).
    Scroll {
        /// Scroll amount in notches.
        delta: f32,
    },
    /// Physical key pressed or released.
    Key {
        /// Key code string in the `winit::keyboard::KeyCode` debug format:
        /// `"KeyW"`, `"Space"`, `"Escape"`, etc.
        key: String,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// The window lost keyboard focus.
    FocusLost,
}

#[cfg(feature = "viewer")]
impl InputEvent {
    /// Convert a winit window event, if it carries input the camera cares
    /// about.
    #[must_use]
    pub fn from_window_event(event: &winit::event::WindowEvent) -> Option<Self> {
        use winit::event::{ElementState, MouseScrollDelta, WindowEvent};
        use winit::keyboard::PhysicalKey;

        match event {
            WindowEvent::CursorMoved { position, .. } => Some(Self::CursorMoved {
                x: position.x as f32,
                y: position.y as f32,
            }),
            WindowEvent::MouseWheel { delta, .. } => {
                let delta = match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 * 0.01,
                };
                Some(Self::Scroll { delta })
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.repeat {
                    return None;
                }
                let PhysicalKey::Code(code) = event.physical_key else {
                    return None;
                };
                Some(Self::Key {
                    key: format!("{code:?}"),
                    pressed: event.state == ElementState::Pressed,
                })
            }
            WindowEvent::Focused(false) => Some(Self::FocusLost),
            _ => None,
        }
    }
}
