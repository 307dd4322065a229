//! Input handling: event types, cursor tracking, and the input processor
//! that converts raw window events into camera commands.

/// Platform-agnostic input events.
pub mod event;
/// Bindable key actions.
pub mod keyboard;
/// First-sample cursor tracking.
pub mod mouse;
/// Converts raw events into camera commands.
pub mod processor;

pub use event::InputEvent;
pub use keyboard::KeyAction;
pub use mouse::CursorTracker;
pub use processor::{InputCommand, InputProcessor};
