use crate::camera::core::Camera;
use crate::input::{InputCommand, InputEvent, InputProcessor};
use crate::options::Options;

/// Free-fly camera plus the input state that drives it.
///
/// Look and zoom input is applied as events arrive; held movement keys are
/// applied once per frame by [`update`](Self::update) so speed is
/// independent of frame rate.
#[derive(Debug, Clone)]
pub struct CameraController {
    /// The camera being driven.
    pub camera: Camera,
    input: InputProcessor,
    constrain_pitch: bool,
}

impl Default for CameraController {
    fn default() -> Self {
        Self::from_options(&Options::default())
    }
}

impl CameraController {
    /// Wrap an existing camera and input processor. Pitch is constrained.
    #[must_use]
    pub fn new(camera: Camera, input: InputProcessor) -> Self {
        Self {
            camera,
            input,
            constrain_pitch: true,
        }
    }

    /// Build the camera and input state from options.
    #[must_use]
    pub fn from_options(options: &Options) -> Self {
        Self {
            camera: Camera::from_options(&options.camera),
            input: InputProcessor::new(
                options.keybindings.clone(),
                options.camera.capture_cursor,
            ),
            constrain_pitch: options.camera.constrain_pitch,
        }
    }

    /// Read-only access to the input processor.
    #[must_use]
    pub fn input(&self) -> &InputProcessor {
        &self.input
    }

    /// Mutable access to the input processor for rebinding keys.
    pub fn input_mut(&mut self) -> &mut InputProcessor {
        &mut self.input
    }

    /// Whether cursor motion currently rotates the camera.
    #[must_use]
    pub fn is_cursor_captured(&self) -> bool {
        self.input.is_captured()
    }

    /// Grab or release the cursor.
    pub fn set_cursor_captured(&mut self, captured: bool) {
        self.input.set_captured(captured);
    }

    /// Feed one input event.
    ///
    /// Look and zoom commands are applied to the camera. Commands the host
    /// must act on (capture changes, exit) are returned.
    pub fn handle_event(&mut self, event: InputEvent) -> Option<InputCommand> {
        match self.input.handle_event(event)? {
            InputCommand::Look { xoffset, yoffset } => {
                self.camera.process_mouse_movement(
                    xoffset,
                    yoffset,
                    self.constrain_pitch,
                );
                None
            }
            InputCommand::Zoom { delta } => {
                self.camera.process_mouse_scroll(delta);
                None
            }
            command @ (InputCommand::CursorCaptureChanged(_)
            | InputCommand::Exit) => Some(command),
        }
    }

    /// Apply every held movement key for a frame lasting `delta_time`
    /// seconds.
    pub fn update(&mut self, delta_time: f32) {
        for direction in self.input.held_movements() {
            self.camera.process_keyboard(direction, delta_time);
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::camera::core::PITCH_LIMIT;

    fn key(key: &str, pressed: bool) -> InputEvent {
        InputEvent::Key {
            key: key.into(),
            pressed,
        }
    }

    #[test]
    fn default_matches_lesson_camera() {
        let controller = CameraController::default();
        assert_eq!(controller.camera.position, Vec3::new(0.0, 0.0, 3.0));
        assert!(controller.is_cursor_captured());
    }

    #[test]
    fn held_forward_moves_by_speed_times_dt() {
        let mut controller = CameraController::default();
        let _ = controller.handle_event(key("KeyW", true));
        controller.update(0.4);
        // speed 2.5 * 0.4 = 1.0 along -Z
        assert!(controller
            .camera
            .position
            .abs_diff_eq(Vec3::new(0.0, 0.0, 2.0), 1e-5));

        let _ = controller.handle_event(key("KeyW", false));
        controller.update(0.4);
        assert!(controller
            .camera
            .position
            .abs_diff_eq(Vec3::new(0.0, 0.0, 2.0), 1e-5));
    }

    #[test]
    fn cursor_drives_yaw_and_pitch() {
        let mut controller = CameraController::default();
        let _ = controller.handle_event(InputEvent::CursorMoved { x: 0.0, y: 0.0 });
        let _ = controller
            .handle_event(InputEvent::CursorMoved { x: 100.0, y: -50.0 });
        assert_eq!(controller.camera.yaw(), -80.0);
        assert!((controller.camera.pitch() - 5.0).abs() < 1e-5);
    }

    #[test]
    fn pitch_is_constrained_from_options() {
        let mut controller = CameraController::default();
        let _ = controller.handle_event(InputEvent::CursorMoved { x: 0.0, y: 0.0 });
        let _ = controller
            .handle_event(InputEvent::CursorMoved { x: 0.0, y: -100_000.0 });
        assert_eq!(controller.camera.pitch(), PITCH_LIMIT);
    }

    #[test]
    fn unconstrained_options_let_pitch_pass_vertical() {
        let mut options = Options::default();
        options.camera.constrain_pitch = false;
        let mut controller = CameraController::from_options(&options);
        let _ = controller.handle_event(InputEvent::CursorMoved { x: 0.0, y: 0.0 });
        let _ = controller
            .handle_event(InputEvent::CursorMoved { x: 0.0, y: -1000.0 });
        assert!(controller.camera.pitch() > PITCH_LIMIT);
    }

    #[test]
    fn scroll_zooms_camera() {
        let mut controller = CameraController::default();
        assert_eq!(
            controller.handle_event(InputEvent::Scroll { delta: 5.0 }),
            None
        );
        assert_eq!(controller.camera.zoom(), 40.0);
    }

    #[test]
    fn host_commands_are_forwarded() {
        let mut controller = CameraController::default();
        assert_eq!(
            controller.handle_event(key("Tab", true)),
            Some(InputCommand::CursorCaptureChanged(false))
        );
        assert!(!controller.is_cursor_captured());
        assert_eq!(
            controller.handle_event(key("Escape", true)),
            Some(InputCommand::Exit)
        );
    }

    #[test]
    fn released_cursor_does_not_rotate() {
        let mut controller = CameraController::default();
        controller.set_cursor_captured(false);
        let _ = controller.handle_event(InputEvent::CursorMoved { x: 0.0, y: 0.0 });
        let _ = controller.handle_event(InputEvent::CursorMoved { x: 300.0, y: 0.0 });
        assert_eq!(controller.camera.yaw(), -90.0);
    }
}
