use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::core::{
    DEFAULT_PITCH, DEFAULT_SENSITIVITY, DEFAULT_SPEED, DEFAULT_YAW,
    DEFAULT_ZOOM,
};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Initial camera placement and control tuning.
pub struct CameraOptions {
    /// Starting eye position.
    #[schemars(skip)]
    pub position: [f32; 3],
    /// World up reference. Fixed for the lifetime of the camera.
    #[schemars(skip)]
    pub world_up: [f32; 3],
    /// Starting yaw in degrees.
    #[schemars(title = "Yaw", extend("step" = 1.0))]
    pub yaw: f32,
    /// Starting pitch in degrees.
    #[schemars(title = "Pitch", range(min = -89.0, max = 89.0), extend("step" = 1.0))]
    pub pitch: f32,
    /// Movement speed in world units per second.
    #[schemars(title = "Movement Speed", range(min = 0.1, max = 50.0), extend("step" = 0.1))]
    pub movement_speed: f32,
    /// Degrees of rotation per pixel of cursor movement.
    #[schemars(title = "Mouse Sensitivity", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub mouse_sensitivity: f32,
    /// Starting vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 1.0, max = 45.0), extend("step" = 1.0))]
    pub zoom: f32,
    /// Saturate pitch at ±89° while looking around.
    #[schemars(title = "Constrain Pitch")]
    pub constrain_pitch: bool,
    /// Grab and hide the cursor when a lesson starts.
    #[schemars(title = "Capture Cursor")]
    pub capture_cursor: bool,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, 3.0],
            world_up: [0.0, 1.0, 0.0],
            yaw: DEFAULT_YAW,
            pitch: DEFAULT_PITCH,
            movement_speed: DEFAULT_SPEED,
            mouse_sensitivity: DEFAULT_SENSITIVITY,
            zoom: DEFAULT_ZOOM,
            constrain_pitch: true,
            capture_cursor: true,
        }
    }
}
