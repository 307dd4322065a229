use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Projection", inline)]
#[serde(default)]
/// Clip planes handed to the perspective projection. The field of view
/// comes from the camera's zoom.
pub struct ProjectionOptions {
    /// Near clipping plane distance.
    #[schemars(title = "Near Plane", range(min = 0.001, max = 10.0))]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(title = "Far Plane", range(min = 1.0, max = 10000.0))]
    pub zfar: f32,
}

impl Default for ProjectionOptions {
    fn default() -> Self {
        Self {
            znear: 0.1,
            zfar: 100.0,
        }
    }
}
