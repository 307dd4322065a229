use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Window", inline)]
#[serde(default)]
/// Window size, title and presentation settings.
pub struct WindowOptions {
    /// Initial inner width in logical pixels.
    #[schemars(range(min = 1))]
    pub width: u32,
    /// Initial inner height in logical pixels.
    #[schemars(range(min = 1))]
    pub height: u32,
    /// Window title. Lessons append their own name.
    pub title: String,
    /// Background clear color (linear RGB).
    #[schemars(skip)]
    pub clear_color: [f32; 3],
    /// Wait for vertical blank when presenting.
    pub vsync: bool,
}

impl Default for WindowOptions {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            title: "Freelook".into(),
            clear_color: [0.2, 0.3, 0.3],
            vsync: true,
        }
    }
}

impl WindowOptions {
    /// Clear color as a wgpu color with full opacity.
    #[must_use]
    pub fn clear_color(&self) -> wgpu::Color {
        let [r, g, b] = self.clear_color;
        wgpu::Color {
            r: f64::from(r),
            g: f64::from(g),
            b: f64::from(b),
            a: 1.0,
        }
    }

    /// Width over height, guarding against a zero height.
    #[must_use]
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }
}
