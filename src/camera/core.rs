use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

use crate::options::CameraOptions;

/// Default yaw in degrees. Points the initial front vector along -Z.
pub const DEFAULT_YAW: f32 = -90.0;
/// Default pitch in degrees.
pub const DEFAULT_PITCH: f32 = 0.0;
/// Default movement speed in world units per second.
pub const DEFAULT_SPEED: f32 = 2.5;
/// Default mouse sensitivity in degrees per pixel.
pub const DEFAULT_SENSITIVITY: f32 = 0.1;
/// Default (and maximum) zoom, i.e. vertical field of view in degrees.
pub const DEFAULT_ZOOM: f32 = 45.0;

/// Pitch limit in degrees applied by constrained mouse movement.
pub const PITCH_LIMIT: f32 = 89.0;
/// Narrowest field of view reachable by scrolling.
pub const MIN_ZOOM: f32 = 1.0;
/// Widest field of view reachable by scrolling.
pub const MAX_ZOOM: f32 = 45.0;

/// Discrete movement directions for [`Camera::process_keyboard`].
///
/// Serialized as `snake_case` so key binding presets stay readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CameraMovement {
    /// Along `front`.
    Forward,
    /// Against `front`.
    Backward,
    /// Against `right`.
    Left,
    /// Along `right`.
    Right,
    /// Along the world up reference.
    Up,
    /// Against the world up reference.
    Down,
}

impl CameraMovement {
    /// Every direction, in a stable order.
    pub const ALL: [Self; 6] = [
        Self::Forward,
        Self::Backward,
        Self::Left,
        Self::Right,
        Self::Up,
        Self::Down,
    ];
}

/// Free-fly perspective camera driven by yaw/pitch Euler angles.
///
/// `front`, `right` and `up` are derived from `yaw`, `pitch` and
/// `world_up` and are rebuilt after every orientation change, so they
/// always form an orthonormal basis when a method returns.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Eye position in world space.
    pub position: Vec3,
    movement_speed: f32,
    mouse_sensitivity: f32,
    world_up: Vec3,
    yaw: f32,
    pitch: f32,
    front: Vec3,
    right: Vec3,
    up: Vec3,
    zoom: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::ZERO)
    }
}

impl Camera {
    /// Camera at `position` with the default orientation (looking down -Z,
    /// world up +Y).
    #[must_use]
    pub fn new(position: Vec3) -> Self {
        Self::with_orientation(position, Vec3::Y, DEFAULT_YAW, DEFAULT_PITCH)
    }

    /// Camera with an explicit world up reference and Euler angles in
    /// degrees. The pitch is stored as given.
    #[must_use]
    pub fn with_orientation(
        position: Vec3,
        world_up: Vec3,
        yaw: f32,
        pitch: f32,
    ) -> Self {
        let mut camera = Self {
            position,
            movement_speed: DEFAULT_SPEED,
            mouse_sensitivity: DEFAULT_SENSITIVITY,
            world_up,
            yaw,
            pitch,
            front: Vec3::NEG_Z,
            right: Vec3::X,
            up: Vec3::Y,
            zoom: DEFAULT_ZOOM,
        };
        camera.update_camera_vectors();
        camera
    }

    /// Camera configured from the `[camera]` options section.
    #[must_use]
    pub fn from_options(options: &CameraOptions) -> Self {
        let mut camera = Self::with_orientation(
            Vec3::from_array(options.position),
            Vec3::from_array(options.world_up),
            options.yaw,
            options.pitch,
        );
        camera.set_movement_speed(options.movement_speed);
        camera.set_mouse_sensitivity(options.mouse_sensitivity);
        camera.set_zoom(options.zoom);
        camera
    }

    /// Movement speed in world units per second.
    #[must_use]
    pub fn movement_speed(&self) -> f32 {
        self.movement_speed
    }

    /// Set the distance travelled per second of held movement.
    pub fn set_movement_speed(&mut self, speed: f32) {
        self.movement_speed = speed;
    }

    /// Degrees of rotation per unit of look input.
    #[must_use]
    pub fn mouse_sensitivity(&self) -> f32 {
        self.mouse_sensitivity
    }

    /// Set the degrees of rotation per unit of look input.
    pub fn set_mouse_sensitivity(&mut self, sensitivity: f32) {
        self.mouse_sensitivity = sensitivity;
    }

    /// World up reference fixed at construction.
    #[must_use]
    pub fn world_up(&self) -> Vec3 {
        self.world_up
    }

    /// Yaw in degrees. Unbounded.
    #[must_use]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Pitch in degrees.
    #[must_use]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Unit view direction.
    #[must_use]
    pub fn front(&self) -> Vec3 {
        self.front
    }

    /// Unit vector to the camera's right.
    #[must_use]
    pub fn right(&self) -> Vec3 {
        self.right
    }

    /// Unit camera-local up vector.
    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Vertical field of view in degrees, within `[MIN_ZOOM, MAX_ZOOM]`.
    #[must_use]
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Set the field of view directly, saturating to `[MIN_ZOOM, MAX_ZOOM]`.
    pub fn set_zoom(&mut self, zoom: f32) {
        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
    }

    /// Look-at transform from `position` towards `position + front`.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    /// Right-handed perspective projection using `zoom` as the vertical
    /// field of view. Aspect ratio and clip planes belong to the renderer.
    #[must_use]
    pub fn projection_matrix(&self, aspect: f32, znear: f32, zfar: f32) -> Mat4 {
        // perspective_rh uses the [0,1] depth range wgpu expects
        Mat4::perspective_rh(self.zoom.to_radians(), aspect, znear, zfar)
    }

    /// `projection * view`.
    #[must_use]
    pub fn view_projection(&self, aspect: f32, znear: f32, zfar: f32) -> Mat4 {
        self.projection_matrix(aspect, znear, zfar) * self.view_matrix()
    }

    /// Move along the current basis by `movement_speed * delta_time`.
    ///
    /// Forward/backward follow `front`, so movement has a vertical
    /// component while pitched. Up/down follow `world_up`.
    pub fn process_keyboard(&mut self, direction: CameraMovement, delta_time: f32) {
        let velocity = self.movement_speed * delta_time;
        match direction {
            CameraMovement::Forward => self.position += self.front * velocity,
            CameraMovement::Backward => self.position -= self.front * velocity,
            CameraMovement::Left => self.position -= self.right * velocity,
            CameraMovement::Right => self.position += self.right * velocity,
            CameraMovement::Up => self.position += self.world_up * velocity,
            CameraMovement::Down => self.position -= self.world_up * velocity,
        }
    }

    /// Rotate by a look delta. Positive `yoffset` looks up; callers with
    /// screen-space-down-is-positive coordinates invert it first.
    ///
    /// With `constrain_pitch` the pitch saturates to `±PITCH_LIMIT` so the
    /// derived up vector never flips.
    pub fn process_mouse_movement(
        &mut self,
        xoffset: f32,
        yoffset: f32,
        constrain_pitch: bool,
    ) {
        self.yaw += xoffset * self.mouse_sensitivity;
        self.pitch += yoffset * self.mouse_sensitivity;

        if constrain_pitch {
            self.pitch = self.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        }

        self.update_camera_vectors();
    }

    /// Narrow (positive `yoffset`) or widen the field of view.
    pub fn process_mouse_scroll(&mut self, yoffset: f32) {
        self.set_zoom(self.zoom - yoffset);
    }

    fn update_camera_vectors(&mut self) {
        let (yaw_sin, yaw_cos) = self.yaw.to_radians().sin_cos();
        let (pitch_sin, pitch_cos) = self.pitch.to_radians().sin_cos();

        self.front =
            Vec3::new(yaw_cos * pitch_cos, pitch_sin, yaw_sin * pitch_cos)
                .normalize();
        // Raw cross products shrink near the poles; renormalize so movement
        // speed does not decay there.
        self.right = self.front.cross(self.world_up).normalize();
        self.up = self.right.cross(self.front).normalize();
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform buffer mirroring the camera's matrices and eye state.
pub struct CameraUniform {
    /// Combined view-projection matrix.
    pub view_proj: [[f32; 4]; 4],
    /// World-to-eye transform.
    pub view: [[f32; 4]; 4],
    /// Perspective projection.
    pub projection: [[f32; 4]; 4],
    /// Camera world-space position.
    pub position: [f32; 3],
    /// Vertical field of view in degrees.
    pub zoom: f32,
    /// Camera forward direction for lighting.
    pub front: [f32; 3],
    /// Padding for GPU alignment.
    pub(crate) _pad: f32,
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraUniform {
    /// Uniform with identity matrices.
    #[must_use]
    pub fn new() -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            view: Mat4::IDENTITY.to_cols_array_2d(),
            projection: Mat4::IDENTITY.to_cols_array_2d(),
            position: [0.0; 3],
            zoom: DEFAULT_ZOOM,
            front: [0.0, 0.0, -1.0],
            _pad: 0.0,
        }
    }

    /// Refresh every field from the camera and the renderer's projection
    /// parameters.
    pub fn update(&mut self, camera: &Camera, aspect: f32, znear: f32, zfar: f32) {
        let view = camera.view_matrix();
        let projection = camera.projection_matrix(aspect, znear, zfar);
        self.view_proj = (projection * view).to_cols_array_2d();
        self.view = view.to_cols_array_2d();
        self.projection = projection.to_cols_array_2d();
        self.position = camera.position.to_array();
        self.zoom = camera.zoom();
        self.front = camera.front().to_array();
    }
}
