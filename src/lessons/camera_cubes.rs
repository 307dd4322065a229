use glam::{Mat4, Vec3};
use wgpu::util::DeviceExt;

use super::{create_pipeline, ModelInstance, PipelineDef};
use crate::app::{FrameContext, Lesson};
use crate::camera::CameraBinding;
use crate::error::FreelookError;
use crate::geometry::{TexturedVertex, CUBE_POSITIONS, CUBE_TEXTURED};

/// Axis every cube spins around.
const SPIN_AXIS: Vec3 = Vec3::new(1.0, 0.3, 0.5);

/// Ten cubes scattered in front of the camera, each spinning at its own
/// phase. Fly around with WASD, look with the mouse, zoom with the wheel.
#[derive(Default)]
pub struct CameraCubes {
    resources: Option<Resources>,
}

struct Resources {
    pipeline: wgpu::RenderPipeline,
    camera: CameraBinding,
    vertices: wgpu::Buffer,
    instances: wgpu::Buffer,
}

impl CameraCubes {
    /// Registry name.
    pub const NAME: &'static str = "camera_cubes";

    /// Model matrix of cube `index` at `time` seconds.
    #[must_use]
    pub fn model_matrix(index: usize, time: f32) -> Mat4 {
        let angle = 20.0 * index as f32 + 50.0 * time;
        Mat4::from_translation(CUBE_POSITIONS[index % CUBE_POSITIONS.len()])
            * Mat4::from_axis_angle(SPIN_AXIS.normalize(), angle.to_radians())
    }

    fn instances(time: f32) -> Vec<ModelInstance> {
        (0..CUBE_POSITIONS.len())
            .map(|i| ModelInstance::new(Self::model_matrix(i, time)))
            .collect()
    }
}

impl Lesson for CameraCubes {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn init(&mut self, ctx: &FrameContext) -> Result<(), FreelookError> {
        let device = &ctx.gpu.device;
        let shader = device.create_shader_module(wgpu::include_wgsl!(
            "../../assets/shaders/camera_cubes.wgsl"
        ));
        let camera = CameraBinding::new(&ctx.gpu);

        let pipeline = create_pipeline(
            ctx,
            PipelineDef {
                label: "Camera Cubes",
                shader: &shader,
                fragment_entry: "fs_main",
                bind_group_layouts: &[&camera.layout],
                vertex_layout: TexturedVertex::layout(),
            },
        );

        let vertices =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Cube Vertex Buffer"),
                contents: bytemuck::cast_slice(&CUBE_TEXTURED),
                usage: wgpu::BufferUsages::VERTEX,
            });
        let instances =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Cube Instance Buffer"),
                contents: bytemuck::cast_slice(&Self::instances(0.0)),
                usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            });

        self.resources = Some(Resources {
            pipeline,
            camera,
            vertices,
            instances,
        });
        Ok(())
    }

    fn update(&mut self, ctx: &mut FrameContext, _delta_time: f32) {
        let Some(res) = &mut self.resources else {
            return;
        };
        let instances = Self::instances(ctx.clock.elapsed());
        ctx.gpu
            .queue
            .write_buffer(&res.instances, 0, bytemuck::cast_slice(&instances));
        ctx.upload_camera(&mut res.camera);
    }

    fn render(
        &mut self,
        ctx: &FrameContext,
        encoder: &mut wgpu::CommandEncoder,
        target: &wgpu::TextureView,
    ) {
        let Some(res) = &self.resources else {
            return;
        };
        let mut pass = ctx.begin_clear_pass(encoder, target, "Camera Cubes Pass");
        pass.set_pipeline(&res.pipeline);
        pass.set_bind_group(0, &res.camera.bind_group, &[]);
        pass.set_vertex_buffer(0, res.vertices.slice(..));
        pass.set_vertex_buffer(1, res.instances.slice(..));
        pass.draw(
            0..CUBE_TEXTURED.len() as u32,
            0..CUBE_POSITIONS.len() as u32,
        );
    }

    fn cleanup(&mut self) {
        if let Some(res) = self.resources.take() {
            res.vertices.destroy();
            res.instances.destroy();
            res.camera.buffer.destroy();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_cube_sits_at_origin_unrotated_at_time_zero() {
        let model = CameraCubes::model_matrix(0, 0.0);
        assert!(model.abs_diff_eq(Mat4::IDENTITY, 1e-6));
    }

    #[test]
    fn cubes_keep_their_positions_while_spinning() {
        for (i, position) in CUBE_POSITIONS.iter().enumerate() {
            let model = CameraCubes::model_matrix(i, 3.7);
            assert!(model.w_axis.truncate().abs_diff_eq(*position, 1e-6));
        }
    }

    #[test]
    fn spin_advances_fifty_degrees_per_second() {
        let a = CameraCubes::model_matrix(0, 0.0);
        let b = CameraCubes::model_matrix(0, 1.0);
        let (_, rot_a, _) = a.to_scale_rotation_translation();
        let (_, rot_b, _) = b.to_scale_rotation_translation();
        assert!((rot_a.angle_between(rot_b).to_degrees() - 50.0).abs() < 1e-2);
    }
}
