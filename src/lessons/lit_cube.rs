use glam::{Mat4, Vec3};
use wgpu::util::DeviceExt;

use super::{create_pipeline, ModelInstance, PipelineDef};
use crate::app::{FrameContext, Lesson};
use crate::camera::CameraBinding;
use crate::error::FreelookError;
use crate::geometry::{NormalVertex, CUBE_WITH_NORMALS};

const OBJECT_COLOR: [f32; 3] = [1.0, 0.5, 0.31];
const LIGHT_COLOR: [f32; 3] = [1.0, 1.0, 1.0];
const LAMP_POSITION: Vec3 = Vec3::new(1.2, 1.0, 2.0);
const LAMP_SCALE: f32 = 0.2;

/// Light parameters shared by the object and lamp shaders (group 1).
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightUniform {
    /// World-space light position.
    pub position: [f32; 3],
    /// Ambient term weight.
    pub ambient_strength: f32,
    /// Light color.
    pub color: [f32; 3],
    /// Specular term weight.
    pub specular_strength: f32,
    /// Base color of the lit object.
    pub object_color: [f32; 3],
    /// Specular exponent.
    pub shininess: f32,
}

impl Default for LightUniform {
    fn default() -> Self {
        Self {
            position: LAMP_POSITION.to_array(),
            ambient_strength: 0.1,
            color: LIGHT_COLOR,
            specular_strength: 0.5,
            object_color: OBJECT_COLOR,
            shininess: 32.0,
        }
    }
}

/// A coral cube lit by a single white point light, with the light itself
/// drawn as a small unlit cube.
#[derive(Default)]
pub struct LitCube {
    light: LightUniform,
    resources: Option<Resources>,
}

struct Resources {
    object_pipeline: wgpu::RenderPipeline,
    lamp_pipeline: wgpu::RenderPipeline,
    camera: CameraBinding,
    light_buffer: wgpu::Buffer,
    light_bind_group: wgpu::BindGroup,
    vertices: wgpu::Buffer,
    instances: wgpu::Buffer,
}

impl LitCube {
    /// Registry name.
    pub const NAME: &'static str = "lit_cube";

    /// Current light parameters.
    #[must_use]
    pub fn light(&self) -> &LightUniform {
        &self.light
    }

    /// Instance 0 is the object at the origin, instance 1 the lamp.
    fn instances(&self) -> [ModelInstance; 2] {
        let lamp = Mat4::from_translation(Vec3::from_array(self.light.position))
            * Mat4::from_scale(Vec3::splat(LAMP_SCALE));
        [ModelInstance::new(Mat4::IDENTITY), ModelInstance::new(lamp)]
    }
}

impl Lesson for LitCube {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn init(&mut self, ctx: &FrameContext) -> Result<(), FreelookError> {
        let device = &ctx.gpu.device;
        let shader = device
            .create_shader_module(wgpu::include_wgsl!("../../assets/shaders/lit_cube.wgsl"));
        let camera = CameraBinding::new(&ctx.gpu);

        let light_buffer =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Light Buffer"),
                contents: bytemuck::cast_slice(&[self.light]),
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            });
        let light_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Light Bind Group Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            });
        let light_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Light Bind Group"),
            layout: &light_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: light_buffer.as_entire_binding(),
            }],
        });

        let layouts = [&camera.layout, &light_layout];
        let object_pipeline = create_pipeline(
            ctx,
            PipelineDef {
                label: "Lit Object",
                shader: &shader,
                fragment_entry: "fs_object",
                bind_group_layouts: &layouts,
                vertex_layout: NormalVertex::layout(),
            },
        );
        let lamp_pipeline = create_pipeline(
            ctx,
            PipelineDef {
                label: "Lamp",
                shader: &shader,
                fragment_entry: "fs_lamp",
                bind_group_layouts: &layouts,
                vertex_layout: NormalVertex::layout(),
            },
        );

        let vertices =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Lit Cube Vertex Buffer"),
                contents: bytemuck::cast_slice(&CUBE_WITH_NORMALS),
                usage: wgpu::BufferUsages::VERTEX,
            });
        let instances =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Lit Cube Instance Buffer"),
                contents: bytemuck::cast_slice(&self.instances()),
                usage: wgpu::BufferUsages::VERTEX,
            });

        self.resources = Some(Resources {
            object_pipeline,
            lamp_pipeline,
            camera,
            light_buffer,
            light_bind_group,
            vertices,
            instances,
        });
        Ok(())
    }

    fn update(&mut self, ctx: &mut FrameContext, _delta_time: f32) {
        if let Some(res) = &mut self.resources {
            ctx.upload_camera(&mut res.camera);
        }
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
        let vertex_count = CUBE_WITH_NORMALS.len() as u32;

        let mut pass = ctx.begin_clear_pass(encoder, target, "Lit Cube Pass");
        pass.set_bind_group(0, &res.camera.bind_group, &[]);
        pass.set_bind_group(1, &res.light_bind_group, &[]);
        pass.set_vertex_buffer(0, res.vertices.slice(..));
        pass.set_vertex_buffer(1, res.instances.slice(..));

        pass.set_pipeline(&res.object_pipeline);
        pass.draw(0..vertex_count, 0..1);
        pass.set_pipeline(&res.lamp_pipeline);
        pass.draw(0..vertex_count, 1..2);
    }

    fn cleanup(&mut self) {
        if let Some(res) = self.resources.take() {
            res.vertices.destroy();
            res.instances.destroy();
            res.light_buffer.destroy();
            res.camera.buffer.destroy();
        }
    }
}
