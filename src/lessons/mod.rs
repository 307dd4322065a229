//! Lesson registry and the pieces lessons share.
//!
//! Each lesson is a [`Lesson`] implementation; [`create`] looks one up by
//! the name given on the command line.

mod camera_cubes;
mod lit_cube;

use glam::Mat4;

pub use camera_cubes::CameraCubes;
pub use lit_cube::{LightUniform, LitCube};

use crate::app::{FrameContext, Lesson};
use crate::error::FreelookError;
use crate::gpu::DepthTexture;

/// Name and one-line description of every registered lesson, in menu
/// order.
pub const LESSONS: [(&str, &str); 2] = [
    (CameraCubes::NAME, "ten rotating cubes under a free-fly camera"),
    (LitCube::NAME, "Phong-lit cube next to its light source"),
];

/// Names of every registered lesson.
pub fn names() -> impl Iterator<Item = &'static str> {
    LESSONS.iter().map(|(name, _)| *name)
}

/// Instantiate the lesson registered under `name`.
///
/// # Errors
///
/// Returns [`FreelookError::UnknownLesson`] for unregistered names.
pub fn create(name: &str) -> Result<Box<dyn Lesson>, FreelookError> {
    match name {
        CameraCubes::NAME => Ok(Box::new(CameraCubes::default())),
        LitCube::NAME => Ok(Box::new(LitCube::default())),
        _ => Err(FreelookError::UnknownLesson(name.to_owned())),
    }
}

/// Per-instance model matrix, fed to shaders at locations 2..=5.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct ModelInstance {
    model: [[f32; 4]; 4],
}

impl ModelInstance {
    const ATTRIBUTES: [wgpu::VertexAttribute; 4] = wgpu::vertex_attr_array![
        2 => Float32x4,
        3 => Float32x4,
        4 => Float32x4,
        5 => Float32x4,
    ];

    pub(crate) fn new(model: Mat4) -> Self {
        Self {
            model: model.to_cols_array_2d(),
        }
    }

    pub(crate) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: size_of::<Self>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Pipeline description shared by the lessons: one vertex buffer plus
/// instance matrices, back-face culling off, standard depth test.
pub(crate) struct PipelineDef<'a> {
    pub(crate) label: &'a str,
    pub(crate) shader: &'a wgpu::ShaderModule,
    pub(crate) fragment_entry: &'a str,
    pub(crate) bind_group_layouts: &'a [&'a wgpu::BindGroupLayout],
    pub(crate) vertex_layout: wgpu::VertexBufferLayout<'static>,
}

pub(crate) fn create_pipeline(
    ctx: &FrameContext,
    def: PipelineDef<'_>,
) -> wgpu::RenderPipeline {
    let device = &ctx.gpu.device;
    let pipeline_layout =
        device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some(&format!("{} Pipeline Layout", def.label)),
            bind_group_layouts: def.bind_group_layouts,
            push_constant_ranges: &[],
        });

    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(&format!("{} Pipeline", def.label)),
        layout: Some(&pipeline_layout),
        vertex: wgpu::VertexState {
            module: def.shader,
            entry_point: Some("vs_main"),
            buffers: &[def.vertex_layout, ModelInstance::layout()],
            compilation_options: Default::default(),
        },
        fragment: Some(wgpu::FragmentState {
            module: def.shader,
            entry_point: Some(def.fragment_entry),
            targets: &[Some(wgpu::ColorTargetState {
                format: ctx.gpu.format(),
                blend: Some(wgpu::BlendState::REPLACE),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: Default::default(),
        }),
        primitive: wgpu::PrimitiveState::default(),
        depth_stencil: Some(DepthTexture::stencil_state()),
        multisample: wgpu::MultisampleState::default(),
        multiview: None,
        cache: None,
    })
}
