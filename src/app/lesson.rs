use crate::camera::{CameraBinding, CameraController};
use crate::error::FreelookError;
use crate::gpu::{DepthTexture, RenderContext};
use crate::options::Options;
use crate::util::FrameClock;

/// Per-frame callbacks implemented by every lesson.
///
/// The runner calls [`init`](Self::init) once after the GPU is ready, then
/// [`update`](Self::update) and [`render`](Self::render) every frame, and
/// [`cleanup`](Self::cleanup) once before the window closes.
pub trait Lesson {
    /// Short identifier, also used in the window title.
    fn name(&self) -> &'static str;

    /// Create pipelines and buffers.
    ///
    /// # Errors
    ///
    /// Returns an error if the lesson cannot set up its resources; the
    /// runner then exits.
    fn init(&mut self, ctx: &FrameContext) -> Result<(), FreelookError>;

    /// Advance lesson state. The camera has already been moved for this
    /// frame.
    fn update(&mut self, _ctx: &mut FrameContext, _delta_time: f32) {}

    /// Record draw commands targeting `target`.
    fn render(
        &mut self,
        ctx: &FrameContext,
        encoder: &mut wgpu::CommandEncoder,
        target: &wgpu::TextureView,
    );

    /// Release lesson state before the window closes.
    fn cleanup(&mut self) {}
}

/// Everything a lesson can reach during its callbacks.
pub struct FrameContext {
    /// Device, queue and surface.
    pub gpu: RenderContext,
    /// Depth attachment matching the surface size.
    pub depth: DepthTexture,
    /// Camera and its input state.
    pub controller: CameraController,
    /// Frame timing.
    pub clock: FrameClock,
    /// Options the lesson was started with.
    pub options: Options,
}

impl FrameContext {
    /// Bundle a ready render context with a camera built from `options`.
    #[must_use]
    pub fn new(gpu: RenderContext, options: Options) -> Self {
        let depth =
            DepthTexture::new(&gpu.device, gpu.config.width, gpu.config.height);
        Self {
            gpu,
            depth,
            controller: CameraController::from_options(&options),
            clock: FrameClock::new(),
            options,
        }
    }

    /// Reconfigure the surface and recreate the depth texture.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.gpu.resize(width, height);
        self.depth = DepthTexture::new(&self.gpu.device, width, height);
    }

    /// Upload the current camera state into a lesson's camera binding.
    pub fn upload_camera(&self, binding: &mut CameraBinding) {
        let projection = &self.options.projection;
        binding.update(
            &self.gpu.queue,
            &self.controller.camera,
            self.gpu.aspect(),
            projection.znear,
            projection.zfar,
        );
    }

    /// Begin a render pass that clears color to the configured background
    /// and depth to 1.0.
    pub fn begin_clear_pass<'e>(
        &self,
        encoder: &'e mut wgpu::CommandEncoder,
        target: &wgpu::TextureView,
        label: &str,
    ) -> wgpu::RenderPass<'e> {
        encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some(label),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(self.options.window.clear_color()),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: Some(self.depth.attachment()),
            ..Default::default()
        })
    }
}
