//! Standalone lesson window backed by winit.
//!
//! ```no_run
//! # use freelook::{app::Runner, lessons};
//! Runner::builder()
//!     .with_title("Camera")
//!     .build(lessons::create("camera_cubes").unwrap())
//!     .run()
//!     .unwrap();
//! ```

use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{CursorGrabMode, Window, WindowId},
};

use super::lesson::{FrameContext, Lesson};
use crate::{
    error::FreelookError, gpu::RenderContext, input::InputCommand,
    input::InputEvent, options::Options,
};

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Runner`].
pub struct RunnerBuilder {
    options: Option<Options>,
    title: Option<String>,
}

impl RunnerBuilder {
    /// Create a builder with default options and the title from them.
    fn new() -> Self {
        Self {
            options: None,
            title: None,
        }
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Override the window title from the options.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Consume the builder and produce a [`Runner`] for `lesson`.
    #[must_use]
    pub fn build(self, lesson: Box<dyn Lesson>) -> Runner {
        let options = self.options.unwrap_or_default();
        let title = self.title.unwrap_or_else(|| {
            format!("{} - {}", options.window.title, lesson.name())
        });
        Runner {
            lesson,
            options,
            title,
        }
    }
}

// ── Runner ───────────────────────────────────────────────────────────────

/// A window that runs one lesson until it is closed.
///
/// Construct via [`Runner::builder`], then call [`run`](Self::run) to
/// enter the event loop.
pub struct Runner {
    lesson: Box<dyn Lesson>,
    options: Options,
    title: String,
}

impl Runner {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> RunnerBuilder {
        RunnerBuilder::new()
    }

    /// Open the window and run the event loop. Blocks until the window is
    /// closed.
    pub fn run(self) -> Result<(), FreelookError> {
        let event_loop =
            EventLoop::new().map_err(|e| FreelookError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Poll);

        log::info!("starting lesson {}", self.lesson.name());

        let mut app = RunnerApp {
            window: None,
            ctx: None,
            lesson: self.lesson,
            options: Some(self.options),
            title: self.title,
            error: None,
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| FreelookError::Viewer(e.to_string()))?;

        app.error.map_or(Ok(()), Err)
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

/// Internal winit application handler.
struct RunnerApp {
    window: Option<Arc<Window>>,
    ctx: Option<FrameContext>,
    lesson: Box<dyn Lesson>,
    /// Taken when the window is created.
    options: Option<Options>,
    title: String,
    /// First fatal setup error, reported from [`Runner::run`].
    error: Option<FreelookError>,
}

/// Grab and hide the cursor, or release and show it.
fn apply_cursor_capture(window: &Window, captured: bool) {
    if captured {
        let grabbed = window
            .set_cursor_grab(CursorGrabMode::Confined)
            .or_else(|_| window.set_cursor_grab(CursorGrabMode::Locked));
        if let Err(e) = grabbed {
            log::warn!("cursor grab unavailable: {e}");
        }
    } else if let Err(e) = window.set_cursor_grab(CursorGrabMode::None) {
        log::warn!("cursor release failed: {e}");
    }
    window.set_cursor_visible(!captured);
}

impl RunnerApp {
    fn fail(&mut self, event_loop: &ActiveEventLoop, error: FreelookError) {
        log::error!("{error}");
        self.error = Some(error);
        event_loop.exit();
    }

    fn redraw(&mut self) {
        let (Some(window), Some(ctx)) = (&self.window, &mut self.ctx) else {
            return;
        };

        let dt = ctx.clock.tick();
        ctx.controller.update(dt);
        self.lesson.update(ctx, dt);

        match ctx.gpu.get_next_frame() {
            Ok(frame) => {
                let view = frame
                    .texture
                    .create_view(&wgpu::TextureViewDescriptor::default());
                let mut encoder = ctx.gpu.create_encoder();
                self.lesson.render(ctx, &mut encoder, &view);
                ctx.gpu.submit(encoder);
                frame.present();
            }
            Err(wgpu::SurfaceError::Outdated | wgpu::SurfaceError::Lost) => {
                let inner = window.inner_size();
                ctx.resize(inner.width, inner.height);
            }
            Err(e) => {
                log::error!("render error: {e:?}");
            }
        }

        window.request_redraw();
    }
}

impl ApplicationHandler for RunnerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        let options = self.options.take().unwrap_or_default();

        let attrs = Window::default_attributes()
            .with_title(&self.title)
            .with_inner_size(winit::dpi::LogicalSize::new(
                options.window.width,
                options.window.height,
            ));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                self.fail(event_loop, FreelookError::Viewer(e.to_string()));
                return;
            }
        };

        let inner = window.inner_size();
        let gpu = match pollster::block_on(RenderContext::new(
            window.clone(),
            (inner.width, inner.height),
            options.window.vsync,
        )) {
            Ok(gpu) => gpu,
            Err(e) => {
                self.fail(event_loop, e.into());
                return;
            }
        };

        let ctx = FrameContext::new(gpu, options);
        if let Err(e) = self.lesson.init(&ctx) {
            self.fail(event_loop, e);
            return;
        }

        apply_cursor_capture(&window, ctx.controller.is_cursor_captured());
        window.request_redraw();
        self.window = Some(window);
        self.ctx = Some(ctx);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        if matches!(event, WindowEvent::CloseRequested) {
            event_loop.exit();
            return;
        }

        match event {
            WindowEvent::Resized(size) => {
                if let Some(ctx) = &mut self.ctx {
                    ctx.resize(size.width, size.height);
                }
            }
            WindowEvent::RedrawRequested => self.redraw(),
            other => {
                let Some(input) = InputEvent::from_window_event(&other) else {
                    return;
                };
                let (Some(window), Some(ctx)) = (&self.window, &mut self.ctx)
                else {
                    return;
                };
                match ctx.controller.handle_event(input) {
                    Some(InputCommand::CursorCaptureChanged(captured)) => {
                        apply_cursor_capture(window, captured);
                    }
                    Some(InputCommand::Exit) => event_loop.exit(),
                    _ => {}
                }
            }
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        if self.ctx.take().is_some() {
            self.lesson.cleanup();
            log::info!("lesson {} finished", self.lesson.name());
        }
    }
}
