//! Lesson scaffolding: the frame-callback trait and the window runner that
//! drives it.

/// `Lesson` trait and the per-frame context handed to it.
pub mod lesson;
/// winit event loop driving a single lesson.
#[cfg(feature = "viewer")]
pub mod runner;

pub use lesson::{FrameContext, Lesson};
#[cfg(feature = "viewer")]
pub use runner::{Runner, RunnerBuilder};
