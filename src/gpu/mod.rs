//! GPU resource management utilities.
//!
//! Provides wgpu device/surface initialization and the shared depth
//! attachment.

/// wgpu device, surface, and queue initialization.
pub mod render_context;
/// Depth attachment texture.
pub mod texture;

pub use render_context::{RenderContext, RenderContextError};
pub use texture::DepthTexture;
