//! GPU resource management and the wgpu globe renderer.
//!
//! Provides wgpu device/surface initialization, growable instance
//! buffers, pipeline boilerplate and the [`GlobeRenderer`] that turns a
//! [`DrawList`](crate::render::DrawList) into pixels.

/// Growable GPU buffers with automatic reallocation.
pub mod dynamic_buffer;
/// Unit sphere tessellation.
pub mod mesh;
/// Shared wgpu boilerplate for the instanced pipelines.
pub mod pipeline_helpers;
/// wgpu device, surface, and queue initialization.
pub mod render_context;
/// The draw-list renderer.
pub mod renderer;
/// Depth attachment texture.
pub mod texture;

pub use renderer::GlobeRenderer;
