//! GPU rendering subsystem.
//!
//! Renderers consume `scene` draw lists and issue GPU commands via wgpu.
//! Each renderer is responsible for its own GPU resources (pipelines, buffers).
//!
//! Convention:
//! - CPU geometry is in model space; every draw carries its own model-view matrix.
//! - The vertex shader applies `projection * model_view`, both uploaded per draw.

mod ctx;
mod mesh;
mod mesh_renderer;
mod texture;
mod uniform;

pub use ctx::{RenderCtx, RenderTarget};
pub use mesh_renderer::MeshRenderer;
pub use texture::TextureImage;
