/// A single acquired swapchain image plus the encoder recording into it.
///
/// Short-lived: holding the surface texture blocks acquisition of the next frame.
pub struct GpuFrame {
    pub surface_texture: wgpu::SurfaceTexture,
    pub view: wgpu::TextureView,
    pub encoder: wgpu::CommandEncoder,
}
