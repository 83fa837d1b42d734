use crate::coords::Viewport;

/// Renderer-facing context: device handles plus surface facts.
pub struct RenderCtx<'a> {
    pub device: &'a wgpu::Device,
    pub queue: &'a wgpu::Queue,
    pub surface_format: wgpu::TextureFormat,
    /// Features enabled on `device`.
    pub features: wgpu::Features,
    /// Surface extent in physical pixels.
    pub viewport: Viewport,
}

impl<'a> RenderCtx<'a> {
    #[inline]
    pub fn new(
        device: &'a wgpu::Device,
        queue: &'a wgpu::Queue,
        surface_format: wgpu::TextureFormat,
        features: wgpu::Features,
        viewport: Viewport,
    ) -> Self {
        Self {
            device,
            queue,
            surface_format,
            features,
            viewport,
        }
    }
}

/// Where a frame is recorded: encoder plus the acquired color view.
pub struct RenderTarget<'a> {
    pub encoder: &'a mut wgpu::CommandEncoder,
    pub color_view: &'a wgpu::TextureView,
}

impl<'a> RenderTarget<'a> {
    #[inline]
    pub fn new(encoder: &'a mut wgpu::CommandEncoder, color_view: &'a wgpu::TextureView) -> Self {
        Self { encoder, color_view }
    }
}
