/// A single acquired surface frame.
///
/// Holding the surface texture blocks acquisition of the next one, so submit
/// promptly. Dropping `surface_texture` after submission presents.
pub struct GpuFrame {
    pub surface_texture: wgpu::SurfaceTexture,
    pub view: wgpu::TextureView,
    pub encoder: wgpu::CommandEncoder,
}
