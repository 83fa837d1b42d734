/// Initialization parameters for the GPU layer.
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Prefer an sRGB surface format when available.
    pub prefer_srgb: bool,

    pub present_mode: wgpu::PresentMode,

    /// Falls back to the first supported mode when unsupported.
    pub alpha_mode: Option<wgpu::CompositeAlphaMode>,

    /// Device creation fails if the adapter lacks any of these.
    pub required_features: wgpu::Features,

    /// Requested only when the adapter exposes them. Renderers check
    /// `Gpu::features()` before relying on one.
    pub optional_features: wgpu::Features,

    pub required_limits: wgpu::Limits,

    /// Hint; support depends on platform/backend.
    pub desired_maximum_frame_latency: u32,

    pub power_preference: wgpu::PowerPreference,
}

impl GpuInit {
    /// Feature set to request from an adapter exposing `available`.
    pub fn features_for(&self, available: wgpu::Features) -> wgpu::Features {
        self.required_features | (self.optional_features & available)
    }
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            prefer_srgb: true,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: None,
            required_features: wgpu::Features::empty(),
            // Wireframe rendering of the solids.
            optional_features: wgpu::Features::POLYGON_MODE_LINE,
            required_limits: wgpu::Limits::default(),
            desired_maximum_frame_latency: 2,
            power_preference: wgpu::PowerPreference::HighPerformance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_features_are_masked_by_adapter() {
        let init = GpuInit::default();
        assert_eq!(init.features_for(wgpu::Features::empty()), wgpu::Features::empty());
        assert!(init
            .features_for(wgpu::Features::POLYGON_MODE_LINE)
            .contains(wgpu::Features::POLYGON_MODE_LINE));
    }

    #[test]
    fn required_features_are_always_requested() {
        let init = GpuInit {
            required_features: wgpu::Features::DEPTH_CLIP_CONTROL,
            optional_features: wgpu::Features::empty(),
            ..Default::default()
        };
        assert_eq!(init.features_for(wgpu::Features::empty()), wgpu::Features::DEPTH_CLIP_CONTROL);
    }
}
