use anyhow::Result;

use crate::animation::InstanceRecord;
use crate::geometry::{OutlineVertex, SolidVertex};

use super::common::{premul_alpha_blend, uniform_bind_group_layout, FlowerUniforms, SolidUniforms};
use super::depth::DEPTH_FORMAT;
use super::shaders::{OUTLINE_WGSL, SOLID_WGSL};

fn ensure_color_target(format: wgpu::TextureFormat) -> Result<()> {
    anyhow::ensure!(
        !format.is_depth_stencil_format(),
        "surface format {format:?} is not a color format"
    );
    Ok(())
}

// ── outline ───────────────────────────────────────────────────────────────

/// Instanced line-strip program for the circle pattern.
///
/// Slot 0: `OutlineVertex` (per vertex). Slot 1: `InstanceRecord` (per
/// instance). Group 0: `FlowerUniforms`. No depth state.
pub struct OutlinePipeline {
    format: wgpu::TextureFormat,
    pipeline: wgpu::RenderPipeline,
    bind_group_layout: wgpu::BindGroupLayout,
}

impl OutlinePipeline {
    pub fn new(device: &wgpu::Device, format: wgpu::TextureFormat) -> Result<Self> {
        ensure_color_target(format)?;

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("geode outline shader"),
            source: wgpu::ShaderSource::Wgsl(OUTLINE_WGSL.into()),
        });

        let bind_group_layout = uniform_bind_group_layout::<FlowerUniforms>(device, "geode outline bgl");

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("geode outline pipeline layout"),
            bind_group_layouts: &[&bind_group_layout],
            immediate_size: 0,
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("geode outline pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[OutlineVertex::layout(), InstanceRecord::layout()],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(premul_alpha_blend()),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::LineStrip,
                strip_index_format: Some(wgpu::IndexFormat::Uint16),
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        log::debug!("outline pipeline built for {format:?}");

        Ok(Self {
            format,
            pipeline,
            bind_group_layout,
        })
    }

    #[inline]
    pub fn format(&self) -> wgpu::TextureFormat {
        self.format
    }

    #[inline]
    pub fn pipeline(&self) -> &wgpu::RenderPipeline {
        &self.pipeline
    }

    #[inline]
    pub fn bind_group_layout(&self) -> &wgpu::BindGroupLayout {
        &self.bind_group_layout
    }
}

// ── solid ─────────────────────────────────────────────────────────────────

/// Rasterization variant of the solid program.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PolygonVariant {
    Fill,
    Line,
}

impl PolygonVariant {
    /// Variant to draw with. Wireframe degrades to fill when the line
    /// variant does not exist.
    pub fn choose(wireframe: bool, line_available: bool) -> Self {
        if wireframe && line_available {
            PolygonVariant::Line
        } else {
            PolygonVariant::Fill
        }
    }
}

/// Depth-tested triangle program for the polyhedra.
///
/// Slot 0: `SolidVertex`. Group 0: `SolidUniforms`. Depth `Less` with
/// writes, back faces culled, counter-clockwise front.
pub struct SolidPipeline {
    format: wgpu::TextureFormat,
    fill: wgpu::RenderPipeline,
    line: Option<wgpu::RenderPipeline>,
    bind_group_layout: wgpu::BindGroupLayout,
    warned_no_line: bool,
}

impl SolidPipeline {
    /// Builds the fill variant, plus the line variant when `features`
    /// include `POLYGON_MODE_LINE`.
    pub fn new(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        features: wgpu::Features,
    ) -> Result<Self> {
        ensure_color_target(format)?;

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("geode solid shader"),
            source: wgpu::ShaderSource::Wgsl(SOLID_WGSL.into()),
        });

        let bind_group_layout = uniform_bind_group_layout::<SolidUniforms>(device, "geode solid bgl");

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("geode solid pipeline layout"),
            bind_group_layouts: &[&bind_group_layout],
            immediate_size: 0,
        });

        let build = |label: &str, polygon_mode: wgpu::PolygonMode| {
            device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some(label),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some("vs_main"),
                    compilation_options: Default::default(),
                    buffers: &[SolidVertex::layout()],
                },
                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some("fs_main"),
                    compilation_options: Default::default(),
                    targets: &[Some(wgpu::ColorTargetState {
                        format,
                        blend: Some(wgpu::BlendState::REPLACE),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                }),
                primitive: wgpu::PrimitiveState {
                    topology: wgpu::PrimitiveTopology::TriangleList,
                    strip_index_format: None,
                    front_face: wgpu::FrontFace::Ccw,
                    cull_mode: Some(wgpu::Face::Back),
                    polygon_mode,
                    unclipped_depth: false,
                    conservative: false,
                },
                depth_stencil: Some(wgpu::DepthStencilState {
                    format: DEPTH_FORMAT,
                    depth_write_enabled: true,
                    depth_compare: wgpu::CompareFunction::Less,
                    stencil: wgpu::StencilState::default(),
                    bias: wgpu::DepthBiasState::default(),
                }),
                multisample: wgpu::MultisampleState::default(),
                multiview_mask: None,
                cache: None,
            })
        };

        let fill = build("geode solid pipeline (fill)", wgpu::PolygonMode::Fill);
        let line = features
            .contains(wgpu::Features::POLYGON_MODE_LINE)
            .then(|| build("geode solid pipeline (line)", wgpu::PolygonMode::Line));

        log::debug!(
            "solid pipeline built for {format:?} (wireframe {})",
            if line.is_some() { "available" } else { "unavailable" }
        );

        Ok(Self {
            format,
            fill,
            line,
            bind_group_layout,
            warned_no_line: false,
        })
    }

    #[inline]
    pub fn format(&self) -> wgpu::TextureFormat {
        self.format
    }

    #[inline]
    pub fn supports_wireframe(&self) -> bool {
        self.line.is_some()
    }

    #[inline]
    pub fn bind_group_layout(&self) -> &wgpu::BindGroupLayout {
        &self.bind_group_layout
    }

    /// Pipeline for the requested rasterization. Warns once when wireframe
    /// is requested but unsupported.
    pub fn select(&mut self, wireframe: bool) -> &wgpu::RenderPipeline {
        match (PolygonVariant::choose(wireframe, self.line.is_some()), self.line.as_ref()) {
            (PolygonVariant::Line, Some(line)) => line,
            _ => {
                if wireframe && !self.warned_no_line {
                    log::warn!("wireframe requested but POLYGON_MODE_LINE is unavailable; drawing filled");
                    self.warned_no_line = true;
                }
                &self.fill
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wireframe_uses_line_when_available() {
        assert_eq!(PolygonVariant::choose(true, true), PolygonVariant::Line);
    }

    #[test]
    fn wireframe_falls_back_to_fill() {
        assert_eq!(PolygonVariant::choose(true, false), PolygonVariant::Fill);
        assert_eq!(PolygonVariant::choose(false, true), PolygonVariant::Fill);
    }

    #[test]
    fn depth_formats_are_rejected_as_color_targets() {
        assert!(ensure_color_target(wgpu::TextureFormat::Depth32Float).is_err());
        assert!(ensure_color_target(wgpu::TextureFormat::Bgra8UnormSrgb).is_ok());
    }
}
