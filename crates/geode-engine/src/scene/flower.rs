use anyhow::Result;
use glam::Mat4;

use crate::animation::{FlowerTimeline, InstanceRecord, TimelineConfig};
use crate::coords::{ColorRgba, Viewport};
use crate::geometry::{make_circle_outline, CircleOutline, FLOWER_CIRCLE_COUNT};
use crate::render::{BufferManager, FlowerUniforms, OutlinePipeline, RenderCtx, RenderTarget};
use crate::time::FrameTime;

use super::pass::begin_cleared_pass;
use super::{FrameReport, Scene, SkipReason};

/// Appearance and timing of the circle pattern.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowerConfig {
    pub timeline: TimelineConfig,
    pub segments: u32,
    pub base_color: ColorRgba,
    pub clear_color: ColorRgba,
    /// World units visible from the center to the nearer surface edge.
    pub half_extent: f32,
}

impl Default for FlowerConfig {
    fn default() -> Self {
        Self {
            timeline: TimelineConfig::default(),
            segments: 60,
            base_color: ColorRgba::new(0.8, 0.8, 1.0, 1.0),
            clear_color: ColorRgba::opaque(0.05, 0.05, 0.1),
            half_extent: 2.5,
        }
    }
}

/// Orthographic projection showing `half_extent` along the shorter axis.
pub fn flower_projection(aspect: f32, half_extent: f32) -> Mat4 {
    let aspect = if aspect.is_finite() && aspect > 0.0 { aspect } else { 1.0 };
    let (hx, hy) = if aspect >= 1.0 {
        (half_extent * aspect, half_extent)
    } else {
        (half_extent, half_extent / aspect)
    };
    Mat4::orthographic_rh(-hx, hx, -hy, hy, -1.0, 1.0)
}

struct FlowerGpu {
    pipeline: OutlinePipeline,
    buffers: BufferManager<FlowerUniforms>,
}

/// Animated 19-circle pattern drawn as one instanced line-strip draw.
pub struct FlowerScene {
    config: FlowerConfig,
    timeline: FlowerTimeline,
    outline: CircleOutline,

    gpu: Option<FlowerGpu>,

    viewport: Viewport,
    projection: Mat4,

    /// `FrameTime::elapsed` of the first frame after setup or restart.
    epoch: Option<f32>,
    records: Vec<InstanceRecord>,
}

impl FlowerScene {
    pub fn new(config: FlowerConfig) -> Self {
        Self {
            timeline: FlowerTimeline::new(config.timeline),
            outline: make_circle_outline(config.segments),
            projection: flower_projection(1.0, config.half_extent),
            config,
            gpu: None,
            viewport: Viewport::default(),
            epoch: None,
            records: Vec::with_capacity(FLOWER_CIRCLE_COUNT),
        }
    }

    pub fn config(&self) -> &FlowerConfig {
        &self.config
    }

    pub fn timeline(&self) -> &FlowerTimeline {
        &self.timeline
    }

    /// Replays the fade-in from the beginning on the next frame.
    pub fn restart(&mut self) {
        self.epoch = None;
    }

    /// Seconds into the animation for a frame at `elapsed`.
    fn animation_time(&mut self, elapsed: f32) -> f32 {
        let epoch = *self.epoch.get_or_insert(elapsed);
        (elapsed - epoch).max(0.0)
    }

    /// Recomputes the visible records for `t` and returns how many there are.
    pub fn prepare(&mut self, t: f32) -> u32 {
        self.timeline.collect_visible(t, &mut self.records) as u32
    }

    /// Records computed by the last `prepare`.
    pub fn visible(&self) -> &[InstanceRecord] {
        &self.records
    }

    pub fn uniforms(&self, t: f32) -> FlowerUniforms {
        FlowerUniforms {
            projection: self.projection.to_cols_array_2d(),
            base_color: self.config.base_color.to_array(),
            time: t,
            _pad: [0.0; 3],
        }
    }

    /// Updates the projection when the surface shape changes.
    fn set_viewport(&mut self, viewport: Viewport) {
        if viewport == self.viewport {
            return;
        }
        self.viewport = viewport;
        if let Some(aspect) = viewport.aspect() {
            self.projection = flower_projection(aspect, self.config.half_extent);
        }
    }
}

impl Default for FlowerScene {
    fn default() -> Self {
        Self::new(FlowerConfig::default())
    }
}

impl Scene for FlowerScene {
    fn on_surface_ready(&mut self, ctx: &RenderCtx<'_>) -> Result<()> {
        let pipeline = OutlinePipeline::new(ctx.device, ctx.surface_format)?;
        let mut buffers = BufferManager::<FlowerUniforms>::new(
            ctx.device,
            "geode flower buffers",
            pipeline.bind_group_layout(),
            FLOWER_CIRCLE_COUNT,
        );
        buffers.rebuild_geometry(ctx.device, &self.outline.vertices, &self.outline.indices);

        self.gpu = Some(FlowerGpu { pipeline, buffers });
        self.set_viewport(ctx.viewport);
        self.epoch = None;

        log::debug!(
            "flower scene ready: {} outline points, total duration {:.2}s",
            self.outline.vertices.len(),
            self.timeline.total_duration()
        );
        Ok(())
    }

    fn on_surface_resize(&mut self, _ctx: &RenderCtx<'_>, width: u32, height: u32) {
        self.set_viewport(Viewport::from_physical(width, height));
    }

    fn on_frame(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>, time: FrameTime) -> FrameReport {
        self.set_viewport(ctx.viewport);
        if !ctx.viewport.is_valid() {
            return FrameReport::Skipped(SkipReason::ZeroSize);
        }

        // A surface format change needs a new pipeline.
        let format_changed = self
            .gpu
            .as_ref()
            .is_some_and(|gpu| gpu.pipeline.format() != ctx.surface_format);
        if format_changed {
            log::debug!("surface format changed; rebuilding flower pipeline");
            if let Err(e) = self.on_surface_ready(ctx) {
                log::error!("flower pipeline rebuild failed: {e:#}");
                self.gpu = None;
            }
        }

        let t = self.animation_time(time.elapsed);
        let visible = self.prepare(t);
        let uniforms = self.uniforms(t);

        let Some(gpu) = self.gpu.as_ref() else {
            drop(begin_cleared_pass(target, "geode flower pass", self.config.clear_color, None));
            return FrameReport::Skipped(SkipReason::NotReady);
        };

        gpu.buffers.write_uniforms(ctx.queue, &uniforms);
        let written = gpu.buffers.write_instances(ctx.queue, &self.records);

        let geometry = gpu.buffers.geometry();
        let instances = gpu.buffers.instances();
        let report = FrameReport::plan(geometry.is_some() && instances.is_some(), true, written);
        debug_assert!(written <= visible);

        let mut rpass = begin_cleared_pass(target, "geode flower pass", self.config.clear_color, None);
        if !report.drawn() {
            return report;
        }
        let (Some(geometry), Some(instances)) = (geometry, instances) else {
            return FrameReport::Skipped(SkipReason::NotReady);
        };

        rpass.set_pipeline(gpu.pipeline.pipeline());
        rpass.set_bind_group(0, gpu.buffers.uniform_bind_group(), &[]);
        rpass.set_vertex_buffer(0, geometry.vertex.slice(..));
        rpass.set_vertex_buffer(1, instances.slice(..));
        rpass.set_index_buffer(geometry.index.slice(..), wgpu::IndexFormat::Uint16);
        rpass.draw_indexed(0..geometry.index_count, 0, 0..written);

        report
    }
}
