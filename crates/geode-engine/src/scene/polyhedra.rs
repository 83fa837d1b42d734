use anyhow::Result;
use glam::{Mat4, Vec2};

use crate::camera::{CameraConfig, OrbitCamera};
use crate::coords::{ColorRgba, Viewport};
use crate::geometry::{make_solid, Mesh};
use crate::input::GestureTracker;
use crate::render::{BufferManager, DepthTarget, RenderCtx, RenderTarget, SolidPipeline, SolidUniforms};
use crate::time::FrameTime;

use super::pass::begin_cleared_pass;
use super::settings::{SettingsChange, SolidSettings};
use super::{FrameReport, Scene, SkipReason};

/// Startup configuration of the polyhedron display.
#[derive(Debug, Clone, PartialEq)]
pub struct PolyhedronConfig {
    pub settings: SolidSettings,
    pub camera: CameraConfig,
    pub clear_color: ColorRgba,
}

impl Default for PolyhedronConfig {
    fn default() -> Self {
        let settings = SolidSettings::default();
        Self {
            camera: CameraConfig {
                auto_rotate: settings.auto_rotate,
                rotation_speed: settings.rotation_speed,
                ..CameraConfig::default()
            },
            settings,
            clear_color: ColorRgba::opaque(0.1, 0.1, 0.15),
        }
    }
}

struct SolidGpu {
    pipeline: SolidPipeline,
    buffers: BufferManager<SolidUniforms>,
}

/// One Platonic solid, depth tested, orbited by the camera.
///
/// Settings and gestures may arrive at any time between frames; the mesh is
/// regenerated lazily on the next frame after a geometry-affecting change.
pub struct PolyhedronScene {
    settings: SolidSettings,
    camera: OrbitCamera,
    gestures: GestureTracker,
    clear_color: ColorRgba,

    mesh: Mesh,
    mesh_dirty: bool,

    gpu: Option<SolidGpu>,
    depth: Option<DepthTarget>,
    viewport: Viewport,
}

impl PolyhedronScene {
    pub fn new(config: PolyhedronConfig) -> Self {
        let settings = config.settings.normalized(config.camera.rotation_speed);
        let mut camera = OrbitCamera::new(config.camera);
        camera.set_auto_rotate(settings.auto_rotate);
        camera.set_rotation_speed(settings.rotation_speed);

        Self {
            mesh: make_solid(settings.solid, &settings.palette),
            settings,
            camera,
            gestures: GestureTracker::new(),
            clear_color: config.clear_color,
            mesh_dirty: true,
            gpu: None,
            depth: None,
            viewport: Viewport::default(),
        }
    }

    pub fn settings(&self) -> &SolidSettings {
        &self.settings
    }

    pub fn camera(&self) -> &OrbitCamera {
        &self.camera
    }

    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    /// True when the wireframe variant can actually be drawn. `None` before
    /// the surface is ready.
    pub fn wireframe_supported(&self) -> Option<bool> {
        self.gpu.as_ref().map(|g| g.pipeline.supports_wireframe())
    }

    /// Applies a full settings snapshot and reports what changed.
    pub fn apply_settings(&mut self, settings: SolidSettings) -> SettingsChange {
        let settings = settings.normalized(self.settings.rotation_speed);
        let change = settings.diff(&self.settings);
        if change.is_empty() {
            return change;
        }

        if change.rebuild_geometry {
            self.mesh = make_solid(settings.solid, &settings.palette);
            self.mesh_dirty = true;
        }
        if change.auto_rotate {
            self.camera.set_auto_rotate(settings.auto_rotate);
        }
        if change.rotation_speed {
            self.camera.set_rotation_speed(settings.rotation_speed);
        }

        log::info!(
            "settings: {} wireframe={} auto_rotate={} speed={:.2} ({change:?})",
            settings.solid,
            settings.wireframe,
            settings.auto_rotate,
            settings.rotation_speed
        );
        self.settings = settings;
        change
    }

    // ── gestures ──────────────────────────────────────────────────────────

    /// `translation` is the total drag since the gesture began, in pixels.
    pub fn drag_changed(&mut self, translation: Vec2) {
        let delta = self.gestures.drag_changed(translation);
        if delta == Vec2::ZERO {
            return;
        }
        self.camera.apply_drag(delta);
        // The drag took over from auto-rotation; keep settings in sync.
        self.settings.auto_rotate = self.camera.auto_rotate();
    }

    pub fn drag_ended(&mut self) {
        self.gestures.drag_ended();
    }

    /// `scale` is the total pinch scale since the gesture began.
    pub fn pinch_changed(&mut self, scale: f32) {
        if let Some(ratio) = self.gestures.pinch_changed(scale) {
            self.camera.apply_pinch(ratio);
        }
    }

    pub fn pinch_ended(&mut self) {
        self.gestures.pinch_ended();
    }

    // ── per-frame ─────────────────────────────────────────────────────────

    /// Advances auto-rotation and returns the uniforms for `aspect`.
    pub fn update(&mut self, dt: f32, aspect: f32) -> SolidUniforms {
        self.camera.advance(dt);
        SolidUniforms {
            mvp: self.camera.mvp(aspect).to_cols_array_2d(),
        }
    }

    pub fn mvp(&self, aspect: f32) -> Mat4 {
        self.camera.mvp(aspect)
    }

    fn ensure_depth(&mut self, device: &wgpu::Device, viewport: Viewport) {
        let (w, h) = (viewport.width as u32, viewport.height as u32);
        if self.depth.as_ref().is_some_and(|d| d.matches(w, h)) {
            return;
        }
        self.depth = match DepthTarget::new(device, w, h) {
            Ok(depth) => Some(depth),
            Err(e) => {
                log::warn!("{e:#}");
                None
            }
        };
    }

    fn upload_mesh(&mut self, device: &wgpu::Device) {
        let Some(gpu) = self.gpu.as_mut() else { return };
        gpu.buffers.rebuild_geometry(device, &self.mesh.vertices, &self.mesh.indices);
        self.mesh_dirty = false;
    }
}

impl Default for PolyhedronScene {
    fn default() -> Self {
        Self::new(PolyhedronConfig::default())
    }
}

impl Scene for PolyhedronScene {
    fn on_surface_ready(&mut self, ctx: &RenderCtx<'_>) -> Result<()> {
        let pipeline = SolidPipeline::new(ctx.device, ctx.surface_format, ctx.features)?;
        let buffers = BufferManager::<SolidUniforms>::new(
            ctx.device,
            "geode solid buffers",
            pipeline.bind_group_layout(),
            0,
        );
        self.gpu = Some(SolidGpu { pipeline, buffers });
        self.upload_mesh(ctx.device);

        self.viewport = ctx.viewport;
        self.depth = None;
        if ctx.viewport.is_valid() {
            self.ensure_depth(ctx.device, ctx.viewport);
        }

        log::debug!(
            "polyhedron scene ready: {} ({} vertices, {} triangles)",
            self.settings.solid,
            self.mesh.vertices.len(),
            self.mesh.triangle_count()
        );
        Ok(())
    }

    fn on_surface_resize(&mut self, ctx: &RenderCtx<'_>, width: u32, height: u32) {
        self.viewport = Viewport::from_physical(width, height);
        if self.viewport.is_valid() {
            self.ensure_depth(ctx.device, self.viewport);
        }
    }

    fn on_frame(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>, time: FrameTime) -> FrameReport {
        self.viewport = ctx.viewport;
        let Some(aspect) = self.viewport.aspect() else {
            return FrameReport::Skipped(SkipReason::ZeroSize);
        };

        let format_changed = self
            .gpu
            .as_ref()
            .is_some_and(|gpu| gpu.pipeline.format() != ctx.surface_format);
        if format_changed {
            log::debug!("surface format changed; rebuilding solid pipeline");
            if let Err(e) = self.on_surface_ready(ctx) {
                log::error!("solid pipeline rebuild failed: {e:#}");
                self.gpu = None;
            }
        }

        let uniforms = self.update(time.dt, aspect);

        if self.mesh_dirty {
            self.upload_mesh(ctx.device);
        }
        self.ensure_depth(ctx.device, self.viewport);

        let wireframe = self.settings.wireframe;
        let clear = self.clear_color;
        let (Some(gpu), Some(depth)) = (self.gpu.as_mut(), self.depth.as_ref()) else {
            drop(begin_cleared_pass(target, "geode solid pass", clear, None));
            return FrameReport::Skipped(SkipReason::NotReady);
        };

        gpu.buffers.write_uniforms(ctx.queue, &uniforms);

        let SolidGpu { pipeline, buffers } = gpu;
        let geometry = buffers.geometry();
        let index_count = geometry.map_or(0, |g| g.index_count);
        let report = FrameReport::plan(true, true, index_count);

        let mut rpass = begin_cleared_pass(target, "geode solid pass", clear, Some(depth.view()));
        let Some(geometry) = geometry.filter(|_| report.drawn()) else {
            return report;
        };

        rpass.set_pipeline(pipeline.select(wireframe));
        rpass.set_bind_group(0, buffers.uniform_bind_group(), &[]);
        rpass.set_vertex_buffer(0, geometry.vertex.slice(..));
        rpass.set_index_buffer(geometry.index.slice(..), wgpu::IndexFormat::Uint16);
        rpass.draw_indexed(0..geometry.index_count, 0, 0..1);

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Palette, SolidKind};
    use approx::assert_relative_eq;

    fn manual_scene(solid: SolidKind) -> PolyhedronScene {
        PolyhedronScene::new(PolyhedronConfig {
            settings: SolidSettings {
                solid,
                auto_rotate: false,
                ..Default::default()
            },
            ..Default::default()
        })
    }

    // ── settings ─────────────────────────────────────────────────────────

    #[test]
    fn changing_solid_rebuilds_mesh() {
        let mut scene = PolyhedronScene::default();
        let change = scene.apply_settings(SolidSettings {
            solid: SolidKind::Dodecahedron,
            ..scene.settings().clone()
        });
        assert!(change.rebuild_geometry);
        assert_eq!(scene.mesh().triangle_count(), 36);
        assert!(scene.mesh_dirty);
    }

    #[test]
    fn reapplying_same_settings_is_a_noop() {
        let mut scene = PolyhedronScene::default();
        let change = scene.apply_settings(scene.settings().clone());
        assert!(change.is_empty());
    }

    #[test]
    fn toggles_reach_the_camera() {
        let mut scene = PolyhedronScene::default();
        let change = scene.apply_settings(SolidSettings {
            auto_rotate: false,
            rotation_speed: 2.5,
            ..scene.settings().clone()
        });
        assert!(change.auto_rotate && change.rotation_speed && !change.rebuild_geometry);
        assert!(!scene.camera().auto_rotate());
        assert_eq!(scene.camera().rotation_speed(), 2.5);
    }

    #[test]
    fn invalid_palette_falls_back_in_mesh() {
        let mut scene = PolyhedronScene::default();
        scene.apply_settings(SolidSettings {
            palette: Palette::new(Vec::new()),
            ..scene.settings().clone()
        });
        assert_eq!(
            scene.mesh(),
            &make_solid(SolidKind::Icosahedron, &Palette::default())
        );
    }

    // ── gestures ─────────────────────────────────────────────────────────

    #[test]
    fn icosahedron_drag_and_pinch_scenario() {
        let mut scene = manual_scene(SolidKind::Icosahedron);
        let (yaw, pitch) = (scene.camera().yaw(), scene.camera().pitch());

        scene.drag_changed(Vec2::new(100.0, 0.0));
        scene.drag_ended();
        assert_relative_eq!(scene.camera().yaw(), yaw - 100.0 * 0.006, epsilon = 1e-5);
        assert_eq!(scene.camera().pitch(), pitch);

        scene.pinch_changed(2.0);
        scene.pinch_ended();
        assert_relative_eq!(scene.camera().distance(), 2.0);
    }

    #[test]
    fn cumulative_drag_reports_are_applied_once() {
        let mut scene = manual_scene(SolidKind::Cube);
        let yaw = scene.camera().yaw();
        scene.drag_changed(Vec2::new(50.0, 0.0));
        scene.drag_changed(Vec2::new(100.0, 0.0));
        assert_relative_eq!(scene.camera().yaw(), yaw - 100.0 * 0.006, epsilon = 1e-5);
    }

    #[test]
    fn drag_turns_off_auto_rotate_setting() {
        let mut scene = PolyhedronScene::default();
        assert!(scene.settings().auto_rotate);
        scene.drag_changed(Vec2::new(3.0, 4.0));
        assert!(!scene.settings().auto_rotate);
        assert!(!scene.camera().auto_rotate());
    }

    #[test]
    fn cumulative_pinch_is_converted_to_ratios() {
        let mut scene = manual_scene(SolidKind::Octahedron);
        scene.pinch_changed(1.25);
        scene.pinch_changed(2.0);
        assert_relative_eq!(scene.camera().distance(), 2.0, epsilon = 1e-5);
    }

    // ── frame update ─────────────────────────────────────────────────────

    #[test]
    fn update_advances_rotation_only_when_enabled() {
        let mut spinning = PolyhedronScene::default();
        spinning.update(0.5, 1.0);
        assert_relative_eq!(spinning.camera().spin(), 0.4);

        let mut still = manual_scene(SolidKind::Tetrahedron);
        still.update(0.5, 1.0);
        assert_eq!(still.camera().spin(), 0.0);
    }

    #[test]
    fn uniforms_hold_camera_mvp() {
        let mut scene = manual_scene(SolidKind::Icosahedron);
        let u = scene.update(0.016, 1.5);
        assert_eq!(u.mvp, scene.mvp(1.5).to_cols_array_2d());
    }

    #[test]
    fn mesh_is_ready_before_surface() {
        let scene = PolyhedronScene::default();
        assert_eq!(scene.mesh().triangle_count(), 20);
        assert_eq!(scene.wireframe_supported(), None);
    }
}
