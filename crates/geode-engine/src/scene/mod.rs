//! Per-surface scenes: the frame loop of each content family.
//!
//! A scene owns its pipelines, buffers and animation state. The host calls
//! the three lifecycle hooks; `core::FrameCtx::render_scene` wires a scene
//! into a presented frame.

mod flower;
mod pass;
mod polyhedra;
mod settings;

use anyhow::Result;

use crate::render::{RenderCtx, RenderTarget};
use crate::time::FrameTime;

pub use flower::{flower_projection, FlowerConfig, FlowerScene};
pub use polyhedra::{PolyhedronConfig, PolyhedronScene};
pub use settings::{SettingsChange, SolidSettings, MAX_ROTATION_SPEED};

/// Why a frame cleared and presented without drawing.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Pipelines or buffers are not built yet.
    NotReady,
    /// The surface has no area.
    ZeroSize,
    /// Nothing to draw: no visible instances or no indices.
    NothingVisible,
}

/// Outcome of one `Scene::on_frame`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FrameReport {
    /// One draw was issued. `count` is the instance count (2D) or index
    /// count (3D).
    Drawn { count: u32 },
    Skipped(SkipReason),
}

impl FrameReport {
    /// Report for a frame with the given readiness and drawable count.
    pub fn plan(ready: bool, surface_has_area: bool, count: u32) -> FrameReport {
        if !surface_has_area {
            FrameReport::Skipped(SkipReason::ZeroSize)
        } else if !ready {
            FrameReport::Skipped(SkipReason::NotReady)
        } else if count == 0 {
            FrameReport::Skipped(SkipReason::NothingVisible)
        } else {
            FrameReport::Drawn { count }
        }
    }

    #[inline]
    pub fn drawn(self) -> bool {
        matches!(self, FrameReport::Drawn { .. })
    }
}

/// Surface lifecycle of one content family.
pub trait Scene {
    /// Builds pipelines and static buffers for the surface. Errors are fatal
    /// for the surface.
    fn on_surface_ready(&mut self, ctx: &RenderCtx<'_>) -> Result<()>;

    /// The surface now measures `width` x `height` physical pixels.
    fn on_surface_resize(&mut self, ctx: &RenderCtx<'_>, width: u32, height: u32);

    /// Updates animation state, writes per-frame buffers and records one
    /// cleared pass into `target`, drawing at most once.
    fn on_frame(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>, time: FrameTime) -> FrameReport;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_prefers_zero_size_over_readiness() {
        assert_eq!(FrameReport::plan(false, false, 5), FrameReport::Skipped(SkipReason::ZeroSize));
    }

    #[test]
    fn plan_reports_not_ready() {
        assert_eq!(FrameReport::plan(false, true, 5), FrameReport::Skipped(SkipReason::NotReady));
    }

    #[test]
    fn plan_skips_empty_draws() {
        assert_eq!(FrameReport::plan(true, true, 0), FrameReport::Skipped(SkipReason::NothingVisible));
    }

    #[test]
    fn plan_draws_with_count() {
        let report = FrameReport::plan(true, true, 19);
        assert_eq!(report, FrameReport::Drawn { count: 19 });
        assert!(report.drawn());
    }
}
