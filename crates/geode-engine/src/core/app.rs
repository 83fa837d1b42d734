use anyhow::Result;
use winit::dpi::PhysicalSize;
use winit::event::WindowEvent;
use winit::window::WindowId;

use crate::device::Gpu;

use super::ctx::{FrameCtx, WindowCtx};

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract driven by `window::Runtime`.
pub trait App {
    /// Called once after a window's GPU surface is configured.
    ///
    /// An error here is fatal: the runtime logs it and exits.
    fn on_surface_ready(&mut self, window: WindowCtx<'_>, gpu: &Gpu<'_>) -> Result<()> {
        let _ = (window, gpu);
        Ok(())
    }

    /// Called after the surface was reconfigured for `size` (may be zero
    /// while minimized).
    fn on_surface_resized(&mut self, window_id: WindowId, gpu: &Gpu<'_>, size: PhysicalSize<u32>) {
        let _ = (window_id, gpu, size);
    }

    fn on_window_event(&mut self, window_id: WindowId, event: &WindowEvent) -> AppControl {
        let _ = (window_id, event);
        AppControl::Continue
    }

    /// Called once per redraw per window.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;
}
