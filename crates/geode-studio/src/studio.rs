use anyhow::{Context, Result};
use geode_engine::core::{App, AppControl, FrameCtx, WindowCtx};
use geode_engine::device::Gpu;
use geode_engine::geometry::Palette;
use geode_engine::input::{InputEvent, Key, KeyState, MouseButton};
use geode_engine::scene::{FlowerScene, PolyhedronScene, Scene, SolidSettings};
use glam::Vec2;
use winit::dpi::PhysicalSize;
use winit::window::WindowId;

use crate::controls::{action_for, wheel_scale, with_modifier, Action};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Active {
    Flower,
    Solids,
}

/// Hosts both scenes in one window and routes input to the active one.
pub struct Studio {
    flower: FlowerScene,
    solids: PolyhedronScene,
    active: Active,

    /// Drag translation since the button went down.
    drag_total: Option<Vec2>,
    /// Hue-wheel palettes cycled by `C`.
    palette_step: usize,
}

impl Studio {
    pub fn new() -> Self {
        Self {
            flower: FlowerScene::default(),
            solids: PolyhedronScene::default(),
            active: Active::Flower,
            drag_total: None,
            palette_step: 0,
        }
    }

    fn scene_mut(&mut self) -> &mut dyn Scene {
        match self.active {
            Active::Flower => &mut self.flower,
            Active::Solids => &mut self.solids,
        }
    }

    fn apply(&mut self, action: Action) -> AppControl {
        let current = self.solids.settings().clone();
        let next = match action {
            Action::Quit => return AppControl::Exit,
            Action::SwitchScene => {
                self.active = match self.active {
                    Active::Flower => Active::Solids,
                    Active::Solids => Active::Flower,
                };
                self.drag_total = None;
                log::info!("scene: {:?}", self.active);
                return AppControl::Continue;
            }
            Action::RestartFlower => {
                self.flower.restart();
                return AppControl::Continue;
            }
            Action::SelectSolid(solid) => SolidSettings { solid, ..current },
            Action::ToggleWireframe => {
                if self.solids.wireframe_supported() == Some(false) {
                    log::warn!("wireframe is not supported by this adapter");
                }
                SolidSettings {
                    wireframe: !current.wireframe,
                    ..current
                }
            }
            Action::ToggleAutoRotate => SolidSettings {
                auto_rotate: !current.auto_rotate,
                ..current
            },
            Action::AdjustSpeed(step) => SolidSettings {
                rotation_speed: current.rotation_speed + step,
                ..current
            },
            Action::NextPalette => {
                self.palette_step = self.palette_step % 10 + 1;
                let count = self.palette_step + 2;
                SolidSettings {
                    palette: Palette::hue_wheel(count, 0.65, 0.95),
                    ..current
                }
            }
            Action::DefaultPalette => SolidSettings {
                palette: Palette::default(),
                ..current
            },
        };
        self.solids.apply_settings(next);
        AppControl::Continue
    }

    /// Maps left-button drags and wheel travel onto the solid's gestures.
    fn route_pointer(&mut self, ctx: &FrameCtx<'_, '_>) {
        if self.active != Active::Solids {
            return;
        }

        let held = ctx.input.button_down(MouseButton::Left);
        let released = ctx.input_frame.buttons_released.contains(&MouseButton::Left);

        if held {
            let total = self.drag_total.unwrap_or(Vec2::ZERO) + ctx.input_frame.pointer_delta;
            if total != self.drag_total.unwrap_or(Vec2::ZERO) {
                self.solids.drag_changed(total);
            }
            self.drag_total = Some(total);
        }
        if released || (!held && self.drag_total.is_some()) {
            self.solids.drag_ended();
            self.drag_total = None;
        }

        let lines = ctx.input_frame.wheel_lines;
        if lines != 0.0 {
            self.solids.pinch_changed(wheel_scale(lines));
            self.solids.pinch_ended();
        }
    }
}

impl Default for Studio {
    fn default() -> Self {
        Self::new()
    }
}

impl App for Studio {
    fn on_surface_ready(&mut self, window: WindowCtx<'_>, gpu: &Gpu<'_>) -> Result<()> {
        let rctx = gpu.render_ctx();
        self.flower
            .on_surface_ready(&rctx)
            .context("flower scene setup failed")?;
        self.solids
            .on_surface_ready(&rctx)
            .context("polyhedron scene setup failed")?;
        log::info!("studio ready on window {:?}", window.id);
        Ok(())
    }

    fn on_surface_resized(&mut self, _window_id: WindowId, gpu: &Gpu<'_>, size: PhysicalSize<u32>) {
        let rctx = gpu.render_ctx();
        self.flower.on_surface_resize(&rctx, size.width, size.height);
        self.solids.on_surface_resize(&rctx, size.width, size.height);
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        // Keys in arrival order.
        let pressed: Vec<Key> = ctx
            .input_frame
            .events
            .iter()
            .filter_map(|ev| match ev {
                InputEvent::Key {
                    key,
                    state: KeyState::Pressed,
                    repeat,
                    ..
                } if !*repeat || matches!(key, Key::ArrowUp | Key::ArrowDown) => Some(*key),
                _ => None,
            })
            .collect();

        let coarse = ctx.input.key_down(Key::Shift);
        for action in pressed.into_iter().filter_map(action_for) {
            let action = with_modifier(action, coarse);
            if self.apply(action) == AppControl::Exit {
                return AppControl::Exit;
            }
        }

        self.route_pointer(ctx);

        ctx.render_scene(self.scene_mut())
    }
}
