//! Keyboard bindings of the studio.

use geode_engine::geometry::SolidKind;
use geode_engine::input::Key;

/// Rotation speed change per arrow press, radians per second.
pub const SPEED_STEP: f32 = 0.1;

/// Step multiplier while Shift is held.
pub const COARSE_SPEED_FACTOR: f32 = 5.0;

/// Pinch factor per wheel line.
pub const WHEEL_ZOOM_PER_LINE: f32 = 1.1;

pub const HELP: [(&str, &str); 9] = [
    ("Tab", "switch between flower and solids"),
    ("Space", "replay the flower animation"),
    ("1-5", "tetra / cube / octa / dodeca / icosa"),
    ("W", "toggle wireframe"),
    ("R", "toggle auto-rotation"),
    ("Up / Down", "rotation speed (Shift: coarse)"),
    ("C / D", "next hue palette / default palette"),
    ("drag, wheel", "orbit, zoom"),
    ("Esc", "quit"),
];

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Action {
    SwitchScene,
    RestartFlower,
    SelectSolid(SolidKind),
    ToggleWireframe,
    ToggleAutoRotate,
    AdjustSpeed(f32),
    NextPalette,
    DefaultPalette,
    Quit,
}

pub fn action_for(key: Key) -> Option<Action> {
    if let Some(d) = key.digit() {
        return SolidKind::ALL
            .get(usize::from(d) - 1)
            .copied()
            .map(Action::SelectSolid);
    }
    Some(match key {
        Key::Tab => Action::SwitchScene,
        Key::Space => Action::RestartFlower,
        Key::W => Action::ToggleWireframe,
        Key::R => Action::ToggleAutoRotate,
        Key::ArrowUp => Action::AdjustSpeed(SPEED_STEP),
        Key::ArrowDown => Action::AdjustSpeed(-SPEED_STEP),
        Key::C => Action::NextPalette,
        Key::D => Action::DefaultPalette,
        Key::Escape => Action::Quit,
        _ => return None,
    })
}

/// Widens speed steps when `coarse` is set; other actions pass through.
pub fn with_modifier(action: Action, coarse: bool) -> Action {
    match action {
        Action::AdjustSpeed(step) if coarse => Action::AdjustSpeed(step * COARSE_SPEED_FACTOR),
        other => other,
    }
}

/// Cumulative pinch scale for `lines` of wheel travel (positive zooms in).
pub fn wheel_scale(lines: f32) -> f32 {
    WHEEL_ZOOM_PER_LINE.powf(lines)
}
