use crate::geometry::{Palette, SolidKind};

/// Upper bound of the auto-rotation speed, radians per second.
pub const MAX_ROTATION_SPEED: f32 = 5.0;

/// User-facing settings of the polyhedron display.
#[derive(Debug, Clone, PartialEq)]
pub struct SolidSettings {
    pub solid: SolidKind,
    pub wireframe: bool,
    pub auto_rotate: bool,
    /// Radians per second, `[0, MAX_ROTATION_SPEED]`.
    pub rotation_speed: f32,
    pub palette: Palette,
}

impl Default for SolidSettings {
    fn default() -> Self {
        Self {
            solid: SolidKind::Icosahedron,
            wireframe: false,
            auto_rotate: true,
            rotation_speed: 0.8,
            palette: Palette::default(),
        }
    }
}

/// What changed between two settings snapshots.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct SettingsChange {
    /// Solid or palette changed: the mesh must be regenerated and uploaded.
    pub rebuild_geometry: bool,
    pub wireframe: bool,
    pub auto_rotate: bool,
    pub rotation_speed: bool,
}

impl SettingsChange {
    #[inline]
    pub fn is_empty(&self) -> bool {
        *self == SettingsChange::default()
    }
}

impl SolidSettings {
    /// Clamps the rotation speed into range. A non-finite speed is replaced
    /// with `fallback`.
    pub fn normalized(mut self, fallback: f32) -> Self {
        self.rotation_speed = if self.rotation_speed.is_finite() {
            self.rotation_speed.clamp(0.0, MAX_ROTATION_SPEED)
        } else {
            fallback
        };
        self
    }

    /// Field-by-field comparison against `previous`.
    pub fn diff(&self, previous: &SolidSettings) -> SettingsChange {
        SettingsChange {
            rebuild_geometry: self.solid != previous.solid || self.palette != previous.palette,
            wireframe: self.wireframe != previous.wireframe,
            auto_rotate: self.auto_rotate != previous.auto_rotate,
            rotation_speed: self.rotation_speed != previous.rotation_speed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::ColorRgba;

    #[test]
    fn identical_settings_change_nothing() {
        let s = SolidSettings::default();
        assert!(s.diff(&s.clone()).is_empty());
    }

    #[test]
    fn solid_change_requires_rebuild() {
        let prev = SolidSettings::default();
        let next = SolidSettings {
            solid: SolidKind::Cube,
            ..prev.clone()
        };
        let change = next.diff(&prev);
        assert!(change.rebuild_geometry);
        assert!(!change.wireframe);
    }

    #[test]
    fn palette_change_requires_rebuild() {
        let prev = SolidSettings::default();
        let next = SolidSettings {
            palette: Palette::new(vec![ColorRgba::white()]),
            ..prev.clone()
        };
        assert!(next.diff(&prev).rebuild_geometry);
    }

    #[test]
    fn wireframe_toggle_does_not_rebuild() {
        let prev = SolidSettings::default();
        let next = SolidSettings {
            wireframe: true,
            rotation_speed: 2.0,
            ..prev.clone()
        };
        let change = next.diff(&prev);
        assert_eq!(
            change,
            SettingsChange {
                rebuild_geometry: false,
                wireframe: true,
                auto_rotate: false,
                rotation_speed: true,
            }
        );
    }

    #[test]
    fn rotation_speed_is_clamped() {
        let s = SolidSettings {
            rotation_speed: 9.0,
            ..Default::default()
        };
        assert_eq!(s.normalized(0.8).rotation_speed, MAX_ROTATION_SPEED);
        let s = SolidSettings {
            rotation_speed: f32::NAN,
            ..Default::default()
        };
        assert_eq!(s.normalized(0.8).rotation_speed, 0.8);
    }
}
