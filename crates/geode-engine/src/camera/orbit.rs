use std::f32::consts::{FRAC_PI_2, PI, TAU};

use glam::{Mat4, Quat, Vec2, Vec3};

/// Camera limits and defaults.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CameraConfig {
    pub distance: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    /// Radians. Positive looks down on the solid.
    pub pitch: f32,
    /// Radians; pitch is clamped to `±max_pitch`.
    pub max_pitch: f32,
    pub yaw: f32,
    /// Radians per pixel of drag.
    pub drag_sensitivity: f32,
    pub auto_rotate: bool,
    /// Radians per second.
    pub rotation_speed: f32,
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            distance: 4.0,
            min_distance: 1.5,
            max_distance: 20.0,
            pitch: 15.0_f32.to_radians(),
            max_pitch: FRAC_PI_2 - 0.05,
            yaw: (-20.0_f32).to_radians(),
            drag_sensitivity: 0.006,
            auto_rotate: true,
            rotation_speed: 0.8,
            fov_y: PI / 3.5,
            near: 0.1,
            far: 100.0,
        }
    }
}

/// Orbit state plus an auto-rotation of the model about +Y.
///
/// Every mutator re-establishes the bounds, so the state is always valid.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitCamera {
    config: CameraConfig,
    distance: f32,
    pitch: f32,
    yaw: f32,
    auto_rotate: bool,
    rotation_speed: f32,
    /// Model rotation about +Y, in `[0, TAU)`.
    spin: f32,
}

impl OrbitCamera {
    pub fn new(config: CameraConfig) -> Self {
        let mut camera = Self {
            distance: config.distance,
            pitch: config.pitch,
            yaw: config.yaw,
            auto_rotate: config.auto_rotate,
            rotation_speed: config.rotation_speed,
            spin: 0.0,
            config,
        };
        camera.distance = camera.clamp_distance(camera.distance);
        camera.pitch = camera.clamp_pitch(camera.pitch);
        camera.yaw = wrap_angle(camera.yaw);
        camera
    }

    // ── accessors ─────────────────────────────────────────────────────────

    pub fn distance(&self) -> f32 {
        self.distance
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn spin(&self) -> f32 {
        self.spin
    }

    pub fn auto_rotate(&self) -> bool {
        self.auto_rotate
    }

    pub fn rotation_speed(&self) -> f32 {
        self.rotation_speed
    }

    pub fn config(&self) -> &CameraConfig {
        &self.config
    }

    // ── mutation ──────────────────────────────────────────────────────────

    pub fn set_auto_rotate(&mut self, on: bool) {
        self.auto_rotate = on;
    }

    /// Non-finite speeds are ignored.
    pub fn set_rotation_speed(&mut self, speed: f32) {
        if speed.is_finite() {
            self.rotation_speed = speed;
        }
    }

    /// Advances the auto-rotation by `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        if !self.auto_rotate || !dt.is_finite() {
            return;
        }
        self.spin = (self.spin + self.rotation_speed * dt).rem_euclid(TAU);
        // rem_euclid can round up to exactly TAU for tiny negatives.
        if self.spin >= TAU {
            self.spin = 0.0;
        }
    }

    /// Applies a drag of `delta` pixels. Any drag hands control to the user
    /// and stops auto-rotation.
    pub fn apply_drag(&mut self, delta: Vec2) {
        if !delta.is_finite() {
            return;
        }
        let s = self.config.drag_sensitivity;
        self.yaw = wrap_angle(self.yaw - delta.x * s);
        self.pitch = self.clamp_pitch(self.pitch + delta.y * s);
        self.auto_rotate = false;
    }

    /// Applies an incremental pinch factor: > 1 zooms in.
    pub fn apply_pinch(&mut self, scale_delta: f32) {
        if !(scale_delta.is_finite() && scale_delta > 0.0) {
            return;
        }
        self.distance = self.clamp_distance(self.distance / scale_delta);
    }

    // ── matrices ──────────────────────────────────────────────────────────

    /// Eye position: `(0, 0, distance)` pitched about X, then yawed about Y.
    pub fn eye(&self) -> Vec3 {
        Quat::from_rotation_y(-self.yaw) * Quat::from_rotation_x(-self.pitch) * Vec3::new(0.0, 0.0, self.distance)
    }

    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye(), Vec3::ZERO, Vec3::Y)
    }

    /// Perspective with `[0, 1]` depth. Degenerate aspects fall back to 1.
    pub fn projection(&self, aspect: f32) -> Mat4 {
        let aspect = if aspect.is_finite() && aspect > 0.0 { aspect } else { 1.0 };
        Mat4::perspective_rh(self.config.fov_y, aspect, self.config.near, self.config.far)
    }

    pub fn model(&self) -> Mat4 {
        Mat4::from_rotation_y(self.spin)
    }

    pub fn mvp(&self, aspect: f32) -> Mat4 {
        self.projection(aspect) * self.view() * self.model()
    }

    fn clamp_distance(&self, d: f32) -> f32 {
        d.clamp(self.config.min_distance, self.config.max_distance)
    }

    fn clamp_pitch(&self, p: f32) -> f32 {
        p.clamp(-self.config.max_pitch, self.config.max_pitch)
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new(CameraConfig::default())
    }
}

/// Wraps an angle into `(-PI, PI]`.
fn wrap_angle(a: f32) -> f32 {
    let w = (a + PI).rem_euclid(TAU) - PI;
    if w <= -PI { w + TAU } else { w }
}
