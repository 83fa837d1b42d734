use glam::Vec2;

/// Converts cumulative gesture reports into incremental deltas.
///
/// Hosts typically report a drag as the total translation since the gesture
/// began and a pinch as the total scale since it began. The camera wants the
/// change since the previous report.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GestureTracker {
    last_translation: Option<Vec2>,
    last_scale: Option<f32>,
}

impl GestureTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Translation delta since the previous report of this drag.
    ///
    /// The first report of a gesture is measured from the gesture origin.
    pub fn drag_changed(&mut self, translation: Vec2) -> Vec2 {
        if !translation.is_finite() {
            return Vec2::ZERO;
        }
        let delta = translation - self.last_translation.unwrap_or(Vec2::ZERO);
        self.last_translation = Some(translation);
        delta
    }

    pub fn drag_ended(&mut self) {
        self.last_translation = None;
    }

    /// Scale ratio since the previous report of this pinch, or `None` for an
    /// unusable report (non-positive or non-finite).
    pub fn pinch_changed(&mut self, scale: f32) -> Option<f32> {
        if !(scale.is_finite() && scale > 0.0) {
            return None;
        }
        let ratio = scale / self.last_scale.unwrap_or(1.0);
        self.last_scale = Some(scale);
        Some(ratio)
    }

    pub fn pinch_ended(&mut self) {
        self.last_scale = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn drag_reports_become_deltas() {
        let mut g = GestureTracker::new();
        assert_eq!(g.drag_changed(Vec2::new(10.0, 0.0)), Vec2::new(10.0, 0.0));
        assert_eq!(g.drag_changed(Vec2::new(25.0, 5.0)), Vec2::new(15.0, 5.0));
    }

    #[test]
    fn drag_end_resets_origin() {
        let mut g = GestureTracker::new();
        g.drag_changed(Vec2::new(50.0, 50.0));
        g.drag_ended();
        assert_eq!(g.drag_changed(Vec2::new(5.0, 0.0)), Vec2::new(5.0, 0.0));
    }

    #[test]
    fn pinch_reports_become_ratios() {
        let mut g = GestureTracker::new();
        assert_eq!(g.pinch_changed(2.0), Some(2.0));
        let ratio = g.pinch_changed(3.0).unwrap();
        assert_relative_eq!(ratio, 1.5);
        g.pinch_ended();
        assert_eq!(g.pinch_changed(0.5), Some(0.5));
    }

    #[test]
    fn invalid_pinch_is_ignored_without_touching_state() {
        let mut g = GestureTracker::new();
        g.pinch_changed(2.0);
        assert_eq!(g.pinch_changed(0.0), None);
        assert_eq!(g.pinch_changed(f32::NAN), None);
        assert_eq!(g.pinch_changed(4.0), Some(2.0));
    }
}
