use bytemuck::{Pod, Zeroable};
use glam::Vec2;

use crate::geometry::{flower_centers, FLOWER_CIRCLE_COUNT};

use super::easing::smoothstep;

/// Instances at or below this alpha are not drawn.
pub const ALPHA_EPSILON: f32 = 1e-3;

/// Per-instance data of one visible circle.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct InstanceRecord {
    pub offset: [f32; 2],
    pub scale: f32,
    pub alpha: f32,
}

/// Which ring a slot belongs to.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Ring {
    Center,
    /// Member `k` of 6.
    Inner(usize),
    /// Member `k` of 12.
    Outer(usize),
}

impl Ring {
    /// Slot 0 is the center, 1..=6 the inner ring, 7..=18 the outer ring.
    pub fn of_slot(slot: usize) -> Option<Ring> {
        match slot {
            0 => Some(Ring::Center),
            1..=6 => Some(Ring::Inner(slot - 1)),
            7..=18 => Some(Ring::Outer(slot - 7)),
            _ => None,
        }
    }
}

/// Fade timings in seconds.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TimelineConfig {
    /// Nothing is visible before this instant, the center circle included.
    pub initial_delay: f32,
    pub center_fade: f32,
    pub inner_stagger: f32,
    pub inner_fade: f32,
    pub outer_stagger: f32,
    pub outer_fade: f32,
    /// Circle radius in world units; also the ring spacing.
    pub base_radius: f32,
    /// Scale circles with their alpha so they grow in while fading.
    pub grow_with_alpha: bool,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            initial_delay: 0.2,
            center_fade: 0.5,
            inner_stagger: 1.0 / 6.0,
            inner_fade: 1.6,
            outer_stagger: 0.125,
            outer_fade: 2.4,
            base_radius: 0.5,
            grow_with_alpha: false,
        }
    }
}

/// Maps elapsed time to per-circle alpha and scale.
///
/// Stateless apart from its configuration: the same `t` always yields the
/// same records.
#[derive(Debug, Clone)]
pub struct FlowerTimeline {
    config: TimelineConfig,
    centers: [Vec2; FLOWER_CIRCLE_COUNT],
}

impl FlowerTimeline {
    pub fn new(config: TimelineConfig) -> Self {
        let config = TimelineConfig {
            center_fade: config.center_fade.max(0.0),
            inner_stagger: config.inner_stagger.max(0.0),
            inner_fade: config.inner_fade.max(0.0),
            outer_stagger: config.outer_stagger.max(0.0),
            outer_fade: config.outer_fade.max(0.0),
            ..config
        };
        Self {
            centers: flower_centers(config.base_radius),
            config,
        }
    }

    #[inline]
    pub fn config(&self) -> &TimelineConfig {
        &self.config
    }

    /// Instant the last inner-ring member reaches full alpha.
    pub fn outer_start(&self) -> f32 {
        let c = &self.config;
        c.initial_delay + 5.0 * c.inner_stagger + c.inner_fade
    }

    /// Instant every circle is fully visible.
    pub fn total_duration(&self) -> f32 {
        let c = &self.config;
        let outer_end = self.outer_start() + 11.0 * c.outer_stagger + c.outer_fade;
        let center_end = c.initial_delay + c.center_fade;
        outer_end.max(center_end)
    }

    /// `(start, end)` of the fade for `slot`.
    pub fn window(&self, slot: usize) -> Option<(f32, f32)> {
        let c = &self.config;
        let (start, fade) = match Ring::of_slot(slot)? {
            Ring::Center => (c.initial_delay, c.center_fade),
            Ring::Inner(k) => (c.initial_delay + k as f32 * c.inner_stagger, c.inner_fade),
            Ring::Outer(k) => (self.outer_start() + k as f32 * c.outer_stagger, c.outer_fade),
        };
        Some((start, start + fade))
    }

    /// Alpha of `slot` at `t`. Unknown slots are invisible.
    pub fn alpha(&self, slot: usize, t: f32) -> f32 {
        match self.window(slot) {
            // Strictly before the start nothing shows, even for a zero fade.
            Some((start, _)) if t <= start => 0.0,
            Some((start, end)) => smoothstep(start, end, t),
            None => 0.0,
        }
    }

    /// Fills `out` with the records visible at `t`, in slot order, and
    /// returns how many there are.
    pub fn collect_visible(&self, t: f32, out: &mut Vec<InstanceRecord>) -> usize {
        out.clear();
        if !t.is_finite() {
            return 0;
        }

        for (slot, center) in self.centers.iter().enumerate() {
            let alpha = self.alpha(slot, t);
            if alpha <= ALPHA_EPSILON {
                continue;
            }
            let scale = if self.config.grow_with_alpha {
                self.config.base_radius * alpha
            } else {
                self.config.base_radius
            };
            out.push(InstanceRecord {
                offset: center.to_array(),
                scale,
                alpha,
            });
        }
        out.len()
    }
}

impl Default for FlowerTimeline {
    fn default() -> Self {
        Self::new(TimelineConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visible_at(timeline: &FlowerTimeline, t: f32) -> Vec<InstanceRecord> {
        let mut out = Vec::new();
        timeline.collect_visible(t, &mut out);
        out
    }

    // ── alpha curve ──────────────────────────────────────────────────────

    #[test]
    fn nothing_visible_at_or_before_zero() {
        let tl = FlowerTimeline::default();
        for slot in 0..FLOWER_CIRCLE_COUNT {
            assert_eq!(tl.alpha(slot, 0.0), 0.0);
            assert_eq!(tl.alpha(slot, -3.0), 0.0);
        }
    }

    #[test]
    fn everything_opaque_after_total_duration() {
        let tl = FlowerTimeline::default();
        let total = tl.total_duration();
        for slot in 0..FLOWER_CIRCLE_COUNT {
            assert_eq!(tl.alpha(slot, total), 1.0, "slot {slot}");
            assert_eq!(tl.alpha(slot, total + 10.0), 1.0, "slot {slot}");
        }
    }

    #[test]
    fn alpha_is_monotonic_in_time() {
        let tl = FlowerTimeline::default();
        let total = tl.total_duration();
        for slot in 0..FLOWER_CIRCLE_COUNT {
            let mut last = 0.0;
            for i in 0..=400 {
                let a = tl.alpha(slot, total * i as f32 / 400.0);
                assert!(a >= last, "slot {slot} decreased at step {i}");
                last = a;
            }
        }
    }

    #[test]
    fn outer_ring_waits_for_inner_ring() {
        let tl = FlowerTimeline::default();
        let inner_done = tl.window(6).map(|(_, end)| end);
        assert_eq!(inner_done, Some(tl.outer_start()));
        for slot in 7..FLOWER_CIRCLE_COUNT {
            assert_eq!(tl.alpha(slot, tl.outer_start()), 0.0);
        }
    }

    #[test]
    fn inner_members_start_staggered() {
        let tl = FlowerTimeline::default();
        let starts: Vec<f32> = (1..=6).filter_map(|s| tl.window(s)).map(|(s, _)| s).collect();
        for pair in starts.windows(2) {
            assert!(pair[1] > pair[0]);
        }
        assert_eq!(starts[0], tl.config().initial_delay);
    }

    #[test]
    fn unknown_slot_is_invisible() {
        assert_eq!(FlowerTimeline::default().alpha(19, 100.0), 0.0);
        assert_eq!(Ring::of_slot(19), None);
    }

    // ── visible set ──────────────────────────────────────────────────────

    #[test]
    fn nothing_visible_before_initial_delay() {
        let tl = FlowerTimeline::default();
        assert!(visible_at(&tl, 0.05).is_empty());
        assert!(visible_at(&tl, 0.2).is_empty());
    }

    #[test]
    fn center_appears_first() {
        let tl = FlowerTimeline::default();
        let v = visible_at(&tl, 0.3);
        assert!(!v.is_empty());
        assert_eq!(v[0].offset, [0.0, 0.0]);
    }

    #[test]
    fn all_nineteen_visible_at_end() {
        let tl = FlowerTimeline::default();
        let v = visible_at(&tl, tl.total_duration() + 1.0);
        assert_eq!(v.len(), FLOWER_CIRCLE_COUNT);
        assert!(v.iter().all(|r| r.alpha == 1.0 && r.scale == 0.5));
    }

    #[test]
    fn records_are_compacted_above_epsilon() {
        let tl = FlowerTimeline::default();
        let t = tl.outer_start() + 0.5;
        let v = visible_at(&tl, t);
        assert!(v.iter().all(|r| r.alpha > ALPHA_EPSILON));
        let expected = (0..FLOWER_CIRCLE_COUNT).filter(|&s| tl.alpha(s, t) > ALPHA_EPSILON).count();
        assert_eq!(v.len(), expected);
        assert!(v.len() > 7 && v.len() < FLOWER_CIRCLE_COUNT);
    }

    #[test]
    fn grow_with_alpha_scales_radius() {
        let tl = FlowerTimeline::new(TimelineConfig {
            grow_with_alpha: true,
            ..Default::default()
        });
        for r in visible_at(&tl, 0.4) {
            assert!((r.scale - 0.5 * r.alpha).abs() < 1e-6);
        }
    }

    #[test]
    fn non_finite_time_shows_nothing() {
        let tl = FlowerTimeline::default();
        assert!(visible_at(&tl, f32::NAN).is_empty());
    }

    #[test]
    fn total_duration_matches_last_outer_member() {
        let tl = FlowerTimeline::default();
        assert_eq!(tl.window(18).map(|(_, end)| end), Some(tl.total_duration()));
    }
}
