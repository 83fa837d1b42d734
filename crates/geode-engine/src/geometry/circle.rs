use std::f32::consts::{FRAC_PI_6, TAU};

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

/// Number of circles in the flower pattern (center, inner ring, outer ring).
pub const FLOWER_CIRCLE_COUNT: usize = 19;

/// Point on the unit circle. Shared by every flower instance.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct OutlineVertex {
    pub position: [f32; 2],
}

/// Closed line-strip outline of the unit circle.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleOutline {
    pub vertices: Vec<OutlineVertex>,
    pub indices: Vec<u16>,
}

/// Tessellates the unit circle into `segments + 1` points.
///
/// The last point repeats the first so a line strip closes the loop.
/// Fewer than 3 segments is raised to 3.
pub fn make_circle_outline(segments: u32) -> CircleOutline {
    let segments = segments.clamp(3, u16::MAX as u32 - 1);
    let step = TAU / segments as f32;

    let mut vertices: Vec<OutlineVertex> = (0..segments)
        .map(|i| {
            let (sin, cos) = (i as f32 * step).sin_cos();
            OutlineVertex { position: [cos, sin] }
        })
        .collect();
    // Exact copy rather than cos(TAU) so the strip closes bit-for-bit.
    vertices.push(vertices[0]);

    let indices = (0..=segments as u16).collect();

    CircleOutline { vertices, indices }
}

/// The 19 circle centers of the flower pattern for circles of `radius`.
///
/// Order: origin, 6 inner centers at `radius` every 60°, then the outer ring
/// (6 at `2 * radius` every 60°, 6 at `√3 * radius` offset by 30°).
pub fn flower_centers(radius: f32) -> [Vec2; FLOWER_CIRCLE_COUNT] {
    let mut out = [Vec2::ZERO; FLOWER_CIRCLE_COUNT];
    let sixth = TAU / 6.0;
    let sqrt3 = 3.0_f32.sqrt();

    for k in 0..6 {
        let a = k as f32 * sixth;
        out[1 + k] = Vec2::from_angle(a) * radius;
        out[7 + k] = Vec2::from_angle(a) * (2.0 * radius);
        out[13 + k] = Vec2::from_angle(a + FRAC_PI_6) * (sqrt3 * radius);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // ── outline ──────────────────────────────────────────────────────────

    #[test]
    fn outline_counts_and_closure() {
        for segments in [3u32, 4, 17, 60, 256] {
            let outline = make_circle_outline(segments);
            assert_eq!(outline.vertices.len(), segments as usize + 1);
            assert_eq!(outline.indices.len(), segments as usize + 1);
            assert_eq!(outline.vertices.first(), outline.vertices.last());
            assert_eq!(*outline.indices.last().unwrap() as u32, segments);
        }
    }

    #[test]
    fn outline_points_lie_on_unit_circle() {
        let outline = make_circle_outline(60);
        for v in &outline.vertices {
            let [x, y] = v.position;
            assert_relative_eq!((x * x + y * y).sqrt(), 1.0, epsilon = 1e-5);
        }
        assert_eq!(outline.vertices[0].position, [1.0, 0.0]);
    }

    #[test]
    fn degenerate_segment_count_is_raised() {
        assert_eq!(make_circle_outline(0).vertices.len(), 4);
        assert_eq!(make_circle_outline(2).vertices.len(), 4);
    }

    // ── flower centers ───────────────────────────────────────────────────

    #[test]
    fn flower_has_nineteen_centers_in_ring_order() {
        let c = flower_centers(0.5);
        assert_eq!(c[0], Vec2::ZERO);
        for p in &c[1..7] {
            assert_relative_eq!(p.length(), 0.5, epsilon = 1e-5);
        }
        for p in &c[7..13] {
            assert_relative_eq!(p.length(), 1.0, epsilon = 1e-5);
        }
        for p in &c[13..19] {
            assert_relative_eq!(p.length(), 3.0_f32.sqrt() * 0.5, epsilon = 1e-5);
        }
    }

    #[test]
    fn flower_centers_are_distinct() {
        let c = flower_centers(1.0);
        for i in 0..c.len() {
            for j in (i + 1)..c.len() {
                assert!(c[i].distance(c[j]) > 0.1, "{i} and {j} coincide");
            }
        }
    }

    #[test]
    fn diagonal_outer_centers_sit_between_inner_pairs() {
        let c = flower_centers(1.0);
        // 30° point is the sum of the 0° and 60° inner centers.
        let expected = c[1] + c[2];
        assert_relative_eq!(c[13].x, expected.x, epsilon = 1e-5);
        assert_relative_eq!(c[13].y, expected.y, epsilon = 1e-5);
    }
}
