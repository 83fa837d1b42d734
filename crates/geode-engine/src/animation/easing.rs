/// Cubic Hermite ease from 0 at `edge0` to 1 at `edge1`, flat at both ends.
///
/// Equal edges degrade to a step at `edge0`.
#[inline]
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    if edge0 == edge1 {
        return if x < edge0 { 0.0 } else { 1.0 };
    }
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn clamps_outside_edges() {
        assert_eq!(smoothstep(1.0, 2.0, 0.0), 0.0);
        assert_eq!(smoothstep(1.0, 2.0, 3.0), 1.0);
    }

    #[test]
    fn midpoint_is_half() {
        assert_relative_eq!(smoothstep(0.0, 4.0, 2.0), 0.5);
    }

    #[test]
    fn equal_edges_step() {
        assert_eq!(smoothstep(0.5, 0.5, 0.49), 0.0);
        assert_eq!(smoothstep(0.5, 0.5, 0.5), 1.0);
    }

    #[test]
    fn monotonic_across_range() {
        let mut last = 0.0;
        for i in 0..=100 {
            let v = smoothstep(0.0, 1.0, i as f32 / 100.0);
            assert!(v >= last);
            last = v;
        }
    }
}
