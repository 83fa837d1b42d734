use crate::coords::ColorRgba;

/// Ordered list of face colors. Face `i` takes entry `i % len`.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colors: Vec<ColorRgba>,
}

const DEFAULT_COLORS: [ColorRgba; 12] = [
    ColorRgba::opaque(1.0, 0.3, 0.3),
    ColorRgba::opaque(0.3, 1.0, 0.3),
    ColorRgba::opaque(0.3, 0.3, 1.0),
    ColorRgba::opaque(1.0, 1.0, 0.3),
    ColorRgba::opaque(0.3, 1.0, 1.0),
    ColorRgba::opaque(1.0, 0.3, 1.0),
    ColorRgba::opaque(1.0, 0.6, 0.2),
    ColorRgba::opaque(0.6, 0.4, 1.0),
    ColorRgba::opaque(0.4, 0.8, 0.4),
    ColorRgba::opaque(1.0, 0.8, 0.8),
    ColorRgba::opaque(0.8, 1.0, 0.8),
    ColorRgba::opaque(0.8, 0.8, 1.0),
];

impl Palette {
    pub fn new(colors: impl Into<Vec<ColorRgba>>) -> Self {
        Self { colors: colors.into() }
    }

    /// `count` evenly spaced hues at the given saturation and value.
    pub fn hue_wheel(count: usize, saturation: f32, value: f32) -> Self {
        let colors = (0..count)
            .map(|i| ColorRgba::from_hsv(i as f32 / count as f32, saturation, value))
            .collect();
        Self { colors }
    }

    #[inline]
    pub fn colors(&self) -> &[ColorRgba] {
        &self.colors
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Usable for face coloring: non-empty and every channel finite.
    pub fn is_valid(&self) -> bool {
        !self.colors.is_empty() && self.colors.iter().all(|c| c.is_finite())
    }

    /// Returns this palette, or the default one if it is not valid.
    pub fn sanitized(&self) -> Palette {
        if self.is_valid() {
            self.clone()
        } else {
            Palette::default()
        }
    }

    /// Color for face `index`. Panics on an empty palette; call on a
    /// sanitized palette.
    #[inline]
    pub fn face_color(&self, index: usize) -> ColorRgba {
        self.colors[index % self.colors.len()]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self { colors: DEFAULT_COLORS.to_vec() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_palette_has_twelve_opaque_colors() {
        let p = Palette::default();
        assert_eq!(p.len(), 12);
        assert!(p.colors().iter().all(|c| c.a == 1.0));
        assert!(p.is_valid());
    }

    #[test]
    fn face_color_cycles() {
        let p = Palette::new(vec![ColorRgba::white(), ColorRgba::opaque(0.0, 0.0, 0.0)]);
        assert_eq!(p.face_color(0), p.face_color(2));
        assert_eq!(p.face_color(1), p.face_color(5));
    }

    #[test]
    fn empty_or_non_finite_falls_back_to_default() {
        assert_eq!(Palette::new(Vec::new()).sanitized(), Palette::default());
        let bad = Palette::new(vec![ColorRgba::white(), ColorRgba::new(0.0, f32::NAN, 0.0, 1.0)]);
        assert_eq!(bad.sanitized(), Palette::default());
    }

    #[test]
    fn valid_palette_is_kept() {
        let p = Palette::hue_wheel(5, 0.8, 0.9);
        assert_eq!(p.len(), 5);
        assert_eq!(p.sanitized(), p);
    }

    #[test]
    fn hue_wheel_colors_are_distinct() {
        let p = Palette::hue_wheel(6, 1.0, 1.0);
        for i in 0..6 {
            for j in (i + 1)..6 {
                assert_ne!(p.colors()[i], p.colors()[j]);
            }
        }
    }
}
