/// Straight-alpha RGBA color with `f32` channels in `[0, 1]`.
///
/// Values are treated as linear. Premultiplication happens in the outline
/// shader, not here.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct ColorRgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl ColorRgba {
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn opaque(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    #[inline]
    pub const fn white() -> Self {
        Self::opaque(1.0, 1.0, 1.0)
    }

    /// Converts HSV (all components in `[0, 1]`) to an opaque color.
    ///
    /// Hue wraps, so `1.25` and `0.25` produce the same color.
    pub fn from_hsv(h: f32, s: f32, v: f32) -> Self {
        let s = s.clamp(0.0, 1.0);
        let v = v.clamp(0.0, 1.0);
        if s == 0.0 {
            return Self::opaque(v, v, v);
        }

        let h6 = h.rem_euclid(1.0) * 6.0;
        let sector = h6.floor();
        let f = h6 - sector;
        let p = v * (1.0 - s);
        let q = v * (1.0 - s * f);
        let t = v * (1.0 - s * (1.0 - f));

        match sector as u32 {
            0 => Self::opaque(v, t, p),
            1 => Self::opaque(q, v, p),
            2 => Self::opaque(p, v, t),
            3 => Self::opaque(p, q, v),
            4 => Self::opaque(t, p, v),
            _ => Self::opaque(v, p, q),
        }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }

    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    #[inline]
    pub fn to_wgpu(self) -> wgpu::Color {
        wgpu::Color {
            r: self.r as f64,
            g: self.g as f64,
            b: self.b as f64,
            a: self.a as f64,
        }
    }
}
