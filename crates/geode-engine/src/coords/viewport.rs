/// Drawable surface extent in physical pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn from_physical(width: u32, height: u32) -> Self {
        Self::new(width as f32, height as f32)
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// Width over height, or `None` for a degenerate surface.
    #[inline]
    pub fn aspect(self) -> Option<f32> {
        self.is_valid().then(|| self.width / self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aspect_of_valid_surface() {
        assert_eq!(Viewport::from_physical(1600, 800).aspect(), Some(2.0));
    }

    #[test]
    fn zero_size_has_no_aspect() {
        assert_eq!(Viewport::from_physical(0, 800).aspect(), None);
        assert_eq!(Viewport::new(f32::INFINITY, 1.0).aspect(), None);
    }
}
