use winit::dpi::PhysicalSize;

/// Drawable area in logical pixels.
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

    /// Converts a physical surface size using the window scale factor.
    pub fn from_physical(size: PhysicalSize<u32>, scale_factor: f64) -> Self {
        let logical = size.to_logical::<f64>(scale_factor);
        Self::new(logical.width as f32, logical.height as f32)
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// Width over height; minimized (zero-sized) windows report a square aspect.
    #[inline]
    pub fn aspect(self) -> f32 {
        if self.is_valid() {
            self.width / self.height
        } else {
            1.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aspect_of_landscape_viewport() {
        assert_eq!(Viewport::new(800.0, 400.0).aspect(), 2.0);
    }

    #[test]
    fn degenerate_viewport_is_square() {
        assert!(!Viewport::new(0.0, 600.0).is_valid());
        assert_eq!(Viewport::new(0.0, 600.0).aspect(), 1.0);
        assert_eq!(Viewport::new(f32::NAN, 1.0).aspect(), 1.0);
    }

    #[test]
    fn from_physical_divides_by_scale() {
        let v = Viewport::from_physical(PhysicalSize::new(1600, 1200), 2.0);
        assert_eq!(v, Viewport::new(800.0, 600.0));
    }
}
