/// Pixel size of the region a viewer draws into.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl SurfaceSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width over height, or `None` for a surface with no area.
    pub fn aspect_ratio(&self) -> Option<f32> {
        if self.width == 0 || self.height == 0 {
            return None;
        }
        Some(self.width as f32 / self.height as f32)
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(800, 600, 4.0 / 3.0)]
    #[case(400, 300, 4.0 / 3.0)]
    #[case(1920, 1080, 16.0 / 9.0)]
    #[case(300, 600, 0.5)]
    fn test_aspect_ratio(#[case] width: u32, #[case] height: u32, #[case] expected: f32) {
        let aspect = SurfaceSize::new(width, height).aspect_ratio().unwrap();
        assert!((aspect - expected).abs() < 1e-6);
    }

    #[rstest]
    #[case(0, 600)]
    #[case(800, 0)]
    #[case(0, 0)]
    fn test_empty_surface_has_no_aspect(#[case] width: u32, #[case] height: u32) {
        let size = SurfaceSize::new(width, height);
        assert!(size.is_empty());
        assert_eq!(size.aspect_ratio(), None);
    }
}
