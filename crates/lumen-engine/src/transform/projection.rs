use glam::Mat4;

use crate::coords::Viewport;

/// Perspective camera used by every scene.
///
/// Right-handed, looking down -Z, depth mapped to wgpu's `0..1` range.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Projection {
    /// Vertical field of view, in degrees.
    pub fov_y_degrees: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            fov_y_degrees: 45.0,
            near: 0.1,
            far: 100.0,
        }
    }
}

impl Projection {
    /// Builds the projection matrix for `viewport`.
    pub fn matrix(&self, viewport: Viewport) -> Mat4 {
        Mat4::perspective_rh(
            self.fov_y_degrees.to_radians(),
            viewport.aspect(),
            self.near,
            self.far,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;

    #[test]
    fn near_plane_maps_to_zero_depth() {
        let p = Projection::default().matrix(Viewport::new(800.0, 600.0));
        let clip = p * Vec4::new(0.0, 0.0, -0.1, 1.0);
        assert!((clip.z / clip.w).abs() < 1e-5);
    }

    #[test]
    fn far_plane_maps_to_unit_depth() {
        let p = Projection::default().matrix(Viewport::new(800.0, 600.0));
        let clip = p * Vec4::new(0.0, 0.0, -100.0, 1.0);
        assert!((clip.z / clip.w - 1.0).abs() < 1e-4);
    }

    #[test]
    fn zero_sized_viewport_uses_square_aspect() {
        let proj = Projection::default();
        assert_eq!(
            proj.matrix(Viewport::new(0.0, 0.0)),
            proj.matrix(Viewport::new(10.0, 10.0)),
        );
    }
}
