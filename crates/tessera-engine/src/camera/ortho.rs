use glam::{Mat4, Vec2};

use crate::coords::Viewport;

use super::Camera;

/// Depth range covered by [`OrthoCamera::projection`], symmetric around zero.
pub const DEPTH_RANGE: f32 = 1000.0;

/// Axis-aligned 2D camera centered on `position`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct OrthoCamera {
    /// World point shown at the center of the viewport.
    pub position: Vec2,
    /// Zoom: how many pixels one world unit covers.
    pub pixels_per_unit: f32,
}

impl Default for OrthoCamera {
    fn default() -> Self {
        Self { position: Vec2::ZERO, pixels_per_unit: 1.0 }
    }
}

impl OrthoCamera {
    #[inline]
    pub fn new(position: Vec2, pixels_per_unit: f32) -> Self {
        Self { position, pixels_per_unit }
    }

    /// World → clip-space projection for `viewport`.
    ///
    /// Maps the visible world rectangle to NDC `[-1, 1]²`. Larger `z` is nearer:
    /// `z = DEPTH_RANGE` lands on depth 0, `z = -DEPTH_RANGE` on depth 1.
    pub fn projection(&self, viewport: Viewport) -> Mat4 {
        let half = self.view_size(viewport) * 0.5;
        let min = self.position - half;
        let max = self.position + half;
        Mat4::orthographic_rh(min.x, max.x, min.y, max.y, -DEPTH_RANGE, DEPTH_RANGE)
    }
}

impl Camera for OrthoCamera {
    #[inline]
    fn position(&self) -> Vec2 {
        self.position
    }

    fn view_size(&self, viewport: Viewport) -> Vec2 {
        viewport.size() / self.pixels_per_unit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn view_size_divides_by_zoom() {
        let cam = OrthoCamera::new(Vec2::ZERO, 32.0);
        assert_eq!(cam.view_size(Viewport::new(640.0, 320.0)), Vec2::new(20.0, 10.0));
    }

    #[test]
    fn projection_centers_camera() {
        let cam = OrthoCamera::new(Vec2::new(5.0, -3.0), 10.0);
        let proj = cam.projection(Viewport::new(200.0, 100.0));
        let p = proj.project_point3(Vec3::new(5.0, -3.0, 0.0));
        assert!(p.truncate().abs_diff_eq(Vec2::ZERO, 1e-6));
    }

    #[test]
    fn projection_maps_view_corner_to_ndc_corner() {
        let cam = OrthoCamera::new(Vec2::new(5.0, -3.0), 10.0);
        let proj = cam.projection(Viewport::new(200.0, 100.0));
        // View is 20 x 10 world units around the camera.
        let p = proj.project_point3(Vec3::new(15.0, 2.0, 0.0));
        assert!(p.truncate().abs_diff_eq(Vec2::ONE, 1e-5));
    }

    #[test]
    fn depth_range_maps_to_unit_depth() {
        let proj = OrthoCamera::default().projection(Viewport::new(100.0, 100.0));
        let near = proj.project_point3(Vec3::new(0.0, 0.0, crate::camera::DEPTH_RANGE)).z;
        let far = proj.project_point3(Vec3::new(0.0, 0.0, -crate::camera::DEPTH_RANGE)).z;
        assert!(near.abs() < 1e-6, "{near}");
        assert!((far - 1.0).abs() < 1e-6, "{far}");
    }

    #[test]
    fn higher_z_is_nearer() {
        let proj = OrthoCamera::default().projection(Viewport::new(100.0, 100.0));
        let near = proj.project_point3(Vec3::new(0.0, 0.0, 10.0)).z;
        let far = proj.project_point3(Vec3::new(0.0, 0.0, -10.0)).z;
        assert!(near < far);
    }
}
