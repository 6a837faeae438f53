//! Camera for ray generation.
//!
//! The viewing frame is derived from the user's forward and up vectors:
//!
//! ```text
//! right = normalize(up x forward)
//! up'   = normalize(forward x up)
//! ```
//!
//! Both products take the vectors as entered. The image plane sits at
//! `d = (height / 2) / tan(half_vfov)` and a pixel `(i, j)` samples
//! `position - d * forward + u * right + v * up'`, where `u` runs from
//! `+width/2` at `i = 0` down to `-width/2` (the image is mirrored
//! horizontally by construction).

use crate::{Color, Ray};
use prism_core::entity;
use prism_math::Vec3;

/// Render-time camera built from the scene's camera settings.
#[derive(Debug, Clone)]
pub struct Camera {
    // Image settings
    pub image_width: u32,
    pub image_height: u32,
    pub max_depth: u32,

    // Background color
    pub background: Color,

    // Derived frame
    position: Vec3,
    forward: Vec3,
    up: Vec3,
    right: Vec3,

    // Image plane
    half_vfov: f32,
    mid_width: u32,
    mid_height: u32,
    plane_distance: f32,
}

impl Camera {
    /// Derive the viewing frame and image plane from scene settings.
    pub fn new(settings: &entity::Camera) -> Self {
        let forward = settings.forward.normalize_or_zero();
        let up = settings.up;

        let right_raw = up.cross(forward);
        if right_raw.length_squared() <= f32::EPSILON {
            log::warn!(
                "Camera forward {:?} and up {:?} are parallel; rays will be degenerate",
                settings.forward,
                settings.up
            );
        }
        let right = right_raw.normalize_or_zero();
        let up = forward.cross(up).normalize_or_zero();

        let mid_width = settings.width / 2;
        let mid_height = settings.height / 2;
        let plane_distance = mid_height as f32 / settings.half_vfov.to_radians().tan();

        Self {
            image_width: settings.width,
            image_height: settings.height,
            max_depth: settings.max_depth,
            background: settings.background,
            position: settings.position,
            forward,
            up,
            right,
            half_vfov: settings.half_vfov,
            mid_width,
            mid_height,
            plane_distance,
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn forward(&self) -> Vec3 {
        self.forward
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    pub fn right(&self) -> Vec3 {
        self.right
    }

    pub fn half_vfov(&self) -> f32 {
        self.half_vfov
    }

    /// Distance from the camera to the image plane.
    pub fn plane_distance(&self) -> f32 {
        self.plane_distance
    }

    /// Image-plane coordinates `(u, v)` of pixel `(i, j)`'s center.
    pub fn pixel_offset(&self, i: u32, j: u32) -> (f32, f32) {
        let width = self.image_width as f32;
        let height = self.image_height as f32;
        let u = self.mid_width as f32 - width * ((i as f32 + 0.5) / width);
        let v = self.mid_height as f32 - height * ((j as f32 + 0.5) / height);
        (u, v)
    }

    /// Generate the ray through pixel `(i, j)` (column, row).
    pub fn get_ray(&self, i: u32, j: u32) -> Ray {
        let (u, v) = self.pixel_offset(i, j);
        let sample =
            self.position - self.plane_distance * self.forward + u * self.right + v * self.up;
        Ray::new(self.position, sample - self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prism_core::EntityId;

    fn settings(width: u32, height: u32) -> entity::Camera {
        let mut camera = entity::Camera::new(EntityId(1));
        camera.width = width;
        camera.height = height;
        camera
    }

    #[test]
    fn test_frame_from_cross_products() {
        let camera = Camera::new(&settings(640, 480));

        // forward = +Z, up = +Y
        assert_eq!(camera.forward(), Vec3::Z);
        assert!((camera.right() - Vec3::Y.cross(Vec3::Z)).length() < 1e-6);
        assert!((camera.up() - Vec3::Z.cross(Vec3::Y)).length() < 1e-6);
    }

    #[test]
    fn test_frame_uses_unnormalized_inputs() {
        let mut s = settings(64, 64);
        s.forward = Vec3::new(0.0, 0.0, 4.0);
        s.up = Vec3::new(0.0, 3.0, 1.0);
        let camera = Camera::new(&s);

        assert_eq!(camera.forward(), Vec3::Z);
        let right = s.up.cross(Vec3::Z).normalize();
        let up = Vec3::Z.cross(s.up).normalize();
        assert!((camera.right() - right).length() < 1e-6);
        assert!((camera.up() - up).length() < 1e-6);
        assert!((camera.right().length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_plane_distance() {
        let mut s = settings(100, 100);
        s.half_vfov = 45.0;
        let camera = Camera::new(&s);
        // tan(45) = 1, so d = height / 2
        assert!((camera.plane_distance() - 50.0).abs() < 1e-3);

        // Integer halving: 101 rows still give 50.
        let mut odd = settings(100, 101);
        odd.half_vfov = 45.0;
        assert!((Camera::new(&odd).plane_distance() - 50.0).abs() < 1e-3);
    }

    #[test]
    fn test_pixel_offsets_flip_horizontal() {
        let camera = Camera::new(&settings(4, 2));

        assert_eq!(camera.pixel_offset(0, 0), (1.5, 0.5));
        assert_eq!(camera.pixel_offset(3, 0), (-1.5, 0.5));
        assert_eq!(camera.pixel_offset(0, 1), (1.5, -0.5));
    }

    #[test]
    fn test_ray_origin_and_direction() {
        let mut s = settings(8, 6);
        s.position = Vec3::new(1.0, 2.0, 3.0);
        let camera = Camera::new(&s);

        for (i, j) in [(0, 0), (7, 5), (3, 2)] {
            let ray = camera.get_ray(i, j);
            assert_eq!(ray.origin(), s.position);
            assert!((ray.direction().length() - 1.0).abs() < 1e-5);

            let (u, v) = camera.pixel_offset(i, j);
            let target = -camera.plane_distance() * camera.forward()
                + u * camera.right()
                + v * camera.up();
            assert!((ray.direction() - target.normalize()).length() < 1e-5);
        }
    }

    #[test]
    fn test_parallel_vectors_do_not_panic() {
        let mut s = settings(4, 4);
        s.up = Vec3::Z;
        let camera = Camera::new(&s);
        assert_eq!(camera.right(), Vec3::ZERO);
        let _ = camera.get_ray(0, 0);
    }
}
