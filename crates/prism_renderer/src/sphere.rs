//! Sphere primitive for ray casting.

use crate::{
    hittable::{HitInformation, Hittable},
    Material, Ray,
};
use prism_math::{Interval, Vec3};

/// A sphere primitive.
#[derive(Debug, Clone)]
pub struct Sphere {
    center: Vec3,
    radius: f32,
    material: Material,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec3, radius: f32, material: Material) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn material(&self) -> &Material {
        &self.material
    }
}

impl Hittable for Sphere {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitInformation> {
        // |o + t*d - c|^2 = r^2 with |d| = 1, so a = 1.
        let oc = ray.origin() - self.center;
        let b = 2.0 * ray.direction().dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = b * b - 4.0 * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();

        // Nearest root in range: the near surface (D - r), not the far root (D + r).
        let mut root = (-b - sqrtd) / 2.0;
        if !ray_t.surrounds(root) {
            root = (-b + sqrtd) / 2.0;
            if !ray_t.surrounds(root) {
                return None;
            }
        }

        let position = ray.at(root);
        Some(HitInformation {
            dist: root,
            position,
            viewing: ray.direction(),
            normal: (position - self.center).normalize_or_zero(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sphere_at(center: Vec3, radius: f32) -> Sphere {
        Sphere::new(center, radius, Material::default())
    }

    #[test]
    fn test_sphere_hit_front_surface_not_far_root() {
        // Distance D = 10 to the center, radius 3: hit at D - r, never D + r.
        let sphere = sphere_at(Vec3::new(0.0, 0.0, 10.0), 3.0);
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);

        let hit = sphere.hit(&ray, Interval::FORWARD).unwrap();
        assert!((hit.dist - 7.0).abs() < 1e-4);
        assert!((hit.position - Vec3::new(0.0, 0.0, 7.0)).length() < 1e-4);
        assert!((hit.normal - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-4);
        assert_eq!(hit.viewing, Vec3::Z);
    }

    #[test]
    fn test_sphere_hit_off_axis_origin() {
        let center = Vec3::new(2.0, -1.0, 4.0);
        let origin = Vec3::new(-3.0, 5.0, 1.0);
        let sphere = sphere_at(center, 0.5);
        let ray = Ray::new(origin, center - origin);

        let hit = sphere.hit(&ray, Interval::FORWARD).unwrap();
        let expected = (center - origin).length() - 0.5;
        assert!((hit.dist - expected).abs() < 1e-3);
        assert!((hit.normal.length() - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_sphere_miss() {
        let sphere = sphere_at(Vec3::new(0.0, 0.0, 5.0), 1.0);

        // Closest approach is 2.0 > radius.
        let ray = Ray::new(Vec3::new(2.0, 0.0, 0.0), Vec3::Z);
        assert!(sphere.hit(&ray, Interval::FORWARD).is_none());

        // Ray pointing away from sphere
        let away = Ray::new(Vec3::ZERO, Vec3::new(0.0, 1.0, 0.0));
        assert!(sphere.hit(&away, Interval::FORWARD).is_none());
    }

    #[test]
    fn test_sphere_behind_ray_is_miss() {
        let sphere = sphere_at(Vec3::new(0.0, 0.0, -5.0), 1.0);
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        assert!(sphere.hit(&ray, Interval::FORWARD).is_none());
    }

    #[test]
    fn test_origin_inside_reports_exit() {
        let sphere = sphere_at(Vec3::ZERO, 2.0);
        let ray = Ray::new(Vec3::ZERO, Vec3::X);

        let hit = sphere.hit(&ray, Interval::FORWARD).unwrap();
        assert!((hit.dist - 2.0).abs() < 1e-4);
        assert!((hit.normal - Vec3::X).length() < 1e-4);
    }

    #[test]
    fn test_interval_limits_hit() {
        let sphere = sphere_at(Vec3::new(0.0, 0.0, 10.0), 1.0);
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);

        // Only the back surface (t = 11) lies past 10.
        let hit = sphere.hit(&ray, Interval::new(10.0, f32::INFINITY)).unwrap();
        assert!((hit.dist - 11.0).abs() < 1e-4);

        assert!(sphere.hit(&ray, Interval::new(0.0, 5.0)).is_none());
    }
}
