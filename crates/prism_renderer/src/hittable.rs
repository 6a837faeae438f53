//! Hittable trait, HitInformation and nearest-hit resolution.

use crate::{Ray, Sphere};
use prism_math::{Interval, Vec3};

/// Record of a ray-object intersection.
///
/// Lives only while a single pixel is being evaluated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitInformation {
    /// Distance along the ray
    pub dist: f32,
    /// Point of intersection
    pub position: Vec3,
    /// Direction of the incoming ray
    pub viewing: Vec3,
    /// Outward unit normal at the intersection
    pub normal: Vec3,
}

/// Trait for objects that can be hit by rays.
pub trait Hittable {
    /// Test if a ray hits this object strictly inside `ray_t`.
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitInformation>;
}

/// Closed set of render-time primitives.
#[derive(Debug, Clone)]
pub enum Primitive {
    Sphere(Sphere),
}

impl Hittable for Primitive {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitInformation> {
        match self {
            Primitive::Sphere(sphere) => sphere.hit(ray, ray_t),
        }
    }
}

impl From<Sphere> for Primitive {
    fn from(sphere: Sphere) -> Self {
        Primitive::Sphere(sphere)
    }
}

/// An ordered list of primitives.
#[derive(Debug, Clone, Default)]
pub struct PrimitiveList {
    objects: Vec<Primitive>,
}

impl PrimitiveList {
    /// Create a new empty list.
    pub fn new() -> Self {
        Self { objects: Vec::new() }
    }

    /// Add an object to the list.
    pub fn add(&mut self, object: impl Into<Primitive>) {
        self.objects.push(object.into());
    }

    /// Get the number of objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Primitive> {
        self.objects.iter()
    }

    /// Nearest hit in front of the ray origin.
    pub fn find_nearest(&self, ray: &Ray) -> Option<HitInformation> {
        self.hit(ray, Interval::FORWARD)
    }

    /// Nearest hit inside `ray_t` together with the index of the object hit.
    ///
    /// Objects are tested in order. A later hit only replaces the current
    /// one when strictly closer, so ties go to the earlier object.
    pub fn find_nearest_indexed(
        &self,
        ray: &Ray,
        ray_t: Interval,
    ) -> Option<(usize, HitInformation)> {
        let mut closest = None;
        let mut closest_so_far = ray_t.max;

        for (index, object) in self.objects.iter().enumerate() {
            let interval = Interval::new(ray_t.min, closest_so_far);
            if let Some(hit) = object.hit(ray, interval) {
                closest_so_far = hit.dist;
                closest = Some((index, hit));
            }
        }

        closest
    }
}

impl FromIterator<Primitive> for PrimitiveList {
    fn from_iter<I: IntoIterator<Item = Primitive>>(iter: I) -> Self {
        Self {
            objects: iter.into_iter().collect(),
        }
    }
}

impl Hittable for PrimitiveList {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitInformation> {
        self.find_nearest_indexed(ray, ray_t).map(|(_, hit)| hit)
    }
}
