//! Conversion from the editable scene to immutable render-time data.

use prism_core::{Light, Scene, Shape};

use crate::{Camera, Material, Primitive, PrimitiveList, Sphere};

/// Everything a render reads, snapshotted from a `Scene`.
#[derive(Debug, Clone)]
pub struct World {
    pub camera: Camera,
    pub primitives: PrimitiveList,
    /// Carried along for completeness; the hit/miss pass does not light.
    pub lights: Vec<Light>,
}

impl World {
    /// Snapshot `scene`, resolving each geometry's material by value.
    pub fn from_scene(scene: &Scene) -> Self {
        let primitives = scene
            .geometry()
            .iter()
            .map(|geometry| {
                let material = match scene.material_for(geometry) {
                    Some(material) => Material::from(material),
                    None => {
                        log::warn!(
                            "Geometry {} refers to missing material {}",
                            geometry.id,
                            geometry.material
                        );
                        Material::default()
                    }
                };

                match geometry.shape {
                    Shape::Sphere(sphere) => {
                        Primitive::Sphere(Sphere::new(sphere.center, sphere.radius, material))
                    }
                }
            })
            .collect();

        Self {
            camera: Camera::new(scene.camera()),
            primitives,
            lights: scene.lights().to_vec(),
        }
    }
}
